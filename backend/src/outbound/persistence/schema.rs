//! Diesel table definitions.
//!
//! Kept in step with `backend/migrations`. Internal to the persistence
//! adapter.

diesel::table! {
    /// Logged dives.
    dive_entries (id) {
        /// Autoincrementing primary key.
        id -> BigInt,
        /// Dive start, stored as UTC.
        dive_date -> Timestamp,
        location_name -> Text,
        lat -> Nullable<Double>,
        lon -> Nullable<Double>,
        /// Average depth in metres.
        av_depth_m -> Nullable<Double>,
        /// Average water temperature in degrees Celsius.
        av_water_temp_c -> Nullable<Double>,
        habitat -> Nullable<Text>,
    }
}

diesel::table! {
    /// Photos recorded against a dive entry.
    sightings (id) {
        /// Autoincrementing primary key.
        id -> BigInt,
        /// Owning dive entry.
        dive_entry_id -> BigInt,
        /// Sanitised original filename.
        filename -> Text,
        /// Where the bytes were written.
        file_path -> Text,
    }
}

diesel::joinable!(sightings -> dive_entries (dive_entry_id));

diesel::allow_tables_to_appear_in_same_query!(dive_entries, sightings);
