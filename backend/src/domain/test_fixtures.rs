//! Shared sample values for domain and adapter unit tests.

use chrono::{TimeZone, Utc};

use super::{DiveEntry, DiveEntryId, NewDiveEntry, Sighting, SightingId};

pub(crate) fn blue_hole_dive() -> NewDiveEntry {
    NewDiveEntry {
        dive_date: Utc
            .with_ymd_and_hms(2024, 5, 1, 10, 0, 0)
            .single()
            .expect("valid timestamp"),
        location_name: "Blue Hole".to_owned(),
        lat: Some(17.3159),
        lon: Some(-87.5348),
        av_depth_m: Some(18.5),
        av_water_temp_c: Some(27.0),
        habitat: Some("coral wall".to_owned()),
    }
}

pub(crate) fn sighting(id: i64, dive_entry_id: i64, filename: &str) -> Sighting {
    Sighting {
        id: SightingId::new(id),
        dive_entry_id: DiveEntryId::new(dive_entry_id),
        filename: filename.to_owned(),
        file_path: format!("uploads/{filename}"),
    }
}

pub(crate) fn stored_dive(id: i64, sightings: Vec<Sighting>) -> DiveEntry {
    DiveEntry::from_parts(DiveEntryId::new(id), blue_hole_dive(), sightings)
}
