//! Dive entries: a single dive with its location and environment readings.

use chrono::{DateTime, Utc};

use super::Sighting;

/// Server-generated identifier of a dive entry.
///
/// # Examples
/// ```
/// use nudilog::domain::DiveEntryId;
///
/// let id = DiveEntryId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiveEntryId(i64);

impl DiveEntryId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Return the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for DiveEntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fields supplied when logging a new dive.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDiveEntry {
    pub dive_date: DateTime<Utc>,
    pub location_name: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// Average depth in metres.
    pub av_depth_m: Option<f64>,
    /// Average water temperature in degrees Celsius.
    pub av_water_temp_c: Option<f64>,
    pub habitat: Option<String>,
}

/// A persisted dive together with every sighting recorded against it.
///
/// Sightings are ordered by creation.
#[derive(Debug, Clone, PartialEq)]
pub struct DiveEntry {
    pub id: DiveEntryId,
    pub dive_date: DateTime<Utc>,
    pub location_name: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub av_depth_m: Option<f64>,
    pub av_water_temp_c: Option<f64>,
    pub habitat: Option<String>,
    pub sightings: Vec<Sighting>,
}

impl DiveEntry {
    /// Build a dive entry from its stored fields and loaded sightings.
    pub fn from_parts(id: DiveEntryId, fields: NewDiveEntry, sightings: Vec<Sighting>) -> Self {
        let NewDiveEntry {
            dive_date,
            location_name,
            lat,
            lon,
            av_depth_m,
            av_water_temp_c,
            habitat,
        } = fields;
        Self {
            id,
            dive_date,
            location_name,
            lat,
            lon,
            av_depth_m,
            av_water_temp_c,
            habitat,
            sightings,
        }
    }
}
