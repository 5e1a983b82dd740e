//! Address types produced by the primary geocode provider.

use serde::{Deserialize, Serialize};

/// A point in mapping order: latitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Converts a provider point given as `[lon, lat]` into mapping order.
    #[must_use]
    pub fn from_lon_lat(point: [f64; 2]) -> Self {
        let [lon, lat] = point;
        Self { lat, lon }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lon)
    }
}

/// One autocomplete candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionItem {
    /// Provider address id, unique within one suggestion list.
    pub id: String,
    pub display_text: String,
    /// The unmodified provider record.
    pub raw: serde_json::Value,
}

/// Full address record returned by the detail lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressDetail {
    pub id: String,
    pub coordinates: Coordinates,
    pub raw: serde_json::Value,
}
