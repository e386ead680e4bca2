//! Normalized place records and the user's search reference point.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// The user's search center: geolocation, a geocoded address, or manual entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub coordinates: Coordinates,
    /// Human-readable label, e.g. a geocoder display name or "Your location".
    pub label: String,
}

impl ReferencePoint {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, label: impl Into<String>) -> Self {
        Self {
            coordinates: Coordinates {
                latitude,
                longitude,
            },
            label: label.into(),
        }
    }
}

/// Whether a place is currently open.
///
/// The upstream response carries no reliable open/closed signal, so the
/// normalizer emits `Unknown` rather than asserting open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenStatus {
    Open,
    Closed,
    Unknown,
}

/// One rendering-ready search result, normalized from an upstream business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    /// Upstream-assigned id. Unique within one response batch only.
    pub id: String,
    pub name: String,
    /// Joined upstream category titles, `"Business"` when none.
    pub category_label: String,
    /// Rating, 0.0 when the upstream omits it.
    pub score: f64,
    /// Derived feature tags in a fixed order: price, wheelchair access,
    /// gender-neutral restroom.
    pub tags: Vec<String>,
    /// Best-available formatted address, empty when the upstream has none.
    pub address: String,
    /// Absent coordinates do not drop the record; the map skips the pin.
    pub coordinates: Option<Coordinates>,
    pub url: Option<String>,
    /// Upstream text blurbs in short/medium/long order.
    pub summaries: Vec<String>,
    pub contextual_info: Option<String>,
    pub open_status: OpenStatus,
    /// Human-readable distance from the reference point, filled by the
    /// session layer when both coordinates are known.
    pub distance: Option<String>,
}
