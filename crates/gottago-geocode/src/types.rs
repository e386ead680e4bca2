//! Nominatim response types.

use gottago_core::place::Coordinates;
use serde::Deserialize;

/// One raw search hit from the Nominatim `/search` endpoint.
///
/// Nominatim serializes `lat`/`lon` as strings; parsing to `f64` happens in
/// the client so a bad value is a distinguishable error, not a NaN.
#[derive(Debug, Deserialize)]
pub struct NominatimHit {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: String,
}

/// A resolved search center.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedLocation {
    pub coordinates: Coordinates,
    pub display_name: String,
}
