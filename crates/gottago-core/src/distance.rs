//! Great-circle distance between coordinate pairs.
//!
//! Used to label results with their distance from the search center. The
//! upstream engine already sorts by proximity; this only annotates.

use crate::place::Coordinates;

const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Haversine distance in miles between two points.
#[must_use]
pub fn haversine_miles(a: Coordinates, b: Coordinates) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_MILES * h.sqrt().asin()
}

/// Formats a distance the way the result cards show it, e.g. `"0.4 mi"`.
#[must_use]
pub fn format_miles(miles: f64) -> String {
    format!("{miles:.1} mi")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(latitude: f64, longitude: f64) -> Coordinates {
        Coordinates {
            latitude,
            longitude,
        }
    }

    #[test]
    fn zero_distance_for_identical_points() {
        let p = point(40.7128, -74.006);
        assert!(haversine_miles(p, p).abs() < 1e-9);
    }

    #[test]
    fn manhattan_to_brooklyn_is_a_few_miles() {
        // City Hall to Barclays Center, roughly 4 miles.
        let city_hall = point(40.7127, -74.0059);
        let barclays = point(40.6826, -73.9754);
        let miles = haversine_miles(city_hall, barclays);
        assert!((2.0..6.0).contains(&miles), "got {miles}");
    }

    #[test]
    fn format_rounds_to_one_decimal() {
        assert_eq!(format_miles(0.44), "0.4 mi");
        assert_eq!(format_miles(1.06), "1.1 mi");
    }
}
