use crate::models::Coordinate;

/// Earth's radius in statute miles
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Calculate the Haversine distance between two points in miles
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in miles
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Haversine distance between two coordinates, in miles
#[inline]
pub fn distance_between(from: Coordinate, to: Coordinate) -> f64 {
    haversine_distance(from.lat, from.lng, to.lat, to.lng)
}

/// Render a distance for list items and map popups
pub fn format_distance(miles: f64) -> String {
    if miles < 0.1 {
        "< 0.1 mi".to_string()
    } else {
        format!("{:.1} mi", miles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance() {
        // London to Paris is roughly 213 miles
        let distance = haversine_distance(51.5074, -0.1278, 48.8566, 2.3522);
        assert!((distance - 213.5).abs() < 1.0, "Distance should be ~213mi, got {}", distance);
    }

    #[test]
    fn test_haversine_symmetry() {
        let a = haversine_distance(37.7749, -122.4194, 30.2672, -97.7431);
        let b = haversine_distance(30.2672, -97.7431, 37.7749, -122.4194);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_same_point() {
        assert_eq!(haversine_distance(37.7749, -122.4194, 37.7749, -122.4194), 0.0);
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0.04), "< 0.1 mi");
        assert_eq!(format_distance(0.0), "< 0.1 mi");
        assert_eq!(format_distance(0.1), "0.1 mi");
        assert_eq!(format_distance(0.46), "0.5 mi");
        assert_eq!(format_distance(2.34), "2.3 mi");
        assert_eq!(format_distance(12.0), "12.0 mi");
    }
}
