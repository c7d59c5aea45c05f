//! Haversine great-circle distance.

use crate::models::Coordinate;

/// Mean Earth radius in meters, as used by the haversine formula.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Returns the great-circle distance between two coordinates in meters.
///
/// Uses the haversine formula over a spherical Earth of radius
/// [`EARTH_RADIUS_M`]. The result is non-negative, symmetric in its
/// arguments, and zero for two points at the same position.
///
/// # Examples
///
/// ```
/// use u_georoute::distance::haversine;
/// use u_georoute::models::Coordinate;
///
/// let a = Coordinate::new("a", 0.0, 0.0).unwrap();
/// let b = Coordinate::new("b", 0.0, 1.0).unwrap();
/// // One degree of longitude at the equator is roughly 111.19 km.
/// assert!((haversine(&a, &b) - 111_194.93).abs() < 1.0);
/// ```
pub fn haversine(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lon = (b.longitude() - a.longitude()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(id: &str, lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(id, lat, lon).expect("valid")
    }

    /// Meters in one degree of arc on the model sphere.
    const DEGREE_M: f64 = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;

    #[test]
    fn test_zero_for_same_position() {
        let a = point("a", 12.5, -7.25);
        let b = point("b", 12.5, -7.25);
        assert!(a.same_position(&b));
        assert_eq!(haversine(&a, &a), 0.0);
        assert!(haversine(&a, &b).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric() {
        let a = point("a", 48.85, 2.35);
        let b = point("b", 51.51, -0.13);
        assert!((haversine(&a, &b) - haversine(&b, &a)).abs() < 1e-9);
    }

    #[test]
    fn test_one_degree_longitude_at_equator() {
        let a = point("a", 0.0, 0.0);
        let b = point("b", 0.0, 1.0);
        assert!((haversine(&a, &b) - DEGREE_M).abs() < 1e-6);
    }

    #[test]
    fn test_one_degree_latitude() {
        // A degree of latitude has the same arc length at any longitude.
        let a = point("a", 10.0, 42.0);
        let b = point("b", 11.0, 42.0);
        assert!((haversine(&a, &b) - DEGREE_M).abs() < 1e-6);
    }

    #[test]
    fn test_antipodal_is_half_circumference() {
        let a = point("a", 0.0, 0.0);
        let b = point("b", 0.0, 180.0);
        let half = EARTH_RADIUS_M * std::f64::consts::PI;
        assert!((haversine(&a, &b) - half).abs() < 1e-6);
    }

    #[test]
    fn test_non_negative() {
        let a = point("a", -33.86, 151.2);
        let b = point("b", 40.71, -74.0);
        assert!(haversine(&a, &b) > 0.0);
    }
}
