//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

/// A geographic point submitted for route optimization.
///
/// Latitude is in degrees within `[-90, 90]`, longitude within `[-180, 180]`.
/// Coordinates are immutable once created and compare by value (id plus
/// position), so set-membership checks are independent of container position.
///
/// # Examples
///
/// ```
/// use u_georoute::models::Coordinate;
///
/// let c = Coordinate::new("warehouse", -23.55, -46.63).unwrap();
/// assert_eq!(c.id(), "warehouse");
/// assert!((c.latitude() + 23.55).abs() < 1e-10);
///
/// assert!(Coordinate::new("bad-lat", 91.0, 0.0).is_none());
/// assert!(Coordinate::new("bad-lon", 0.0, 200.0).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    id: String,
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// Returns `None` if either component is non-finite or outside the valid
    /// degree range.
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64) -> Option<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return None;
        }
        Some(Self {
            id: id.into(),
            latitude,
            longitude,
        })
    }

    /// Identifier of the submitter or stop this point belongs to.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns `true` if both points are at the same position.
    ///
    /// Ignores the id, unlike `==` which compares the full value.
    pub fn same_position(&self, other: &Coordinate) -> bool {
        self.latitude == other.latitude && self.longitude == other.longitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_valid() {
        let c = Coordinate::new("a", 10.0, 20.0).expect("valid");
        assert_eq!(c.id(), "a");
        assert_eq!(c.latitude(), 10.0);
        assert_eq!(c.longitude(), 20.0);
    }

    #[test]
    fn test_coordinate_bounds() {
        assert!(Coordinate::new("n", 90.0, 180.0).is_some());
        assert!(Coordinate::new("s", -90.0, -180.0).is_some());
        assert!(Coordinate::new("x", 90.1, 0.0).is_none());
        assert!(Coordinate::new("x", -90.1, 0.0).is_none());
        assert!(Coordinate::new("x", 0.0, 180.1).is_none());
        assert!(Coordinate::new("x", 0.0, -180.1).is_none());
    }

    #[test]
    fn test_coordinate_non_finite() {
        assert!(Coordinate::new("x", f64::NAN, 0.0).is_none());
        assert!(Coordinate::new("x", 0.0, f64::INFINITY).is_none());
        assert!(Coordinate::new("x", f64::NEG_INFINITY, 0.0).is_none());
    }

    #[test]
    fn test_coordinate_value_equality() {
        let a = Coordinate::new("a", 1.0, 2.0).expect("valid");
        let b = Coordinate::new("a", 1.0, 2.0).expect("valid");
        let c = Coordinate::new("c", 1.0, 2.0).expect("valid");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.same_position(&c));
    }

    #[test]
    fn test_coordinate_json_shape() {
        let c = Coordinate::new("stop-1", -23.5, -46.6).expect("valid");
        let json = serde_json::to_value(&c).expect("serializable");
        assert_eq!(json["id"], "stop-1");
        assert_eq!(json["latitude"], -23.5);
        assert_eq!(json["longitude"], -46.6);

        let back: Coordinate = serde_json::from_value(json).expect("deserializable");
        assert_eq!(back, c);
    }
}
