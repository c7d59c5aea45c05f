//! Route type.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// An ordered visiting sequence over a set of coordinates.
///
/// A route produced by the optimizer is a permutation of its input set: no
/// duplicate coordinate, no missing coordinate, length equal to the input set
/// size. Routes are immutable; operators that change an ordering return a new
/// `Route` rather than mutating in place, so a route can safely serve as a
/// parent in several recombination events of the same generation.
///
/// # Examples
///
/// ```
/// use u_georoute::models::{Coordinate, Route};
///
/// let points = vec![
///     Coordinate::new("a", 0.0, 0.0).unwrap(),
///     Coordinate::new("b", 0.0, 1.0).unwrap(),
/// ];
/// let route = Route::new(points.clone());
/// assert_eq!(route.len(), 2);
/// assert!(route.is_permutation_of(&points));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    points: Vec<Coordinate>,
}

impl Route {
    /// Creates a route visiting the given coordinates in order.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Creates a route with no points.
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Returns the coordinates in visiting order.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the route and returns its coordinates.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    /// Returns the number of points in this route.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the route has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if this route visits exactly the given point set.
    ///
    /// Checks multiset equality: same length and the same number of
    /// occurrences of every coordinate, regardless of order.
    pub fn is_permutation_of(&self, points: &[Coordinate]) -> bool {
        self.points.len() == points.len()
            && points.iter().all(|p| {
                let want = points.iter().filter(|q| *q == p).count();
                let have = self.points.iter().filter(|q| *q == p).count();
                want == have
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(id: &str, lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(id, lat, lon).expect("valid")
    }

    #[test]
    fn test_route_empty() {
        let r = Route::empty();
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert!(r.is_permutation_of(&[]));
    }

    #[test]
    fn test_route_points_in_order() {
        let a = point("a", 0.0, 0.0);
        let b = point("b", 1.0, 1.0);
        let r = Route::new(vec![a.clone(), b.clone()]);
        assert_eq!(r.points(), &[a.clone(), b.clone()]);
        assert_eq!(r.into_points(), vec![a, b]);
    }

    #[test]
    fn test_route_permutation_check() {
        let a = point("a", 0.0, 0.0);
        let b = point("b", 1.0, 1.0);
        let c = point("c", 2.0, 2.0);

        let r = Route::new(vec![b.clone(), a.clone(), c.clone()]);
        assert!(r.is_permutation_of(&[a.clone(), b.clone(), c.clone()]));

        // Missing point
        assert!(!r.is_permutation_of(&[a.clone(), b.clone()]));

        // Duplicate replaces a member
        let dup = Route::new(vec![a.clone(), a.clone(), c.clone()]);
        assert!(!dup.is_permutation_of(&[a, b, c]));
    }

    #[test]
    fn test_route_serializes_as_point_list() {
        let r = Route::new(vec![point("a", 0.0, 0.0)]);
        let json = serde_json::to_value(&r).expect("serializable");
        assert!(json.is_array());
        assert_eq!(json[0]["id"], "a");
    }
}
