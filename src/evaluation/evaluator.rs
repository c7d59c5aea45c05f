//! Open-path route length evaluation.

use crate::distance::haversine;
use crate::models::{Coordinate, Route};

/// Returns the total length of a route in meters.
///
/// The cost model is an **open path**: the sum of the haversine distance over
/// each consecutive pair of points, with no return leg from the last point
/// back to the first. Many TSP formulations assume a closed tour; this system
/// deliberately does not — the route has a fixed start and end.
///
/// A route of length 0 or 1 has cost `0.0`. Lower is better.
///
/// # Examples
///
/// ```
/// use u_georoute::evaluation::route_length;
/// use u_georoute::models::{Coordinate, Route};
///
/// let route = Route::new(vec![
///     Coordinate::new("a", 0.0, 0.0).unwrap(),
///     Coordinate::new("b", 0.0, 1.0).unwrap(),
///     Coordinate::new("c", 0.0, 2.0).unwrap(),
/// ]);
/// // Two one-degree legs along the equator.
/// assert!((route_length(&route) - 2.0 * 111_194.93).abs() < 2.0);
/// ```
pub fn route_length(route: &Route) -> f64 {
    path_length(route.points())
}

/// Returns the open-path length of a point sequence in meters.
///
/// Same cost model as [`route_length`], usable before a sequence has been
/// wrapped into a [`Route`].
pub fn path_length(points: &[Coordinate]) -> f64 {
    points
        .windows(2)
        .map(|pair| haversine(&pair[0], &pair[1]))
        .sum()
}
