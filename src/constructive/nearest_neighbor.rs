//! Nearest-neighbor constructive heuristic.
//!
//! Builds a route greedily: starting from the first submitted point, always
//! visit the nearest unvisited coordinate. Uses the same open-path model as
//! the evaluator — no return leg to the start.
//!
//! # Complexity
//!
//! O(n²) where n = number of points.

use crate::distance::haversine;
use crate::models::{Coordinate, Route};

/// Constructs a route by repeatedly visiting the nearest unvisited point.
///
/// The route starts at `points[0]` (submission order decides the start).
/// Deterministic, so it doubles as a reproducible baseline against the
/// genetic engine. Empty and singleton inputs are returned as-is.
///
/// # Examples
///
/// ```
/// use u_georoute::constructive::nearest_neighbor;
/// use u_georoute::models::Coordinate;
///
/// let points = vec![
///     Coordinate::new("start", 0.0, 0.0).unwrap(),
///     Coordinate::new("far", 0.0, 3.0).unwrap(),
///     Coordinate::new("near", 0.0, 1.0).unwrap(),
/// ];
/// let route = nearest_neighbor(&points);
/// let ids: Vec<_> = route.points().iter().map(|p| p.id()).collect();
/// assert_eq!(ids, vec!["start", "near", "far"]);
/// ```
pub fn nearest_neighbor(points: &[Coordinate]) -> Route {
    if points.len() <= 1 {
        return Route::new(points.to_vec());
    }

    let n = points.len();
    let mut visited = vec![false; n];
    visited[0] = true;
    let mut ordered = Vec::with_capacity(n);
    ordered.push(points[0].clone());
    let mut current = 0;

    for _ in 1..n {
        let mut best: Option<(usize, f64)> = None;
        for (i, candidate) in points.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let d = haversine(&points[current], candidate);
            if best.is_none() || d < best.expect("checked is_none").1 {
                best = Some((i, d));
            }
        }
        let (next, _) = best.expect("unvisited point remains");
        visited[next] = true;
        ordered.push(points[next].clone());
        current = next;
    }

    Route::new(ordered)
}
