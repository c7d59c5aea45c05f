//! Initial population seeding.

use rand::Rng;

use crate::models::{Coordinate, Route};
use crate::random::shuffle;

/// Seeds an initial population of random route permutations.
///
/// Produces exactly `population_size` routes, each an independent uniform
/// permutation of `points`. An empty `points` slice yields an empty
/// population rather than an error — the engine treats that as "nothing to
/// optimize". A singleton slice yields `population_size` copies of the
/// one-point route.
///
/// # Examples
///
/// ```
/// use u_georoute::ga::population;
/// use u_georoute::models::Coordinate;
///
/// let points = vec![
///     Coordinate::new("a", 0.0, 0.0).unwrap(),
///     Coordinate::new("b", 0.0, 1.0).unwrap(),
///     Coordinate::new("c", 1.0, 1.0).unwrap(),
/// ];
/// let mut rng = u_georoute::random::create_rng(42);
/// let routes = population::initialize(&points, 10, &mut rng);
/// assert_eq!(routes.len(), 10);
/// assert!(routes.iter().all(|r| r.is_permutation_of(&points)));
/// ```
pub fn initialize<R: Rng>(
    points: &[Coordinate],
    population_size: usize,
    rng: &mut R,
) -> Vec<Route> {
    if points.is_empty() {
        return Vec::new();
    }

    (0..population_size)
        .map(|_| {
            let mut permutation = points.to_vec();
            shuffle(&mut permutation, rng);
            Route::new(permutation)
        })
        .collect()
}
