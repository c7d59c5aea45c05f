//! Genetic operators over routes.
//!
//! Both operators preserve the route validity invariant: the output visits
//! exactly the point set of its input(s). They return new [`Route`] values
//! instead of mutating, so a route can act as a parent several times within
//! one generation without aliasing surprises.

use rand::Rng;

use crate::models::{Coordinate, Route};

/// Ordered single-point crossover.
///
/// Picks a cut index `k` uniformly in `[0, len)`. The child takes `a`'s
/// prefix up to `k`, then the points of `b` that are not already in the
/// prefix, in `b`'s relative order. When the parents are permutations of the
/// same point set this yields a valid permutation: no duplicates, no
/// omissions.
///
/// Parents over different point sets are a programmer error; the mismatch is
/// caught by debug assertions only.
///
/// Edge cases: `k == 0` reproduces `b`; empty parents yield an empty child.
///
/// # Complexity
/// O(n²) — each donor point is checked against the prefix by value.
pub fn cut_crossover<R: Rng>(a: &Route, b: &Route, rng: &mut R) -> Route {
    debug_assert_eq!(
        a.len(),
        b.len(),
        "parents must be permutations of the same point set"
    );
    if a.is_empty() {
        return Route::empty();
    }
    let k = rng.random_range(0..a.len());
    splice(a, b, k)
}

/// Builds the crossover child for an explicit cut index.
///
/// `k == len` degenerates to a copy of `a` (empty donor contribution).
fn splice(a: &Route, b: &Route, k: usize) -> Route {
    let prefix = &a.points()[..k];
    let mut child: Vec<Coordinate> = prefix.to_vec();
    child.extend(
        b.points()
            .iter()
            .filter(|p| !prefix.contains(p))
            .cloned(),
    );
    debug_assert_eq!(
        child.len(),
        a.len(),
        "parents must be permutations of the same point set"
    );
    Route::new(child)
}

/// Swap mutation: exchanges the points at two uniformly random indices.
///
/// The indices are drawn independently, so they may coincide — in that case
/// the returned route equals the input, which is acceptable since mutation
/// is probabilistic across a generation. The point multiset is preserved for
/// every index pair, so validity holds automatically.
///
/// # Complexity
/// O(n) for the copy; the swap itself is O(1).
pub fn swap_mutation<R: Rng>(route: &Route, rng: &mut R) -> Route {
    let n = route.len();
    if n < 2 {
        return route.clone();
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    let mut points = route.points().to_vec();
    points.swap(i, j);
    Route::new(points)
}
