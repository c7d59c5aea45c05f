//! Domain model types for geographic route optimization.
//!
//! Provides the core abstractions: validated geographic coordinates and
//! routes as ordered permutations of a coordinate set.

mod coordinate;
mod route;

pub use coordinate::Coordinate;
pub use route::Route;
