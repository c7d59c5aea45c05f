//! Great-circle distance between geographic coordinates.

mod haversine;

pub use haversine::{haversine, EARTH_RADIUS_M};
