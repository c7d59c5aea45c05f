//! Coordinate accumulation buffer.
//!
//! Callers typically submit coordinates one at a time and request a route
//! once the set is complete. [`CoordinateStore`] holds the submitted points
//! until then. The optimizer itself never touches this type — it receives an
//! explicit point slice per call — so the buffer is the only shared mutable
//! state in the crate.

use std::sync::Mutex;

use crate::models::Coordinate;

/// A thread-safe buffer of submitted coordinates.
///
/// Wrap it in an `Arc` to share between request handlers. There is no
/// persistence: the buffer is empty on creation and its contents are lost
/// on drop.
///
/// # Examples
///
/// ```
/// use u_georoute::models::Coordinate;
/// use u_georoute::store::CoordinateStore;
///
/// let store = CoordinateStore::new();
/// store.add(Coordinate::new("a", 0.0, 0.0).unwrap());
/// store.add(Coordinate::new("b", 0.0, 1.0).unwrap());
/// assert_eq!(store.len(), 2);
///
/// let points = store.take();
/// assert_eq!(points.len(), 2);
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct CoordinateStore {
    points: Mutex<Vec<Coordinate>>,
}

impl CoordinateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a coordinate to the buffer.
    pub fn add(&self, coordinate: Coordinate) {
        self.lock().push(coordinate);
    }

    /// Returns a snapshot of the buffered coordinates in submission order.
    pub fn list(&self) -> Vec<Coordinate> {
        self.lock().clone()
    }

    /// Removes all buffered coordinates.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Returns the buffered coordinates and clears the buffer in one step.
    ///
    /// A route request consumes the whole buffer; doing both under a single
    /// lock keeps a concurrent `add` from landing between the read and the
    /// reset.
    pub fn take(&self) -> Vec<Coordinate> {
        std::mem::take(&mut *self.lock())
    }

    /// Returns the number of buffered coordinates.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if no coordinates are buffered.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Coordinate>> {
        self.points.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
