//! Capacity reservation marker for `SimpleVector` construction.

/// Requests an empty vector with preallocated capacity.
///
/// Unlike `SimpleVector::with_size`, a vector built from a `ReserveProxy` has
/// no elements: only its capacity is set.
///
/// ```
/// use simplevec::{SimpleVector, reserve};
///
/// let v = SimpleVector::<i32>::from(reserve(8));
/// assert_eq!(v.len(), 0);
/// assert_eq!(v.capacity(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveProxy {
    capacity: usize,
}

impl ReserveProxy {
    pub fn new(capacity: usize) -> ReserveProxy {
        ReserveProxy { capacity }
    }

    /// The capacity to allocate.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`ReserveProxy::new`].
pub fn reserve(capacity: usize) -> ReserveProxy {
    ReserveProxy::new(capacity)
}
