//! A growable, contiguous array container with explicit capacity management.
//!
//! [`SimpleVector`] keeps its elements in a single owned
//! [`ArrayPtr`](simplevec_array_ptr::ArrayPtr) buffer and grows by reallocating
//! to twice its capacity. Besides the usual append/insert/erase operations it
//! exposes the capacity discipline directly: [`reserve`] builds an empty vector
//! with preallocated slots, `clear` and shrinking `resize` never release memory.

pub mod error;
pub mod iter;
pub mod macros;
pub mod reserve;
pub mod result;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod vector;

pub use error::Error;
pub use iter::IntoIter;
pub use reserve::{ReserveProxy, reserve};
pub use result::Result;
pub use vector::SimpleVector;
