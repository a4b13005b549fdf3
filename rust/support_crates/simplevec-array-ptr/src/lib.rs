//! An exclusively owned, fixed-length heap array.
//!
//! `ArrayPtr<T>` is the raw storage behind `SimpleVector`: one heap block holding
//! exactly `len()` initialized slots. It never grows or shrinks in place; growing
//! containers allocate a new `ArrayPtr` and [`swap`](ArrayPtr::swap) it in.

use std::fmt;
use std::ops::{Index, IndexMut};

/// A single heap block of `len()` initialized `T` slots, owned exclusively.
///
/// A zero-length `ArrayPtr` does not allocate.
pub struct ArrayPtr<T> {
    slots: Box<[T]>,
}

impl<T> ArrayPtr<T> {
    /// Creates an empty buffer with no allocation.
    pub fn empty() -> ArrayPtr<T> {
        ArrayPtr {
            slots: Box::default(),
        }
    }

    /// Allocates `len` slots, each initialized with `T::default()`.
    pub fn new(len: usize) -> ArrayPtr<T>
    where
        T: Default,
    {
        if len == 0 {
            return Self::empty();
        }
        ArrayPtr {
            slots: std::iter::repeat_with(T::default).take(len).collect(),
        }
    }

    /// Allocates `len` slots, each initialized with a clone of `value`.
    pub fn from_elem(len: usize, value: &T) -> ArrayPtr<T>
    where
        T: Clone,
    {
        if len == 0 {
            return Self::empty();
        }
        ArrayPtr {
            slots: vec![value.clone(); len].into_boxed_slice(),
        }
    }

    /// Number of allocated slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the buffer owns no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns all slots as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Returns all slots as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Returns a raw pointer to the first slot.
    ///
    /// The pointer is dangling (but non-null and aligned) for an empty buffer.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.slots.as_ptr()
    }

    /// Returns a reference to the slot at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len());
        unsafe { self.slots.get_unchecked(index) }
    }

    /// Returns a mutable reference to the slot at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len());
        unsafe { self.slots.get_unchecked_mut(index) }
    }

    /// Gives up ownership of the block, leaving this buffer empty.
    pub fn release(&mut self) -> Box<[T]> {
        std::mem::take(&mut self.slots)
    }

    /// Exchanges the owned blocks of `self` and `other`. Never copies elements.
    #[inline]
    pub fn swap(&mut self, other: &mut ArrayPtr<T>) {
        std::mem::swap(&mut self.slots, &mut other.slots);
    }

    /// Consumes the buffer, returning the owned block.
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.slots
    }
}

impl<T> Default for ArrayPtr<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Index<usize> for ArrayPtr<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}

impl<T> IndexMut<usize> for ArrayPtr<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }
}

impl<T> From<Box<[T]>> for ArrayPtr<T> {
    fn from(slots: Box<[T]>) -> Self {
        ArrayPtr { slots }
    }
}

impl<T> From<Vec<T>> for ArrayPtr<T> {
    fn from(vec: Vec<T>) -> Self {
        ArrayPtr {
            slots: vec.into_boxed_slice(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayPtr")
            .field("slots", &self.as_slice())
            .field("len", &self.len())
            .finish()
    }
}
