//! `SimpleVector`: a growable array backed by a single owned [`ArrayPtr`].

use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut, Index, IndexMut};

use simplevec_array_ptr::ArrayPtr;

use crate::reserve::ReserveProxy;
use crate::result::{Result, verify_index};

/// A contiguous growable array.
///
/// The vector owns one [`ArrayPtr`] whose length is the vector's capacity. Slots
/// `[0, len)` hold the elements in order; slots `[len, capacity)` hold valid but
/// unspecified values (defaults, or leftovers from earlier truncation). Growth
/// always allocates a complete new buffer, moves the live elements over and swaps
/// it in, so a panic while building the new buffer leaves the vector unchanged.
///
/// Capacity grows to `max(required, 2 * capacity)`, so appending to an empty
/// vector yields capacities `1, 2, 4, 8, ...`.
///
/// Element access comes in two tiers:
/// - `v[i]`, `erase`, `insert`, `pop_back` treat a bad position as a caller
///   bug and panic;
/// - [`at`](SimpleVector::at) and [`at_mut`](SimpleVector::at_mut) validate the
///   index and return [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange).
///
/// # Examples
///
/// ```
/// use simplevec::SimpleVector;
///
/// let mut v = SimpleVector::new();
/// v.push_back(1);
/// v.push_back(2);
/// v.push_back(3);
/// v.insert(1, 9);
/// assert_eq!(v.as_slice(), &[1, 9, 2, 3]);
///
/// v.erase(2);
/// v.resize(5);
/// assert_eq!(v.as_slice(), &[1, 9, 3, 0, 0]);
/// assert!(v.at(5).is_err());
/// ```
pub struct SimpleVector<T> {
    /// Backing slots; `data.len()` is the capacity.
    data: ArrayPtr<T>,
    /// Number of live elements at the front of `data`.
    size: usize,
}

impl<T> SimpleVector<T> {
    /// Capacity multiplier applied when the vector runs out of room.
    pub const GROWTH_FACTOR: usize = 2;

    /// Creates an empty vector. Does not allocate.
    pub fn new() -> SimpleVector<T> {
        SimpleVector {
            data: ArrayPtr::empty(),
            size: 0,
        }
    }

    /// Creates a vector of `size` default-valued elements, with capacity `size`.
    pub fn with_size(size: usize) -> SimpleVector<T>
    where
        T: Default,
    {
        SimpleVector {
            data: ArrayPtr::new(size),
            size,
        }
    }

    /// Creates a vector of `size` clones of `value`, with capacity `size`.
    pub fn from_elem(size: usize, value: &T) -> SimpleVector<T>
    where
        T: Clone,
    {
        SimpleVector {
            data: ArrayPtr::from_elem(size, value),
            size,
        }
    }

    /// Creates an empty vector with the capacity requested by `proxy`.
    pub fn with_reserve(proxy: ReserveProxy) -> SimpleVector<T>
    where
        T: Default,
    {
        SimpleVector {
            data: ArrayPtr::new(proxy.capacity()),
            size: 0,
        }
    }

    /// Creates an empty vector with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> SimpleVector<T>
    where
        T: Default,
    {
        Self::with_reserve(ReserveProxy::new(capacity))
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the number of slots allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data.as_slice()[..self.size]
    }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data.as_mut_slice()[..self.size]
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator that allows modifying each element.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if out
    /// of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Fails with `IndexOutOfRange` if `index >= self.len()`.
    pub fn at(&self, index: usize) -> Result<&T> {
        verify_index(index, self.size)?;
        Ok(&self.data[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// Fails with `IndexOutOfRange` if `index >= self.len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_index(index, self.size)?;
        Ok(&mut self.data[index])
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.size);
        unsafe { self.data.get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.size);
        unsafe { self.data.get_unchecked_mut(index) }
    }

    /// Sets the length to zero. Capacity and slot contents are kept.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Removes the last element from the logical range.
    ///
    /// The element stays in its slot until it is overwritten or the buffer is
    /// released.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn pop_back(&mut self) {
        assert!(self.size != 0, "pop_back on an empty vector");
        self.size -= 1;
    }

    /// Removes the element at `index`, shifting the following elements left.
    ///
    /// Returns the position of the element that now follows the removed one,
    /// which equals `self.len()` when the last element was removed.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn erase(&mut self, index: usize) -> usize {
        assert!(
            index < self.size,
            "erase index {index} out of range for vector of size {}",
            self.size
        );
        self.data.as_mut_slice()[index..self.size].rotate_left(1);
        self.size -= 1;
        index
    }

    /// Exchanges the contents (buffers and lengths) of two vectors.
    pub fn swap(&mut self, other: &mut SimpleVector<T>) {
        self.data.swap(&mut other.data);
        std::mem::swap(&mut self.size, &mut other.size);
    }

    /// Moves the contents out into a new vector, leaving `self` empty with zero
    /// capacity.
    pub fn take(&mut self) -> SimpleVector<T> {
        let size = std::mem::replace(&mut self.size, 0);
        SimpleVector {
            data: ArrayPtr::from(self.data.release()),
            size,
        }
    }

    /// Computes the capacity to grow to when at least `required` slots are
    /// needed.
    #[inline]
    fn grown_capacity(&self, required: usize) -> usize {
        required.max(self.capacity().saturating_mul(Self::GROWTH_FACTOR))
    }
}

impl<T: Default> SimpleVector<T> {
    /// Ensures capacity is at least `new_capacity`.
    ///
    /// Reallocates to exactly `new_capacity` slots when growing; never shrinks.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.reallocate(new_capacity);
        }
    }

    /// Resizes the vector to `new_size` elements.
    ///
    /// Shrinking only truncates the logical range. Growing exposes default-valued
    /// elements, reallocating to `max(new_size, 2 * capacity)` if the current
    /// capacity is insufficient.
    pub fn resize(&mut self, new_size: usize) {
        if new_size <= self.size {
            self.size = new_size;
            return;
        }
        if new_size <= self.capacity() {
            self.data.as_mut_slice()[self.size..new_size].fill_with(T::default);
        } else {
            // Slots past the moved elements are fresh defaults.
            self.reallocate(self.grown_capacity(new_size));
        }
        self.size = new_size;
    }

    /// Appends `value` to the end, doubling capacity when full.
    pub fn push_back(&mut self, value: T) {
        if self.size == self.capacity() {
            self.reallocate(self.grown_capacity(self.size + 1));
        }
        self.data[self.size] = value;
        self.size += 1;
    }

    /// Inserts `value` at `index`, shifting the elements at and after `index`
    /// one position right. Returns a reference to the inserted element.
    ///
    /// `index == self.len()` appends.
    ///
    /// # Panics
    ///
    /// Panics if `index > self.len()`.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        let size = self.size;
        assert!(
            index <= size,
            "insert index {index} out of range for vector of size {size}"
        );

        if size < self.capacity() {
            // The spare slot at `size` takes the value, then rotates into place.
            let slots = self.data.as_mut_slice();
            slots[size] = value;
            slots[index..=size].rotate_right(1);
        } else {
            let new_capacity = self.grown_capacity(size + 1);
            log::trace!(
                "SimpleVector::insert: reallocating {} -> {new_capacity} slots",
                self.capacity()
            );
            let mut new_data = ArrayPtr::<T>::new(new_capacity);
            let old = self.data.as_mut_slice();
            let (head, tail) = new_data.as_mut_slice().split_at_mut(index);
            head.swap_with_slice(&mut old[..index]);
            tail[0] = value;
            tail[1..=size - index].swap_with_slice(&mut old[index..size]);
            self.data.swap(&mut new_data);
        }

        self.size += 1;
        &mut self.data[index]
    }

    /// Replaces the buffer with a fresh one of `new_capacity` slots, moving the
    /// live elements into it.
    #[cold]
    fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.size);
        log::trace!(
            "SimpleVector: reallocating {} -> {new_capacity} slots ({} live)",
            self.capacity(),
            self.size
        );
        let mut new_data = ArrayPtr::<T>::new(new_capacity);
        let size = self.size;
        new_data.as_mut_slice()[..size].swap_with_slice(&mut self.data.as_mut_slice()[..size]);
        self.data.swap(&mut new_data);
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        SimpleVector::new()
    }
}

impl<T: Clone> Clone for SimpleVector<T> {
    /// Copies the elements into a buffer of exactly `self.len()` slots.
    fn clone(&self) -> Self {
        SimpleVector {
            data: ArrayPtr::from(self.as_slice().to_vec()),
            size: self.size,
        }
    }

    /// Builds a complete copy of `source` first and swaps it in, so `self` is
    /// left untouched if cloning an element panics.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for SimpleVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for SimpleVector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for SimpleVector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SimpleVector").field(&self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    fn from(vec: Vec<T>) -> Self {
        let size = vec.len();
        SimpleVector {
            data: ArrayPtr::from(vec),
            size,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(items: [T; N]) -> Self {
        SimpleVector::from(Vec::from(items))
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(slice: &[T]) -> Self {
        SimpleVector::from(slice.to_vec())
    }
}

impl<T: Default> From<ReserveProxy> for SimpleVector<T> {
    fn from(proxy: ReserveProxy) -> Self {
        SimpleVector::with_reserve(proxy)
    }
}

impl<T> From<SimpleVector<T>> for Vec<T> {
    fn from(v: SimpleVector<T>) -> Self {
        let mut vec = v.data.into_boxed_slice().into_vec();
        vec.truncate(v.size);
        vec
    }
}

impl<T> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SimpleVector::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Default> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let required = self.size.saturating_add(lower);
        if required > self.capacity() {
            self.reserve(self.grown_capacity(required));
        }
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Default + Copy + 'a> Extend<&'a T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}
