//! Growable array with an explicit 1.5x capacity policy.

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::slice;

mod error;

pub use error::Error;

/// Capacity used by [`GrowableArray::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// A contiguous, owned sequence that grows by 1.5x once it is full and never shrinks.
///
/// Live elements always occupy slots `[0, len)` in insertion order. Slots `[len, capacity)` are
/// unset, they hold no value and nothing is dropped for them.
pub struct GrowableArray<T> {
    // Live elements are `buf[..buf.len()]`. The spare capacity of `buf` are the unset slots, it
    // is allocated up front so `buf` never reallocates on its own.
    buf: Vec<T>,
    capacity: usize,
}

impl<T> GrowableArray<T> {
    /// Creates an empty array with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Creates an empty array able to hold `capacity` elements before growing.
    ///
    /// Returns [`Error::InvalidArgument`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            tracing::debug!(capacity, "rejected initial capacity");
            return Err(Error::InvalidArgument { capacity });
        }

        Ok(Self {
            buf: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Appends `item`, growing the backing store first if it is full.
    pub fn add(&mut self, item: T) {
        if self.buf.len() == self.capacity {
            self.grow();
        }

        self.buf.push(item);
    }

    /// Inserts `item` at `index`, shifting `[index, len)` one slot to the right.
    ///
    /// `index == len` appends. Returns [`Error::IndexOutOfRange`] if `index > len`.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), Error> {
        let size = self.buf.len();
        if index > size {
            return Err(Error::IndexOutOfRange { index, size });
        }

        if size == self.capacity {
            self.grow();
        }

        // Occupy slot `size`, then walk from the back so every element moves into the free slot
        // to its right before that slot is overwritten. `item` ends up at `index`.
        self.buf.push(item);
        for i in ((index + 1)..=size).rev() {
            self.buf.swap(i, i - 1);
        }

        Ok(())
    }

    /// Replaces the element at `index` and returns the previous one.
    pub fn set(&mut self, index: usize, item: T) -> Result<T, Error> {
        self.check_index(index)?;

        Ok(mem::replace(&mut self.buf[index], item))
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.check_index(index)?;

        Ok(&self.buf[index])
    }

    /// Removes and returns the element at `index`, shifting `(index, len)` one slot to the left.
    pub fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        self.check_index(index)?;

        // The removed element bubbles up to the last live slot while every successor moves one
        // slot left.
        let size = self.buf.len();
        for i in index..(size - 1) {
            self.buf.swap(i, i + 1);
        }

        // Takes the element out of the last live slot, leaving that slot unset.
        self.buf.pop().ok_or(Error::IndexOutOfRange { index, size })
    }

    /// Drops all live elements. The capacity is retained.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Sorts the live elements in ascending order according to `compare`.
    ///
    /// Callers must not rely on equal elements keeping their relative order.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.buf.sort_by(compare);
    }

    /// Sorts the live elements in ascending order.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.buf.sort();
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of elements the array holds before the next growth.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.buf.iter()
    }

    // --- IMPL ---

    #[inline]
    fn check_index(&self, index: usize) -> Result<(), Error> {
        let size = self.buf.len();
        if index >= size {
            return Err(Error::IndexOutOfRange { index, size });
        }

        Ok(())
    }

    /// Replaces the backing store with one 1.5x the size, moving the live elements over to the
    /// same indices.
    #[cold]
    fn grow(&mut self) {
        let old_capacity = self.capacity;
        // A capacity of 1 would not grow with plain 1.5x truncation.
        let new_capacity = old_capacity + (old_capacity >> 1).max(1);

        let mut buf = Vec::with_capacity(new_capacity);
        buf.append(&mut self.buf);

        self.buf = buf;
        self.capacity = new_capacity;

        tracing::trace!(
            old_capacity,
            new_capacity,
            size = self.buf.len(),
            "grew backing store"
        );
    }
}

impl<T: PartialEq> GrowableArray<T> {
    /// Index of the first element equal to `item`.
    ///
    /// Use `Option<U>` as element type to store absent values, `index_of(&None)` then finds the
    /// first empty slot.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.buf.iter().position(|elem| elem == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Removes the first element equal to `item`. Returns `false` and leaves the array untouched
    /// if there is none.
    pub fn remove_value(&mut self, item: &T) -> bool {
        match self.index_of(item) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.capacity);
        buf.extend_from_slice(&self.buf);

        Self {
            buf,
            capacity: self.capacity,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buf.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        arr.extend(iter);

        arr
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}
