#![allow(unsafe_code)]

//! GrowArray: a contiguous, growable array that owns its buffer.
//!
//! GrowArray provides a value-semantic sequence that:
//! - Is exactly 3 words (pointer, capacity, length)
//! - Allocates nothing until the first element arrives
//! - Doubles its capacity when a push or insert finds it full
//! - Deep-copies on `clone`, moves in O(1)
//!
//! ```
//! use algo_grow_array::{ArrayError, GrowArray, grow_array};
//!
//! let mut arr = grow_array![1, 2, 3];
//! arr.push(4);
//! arr.insert(0, 0)?;
//! assert_eq!(arr, [0, 1, 2, 3, 4]);
//!
//! assert_eq!(arr.remove(1)?, 1);
//! assert_eq!(arr.pop()?, 4);
//! assert_eq!(*arr.at(2)?, 3);
//! assert!(matches!(arr.at(3), Err(ArrayError::IndexOutOfRange { .. })));
//!
//! let empty: GrowArray<i32> = GrowArray::new();
//! assert_eq!(empty.capacity(), 0);
//! # Ok::<(), ArrayError>(())
//! ```

#![no_std]

extern crate alloc;

mod error;
mod iter;

pub use error::ArrayError;
pub use iter::IntoIter;

use alloc::{
    alloc::{Layout, alloc, dealloc, handle_alloc_error},
    vec::Vec,
};
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem,
    ops::{Deref, DerefMut, Index, IndexMut},
    ptr::{self, NonNull},
    slice::{self, SliceIndex},
};

/// A contiguous growable array.
///
/// Slots `[0, len)` of the buffer hold live elements, slots `[len, cap)` are
/// uninitialized. The pointer is dangling while `cap == 0` or `T` is
/// zero-sized; zero-sized elements never allocate but still follow the same
/// capacity bookkeeping.
pub struct GrowArray<T> {
    ptr: NonNull<T>,
    cap: usize,
    len: usize,
    _marker: PhantomData<T>,
}

#[cfg(target_pointer_width = "64")]
static_assertions::assert_eq_size!(GrowArray<u64>, [usize; 3]);
static_assertions::assert_eq_size!(Option<GrowArray<u8>>, GrowArray<u8>);

// SAFETY: GrowArray owns its elements exclusively, like Vec<T>.
unsafe impl<T: Send> Send for GrowArray<T> {}
unsafe impl<T: Sync> Sync for GrowArray<T> {}

#[cold]
#[track_caller]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

impl<T> GrowArray<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Creates an empty array. Does not allocate.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Creates an empty array with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ptr: Self::allocate(capacity),
            cap: capacity,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Creates an array of `n` copies of `value`, with capacity `n`.
    pub fn from_elem(value: T, n: usize) -> Self
    where
        T: Clone,
    {
        let mut arr = Self::with_capacity(n);
        arr.resize(n, value);
        arr
    }

    /// Creates an array of `n` default values, with capacity `n`.
    pub fn with_len(n: usize) -> Self
    where
        T: Default,
    {
        let mut arr = Self::with_capacity(n);
        arr.resize_default(n);
        arr
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `value` at the end, doubling the capacity first if full.
    pub fn push(&mut self, value: T) {
        if self.len == self.cap {
            self.grow_one();
        }
        // SAFETY: len < cap, so the slot is allocated and uninitialized.
        unsafe { self.ptr.as_ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Result<T, ArrayError> {
        if self.len == 0 {
            return Err(ArrayError::EmptyContainer { op: "pop" });
        }
        self.len -= 1;
        // SAFETY: the slot at the old `len - 1` was live and is now outside the live range.
        Ok(unsafe { self.ptr.as_ptr().add(self.len).read() })
    }

    /// Inserts `value` at `index`, shifting everything after it one slot right.
    ///
    /// `index == len` appends. The array is left untouched on error.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        if index > self.len {
            return Err(ArrayError::IndexOutOfRange {
                op: "insert",
                index,
                len: self.len,
            });
        }
        if self.len == self.cap {
            self.grow_one();
        }
        // SAFETY: index <= len < cap; the shifted range stays inside the buffer.
        unsafe {
            let slot = self.ptr.as_ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(value);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// Capacity is kept.
    pub fn remove(&mut self, index: usize) -> Result<T, ArrayError> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfRange {
                op: "remove",
                index,
                len: self.len,
            });
        }
        // SAFETY: index < len; the element is read out before its slot is overwritten.
        unsafe {
            let slot = self.ptr.as_ptr().add(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    /// Resizes to `new_len`, filling new slots with clones of `value`.
    ///
    /// Grows the capacity to exactly `new_len` when it does not fit.
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        self.resize_with(new_len, || value.clone());
    }

    /// Resizes to `new_len`, filling new slots with `T::default()`.
    pub fn resize_default(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Resizes to `new_len`, filling new slots with values returned by `fill`.
    pub fn resize_with<F>(&mut self, new_len: usize, mut fill: F)
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        if new_len > self.cap {
            self.reallocate(new_len);
        }
        while self.len < new_len {
            let value = fill();
            // SAFETY: len < new_len <= cap.
            unsafe { self.ptr.as_ptr().add(self.len).write(value) };
            self.len += 1;
        }
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Ensures the capacity is at least `capacity`, reallocating to exactly
    /// that many slots if it is not.
    ///
    /// Unlike [`Vec::reserve`], the argument is a total, not an increment.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity > self.cap {
            self.reallocate(capacity);
        }
    }

    /// Releases unused capacity so that `capacity() == len()`.
    ///
    /// An empty array gives its buffer back entirely.
    pub fn shrink_to_fit(&mut self) {
        if self.cap > self.len {
            tracing::trace!(old_cap = self.cap, len = self.len, "shrinking to fit");
            self.reallocate(self.len);
        }
    }

    /// Appends clones of every element of `other`.
    pub fn extend_from_slice(&mut self, other: &[T])
    where
        T: Clone,
    {
        self.reserve_for(other.len());
        for item in other {
            self.push(item.clone());
        }
    }

    /// Returns the element at `index`, or `IndexOutOfRange`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        self.as_slice().get(index).ok_or(ArrayError::IndexOutOfRange {
            op: "at",
            index,
            len: self.len,
        })
    }

    /// Returns the element at `index` for in-place mutation, or `IndexOutOfRange`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfRange {
                op: "at",
                index,
                len,
            })
    }

    /// Returns the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`. Only debug builds verify this.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(
            index < self.len,
            "index {index} out of range for length {}",
            self.len
        );
        // SAFETY: the caller guarantees index < len.
        unsafe { &*self.ptr.as_ptr().add(index) }
    }

    /// Mutable counterpart of [`get_unchecked`](Self::get_unchecked).
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`. Only debug builds verify this.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.len,
            "index {index} out of range for length {}",
            self.len
        );
        // SAFETY: the caller guarantees index < len.
        unsafe { &mut *self.ptr.as_ptr().add(index) }
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: ptr is non-null, aligned, and the first len slots are live.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        // SAFETY: [new_len, len) are live; len is lowered first so a panicking
        // destructor can never lead to a second drop of the tail.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(
                self.ptr.as_ptr().add(new_len),
                self.len - new_len,
            );
            self.len = new_len;
            ptr::drop_in_place(tail);
        }
    }

    /// Makes room for `additional` more elements without giving up amortized growth.
    fn reserve_for(&mut self, additional: usize) {
        let Some(needed) = self.len.checked_add(additional) else {
            capacity_overflow()
        };
        if needed > self.cap {
            self.reallocate(needed.max(self.cap.saturating_mul(2)));
        }
    }

    #[cold]
    fn grow_one(&mut self) {
        debug_assert_eq!(self.len, self.cap);
        let new_cap = match self.cap {
            0 => 1,
            cap => match cap.checked_mul(2) {
                Some(doubled) => doubled,
                None => capacity_overflow(),
            },
        };
        self.reallocate(new_cap);
    }

    /// Moves the live elements into a fresh buffer of `new_cap` slots and
    /// releases the old one.
    fn reallocate(&mut self, new_cap: usize) {
        assert!(new_cap >= self.len);
        tracing::trace!(old_cap = self.cap, new_cap, len = self.len, "reallocating");
        let new_ptr = Self::allocate(new_cap);
        // SAFETY: both buffers hold at least `len` slots and do not overlap;
        // the old buffer is released only after its elements were moved out.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
            Self::deallocate(self.ptr, self.cap);
        }
        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    fn layout(cap: usize) -> Layout {
        match Layout::array::<T>(cap) {
            Ok(layout) => layout,
            Err(_) => capacity_overflow(),
        }
    }

    fn allocate(cap: usize) -> NonNull<T> {
        if Self::IS_ZST || cap == 0 {
            return NonNull::dangling();
        }
        let layout = Self::layout(cap);
        // SAFETY: layout has a non-zero size.
        let ptr = unsafe { alloc(layout) }.cast::<T>();
        match NonNull::new(ptr) {
            Some(ptr) => ptr,
            None => handle_alloc_error(layout),
        }
    }

    /// # Safety
    ///
    /// `ptr` must have been returned by `allocate(cap)` and not released since.
    unsafe fn deallocate(ptr: NonNull<T>, cap: usize) {
        if Self::IS_ZST || cap == 0 {
            return;
        }
        // SAFETY: guaranteed by the caller.
        unsafe { dealloc(ptr.as_ptr().cast(), Self::layout(cap)) }
    }
}

/// Creates a [`GrowArray`] from a list of elements, or from `value; n`.
///
/// ```
/// use algo_grow_array::grow_array;
///
/// let arr = grow_array![1, 2, 3];
/// assert_eq!(arr.capacity(), 3);
///
/// let zeros = grow_array![0u8; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! grow_array {
    () => {
        $crate::GrowArray::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::GrowArray::from_elem($elem, $n)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::GrowArray::from([$($x),+])
    };
}

impl<T> Default for GrowArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowArray<T> {
    fn clone(&self) -> Self {
        // A panicking `T::clone` drops the partial copy, which owns only what
        // it has already cloned.
        let mut copy = Self::with_capacity(self.len);
        for item in self.as_slice() {
            copy.push(item.clone());
        }
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        // The old buffer stays intact until the new one is complete.
        let copy = source.clone();
        *self = copy;
    }
}

impl<T> Drop for GrowArray<T> {
    fn drop(&mut self) {
        // SAFETY: exactly the live range is dropped, then the buffer is released once.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len));
            Self::deallocate(self.ptr, self.cap);
        }
    }
}

impl<T> Deref for GrowArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for GrowArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for GrowArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for GrowArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for GrowArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for GrowArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for GrowArray<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for GrowArray<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Hash> Hash for GrowArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

// --- Equality ---

impl<T: PartialEq<U>, U> PartialEq<GrowArray<U>> for GrowArray<T> {
    fn eq(&self, other: &GrowArray<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowArray<T> {}

impl<T: PartialEq<U>, U> PartialEq<[U]> for GrowArray<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U> PartialEq<&[U]> for GrowArray<T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for GrowArray<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for GrowArray<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

// --- Construction from sequences ---

impl<T, const N: usize> From<[T; N]> for GrowArray<T> {
    fn from(items: [T; N]) -> Self {
        let mut arr = Self::with_capacity(N);
        for item in items {
            arr.push(item);
        }
        arr
    }
}

impl<T: Clone> From<&[T]> for GrowArray<T> {
    fn from(items: &[T]) -> Self {
        let mut arr = Self::with_capacity(items.len());
        arr.extend_from_slice(items);
        arr
    }
}

impl<T> From<Vec<T>> for GrowArray<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T> FromIterator<T> for GrowArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut arr = Self::with_capacity(iter.size_hint().0);
        arr.extend(iter);
        arr
    }
}

impl<T> Extend<T> for GrowArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve_for(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for GrowArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

// --- Traversal ---

impl<'a, T> IntoIterator for &'a GrowArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> IntoIterator for GrowArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
