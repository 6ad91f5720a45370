use alloc::vec::Vec;

use algo_grow_array::GrowArray;

/// Read-only, randomly indexable sequence of known length.
///
/// The search functions assume the elements are non-decreasing.
pub trait OrderedView<T> {
    fn len(&self) -> usize;

    /// Returns the element at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<&T>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> OrderedView<T> for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T, const N: usize> OrderedView<T> for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> OrderedView<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

// `get` resolves to this trait before auto-deref, so go through the slice.
impl<T> OrderedView<T> for GrowArray<T> {
    fn len(&self) -> usize {
        GrowArray::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}
