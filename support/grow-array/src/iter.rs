use core::{
    fmt,
    iter::FusedIterator,
    marker::PhantomData,
    mem::ManuallyDrop,
    ptr::{self, NonNull},
    slice,
};

use crate::GrowArray;

/// An owning iterator over the elements of a [`GrowArray`].
///
/// Elements not consumed are dropped together with the iterator, which then
/// releases the buffer.
pub struct IntoIter<T> {
    buf: NonNull<T>,
    cap: usize,
    // Live range is [start, end).
    start: usize,
    end: usize,
    _marker: PhantomData<T>,
}

// SAFETY: same ownership model as GrowArray.
unsafe impl<T: Send> Send for IntoIter<T> {}
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T> IntoIter<T> {
    pub(crate) fn new(array: GrowArray<T>) -> Self {
        let array = ManuallyDrop::new(array);
        Self {
            buf: array.ptr,
            cap: array.cap,
            start: 0,
            end: array.len,
            _marker: PhantomData,
        }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [start, end) are live.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().add(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: start < end, and the slot leaves the live range before it is read.
        let item = unsafe { self.buf.as_ptr().add(self.start).read() };
        self.start += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: `end` was live and is now outside the live range.
        Some(unsafe { self.buf.as_ptr().add(self.end).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: only the unconsumed range is dropped; the buffer came from
        // a GrowArray with this exact capacity.
        unsafe {
            let remaining = ptr::slice_from_raw_parts_mut(
                self.buf.as_ptr().add(self.start),
                self.end - self.start,
            );
            ptr::drop_in_place(remaining);
            GrowArray::<T>::deallocate(self.buf, self.cap);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::{rc::Rc, vec::Vec};

    use crate::grow_array;

    #[test]
    fn test_both_ends() {
        let mut iter = grow_array![1, 2, 3, 4].into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.as_slice(), &[2, 3]);
        assert_eq!(iter.collect::<Vec<_>>(), [2, 3]);
    }

    #[test]
    fn test_partial_consumption_drops_rest() {
        let shared = Rc::new(());
        let arr = grow_array![shared.clone(), shared.clone(), shared.clone()];
        assert_eq!(Rc::strong_count(&shared), 4);

        let mut iter = arr.into_iter();
        let first = iter.next();
        assert_eq!(Rc::strong_count(&shared), 4);
        drop(iter);
        assert_eq!(Rc::strong_count(&shared), 2);
        drop(first);
        assert_eq!(Rc::strong_count(&shared), 1);
    }
}
