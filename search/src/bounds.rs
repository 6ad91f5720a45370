use crate::OrderedView;

/// Index of the first element for which `pred` is false.
///
/// `pred` must be true for a prefix of the view and false for the rest.
pub(crate) fn partition_point<T, V, P>(view: &V, mut pred: P) -> usize
where
    V: OrderedView<T> + ?Sized,
    P: FnMut(&T) -> bool,
{
    let mut left = 0;
    let mut right = view.len();
    while left < right {
        let mid = left + (right - left) / 2;
        match view.get(mid) {
            Some(item) if pred(item) => left = mid + 1,
            _ => right = mid,
        }
    }
    left
}

/// Smallest index whose element is `>= target`, or `view.len()` if none is.
///
/// This is also the first position where `target` could be inserted while
/// keeping the view sorted.
pub fn lower_bound<T, V>(view: &V, target: &T) -> usize
where
    T: PartialOrd,
    V: OrderedView<T> + ?Sized,
{
    partition_point::<T, V, _>(view, |item| item < target)
}

/// Smallest index whose element is `> target`, or `view.len()` if none is.
pub fn upper_bound<T, V>(view: &V, target: &T) -> usize
where
    T: PartialOrd,
    V: OrderedView<T> + ?Sized,
{
    partition_point::<T, V, _>(view, |item| item <= target)
}

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;
