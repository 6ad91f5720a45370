use crate::OrderedView;

/// Index of some element equal to `target`.
///
/// With duplicates, which of the equal elements is found is unspecified;
/// use [`first_occurrence`](crate::first_occurrence) or
/// [`last_occurrence`](crate::last_occurrence) to pin it down.
pub fn binary_search<T, V>(view: &V, target: &T) -> Option<usize>
where
    T: PartialOrd,
    V: OrderedView<T> + ?Sized,
{
    let mut left = 0;
    let mut right = view.len();
    while left < right {
        let mid = left + (right - left) / 2;
        let item = view.get(mid)?;
        if item == target {
            return Some(mid);
        }
        if item < target {
            left = mid + 1;
        } else {
            right = mid;
        }
    }
    None
}

/// Recursive formulation of [`binary_search`].
///
/// Finds an element equal to the one `binary_search` finds, though not
/// necessarily at the same index when duplicates exist. Recursion depth is
/// `O(log n)`.
pub fn binary_search_recursive<T, V>(view: &V, target: &T) -> Option<usize>
where
    T: PartialOrd,
    V: OrderedView<T> + ?Sized,
{
    search_range(view, target, 0, view.len())
}

// Half-open [left, right): an empty range or a miss at index 0 never underflows.
fn search_range<T, V>(view: &V, target: &T, left: usize, right: usize) -> Option<usize>
where
    T: PartialOrd,
    V: OrderedView<T> + ?Sized,
{
    if left >= right {
        return None;
    }
    let mid = left + (right - left) / 2;
    let item = view.get(mid)?;
    if item == target {
        Some(mid)
    } else if item < target {
        search_range(view, target, mid + 1, right)
    } else {
        search_range(view, target, left, mid)
    }
}
