use crate::{
    OrderedView,
    bounds::{lower_bound, upper_bound},
};

/// Index of the first element equal to `target`.
pub fn first_occurrence<T, V>(view: &V, target: &T) -> Option<usize>
where
    T: PartialOrd,
    V: OrderedView<T> + ?Sized,
{
    let index = lower_bound(view, target);
    view.get(index).filter(|&item| item == target).map(|_| index)
}

/// Index of the last element equal to `target`.
pub fn last_occurrence<T, V>(view: &V, target: &T) -> Option<usize>
where
    T: PartialOrd,
    V: OrderedView<T> + ?Sized,
{
    let index = upper_bound(view, target).checked_sub(1)?;
    view.get(index).filter(|&item| item == target).map(|_| index)
}
