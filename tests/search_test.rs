//! Integration tests for the searches, reading through `GrowArray`.

mod common;

use algo::{GrowArray, grow_array, search};
use common::{DUPLICATES, ODDS};
use pretty_assertions::assert_eq;

#[test]
fn duplicates_run() {
    let arr = GrowArray::from(DUPLICATES);

    assert_eq!(search::first_occurrence(&arr, &2), Some(1));
    assert_eq!(search::last_occurrence(&arr, &2), Some(3));
    assert_eq!(search::lower_bound(&arr, &2), 1);
    assert_eq!(search::upper_bound(&arr, &2), 4);

    let found = search::binary_search(&arr, &2).unwrap();
    assert!((1..=3).contains(&found));
}

#[test]
fn distinct_values() {
    let arr = GrowArray::from(ODDS);

    assert_eq!(search::binary_search(&arr, &7), Some(3));
    assert_eq!(search::binary_search_recursive(&arr, &7), Some(3));
    assert_eq!(search::first_occurrence(&arr, &7), Some(3));
    assert_eq!(search::last_occurrence(&arr, &7), Some(3));

    assert_eq!(search::binary_search(&arr, &4), None);
    assert_eq!(search::binary_search_recursive(&arr, &4), None);
    assert_eq!(search::lower_bound(&arr, &4), 2);
    assert_eq!(search::upper_bound(&arr, &4), 2);
}

#[test]
fn empty_view() {
    let arr: GrowArray<i32> = GrowArray::new();

    for target in [-1, 0, 42] {
        assert_eq!(search::lower_bound(&arr, &target), 0);
        assert_eq!(search::upper_bound(&arr, &target), 0);
        assert_eq!(search::first_occurrence(&arr, &target), None);
        assert_eq!(search::last_occurrence(&arr, &target), None);
        assert_eq!(search::binary_search(&arr, &target), None);
        assert_eq!(search::binary_search_recursive(&arr, &target), None);
    }
}

#[test]
fn occurrences_bracket_the_run() {
    let arr = grow_array![0, 0, 1, 4, 4, 4, 4, 9, 9, 12];

    for target in -1..14 {
        let lower = search::lower_bound(&arr, &target);
        let upper = search::upper_bound(&arr, &target);
        let count = arr.iter().filter(|&&v| v == target).count();
        assert_eq!(upper - lower, count, "target {target}");

        match (
            search::first_occurrence(&arr, &target),
            search::last_occurrence(&arr, &target),
        ) {
            (Some(first), Some(last)) => {
                assert_eq!((first, last + 1), (lower, upper));
                let hit = search::binary_search(&arr, &target).unwrap();
                assert!((first..=last).contains(&hit));
                let rec = search::binary_search_recursive(&arr, &target).unwrap();
                assert_eq!(arr[hit], arr[rec]);
            }
            (None, None) => {
                assert_eq!(count, 0);
                assert_eq!(search::binary_search(&arr, &target), None);
                assert_eq!(search::binary_search_recursive(&arr, &target), None);
            }
            other => panic!("inconsistent occurrences {other:?} for {target}"),
        }
    }
}

#[test]
fn search_after_mutation() {
    let mut arr: GrowArray<i32> = GrowArray::new();
    for x in [10, 30, 50] {
        arr.push(x);
    }

    // Keep the array sorted by inserting at the lower bound.
    for x in [20, 40, 30, 60, 0] {
        let at = search::lower_bound(&arr, &x);
        arr.insert(at, x).unwrap();
    }
    assert_eq!(arr, [0, 10, 20, 30, 30, 40, 50, 60]);
    assert_eq!(search::first_occurrence(&arr, &30), Some(3));
    assert_eq!(search::last_occurrence(&arr, &30), Some(4));

    let at = search::first_occurrence(&arr, &30).unwrap();
    arr.remove(at).unwrap();
    assert_eq!(search::first_occurrence(&arr, &30), Some(3));
    assert_eq!(search::last_occurrence(&arr, &30), Some(3));
}

#[test]
fn views_over_other_containers() {
    let vec = DUPLICATES.to_vec();
    let slice: &[i32] = &DUPLICATES;

    assert_eq!(search::lower_bound(&vec, &2), 1);
    assert_eq!(search::upper_bound(slice, &2), 4);
    assert_eq!(search::last_occurrence(&DUPLICATES, &3), Some(4));

    let words: GrowArray<&str> = ["apple", "banana", "cherry"].into_iter().collect();
    assert_eq!(search::binary_search(&words, &"banana"), Some(1));
    assert_eq!(search::binary_search(&words, &"durian"), None);
}
