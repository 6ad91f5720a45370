//! algo - a growable array and the searches that read it
//!
//! # Overview
//!
//! [`GrowArray`] is a contiguous, value-semantic array that owns its buffer:
//! pushes and inserts double the capacity when it runs out, `clone` is a deep
//! copy, and moving the array moves three words. Checked operations report
//! [`ArrayError`] and leave the array untouched on failure.
//!
//! The [`search`] module holds binary search (iterative and recursive),
//! lower/upper bound and first/last occurrence over any sorted
//! [`OrderedView`](search::OrderedView), including `GrowArray` itself.
//!
//! # Quick Start
//!
//! ```
//! use algo::{ArrayError, GrowArray, grow_array, search};
//!
//! let mut arr: GrowArray<i32> = GrowArray::new();
//! for x in [1, 2, 2, 2, 3] {
//!     arr.push(x);
//! }
//! assert_eq!(arr.capacity(), 8);
//!
//! assert_eq!(search::lower_bound(&arr, &2), 1);
//! assert_eq!(search::upper_bound(&arr, &2), 4);
//! assert_eq!(search::last_occurrence(&arr, &2), Some(3));
//!
//! let copy = arr.clone();
//! arr.clear();
//! assert_eq!(copy, grow_array![1, 2, 2, 2, 3]);
//! assert_eq!(arr.pop(), Err(ArrayError::EmptyContainer { op: "pop" }));
//! ```
//!
//! # Features
//!
//! - `std` (default): turns on `thiserror`'s `std` support for [`ArrayError`].
//!   The member crates themselves are `no_std` + `alloc`.

pub use algo_grow_array::{ArrayError, GrowArray, IntoIter, grow_array};

pub use algo_search as search;
