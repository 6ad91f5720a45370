//! Searches over sorted, randomly indexable sequences.
//!
//! Every function reads its input through [`OrderedView`], which is
//! implemented for slices, arrays, `Vec` and
//! [`GrowArray`](algo_grow_array::GrowArray). The view is assumed to be
//! non-decreasing; on unsorted input the results are unspecified, but no
//! function panics or reads out of bounds.
//!
//! "Not found" is `None`, not an error.
//!
//! ```
//! use algo_search::{first_occurrence, last_occurrence, lower_bound, upper_bound};
//!
//! let v = [1, 2, 2, 2, 3];
//! assert_eq!(lower_bound(&v, &2), 1);
//! assert_eq!(upper_bound(&v, &2), 4);
//! assert_eq!(first_occurrence(&v, &2), Some(1));
//! assert_eq!(last_occurrence(&v, &2), Some(3));
//! assert_eq!(first_occurrence(&v, &4), None);
//! ```

#![no_std]

extern crate alloc;

mod binary;
mod bounds;
mod occurrence;
mod view;

pub use binary::{binary_search, binary_search_recursive};
pub use bounds::{lower_bound, upper_bound};
pub use occurrence::{first_occurrence, last_occurrence};
pub use view::OrderedView;
