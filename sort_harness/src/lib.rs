//! Shared scaffolding for the crate's test and benchmark suites: a [`Sort`]
//! abstraction over whatever is under test, input [`patterns`], and the
//! generic correctness suite in [`tests`] that gets instantiated once per
//! entry point.

use std::cmp::Ordering;

pub mod patterns;

/// One sort implementation under test.
pub trait Sort {
    fn name() -> String;

    /// Whether elements that compare equal keep their original order.
    fn is_stable() -> bool;

    fn sort<T>(v: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}
