//! # Permwindow
//!
//! Permwindow is a small Rust library of two string and array algorithms.
//! Its primary focus is on finding every window of a string that is an
//! anagram of a pattern, grouped by the literal window and its offsets.
//!
//! It also provides a minimum-difference two-way split of an integer list,
//! useful wherever a list has to be balanced into two halves.

pub mod partition;
pub mod permutation;
