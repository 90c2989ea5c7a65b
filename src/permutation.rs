//! # Permutation windows
//!
//! This module finds every contiguous window of a source string whose
//! characters are a rearrangement (an anagram) of a target string.
//!
//! ## Key Features:
//!
//! - **Entry point**: [`find_permutations`] takes optional inputs and is total:
//!   absent, empty or whitespace-only inputs give an empty [`PermutationSet`].
//! - **Grouping**: each distinct window is reported once as a
//!   [`PermutationMatch`], with all the character offsets it starts at.
//! - **Strategies**: windows are compared either by sorting
//!   ([`Strategy::Sorted`]) or by sliding character counts
//!   ([`Strategy::Counting`], the default). Both give identical results.
//! - **Validation**: [`PermutationSet::verify`] re-checks a result against its inputs.
//!
//! Offsets and lengths are counted in `char`s, not bytes.
//!
//! ```
//! use permwindow::permutation::find_permutations;
//!
//! let found = find_permutations(Some("abccbabcaacbcabbac"), Some("bca"));
//! assert_eq!(found.get("abc"), Some(&[0, 5][..]));
//! assert_eq!(found.get("bca"), Some(&[6, 11][..]));
//! assert!(find_permutations(None, Some("abc")).is_empty());
//! ```

use tracing::{debug, trace};

mod error;
mod set;
mod window;

pub use error::MatchError;
pub use set::{PermutationMatch, PermutationSet};

use window::{CountingMatcher, SortedMatcher, WindowMatcher, Windows};

/// How windows are compared against the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bincode", derive(bincode::Encode, bincode::Decode))]
pub enum Strategy {
    /// Sort every window and compare it with the sorted target. `O(m·n·log n)`.
    Sorted,
    /// Keep per-character count differences while sliding the window. `O(m)` after setup.
    #[default]
    Counting,
}

/// Finds permutation windows with a fixed [`Strategy`].
///
/// # Examples
///
/// ```
/// use permwindow::permutation::{PermutationFinder, Strategy};
///
/// let finder = PermutationFinder::with_strategy(Strategy::Sorted);
/// let found = finder.find(Some("aabab"), Some("aab"));
/// assert_eq!(found.to_string(), "aab: 0\naba: 1\n");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermutationFinder {
    strategy: Strategy,
}

impl PermutationFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: Strategy) -> Self {
        PermutationFinder { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns every window of `source` that is a permutation of `target`.
    ///
    /// Boundary cases:
    /// - either input absent, empty or whitespace-only: empty set.
    /// - `source == target`: exactly one entry, `source` at offset `0`.
    /// - `target` longer than `source`: empty set, no window fits.
    pub fn find(&self, source: Option<&str>, target: Option<&str>) -> PermutationSet {
        let (Some(source), Some(target)) = (source, target) else {
            debug!("source or target absent");
            return PermutationSet::new();
        };
        if is_blank(source) || is_blank(target) {
            debug!("source or target blank");
            return PermutationSet::new();
        }
        if source == target {
            return PermutationSet::single(source);
        }

        match self.strategy {
            Strategy::Sorted => collect(source, SortedMatcher::new(target)),
            Strategy::Counting => collect(source, CountingMatcher::new(target)),
        }
    }
}

/// Returns every window of `source` that is a permutation of `target`, using
/// the default [`PermutationFinder`].
pub fn find_permutations(source: Option<&str>, target: Option<&str>) -> PermutationSet {
    PermutationFinder::new().find(source, target)
}

/// Empty, or whitespace only.
///
/// Whitespace is the Unicode separators (except the no-break spaces U+00A0,
/// U+2007 and U+202F) plus the ASCII controls `\t \n \u{B} \u{C} \r` and the
/// information separators U+001C to U+001F.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(is_blank_char)
}

fn is_blank_char(c: char) -> bool {
    match c {
        '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        c => c.is_whitespace(),
    }
}

fn collect(source: &str, mut matcher: impl WindowMatcher) -> PermutationSet {
    let windows = Windows::new(source);
    let n = matcher.window_len();
    trace!(source_len = windows.len(), window_len = n, "scanning windows");

    let mut set = PermutationSet::new();
    matcher.scan(&windows, |i| {
        if let Some(window) = windows.slice(i, n) {
            set.record(window, i);
        }
    });
    debug!(distinct = set.len(), "permutation windows found");
    set
}
