use thiserror::Error;

/// A broken invariant found by [`PermutationSet::verify`](super::PermutationSet::verify).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("permutation {permutation:?} has {found} characters, expected {expected}")]
    WrongLength {
        permutation: String,
        found: usize,
        expected: usize,
    },

    #[error("permutation {permutation:?} is not an anagram of {target:?}")]
    NotAnagram { permutation: String, target: String },

    #[error("indexes of {permutation:?} are not strictly increasing")]
    UnorderedIndexes { permutation: String },

    #[error("index {index} of {permutation:?} leaves no room for a window in a source of {source_len} characters")]
    IndexOutOfBounds {
        permutation: String,
        index: usize,
        source_len: usize,
    },

    #[error("source at index {index} reads {found:?}, not {permutation:?}")]
    LiteralMismatch {
        permutation: String,
        index: usize,
        found: String,
    },
}
