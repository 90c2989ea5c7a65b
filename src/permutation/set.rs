use std::fmt;

use indexmap::IndexMap;
use itertools::Itertools;

use super::{window::Windows, MatchError};

/// One distinct window of the source, together with every offset it starts at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bincode", derive(bincode::Encode, bincode::Decode))]
pub struct PermutationMatch {
    permutation: String,
    indexes: Vec<usize>,
}

impl PermutationMatch {
    pub(crate) fn new(permutation: impl Into<String>, indexes: Vec<usize>) -> Self {
        PermutationMatch {
            permutation: permutation.into(),
            indexes,
        }
    }

    /// The literal window, as it appears in the source.
    pub fn permutation(&self) -> &str {
        &self.permutation
    }

    /// Character offsets into the source, strictly increasing.
    pub fn indexes(&self) -> &[usize] {
        &self.indexes
    }

    pub fn first_index(&self) -> Option<usize> {
        self.indexes.first().copied()
    }

    /// Number of occurrences.
    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }
}

impl fmt::Display for PermutationMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.permutation, self.indexes.iter().join(", "))
    }
}

/// All permutation windows found in one source, keyed by the literal window.
///
/// Entries keep the order in which each distinct window was first seen.
///
/// # Examples
///
/// ```
/// use permwindow::permutation::find_permutations;
///
/// let found = find_permutations(Some("cbaebabacd"), Some("abc"));
/// assert_eq!(found.len(), 2);
/// assert_eq!(found.get("cba"), Some(&[0][..]));
/// assert_eq!(found.get("bac"), Some(&[6][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bincode", derive(bincode::Encode, bincode::Decode))]
pub struct PermutationSet {
    #[cfg_attr(feature = "bincode", bincode(with_serde))]
    entries: IndexMap<String, PermutationMatch>,
}

impl PermutationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding `permutation` once, at offset zero.
    pub(crate) fn single(permutation: &str) -> Self {
        let mut set = Self::new();
        set.record(permutation, 0);
        set
    }

    pub(crate) fn record(&mut self, permutation: &str, index: usize) {
        match self.entries.get_mut(permutation) {
            Some(entry) => entry.indexes.push(index),
            None => {
                self.entries.insert(
                    permutation.to_owned(),
                    PermutationMatch::new(permutation, vec![index]),
                );
            }
        }
    }

    /// Number of distinct permutations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PermutationMatch> + '_ {
        self.entries.values()
    }

    /// The offsets at which `permutation` occurs, if it occurs at all.
    pub fn get(&self, permutation: &str) -> Option<&[usize]> {
        self.entries.get(permutation).map(PermutationMatch::indexes)
    }

    pub fn contains(&self, permutation: &str) -> bool {
        self.entries.contains_key(permutation)
    }

    pub fn permutations(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Every recorded offset, entry by entry.
    pub fn indexes(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter().flat_map(|m| m.indexes().iter().copied())
    }

    /// Checks that this set could have been produced from `source` and `target`:
    /// every entry is a window of `target`'s length, an anagram of `target`,
    /// found literally at each of its strictly increasing offsets.
    pub fn verify(&self, source: &str, target: &str) -> Result<(), MatchError> {
        let windows = Windows::new(source);
        let key = target.chars().sorted_unstable().collect_vec();
        let n = key.len();

        for entry in self.iter() {
            let permutation = entry.permutation();
            let found = permutation.chars().count();
            if found != n {
                return Err(MatchError::WrongLength {
                    permutation: permutation.to_owned(),
                    found,
                    expected: n,
                });
            }
            if permutation.chars().sorted_unstable().collect_vec() != key {
                return Err(MatchError::NotAnagram {
                    permutation: permutation.to_owned(),
                    target: target.to_owned(),
                });
            }
            if !entry.indexes().iter().tuple_windows().all(|(a, b)| a < b) {
                return Err(MatchError::UnorderedIndexes {
                    permutation: permutation.to_owned(),
                });
            }
            for &index in entry.indexes() {
                let Some(window) = windows.slice(index, n) else {
                    return Err(MatchError::IndexOutOfBounds {
                        permutation: permutation.to_owned(),
                        index,
                        source_len: windows.len(),
                    });
                };
                if window != permutation {
                    return Err(MatchError::LiteralMismatch {
                        permutation: permutation.to_owned(),
                        index,
                        found: window.to_owned(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for PermutationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.iter() {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl IntoIterator for PermutationSet {
    type Item = PermutationMatch;
    type IntoIter = indexmap::map::IntoValues<String, PermutationMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl<'a> IntoIterator for &'a PermutationSet {
    type Item = &'a PermutationMatch;
    type IntoIter = indexmap::map::Values<'a, String, PermutationMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
