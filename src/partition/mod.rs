//! Splitting a list of integers into two subsets whose sums are as close as possible.
//!
//! The behaviour here is the one the partition tests pin down, nothing more:
//! lists with fewer than three values are not split at all, and anything longer
//! comes back as exactly two subsets holding every value once, with the smallest
//! possible difference of sums. How that split is searched for is this crate's
//! own choice, an exhaustive walk over reachable subset sums.

use std::collections::BTreeMap;

use bitvec::{bitvec, vec::BitVec};
use derive_more::{From, Into};
use tracing::{debug, trace};

/// Values shorter than this are returned unsplit, as an empty [`Partition`].
pub const MIN_PARTITION_LEN: usize = 3;

/// One half of a [`Partition`], holding values in their input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bincode", derive(bincode::Encode, bincode::Decode))]
pub struct Subset {
    values: Vec<i32>,
}

impl Subset {
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn sum(&self) -> i64 {
        self.values.iter().map(|&v| i64::from(v)).sum()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bincode", derive(bincode::Encode, bincode::Decode))]
pub struct Partition {
    subsets: Vec<Subset>,
}

impl Partition {
    /// Either no subsets, or exactly two.
    pub fn subsets(&self) -> &[Subset] {
        &self.subsets
    }

    pub fn is_empty(&self) -> bool {
        self.subsets.is_empty()
    }

    /// `|sum(A) - sum(B)|`, or `None` when nothing was split.
    pub fn difference(&self) -> Option<i64> {
        match self.subsets.as_slice() {
            [a, b] => Some((a.sum() - b.sum()).abs()),
            _ => None,
        }
    }
}

/// Splits `values` into two subsets minimising the difference of their sums.
///
/// The first subset is the one whose sum is the smallest reachable sum at the
/// minimum difference; the second holds everything else. Both keep input order.
///
/// # Examples
///
/// ```
/// use permwindow::partition::partition;
///
/// let split = partition(&[1, 3, 5]);
/// assert_eq!(split.subsets()[0].values(), &[1, 3]);
/// assert_eq!(split.subsets()[1].values(), &[5]);
/// assert_eq!(split.difference(), Some(1));
///
/// assert!(partition(&[1, 2]).is_empty());
/// ```
pub fn partition(values: &[i32]) -> Partition {
    if values.len() < MIN_PARTITION_LEN {
        debug!(len = values.len(), "too few values to partition");
        return Partition::default();
    }

    let total: i64 = values.iter().map(|&v| i64::from(v)).sum();
    let reachable = reachable_sums(values);
    trace!(total, reachable = reachable.len(), "subset sums enumerated");

    // BTreeMap iterates ascending, so strict `<` keeps the smallest sum on ties.
    let mut best: Option<(i64, i64)> = None;
    for &sum in reachable.keys() {
        let diff = (total - 2 * sum).abs();
        if best.map_or(true, |(d, _)| diff < d) {
            best = Some((diff, sum));
        }
    }

    let Some((diff, sum)) = best else {
        return Partition::default();
    };
    debug!(diff, sum, "partition found");

    let members = members_of(&reachable, sum, values.len());
    let (mut taken, mut rest) = (Vec::new(), Vec::new());
    for (i, &v) in values.iter().enumerate() {
        if members[i] {
            taken.push(v);
        } else {
            rest.push(v);
        }
    }
    Partition {
        subsets: vec![Subset::from(taken), Subset::from(rest)],
    }
}

/// Every subset sum of `values`, mapped to the edge it was first reached by:
/// the sum before, and the position of the value added to it. The empty sum has no edge.
fn reachable_sums(values: &[i32]) -> BTreeMap<i64, Option<(i64, usize)>> {
    let mut reachable = BTreeMap::new();
    reachable.insert(0, None);

    for (i, &v) in values.iter().enumerate() {
        let extended = reachable
            .keys()
            .map(|&sum| (sum + i64::from(v), sum))
            .filter(|(next, _)| !reachable.contains_key(next))
            .collect::<Vec<_>>();
        for (next, sum) in extended {
            reachable.entry(next).or_insert(Some((sum, i)));
        }
    }
    reachable
}

/// Follows the edges back from `sum` to the empty sum, marking each value used.
fn members_of(reachable: &BTreeMap<i64, Option<(i64, usize)>>, sum: i64, len: usize) -> BitVec {
    let mut members = bitvec![0; len];
    let mut current = sum;
    while let Some(&Some((previous, i))) = reachable.get(&current) {
        members.set(i, true);
        current = previous;
    }
    members
}

#[cfg(test)]
mod test;
