use itertools::Itertools;
use proptest::prelude::*;

use super::*;

fn brute_force_min_difference(values: &[i32]) -> i64 {
    let total: i64 = values.iter().map(|&v| i64::from(v)).sum();
    (0..values.len())
        .powerset()
        .map(|picked| {
            let sum: i64 = picked.iter().map(|&i| i64::from(values[i])).sum();
            (total - 2 * sum).abs()
        })
        .min()
        .unwrap_or(0)
}

fn is_rearrangement(split: &Partition, values: &[i32]) -> bool {
    let joined = split
        .subsets()
        .iter()
        .flat_map(|s| s.values().iter().copied())
        .sorted()
        .collect_vec();
    joined == values.iter().copied().sorted().collect_vec()
}

#[test]
fn empty_list_is_not_split() {
    let split = partition(&[]);
    assert!(split.subsets().is_empty());
    assert_eq!(split.difference(), None);
}

#[test]
fn two_values_are_not_split() {
    assert!(partition(&[1, 2]).subsets().is_empty());
}

#[test]
fn simple_list_gives_two_subsets() {
    let split = partition(&[1, 2, 3]);
    assert_eq!(split.subsets().len(), 2, "It should consist of two subsets.");
    assert_eq!(split.difference(), Some(0));
}

#[test]
fn sum_difference_is_minimal() {
    let split = partition(&[1, 3, 5]);
    assert_eq!(split.difference(), Some(1));
    assert_eq!(split.subsets()[0].sum(), 4);
    assert_eq!(split.subsets()[1].sum(), 5);
}

#[test]
fn negative_values_are_balanced() {
    let values = [-7, 3, 4, 10, -2];
    let split = partition(&values);
    assert_eq!(split.difference(), Some(brute_force_min_difference(&values)));
    assert!(is_rearrangement(&split, &values));
}

#[test]
fn subsets_keep_input_order() {
    let split = partition(&[5, 1, 4, 2]);
    similar_asserts::assert_eq!(
        split
            .subsets()
            .iter()
            .map(|s| s.values().to_vec())
            .collect_vec(),
        vec![vec![5, 1], vec![4, 2]]
    );
}

#[test]
fn many_spread_out_values_are_split() {
    let values: Vec<i32> = (0..18).map(|k| 1 << k).collect();
    let split = partition(&values);
    assert_eq!(split.difference(), Some(1));
    assert_eq!(split.subsets()[1].values(), &[1 << 17]);
    assert!(is_rearrangement(&split, &values));
}

#[test]
fn edges_lead_back_to_the_first_subset_reaching_a_sum() {
    let values = [2, 3, 5];
    let reachable = reachable_sums(&values);
    assert_eq!(reachable.len(), 7);
    // 5 is first reached as 2 + 3, before the lone 5 is considered.
    let members = members_of(&reachable, 5, values.len());
    assert_eq!(members.iter().by_vals().collect_vec(), vec![true, true, false]);
}

proptest! {
    #[test]
    fn split_is_minimal_and_complete(values in prop::collection::vec(-20i32..20, 3..10)) {
        let split = partition(&values);
        prop_assert_eq!(split.subsets().len(), 2);
        prop_assert!(is_rearrangement(&split, &values));
        prop_assert_eq!(split.difference(), Some(brute_force_min_difference(&values)));
    }
}
