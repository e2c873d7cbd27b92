use itertools::Itertools;

use crate::types::{Pattern, PatternCounts};

/// GSP join: `a` and `b` (both of length k-1) yield `a + [b.last]` whenever
/// `a` without its first item equals `b` without its last item.
///
/// Every ordered pair is tried, a pattern paired with itself included. The
/// output has no duplicates; its order carries no meaning.
pub fn join_step(patterns: &[Pattern]) -> Vec<Pattern> {
    patterns
        .iter()
        .cartesian_product(patterns.iter())
        .filter_map(|(a, b)| match (a.split_first(), b.split_last()) {
            (Some((_, a_tail)), Some((&b_last, b_init))) if a_tail == b_init => {
                let mut candidate = Vec::with_capacity(a.len() + 1);
                candidate.extend_from_slice(a);
                candidate.push(b_last);
                Some(candidate)
            }
            _ => None,
        })
        .unique()
        .collect()
}

/// Drop candidates with an infrequent length-(k-1) subsequence.
///
/// Only interior deletions are checked: deleting the first or last item gives
/// back the two patterns the candidate was joined from.
pub fn prune_step(candidates: Vec<Pattern>, frequent: &PatternCounts) -> Vec<Pattern> {
    let mut subsequence: Pattern = Vec::new();

    candidates
        .into_iter()
        .filter(|candidate| {
            (1..candidate.len().saturating_sub(1)).all(|skip| {
                subsequence.clear();
                subsequence.extend(
                    candidate
                        .iter()
                        .enumerate()
                        .filter(|&(i, _)| i != skip)
                        .map(|(_, &item)| item),
                );
                frequent.contains_key(&subsequence)
            })
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use maplit::hashmap;
    use std::collections::HashSet;

    fn as_set(patterns: Vec<Pattern>) -> HashSet<Pattern> {
        patterns.into_iter().collect()
    }

    #[test]
    fn test_join_step_singletons() {
        let y = join_step(&[vec![1], vec![2]]);
        assert_eq!(y.len(), 4);
        assert_eq!(
            as_set(y),
            as_set(vec![vec![1, 1], vec![1, 2], vec![2, 1], vec![2, 2]])
        );
    }

    #[test]
    fn test_join_step_overlap() {
        let patterns: Vec<Pattern> = vec![vec![1, 2], vec![2, 3], vec![2, 1]];
        let y = join_step(&patterns);
        assert_eq!(
            as_set(y),
            as_set(vec![vec![1, 2, 3], vec![1, 2, 1], vec![2, 1, 2]])
        );
    }

    #[test]
    fn test_join_step_self_join() {
        let y = join_step(&[vec![4, 4]]);
        assert_eq!(y, vec![vec![4, 4, 4]]);
    }

    #[test]
    fn test_join_step_no_overlap() {
        let y = join_step(&[vec![1, 2], vec![3, 4]]);
        assert!(y.is_empty());
    }

    #[test]
    fn test_join_step_empty() {
        assert!(join_step(&[]).is_empty());
    }

    #[test]
    fn test_join_step_deduplicates() {
        let patterns: Vec<Pattern> = vec![vec![1, 2], vec![2, 3], vec![1, 2]];
        let y = join_step(&patterns);
        assert_eq!(y, vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_join_step_is_deterministic_as_a_set() {
        let patterns: Vec<Pattern> = vec![vec![1, 2], vec![2, 3], vec![3, 1], vec![2, 2]];
        let mut reversed = patterns.clone();
        reversed.reverse();
        assert_eq!(as_set(join_step(&patterns)), as_set(join_step(&reversed)));
    }

    #[test]
    fn test_prune_step_drops_infrequent_interior_subsequence() {
        let frequent = hashmap! {
            vec![1, 2] => 2,
            vec![2, 3] => 2,
        };
        // [1, 2, 3] needs [1, 3], which is not frequent
        let y = prune_step(vec![vec![1, 2, 3]], &frequent);
        assert!(y.is_empty());
    }

    #[test]
    fn test_prune_step_keeps_supported_candidates() {
        let frequent = hashmap! {
            vec![1, 2] => 2,
            vec![1, 3] => 2,
            vec![2, 3] => 2,
        };
        let y = prune_step(vec![vec![1, 2, 3]], &frequent);
        assert_eq!(y, vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_prune_step_leaves_length_two_alone() {
        let frequent = hashmap! { vec![1] => 1 };
        let y = prune_step(vec![vec![1, 7]], &frequent);
        assert_eq!(y, vec![vec![1, 7]]);
    }
}
