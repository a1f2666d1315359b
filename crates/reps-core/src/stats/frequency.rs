//! Most-common type and feeling.
//!
//! Ties are broken by the lexicographically smallest stored name, so the
//! answer does not depend on the order sessions were loaded in.

use std::collections::BTreeMap;

use crate::storage::{Feeling, MovementSession, MovementType};

pub fn type_counts(sessions: &[MovementSession]) -> BTreeMap<MovementType, usize> {
    let mut counts = BTreeMap::new();
    for session in sessions {
        *counts.entry(session.movement_type).or_insert(0) += 1;
    }
    counts
}

pub fn feeling_counts(sessions: &[MovementSession]) -> BTreeMap<Feeling, usize> {
    let mut counts = BTreeMap::new();
    for session in sessions {
        *counts.entry(session.feeling).or_insert(0) += 1;
    }
    counts
}

pub fn most_common_type(sessions: &[MovementSession]) -> Option<(MovementType, usize)> {
    most_common(&type_counts(sessions), |t| t.as_str())
}

pub fn most_common_feeling(sessions: &[MovementSession]) -> Option<(Feeling, usize)> {
    most_common(&feeling_counts(sessions), |f| f.as_str())
}

fn most_common<K: Copy>(
    counts: &BTreeMap<K, usize>,
    name: impl Fn(&K) -> &'static str,
) -> Option<(K, usize)> {
    counts
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| name(b.0).cmp(name(a.0))))
        .map(|(key, count)| (*key, *count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::test_support::{day, session_on};

    #[test]
    fn test_empty_has_no_most_common() {
        assert_eq!(most_common_type(&[]), None);
        assert_eq!(most_common_feeling(&[]), None);
    }

    #[test]
    fn test_counts_and_winner() {
        let d = day(2026, 4, 1);
        let sessions = vec![
            session_on(d, MovementType::Ran, Feeling::Alive),
            session_on(d, MovementType::Lifted, Feeling::Strong),
            session_on(d, MovementType::Ran, Feeling::Strong),
        ];
        assert_eq!(type_counts(&sessions).get(&MovementType::Ran), Some(&2));
        assert_eq!(most_common_type(&sessions), Some((MovementType::Ran, 2)));
        assert_eq!(most_common_feeling(&sessions), Some((Feeling::Strong, 2)));
    }

    #[test]
    fn test_tie_breaks_on_name_not_order() {
        let d = day(2026, 4, 1);
        let forward = vec![
            session_on(d, MovementType::Walked, Feeling::Rough),
            session_on(d, MovementType::Lifted, Feeling::Easy),
        ];
        let mut backward = forward.clone();
        backward.reverse();

        // "lifted" < "walked", "easy" < "rough"
        for sessions in [forward, backward] {
            assert_eq!(most_common_type(&sessions), Some((MovementType::Lifted, 1)));
            assert_eq!(most_common_feeling(&sessions), Some((Feeling::Easy, 1)));
        }
    }
}
