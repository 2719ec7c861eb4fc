use std::collections::BTreeSet;

use super::parse::RetrievedIdSet;

/// The benchmark question the gold standard was curated for.
pub const BENCHMARK_QUESTION: &str =
    "What are the most influential cases on the implied warranty of habitability \
     in Washington State?";

/// Case ids considered the correct retrieval for the benchmark question.
const GOLD_STANDARD: [&str; 10] = [
    "615468", "1034620", "1127907", "1095193", "1186056", "2601920", "594079",
    "768356", "1005731", "1017660",
];

pub fn gold_standard_ids() -> BTreeSet<String> {
    GOLD_STANDARD.iter().map(|id| (*id).to_owned()).collect()
}

/// Recall of a retrieved-id set against a gold standard, in [0, 100].
///
/// The denominator is the live gold-standard size, so a re-curated
/// reference set cannot silently skew the score. An empty gold standard
/// scores 0 rather than dividing by zero.
pub fn recall_percentage(retrieved: &RetrievedIdSet, gold_standard: &BTreeSet<String>) -> f64 {
    if gold_standard.is_empty() {
        return 0.0;
    }

    let matches = retrieved
        .iter()
        .filter(|id| gold_standard.contains(id.as_str()))
        .count();
    100.0 * matches as f64 / gold_standard.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|id| (*id).to_owned()).collect()
    }

    #[test]
    fn gold_against_itself_is_full_recall() {
        let gold = gold_standard_ids();
        assert_eq!(recall_percentage(&gold, &gold), 100.0);
    }

    #[test]
    fn empty_retrieval_scores_zero() {
        assert_eq!(recall_percentage(&RetrievedIdSet::new(), &gold_standard_ids()), 0.0);
    }

    #[test]
    fn empty_gold_standard_scores_zero() {
        let retrieved = id_set(&["615468"]);
        assert_eq!(recall_percentage(&retrieved, &BTreeSet::new()), 0.0);
    }

    #[test]
    fn recall_moves_in_ten_point_steps_for_ten_gold_cases() {
        let gold = gold_standard_ids();
        let mut retrieved = RetrievedIdSet::new();
        for (index, id) in gold.iter().enumerate() {
            retrieved.insert(id.clone());
            let expected = 10.0 * (index + 1) as f64;
            assert_eq!(recall_percentage(&retrieved, &gold), expected);
        }
    }

    #[test]
    fn ids_outside_the_gold_standard_do_not_count() {
        let gold = gold_standard_ids();
        let retrieved = id_set(&["615468", "4953587", "1279441", "no-such-case"]);
        assert_eq!(recall_percentage(&retrieved, &gold), 10.0);
    }

    #[test]
    fn denominator_tracks_live_gold_standard_size() {
        let gold = id_set(&["a", "b", "c", "d"]);
        let retrieved = id_set(&["a"]);
        assert_eq!(recall_percentage(&retrieved, &gold), 25.0);
    }
}
