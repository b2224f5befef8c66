use std::cmp::Ordering;

use wars_types::PlayerRecord;

pub struct RankingEngine;

impl RankingEngine {
    /// Compare two player records for leaderboard order, best first.
    ///
    /// Keys, in order: a record without a score sorts last; more correct
    /// letters; more present letters; fewer rows used; earlier finish time
    /// (only when both players have actually finished).
    pub fn compare(a: &PlayerRecord, b: &PlayerRecord) -> Ordering {
        match (&a.score, &b.score) {
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (Some(score_a), Some(score_b)) => {
                let by_correct = score_b.correct.cmp(&score_a.correct);
                if by_correct != Ordering::Equal {
                    return by_correct;
                }
                let by_present = score_b.present.cmp(&score_a.present);
                if by_present != Ordering::Equal {
                    return by_present;
                }
            }
            (None, None) => {}
        }

        let by_rows = a.rows_complete.cmp(&b.rows_complete);
        if by_rows != Ordering::Equal {
            return by_rows;
        }

        if let (Some(time_a), Some(time_b)) = (a.time_finished, b.time_finished) {
            return time_a.cmp(&time_b);
        }

        Ordering::Equal
    }

    /// Sort a snapshot of player records into leaderboard order.
    ///
    /// The sort is stable: records tied on every key keep their input
    /// order. Operates in place on the caller's snapshot copy.
    pub fn rank(records: &mut [PlayerRecord]) {
        records.sort_by(Self::compare);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wars_types::{GameStage, PlayerScore};

    fn record(name: &str, score: Option<PlayerScore>) -> PlayerRecord {
        PlayerRecord {
            name: name.to_string(),
            board: String::new(),
            stage: GameStage::Playing,
            score,
            rows_complete: 0,
            time_finished: None,
        }
    }

    fn score(correct: u32, present: u32, absent: u32) -> PlayerScore {
        PlayerScore {
            correct,
            present,
            absent,
        }
    }

    #[test]
    fn test_more_correct_ranks_first() {
        let a = record("a", Some(score(3, 1, 1)));
        let b = record("b", Some(score(5, 0, 0)));
        assert_eq!(RankingEngine::compare(&b, &a), Ordering::Less);
        assert_eq!(RankingEngine::compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_present_breaks_correct_tie() {
        let a = record("a", Some(score(2, 3, 0)));
        let b = record("b", Some(score(2, 1, 2)));
        assert_eq!(RankingEngine::compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_missing_score_sorts_last() {
        let unscored = record("unscored", None);
        let scored = record("scored", Some(score(1, 0, 4)));
        assert_eq!(RankingEngine::compare(&unscored, &scored), Ordering::Greater);
        assert_eq!(RankingEngine::compare(&scored, &unscored), Ordering::Less);
    }

    #[test]
    fn test_both_missing_scores_fall_through_to_rows() {
        let mut a = record("a", None);
        let mut b = record("b", None);
        a.rows_complete = 4;
        b.rows_complete = 2;
        assert_eq!(RankingEngine::compare(&b, &a), Ordering::Less);
    }

    #[test]
    fn test_fewer_rows_ranks_first() {
        let mut a = record("a", Some(score(5, 0, 0)));
        let mut b = record("b", Some(score(5, 0, 0)));
        a.rows_complete = 3;
        b.rows_complete = 5;
        assert_eq!(RankingEngine::compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_earlier_finish_ranks_first() {
        let mut a = record("a", Some(score(5, 0, 0)));
        let mut b = record("b", Some(score(5, 0, 0)));
        a.time_finished = Some(1_650_000_500_000);
        b.time_finished = Some(1_650_000_100_000);
        assert_eq!(RankingEngine::compare(&b, &a), Ordering::Less);
    }

    #[test]
    fn test_finish_time_ignored_unless_both_present() {
        let mut a = record("a", Some(score(5, 0, 0)));
        let b = record("b", Some(score(5, 0, 0)));
        a.time_finished = Some(1_650_000_500_000);
        assert_eq!(RankingEngine::compare(&a, &b), Ordering::Equal);
        assert_eq!(RankingEngine::compare(&b, &a), Ordering::Equal);
    }

    #[test]
    fn test_compare_does_not_mutate_inputs() {
        let a = record("a", Some(score(2, 3, 0)));
        let b = record("b", Some(score(2, 1, 2)));
        let a_before = a.clone();
        let b_before = b.clone();

        RankingEngine::compare(&a, &b);
        RankingEngine::compare(&b, &a);

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_rank_empty_and_single() {
        let mut empty: Vec<PlayerRecord> = Vec::new();
        RankingEngine::rank(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![record("only", None)];
        RankingEngine::rank(&mut single);
        assert_eq!(single[0].name, "only");
    }
}
