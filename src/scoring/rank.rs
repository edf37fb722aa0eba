use crate::fpl::types::LiveEntry;

/// Something that can be placed in a league table by gameweek score.
pub trait Ranked {
    fn gameweek_score(&self) -> i32;
    fn set_rank(&mut self, rank: u32);
}

impl Ranked for LiveEntry {
    fn gameweek_score(&self) -> i32 {
        self.gw_point
    }

    fn set_rank(&mut self, rank: u32) {
        self.rank = rank;
    }
}

/// Sort by gameweek score, highest first, and renumber ranks from 1.
///
/// Equal scores keep their input order and still get distinct ranks; the
/// upstream tie-break rules are not replicated.
pub fn rank_by_gameweek_points<T: Ranked>(mut entries: Vec<T>) -> Vec<T> {
    entries.sort_by_key(|e| std::cmp::Reverse(e.gameweek_score()));
    for (idx, entry) in entries.iter_mut().enumerate() {
        entry.set_rank(idx as u32 + 1);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Row {
        id: u32,
        score: i32,
        rank: u32,
    }

    impl Ranked for Row {
        fn gameweek_score(&self) -> i32 {
            self.score
        }

        fn set_rank(&mut self, rank: u32) {
            self.rank = rank;
        }
    }

    fn rows(scores: &[i32]) -> Vec<Row> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| Row {
                id: i as u32,
                score,
                rank: 0,
            })
            .collect()
    }

    fn rank_of(ranked: &[Row], id: u32) -> u32 {
        ranked.iter().find(|r| r.id == id).map(|r| r.rank).unwrap()
    }

    #[test]
    fn test_ties_get_increasing_ranks_in_input_order() {
        let ranked = rank_by_gameweek_points(rows(&[50, 70, 70, 60]));

        let by_input: Vec<u32> = (0..4).map(|id| rank_of(&ranked, id)).collect();
        assert_eq!(by_input, vec![4, 1, 2, 3]);
    }

    #[test]
    fn test_output_is_sorted_descending() {
        let ranked = rank_by_gameweek_points(rows(&[3, -4, 12, 0]));
        let scores: Vec<i32> = ranked.iter().map(|r| r.score).collect();
        let ranks: Vec<u32> = ranked.iter().map(|r| r.rank).collect();

        assert_eq!(scores, vec![12, 3, 0, -4]);
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_league() {
        let ranked: Vec<Row> = rank_by_gameweek_points(Vec::new());
        assert!(ranked.is_empty());
    }
}
