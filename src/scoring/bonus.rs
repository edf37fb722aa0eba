//! Provisional bonus allocation from the Bonus Points System (BPS).
//!
//! Bonus is awarded to the three highest *distinct* BPS values of a fixture:
//! 3 points for the highest, 2 for the next, 1 for the third. Every player
//! sharing a value receives that tier's award, and a tie never consumes the
//! tiers below it.

use std::collections::HashMap;

use crate::{
    cli::types::{ElementId, FixtureId},
    fpl::types::{Fixture, StatValue, BPS_IDENTIFIER},
};

/// Bonus points per player for a single fixture. Absent players earned 0.
pub type BonusMap = HashMap<ElementId, u8>;

/// Number of bonus tiers per fixture (3, 2, 1 points).
pub const BONUS_TIERS: u8 = 3;

/// Derive the bonus map for one fixture from its `bps` statistic.
///
/// A fixture that has not kicked off carries no `bps` stat and yields an
/// empty map.
pub fn allocate_bonus(fixture: &Fixture) -> BonusMap {
    let Some(bps) = fixture.stat(BPS_IDENTIFIER) else {
        return BonusMap::new();
    };
    allocate_from_bps(bps.h.iter().chain(bps.a.iter()))
}

/// Allocate bonus over an arbitrary set of BPS values (home and away merged).
pub fn allocate_from_bps<'a, I>(values: I) -> BonusMap
where
    I: IntoIterator<Item = &'a StatValue>,
{
    let mut ranked: Vec<&StatValue> = values.into_iter().collect();
    // stable: equal values keep their home-then-away order
    ranked.sort_by(|a, b| b.value.cmp(&a.value));

    let mut awards = BonusMap::new();
    for (tier, group) in ranked
        .chunk_by(|a, b| a.value == b.value)
        .take(BONUS_TIERS as usize)
        .enumerate()
    {
        let bonus = BONUS_TIERS - tier as u8;
        for stat in group {
            awards.insert(stat.element, bonus);
        }
    }
    awards
}

/// Build the per-request bonus index for every fixture of a gameweek.
pub fn bonus_by_fixture(fixtures: &[Fixture]) -> HashMap<FixtureId, BonusMap> {
    fixtures
        .iter()
        .map(|f| (f.id, allocate_bonus(f)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fpl::types::FixtureStat;
    use crate::TeamId;

    fn sv(element: u32, value: i32) -> StatValue {
        StatValue {
            element: ElementId::new(element),
            value,
        }
    }

    fn fixture_with_bps(h: Vec<StatValue>, a: Vec<StatValue>) -> Fixture {
        Fixture {
            id: FixtureId::new(1),
            event: None,
            team_h: TeamId::new(1),
            team_a: TeamId::new(2),
            team_h_score: None,
            team_a_score: None,
            kickoff_time: None,
            started: Some(true),
            finished: false,
            finished_provisional: false,
            minutes: 60,
            stats: vec![FixtureStat {
                identifier: BPS_IDENTIFIER.to_string(),
                a,
                h,
            }],
        }
    }

    #[test]
    fn test_tie_for_first_shares_top_tier() {
        // A, B, C, D, E, F = 1..=6
        let values = [sv(1, 40), sv(2, 40), sv(3, 35), sv(4, 30), sv(5, 30), sv(6, 20)];
        let awards = allocate_from_bps(values.iter());

        assert_eq!(awards.len(), 5);
        assert_eq!(awards[&ElementId::new(1)], 3);
        assert_eq!(awards[&ElementId::new(2)], 3);
        assert_eq!(awards[&ElementId::new(3)], 2);
        assert_eq!(awards[&ElementId::new(4)], 1);
        assert_eq!(awards[&ElementId::new(5)], 1);
        assert!(!awards.contains_key(&ElementId::new(6)));
    }

    #[test]
    fn test_distinct_values_get_three_two_one() {
        let fixture = fixture_with_bps(
            vec![sv(10, 25), sv(11, 31)],
            vec![sv(20, 28), sv(21, 12)],
        );
        let awards = allocate_bonus(&fixture);

        assert_eq!(awards.get(&ElementId::new(11)), Some(&3));
        assert_eq!(awards.get(&ElementId::new(20)), Some(&2));
        assert_eq!(awards.get(&ElementId::new(10)), Some(&1));
        assert_eq!(awards.get(&ElementId::new(21)), None);
    }

    #[test]
    fn test_home_and_away_are_merged() {
        let fixture = fixture_with_bps(vec![sv(1, 10)], vec![sv(2, 30), sv(3, 20)]);
        let awards = allocate_bonus(&fixture);

        assert_eq!(awards[&ElementId::new(2)], 3);
        assert_eq!(awards[&ElementId::new(3)], 2);
        assert_eq!(awards[&ElementId::new(1)], 1);
    }

    #[test]
    fn test_missing_bps_stat_yields_empty_map() {
        let mut fixture = fixture_with_bps(vec![], vec![]);
        fixture.stats.clear();
        assert!(allocate_bonus(&fixture).is_empty());
    }

    #[test]
    fn test_empty_bps_list_yields_empty_map() {
        let fixture = fixture_with_bps(vec![], vec![]);
        assert!(allocate_bonus(&fixture).is_empty());
    }

    #[test]
    fn test_fewer_than_three_values() {
        let values = [sv(1, 5), sv(2, 5)];
        let awards = allocate_from_bps(values.iter());
        assert_eq!(awards.len(), 2);
        assert!(awards.values().all(|b| *b == 3));
    }

    #[test]
    fn test_bonus_by_fixture_indexes_every_fixture() {
        let mut started = fixture_with_bps(vec![sv(1, 50)], vec![]);
        started.id = FixtureId::new(7);
        let mut not_started = fixture_with_bps(vec![], vec![]);
        not_started.id = FixtureId::new(8);
        not_started.stats.clear();

        let index = bonus_by_fixture(&[started, not_started]);
        assert_eq!(index.len(), 2);
        assert_eq!(index[&FixtureId::new(7)][&ElementId::new(1)], 3);
        assert!(index[&FixtureId::new(8)].is_empty());
    }
}
