/// Property-based tests for the pairing generator using proptest
///
/// These tests verify the pairing walk across randomly generated
/// standings of arbitrary size and score distribution.
use proptest::prelude::*;
use std::collections::BTreeSet;
use swiss_tournament::pairing::{PairingError, pair_round};
use swiss_tournament::standings::{ScoringMethod, StandingsRow, sort_standings};

// Strategy to generate an ordered standings list of the given size range.
// Ids are unique (index-based) and rows are sorted the way the standings
// read-model sorts them.
fn standings_strategy(min: usize, max: usize) -> impl Strategy<Value = Vec<StandingsRow>> {
    prop::collection::vec((0u32..=10, 0u32..=10), min..=max).prop_map(|records| {
        let mut standings: Vec<StandingsRow> = records
            .into_iter()
            .enumerate()
            .map(|(i, (wins, draws))| StandingsRow {
                id: i as i64 + 1,
                name: format!("player-{}", i + 1),
                wins,
                draws,
                matches: wins + draws,
                score: ScoringMethod::ThreePoint.score(wins, draws),
            })
            .collect();
        sort_standings(&mut standings);
        standings
    })
}

proptest! {
    #[test]
    fn test_even_field_yields_half_as_many_pairs(standings in standings_strategy(2, 64)
        .prop_filter("even field", |s| s.len() % 2 == 0))
    {
        let round = pair_round(&standings).unwrap();
        prop_assert_eq!(round.pairs.len(), standings.len() / 2);
        prop_assert!(round.bye.is_none(), "even field must not produce a bye");
    }

    #[test]
    fn test_odd_field_yields_floor_half_pairs_and_a_bye(standings in standings_strategy(3, 63)
        .prop_filter("odd field", |s| s.len() % 2 == 1))
    {
        let round = pair_round(&standings).unwrap();
        prop_assert_eq!(round.pairs.len(), standings.len() / 2);

        let bye = round.bye.as_ref().expect("odd field must produce a bye");
        let last = standings.last().unwrap();
        prop_assert_eq!(bye.player_id, last.id, "bye goes to the lowest-ranked player");
    }

    #[test]
    fn test_every_player_appears_exactly_once(standings in standings_strategy(2, 64)) {
        let round = pair_round(&standings).unwrap();

        let mut seen = BTreeSet::new();
        for pair in &round.pairs {
            prop_assert!(seen.insert(pair.first_id), "duplicate player in pairs");
            prop_assert!(seen.insert(pair.second_id), "duplicate player in pairs");
        }
        if let Some(bye) = &round.bye {
            prop_assert!(seen.insert(bye.player_id), "bye player also paired");
        }

        let all: BTreeSet<i64> = standings.iter().map(|row| row.id).collect();
        prop_assert_eq!(seen, all, "every player covered exactly once");
    }

    #[test]
    fn test_pairs_preserve_adjacency(standings in standings_strategy(2, 64)) {
        let round = pair_round(&standings).unwrap();

        for (i, pair) in round.pairs.iter().enumerate() {
            prop_assert_eq!(pair.first_id, standings[2 * i].id);
            prop_assert_eq!(pair.second_id, standings[2 * i + 1].id);
        }
    }

    #[test]
    fn test_pairing_is_deterministic(standings in standings_strategy(2, 64)) {
        let first = pair_round(&standings).unwrap();
        let second = pair_round(&standings).unwrap();
        prop_assert_eq!(first, second, "unchanged snapshot must pair identically");
    }

    #[test]
    fn test_short_field_is_rejected(standings in standings_strategy(0, 1)) {
        let err = pair_round(&standings).unwrap_err();
        prop_assert!(
            matches!(err, PairingError::InsufficientPlayers { .. }),
            "expected PairingError::InsufficientPlayers, got {:?}",
            err
        );
    }

    #[test]
    fn test_sorting_is_total_and_stable_on_ids(standings in standings_strategy(2, 64)) {
        for window in standings.windows(2) {
            let ordered = window[0].score > window[1].score
                || (window[0].score == window[1].score && window[0].id < window[1].id);
            prop_assert!(ordered, "standings must form a strict total order");
        }
    }
}
