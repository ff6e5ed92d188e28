//! The pairing generator.
//!
//! [`pair_round`] is the pure core: it walks an already-ordered standings
//! list two rows at a time, so each matchup joins players of equal or
//! nearly-equal standing. [`PairingManager`] wraps it with the two storage
//! reads the walk needs.

use super::models::{Bye, Pairing, RoundPairings};
use crate::db::repository::StandingsProvider;
use crate::registry::Scope;
use crate::standings::{ScoringMethod, StandingsError, StandingsRow};
use std::sync::Arc;
use thiserror::Error;

/// Pairing errors
#[derive(Debug, Error)]
pub enum PairingError {
    #[error("Insufficient players to pair: have {available}, need at least 2")]
    InsufficientPlayers { available: usize },

    #[error("Standings error: {0}")]
    Standings(#[from] StandingsError),
}

pub type PairingResult<T> = Result<T, PairingError>;

/// Pair adjacent rows of an ordered standings list.
///
/// The caller supplies rows already sorted by score descending with a
/// deterministic tie-break (see [`crate::standings::sort_standings`]); the
/// walk itself never re-sorts. Rows 0 and 1 form the first pairing, rows 2
/// and 3 the second, and so on. With an odd field the trailing
/// lowest-ranked row becomes the bye.
///
/// Pure function over its input: an unchanged snapshot always yields the
/// same round.
///
/// # Errors
///
/// [`PairingError::InsufficientPlayers`] when fewer than two rows are
/// supplied.
pub fn pair_round(standings: &[StandingsRow]) -> PairingResult<RoundPairings> {
    if standings.len() < 2 {
        return Err(PairingError::InsufficientPlayers {
            available: standings.len(),
        });
    }

    let mut chunks = standings.chunks_exact(2);
    let pairs = chunks
        .by_ref()
        .map(|pair| Pairing {
            first_id: pair[0].id,
            first_name: pair[0].name.clone(),
            second_id: pair[1].id,
            second_name: pair[1].name.clone(),
        })
        .collect();

    let bye = chunks.remainder().first().map(|row| Bye {
        player_id: row.id,
        player_name: row.name.clone(),
    });

    Ok(RoundPairings { pairs, bye })
}

/// Pairing manager: fetches standings and generates the next round
#[derive(Clone)]
pub struct PairingManager {
    standings: Arc<dyn StandingsProvider>,
}

impl PairingManager {
    /// Create a new pairing manager over a standings source
    pub fn new(standings: Arc<dyn StandingsProvider>) -> Self {
        Self { standings }
    }

    /// Generate pairings for the next round within the scope.
    ///
    /// # Errors
    ///
    /// [`PairingError::InsufficientPlayers`] when fewer than two players
    /// are eligible, or a propagated standings read failure.
    pub async fn next_round(
        &self,
        scope: Scope,
        scoring: ScoringMethod,
    ) -> PairingResult<RoundPairings> {
        let available = self.standings.player_count(scope).await? as usize;
        if available < 2 {
            return Err(PairingError::InsufficientPlayers { available });
        }

        let standings = self.standings.standings(scope, scoring).await?;
        let round = pair_round(&standings)?;

        log::debug!(
            "paired {} players in scope {scope:?}: {} pairs, bye {}",
            round.player_count(),
            round.pairs.len(),
            round.bye.is_some(),
        );
        Ok(round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::mock::MockStandingsProvider;

    fn rows(records: &[(i64, &str, u32)]) -> Vec<StandingsRow> {
        records
            .iter()
            .map(|&(id, name, wins)| StandingsRow {
                id,
                name: name.to_string(),
                wins,
                draws: 0,
                matches: 2,
                score: ScoringMethod::WinCount.score(wins, 0),
            })
            .collect()
    }

    #[test]
    fn test_pairs_adjacent_rows() {
        // The documented reference case: four players, two wins down to
        // zero, pairs (A, B) and (C, D).
        let standings = rows(&[(1, "A", 2), (2, "B", 2), (3, "C", 1), (4, "D", 0)]);

        let round = pair_round(&standings).unwrap();
        assert_eq!(round.pairs.len(), 2);
        assert!(round.bye.is_none());

        assert_eq!(round.pairs[0].first_id, 1);
        assert_eq!(round.pairs[0].first_name, "A");
        assert_eq!(round.pairs[0].second_id, 2);
        assert_eq!(round.pairs[0].second_name, "B");

        assert_eq!(round.pairs[1].first_id, 3);
        assert_eq!(round.pairs[1].second_id, 4);
    }

    #[test]
    fn test_empty_standings_rejected() {
        let err = pair_round(&[]).unwrap_err();
        assert!(matches!(
            err,
            PairingError::InsufficientPlayers { available: 0 }
        ));
    }

    #[test]
    fn test_single_player_rejected() {
        let standings = rows(&[(1, "A", 0)]);
        let err = pair_round(&standings).unwrap_err();
        assert!(matches!(
            err,
            PairingError::InsufficientPlayers { available: 1 }
        ));
    }

    #[test]
    fn test_odd_field_gives_lowest_ranked_the_bye() {
        let standings = rows(&[(1, "A", 2), (2, "B", 1), (3, "C", 0)]);

        let round = pair_round(&standings).unwrap();
        assert_eq!(round.pairs.len(), 1);
        assert_eq!(round.pairs[0].first_id, 1);
        assert_eq!(round.pairs[0].second_id, 2);

        let bye = round.bye.expect("odd field must produce a bye");
        assert_eq!(bye.player_id, 3);
        assert_eq!(bye.player_name, "C");
    }

    #[test]
    fn test_every_player_covered_exactly_once() {
        let standings = rows(&[
            (1, "A", 3),
            (2, "B", 2),
            (3, "C", 2),
            (4, "D", 1),
            (5, "E", 1),
            (6, "F", 0),
            (7, "G", 0),
        ]);

        let round = pair_round(&standings).unwrap();
        assert_eq!(round.pairs.len(), 3);
        assert_eq!(round.player_count(), 7);

        let mut seen: Vec<i64> = round
            .pairs
            .iter()
            .flat_map(|p| [p.first_id, p.second_id])
            .chain(round.bye.iter().map(|b| b.player_id))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_pairing_is_idempotent() {
        let standings = rows(&[(1, "A", 2), (2, "B", 2), (3, "C", 1), (4, "D", 0)]);
        let first = pair_round(&standings).unwrap();
        let second = pair_round(&standings).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_manager_pairs_from_provider() {
        let provider = MockStandingsProvider::new()
            .with_record(1, "Alice", 2, 0, 2)
            .with_record(2, "Bob", 2, 0, 2)
            .with_record(3, "Carol", 1, 0, 2)
            .with_record(4, "Dave", 0, 0, 2);
        let manager = PairingManager::new(Arc::new(provider));

        let round = manager
            .next_round(Scope::Global, ScoringMethod::WinCount)
            .await
            .unwrap();

        assert_eq!(round.pairs.len(), 2);
        // Alice and Bob tie on two wins; Alice registered first.
        assert_eq!(round.pairs[0].first_name, "Alice");
        assert_eq!(round.pairs[0].second_name, "Bob");
        assert_eq!(round.pairs[1].first_name, "Carol");
        assert_eq!(round.pairs[1].second_name, "Dave");
    }

    #[tokio::test]
    async fn test_manager_rejects_short_field_before_reading_standings() {
        let provider = MockStandingsProvider::new().with_record(1, "Alice", 0, 0, 0);
        let manager = PairingManager::new(Arc::new(provider));

        let err = manager
            .next_round(Scope::Global, ScoringMethod::WinCount)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PairingError::InsufficientPlayers { available: 1 }
        ));
    }

    #[tokio::test]
    async fn test_manager_three_point_scoring_reorders_field() {
        // Under ThreePoint, three draws (3 pts) tie one win (3 pts) and a
        // draw-heavy record can pass a single-win record with fewer draws.
        let provider = MockStandingsProvider::new()
            .with_record(1, "Alice", 1, 0, 4) // 3 pts
            .with_record(2, "Bob", 0, 3, 4) // 3 pts, later registration
            .with_record(3, "Carol", 1, 2, 4) // 5 pts
            .with_record(4, "Dave", 0, 0, 4); // 0 pts
        let manager = PairingManager::new(Arc::new(provider));

        let round = manager
            .next_round(Scope::Global, ScoringMethod::ThreePoint)
            .await
            .unwrap();

        assert_eq!(round.pairs[0].first_name, "Carol");
        assert_eq!(round.pairs[0].second_name, "Alice");
        assert_eq!(round.pairs[1].first_name, "Bob");
        assert_eq!(round.pairs[1].second_name, "Dave");
    }
}
