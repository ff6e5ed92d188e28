//! Standings manager: score aggregation over the match log.

use super::models::{ScoringMethod, StandingsRow};
use crate::db::repository::StandingsProvider;
use crate::registry::Scope;
use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::sync::Arc;
use thiserror::Error;

/// Standings errors
#[derive(Debug, Error)]
pub enum StandingsError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StandingsResult<T> = Result<T, StandingsError>;

/// Standings manager
#[derive(Clone)]
pub struct StandingsManager {
    pool: Arc<PgPool>,
}

impl StandingsManager {
    /// Create a new standings manager
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Compute current standings for the scope.
    ///
    /// Wins, draws, and matches played are aggregated in SQL; scoring and
    /// the final ordering happen here so the tie-break never depends on
    /// storage-engine row order. Players with no matches appear with zero
    /// records.
    pub async fn standings(
        &self,
        scope: Scope,
        scoring: ScoringMethod,
    ) -> StandingsResult<Vec<StandingsRow>> {
        let rows = match scope {
            Scope::Global => {
                sqlx::query(
                    r#"
                    SELECT p.id, p.name,
                           COUNT(m.id) FILTER (
                               WHERE (m.first_id = p.id AND m.outcome = 1)
                                  OR (m.second_id = p.id AND m.outcome = 2)
                           ) AS wins,
                           COUNT(m.id) FILTER (WHERE m.outcome = 0) AS draws,
                           COUNT(m.id) AS matches
                    FROM players p
                    LEFT JOIN matches m
                      ON m.first_id = p.id OR m.second_id = p.id
                    GROUP BY p.id, p.name
                    "#,
                )
                .fetch_all(self.pool.as_ref())
                .await?
            }
            Scope::Tournament(tournament_id) => {
                sqlx::query(
                    r#"
                    SELECT p.id, p.name,
                           COUNT(m.id) FILTER (
                               WHERE (m.first_id = p.id AND m.outcome = 1)
                                  OR (m.second_id = p.id AND m.outcome = 2)
                           ) AS wins,
                           COUNT(m.id) FILTER (WHERE m.outcome = 0) AS draws,
                           COUNT(m.id) AS matches
                    FROM players p
                    JOIN tournament_players tp
                      ON tp.player_id = p.id AND tp.tournament_id = $1
                    LEFT JOIN matches m
                      ON m.tournament_id = $1
                     AND (m.first_id = p.id OR m.second_id = p.id)
                    GROUP BY p.id, p.name
                    "#,
                )
                .bind(tournament_id)
                .fetch_all(self.pool.as_ref())
                .await?
            }
        };

        let mut standings: Vec<StandingsRow> = rows
            .into_iter()
            .map(|row| {
                let wins = row.get::<i64, _>("wins") as u32;
                let draws = row.get::<i64, _>("draws") as u32;
                let matches = row.get::<i64, _>("matches") as u32;
                StandingsRow {
                    id: row.get("id"),
                    name: row.get("name"),
                    wins,
                    draws,
                    matches,
                    score: scoring.score(wins, draws),
                }
            })
            .collect();

        sort_standings(&mut standings);
        Ok(standings)
    }

    /// Count players eligible for pairing within the scope
    pub async fn player_count(&self, scope: Scope) -> StandingsResult<u64> {
        let row = match scope {
            Scope::Global => {
                sqlx::query("SELECT COUNT(*) AS n FROM players")
                    .fetch_one(self.pool.as_ref())
                    .await?
            }
            Scope::Tournament(tournament_id) => {
                sqlx::query("SELECT COUNT(*) AS n FROM tournament_players WHERE tournament_id = $1")
                    .bind(tournament_id)
                    .fetch_one(self.pool.as_ref())
                    .await?
            }
        };

        let n: i64 = row.get("n");
        Ok(n as u64)
    }
}

/// Order standings by score descending, then player id ascending.
///
/// The id tie-break is the documented deterministic ordering: ids are
/// serial, so equal scores rank in registration order.
pub fn sort_standings(standings: &mut [StandingsRow]) {
    standings.sort_by(|a, b| b.score.cmp(&a.score).then(a.id.cmp(&b.id)));
}

#[async_trait]
impl StandingsProvider for StandingsManager {
    async fn standings(
        &self,
        scope: Scope,
        scoring: ScoringMethod,
    ) -> StandingsResult<Vec<StandingsRow>> {
        StandingsManager::standings(self, scope, scoring).await
    }

    async fn player_count(&self, scope: Scope) -> StandingsResult<u64> {
        StandingsManager::player_count(self, scope).await
    }
}
