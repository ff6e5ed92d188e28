//! Match recording manager.

use super::models::{MatchOutcome, MatchRecord};
use crate::registry::{PlayerId, Scope, TournamentId};
use sqlx::{PgPool, Row};
use std::sync::Arc;
use thiserror::Error;

/// Match recording errors
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Unknown outcome code in match log: {0}")]
    UnknownOutcome(i16),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type MatchResult<T> = Result<T, MatchError>;

/// Match recording manager
#[derive(Clone)]
pub struct MatchManager {
    pool: Arc<PgPool>,
}

impl MatchManager {
    /// Create a new match manager
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Record a decisive match in the global registry.
    ///
    /// Sugar over [`report_result`](Self::report_result): the winner is
    /// listed first with a [`MatchOutcome::FirstWin`] outcome.
    pub async fn report_match(&self, winner: PlayerId, loser: PlayerId) -> MatchResult<i64> {
        self.insert(None, winner, loser, MatchOutcome::FirstWin)
            .await
    }

    /// Record the outcome of a single tournament match.
    ///
    /// The log is append-only; rematches and self-play are not rejected
    /// here, only referential existence of both players is enforced (by the
    /// schema's foreign keys).
    pub async fn report_result(
        &self,
        tournament_id: TournamentId,
        first_id: PlayerId,
        second_id: PlayerId,
        outcome: MatchOutcome,
    ) -> MatchResult<i64> {
        self.insert(Some(tournament_id), first_id, second_id, outcome)
            .await
    }

    async fn insert(
        &self,
        tournament_id: Option<TournamentId>,
        first_id: PlayerId,
        second_id: PlayerId,
        outcome: MatchOutcome,
    ) -> MatchResult<i64> {
        let row = sqlx::query(
            r#"
            INSERT INTO matches (tournament_id, first_id, second_id, outcome)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(tournament_id)
        .bind(first_id)
        .bind(second_id)
        .bind(outcome.code())
        .fetch_one(self.pool.as_ref())
        .await?;

        let id: i64 = row.get("id");
        log::debug!("recorded match {id}: {first_id} vs {second_id}, {outcome:?}");
        Ok(id)
    }

    /// List recorded matches within the scope, oldest first
    pub async fn list_matches(&self, scope: Scope) -> MatchResult<Vec<MatchRecord>> {
        let rows = match scope {
            Scope::Global => {
                sqlx::query(
                    "SELECT id, tournament_id, first_id, second_id, outcome, reported_at
                     FROM matches ORDER BY id",
                )
                .fetch_all(self.pool.as_ref())
                .await?
            }
            Scope::Tournament(tournament_id) => {
                sqlx::query(
                    "SELECT id, tournament_id, first_id, second_id, outcome, reported_at
                     FROM matches WHERE tournament_id = $1 ORDER BY id",
                )
                .bind(tournament_id)
                .fetch_all(self.pool.as_ref())
                .await?
            }
        };

        rows.into_iter()
            .map(|row| {
                let code: i16 = row.get("outcome");
                let outcome =
                    MatchOutcome::from_code(code).ok_or(MatchError::UnknownOutcome(code))?;
                Ok(MatchRecord {
                    id: row.get("id"),
                    tournament_id: row.get("tournament_id"),
                    first_id: row.get("first_id"),
                    second_id: row.get("second_id"),
                    outcome,
                    reported_at: row.get::<chrono::NaiveDateTime, _>("reported_at").and_utc(),
                })
            })
            .collect()
    }

    /// Remove match records within the scope
    pub async fn delete_matches(&self, scope: Scope) -> MatchResult<()> {
        match scope {
            Scope::Global => {
                sqlx::query("DELETE FROM matches")
                    .execute(self.pool.as_ref())
                    .await?;
            }
            Scope::Tournament(tournament_id) => {
                sqlx::query("DELETE FROM matches WHERE tournament_id = $1")
                    .bind(tournament_id)
                    .execute(self.pool.as_ref())
                    .await?;
            }
        }

        log::info!("deleted matches in scope {scope:?}");
        Ok(())
    }
}
