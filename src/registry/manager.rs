//! Registration manager for players and tournaments.

use super::models::{Player, PlayerId, Scope, Tournament, TournamentId};
use sqlx::{PgPool, Row};
use std::sync::Arc;
use thiserror::Error;

/// Registration errors
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("Tournament not found: {0}")]
    TournamentNotFound(TournamentId),

    #[error("Player {player_id} already enrolled in tournament {tournament_id}")]
    AlreadyEnrolled {
        tournament_id: TournamentId,
        player_id: PlayerId,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registration manager
#[derive(Clone)]
pub struct RegistryManager {
    pool: Arc<PgPool>,
}

impl RegistryManager {
    /// Create a new registration manager
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Register a player. The database assigns the id.
    pub async fn register_player(&self, name: &str) -> RegistryResult<PlayerId> {
        let row = sqlx::query("INSERT INTO players (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(self.pool.as_ref())
            .await?;

        let id: PlayerId = row.get("id");
        log::debug!("registered player {id} ({name})");
        Ok(id)
    }

    /// Register a tournament. The database assigns the id.
    pub async fn register_tournament(
        &self,
        name: &str,
        description: &str,
    ) -> RegistryResult<TournamentId> {
        let row =
            sqlx::query("INSERT INTO tournaments (name, description) VALUES ($1, $2) RETURNING id")
                .bind(name)
                .bind(description)
                .fetch_one(self.pool.as_ref())
                .await?;

        let id: TournamentId = row.get("id");
        log::debug!("registered tournament {id} ({name})");
        Ok(id)
    }

    /// Enroll an already-registered player in a tournament
    pub async fn enroll_player(
        &self,
        tournament_id: TournamentId,
        player_id: PlayerId,
    ) -> RegistryResult<()> {
        self.get_tournament(tournament_id).await?;

        sqlx::query("SELECT id FROM players WHERE id = $1")
            .bind(player_id)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or(RegistryError::PlayerNotFound(player_id))?;

        let existing = sqlx::query(
            "SELECT player_id FROM tournament_players WHERE tournament_id = $1 AND player_id = $2",
        )
        .bind(tournament_id)
        .bind(player_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        if existing.is_some() {
            return Err(RegistryError::AlreadyEnrolled {
                tournament_id,
                player_id,
            });
        }

        sqlx::query("INSERT INTO tournament_players (tournament_id, player_id) VALUES ($1, $2)")
            .bind(tournament_id)
            .bind(player_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    /// Count registered players within the scope
    pub async fn count_players(&self, scope: Scope) -> RegistryResult<u64> {
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

    /// List players within the scope, in registration order
    pub async fn list_players(&self, scope: Scope) -> RegistryResult<Vec<Player>> {
        let rows = match scope {
            Scope::Global => {
                sqlx::query("SELECT id, name, created_at FROM players ORDER BY id")
                    .fetch_all(self.pool.as_ref())
                    .await?
            }
            Scope::Tournament(tournament_id) => {
                sqlx::query(
                    r#"
                    SELECT players.id, players.name, players.created_at
                    FROM players
                    JOIN tournament_players ON players.id = tournament_players.player_id
                    WHERE tournament_players.tournament_id = $1
                    ORDER BY players.id
                    "#,
                )
                .bind(tournament_id)
                .fetch_all(self.pool.as_ref())
                .await?
            }
        };

        Ok(rows
            .into_iter()
            .map(|row| Player {
                id: row.get("id"),
                name: row.get("name"),
                created_at: row.get::<chrono::NaiveDateTime, _>("created_at").and_utc(),
            })
            .collect())
    }

    /// List all registered tournaments, in creation order
    pub async fn list_tournaments(&self) -> RegistryResult<Vec<Tournament>> {
        let rows = sqlx::query("SELECT id, name, description, created_at FROM tournaments ORDER BY id")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| Tournament {
                id: row.get("id"),
                name: row.get("name"),
                description: row.get("description"),
                created_at: row.get::<chrono::NaiveDateTime, _>("created_at").and_utc(),
            })
            .collect())
    }

    /// Get a single tournament
    pub async fn get_tournament(&self, tournament_id: TournamentId) -> RegistryResult<Tournament> {
        let row = sqlx::query("SELECT id, name, description, created_at FROM tournaments WHERE id = $1")
            .bind(tournament_id)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or(RegistryError::TournamentNotFound(tournament_id))?;

        Ok(Tournament {
            id: row.get("id"),
            name: row.get("name"),
            description: row.get("description"),
            created_at: row.get::<chrono::NaiveDateTime, _>("created_at").and_utc(),
        })
    }

    /// Remove every player record, along with enrollments and matches that
    /// reference them
    pub async fn delete_players(&self) -> RegistryResult<()> {
        // FK order: matches and enrollments reference players.
        sqlx::query("DELETE FROM matches")
            .execute(self.pool.as_ref())
            .await?;
        sqlx::query("DELETE FROM tournament_players")
            .execute(self.pool.as_ref())
            .await?;
        sqlx::query("DELETE FROM players")
            .execute(self.pool.as_ref())
            .await?;

        log::info!("deleted all player records");
        Ok(())
    }

    /// Remove tournament records within the scope, along with their
    /// enrollments and matches
    pub async fn delete_tournaments(&self, scope: Scope) -> RegistryResult<()> {
        match scope {
            Scope::Global => {
                sqlx::query("DELETE FROM matches WHERE tournament_id IS NOT NULL")
                    .execute(self.pool.as_ref())
                    .await?;
                sqlx::query("DELETE FROM tournament_players")
                    .execute(self.pool.as_ref())
                    .await?;
                sqlx::query("DELETE FROM tournaments")
                    .execute(self.pool.as_ref())
                    .await?;
            }
            Scope::Tournament(tournament_id) => {
                sqlx::query("DELETE FROM matches WHERE tournament_id = $1")
                    .bind(tournament_id)
                    .execute(self.pool.as_ref())
                    .await?;
                sqlx::query("DELETE FROM tournament_players WHERE tournament_id = $1")
                    .bind(tournament_id)
                    .execute(self.pool.as_ref())
                    .await?;
                sqlx::query("DELETE FROM tournaments WHERE id = $1")
                    .bind(tournament_id)
                    .execute(self.pool.as_ref())
                    .await?;
            }
        }

        log::info!("deleted tournaments in scope {scope:?}");
        Ok(())
    }
}
