//! Registration data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Player ID type
pub type PlayerId = i64;

/// Tournament ID type
pub type TournamentId = i64;

/// Query scope for standings, counts, and listings.
///
/// Replaces the single-tournament/whole-registry distinction with a proper
/// sum type rather than a sentinel id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    /// Every registered player, regardless of tournament enrollment
    Global,
    /// Players enrolled in one tournament
    Tournament(TournamentId),
}

/// A registered player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique id assigned by the database
    pub id: PlayerId,
    /// Full name, need not be unique
    pub name: String,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

/// A registered tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    /// Unique id assigned by the database
    pub id: TournamentId,
    /// Tournament name, need not be unique
    pub name: String,
    /// Short description
    pub description: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}
