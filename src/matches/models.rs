//! Match data models.

use crate::registry::{PlayerId, TournamentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a completed match.
///
/// Stored as SMALLINT 0/1/2 in the match log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Neither player won
    Draw,
    /// The first listed player won
    FirstWin,
    /// The second listed player won
    SecondWin,
}

impl MatchOutcome {
    /// Stored outcome code
    pub fn code(self) -> i16 {
        match self {
            MatchOutcome::Draw => 0,
            MatchOutcome::FirstWin => 1,
            MatchOutcome::SecondWin => 2,
        }
    }

    /// Decode a stored outcome code
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(MatchOutcome::Draw),
            1 => Some(MatchOutcome::FirstWin),
            2 => Some(MatchOutcome::SecondWin),
            _ => None,
        }
    }
}

/// One entry in the append-only match log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Unique id assigned by the database
    pub id: i64,
    /// Owning tournament, None for the global registry
    pub tournament_id: Option<TournamentId>,
    /// First participant
    pub first_id: PlayerId,
    /// Second participant
    pub second_id: PlayerId,
    /// Match outcome
    pub outcome: MatchOutcome,
    /// When the result was reported
    pub reported_at: DateTime<Utc>,
}
