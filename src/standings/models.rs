//! Standings data models.

use crate::registry::PlayerId;
use serde::{Deserialize, Serialize};

/// How a player's score is computed from the match log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringMethod {
    /// One point per win, draws ignored
    WinCount,
    /// Three points per win, one per draw
    ThreePoint,
}

impl ScoringMethod {
    /// Score a player's record
    pub fn score(self, wins: u32, draws: u32) -> i64 {
        match self {
            ScoringMethod::WinCount => i64::from(wins),
            ScoringMethod::ThreePoint => 3 * i64::from(wins) + i64::from(draws),
        }
    }
}

/// One row of the standings read-model.
///
/// Derived from the match log, never stored. Rows are ordered by score
/// descending, then player id ascending; ids are serial, so the tie-break
/// is registration order and identical on every query of the same snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    /// Player id
    pub id: PlayerId,
    /// Player name
    pub name: String,
    /// Matches won
    pub wins: u32,
    /// Matches drawn
    pub draws: u32,
    /// Matches played (wins + losses + draws)
    pub matches: u32,
    /// Score under the requested [`ScoringMethod`]
    pub score: i64,
}
