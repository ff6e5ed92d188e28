//! Pairing data models.

use crate::registry::PlayerId;
use serde::{Deserialize, Serialize};

/// One matchup for the next round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    /// Higher-ranked player
    pub first_id: PlayerId,
    /// Higher-ranked player's name
    pub first_name: String,
    /// Lower-ranked player
    pub second_id: PlayerId,
    /// Lower-ranked player's name
    pub second_name: String,
}

/// A player skipping the round for lack of an opponent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bye {
    /// Player id
    pub player_id: PlayerId,
    /// Player name
    pub player_name: String,
}

/// Pairings for one round.
///
/// With an even field every player appears in exactly one pairing. With an
/// odd field the lowest-ranked player sits the round out as the bye.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPairings {
    /// Matchups in standings order
    pub pairs: Vec<Pairing>,
    /// The unpaired player, if the field is odd
    pub bye: Option<Bye>,
}

impl RoundPairings {
    /// Number of players covered by this round, pairs and bye together
    pub fn player_count(&self) -> usize {
        self.pairs.len() * 2 + usize::from(self.bye.is_some())
    }
}
