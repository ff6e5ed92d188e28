//! Repository trait definitions for testability and dependency injection.
//!
//! The pairing generator needs exactly two reads from storage: the ordered
//! standings and the eligible player count. [`StandingsProvider`] is that
//! seam; [`crate::standings::StandingsManager`] is the PostgreSQL
//! implementation, and tests substitute an in-memory one.

use async_trait::async_trait;

use crate::registry::Scope;
use crate::standings::{ScoringMethod, StandingsResult, StandingsRow};

/// Trait for the standings read-model the pairing core consumes
#[async_trait]
pub trait StandingsProvider: Send + Sync {
    /// Current standings for the scope, ordered by score descending with a
    /// deterministic tie-break
    async fn standings(
        &self,
        scope: Scope,
        scoring: ScoringMethod,
    ) -> StandingsResult<Vec<StandingsRow>>;

    /// Number of players eligible for pairing within the scope
    async fn player_count(&self, scope: Scope) -> StandingsResult<u64>;
}
