//! Standings module: the read-model the pairing generator consumes.
//!
//! Standings are computed on demand by aggregating the match log. Two
//! scoring methods exist: plain win counts, and the Swiss three-point
//! scale (3 per win, 1 per draw). Ordering is score descending with
//! player id as the tie-break, so repeated queries over an unchanged log
//! always rank players identically.

pub mod manager;
pub mod models;

pub use manager::{StandingsError, StandingsManager, StandingsResult, sort_standings};
pub use models::{ScoringMethod, StandingsRow};
