//! Match recording module.
//!
//! Matches form an append-only log: a record is inserted when a result is
//! reported and never updated afterwards. Standings are derived from this
//! log, never stored.

pub mod manager;
pub mod models;

pub use manager::{MatchError, MatchManager, MatchResult};
pub use models::{MatchOutcome, MatchRecord};
