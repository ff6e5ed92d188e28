//! # Swiss Tournament
//!
//! A Swiss-system tournament library backed by PostgreSQL.
//!
//! The library assigns pairwise matchups for successive tournament rounds
//! based on accumulated standings. Players of similar standing meet each
//! round: the standings read-model ranks everyone by score, and the pairing
//! generator walks that ranking two rows at a time.
//!
//! ## Core Modules
//!
//! - [`db`]: Connection pooling, configuration, and the repository seam the
//!   pairing core consumes
//! - [`registry`]: Player and tournament registration
//! - [`matches`]: The append-only match log
//! - [`standings`]: Score aggregation and ranking
//! - [`pairing`]: The pairing generator
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use swiss_tournament::db::{Database, DatabaseConfig};
//! use swiss_tournament::pairing::PairingManager;
//! use swiss_tournament::registry::Scope;
//! use swiss_tournament::standings::{ScoringMethod, StandingsManager};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new(&DatabaseConfig::from_env()).await?;
//!     let standings = StandingsManager::new(Arc::new(db.pool().clone()));
//!     let pairings = PairingManager::new(Arc::new(standings));
//!
//!     let round = pairings
//!         .next_round(Scope::Global, ScoringMethod::WinCount)
//!         .await?;
//!     for pair in &round.pairs {
//!         println!("{} vs {}", pair.first_name, pair.second_name);
//!     }
//!     Ok(())
//! }
//! ```

/// Database connection pooling and repository traits.
pub mod db;
pub use db::{Database, DatabaseConfig, StandingsProvider};

/// Player and tournament registration.
pub mod registry;
pub use registry::{Player, PlayerId, RegistryManager, Scope, Tournament, TournamentId};

/// Append-only match recording.
pub mod matches;
pub use matches::{MatchManager, MatchOutcome, MatchRecord};

/// Standings aggregation and ranking.
pub mod standings;
pub use standings::{ScoringMethod, StandingsManager, StandingsRow};

/// The pairing generator.
pub mod pairing;
pub use pairing::{Bye, Pairing, PairingError, PairingManager, RoundPairings, pair_round};
