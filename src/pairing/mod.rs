//! Pairing module: next-round matchup generation.
//!
//! Swiss pairing here is the adjacent-rank walk: sort the field by score,
//! then pair neighbors. The walk is a pure function over the ordered
//! standings; storage access stays behind the
//! [`StandingsProvider`](crate::db::StandingsProvider) seam.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use swiss_tournament::db::Database;
//! use swiss_tournament::pairing::PairingManager;
//! use swiss_tournament::registry::Scope;
//! use swiss_tournament::standings::{ScoringMethod, StandingsManager};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new(&Default::default()).await?;
//!     let standings = StandingsManager::new(Arc::new(db.pool().clone()));
//!     let pairings = PairingManager::new(Arc::new(standings));
//!
//!     let round = pairings
//!         .next_round(Scope::Tournament(1), ScoringMethod::ThreePoint)
//!         .await?;
//!     if let Some(bye) = &round.bye {
//!         println!("{} has the bye", bye.player_name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod generator;
pub mod models;

pub use generator::{PairingError, PairingManager, PairingResult, pair_round};
pub use models::{Bye, Pairing, RoundPairings};
