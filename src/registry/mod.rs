//! Registration module for players and tournaments.
//!
//! Players register once in a global registry and may then be enrolled in
//! any number of tournaments. Registration rows are never mutated; the only
//! removals are the explicit bulk deletes.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use swiss_tournament::db::Database;
//! use swiss_tournament::registry::RegistryManager;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new(&Default::default()).await?;
//!     let registry = RegistryManager::new(Arc::new(db.pool().clone()));
//!
//!     let tournament_id = registry
//!         .register_tournament("Spring Open", "Eight rounds, Swiss")
//!         .await?;
//!     let player_id = registry.register_player("Ada Lovelace").await?;
//!     registry.enroll_player(tournament_id, player_id).await?;
//!     Ok(())
//! }
//! ```

pub mod manager;
pub mod models;

pub use manager::{RegistryError, RegistryManager, RegistryResult};
pub use models::{Player, PlayerId, Scope, Tournament, TournamentId};
