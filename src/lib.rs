//! Outbreak game server
//!
//! Rules engine and session store for a cooperative disease-control board
//! game played by two to four players over a network.
//!
//! # Overview
//!
//! Each game is a [`models::session::Session`] driven by a [`GameEngine`].
//! Players move between cities, treat disease cubes, build research stations
//! and discover cures. At the end of every turn new infections are drawn;
//! a city pushed past three cubes breaks out into its neighbours. The team
//! wins by curing all four diseases and loses at the eighth outbreak.
//!
//! # Modules
//!
//! - [`game_engine`] - Action validation, dispatch and win/loss detection
//! - [`models`] - Board, ledger, players, turn order and snapshots
//! - [`services`] - One function per rule (movement, treatment, outbreaks, ...)
//! - [`store`] - Concurrent registry of live games with idle eviction
//! - [`transport`] - Wire protocol, dispatcher and per-game fan-out
//! - [`console`] - JSON-lines front end over stdin/stdout
//! - [`io`] - Output abstraction for testing
//!
//! # Example
//!
//! ```rust,no_run
//! use outbreak::{Action, ActorProfile, Role, SessionStore, StoreConfig};
//!
//! # async fn demo() -> Result<(), outbreak::GameError> {
//! let store = SessionStore::new(StoreConfig::default())?;
//! store.create_session("G1", ActorProfile::new("p1", "Ada", Role::Medic)).await?;
//! store.join_session("G1", ActorProfile::new("p2", "Bo", Role::Scientist)).await?;
//! store.start_session("G1").await?;
//! store.apply_action("G1", "p1", Action::Move { to: "Chicago".into() }).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod console;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod store;
pub mod transport;

// Re-export commonly used types
pub use game_engine::{Action, GameEngine, GameState};
pub use models::actor::ActorProfile;
pub use models::constants::{Category, Role};
pub use models::errors::{GameError, GameResult};
pub use models::snapshot::SessionSnapshot;
pub use store::{SessionStore, StoreConfig};
