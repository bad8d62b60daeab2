//! Domain models
//!
//! The board and everything that changes on it. Models keep their own
//! bookkeeping consistent (cube cap, supply, turn phase); the rules that
//! decide when they change live in `services`.

pub mod actor;
pub mod constants;
pub mod draw;
pub mod errors;
pub mod ledger;
pub mod session;
pub mod snapshot;
pub mod turn;
pub mod world_map;
