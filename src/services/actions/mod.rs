//! Player actions
//!
//! One function per action. Each assumes the engine has already checked that
//! the player exists, that it is their turn and that they have an action to
//! spend, and each validates its own preconditions before touching state.

mod cure;
mod movement;
mod stations;
mod treatment;
mod turn_end;

pub use cure::discover_cure;
pub use movement::move_actor;
pub use stations::build_station;
pub use treatment::treat_disease;
pub use turn_end::{end_turn, infection_step};
