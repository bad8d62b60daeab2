//! Game services
//!
//! Rules that mutate a session: player actions, infection and outbreak
//! propagation, opening setup and card cost policy.

pub mod actions;
pub mod cards;
pub mod outbreak;
pub mod setup;
