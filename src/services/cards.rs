//! Card cost rules
//!
//! Hands are carried on each player but there is no deck yet, so the cure
//! cost check sits behind a policy. The default policy permits everything.

use crate::models::actor::Actor;
use crate::models::constants::Category;

pub trait CardRules: Send + Sync {
    /// May `actor` spend `required` cards of `category` to cure it?
    fn permits_cure(&self, actor: &Actor, category: Category, required: usize) -> bool;
}

/// Card costs are not enforced: every cure is allowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnenforcedCardRules;

impl CardRules for UnenforcedCardRules {
    fn permits_cure(&self, actor: &Actor, category: Category, required: usize) -> bool {
        log::debug!(
            "card rules unenforced: {} cures {} without {} cards",
            actor.name,
            category.name(),
            required
        );
        true
    }
}
