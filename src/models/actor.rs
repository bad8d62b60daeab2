use serde::{Deserialize, Serialize};

use super::constants::{Role, ACTIONS_PER_TURN};
use super::world_map::LocationId;

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub location: LocationId,
    /// City cards in hand. Opaque city names; only the station check reads them.
    pub cards: Vec<String>,
    pub actions: u8,
}

impl Actor {
    pub fn new(profile: ActorProfile, location: LocationId) -> Self {
        Actor {
            id: profile.id,
            name: profile.name,
            role: profile.role,
            location,
            cards: profile.cards,
            actions: ACTIONS_PER_TURN,
        }
    }

    pub fn holds_card(&self, city: &str) -> bool {
        self.cards.iter().any(|c| c == city)
    }

    pub fn spend_action(&mut self) {
        self.actions = self.actions.saturating_sub(1);
    }

    pub fn refresh_actions(&mut self) {
        self.actions = ACTIONS_PER_TURN;
    }
}

/// What a client supplies when creating or joining a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorProfile {
    pub id: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub cards: Vec<String>,
}

impl ActorProfile {
    pub fn new(id: &str, name: &str, role: Role) -> Self {
        ActorProfile {
            id: id.to_string(),
            name: name.to_string(),
            role,
            cards: Vec::new(),
        }
    }

    pub fn with_cards(mut self, cards: &[&str]) -> Self {
        self.cards = cards.iter().map(|c| c.to_string()).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_actor_has_full_budget() {
        let actor = Actor::new(ActorProfile::new("p1", "Ada", Role::Medic), 0);
        assert_eq!(actor.actions, ACTIONS_PER_TURN);
    }

    #[test]
    fn spending_never_underflows() {
        let mut actor = Actor::new(ActorProfile::new("p1", "Ada", Role::Medic), 0);
        for _ in 0..10 {
            actor.spend_action();
        }
        assert_eq!(actor.actions, 0);
        actor.refresh_actions();
        assert_eq!(actor.actions, ACTIONS_PER_TURN);
    }

    #[test]
    fn profile_cards_default_to_empty() {
        let profile: ActorProfile =
            serde_json::from_str(r#"{"id":"p1","name":"Ada","role":"Operations Expert"}"#).unwrap();
        assert_eq!(profile.role, Role::OperationsExpert);
        assert!(profile.cards.is_empty());
    }
}
