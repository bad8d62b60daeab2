use crate::models::constants::Category;
use crate::models::errors::{GameError, GameResult};
use crate::models::session::Session;
use crate::services::cards::CardRules;

/// Cure a color at a research station.
///
/// The card cost is delegated to `cards`; winning is decided by the engine
/// once the action has landed.
pub fn discover_cure(
    session: &mut Session,
    actor: usize,
    category: Category,
    cards: &dyn CardRules,
) -> GameResult<()> {
    let curer = session.actor(actor);
    if !session.ledger().has_station(curer.location) {
        return Err(GameError::NoResearchStationHere);
    }
    if session.ledger().disease(category).cured {
        return Err(GameError::AlreadyCured(category.name()));
    }
    let required = curer.role.cards_for_cure();
    if !cards.permits_cure(curer, category, required) {
        return Err(GameError::InsufficientCards { required });
    }

    session.ledger_mut().mark_cured(category);
    session.actor_mut(actor).spend_action();
    log::info!("game {}: cure discovered for {}", session.id(), category.name());
    Ok(())
}
