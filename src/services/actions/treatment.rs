use crate::models::constants::Category;
use crate::models::errors::{GameError, GameResult};
use crate::models::session::Session;

/// Remove cubes of one color from the player's city.
///
/// One cube normally; every cube when the color is cured or the player's
/// role treats everything. Treating the last cube of a cured color
/// eradicates it.
pub fn treat_disease(session: &mut Session, actor: usize, category: Category) -> GameResult<()> {
    let here = session.actor(actor).location;
    let present = session.ledger().cubes(here, category);
    if present == 0 {
        return Err(GameError::NoInfectionToTreat(category.name()));
    }

    let cured = session.ledger().disease(category).cured;
    let amount = if cured || session.actor(actor).role.treats_all() {
        present
    } else {
        1
    };
    session.ledger_mut().remove_cubes(here, category, amount);
    session.actor_mut(actor).spend_action();

    if cured && session.ledger_mut().mark_eradicated(category) {
        log::info!("game {}: {} eradicated", session.id(), category.name());
    }
    Ok(())
}
