use crate::models::session::Session;
use crate::services::outbreak::infect;

/// Close the acting player's turn and run the infection step.
pub fn end_turn(session: &mut Session, actor: usize) {
    session.actor_mut(actor).refresh_actions();
    let seated = session.actors().len();
    session.turn_mut().advance(seated);
    infection_step(session);
}

/// Draw `infection_rate` cities, repeats allowed, and add one cube of each
/// city's home color.
pub fn infection_step(session: &mut Session) {
    let map = session.map_handle();
    let draws: Vec<_> = (0..session.infection_rate())
        .map(|_| session.draw_location())
        .collect();

    for id in draws {
        let category = map.category_of(id);
        let sites = infect(&map, session.ledger_mut(), id, category, 1);
        log::debug!(
            "game {}: infected {} ({}), {} outbreaks",
            session.id(),
            map.name_of(id),
            category.name(),
            sites.len()
        );
        session.record_outbreaks(sites.len() as u32);
    }
}
