use crate::models::errors::{GameError, GameResult};
use crate::models::session::Session;

/// Build a research station in the player's city.
///
/// Needs the city's card in hand unless the role builds without one. The
/// card stays in hand; discarding belongs to the card rules that don't exist
/// yet.
pub fn build_station(session: &mut Session, actor: usize) -> GameResult<()> {
    let builder = session.actor(actor);
    let here = builder.location;
    let city = session.map().name_of(here);

    if session.ledger().has_station(here) {
        return Err(GameError::StationAlreadyExists(city.to_string()));
    }
    if !builder.role.builds_without_card() && !builder.holds_card(city) {
        return Err(GameError::MissingRequiredCard(city.to_string()));
    }

    log::info!("game {}: station built in {}", session.id(), city);
    session.add_station(here);
    session.actor_mut(actor).spend_action();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::constants::Role;
    use crate::services::actions::movement::move_actor;
    use crate::services::actions::test_utils::{city, started_session};

    #[test]
    fn operations_expert_builds_without_card() {
        let mut session = started_session(Role::OperationsExpert, Role::Medic);
        move_actor(&mut session, 0, "Miami").unwrap();

        build_station(&mut session, 0).unwrap();

        let miami = city(&session, "Miami");
        assert!(session.ledger().has_station(miami));
        assert_eq!(session.snapshot().research_stations, vec!["Atlanta", "Miami"]);
        assert_eq!(session.actor(0).actions, 2);
    }

    #[test]
    fn others_need_the_city_card() {
        let mut session = started_session(Role::Scientist, Role::Medic);
        move_actor(&mut session, 0, "Miami").unwrap();
        assert_eq!(
            build_station(&mut session, 0),
            Err(GameError::MissingRequiredCard("Miami".to_string()))
        );

        session.actor_mut(0).cards.push("Miami".to_string());
        build_station(&mut session, 0).unwrap();
        assert!(session.actor(0).holds_card("Miami"));
    }

    #[test]
    fn second_station_in_a_city_is_rejected() {
        let mut session = started_session(Role::OperationsExpert, Role::Medic);
        assert_eq!(
            build_station(&mut session, 0),
            Err(GameError::StationAlreadyExists("Atlanta".to_string()))
        );
        assert_eq!(session.stations().len(), 1);
    }
}
