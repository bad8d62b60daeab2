use crate::models::errors::{GameError, GameResult};
use crate::models::session::Session;

/// Move a player along one route.
///
/// A move to the city the player already stands in is accepted as a no-op
/// and costs nothing.
pub fn move_actor(session: &mut Session, actor: usize, destination: &str) -> GameResult<()> {
    let map = session.map();
    let to = map
        .location(destination)
        .ok_or_else(|| GameError::UnknownLocation(destination.to_string()))?;
    let from = session.actor(actor).location;

    if from == to {
        log::debug!("{} stays in {}", session.actor(actor).name, destination);
        return Ok(());
    }
    if !map.are_connected(from, to) {
        return Err(GameError::CitiesNotConnected {
            from: map.name_of(from).to_string(),
            to: destination.to_string(),
        });
    }

    let mover = session.actor_mut(actor);
    mover.location = to;
    mover.spend_action();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::constants::{Role, ACTIONS_PER_TURN};
    use crate::services::actions::test_utils::started_session;

    #[test]
    fn move_along_route_spends_an_action() {
        let mut session = started_session(Role::Scientist, Role::Medic);
        move_actor(&mut session, 0, "Chicago").unwrap();
        let snap = session.snapshot();
        assert_eq!(snap.players[0].location, "Chicago");
        assert_eq!(snap.players[0].actions, ACTIONS_PER_TURN - 1);
    }

    #[test]
    fn move_without_route_is_rejected() {
        let mut session = started_session(Role::Scientist, Role::Medic);
        let before = session.snapshot();
        let err = move_actor(&mut session, 0, "Tokyo").unwrap_err();
        assert_eq!(
            err,
            GameError::CitiesNotConnected {
                from: "Atlanta".to_string(),
                to: "Tokyo".to_string()
            }
        );
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn move_in_place_is_free() {
        let mut session = started_session(Role::Scientist, Role::Medic);
        move_actor(&mut session, 0, "Atlanta").unwrap();
        assert_eq!(session.actor(0).actions, ACTIONS_PER_TURN);
    }

    #[test]
    fn unknown_city_is_rejected() {
        let mut session = started_session(Role::Scientist, Role::Medic);
        assert_eq!(
            move_actor(&mut session, 0, "Atlantis"),
            Err(GameError::UnknownLocation("Atlantis".to_string()))
        );
    }
}
