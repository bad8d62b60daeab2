use crate::models::constants::SEED_TIERS;
use crate::models::session::Session;
use crate::models::world_map::LocationId;
use crate::services::outbreak::infect;

/// Place the opening infections.
///
/// Each tier draws its cities without repeats, but tiers are drawn
/// independently, so a city can appear in more than one tier. Any overflow
/// from stacked tiers is resolved as an ordinary outbreak.
pub fn seed_infections(session: &mut Session) {
    let map = session.map_handle();
    for (count, cubes) in SEED_TIERS {
        for id in distinct_draws(session, count) {
            let category = map.category_of(id);
            let sites = infect(&map, session.ledger_mut(), id, category, cubes);
            session.record_outbreaks(sites.len() as u32);
            log::debug!(
                "seeded {} {} cubes in {}",
                cubes,
                category.name(),
                map.name_of(id)
            );
        }
    }
}

/// Draw up to `count` different cities.
///
/// Repeats are redrawn a bounded number of times; after that the next free
/// city in board order is taken so a stuck source cannot spin forever.
fn distinct_draws(session: &mut Session, count: usize) -> Vec<LocationId> {
    let len = session.map().len();
    let wanted = count.min(len);
    let mut picked: Vec<LocationId> = Vec::with_capacity(wanted);
    while picked.len() < wanted {
        let mut id = session.draw_location();
        let mut retries = len;
        while picked.contains(&id) && retries > 0 {
            id = session.draw_location();
            retries -= 1;
        }
        while picked.contains(&id) {
            id = (id + 1) % len;
        }
        picked.push(id);
    }
    picked
}
