//! Infection and outbreak propagation
//!
//! Every path that puts cubes on the board goes through [`infect`], so
//! initial seeding and the end-of-turn infection step chain outbreaks the
//! same way.

use std::collections::HashSet;

use crate::models::constants::Category;
use crate::models::ledger::DiseaseLedger;
use crate::models::world_map::{LocationId, WorldMap};

/// Place `n` cubes of `category` on a city, resolving any outbreak it causes.
///
/// Returns the cities that broke out, in the order they did. Eradicated
/// colors are never placed.
pub fn infect(
    map: &WorldMap,
    ledger: &mut DiseaseLedger,
    id: LocationId,
    category: Category,
    n: u8,
) -> Vec<LocationId> {
    if ledger.disease(category).eradicated {
        log::debug!("{} is eradicated, skipping {}", category.name(), map.name_of(id));
        return Vec::new();
    }
    if ledger.add_cubes(id, category, n).is_outbreak() {
        resolve_outbreak(map, ledger, id, category)
    } else {
        Vec::new()
    }
}

/// Break out at `origin`, which is already sitting at the cap.
///
/// Each neighbour takes one cube. A neighbour pushed over the cap breaks out
/// in turn unless it already did so in this chain; in that case the cube is
/// simply capped. The chain set lives only for this call.
pub fn resolve_outbreak(
    map: &WorldMap,
    ledger: &mut DiseaseLedger,
    origin: LocationId,
    category: Category,
) -> Vec<LocationId> {
    let mut chain = HashSet::new();
    let mut sites = Vec::new();
    spread(map, ledger, origin, category, &mut chain, &mut sites);
    sites
}

fn spread(
    map: &WorldMap,
    ledger: &mut DiseaseLedger,
    origin: LocationId,
    category: Category,
    chain: &mut HashSet<LocationId>,
    sites: &mut Vec<LocationId>,
) {
    chain.insert(origin);
    sites.push(origin);
    log::debug!("{} outbreak in {}", category.name(), map.name_of(origin));

    for &neighbor in map.neighbors_of(origin) {
        let placement = ledger.add_cubes(neighbor, category, 1);
        if placement.is_outbreak() && !chain.contains(&neighbor) {
            spread(map, ledger, neighbor, category, chain, sites);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::constants::CUBE_CAP;

    fn map(cities: &[&str], routes: &[(&str, &str)]) -> WorldMap {
        let defs: Vec<(&str, Category)> = cities.iter().map(|c| (*c, Category::Red)).collect();
        WorldMap::new(&defs, routes).unwrap()
    }

    fn fill(ledger: &mut DiseaseLedger, ids: &[LocationId]) {
        for &id in ids {
            ledger.add_cubes(id, Category::Red, CUBE_CAP);
        }
    }

    #[test]
    fn below_cap_is_not_an_outbreak() {
        let board = map(&["L", "M"], &[("L", "M")]);
        let mut ledger = DiseaseLedger::new(board.len());
        let sites = infect(&board, &mut ledger, 0, Category::Red, 3);
        assert!(sites.is_empty());
        assert_eq!(ledger.cubes(1, Category::Red), 0);
    }

    #[test]
    fn overflow_spreads_one_cube_to_each_neighbor() {
        let board = map(&["L", "M", "N", "X"], &[("L", "M"), ("L", "N"), ("N", "X")]);
        let mut ledger = DiseaseLedger::new(board.len());
        fill(&mut ledger, &[0]);

        let sites = infect(&board, &mut ledger, 0, Category::Red, 1);

        assert_eq!(sites, vec![0]);
        assert_eq!(ledger.cubes(0, Category::Red), CUBE_CAP);
        assert_eq!(ledger.cubes(1, Category::Red), 1);
        assert_eq!(ledger.cubes(2, Category::Red), 1);
        assert_eq!(ledger.cubes(3, Category::Red), 0);
    }

    #[test]
    fn full_neighbor_chains() {
        let board = map(&["L", "M", "N"], &[("L", "M"), ("M", "N")]);
        let mut ledger = DiseaseLedger::new(board.len());
        fill(&mut ledger, &[0, 1]);

        let sites = infect(&board, &mut ledger, 0, Category::Red, 1);

        assert_eq!(sites, vec![0, 1]);
        assert_eq!(ledger.cubes(2, Category::Red), 1);
    }

    #[test]
    fn cycle_breaks_out_once_per_city() {
        let board = map(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")]);
        let mut ledger = DiseaseLedger::new(board.len());
        fill(&mut ledger, &[0, 1, 2]);

        let sites = infect(&board, &mut ledger, 0, Category::Red, 1);

        let mut sorted = sites.clone();
        sorted.sort();
        assert_eq!(sorted, vec![0, 1, 2]);
        for id in 0..3 {
            assert_eq!(ledger.cubes(id, Category::Red), CUBE_CAP);
        }
    }

    #[test]
    fn dense_graph_terminates() {
        let names = ["A", "B", "C", "D", "E"];
        let mut routes = Vec::new();
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                routes.push((*a, *b));
            }
        }
        let board = map(&names, &routes);
        let mut ledger = DiseaseLedger::new(board.len());
        fill(&mut ledger, &[0, 1, 2, 3, 4]);

        let sites = resolve_outbreak(&board, &mut ledger, 2, Category::Red);
        assert_eq!(sites.len(), 5);
    }

    #[test]
    fn chain_set_does_not_leak_between_triggers() {
        let board = map(&["A", "B"], &[("A", "B")]);
        let mut ledger = DiseaseLedger::new(board.len());
        fill(&mut ledger, &[0, 1]);

        assert_eq!(infect(&board, &mut ledger, 0, Category::Red, 1).len(), 2);
        assert_eq!(infect(&board, &mut ledger, 0, Category::Red, 1).len(), 2);
    }

    #[test]
    fn eradicated_color_is_not_placed() {
        let board = map(&["A", "B"], &[("A", "B")]);
        let mut ledger = DiseaseLedger::new(board.len());
        ledger.mark_cured(Category::Red);
        assert!(ledger.mark_eradicated(Category::Red));

        assert!(infect(&board, &mut ledger, 0, Category::Red, 1).is_empty());
        assert_eq!(ledger.board_total(Category::Red), 0);
    }
}
