//! Board topology
//!
//! Cities, their home colors and the undirected routes between them. A map
//! never changes once built, so every session shares one behind an `Arc`.

use std::collections::{BTreeSet, HashMap};

use super::constants::{Category, REFERENCE_CITIES, REFERENCE_ROUTES};
use super::errors::{GameError, GameResult};

/// Index of a city in board order.
pub type LocationId = usize;

#[derive(Debug, Clone)]
struct CityDef {
    name: String,
    category: Category,
}

#[derive(Debug, Clone)]
pub struct WorldMap {
    cities: Vec<CityDef>,
    by_name: HashMap<String, LocationId>,
    /// adjacency[id] holds every neighbour of id; kept symmetric.
    adjacency: Vec<BTreeSet<LocationId>>,
}

impl WorldMap {
    /// Build a board from city definitions and undirected routes.
    ///
    /// Rejects duplicate city names, routes naming unknown cities and routes
    /// from a city to itself.
    pub fn new(cities: &[(&str, Category)], routes: &[(&str, &str)]) -> GameResult<Self> {
        let mut by_name = HashMap::with_capacity(cities.len());
        let mut defs = Vec::with_capacity(cities.len());
        for (id, (name, category)) in cities.iter().enumerate() {
            if by_name.insert(name.to_string(), id).is_some() {
                return Err(GameError::InvalidMap(format!("duplicate city {}", name)));
            }
            defs.push(CityDef {
                name: name.to_string(),
                category: *category,
            });
        }

        let mut adjacency = vec![BTreeSet::new(); defs.len()];
        for (a, b) in routes {
            let ia = *by_name
                .get(*a)
                .ok_or_else(|| GameError::InvalidMap(format!("route names unknown city {}", a)))?;
            let ib = *by_name
                .get(*b)
                .ok_or_else(|| GameError::InvalidMap(format!("route names unknown city {}", b)))?;
            if ia == ib {
                return Err(GameError::InvalidMap(format!("route from {} to itself", a)));
            }
            adjacency[ia].insert(ib);
            adjacency[ib].insert(ia);
        }

        Ok(WorldMap {
            cities: defs,
            by_name,
            adjacency,
        })
    }

    /// The built-in 45-city board.
    pub fn reference() -> GameResult<Self> {
        Self::new(REFERENCE_CITIES, REFERENCE_ROUTES)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn location(&self, name: &str) -> Option<LocationId> {
        self.by_name.get(name).copied()
    }

    pub fn name_of(&self, id: LocationId) -> &str {
        &self.cities[id].name
    }

    pub fn category_of(&self, id: LocationId) -> Category {
        self.cities[id].category
    }

    /// True when a route joins the two cities, in either direction, or when
    /// they are the same city.
    pub fn are_connected(&self, a: LocationId, b: LocationId) -> bool {
        a == b || self.adjacency[a].contains(&b)
    }

    pub fn neighbors_of(&self, id: LocationId) -> &BTreeSet<LocationId> {
        &self.adjacency[id]
    }

    pub fn ids(&self) -> impl Iterator<Item = LocationId> {
        0..self.cities.len()
    }
}
