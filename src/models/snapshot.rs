use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::constants::{Category, Role};
use super::ledger::DiseaseState;

/// Full observable state of one game, as broadcast after every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub game_id: String,
    pub started: bool,
    pub players: Vec<PlayerView>,
    pub current_player_index: usize,
    pub diseases: BTreeMap<Category, DiseaseState>,
    pub infection_rate: usize,
    pub outbreaks: u8,
    pub research_stations: Vec<String>,
    pub game_over: bool,
    pub game_won: bool,
    pub cities: BTreeMap<String, CityView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub location: String,
    pub cards: Vec<String>,
    pub actions: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityView {
    pub color: Category,
    pub infections: BTreeMap<Category, u8>,
    pub research_station: bool,
}

impl SessionSnapshot {
    pub fn player(&self, id: &str) -> Option<&PlayerView> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn cubes(&self, city: &str, category: Category) -> u8 {
        self.cities
            .get(city)
            .and_then(|c| c.infections.get(&category).copied())
            .unwrap_or(0)
    }

    /// Cubes on the board across every city and color.
    pub fn total_cubes(&self) -> u32 {
        self.cities
            .values()
            .flat_map(|c| c.infections.values())
            .map(|&n| n as u32)
            .sum()
    }
}
