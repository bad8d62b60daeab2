//! Disease ledger
//!
//! Per-city cube counts and station flags, plus per-color cure state and the
//! supply of unplaced cubes. The ledger only enforces its own bookkeeping
//! (the cube cap and the supply floor); game rules live in the services.

use serde::{Deserialize, Serialize};

use super::constants::{Category, CUBE_CAP, INITIAL_SUPPLY, NUM_CATEGORIES};
use super::world_map::LocationId;

/// Mutable state of one city.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CityState {
    pub cubes: [u8; NUM_CATEGORIES],
    pub station: bool,
}

/// Cure state and remaining supply for one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseState {
    pub cured: bool,
    pub eradicated: bool,
    #[serde(rename = "cubes")]
    pub supply: u8,
}

impl Default for DiseaseState {
    fn default() -> Self {
        DiseaseState {
            cured: false,
            eradicated: false,
            supply: INITIAL_SUPPLY,
        }
    }
}

/// Result of placing cubes on a city.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Cubes that landed on the city.
    pub absorbed: u8,
    /// Cubes that did not fit under the cap.
    pub overflowed: u8,
}

impl Placement {
    /// The city would have gone over the cap.
    pub fn is_outbreak(&self) -> bool {
        self.overflowed > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseLedger {
    cities: Vec<CityState>,
    diseases: [DiseaseState; NUM_CATEGORIES],
}

impl DiseaseLedger {
    pub fn new(city_count: usize) -> Self {
        DiseaseLedger {
            cities: vec![CityState::default(); city_count],
            diseases: [DiseaseState::default(); NUM_CATEGORIES],
        }
    }

    pub fn city(&self, id: LocationId) -> &CityState {
        &self.cities[id]
    }

    pub fn cities(&self) -> &[CityState] {
        &self.cities
    }

    pub fn disease(&self, category: Category) -> &DiseaseState {
        &self.diseases[category as usize]
    }

    pub fn cubes(&self, id: LocationId, category: Category) -> u8 {
        self.cities[id].cubes[category as usize]
    }

    /// Cubes of a color currently on the board.
    pub fn board_total(&self, category: Category) -> u32 {
        self.cities
            .iter()
            .map(|c| c.cubes[category as usize] as u32)
            .sum()
    }

    /// Place up to `n` cubes, clamping the city at the cap.
    ///
    /// Every absorbed cube comes out of the supply. With the supply empty the
    /// cube is not placed at all, so board + supply never exceeds the initial
    /// stock.
    pub fn add_cubes(&mut self, id: LocationId, category: Category, n: u8) -> Placement {
        let idx = category as usize;
        let current = self.cities[id].cubes[idx];
        let room = CUBE_CAP.saturating_sub(current);
        let fits = n.min(room);
        let overflowed = n - fits;

        let disease = &mut self.diseases[idx];
        let absorbed = fits.min(disease.supply);
        if absorbed < fits {
            log::warn!("{} supply exhausted, {} cubes not placed", category.name(), fits - absorbed);
        }
        disease.supply -= absorbed;
        self.cities[id].cubes[idx] = current + absorbed;

        Placement {
            absorbed,
            overflowed,
        }
    }

    /// Remove up to `n` cubes, flooring at zero. Removed cubes go back to the
    /// supply. Returns how many were removed.
    pub fn remove_cubes(&mut self, id: LocationId, category: Category, n: u8) -> u8 {
        let idx = category as usize;
        let current = self.cities[id].cubes[idx];
        let removed = n.min(current);
        self.cities[id].cubes[idx] = current - removed;
        self.diseases[idx].supply = (self.diseases[idx].supply + removed).min(INITIAL_SUPPLY);
        removed
    }

    pub fn mark_cured(&mut self, category: Category) {
        self.diseases[category as usize].cured = true;
    }

    /// Mark a color eradicated. Refuses (returning false and changing nothing)
    /// unless the color is cured and no cube of it is left on the board.
    pub fn mark_eradicated(&mut self, category: Category) -> bool {
        if !self.disease(category).cured || self.board_total(category) > 0 {
            return false;
        }
        self.diseases[category as usize].eradicated = true;
        true
    }

    pub fn all_cured(&self) -> bool {
        self.diseases.iter().all(|d| d.cured)
    }

    pub fn has_station(&self, id: LocationId) -> bool {
        self.cities[id].station
    }

    pub fn set_station(&mut self, id: LocationId) {
        self.cities[id].station = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_within_cap_is_fully_absorbed() {
        let mut ledger = DiseaseLedger::new(2);
        let p = ledger.add_cubes(0, Category::Red, 2);
        assert_eq!(p, Placement { absorbed: 2, overflowed: 0 });
        assert!(!p.is_outbreak());
        assert_eq!(ledger.cubes(0, Category::Red), 2);
        assert_eq!(ledger.disease(Category::Red).supply, INITIAL_SUPPLY - 2);
    }

    #[test]
    fn add_past_cap_clamps_and_reports_overflow() {
        let mut ledger = DiseaseLedger::new(1);
        ledger.add_cubes(0, Category::Blue, 2);
        let p = ledger.add_cubes(0, Category::Blue, 3);
        assert_eq!(p, Placement { absorbed: 1, overflowed: 2 });
        assert!(p.is_outbreak());
        assert_eq!(ledger.cubes(0, Category::Blue), CUBE_CAP);
    }

    #[test]
    fn colors_are_tracked_separately() {
        let mut ledger = DiseaseLedger::new(1);
        ledger.add_cubes(0, Category::Blue, 3);
        let p = ledger.add_cubes(0, Category::Black, 1);
        assert!(!p.is_outbreak());
        assert_eq!(ledger.cubes(0, Category::Black), 1);
    }

    #[test]
    fn empty_supply_places_nothing() {
        let mut ledger = DiseaseLedger::new(9);
        for id in 0..8 {
            ledger.add_cubes(id, Category::Yellow, 3);
        }
        assert_eq!(ledger.disease(Category::Yellow).supply, 0);
        let p = ledger.add_cubes(8, Category::Yellow, 1);
        assert_eq!(p.absorbed, 0);
        assert_eq!(ledger.cubes(8, Category::Yellow), 0);
        assert_eq!(ledger.board_total(Category::Yellow), INITIAL_SUPPLY as u32);
    }

    #[test]
    fn remove_floors_at_zero_and_refills_supply() {
        let mut ledger = DiseaseLedger::new(1);
        ledger.add_cubes(0, Category::Red, 2);
        assert_eq!(ledger.remove_cubes(0, Category::Red, 5), 2);
        assert_eq!(ledger.cubes(0, Category::Red), 0);
        assert_eq!(ledger.disease(Category::Red).supply, INITIAL_SUPPLY);
    }

    #[test]
    fn eradication_requires_cure() {
        let mut ledger = DiseaseLedger::new(1);
        assert!(!ledger.mark_eradicated(Category::Red));
        assert!(!ledger.disease(Category::Red).eradicated);
    }

    #[test]
    fn eradication_refused_while_cubes_remain() {
        let mut ledger = DiseaseLedger::new(2);
        ledger.add_cubes(1, Category::Red, 1);
        ledger.mark_cured(Category::Red);
        let before = ledger.clone();
        assert!(!ledger.mark_eradicated(Category::Red));
        assert_eq!(ledger, before);
    }

    #[test]
    fn eradication_succeeds_on_clean_board() {
        let mut ledger = DiseaseLedger::new(2);
        ledger.mark_cured(Category::Black);
        assert!(ledger.mark_eradicated(Category::Black));
        assert!(ledger.disease(Category::Black).eradicated);
    }

    #[test]
    fn all_cured_needs_every_color() {
        let mut ledger = DiseaseLedger::new(1);
        for category in &Category::ALL[..3] {
            ledger.mark_cured(*category);
        }
        assert!(!ledger.all_cured());
        ledger.mark_cured(Category::Black);
        assert!(ledger.all_cured());
    }
}
