use serde::{Deserialize, Serialize};

pub const ACTIONS_PER_TURN: u8 = 4;
pub const MAX_PLAYERS: usize = 4;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_OUTBREAKS: u8 = 8;
pub const INITIAL_SUPPLY: u8 = 24;
/// Most cubes of one color a single city can hold.
pub const CUBE_CAP: u8 = 3;
pub const INFECTION_RATE: usize = 2;
pub const STARTING_CITY: &str = "Atlanta";
pub const CARDS_FOR_CURE: usize = 5;
pub const SCIENTIST_CARDS_FOR_CURE: usize = 4;

/// Initial infection tiers as (cities drawn, cubes placed on each).
pub const SEED_TIERS: [(usize, u8); 3] = [(3, 3), (3, 2), (3, 1)];

pub const NUM_CATEGORIES: usize = 4;

/// Disease colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Red = 0,
    Blue = 1,
    Yellow = 2,
    Black = 3,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Red => "red",
            Category::Blue => "blue",
            Category::Yellow => "yellow",
            Category::Black => "black",
        }
    }

    pub const ALL: [Category; NUM_CATEGORIES] = [
        Category::Red,
        Category::Blue,
        Category::Yellow,
        Category::Black,
    ];
}

/// Player roles. Each one bends a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Medic,
    Scientist,
    Researcher,
    #[serde(rename = "Operations Expert")]
    OperationsExpert,
    Dispatcher,
    #[serde(rename = "Contingency Planner")]
    ContingencyPlanner,
    #[serde(rename = "Quarantine Specialist")]
    QuarantineSpecialist,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Role::Medic => "Medic",
            Role::Scientist => "Scientist",
            Role::Researcher => "Researcher",
            Role::OperationsExpert => "Operations Expert",
            Role::Dispatcher => "Dispatcher",
            Role::ContingencyPlanner => "Contingency Planner",
            Role::QuarantineSpecialist => "Quarantine Specialist",
        }
    }

    /// Treating removes every cube of the color, cured or not.
    pub fn treats_all(&self) -> bool {
        matches!(self, Role::Medic)
    }

    /// Research stations can be built without the matching city card.
    pub fn builds_without_card(&self) -> bool {
        matches!(self, Role::OperationsExpert)
    }

    pub fn cards_for_cure(&self) -> usize {
        match self {
            Role::Scientist => SCIENTIST_CARDS_FOR_CURE,
            _ => CARDS_FOR_CURE,
        }
    }
}

/// The reference board: every city with its home color, in draw order.
pub const REFERENCE_CITIES: &[(&str, Category)] = &[
    ("Atlanta", Category::Blue),
    ("Chicago", Category::Blue),
    ("New York", Category::Blue),
    ("Washington", Category::Blue),
    ("San Francisco", Category::Blue),
    ("London", Category::Blue),
    ("Madrid", Category::Blue),
    ("Paris", Category::Blue),
    ("Milan", Category::Blue),
    ("St. Petersburg", Category::Blue),
    ("Los Angeles", Category::Yellow),
    ("Mexico City", Category::Yellow),
    ("Miami", Category::Yellow),
    ("Bogota", Category::Yellow),
    ("Lima", Category::Yellow),
    ("Santiago", Category::Yellow),
    ("Buenos Aires", Category::Yellow),
    ("Sao Paulo", Category::Yellow),
    ("Lagos", Category::Yellow),
    ("Kinshasa", Category::Yellow),
    ("Khartoum", Category::Yellow),
    ("Johannesburg", Category::Yellow),
    ("Algiers", Category::Black),
    ("Istanbul", Category::Black),
    ("Cairo", Category::Black),
    ("Moscow", Category::Black),
    ("Baghdad", Category::Black),
    ("Riyadh", Category::Black),
    ("Tehran", Category::Black),
    ("Karachi", Category::Black),
    ("Delhi", Category::Black),
    ("Mumbai", Category::Red),
    ("Chennai", Category::Red),
    ("Kolkata", Category::Red),
    ("Beijing", Category::Red),
    ("Seoul", Category::Red),
    ("Tokyo", Category::Red),
    ("Shanghai", Category::Red),
    ("Hong Kong", Category::Red),
    ("Taipei", Category::Red),
    ("Ho Chi Minh City", Category::Red),
    ("Bangkok", Category::Red),
    ("Jakarta", Category::Red),
    ("Manila", Category::Red),
    ("Sydney", Category::Red),
];

/// Undirected routes between reference cities.
pub const REFERENCE_ROUTES: &[(&str, &str)] = &[
    // North America
    ("San Francisco", "Chicago"),
    ("San Francisco", "Los Angeles"),
    ("Chicago", "Los Angeles"),
    ("Chicago", "Mexico City"),
    ("Chicago", "Atlanta"),
    ("Chicago", "New York"),
    ("New York", "Washington"),
    ("New York", "London"),
    ("New York", "Madrid"),
    ("Washington", "Atlanta"),
    ("Washington", "Miami"),
    ("Atlanta", "Miami"),
    ("Los Angeles", "Mexico City"),
    ("Miami", "Mexico City"),
    ("Miami", "Bogota"),
    // South America
    ("Mexico City", "Bogota"),
    ("Bogota", "Lima"),
    ("Bogota", "Sao Paulo"),
    ("Lima", "Santiago"),
    ("Lima", "Sao Paulo"),
    ("Santiago", "Buenos Aires"),
    ("Buenos Aires", "Sao Paulo"),
    // Europe
    ("London", "Paris"),
    ("London", "Madrid"),
    ("Madrid", "Paris"),
    ("Madrid", "Algiers"),
    ("Paris", "Milan"),
    ("Paris", "Algiers"),
    ("Milan", "St. Petersburg"),
    ("Milan", "Istanbul"),
    ("St. Petersburg", "Moscow"),
    ("St. Petersburg", "Istanbul"),
    // Africa and the Middle East
    ("Algiers", "Istanbul"),
    ("Algiers", "Cairo"),
    ("Istanbul", "Cairo"),
    ("Istanbul", "Baghdad"),
    ("Istanbul", "Moscow"),
    ("Moscow", "Tehran"),
    ("Cairo", "Baghdad"),
    ("Cairo", "Riyadh"),
    ("Cairo", "Khartoum"),
    ("Baghdad", "Riyadh"),
    ("Baghdad", "Tehran"),
    ("Baghdad", "Karachi"),
    ("Riyadh", "Karachi"),
    ("Khartoum", "Lagos"),
    ("Khartoum", "Kinshasa"),
    ("Lagos", "Kinshasa"),
    ("Kinshasa", "Johannesburg"),
    // Asia and Oceania
    ("Tehran", "Karachi"),
    ("Tehran", "Delhi"),
    ("Karachi", "Delhi"),
    ("Karachi", "Mumbai"),
    ("Delhi", "Mumbai"),
    ("Delhi", "Kolkata"),
    ("Mumbai", "Chennai"),
    ("Chennai", "Kolkata"),
    ("Chennai", "Bangkok"),
    ("Chennai", "Jakarta"),
    ("Kolkata", "Bangkok"),
    ("Kolkata", "Hong Kong"),
    ("Beijing", "Seoul"),
    ("Beijing", "Shanghai"),
    ("Seoul", "Tokyo"),
    ("Seoul", "Shanghai"),
    ("Tokyo", "Shanghai"),
    ("Tokyo", "San Francisco"),
    ("Shanghai", "Hong Kong"),
    ("Shanghai", "Taipei"),
    ("Hong Kong", "Taipei"),
    ("Hong Kong", "Bangkok"),
    ("Hong Kong", "Ho Chi Minh City"),
    ("Hong Kong", "Manila"),
    ("Taipei", "Manila"),
    ("Bangkok", "Ho Chi Minh City"),
    ("Bangkok", "Jakarta"),
    ("Ho Chi Minh City", "Jakarta"),
    ("Ho Chi Minh City", "Manila"),
    ("Jakarta", "Sydney"),
    ("Manila", "Sydney"),
];
