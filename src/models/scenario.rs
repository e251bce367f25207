use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Rigged deck the server deals from when a game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scenario {
    #[default]
    Random,
    A1,
    TwoWinners,
    OneWinnerWithEvents,
    ZeroWinnerQuest,
    Other(u32),
}

pub const KNOWN_SCENARIOS: [Scenario; 5] = [
    Scenario::Random,
    Scenario::A1,
    Scenario::TwoWinners,
    Scenario::OneWinnerWithEvents,
    Scenario::ZeroWinnerQuest,
];

impl Scenario {
    pub fn id(&self) -> u32 {
        match *self {
            Scenario::Random => 0,
            Scenario::A1 => 1,
            Scenario::TwoWinners => 2,
            Scenario::OneWinnerWithEvents => 3,
            Scenario::ZeroWinnerQuest => 4,
            Scenario::Other(id) => id,
        }
    }

    pub fn from_id(id: u32) -> Self {
        KNOWN_SCENARIOS
            .iter()
            .find(|s| s.id() == id)
            .copied()
            .unwrap_or(Scenario::Other(id))
    }

    pub fn label(&self) -> String {
        match *self {
            Scenario::Random => "Random game".to_string(),
            Scenario::A1 => "A1 scenario".to_string(),
            Scenario::TwoWinners => "2 winners, 2-winner quest".to_string(),
            Scenario::OneWinnerWithEvents => "1 winner with events".to_string(),
            Scenario::ZeroWinnerQuest => "0-winner quest".to_string(),
            Scenario::Other(id) => format!("Scenario {}", id),
        }
    }

    /// Console line shown before the start request goes out.
    pub fn start_message(&self) -> String {
        match self.id() {
            0 => "Starting a new random game...\n".to_string(),
            id => format!("Starting a game with cards rigged for scenario {}...\n", id),
        }
    }
}

impl Display for Scenario {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Scenario::from_id)
            .map_err(|_| format!("invalid scenario '{}', expected a number", s))
    }
}
