use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::coach::CoachLadder;
use crate::error::CatalogError;
use crate::scoring::ScoringConfig;

/// Configuration for one game, provided by the game crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Scoring preset, including how many picks a round takes.
    pub scoring: ScoringConfig,
    /// Feedback messages for the results panel.
    pub coach: CoachLadder,
    /// Seed for board shuffles (default: 42). The web bridge mixes in the page clock.
    pub seed: u64,
    /// Shuffle the board when the session starts (default: true).
    pub shuffle_on_start: bool,
    /// Shuffle the board again on every reset (default: true).
    pub reshuffle_on_reset: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            coach: CoachLadder::default(),
            seed: 42,
            shuffle_on_start: true,
            reshuffle_on_reset: true,
        }
    }
}

/// One entry in the hint panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintCategory {
    pub name: String,
    pub description: String,
}

impl HintCategory {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Copy the UI shows around the board. Not used by scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub title: String,
    pub instructions: String,
    /// The situation the player is writing a prompt for.
    pub situation: String,
    #[serde(default)]
    pub tip: String,
    #[serde(default)]
    pub hints: Vec<HintCategory>,
}

impl Scenario {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// The contract every prompt game fulfills.
pub trait Game {
    /// Return game configuration. Called once before the session starts.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// The phrase pool.
    fn catalog(&self) -> Result<Catalog, CatalogError>;

    /// Optional scenario copy and hints for the UI.
    fn scenario(&self) -> Scenario {
        Scenario::default()
    }
}
