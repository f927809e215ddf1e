pub mod api;
pub mod catalog;
pub mod coach;
pub mod core;
pub mod error;
pub mod input;
pub mod scoring;
pub mod session;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, HintCategory, Scenario};
pub use api::types::{events_as_floats, GameEvent};
pub use catalog::manifest::CatalogManifest;
pub use catalog::{Catalog, Phrase, PhraseKind, Section, MAX_PHRASE_WEIGHT};
pub use coach::{missed_by_category, missed_optimal, CoachLadder, CoachTier, MissedGroup};
pub use core::rng::{RandomSource, Rng};
pub use core::selection::{Selection, ToggleOutcome, MAX_SELECTIONS};
pub use core::timer::{format_time, Clock, GameTimer, ManualClock, SystemClock, TickHandle, TimerState};
pub use error::{CatalogError, ScoreError, SubmitError};
pub use input::queue::{InputEvent, InputQueue};
pub use scoring::{check_selection, score, GameResult, KindTally, ScoringConfig, TimeBonusCurve};
pub use session::{GameReport, GameSession, SessionView};
