//! The scoring engine: a pure function of (selection, elapsed seconds, preset).

pub mod config;
pub mod engine;
pub mod result;

pub use config::{KindGate, ScoringConfig, SlowPenalty, TimeBonusCurve};
pub use engine::{check_selection, score};
pub use result::{GameResult, KindTally};
