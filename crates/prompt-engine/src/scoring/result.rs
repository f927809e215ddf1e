use serde::{Deserialize, Serialize};

use crate::catalog::{Phrase, PhraseKind};

/// Count and summed weight of the picks of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindTally {
    pub kind: PhraseKind,
    pub count: usize,
    pub points: i32,
}

/// Outcome of one submission. Built once by [`score`](crate::scoring::score), never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Signed sum of the selected weights.
    pub base_score: i32,
    /// Per-kind sub-scores, in [`PhraseKind::ALL`] order, kinds with no picks omitted.
    pub breakdown: Vec<KindTally>,
    pub essentials_bonus: i32,
    pub diversity_bonus: i32,
    pub time_bonus: i32,
    pub total_score: i32,
    pub max_possible: i32,
    pub percentage: i32,
    pub optimal_count: usize,
    /// Picks a complete round takes.
    pub max_selections: usize,
    pub distinct_categories: usize,
    pub elapsed_seconds: u32,
    pub selected_phrases: Vec<Phrase>,
}

impl GameResult {
    pub fn tally(&self, kind: PhraseKind) -> Option<&KindTally> {
        self.breakdown.iter().find(|t| t.kind == kind)
    }

    pub fn count_of(&self, kind: PhraseKind) -> usize {
        self.tally(kind).map(|t| t.count).unwrap_or(0)
    }

    pub fn points_of(&self, kind: PhraseKind) -> i32 {
        self.tally(kind).map(|t| t.points).unwrap_or(0)
    }

    /// A full round made entirely of optimal phrases.
    pub fn is_perfect(&self) -> bool {
        self.max_selections > 0 && self.optimal_count == self.max_selections
    }
}
