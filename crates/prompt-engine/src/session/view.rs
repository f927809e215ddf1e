use serde::Serialize;

use crate::catalog::{Phrase, PhraseKind};
use crate::coach::MissedGroup;
use crate::scoring::GameResult;
use crate::session::GameSession;

/// One phrase button as the UI draws it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChipView {
    pub label: String,
    pub category: String,
    pub kind: PhraseKind,
    pub selected: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub title: String,
    pub description: String,
    pub chips: Vec<ChipView>,
}

/// Snapshot of everything the board needs to render, taken after each frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    /// Chips in board (shuffled) order.
    pub chips: Vec<ChipView>,
    /// Chips grouped by catalog section. Empty for unsectioned catalogs.
    pub sections: Vec<SectionView>,
    /// Selected labels in pick order.
    pub selected: Vec<String>,
    pub max_selections: usize,
    pub elapsed_seconds: u32,
    pub elapsed_display: String,
    pub timer_running: bool,
    pub can_submit: bool,
    /// Picks are frozen once submitted; the board stays read-only until reset.
    pub submitted: bool,
}

impl SessionView {
    pub(crate) fn build(session: &GameSession) -> Self {
        let chip = |p: &Phrase| ChipView {
            label: p.label.clone(),
            category: p.category.clone(),
            kind: p.kind,
            selected: session.is_selected(&p.label),
            disabled: session.is_disabled(&p.label),
        };
        Self {
            chips: session.board().iter().map(chip).collect(),
            sections: session
                .catalog()
                .sections()
                .iter()
                .map(|s| SectionView {
                    title: s.title.clone(),
                    description: s.description.clone(),
                    chips: s.phrases.iter().map(chip).collect(),
                })
                .collect(),
            selected: session.selected().iter().map(|p| p.label.clone()).collect(),
            max_selections: session.max_selections(),
            elapsed_seconds: session.elapsed_seconds(),
            elapsed_display: session.elapsed_display(),
            timer_running: session.timer().is_running(),
            can_submit: session.can_submit(),
            submitted: session.result().is_some(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Everything the results panel shows after a submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReport {
    pub result: GameResult,
    pub coach_message: String,
    /// Optimal phrases not picked, grouped by category.
    pub missed: Vec<MissedGroup>,
    pub elapsed_display: String,
}

impl GameReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
