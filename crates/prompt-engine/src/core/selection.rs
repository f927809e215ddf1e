use crate::catalog::Phrase;

/// Number of picks a round requires unless a game overrides it.
pub const MAX_SELECTIONS: usize = 4;

/// What a toggle request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Phrase added. `first` is set on the 0 → 1 transition, which starts the timer.
    Added { first: bool },
    /// Phrase was already selected and got removed.
    Removed,
    /// Selection is full; the request was ignored.
    Locked,
    /// Label is not on the board; ignored.
    Unknown,
    /// The round was already submitted; ignored until reset.
    Frozen,
}

impl ToggleOutcome {
    /// Whether the selection changed.
    pub fn changed(self) -> bool {
        matches!(self, ToggleOutcome::Added { .. } | ToggleOutcome::Removed)
    }
}

/// Ordered picks, bounded by `max`, unique by label.
/// Order is pick order; it drives display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    picks: Vec<Phrase>,
    max: usize,
}

impl Selection {
    pub fn new(max: usize) -> Self {
        Self {
            picks: Vec::with_capacity(max),
            max,
        }
    }

    /// Remove the phrase if selected, otherwise add it when there is room.
    pub fn toggle(&mut self, phrase: &Phrase) -> ToggleOutcome {
        if let Some(idx) = self.position(&phrase.label) {
            self.picks.remove(idx);
            return ToggleOutcome::Removed;
        }
        if self.is_full() {
            return ToggleOutcome::Locked;
        }
        self.picks.push(phrase.clone());
        ToggleOutcome::Added {
            first: self.picks.len() == 1,
        }
    }

    pub fn clear(&mut self) {
        self.picks.clear();
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.position(label).is_some()
    }

    /// A phrase is disabled iff it is not selected and the selection is full.
    /// Selected phrases stay enabled so they can be removed.
    pub fn is_disabled(&self, label: &str) -> bool {
        self.is_full() && !self.is_selected(label)
    }

    pub fn is_full(&self) -> bool {
        self.picks.len() >= self.max
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Picks in the order they were made.
    pub fn phrases(&self) -> &[Phrase] {
        &self.picks
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.picks.iter().position(|p| p.label == label)
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(MAX_SELECTIONS)
    }
}
