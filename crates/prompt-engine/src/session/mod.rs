//! One game instance: the board, the player's picks, the round timer and,
//! once submitted, the result. Sessions share nothing, so any number can
//! run side by side.

pub mod view;

use crate::api::game::GameConfig;
use crate::api::types::{GameEvent, EVENT_TIME};
use crate::catalog::{Catalog, Phrase};
use crate::coach::{missed_by_category, missed_optimal};
use crate::core::rng::Rng;
use crate::core::selection::{Selection, ToggleOutcome};
use crate::core::timer::{format_time, Clock, GameTimer};
use crate::error::SubmitError;
use crate::input::queue::{InputEvent, InputQueue};
use crate::scoring::{score, GameResult};
pub use view::{ChipView, GameReport, SectionView, SessionView};

pub struct GameSession {
    catalog: Catalog,
    config: GameConfig,
    /// Display order of the catalog.
    board: Vec<Phrase>,
    selection: Selection,
    timer: GameTimer,
    result: Option<GameResult>,
    rng: Rng,
    clock: Box<dyn Clock>,
    events: Vec<GameEvent>,
}

impl GameSession {
    pub fn new(catalog: Catalog, config: GameConfig, clock: Box<dyn Clock>) -> Self {
        let mut rng = Rng::new(config.seed);
        let board = if config.shuffle_on_start {
            catalog.shuffle(&mut rng)
        } else {
            catalog.all_phrases().to_vec()
        };
        Self {
            selection: Selection::new(config.scoring.max_selections),
            catalog,
            config,
            board,
            timer: GameTimer::new(),
            result: None,
            rng,
            clock,
            events: Vec::new(),
        }
    }

    // -- Input --

    /// Apply every queued UI request in order.
    pub fn update(&mut self, input: &InputQueue) {
        for event in input.iter() {
            self.handle(event);
        }
    }

    pub fn handle(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Toggle { label } => {
                self.toggle(label);
            }
            InputEvent::Submit => {
                if let Err(err) = self.submit() {
                    log::debug!("submit ignored: {err}");
                }
            }
            InputEvent::Reset => self.reset(),
            InputEvent::Shuffle => self.shuffle(),
        }
    }

    /// Select or deselect a phrase by label. The first pick starts the timer.
    pub fn toggle(&mut self, label: &str) -> ToggleOutcome {
        if self.result.is_some() {
            log::debug!("toggle {label:?} ignored: round already submitted");
            return ToggleOutcome::Frozen;
        }
        let Some(phrase) = self.catalog.get(label) else {
            log::debug!("toggle {label:?} ignored: not in catalog");
            return ToggleOutcome::Unknown;
        };
        let outcome = self.selection.toggle(phrase);
        match outcome {
            ToggleOutcome::Added { first: true } => {
                if self.timer.start(self.clock.now_ms()).is_some() {
                    self.events.push(GameEvent::timer_started());
                }
            }
            ToggleOutcome::Locked => {
                log::debug!("toggle {label:?} ignored: selection full");
            }
            _ => {}
        }
        if outcome.changed() {
            self.events.push(GameEvent::selection_changed(
                self.selection.len(),
                self.selection.max(),
            ));
        }
        outcome
    }

    /// Stop the timer and score the selection. Only a full, unsubmitted
    /// selection produces a result.
    pub fn submit(&mut self) -> Result<&GameResult, SubmitError> {
        if self.result.is_some() {
            return Err(SubmitError::AlreadySubmitted);
        }
        if !self.selection.is_full() {
            return Err(SubmitError::Incomplete {
                selected: self.selection.len(),
                required: self.selection.max(),
            });
        }
        self.timer.stop(self.clock.now_ms());
        let result = score(
            self.selection.phrases(),
            self.timer.elapsed_seconds(),
            &self.config.scoring,
        );
        log::info!(
            "submitted: {}/{} ({}%) in {}s, {} optimal",
            result.total_score,
            result.max_possible,
            result.percentage,
            result.elapsed_seconds,
            result.optimal_count,
        );
        self.events.push(GameEvent::submitted(
            result.total_score,
            result.percentage,
            result.optimal_count,
        ));
        Ok(&*self.result.insert(result))
    }

    /// Clear picks and result, zero the timer, optionally reshuffle.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.result = None;
        self.timer.reset();
        if self.config.reshuffle_on_reset {
            self.board = self.catalog.shuffle(&mut self.rng);
        }
        self.events.push(GameEvent::reset());
    }

    /// New board order. Picks, timer and result are unaffected.
    pub fn shuffle(&mut self) {
        self.board = self.catalog.shuffle(&mut self.rng);
        self.events.push(GameEvent::shuffled());
    }

    /// Swap in a different phrase pool and start over.
    pub fn load_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.board = self.catalog.all_phrases().to_vec();
        self.reset();
    }

    /// Periodic timer refresh. A no-op unless the timer is running.
    /// Returns true when the displayed seconds changed.
    pub fn tick(&mut self) -> bool {
        let Some(handle) = self.timer.active_handle() else {
            return false;
        };
        let before = self.timer.elapsed_seconds();
        self.timer.tick(handle, self.clock.now_ms());
        let after = self.timer.elapsed_seconds();
        if after != before {
            let event = GameEvent::time(after);
            match self.events.last_mut() {
                Some(last) if last.kind == EVENT_TIME => *last = event,
                _ => self.events.push(event),
            }
        }
        after != before
    }

    // -- Queries --

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &[Phrase] {
        &self.board
    }

    /// Picks in pick order.
    pub fn selected(&self) -> &[Phrase] {
        self.selection.phrases()
    }

    pub fn max_selections(&self) -> usize {
        self.selection.max()
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.selection.is_selected(label)
    }

    pub fn is_disabled(&self, label: &str) -> bool {
        self.selection.is_disabled(label)
    }

    pub fn can_submit(&self) -> bool {
        self.selection.is_full() && self.result.is_none()
    }

    /// Seconds as last refreshed by [`tick`](Self::tick), or frozen at submit.
    pub fn elapsed_seconds(&self) -> u32 {
        self.timer.elapsed_seconds()
    }

    pub fn elapsed_display(&self) -> String {
        format_time(self.elapsed_seconds())
    }

    pub fn timer(&self) -> &GameTimer {
        &self.timer
    }

    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    pub fn coach_message(&self) -> Option<&str> {
        self.result.as_ref().map(|r| self.config.coach.message(r))
    }

    /// Optimal phrases absent from the submitted selection, in catalog order.
    /// Empty before submission.
    pub fn missed_optimal(&self) -> Vec<&Phrase> {
        match &self.result {
            Some(r) => missed_optimal(&r.selected_phrases, &self.catalog),
            None => Vec::new(),
        }
    }

    pub fn report(&self) -> Option<GameReport> {
        let result = self.result.as_ref()?;
        Some(GameReport {
            result: result.clone(),
            coach_message: self.config.coach.message(result).to_string(),
            missed: missed_by_category(&result.selected_phrases, &self.catalog),
            elapsed_display: format_time(result.elapsed_seconds),
        })
    }

    pub fn view(&self) -> SessionView {
        SessionView::build(self)
    }

    // -- Outgoing events --

    /// Events produced since the last [`clear_events`](Self::clear_events).
    ///
    /// The buffer is only emptied by `clear_events`; callers driving a session
    /// directly should clear it once per frame. Back-to-back timer events
    /// collapse into the latest, so ticking alone keeps at most one.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}
