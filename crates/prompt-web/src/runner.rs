use prompt_engine::{
    events_as_floats, Catalog, CatalogError, Clock, Game, GameSession, InputEvent, InputQueue,
    Scenario,
};

/// Browser clock. `SystemTime` is unavailable on `wasm32-unknown-unknown`.
pub struct JsClock;

impl Clock for JsClock {
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// Generic runner that wires a game's session to the page.
///
/// Each game crate stores one `SessionRunner` in a `thread_local!` and exports
/// free functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct SessionRunner<G: Game> {
    game: G,
    session: GameSession,
    input: InputQueue,
    scenario: Scenario,
    /// Events from the last tick, flattened for the UI.
    event_buffer: Vec<f32>,
}

impl<G: Game> SessionRunner<G> {
    pub fn new(game: G) -> Result<Self, CatalogError> {
        Self::with_clock(game, Box::new(JsClock))
    }

    /// Build a runner on any clock. The configured seed is mixed with the
    /// clock so every page load gets a different board.
    pub fn with_clock(game: G, clock: Box<dyn Clock>) -> Result<Self, CatalogError> {
        let mut config = game.config();
        config.seed ^= clock.now_ms();
        let catalog = game.catalog()?;
        let scenario = game.scenario();
        Ok(Self {
            session: GameSession::new(catalog, config, clock),
            game,
            input: InputQueue::new(),
            scenario,
            event_buffer: Vec::new(),
        })
    }

    /// Queue a UI request; applied on the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: apply queued input, refresh the timer, publish events.
    pub fn tick(&mut self) {
        self.session.clear_events();
        self.session.update(&self.input);
        self.input.clear();
        self.session.tick();

        self.event_buffer.clear();
        self.event_buffer
            .extend_from_slice(events_as_floats(self.session.events()));
    }

    /// Replace the game's phrase pool with a JSON manifest. Invalid input is
    /// logged and the current pool is kept.
    pub fn load_catalog(&mut self, json: &str) {
        match Catalog::from_json(json) {
            Ok(catalog) => {
                log::info!("loaded catalog with {} phrases", catalog.len());
                self.session.load_catalog(catalog);
            }
            Err(err) => log::warn!("custom catalog ignored, keeping current pool: {err}"),
        }
    }

    /// Restore the game's own phrase pool.
    pub fn restore_catalog(&mut self) {
        match self.game.catalog() {
            Ok(catalog) => self.session.load_catalog(catalog),
            Err(err) => log::warn!("built-in catalog invalid: {err}"),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    // ---- JSON accessors ----

    pub fn view_json(&self) -> String {
        self.session.view().to_json().unwrap_or_else(|err| {
            log::warn!("view serialization failed: {err}");
            String::from("{}")
        })
    }

    /// The results panel payload, or `"null"` before a submit.
    pub fn report_json(&self) -> String {
        match self.session.report() {
            Some(report) => report.to_json().unwrap_or_else(|err| {
                log::warn!("report serialization failed: {err}");
                String::from("null")
            }),
            None => String::from("null"),
        }
    }

    pub fn scenario_json(&self) -> String {
        self.scenario.to_json().unwrap_or_else(|err| {
            log::warn!("scenario serialization failed: {err}");
            String::from("{}")
        })
    }

    // ---- Scalar accessors ----

    pub fn elapsed_seconds(&self) -> u32 {
        self.session.elapsed_seconds()
    }

    pub fn elapsed_display(&self) -> String {
        self.session.elapsed_display()
    }

    pub fn selected_count(&self) -> u32 {
        self.session.selected().len() as u32
    }

    pub fn max_selections(&self) -> u32 {
        self.session.max_selections() as u32
    }

    pub fn can_submit(&self) -> bool {
        self.session.can_submit()
    }

    // ---- Event buffer for direct memory reads ----

    pub fn game_events_ptr(&self) -> *const f32 {
        self.event_buffer.as_ptr()
    }

    /// Number of events (each `GameEvent::FLOATS` floats wide).
    pub fn game_events_len(&self) -> u32 {
        (self.event_buffer.len() / prompt_engine::GameEvent::FLOATS) as u32
    }
}
