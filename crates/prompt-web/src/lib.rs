pub mod runner;

pub use prompt_engine;
pub use runner::{JsClock, SessionRunner};

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the SessionRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (lifecycle, input requests, JSON and scalar accessors)
///
/// Every export is safe to call before `game_init()` or after `game_destroy()`:
/// it logs and returns an empty value instead of throwing into the page.
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyGame;
///
/// prompt_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `prompt_engine::Game`
/// - `$game_name`: A string literal used in log messages
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;
        use $crate::prompt_engine::InputEvent;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SessionRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::SessionRunner<$game_type>) -> R) -> Option<R> {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                match borrow.as_mut() {
                    Some(runner) => Some(f(runner)),
                    None => {
                        log::warn!("{}: not initialized, call game_init() first", $game_name);
                        None
                    }
                }
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            match $crate::SessionRunner::new(game) {
                Ok(runner) => {
                    RUNNER.with(|cell| {
                        *cell.borrow_mut() = Some(runner);
                    });
                    log::info!("{}: initialized", $game_name);
                }
                Err(err) => log::error!("{}: failed to start: {}", $game_name, err),
            }
        }

        /// Drop the session. Any tick still scheduled by the page becomes a no-op.
        #[wasm_bindgen]
        pub fn game_destroy() {
            RUNNER.with(|cell| {
                cell.borrow_mut().take();
            });
        }

        #[wasm_bindgen]
        pub fn game_tick() {
            with_runner(|r| r.tick());
        }

        // ---- Input requests (applied on the next tick) ----

        #[wasm_bindgen]
        pub fn game_toggle(label: &str) {
            with_runner(|r| r.push_input(InputEvent::toggle(label)));
        }

        #[wasm_bindgen]
        pub fn game_submit() {
            with_runner(|r| r.push_input(InputEvent::Submit));
        }

        #[wasm_bindgen]
        pub fn game_reset() {
            with_runner(|r| r.push_input(InputEvent::Reset));
        }

        #[wasm_bindgen]
        pub fn game_shuffle() {
            with_runner(|r| r.push_input(InputEvent::Shuffle));
        }

        #[wasm_bindgen]
        pub fn game_load_catalog(json: &str) {
            with_runner(|r| r.load_catalog(json));
        }

        #[wasm_bindgen]
        pub fn game_restore_catalog() {
            with_runner(|r| r.restore_catalog());
        }

        // ---- JSON accessors ----

        #[wasm_bindgen]
        pub fn get_view_json() -> String {
            with_runner(|r| r.view_json()).unwrap_or_else(|| String::from("null"))
        }

        #[wasm_bindgen]
        pub fn get_report_json() -> String {
            with_runner(|r| r.report_json()).unwrap_or_else(|| String::from("null"))
        }

        #[wasm_bindgen]
        pub fn get_scenario_json() -> String {
            with_runner(|r| r.scenario_json()).unwrap_or_else(|| String::from("null"))
        }

        // ---- Scalar accessors ----

        #[wasm_bindgen]
        pub fn get_elapsed_seconds() -> u32 {
            with_runner(|r| r.elapsed_seconds()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_elapsed_display() -> String {
            with_runner(|r| r.elapsed_display()).unwrap_or_default()
        }

        #[wasm_bindgen]
        pub fn get_selected_count() -> u32 {
            with_runner(|r| r.selected_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_max_selections() -> u32 {
            with_runner(|r| r.max_selections()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_can_submit() -> bool {
            with_runner(|r| r.can_submit()).unwrap_or(false)
        }

        // ---- Event buffer ----

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len()).unwrap_or(0)
        }
    };
}
