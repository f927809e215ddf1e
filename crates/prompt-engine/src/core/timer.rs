//! Wall-clock round timer.
//!
//! Elapsed seconds are always derived from the start timestamp, never from
//! counting ticks, so throttled or dropped ticks cannot cause drift. Ticks
//! only refresh the displayed value and carry a [`TickHandle`] so that a
//! callback scheduled for an earlier run is ignored once the timer has
//! stopped or restarted.

use std::cell::Cell;
use std::rc::Rc;

/// Source of absolute time in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Host clock. Not usable on `wasm32-unknown-unknown`; the web bridge supplies its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Hand-driven clock. Clones share the same instant.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Stopped,
}

/// Identifies one running period of a [`GameTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

#[derive(Debug, Clone)]
pub struct GameTimer {
    state: TimerState,
    /// Instant that corresponds to zero elapsed seconds.
    origin_ms: u64,
    seconds: u32,
    generation: u64,
    active: Option<TickHandle>,
}

impl GameTimer {
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
            origin_ms: 0,
            seconds: 0,
            generation: 0,
            active: None,
        }
    }

    /// Record `now_ms` as the start instant and count from zero. Returns the
    /// handle ticks must present, or `None` if already running.
    pub fn start(&mut self, now_ms: u64) -> Option<TickHandle> {
        if self.state == TimerState::Running {
            return None;
        }
        self.origin_ms = now_ms;
        self.seconds = 0;
        self.state = TimerState::Running;
        self.generation += 1;
        let handle = TickHandle(self.generation);
        self.active = Some(handle);
        Some(handle)
    }

    /// Periodic refresh. Returns false (and changes nothing) for a stale handle.
    pub fn tick(&mut self, handle: TickHandle, now_ms: u64) -> bool {
        if self.active != Some(handle) {
            return false;
        }
        self.seconds = self.elapsed_at(now_ms);
        true
    }

    /// Freeze the counter at its value for `now_ms` and release the tick handle.
    pub fn stop(&mut self, now_ms: u64) {
        if self.state == TimerState::Running {
            self.seconds = self.elapsed_at(now_ms);
        }
        self.state = TimerState::Stopped;
        self.active = None;
    }

    /// Back to idle at zero.
    pub fn reset(&mut self) {
        self.state = TimerState::Idle;
        self.seconds = 0;
        self.origin_ms = 0;
        self.active = None;
    }

    /// Last recorded whole seconds. Valid in every state.
    pub fn elapsed_seconds(&self) -> u32 {
        self.seconds
    }

    /// Whole seconds as of `now_ms`: `floor((now - start) / 1000)` while running,
    /// the frozen value otherwise. Never below the last recorded value.
    pub fn elapsed_at(&self, now_ms: u64) -> u32 {
        if self.state != TimerState::Running {
            return self.seconds;
        }
        let derived = (now_ms.saturating_sub(self.origin_ms) / 1000) as u32;
        derived.max(self.seconds)
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn active_handle(&self) -> Option<TickHandle> {
        self.active
    }
}

impl Default for GameTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// `MM:SS`, zero-padded. Minutes widen past 99.
pub fn format_time(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
