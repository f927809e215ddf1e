use bytemuck::{Pod, Zeroable};

// Game event kinds (Rust → UI)
pub const EVENT_TIMER_STARTED: f32 = 1.0;
pub const EVENT_SELECTION_CHANGED: f32 = 2.0;
pub const EVENT_SUBMITTED: f32 = 3.0;
pub const EVENT_RESET: f32 = 4.0;
pub const EVENT_SHUFFLED: f32 = 5.0;
pub const EVENT_TIME: f32 = 6.0;

/// A game event communicated from Rust to the UI as a flat f32 buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }

    pub fn timer_started() -> Self {
        Self::new(EVENT_TIMER_STARTED, 0.0, 0.0, 0.0)
    }

    /// `a` = picks made, `b` = picks allowed.
    pub fn selection_changed(count: usize, max: usize) -> Self {
        Self::new(EVENT_SELECTION_CHANGED, count as f32, max as f32, 0.0)
    }

    /// `a` = total score, `b` = percentage, `c` = optimal picks.
    pub fn submitted(total: i32, percentage: i32, optimal: usize) -> Self {
        Self::new(EVENT_SUBMITTED, total as f32, percentage as f32, optimal as f32)
    }

    pub fn reset() -> Self {
        Self::new(EVENT_RESET, 0.0, 0.0, 0.0)
    }

    pub fn shuffled() -> Self {
        Self::new(EVENT_SHUFFLED, 0.0, 0.0, 0.0)
    }

    /// `a` = whole elapsed seconds.
    pub fn time(seconds: u32) -> Self {
        Self::new(EVENT_TIME, seconds as f32, 0.0, 0.0)
    }
}

/// View a slice of events as the flat float buffer the UI reads.
pub fn events_as_floats(events: &[GameEvent]) -> &[f32] {
    bytemuck::cast_slice(events)
}
