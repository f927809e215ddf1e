/// Requests the UI sends to a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Select or deselect the phrase with this label.
    Toggle { label: String },
    /// Score the current selection. Ignored unless the selection is full.
    Submit,
    /// Clear the selection, result and timer.
    Reset,
    /// Reorder the board.
    Shuffle,
}

impl InputEvent {
    pub fn toggle(label: impl Into<String>) -> Self {
        InputEvent::Toggle { label: label.into() }
    }

    /// Short name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            InputEvent::Toggle { .. } => "toggle",
            InputEvent::Submit => "submit",
            InputEvent::Reset => "reset",
            InputEvent::Shuffle => "shuffle",
        }
    }
}

/// UI requests buffered between frames, applied in arrival order.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        log::trace!("queued {}", event.name());
        self.pending.push(event);
    }

    /// Drop everything queued. Called once the session has applied the frame.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InputEvent> {
        self.pending.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

impl Extend<InputEvent> for InputQueue {
    fn extend<I: IntoIterator<Item = InputEvent>>(&mut self, iter: I) {
        for event in iter {
            self.push(event);
        }
    }
}

impl FromIterator<InputEvent> for InputQueue {
    fn from_iter<I: IntoIterator<Item = InputEvent>>(iter: I) -> Self {
        let mut q = Self::new();
        q.extend(iter);
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_arrival_order_until_cleared() {
        let mut q = InputQueue::new();
        q.push(InputEvent::toggle("Define the incident"));
        q.push(InputEvent::Submit);
        let names: Vec<_> = q.iter().map(InputEvent::name).collect();
        assert_eq!(names, ["toggle", "submit"]);
        q.clear();
        assert!(q.is_empty());
    }

    #[test]
    fn collects_from_iterator() {
        let q: InputQueue = [InputEvent::Shuffle, InputEvent::Reset].into_iter().collect();
        assert_eq!(q.len(), 2);
        assert_eq!(q.iter().next(), Some(&InputEvent::Shuffle));
    }
}
