// Capsword Event Model
// The key notification record shared across one dispatch pass

use crate::mods::Mods;
use crate::Action;

/// A single key state-change notification.
///
/// One event is a single shared mutable record for the duration of a
/// dispatch pass, not a per-listener copy: modifier bits added by one
/// instance are visible to instances evaluated after it and to the
/// downstream report pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub usage_page: u16,
    pub usage_id: u16,
    pub action: Action,
    /// Modifier bits attached to this event by upstream processing,
    /// distinct from modifiers the user is physically holding.
    pub implicit_mods: Mods,
}

impl KeyEvent {
    /// A key-down notification with no implicit modifiers.
    pub fn press(usage_page: u16, usage_id: u16) -> Self {
        Self {
            usage_page,
            usage_id,
            action: Action::Press,
            implicit_mods: Mods::empty(),
        }
    }

    /// A key-up notification with no implicit modifiers.
    pub fn release(usage_page: u16, usage_id: u16) -> Self {
        Self {
            usage_page,
            usage_id,
            action: Action::Release,
            implicit_mods: Mods::empty(),
        }
    }

    /// Attach implicit modifier bits, as upstream remapping would.
    pub fn with_mods(mut self, mods: Mods) -> Self {
        self.implicit_mods = mods;
        self
    }
}

/// Propagation verdict a listener hands back to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFlow {
    /// Let later listeners and the output pipeline see the event.
    Bubble,
    /// Stop propagation here; no later listener sees the event.
    Capture,
}
