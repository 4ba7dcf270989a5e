use std::fmt;

/// Represents the transition state of a key notification.
///
/// The event source reports transitions as a boolean (`true` == key went
/// down); this is the typed form used throughout the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Release,
    Press,
}

impl Action {
    /// Returns true if this is a PRESS event
    pub fn is_pressed(self) -> bool {
        matches!(self, Action::Press)
    }

    /// Returns true if this is a RELEASE event
    pub fn is_released(self) -> bool {
        matches!(self, Action::Release)
    }

    /// Create Action from the event source's key-down boolean
    pub fn from_bool(is_key_down: bool) -> Self {
        if is_key_down {
            Action::Press
        } else {
            Action::Release
        }
    }

    /// Convert Action back to the key-down boolean
    pub fn to_bool(self) -> bool {
        matches!(self, Action::Press)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Release => write!(f, "release"),
            Action::Press => write!(f, "press"),
        }
    }
}
