// Capsword Modifier Tracking
// Held-modifier bookkeeping behind the ambient accessor seam

use smallvec::SmallVec;

use crate::event::KeyEvent;
use crate::mods::Mods;
use crate::usage;

/// Read accessor for the modifiers the user is currently physically
/// holding, as opposed to bits carried by an individual event.
pub trait ExplicitModSource {
    /// The currently-held explicit modifier bitmask
    fn explicit_mods(&self) -> Mods;
}

/// A plain mask is its own source. Used where the ambient state is
/// already known, and by tests.
impl ExplicitModSource for Mods {
    fn explicit_mods(&self) -> Mods {
        *self
    }
}

/// Tracks which modifier usages are down and folds them into a mask.
///
/// Fed every key notification by the dispatcher; non-modifier keys are
/// ignored. A usage held twice (two physical keys reporting the same
/// usage) stays registered until its last release.
#[derive(Debug, Default)]
pub struct ModifierTracker {
    /// Modifier usage ids currently down, in press order
    held: SmallVec<[u16; 4]>,
}

impl ModifierTracker {
    /// Create a tracker with nothing held
    pub fn new() -> Self {
        Self {
            held: SmallVec::new(),
        }
    }

    /// Update the held set from one key notification
    pub fn observe(&mut self, ev: &KeyEvent) {
        if Mods::from_usage(ev.usage_page, ev.usage_id).is_none() {
            return;
        }
        if ev.action.is_pressed() {
            self.held.push(ev.usage_id);
        } else if let Some(pos) = self.held.iter().position(|&id| id == ev.usage_id) {
            self.held.remove(pos);
        }
    }

    /// Forget everything held
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

impl ExplicitModSource for ModifierTracker {
    fn explicit_mods(&self) -> Mods {
        self.held
            .iter()
            .filter_map(|&id| Mods::from_usage(usage::PAGE_KEYBOARD, id))
            .fold(Mods::empty(), |acc, m| acc | m)
    }
}
