// Capsword Automaton
// Per-instance word state and the key-down decision pipeline

use crate::classify;
use crate::config::CapsWordConfig;
use crate::dispatch::Behavior;
use crate::event::{EventFlow, KeyEvent};
use crate::mods::Mods;
use crate::tracker::ExplicitModSource;

/// One auto-Shift word instance: an immutable parameter set plus the
/// single `active` flag that is its entire mutable state.
///
/// While active, alphabetic keys (including the Cyrillic punctuation
/// letters) have the configured modifier bits OR'd into their event;
/// digits and allow-listed keys pass through untouched; anything else,
/// or any Ctrl/Alt/GUI involvement, ends the word.
#[derive(Debug)]
pub struct CapsWord {
    config: CapsWordConfig,
    active: bool,
}

impl CapsWord {
    /// Build an instance from a validated parameter set, initially
    /// inactive
    pub fn new(config: CapsWordConfig) -> Self {
        Self {
            config,
            active: false,
        }
    }

    /// The instance's parameter set
    pub fn config(&self) -> &CapsWordConfig {
        &self.config
    }

    /// Whether a word run is currently in progress
    pub fn is_active(&self) -> bool {
        self.active
    }

    fn activate(&mut self) {
        self.active = true;
        log::debug!("word run started");
    }

    fn deactivate(&mut self, cause: &str) {
        self.active = false;
        log::debug!("word run ended: {}", cause);
    }

    /// Flip the word state. Invoked on the activation command's press.
    pub fn toggle(&mut self) {
        if self.active {
            self.deactivate("toggled off");
        } else {
            self.activate();
        }
    }

    /// Release of the activation control. Defined for symmetry with the
    /// command source's press/release model; changes nothing.
    pub fn toggle_release(&mut self) {}

    /// Evaluate one key notification against this instance.
    ///
    /// Key-up events and anything seen while inactive are ignored. The
    /// event's implicit mask may gain the configured bits; the event
    /// always bubbles onward regardless of the outcome.
    pub fn on_key(&mut self, ev: &mut KeyEvent, explicit: &dyn ExplicitModSource) -> EventFlow {
        if !ev.action.is_pressed() || !self.active {
            return EventFlow::Bubble;
        }

        // Any Ctrl/Alt/GUI involvement, held or attached to the event,
        // ends the word before the key is looked at.
        if (explicit.explicit_mods() | ev.implicit_mods).intersects(Mods::DISALLOWED) {
            self.deactivate("ctrl/alt/gui involved");
            return EventFlow::Bubble;
        }

        // A modifier key press ends the word unless it is Shift.
        if classify::is_modifier(ev.usage_page, ev.usage_id)
            && !classify::is_shift(ev.usage_page, ev.usage_id)
        {
            self.deactivate("non-shift modifier pressed");
            return EventFlow::Bubble;
        }

        // Letters gain the configured bits before the continuation
        // decision; the augmentation is never rolled back.
        if classify::is_alpha(ev.usage_page, ev.usage_id) {
            ev.implicit_mods |= self.config.mods;
        }

        if !classify::is_alpha(ev.usage_page, ev.usage_id)
            && !classify::is_numeric(ev.usage_page, ev.usage_id)
            && !self.continues_word(ev, explicit)
        {
            self.deactivate("key ends the word");
        }

        EventFlow::Bubble
    }

    /// Walk the allow-list in order; an entry matches when its key equals
    /// the event's and all of its required bits are present. Held
    /// modifiers may supply bits the event itself does not carry.
    fn continues_word(&self, ev: &KeyEvent, explicit: &dyn ExplicitModSource) -> bool {
        let present = ev.implicit_mods | explicit.explicit_mods();
        self.config.continuations.iter().any(|entry| {
            entry.usage_page == ev.usage_page
                && entry.usage_id == ev.usage_id
                && present.contains(entry.required_mods)
        })
    }
}

impl Behavior for CapsWord {
    fn on_toggle(&mut self) {
        self.toggle();
    }

    fn on_toggle_release(&mut self) {
        self.toggle_release();
    }

    fn on_key_event(&mut self, ev: &mut KeyEvent, explicit: &dyn ExplicitModSource) -> EventFlow {
        self.on_key(ev, explicit)
    }
}
