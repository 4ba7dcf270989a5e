// Capsword Dispatch
// Registry of behavior instances and the per-event broadcast loop

use crate::event::{EventFlow, KeyEvent};
use crate::mods::Mods;
use crate::tracker::{ExplicitModSource, ModifierTracker};

/// Interface a dispatcher-managed behavior instance exposes.
///
/// The toggle pair mirrors the command source's press/release model;
/// `on_key_event` receives the shared event record and the ambient
/// modifier accessor.
pub trait Behavior {
    /// Activation command press
    fn on_toggle(&mut self);
    /// Activation command release
    fn on_toggle_release(&mut self);
    /// One key notification
    fn on_key_event(&mut self, ev: &mut KeyEvent, explicit: &dyn ExplicitModSource) -> EventFlow;
}

/// Handle to a registered behavior instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(usize);

/// Owns the registered instances and the ambient modifier tracker, and
/// threads each incoming event through them.
///
/// Instances see events in registration order; the shared `KeyEvent`
/// record carries modifier bits added by one instance to the next and to
/// whatever consumes the event afterwards. Dispatch is synchronous and
/// run-to-completion.
#[derive(Default)]
pub struct Dispatcher {
    instances: Vec<Box<dyn Behavior>>,
    tracker: ModifierTracker,
}

impl Dispatcher {
    /// Create a dispatcher with no instances
    pub fn new() -> Self {
        Self {
            instances: Vec::new(),
            tracker: ModifierTracker::new(),
        }
    }

    /// Register an instance; the returned handle routes toggle commands
    /// to it
    pub fn register(&mut self, instance: Box<dyn Behavior>) -> InstanceId {
        self.instances.push(instance);
        let id = InstanceId(self.instances.len() - 1);
        log::debug!("registered behavior instance {}", id.0);
        id
    }

    /// Number of registered instances
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Check if no instances are registered
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Route the activation command's press to one instance. Unknown
    /// handles are ignored.
    pub fn toggle(&mut self, id: InstanceId) {
        if let Some(instance) = self.instances.get_mut(id.0) {
            instance.on_toggle();
        }
    }

    /// Route the activation command's release to one instance
    pub fn toggle_release(&mut self, id: InstanceId) {
        if let Some(instance) = self.instances.get_mut(id.0) {
            instance.on_toggle_release();
        }
    }

    /// Deliver one key notification.
    ///
    /// The tracker sees the event first so the ambient mask is current,
    /// then every instance in order. Returns `Capture` as soon as an
    /// instance claims the event; otherwise the event bubbles to the
    /// caller's output pipeline.
    pub fn dispatch(&mut self, ev: &mut KeyEvent) -> EventFlow {
        self.tracker.observe(ev);
        for instance in self.instances.iter_mut() {
            if let EventFlow::Capture = instance.on_key_event(ev, &self.tracker) {
                return EventFlow::Capture;
            }
        }
        EventFlow::Bubble
    }

    /// The currently-held explicit modifier bitmask, for callers outside
    /// a dispatch pass
    pub fn explicit_mods(&self) -> Mods {
        self.tracker.explicit_mods()
    }
}
