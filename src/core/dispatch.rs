//! src/core/dispatch.rs
//!
//! Combo execution broadcast
//!
//! When a combo completes, the engine notifies every subscribed listener
//! with the produced action. This is an explicit observer registry rather
//! than process-wide static events: subscriptions return an id whose
//! lifetime the subscriber controls, so listener lifecycles stay tied to
//! the collaborator that created them.

use crate::core::types::ComboAction;

/// Handle returned by [`ComboDispatcher::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ListenerId(usize);

type Listener = Box<dyn FnMut(&ComboAction)>;

/// Observer registry for "combo executed" notifications.
///
/// Zero, one, or many listeners may be subscribed; `notify` invokes every
/// live listener synchronously, in subscription order. Single-threaded by
/// design, like the engine that owns it.
#[derive(Default)]
pub struct ComboDispatcher {
    // Slot-stable storage: unsubscribing leaves a hole so ids handed out
    // earlier keep pointing at the right listener.
    listeners: Vec<Option<Listener>>,
}

impl ComboDispatcher {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener and returns its handle.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ComboAction) + 'static,
    {
        // Reuse the first free slot before growing
        for (index, slot) in self.listeners.iter_mut().enumerate() {
            if slot.is_none() {
                *slot = Some(Box::new(listener));
                return ListenerId(index);
            }
        }

        self.listeners.push(Some(Box::new(listener)));
        ListenerId(self.listeners.len() - 1)
    }

    /// Removes a listener. Returns `false` when the id was already
    /// unsubscribed or never issued by this registry.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        match self.listeners.get_mut(id.0) {
            Some(slot) if slot.is_some() => {
                *slot = None;
                true
            }
            _ => false,
        }
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.iter().filter(|slot| slot.is_some()).count()
    }

    /// Broadcasts `action` to every live listener, in subscription order.
    pub fn notify(&mut self, action: &ComboAction) {
        for slot in &mut self.listeners {
            if let Some(listener) = slot {
                listener(action);
            }
        }
    }
}

impl std::fmt::Debug for ComboDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComboDispatcher")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
