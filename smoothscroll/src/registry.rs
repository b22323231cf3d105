use alloc::collections::BTreeMap;
use alloc::rc::{Rc, Weak};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use crate::SubscribeError;

pub type Listener<P> = Rc<dyn Fn(&P)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Name-keyed listener lists, in registration order.
pub struct EventRegistry<P> {
    events: BTreeMap<String, Vec<(ListenerId, Listener<P>)>>,
    next_id: u64,
}

impl<P> Default for EventRegistry<P> {
    fn default() -> Self {
        Self {
            events: BTreeMap::new(),
            next_id: 0,
        }
    }
}

impl<P> fmt::Debug for EventRegistry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, listeners) in &self.events {
            map.entry(name, &listeners.len());
        }
        map.finish()
    }
}

impl<P> EventRegistry<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(
        &mut self,
        event: &str,
        callback: impl Fn(&P) + 'static,
    ) -> Result<ListenerId, SubscribeError> {
        if event.is_empty() {
            return Err(SubscribeError::EmptyEventName);
        }
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.events
            .entry(event.to_string())
            .or_default()
            .push((id, Rc::new(callback)));
        Ok(id)
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn off(&mut self, event: &str, id: ListenerId) -> bool {
        let Some(listeners) = self.events.get_mut(event) else {
            return false;
        };
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        let removed = listeners.len() != before;
        if listeners.is_empty() {
            self.events.remove(event);
        }
        removed
    }

    pub fn contains(&self, event: &str, id: ListenerId) -> bool {
        self.events
            .get(event)
            .is_some_and(|l| l.iter().any(|(lid, _)| *lid == id))
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.events.get(event).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clones the current listener list for `event`.
    pub fn snapshot(&self, event: &str) -> Vec<Listener<P>> {
        self.events
            .get(event)
            .map(|l| l.iter().map(|(_, cb)| Rc::clone(cb)).collect())
            .unwrap_or_default()
    }

    /// Drops every listener.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

/// Invokes the listeners registered for `event` at the time of the call.
///
/// The registry is not borrowed while listeners run, so they may subscribe or unsubscribe.
/// Returns the number of listeners invoked.
pub fn emit<P>(registry: &RefCell<EventRegistry<P>>, event: &str, payload: &P) -> usize {
    let listeners = registry.borrow().snapshot(event);
    for listener in &listeners {
        listener(payload);
    }
    listeners.len()
}

/// Handle returned by a subscription.
///
/// Dropping the handle keeps the listener registered; call [`Subscription::unsubscribe`].
pub struct Subscription<P> {
    registry: Weak<RefCell<EventRegistry<P>>>,
    event: String,
    id: Option<ListenerId>,
}

impl<P> fmt::Debug for Subscription<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("event", &self.event)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl<P> Subscription<P> {
    pub fn new(registry: &Rc<RefCell<EventRegistry<P>>>, event: &str, id: ListenerId) -> Self {
        Self {
            registry: Rc::downgrade(registry),
            event: event.to_string(),
            id: Some(id),
        }
    }

    /// A handle that is not attached to anything.
    pub fn inert() -> Self {
        Self {
            registry: Weak::new(),
            event: String::new(),
            id: None,
        }
    }

    pub fn is_active(&self) -> bool {
        let (Some(registry), Some(id)) = (self.registry.upgrade(), self.id) else {
            return false;
        };
        registry
            .try_borrow()
            .is_ok_and(|r| r.contains(&self.event, id))
    }

    /// Removes the listener. Returns `false` for inert handles and torn-down registries.
    pub fn unsubscribe(self) -> bool {
        let (Some(registry), Some(id)) = (self.registry.upgrade(), self.id) else {
            return false;
        };
        let Ok(mut registry) = registry.try_borrow_mut() else {
            return false;
        };
        registry.off(&self.event, id)
    }
}
