//! Observer registry.
//!
//! The presentation layer subscribes once and re-renders on each event.
//! Observers are called in subscription order.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::event::GameEvent;

/// Receives board changes.
pub trait StateObserver {
    /// Called after each completed change.
    fn on_event(&mut self, event: &GameEvent);
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverId(pub u32);

impl ObserverId {
    /// Create an observer ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Observer({})", self.0)
    }
}

/// Registered observers.
#[derive(Default)]
pub struct Observers {
    entries: Vec<(ObserverId, Box<dyn StateObserver>)>,
    next_id: u32,
}

impl Observers {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    pub fn subscribe(&mut self, observer: Box<dyn StateObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    /// Remove an observer. Returns false if the id is unknown.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliver an event to every observer.
    pub fn notify(&mut self, event: &GameEvent) {
        log::trace!("notify {} observers: {}", self.entries.len(), event.name());
        for (_, observer) in &mut self.entries {
            observer.on_event(event);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

/// Records every event it receives.
///
/// Share it with the controller through `Rc<RefCell<_>>` and inspect it
/// afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared log ready to subscribe.
    #[must_use]
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take and clear the recorded events.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl StateObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

impl<O: StateObserver> StateObserver for Rc<RefCell<O>> {
    fn on_event(&mut self, event: &GameEvent) {
        self.borrow_mut().on_event(event);
    }
}

/// Observer backed by a closure.
pub struct FnObserver<F>(pub F);

impl<F> StateObserver for FnObserver<F>
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        (self.0)(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardId;

    #[test]
    fn test_subscribe_and_notify() {
        let log = EventLog::shared();
        let mut observers = Observers::new();
        observers.subscribe(Box::new(Rc::clone(&log)));

        let event = GameEvent::CardRevealed { card: CardId(1) };
        observers.notify(&event);

        assert_eq!(log.borrow().events(), &[event]);
    }

    #[test]
    fn test_unsubscribe() {
        let log = EventLog::shared();
        let mut observers = Observers::new();
        let id = observers.subscribe(Box::new(Rc::clone(&log)));

        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        assert!(observers.is_empty());

        observers.notify(&GameEvent::CardHidden { card: CardId(2) });
        assert!(log.borrow().events().is_empty());
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut observers = Observers::new();
        let a = observers.subscribe(Box::new(EventLog::new()));
        observers.unsubscribe(a);
        let b = observers.subscribe(Box::new(EventLog::new()));

        assert_ne!(a, b);
        assert_eq!(observers.len(), 1);
    }

    #[test]
    fn test_fn_observer() {
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let mut observers = Observers::new();
        observers.subscribe(Box::new(FnObserver(move |_: &GameEvent| {
            *counter.borrow_mut() += 1;
        })));

        observers.notify(&GameEvent::CardRevealed { card: CardId(1) });
        observers.notify(&GameEvent::CardHidden { card: CardId(1) });

        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_drain() {
        let mut log = EventLog::new();
        log.on_event(&GameEvent::CardRevealed { card: CardId(1) });

        assert_eq!(log.drain().len(), 1);
        assert!(log.events().is_empty());
    }
}
