//! Event bus using mpsc channels.
//!
//! - Window procedures publish events via `EventPublisher::publish()`
//! - The host drains them in order via `EventBus::drain()`

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::AppEvent;

/// Ordered queue of user actions.
///
/// Uses a multi-producer, single-consumer (mpsc) channel internally, so
/// events are handled in the order they were published.
///
/// # Example
///
/// ```
/// use enlaut::events::{AppEvent, EventBus};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(AppEvent::PlaySelected);
///
/// let events = bus.drain();
/// assert_eq!(events.len(), 1);
/// ```
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle. Publishers are cheap to clone.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            // The bus owns a sender, so Disconnected cannot occur while it lives
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events into a Vec.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable event publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Queue an event for the next drain.
    ///
    /// If the bus has been dropped (window shutting down) the event is
    /// discarded.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_create_bus() {
        let bus = EventBus::new();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_and_receive_single_event() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::PlaySelected);

        let events = bus.drain();
        assert_eq!(events, vec![AppEvent::PlaySelected]);
    }

    #[test]
    fn test_drain_empties_queue() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::Minimize);
        publisher.publish(AppEvent::ShowSettings);

        assert_eq!(bus.drain().len(), 2);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_events_keep_publish_order_and_payloads() {
        let bus = EventBus::new();
        let pub1 = bus.publisher();
        let pub2 = pub1.clone();

        let events = vec![
            AppEvent::GameChosen {
                path: PathBuf::from("/g/a.exe"),
            },
            AppEvent::GameSelected {
                path: PathBuf::from("/g/a.exe"),
            },
            AppEvent::PlaySelected,
        ];
        pub1.publish(events[0].clone());
        pub2.publish(events[1].clone());
        pub1.publish(events[2].clone());

        assert_eq!(bus.drain(), events);
    }

    #[test]
    fn test_try_recv_returns_none_when_empty() {
        let bus = EventBus::default();
        assert!(bus.try_recv().is_none());
    }
}
