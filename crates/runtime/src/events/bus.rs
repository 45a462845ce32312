//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::{RunEvent, StatsEvent, UpgradeEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Offers and picks
    Upgrade,
    /// Player and weapon stat changes
    Stats,
    /// Run lifecycle
    Run,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Upgrade(UpgradeEvent),
    Stats(StatsEvent),
    Run(RunEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Upgrade(_) => Topic::Upgrade,
            Event::Stats(_) => Topic::Stats,
            Event::Run(_) => Topic::Run,
        }
    }
}

impl From<UpgradeEvent> for Event {
    fn from(event: UpgradeEvent) -> Self {
        Event::Upgrade(event)
    }
}

impl From<StatsEvent> for Event {
    fn from(event: StatsEvent) -> Self {
        Event::Stats(event)
    }
}

impl From<RunEvent> for Event {
    fn from(event: RunEvent) -> Self {
        Event::Run(event)
    }
}

struct Channels {
    upgrade: broadcast::Sender<Event>,
    stats: broadcast::Sender<Event>,
    run: broadcast::Sender<Event>,
}

/// Topic-based event bus
///
/// Observers (UI, summary screen) subscribe to the topics they care about and
/// get read-only copies of events. Publishing never blocks and never fails;
/// events with no subscribers are dropped.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                upgrade: broadcast::channel(capacity).0,
                stats: broadcast::channel(capacity).0,
                run: broadcast::channel(capacity).0,
            }),
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Upgrade => &self.channels.upgrade,
            Topic::Stats => &self.channels.stats,
            Topic::Run => &self.channels.run,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: impl Into<Event>) {
        let event = event.into();
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::UpgradeId;

    #[tokio::test]
    async fn routes_by_topic() {
        let bus = EventBus::with_capacity(8);
        let mut upgrades = bus.subscribe(Topic::Upgrade);
        let mut runs = bus.subscribe(Topic::Run);

        bus.publish(UpgradeEvent::Picked {
            upgrade: UpgradeId(2),
            level: 1,
        });

        let event = upgrades.recv().await.unwrap();
        assert_eq!(event.topic(), Topic::Upgrade);
        assert!(runs.try_recv().is_err());
    }

    #[test]
    fn publish_without_subscribers_is_fine() {
        let bus = EventBus::new();
        bus.publish(RunEvent::LevelUp {
            level: 2,
            pending_picks: 1,
        });
    }
}
