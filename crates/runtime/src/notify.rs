//! Push-based "stats changed" fan-out to live weapons.
//!
//! Weapons subscribe when they activate and unsubscribe when they are
//! deactivated. [`StatsChannel::notify`] only queues; the run context drains
//! the queue before a pick returns, so every subscriber has recomputed by the
//! time the next offer is drawn.

use std::collections::VecDeque;

use game_core::{StatChange, WeaponHandle};

#[derive(Debug, Default)]
pub struct StatsChannel {
    subscribers: Vec<WeaponHandle>,
    queue: VecDeque<StatChange>,
}

impl StatsChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a weapon. Returns `false` if it was already subscribed.
    pub fn subscribe(&mut self, handle: WeaponHandle) -> bool {
        if self.subscribers.contains(&handle) {
            return false;
        }
        self.subscribers.push(handle);
        true
    }

    pub fn unsubscribe(&mut self, handle: WeaponHandle) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|subscriber| *subscriber != handle);
        self.subscribers.len() != before
    }

    /// Subscribers in registration order.
    pub fn subscribers(&self) -> &[WeaponHandle] {
        &self.subscribers
    }

    pub fn notify(&mut self, change: StatChange) {
        self.queue.push_back(change);
    }

    /// Next queued change, oldest first.
    pub fn pop(&mut self) -> Option<StatChange> {
        self.queue.pop_front()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Drops every subscriber and queued change.
    pub fn clear(&mut self) {
        self.subscribers.clear();
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{StatBlock, StatKind};

    #[test]
    fn subscribe_is_idempotent() {
        let mut channel = StatsChannel::new();
        assert!(channel.subscribe(WeaponHandle(1)));
        assert!(!channel.subscribe(WeaponHandle(1)));
        assert!(channel.subscribe(WeaponHandle(2)));
        assert!(channel.unsubscribe(WeaponHandle(1)));
        assert!(!channel.unsubscribe(WeaponHandle(1)));
        assert_eq!(channel.subscribers(), &[WeaponHandle(2)]);
    }

    #[test]
    fn queue_is_fifo() {
        let mut stats = StatBlock::default();
        let mut channel = StatsChannel::new();
        channel.notify(stats.apply_stat_upgrade(StatKind::Area, 10.0, true));
        channel.notify(stats.apply_stat_upgrade(StatKind::Luck, 5.0, false));

        assert_eq!(channel.pending(), 2);
        assert_eq!(channel.pop().map(|change| change.kind), Some(StatKind::Area));
        assert_eq!(channel.pop().map(|change| change.kind), Some(StatKind::Luck));
        assert_eq!(channel.pop(), None);
    }
}
