use std::collections::{BTreeMap, HashMap};

use game_core::{WeaponHandle, WeaponStats, WeaponTag};

use super::WeaponHost;

/// Bookkeeping for one live pooled instance.
#[derive(Debug, Clone, PartialEq)]
pub struct PooledWeapon {
    pub tag: WeaponTag,
    pub firing: bool,
    /// Stats the firing loop was last started with.
    pub stats: Option<WeaponStats>,
    /// How many times the firing loop was started.
    pub starts: u32,
}

/// In-memory weapon host that recycles handles per weapon tag.
#[derive(Debug, Default)]
pub struct PooledWeaponHost {
    next_handle: u32,
    live: BTreeMap<WeaponHandle, PooledWeapon>,
    pool: HashMap<WeaponTag, Vec<WeaponHandle>>,
}

impl PooledWeaponHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, handle: WeaponHandle) -> Option<&PooledWeapon> {
        self.live.get(&handle)
    }

    pub fn is_firing(&self, handle: WeaponHandle) -> bool {
        self.live.get(&handle).is_some_and(|weapon| weapon.firing)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Idle instances of `tag` waiting in the pool.
    pub fn pooled(&self, tag: WeaponTag) -> usize {
        self.pool.get(&tag).map_or(0, Vec::len)
    }
}

impl WeaponHost for PooledWeaponHost {
    fn spawn(&mut self, tag: WeaponTag) -> WeaponHandle {
        let handle = match self.pool.get_mut(&tag).and_then(Vec::pop) {
            Some(handle) => handle,
            None => {
                self.next_handle += 1;
                WeaponHandle(self.next_handle)
            }
        };
        self.live.insert(
            handle,
            PooledWeapon {
                tag,
                firing: false,
                stats: None,
                starts: 0,
            },
        );
        handle
    }

    fn deactivate(&mut self, handle: WeaponHandle) {
        if let Some(weapon) = self.live.remove(&handle) {
            self.pool.entry(weapon.tag).or_default().push(handle);
        }
    }

    fn stop_firing(&mut self, handle: WeaponHandle) {
        if let Some(weapon) = self.live.get_mut(&handle) {
            weapon.firing = false;
        }
    }

    fn start_firing(&mut self, handle: WeaponHandle, stats: &WeaponStats) {
        if let Some(weapon) = self.live.get_mut(&handle) {
            weapon.firing = true;
            weapon.stats = Some(stats.clone());
            weapon.starts += 1;
        }
    }
}
