//! Weapon hosting: the object pool and firing loops behind live weapons.
//!
//! The run context never owns weapon behaviour. It asks a [`WeaponHost`] for
//! instances and drives every restart as an explicit
//! `stop_firing → recompute → start_firing` sequence.
mod pooled;

pub use pooled::{PooledWeapon, PooledWeaponHost};

use game_core::{WeaponHandle, WeaponStats, WeaponTag};

/// Object pool and firing-loop collaborator for live weapons.
pub trait WeaponHost {
    /// Takes an instance of `tag` from the pool (or creates one).
    fn spawn(&mut self, tag: WeaponTag) -> WeaponHandle;

    /// Returns an instance to the pool. Unknown handles are ignored.
    fn deactivate(&mut self, handle: WeaponHandle);

    /// Halts the firing loop of a live instance.
    fn stop_firing(&mut self, handle: WeaponHandle);

    /// (Re)starts the firing loop with freshly resolved stats.
    fn start_firing(&mut self, handle: WeaponHandle, stats: &WeaponStats);
}
