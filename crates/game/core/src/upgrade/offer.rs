//! Eligibility and the weighted draw behind level-up offers.

use super::definition::UpgradeDefinition;
use super::state::TrackState;
use crate::env::{RngOracle, UnlockOracle, compute_seed};
use crate::weapon::{Arsenal, WeaponTag};

/// Read-only view of the run used to filter offers.
pub struct OfferContext<'a> {
    active: Vec<WeaponTag>,
    unlocks: &'a dyn UnlockOracle,
}

impl<'a> OfferContext<'a> {
    pub fn new(arsenal: &Arsenal, unlocks: &'a dyn UnlockOracle) -> Self {
        Self {
            active: arsenal.active_tags().collect(),
            unlocks,
        }
    }

    pub fn is_active(&self, tag: WeaponTag) -> bool {
        self.active.contains(&tag)
    }

    fn is_available(&self, tag: WeaponTag) -> bool {
        self.is_active(tag) || self.unlocks.is_weapon_unlocked(tag)
    }

    /// Whether `definition` in `state` can appear in an offer.
    ///
    /// - locked weapon tracks need their weapon unlocked in the save data
    /// - upgraded weapon tracks need a live compatible instance, so a bonus
    ///   pick always lands on something
    /// - restricted passives need one listed weapon active or unlockable
    pub fn is_compatible(&self, definition: &UpgradeDefinition, state: TrackState) -> bool {
        match definition.unlocks() {
            Some(weapon) if state.is_locked() => self.is_available(weapon),
            Some(_) => definition
                .weapon_tags()
                .iter()
                .any(|tag| self.is_active(*tag)),
            None => {
                let restricted = definition.weapon_tags();
                restricted.is_empty() || restricted.iter().any(|tag| self.is_available(*tag))
            }
        }
    }
}

/// Seed material for one offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OfferSeed {
    pub run_seed: u64,
    /// Offer sequence number within the run.
    pub nonce: u64,
}

impl OfferSeed {
    pub const fn new(run_seed: u64, nonce: u64) -> Self {
        Self { run_seed, nonce }
    }

    fn draw(self, index: u32) -> u64 {
        compute_seed(self.run_seed, self.nonce, index)
    }
}

/// Draws up to `count` distinct entries from `(item, copies)` pairs.
///
/// Each entry stands for `copies` slots of one pool. A draw picks a uniform
/// slot among those remaining, then removes every slot of the chosen entry,
/// so weight shapes draw order but never yields a duplicate. Results keep
/// draw order.
pub fn draw_weighted<T: Copy, R: RngOracle + ?Sized>(
    mut pool: Vec<(T, u32)>,
    count: usize,
    rng: &R,
    seed: OfferSeed,
) -> Vec<T> {
    let draws = count.min(pool.len());
    let mut picked = Vec::with_capacity(draws);

    for draw in 0..draws {
        let total: u64 = pool.iter().map(|(_, copies)| *copies as u64).sum();
        if total == 0 {
            break;
        }
        let mut slot = rng.below(seed.draw(draw as u32), total);

        let position = pool
            .iter()
            .position(|(_, copies)| {
                if slot < *copies as u64 {
                    true
                } else {
                    slot -= *copies as u64;
                    false
                }
            })
            .unwrap_or(pool.len() - 1);

        picked.push(pool.remove(position).0);
    }

    picked
}
