//! Runtime wrappers around static game content oracles.
//!
//! These implementations expose `game-core` oracle traits and bundle them into
//! an [`OracleManager`] so the runtime can build [`game_core::Env`] snapshots
//! on demand. The data is immutable at runtime; dynamic state lives in the
//! [`RunContext`](crate::RunContext).
mod unlocks;
mod weapons;

use game_core::{Env, GameEnv, PcgRng, WeaponTable};
use std::sync::Arc;

pub use unlocks::UnlockOracleImpl;
pub use weapons::WeaponOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) weapons: Arc<WeaponOracleImpl>,
    pub(crate) unlocks: Arc<UnlockOracleImpl>,
    pub(crate) rng: PcgRng,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(weapons: Arc<WeaponOracleImpl>, unlocks: Arc<UnlockOracleImpl>) -> Self {
        Self {
            weapons,
            unlocks,
            rng: PcgRng, // PcgRng is stateless
        }
    }

    /// Oracle manager over a weapon table with every weapon unlocked.
    pub fn from_table(table: WeaponTable) -> Self {
        Self::new(
            Arc::new(WeaponOracleImpl::new(table)),
            Arc::new(UnlockOracleImpl::All),
        )
    }

    /// Replaces the unlock flags, e.g. after reading save data.
    pub fn with_unlocks(mut self, unlocks: UnlockOracleImpl) -> Self {
        self.unlocks = Arc::new(unlocks);
        self
    }

    /// Converts oracle manager into GameEnv for game-core
    pub fn as_game_env(&self) -> GameEnv<'_> {
        Env::with_all(self.weapons.as_ref(), self.unlocks.as_ref(), &self.rng).into_game_env()
    }

    pub fn weapons(&self) -> &WeaponOracleImpl {
        &self.weapons
    }

    pub fn unlocks(&self) -> &UnlockOracleImpl {
        &self.unlocks
    }
}
