//! Traits describing read-only run collaborators.
//!
//! Oracles expose static weapon content, persisted unlock flags and the
//! deterministic RNG. The [`Env`] aggregate bundles them so catalog and run
//! logic can reach everything it needs without hard coupling to concrete
//! implementations.
mod error;
mod rng;
mod unlocks;
mod weapons;

pub use error::OracleError;
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use unlocks::{AllUnlocked, UnlockOracle, UnlockSet};
pub use weapons::{WeaponOracle, WeaponTable};

use crate::weapon::{BaseWeaponData, WeaponTag};

/// Aggregates read-only oracles required by a run.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, W, U, R>
where
    W: WeaponOracle + ?Sized,
    U: UnlockOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    weapons: Option<&'a W>,
    unlocks: Option<&'a U>,
    rng: Option<&'a R>,
}

pub type GameEnv<'a> = Env<'a, dyn WeaponOracle + 'a, dyn UnlockOracle + 'a, dyn RngOracle + 'a>;

impl<'a, W, U, R> Env<'a, W, U, R>
where
    W: WeaponOracle + ?Sized,
    U: UnlockOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(weapons: Option<&'a W>, unlocks: Option<&'a U>, rng: Option<&'a R>) -> Self {
        Self {
            weapons,
            unlocks,
            rng,
        }
    }

    pub fn with_all(weapons: &'a W, unlocks: &'a U, rng: &'a R) -> Self {
        Self::new(Some(weapons), Some(unlocks), Some(rng))
    }

    pub fn empty() -> Self {
        Self {
            weapons: None,
            unlocks: None,
            rng: None,
        }
    }

    /// Returns the WeaponOracle, or an error if not available.
    pub fn weapons(&self) -> Result<&'a W, OracleError> {
        self.weapons.ok_or(OracleError::WeaponsNotAvailable)
    }

    /// Returns the UnlockOracle, or an error if not available.
    pub fn unlocks(&self) -> Result<&'a U, OracleError> {
        self.unlocks.ok_or(OracleError::UnlocksNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Base data for `tag`.
    ///
    /// # Errors
    ///
    /// `WeaponsNotAvailable` without a weapon oracle, `WeaponNotFound` for an
    /// unknown tag.
    pub fn base_data(&self, tag: WeaponTag) -> Result<BaseWeaponData, OracleError> {
        self.weapons()?
            .base_data(tag)
            .ok_or(OracleError::WeaponNotFound(tag))
    }

    /// Whether the save data lets `tag` appear in a run.
    pub fn is_weapon_unlocked(&self, tag: WeaponTag) -> Result<bool, OracleError> {
        Ok(self.unlocks()?.is_weapon_unlocked(tag))
    }
}

impl<'a, W, U, R> Env<'a, W, U, R>
where
    W: WeaponOracle + 'a,
    U: UnlockOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv`.
    pub fn into_game_env(self) -> GameEnv<'a> {
        let weapons: Option<&'a dyn WeaponOracle> = self.weapons.map(|weapons| weapons as _);
        let unlocks: Option<&'a dyn UnlockOracle> = self.unlocks.map(|unlocks| unlocks as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(weapons, unlocks, rng)
    }
}
