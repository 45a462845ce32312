//! Deterministic upgrade and stat rules for a survivor-style roguelite.
//!
//! `game-core` owns the numbers: the player's [`StatBlock`], per-weapon
//! upgraded bases and resolved [`WeaponStats`], upgrade tracks and the
//! [`UpgradeCatalogState`] that offers and applies them. Everything here is
//! pure and synchronous; I/O, logging and weapon hosting live in the runtime.
pub mod character;
pub mod config;
pub mod env;
pub mod error;
pub mod progression;
pub mod stats;
pub mod upgrade;
pub mod weapon;

pub use character::{CharacterProfile, StartingStats};
pub use config::{ConfigError, GameConfig};
pub use env::{
    AllUnlocked, Env, GameEnv, OracleError, PcgRng, RngOracle, UnlockOracle, UnlockSet,
    WeaponOracle, WeaponTable, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use progression::{ExperienceCurve, Progression};
pub use stats::{StatBlock, StatChange, StatEffect, StatKind, StatLayer, StatLevels};
pub use upgrade::{
    OfferContext, OfferSeed, PassiveEffect, PickError, PickOutcome, PickRecord, TrackState,
    UpgradeCatalog, UpgradeCatalogState, UpgradeDefinition, UpgradeId, UpgradeKind, WeaponLevel,
};
pub use weapon::{
    Arsenal, BaseWeaponData, FiringState, WeaponBase, WeaponEffect, WeaponHandle, WeaponInstance,
    WeaponStatKind, WeaponStatResolver, WeaponStats, WeaponTag,
};
