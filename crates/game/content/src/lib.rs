//! Data-driven content definitions and loaders.
//!
//! This crate turns RON/TOML data files into `game-core` types:
//! - Weapon base stats (RON), interned to `WeaponTag`s
//! - The upgrade catalog (RON), with weapon names resolved at load
//! - Playable characters (RON)
//! - Game configuration (TOML)
//!
//! Content is immutable once loaded and shared by every run.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CharacterLoader, ConfigLoader, Content, ContentFactory, UpgradeLoader, WeaponLoader,
    WeaponRegistry,
};
