//! Weapon content, per-instance upgraded bases and resolved runtime stats.
//!
//! ```text
//! BaseWeaponData --unlock--> WeaponBase --apply_effect--> WeaponBase
//!                                 |
//!                  StatBlock ---> WeaponStatResolver ---> WeaponStats
//! ```
mod arsenal;
mod base;
mod data;
mod effect;
mod instance;
mod stats;
mod tag;

pub use arsenal::Arsenal;
pub use base::WeaponBase;
pub use data::BaseWeaponData;
pub use effect::{WeaponEffect, WeaponStatKind};
pub use instance::{FiringState, WeaponInstance};
pub use stats::{WeaponStatResolver, WeaponStats};
pub use tag::{WeaponHandle, WeaponTag, weapon_key};
