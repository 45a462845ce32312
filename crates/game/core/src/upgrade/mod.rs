//! Upgrade tracks, their per-run progress, offers and picks.
//!
//! [`UpgradeCatalog`] is loaded once and shared; [`UpgradeCatalogState`] is
//! rebuilt for every run and is the only place track levels change.
mod catalog;
mod definition;
mod error;
mod offer;
mod outcome;
mod state;

pub use catalog::{UpgradeCatalog, UpgradeCatalogState};
pub use definition::{
    MAX_LEVEL_TEXT, PassiveEffect, UpgradeDefinition, UpgradeId, UpgradeKind, WeaponLevel,
};
pub use error::PickError;
pub use offer::{OfferContext, OfferSeed, draw_weighted};
pub use outcome::{PickOutcome, PickRecord};
pub use state::TrackState;
