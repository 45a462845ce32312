//! Content loaders for reading game data from files.
//!
//! Raw file formats live next to each loader; loaders validate them and
//! resolve weapon names before handing out `game-core` types.

pub mod characters;
pub mod config;
pub mod factory;
pub mod upgrades;
pub mod weapons;

pub use characters::CharacterLoader;
pub use config::ConfigLoader;
pub use factory::{Content, ContentFactory};
pub use upgrades::UpgradeLoader;
pub use weapons::{WeaponLoader, WeaponRegistry};

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}

/// Rejects NaN and infinities in numeric content.
pub(crate) fn ensure_finite(value: f32, what: &str, owner: &str) -> LoadResult<()> {
    anyhow::ensure!(value.is_finite(), "{what} of '{owner}' must be finite, got {value}");
    Ok(())
}
