//! Runtime configuration and its environment overrides.
use std::env;
use std::path::PathBuf;

use game_core::GameConfig;

/// Runtime configuration shared by the run context and its clients.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Rules applied to every run. Replaced by `config.toml` when content loads.
    pub game_config: GameConfig,
    /// Directory holding `weapons.ron`, `upgrades.ron`, `characters.ron`
    /// and `config.toml`.
    pub data_dir: PathBuf,
    /// Fixed run seed for reproducible offers. A fresh seed per run when unset.
    pub seed: Option<u64>,
    /// Overrides `game_config.offer_count` after content is loaded.
    pub offer_count: Option<usize>,
    /// Buffered events per topic.
    pub event_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            data_dir: PathBuf::from("data"),
            seed: None,
            offer_count: None,
            event_capacity: 100,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SURVIVOR_DATA_DIR` - Content directory (default: `data`)
    /// - `SURVIVOR_SEED` - Fixed run seed (default: random per run)
    /// - `SURVIVOR_OFFER_COUNT` - Upgrades per level-up (default: from `config.toml`)
    /// - `SURVIVOR_EVENT_CAPACITY` - Event buffer per topic (default: 100)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("SURVIVOR_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        config.seed = parse(lookup("SURVIVOR_SEED"));

        if let Some(count) = parse::<usize>(lookup("SURVIVOR_OFFER_COUNT")) {
            config.offer_count = Some(count.max(1));
        }

        if let Some(capacity) = parse::<usize>(lookup("SURVIVOR_EVENT_CAPACITY")) {
            config.event_capacity = capacity.max(1);
        }

        config
    }

    /// Game rules with the offer-count override applied.
    pub fn effective_game_config(&self) -> GameConfig {
        let mut game = self.game_config.clone();
        if let Some(count) = self.offer_count {
            game.offer_count = count;
        }
        game
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}
