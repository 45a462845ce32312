//! Headless run simulator.
//!
//! Loads content, starts a run for one character, feeds it experience and
//! takes the first upgrade of every offer, then prints the end-of-run
//! summary. Useful for eyeballing content balance and reproducing a run from
//! its seed.
//!
//! ```bash
//! survivor-sim --character Poe --seed 42 --experience 2000
//! ```

mod sim;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use runtime::RuntimeConfig;
use tracing_subscriber::EnvFilter;

/// Simulate one run of the upgrade system
#[derive(Parser, Debug)]
#[command(name = "survivor-sim")]
#[command(about = "Headless upgrade-system run simulator", long_about = None)]
#[command(version)]
struct Cli {
    /// Content directory (overrides SURVIVOR_DATA_DIR)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Character to play
    #[arg(short, long, default_value = "Imelda")]
    character: String,

    /// Fixed run seed (overrides SURVIVOR_SEED)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Total experience to feed into the run
    #[arg(short, long, default_value_t = 1000)]
    experience: u32,

    /// Log every offer and recompute
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn runtime_config(&self) -> RuntimeConfig {
        let mut config = RuntimeConfig::from_env();
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let config = cli.runtime_config();
    let summary = sim::simulate(config, &cli.character, cli.experience).await?;
    sim::print_summary(&summary);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_environment() {
        let cli = Cli::try_parse_from([
            "survivor-sim",
            "--data-dir",
            "/tmp/content",
            "--seed",
            "9",
            "-c",
            "Poe",
        ])
        .unwrap();
        let config = cli.runtime_config();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/content"));
        assert_eq!(config.seed, Some(9));
        assert_eq!(cli.character, "Poe");
        assert_eq!(cli.experience, 1000);
        assert!(!cli.verbose);
    }
}
