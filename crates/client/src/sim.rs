//! Drives a [`RunContext`] through a scripted run.

use anyhow::{Context, Result};
use runtime::{Event, RunContext, RunOutcome, RunSummary, RuntimeConfig, Topic, load_content};
use tokio::sync::broadcast::error::RecvError;

/// Experience granted per simulated pickup.
const PICKUP_EXPERIENCE: u32 = 7;

/// Plays one run: every level-up takes the first offered upgrade.
pub async fn simulate(
    config: RuntimeConfig,
    character: &str,
    experience: u32,
) -> Result<RunSummary> {
    let content = load_content(&config)
        .with_context(|| format!("Failed to load content from {}", config.data_dir.display()))?;
    let mut run = RunContext::from_content(&content, config)?;
    let watcher = tokio::spawn(log_upgrades(run.subscribe(Topic::Upgrade)));

    run.start_run_as(&content, character)?;

    let mut remaining = experience;
    while remaining > 0 {
        let amount = remaining.min(PICKUP_EXPERIENCE);
        remaining -= amount;
        run.gain_experience(amount)?;

        while let Some(offer) = run.next_offer()? {
            let Some(&choice) = offer.first() else {
                continue;
            };
            tracing::debug!(
                upgrade = run.upgrade_name(choice).unwrap_or_default(),
                description = run.description(choice).unwrap_or_default(),
                "taking first offer"
            );
            run.apply_pick(choice)?;
        }
    }

    let summary = run.end_run(RunOutcome::Victory)?;
    drop(run);
    watcher.await?;
    Ok(summary)
}

async fn log_upgrades(mut events: tokio::sync::broadcast::Receiver<Event>) {
    loop {
        match events.recv().await {
            Ok(Event::Upgrade(event)) => tracing::debug!(?event, "upgrade event"),
            Ok(_) => {}
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "upgrade log fell behind");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

pub fn print_summary(summary: &RunSummary) {
    println!(
        "{} ({}) reached level {} [seed {}]",
        summary.character, summary.outcome, summary.level, summary.seed
    );

    println!("\nUpgrades:");
    for pick in &summary.picks {
        println!("  {:<16} lv {}", pick.name, pick.level);
    }

    let stats = &summary.stats;
    println!("\nStats:");
    println!("  health      {:>8.1}", stats.health());
    println!("  damage      {:>8.3}x", stats.damage_mult());
    println!("  move speed  {:>8.2}", stats.move_speed());
    println!("  area        {:>8.3}x", stats.area());
    println!("  cooldown    {:>8.1}%", stats.cooldown_reduction() * 100.0);
    println!("  armor       {:>8}", stats.armor());
    println!("  revivals    {:>8}", stats.revival_count());

    println!("\nWeapons:");
    for weapon in &summary.weapons {
        println!(
            "  {:<12} dmg {:>6.2}  cd {:>5.2}s  area {:>5.2}  amount {}",
            weapon.name,
            weapon.stats.damage,
            weapon.stats.cooldown,
            weapon.stats.area,
            weapon.stats.amount
        );
    }
}
