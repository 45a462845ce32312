//! Run orchestration.
//!
//! [`RunContext`] owns everything one run mutates: the player's stat block,
//! the catalog progress, live weapons, experience and the stats-changed
//! channel. Nothing is global; clients hold the context and pass it by
//! reference. Every operation is synchronous and runs to completion, so queued
//! level-ups resolve strictly one pick at a time.

use std::sync::Arc;

use game_content::{Content, ContentFactory};
use game_core::{
    Arsenal, BaseWeaponData, CharacterProfile, GameConfig, GameError, OfferContext, OfferSeed,
    PickOutcome, PickRecord, Progression, StartingStats, StatBlock, UpgradeCatalog,
    UpgradeCatalogState, UpgradeId, WeaponHandle, WeaponInstance, WeaponOracle, WeaponStats,
    WeaponTag,
};
use tracing::{debug, error, info, warn};

use crate::api::{Result, RuntimeError};
use crate::config::RuntimeConfig;
use crate::events::{Event, EventBus, RunEvent, RunOutcome, StatsEvent, Topic, UpgradeEvent};
use crate::host::{PooledWeaponHost, WeaponHost};
use crate::notify::StatsChannel;
use crate::oracle::OracleManager;

/// Where the context is in the run lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    Active,
    Ended(RunOutcome),
}

/// One entry of the end-of-run pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickSummary {
    pub upgrade: UpgradeId,
    pub name: String,
    pub level: u32,
}

/// A weapon as it was when the run ended.
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponSummary {
    pub handle: WeaponHandle,
    pub name: String,
    pub stats: WeaponStats,
}

/// Snapshot taken by [`RunContext::end_run`] before state is reset.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub character: String,
    pub outcome: RunOutcome,
    pub seed: u64,
    pub level: u32,
    pub picks: Vec<PickSummary>,
    pub stats: StatBlock,
    pub weapons: Vec<WeaponSummary>,
}

/// Loads every content file from `config.data_dir`.
pub fn load_content(config: &RuntimeConfig) -> Result<Content> {
    ContentFactory::new(&config.data_dir)
        .load_all()
        .map_err(RuntimeError::Content)
}

/// State and collaborators of a single run.
pub struct RunContext<H: WeaponHost = PooledWeaponHost> {
    config: RuntimeConfig,
    game: GameConfig,
    oracles: OracleManager,
    catalog: Arc<UpgradeCatalog>,
    upgrades: UpgradeCatalogState,
    stats: StatBlock,
    arsenal: Arsenal,
    progression: Progression,
    channel: StatsChannel,
    events: EventBus,
    host: H,
    character: Option<CharacterProfile>,
    phase: RunPhase,
    run_seed: u64,
    offer_nonce: u64,
}

impl RunContext<PooledWeaponHost> {
    /// Create a new run context builder
    pub fn builder() -> RunContextBuilder<PooledWeaponHost> {
        RunContextBuilder::new()
    }

    /// Builds a context over loaded content. `config.toml` replaces
    /// `config.game_config`; the offer-count override still applies.
    pub fn from_content(content: &Content, mut config: RuntimeConfig) -> Result<Self> {
        config.game_config = content.config.clone();
        Self::builder()
            .config(config)
            .oracles(OracleManager::from_table(content.weapons.table().clone()))
            .catalog(Arc::clone(&content.catalog))
            .build()
    }
}

impl<H: WeaponHost> RunContext<H> {
    // ===== lifecycle =====

    /// Starts a fresh run for `character`, replacing any run in progress.
    ///
    /// The catalog progress is rebuilt, the stat block is seeded from the
    /// character and its starting weapon is spawned at level 1. If the
    /// starting weapon has no base data nothing changes, including any run
    /// already in progress.
    pub fn start_run(&mut self, character: &CharacterProfile) -> Result<()> {
        let starting = match character.starting_weapon {
            Some(tag) => Some((tag, self.weapon_data(tag)?)),
            None => None,
        };

        self.teardown_weapons();
        self.channel.clear();
        self.upgrades = UpgradeCatalogState::new(Arc::clone(&self.catalog));
        self.stats = StatBlock::from_profile(character, &self.game);
        self.progression = Progression::new();
        self.run_seed = self.config.seed.unwrap_or_else(rand::random);
        self.offer_nonce = 0;
        self.character = Some(character.clone());
        self.phase = RunPhase::Active;

        if let Some((tag, data)) = starting {
            self.upgrades.mark_unlocked(tag);
            self.spawn_weapon(tag, &data);
        }

        info!(
            character = %character.name,
            seed = self.run_seed,
            "run started"
        );
        self.events.publish(RunEvent::Started {
            character: character.name.clone(),
            seed: self.run_seed,
        });
        Ok(())
    }

    /// Starts a run for the bundled character called `name`, ignoring case.
    pub fn start_run_as(&mut self, content: &Content, name: &str) -> Result<()> {
        let character = content
            .character(name)
            .ok_or_else(|| RuntimeError::UnknownCharacter(name.to_string()))?;
        self.start_run(character)
    }

    /// Ends the run and returns its summary.
    ///
    /// Track levels reset but the pick history stays readable through
    /// [`picked_upgrades`](Self::picked_upgrades) until [`full_reset`](Self::full_reset).
    pub fn end_run(&mut self, outcome: RunOutcome) -> Result<RunSummary> {
        self.ensure_active()?;
        let summary = self.summary(outcome);

        self.upgrades.reset_all_upgrades();
        self.teardown_weapons();
        self.stats = StatBlock::from_starting(&StartingStats::default(), &self.game);
        self.phase = RunPhase::Ended(outcome);

        info!(%outcome, level = summary.level, picks = summary.picks.len(), "run ended");
        self.events.publish(RunEvent::Ended {
            outcome,
            level: summary.level,
        });
        Ok(summary)
    }

    /// Forgets the finished run entirely, including its pick history.
    pub fn full_reset(&mut self) {
        self.teardown_weapons();
        self.channel.clear();
        self.upgrades.full_reset();
        self.stats = StatBlock::from_starting(&StartingStats::default(), &self.game);
        self.progression = Progression::new();
        self.character = None;
        self.phase = RunPhase::Idle;
        debug!("run state cleared");
    }

    // ===== level-ups =====

    /// Adds experience; every level gained queues one pick.
    pub fn gain_experience(&mut self, amount: u32) -> Result<u32> {
        self.ensure_active()?;
        let gained = self.progression.gain(amount);
        if gained > 0 {
            info!(
                level = self.progression.level,
                pending = self.progression.pending_picks,
                "level up"
            );
            self.events.publish(RunEvent::LevelUp {
                level: self.progression.level,
                pending_picks: self.progression.pending_picks,
            });
        }
        Ok(gained)
    }

    /// Takes the next queued pick and draws its offer.
    ///
    /// `None` when no pick is pending. An empty offer means nothing was
    /// eligible: the pick is consumed and play resumes.
    pub fn next_offer(&mut self) -> Result<Option<Vec<UpgradeId>>> {
        self.ensure_active()?;
        if !self.progression.take_pick() {
            return Ok(None);
        }
        let offer = self.offer_upgrades(self.game.offer_count)?;
        if offer.is_empty() {
            info!("no eligible upgrades, resuming");
        }
        Ok(Some(offer))
    }

    /// Draws up to `count` distinct eligible upgrades.
    ///
    /// Track state is untouched; only the offer nonce advances so the next
    /// offer draws differently.
    pub fn offer_upgrades(&mut self, count: usize) -> Result<Vec<UpgradeId>> {
        self.ensure_active()?;
        let nonce = self.offer_nonce;
        self.offer_nonce += 1;

        let ctx = OfferContext::new(&self.arsenal, self.oracles.unlocks());
        let offer = self.upgrades.offer_upgrades(
            count,
            &ctx,
            &self.oracles.rng,
            OfferSeed::new(self.run_seed, nonce),
        );

        debug!(nonce, ?offer, "offer drawn");
        if offer.is_empty() {
            self.events.publish(UpgradeEvent::Skipped { nonce });
        } else {
            self.events.publish(UpgradeEvent::Offered {
                nonce,
                upgrades: offer.clone(),
            });
        }
        Ok(offer)
    }

    /// Applies a player's choice and brings every affected weapon up to date
    /// before returning.
    ///
    /// Unknown or maxed upgrades are logged and ignored (`Ok(None)`); a stale
    /// button must never break a run. Any other failure is returned before
    /// state is touched.
    pub fn apply_pick(&mut self, id: UpgradeId) -> Result<Option<PickOutcome>> {
        self.ensure_active()?;
        let spawn = match self.pending_unlock(id) {
            Some(tag) => match self.weapon_data(tag) {
                Ok(data) => Some(data),
                Err(err) => return Self::reject_pick(id, err),
            },
            None => None,
        };

        let outcome =
            match self
                .upgrades
                .apply_pick(id, &mut self.stats, &mut self.arsenal, &self.game)
            {
                Ok(outcome) => outcome,
                Err(err) => return Self::reject_pick(id, err.into()),
            };

        match &outcome {
            PickOutcome::Unlocked {
                weapon,
                spawn_required,
            } => {
                if *spawn_required
                    && let Some(data) = &spawn
                {
                    self.spawn_weapon(*weapon, data);
                }
            }
            PickOutcome::WeaponUpgraded { affected, level } => {
                if affected.is_empty() {
                    warn!(upgrade = %id, level, "weapon upgrade had no live instance");
                }
                for handle in affected {
                    self.recompute_weapon(*handle);
                }
            }
            PickOutcome::PassiveApplied { change, .. } => self.channel.notify(*change),
        }
        self.flush_stats();

        let level = outcome.level();
        info!(upgrade = %id, level, "upgrade picked");
        self.events.publish(UpgradeEvent::Picked { upgrade: id, level });
        Ok(Some(outcome))
    }

    // ===== queries =====

    pub fn current_level(&self, id: UpgradeId) -> u32 {
        self.upgrades.current_level(id)
    }

    pub fn is_max_level(&self, id: UpgradeId) -> bool {
        self.upgrades.is_max_level(id)
    }

    /// Text for the next pick of `id`.
    pub fn description(&self, id: UpgradeId) -> Option<&str> {
        self.upgrades.description(id)
    }

    pub fn upgrade_name(&self, id: UpgradeId) -> Option<&str> {
        self.catalog.get(id).map(|definition| definition.name.as_str())
    }

    pub fn picked_upgrades(&self) -> &[PickRecord] {
        self.upgrades.picked_upgrades()
    }

    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    pub fn weapons(&self) -> &Arsenal {
        &self.arsenal
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn character(&self) -> Option<&CharacterProfile> {
        self.character.as_ref()
    }

    pub fn run_seed(&self) -> u64 {
        self.run_seed
    }

    pub fn game_config(&self) -> &GameConfig {
        &self.game
    }

    pub fn catalog(&self) -> &UpgradeCatalog {
        &self.catalog
    }

    pub fn channel(&self) -> &StatsChannel {
        &self.channel
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Subscribe to one event topic.
    pub fn subscribe(&self, topic: Topic) -> tokio::sync::broadcast::Receiver<Event> {
        self.events.subscribe(topic)
    }

    // ===== internals =====

    fn ensure_active(&self) -> Result<()> {
        match self.phase {
            RunPhase::Active => Ok(()),
            _ => Err(RuntimeError::NoActiveRun),
        }
    }

    /// Validation failures are logged and swallowed, the rest propagate.
    fn reject_pick(id: UpgradeId, err: RuntimeError) -> Result<Option<PickOutcome>> {
        let severity = err.severity();
        if severity.is_validation() {
            warn!(
                upgrade = %id,
                severity = severity.as_str(),
                code = err.error_code(),
                "ignoring pick: {err}"
            );
            return Ok(None);
        }
        if severity.is_internal() {
            error!(
                upgrade = %id,
                severity = severity.as_str(),
                code = err.error_code(),
                "pick failed: {err}"
            );
        }
        Err(err)
    }

    /// The weapon a pick of `id` would spawn, if any.
    fn pending_unlock(&self, id: UpgradeId) -> Option<WeaponTag> {
        let tag = self.upgrades.definition(id)?.unlocks()?;
        let locked = self.upgrades.track(id)?.is_locked();
        (locked && !self.arsenal.has_tag(tag)).then_some(tag)
    }

    fn weapon_data(&self, tag: WeaponTag) -> Result<BaseWeaponData> {
        Ok(self.oracles.as_game_env().base_data(tag)?)
    }

    fn spawn_weapon(&mut self, tag: WeaponTag, data: &BaseWeaponData) {
        let handle = self.host.spawn(tag);
        self.arsenal.insert(WeaponInstance::new(
            handle,
            tag,
            data,
            &self.stats,
            &self.game,
        ));
        self.channel.subscribe(handle);
        self.restart_weapon(handle);

        debug!(weapon = %data.name, %handle, "weapon activated");
        self.events.publish(UpgradeEvent::WeaponUnlocked {
            weapon: tag,
            handle,
        });
    }

    /// `stop_firing → recompute → start_firing` for one live weapon.
    fn restart_weapon(&mut self, handle: WeaponHandle) -> Option<WeaponStats> {
        let instance = self.arsenal.get_mut(handle)?;
        self.host.stop_firing(handle);
        instance.stop_firing();
        let stats = instance.refresh(&self.stats, &self.game).clone();
        instance.start_firing();
        self.host.start_firing(handle, &stats);
        Some(stats)
    }

    fn recompute_weapon(&mut self, handle: WeaponHandle) {
        if let Some(stats) = self.restart_weapon(handle) {
            debug!(%handle, damage = stats.damage, cooldown = stats.cooldown, "weapon recomputed");
            self.events
                .publish(StatsEvent::WeaponRecomputed { handle, stats });
        }
    }

    /// Delivers queued stat changes to every subscribed weapon.
    fn flush_stats(&mut self) {
        while let Some(change) = self.channel.pop() {
            self.events.publish(StatsEvent::Changed(change));
            if !change.affects_weapons() {
                continue;
            }
            let subscribers = self.channel.subscribers().to_vec();
            for handle in subscribers {
                self.recompute_weapon(handle);
            }
        }
    }

    fn teardown_weapons(&mut self) {
        for instance in self.arsenal.clear() {
            self.host.stop_firing(instance.handle);
            self.host.deactivate(instance.handle);
            self.channel.unsubscribe(instance.handle);
        }
    }

    fn summary(&self, outcome: RunOutcome) -> RunSummary {
        let picks = self
            .upgrades
            .picked_upgrades()
            .iter()
            .map(|record| PickSummary {
                upgrade: record.id,
                name: self.upgrade_name(record.id).unwrap_or_default().to_string(),
                level: record.level,
            })
            .collect();
        let weapons = self
            .arsenal
            .iter()
            .map(|weapon| WeaponSummary {
                handle: weapon.handle,
                name: self.oracles.weapons().name(weapon.tag),
                stats: weapon.stats.clone(),
            })
            .collect();

        RunSummary {
            character: self
                .character
                .as_ref()
                .map(|character| character.name.clone())
                .unwrap_or_default(),
            outcome,
            seed: self.run_seed,
            level: self.progression.level,
            picks,
            stats: self.stats.clone(),
            weapons,
        }
    }
}

/// Builder for [`RunContext`] with flexible configuration.
pub struct RunContextBuilder<H> {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    catalog: Option<Arc<UpgradeCatalog>>,
    host: H,
}

impl RunContextBuilder<PooledWeaponHost> {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
            catalog: None,
            host: PooledWeaponHost::new(),
        }
    }
}

impl<H: WeaponHost> RunContextBuilder<H> {
    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Set required upgrade catalog
    pub fn catalog(mut self, catalog: Arc<UpgradeCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Replace the in-memory pool with another weapon host.
    pub fn host<H2: WeaponHost>(self, host: H2) -> RunContextBuilder<H2> {
        RunContextBuilder {
            config: self.config,
            oracles: self.oracles,
            catalog: self.catalog,
            host,
        }
    }

    /// Build the run context. No run is active until
    /// [`RunContext::start_run`].
    ///
    /// # Errors
    ///
    /// Missing oracles or catalog, or a game config that fails validation.
    pub fn build(self) -> Result<RunContext<H>> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        let catalog = self.catalog.ok_or(RuntimeError::MissingCatalog)?;
        let game = self.config.effective_game_config();
        game.validate()?;

        Ok(RunContext {
            events: EventBus::with_capacity(self.config.event_capacity),
            upgrades: UpgradeCatalogState::new(Arc::clone(&catalog)),
            stats: StatBlock::from_starting(&StartingStats::default(), &game),
            arsenal: Arsenal::new(),
            progression: Progression::new(),
            channel: StatsChannel::new(),
            host: self.host,
            character: None,
            phase: RunPhase::Idle,
            run_seed: self.config.seed.unwrap_or(0),
            offer_nonce: 0,
            config: self.config,
            game,
            oracles,
            catalog,
        })
    }
}
