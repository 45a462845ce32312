//! The upgrade catalog and its per-run progress.

use std::sync::Arc;

use super::definition::{UpgradeDefinition, UpgradeId, UpgradeKind};
use super::error::PickError;
use super::offer::{OfferContext, OfferSeed, draw_weighted};
use super::outcome::{PickOutcome, PickRecord};
use super::state::TrackState;
use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::stats::StatBlock;
use crate::weapon::{Arsenal, WeaponTag, weapon_key};

/// Every upgrade definition, in content order. Immutable once built.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradeCatalog {
    definitions: Vec<UpgradeDefinition>,
}

impl UpgradeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition, assigning its id. `None` once every id is taken.
    pub fn push(&mut self, mut definition: UpgradeDefinition) -> Option<UpgradeId> {
        let id = UpgradeId(u16::try_from(self.definitions.len()).ok()?);
        definition.id = id;
        self.definitions.push(definition);
        Some(id)
    }

    pub fn get(&self, id: UpgradeId) -> Option<&UpgradeDefinition> {
        self.definitions.get(id.0 as usize)
    }

    /// Looks a definition up by name; spacing and ASCII case are ignored.
    pub fn find(&self, name: &str) -> Option<&UpgradeDefinition> {
        let key = weapon_key(name);
        self.definitions
            .iter()
            .find(|definition| weapon_key(&definition.name) == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UpgradeDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Progress of every track for one run.
///
/// Track levels only move forward within a run and never pass the track's
/// max level. Offers are side-effect free; only [`apply_pick`] and the reset
/// methods mutate.
///
/// [`apply_pick`]: UpgradeCatalogState::apply_pick
#[derive(Clone, Debug)]
pub struct UpgradeCatalogState {
    catalog: Arc<UpgradeCatalog>,
    tracks: Vec<TrackState>,
    picked: Vec<PickRecord>,
}

impl UpgradeCatalogState {
    pub fn new(catalog: Arc<UpgradeCatalog>) -> Self {
        let tracks = vec![TrackState::Locked; catalog.len()];
        Self {
            catalog,
            tracks,
            picked: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &UpgradeCatalog {
        &self.catalog
    }

    pub fn definition(&self, id: UpgradeId) -> Option<&UpgradeDefinition> {
        self.catalog.get(id)
    }

    pub fn track(&self, id: UpgradeId) -> Option<TrackState> {
        self.tracks.get(id.0 as usize).copied()
    }

    /// Current level of a track; 0 for unknown ids.
    pub fn current_level(&self, id: UpgradeId) -> u32 {
        self.track(id).map_or(0, TrackState::level)
    }

    /// Whether the track has reached its max level. Unknown ids count as maxed.
    pub fn is_max_level(&self, id: UpgradeId) -> bool {
        match self.catalog.get(id) {
            Some(definition) => self.current_level(id) >= definition.max_level(),
            None => true,
        }
    }

    /// Description of the next pick for `id`.
    pub fn description(&self, id: UpgradeId) -> Option<&str> {
        let definition = self.catalog.get(id)?;
        Some(definition.description(self.current_level(id)))
    }

    /// Picks taken this run, in first-pick order, each at its latest level.
    pub fn picked_upgrades(&self) -> &[PickRecord] {
        &self.picked
    }

    /// Ids that could appear in an offer right now.
    pub fn eligible(&self, ctx: &OfferContext<'_>) -> Vec<UpgradeId> {
        self.catalog
            .iter()
            .filter(|definition| definition.is_offerable())
            .filter(|definition| !self.is_max_level(definition.id))
            .filter(|definition| {
                let state = self.tracks[definition.id.0 as usize];
                ctx.is_compatible(definition, state)
            })
            .map(|definition| definition.id)
            .collect()
    }

    /// Draws up to `count` distinct eligible upgrades, in draw order.
    ///
    /// Returns an empty list when nothing is eligible; the caller resumes
    /// play without showing a choice.
    pub fn offer_upgrades<R: RngOracle + ?Sized>(
        &self,
        count: usize,
        ctx: &OfferContext<'_>,
        rng: &R,
        seed: OfferSeed,
    ) -> Vec<UpgradeId> {
        let pool = self
            .eligible(ctx)
            .into_iter()
            .filter_map(|id| {
                self.catalog
                    .get(id)
                    .map(|definition| (id, definition.pool_copies()))
            })
            .collect();
        draw_weighted(pool, count, rng, seed)
    }

    /// Applies a player's choice.
    ///
    /// Weapon tracks unlock on the first pick without applying a bonus; later
    /// picks apply `levels[level - 1]` to every live compatible weapon and
    /// recompute their stats. Passive tracks apply `levels[level]` to `stats`.
    ///
    /// # Errors
    ///
    /// [`PickError`] for unknown or maxed tracks. State is untouched.
    pub fn apply_pick(
        &mut self,
        id: UpgradeId,
        stats: &mut StatBlock,
        arsenal: &mut Arsenal,
        config: &GameConfig,
    ) -> Result<PickOutcome, PickError> {
        let catalog = Arc::clone(&self.catalog);
        let definition = catalog.get(id).ok_or(PickError::UnknownUpgrade(id))?;
        let state = self.tracks[id.0 as usize];
        let level = state.level();
        if level >= definition.max_level() {
            return Err(PickError::AlreadyMaxed { id, level });
        }

        let outcome = match &definition.kind {
            UpgradeKind::Weapon { weapon, .. } if state.is_locked() => PickOutcome::Unlocked {
                weapon: *weapon,
                spawn_required: !arsenal.has_tag(*weapon),
            },
            UpgradeKind::Weapon {
                compatible, levels, ..
            } => {
                let bonus = &levels[level as usize - 1];
                let affected = arsenal.compatible(compatible);
                for handle in &affected {
                    if let Some(instance) = arsenal.get_mut(*handle) {
                        instance.base.apply_level(&bonus.effects);
                        instance.refresh(stats, config);
                    }
                }
                PickOutcome::WeaponUpgraded {
                    level: level + 1,
                    affected,
                }
            }
            UpgradeKind::Passive { levels, .. } => {
                let effect = levels[level as usize];
                let change = stats.apply_stat_upgrade(effect.stat, effect.amount, effect.percentage);
                PickOutcome::PassiveApplied {
                    change,
                    level: level + 1,
                }
            }
        };

        self.tracks[id.0 as usize] = if definition.is_weapon() {
            state.advance_weapon()
        } else {
            state.advance_passive()
        };
        self.record(id);
        Ok(outcome)
    }

    /// Moves every locked track for `weapon` to level 1 without recording a
    /// pick. Used for a character's starting weapon.
    pub fn mark_unlocked(&mut self, weapon: WeaponTag) -> Vec<UpgradeId> {
        let mut unlocked = Vec::new();
        for definition in self.catalog.iter() {
            let slot = &mut self.tracks[definition.id.0 as usize];
            if definition.unlocks() == Some(weapon) && slot.is_locked() {
                *slot = TrackState::Unlocked;
                unlocked.push(definition.id);
            }
        }
        unlocked
    }

    /// Locks every track, keeping the pick history for the summary screen.
    pub fn reset_all_upgrades(&mut self) {
        self.tracks.fill(TrackState::Locked);
    }

    /// Locks every track and forgets the pick history.
    pub fn full_reset(&mut self) {
        self.reset_all_upgrades();
        self.picked.clear();
    }

    fn record(&mut self, id: UpgradeId) {
        let level = self.current_level(id);
        match self.picked.iter_mut().find(|record| record.id == id) {
            Some(record) => record.level = level,
            None => self.picked.push(PickRecord { id, level }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{AllUnlocked, PcgRng, UnlockSet};
    use crate::stats::StatKind;
    use crate::upgrade::{PassiveEffect, WeaponLevel};
    use crate::weapon::{
        BaseWeaponData, WeaponEffect, WeaponHandle, WeaponInstance, WeaponStatKind,
    };

    const WAND: WeaponTag = WeaponTag(0);
    const GARLIC: WeaponTag = WeaponTag(1);

    struct Fixture {
        state: UpgradeCatalogState,
        stats: StatBlock,
        arsenal: Arsenal,
        config: GameConfig,
        might: UpgradeId,
        wand: UpgradeId,
        garlic: UpgradeId,
    }

    impl Fixture {
        fn new() -> Self {
            let mut catalog = UpgradeCatalog::new();
            let might = catalog
                .push(UpgradeDefinition::passive(
                    "Might",
                    1.0,
                    vec![PassiveEffect::new(StatKind::Damage, 10.0, true); 3],
                ))
                .unwrap();
            let wand = catalog
                .push(UpgradeDefinition::weapon(
                    "Magic Wand",
                    1.0,
                    WAND,
                    vec![
                        WeaponLevel::new(vec![WeaponEffect::percent(WeaponStatKind::Cooldown, 20.0)]),
                        WeaponLevel::new(vec![WeaponEffect::flat(WeaponStatKind::Amount, 1.0)]),
                    ],
                ))
                .unwrap();
            let garlic = catalog
                .push(UpgradeDefinition::weapon(
                    "Garlic",
                    1.0,
                    GARLIC,
                    vec![WeaponLevel::new(vec![WeaponEffect::flat(
                        WeaponStatKind::Damage,
                        2.0,
                    )])],
                ))
                .unwrap();
            Self {
                state: UpgradeCatalogState::new(Arc::new(catalog)),
                stats: StatBlock::default(),
                arsenal: Arsenal::new(),
                config: GameConfig::default(),
                might,
                wand,
                garlic,
            }
        }

        fn spawn(&mut self, handle: u32, tag: WeaponTag, cooldown: f32) {
            let data = BaseWeaponData::new("test").with_cooldown(cooldown);
            self.arsenal.insert(WeaponInstance::new(
                WeaponHandle(handle),
                tag,
                &data,
                &self.stats,
                &self.config,
            ));
        }

        fn pick(&mut self, id: UpgradeId) -> Result<PickOutcome, PickError> {
            self.state
                .apply_pick(id, &mut self.stats, &mut self.arsenal, &self.config)
        }
    }

    #[test]
    fn passive_pick_applies_next_level() {
        let mut fx = Fixture::new();
        for expected in 1..=3 {
            let outcome = fx.pick(fx.might).unwrap();
            assert_eq!(outcome.level(), expected);
        }
        assert!((fx.stats.damage_mult() - 1.331).abs() < 1e-5);
        assert!(fx.state.is_max_level(fx.might));
        assert_eq!(
            fx.pick(fx.might),
            Err(PickError::AlreadyMaxed {
                id: fx.might,
                level: 3
            })
        );
        assert_eq!(fx.stats.level(StatKind::Damage), 3);
    }

    #[test]
    fn weapon_unlock_applies_no_bonus() {
        let mut fx = Fixture::new();
        let outcome = fx.pick(fx.wand).unwrap();
        assert_eq!(
            outcome,
            PickOutcome::Unlocked {
                weapon: WAND,
                spawn_required: true
            }
        );
        assert_eq!(fx.state.track(fx.wand), Some(TrackState::Unlocked));

        fx.spawn(1, WAND, 8.0);
        let before = fx.arsenal.get(WeaponHandle(1)).unwrap().stats.clone();
        assert_eq!(before.cooldown, 8.0);

        let outcome = fx.pick(fx.wand).unwrap();
        assert_eq!(
            outcome,
            PickOutcome::WeaponUpgraded {
                level: 2,
                affected: vec![WeaponHandle(1)]
            }
        );
        let wand = fx.arsenal.get(WeaponHandle(1)).unwrap();
        assert!((wand.base.cooldown - 6.4).abs() < 1e-5);
        assert!((wand.stats.cooldown - 6.4).abs() < 1e-5);
        assert_eq!(fx.state.current_level(fx.wand), 2);
    }

    #[test]
    fn bonus_only_touches_compatible_weapons() {
        let mut fx = Fixture::new();
        fx.state.mark_unlocked(WAND);
        fx.state.mark_unlocked(GARLIC);
        fx.spawn(1, WAND, 1.0);
        fx.spawn(2, GARLIC, 1.0);
        let garlic_before = fx.arsenal.get(WeaponHandle(2)).unwrap().clone();

        fx.pick(fx.wand).unwrap();
        fx.pick(fx.wand).unwrap();

        assert_eq!(fx.arsenal.get(WeaponHandle(1)).unwrap().stats.amount, 2);
        assert_eq!(fx.arsenal.get(WeaponHandle(2)).unwrap(), &garlic_before);
        assert!(fx.state.is_max_level(fx.wand));
    }

    #[test]
    fn missing_instance_still_advances() {
        let mut fx = Fixture::new();
        fx.state.mark_unlocked(GARLIC);
        let outcome = fx.pick(fx.garlic).unwrap();
        assert_eq!(
            outcome,
            PickOutcome::WeaponUpgraded {
                level: 2,
                affected: vec![]
            }
        );
        assert!(fx.state.is_max_level(fx.garlic));
    }

    #[test]
    fn unknown_pick_is_rejected() {
        let mut fx = Fixture::new();
        let before = fx.stats.clone();
        assert_eq!(
            fx.pick(UpgradeId(99)),
            Err(PickError::UnknownUpgrade(UpgradeId(99)))
        );
        assert_eq!(fx.stats, before);
        assert!(fx.state.picked_upgrades().is_empty());
    }

    #[test]
    fn offers_skip_incompatible_tracks() {
        let mut fx = Fixture::new();
        fx.state.mark_unlocked(GARLIC);
        let unlocks = UnlockSet::new();
        let ctx = OfferContext::new(&fx.arsenal, &unlocks);

        // Garlic is level 1 with no live instance; wand is locked in the save.
        assert_eq!(fx.state.eligible(&ctx), vec![fx.might]);

        fx.spawn(1, GARLIC, 1.0);
        let ctx = OfferContext::new(&fx.arsenal, &unlocks);
        assert_eq!(fx.state.eligible(&ctx), vec![fx.might, fx.garlic]);
    }

    #[test]
    fn offers_are_distinct_and_empty_when_maxed() {
        let mut fx = Fixture::new();
        let ctx = OfferContext::new(&fx.arsenal, &AllUnlocked);
        for nonce in 0..20 {
            let offer = fx
                .state
                .offer_upgrades(3, &ctx, &PcgRng, OfferSeed::new(5, nonce));
            assert_eq!(offer.len(), 3);
            let mut unique = offer.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), 3);
        }

        for _ in 0..3 {
            fx.pick(fx.might).unwrap();
        }
        fx.pick(fx.wand).unwrap();
        fx.spawn(1, WAND, 1.0);
        fx.pick(fx.wand).unwrap();
        fx.pick(fx.wand).unwrap();
        fx.pick(fx.garlic).unwrap();
        fx.spawn(2, GARLIC, 1.0);
        fx.pick(fx.garlic).unwrap();

        let ctx = OfferContext::new(&fx.arsenal, &AllUnlocked);
        let offer = fx
            .state
            .offer_upgrades(3, &ctx, &PcgRng, OfferSeed::new(5, 99));
        assert!(offer.is_empty());
    }

    #[test]
    fn levels_never_decrease_or_overshoot() {
        let mut fx = Fixture::new();
        fx.spawn(1, WAND, 1.0);
        fx.spawn(2, GARLIC, 1.0);
        let ids = [fx.might, fx.wand, fx.garlic];
        let mut last = [0u32; 3];
        for step in 0..30 {
            let slot = step % 3;
            let _ = fx.pick(ids[slot]);
            for (i, id) in ids.iter().enumerate() {
                let level = fx.state.current_level(*id);
                assert!(level >= last[i]);
                assert!(level <= fx.state.definition(*id).unwrap().max_level());
                last[i] = level;
            }
        }
    }

    #[test]
    fn picked_history_overwrites_and_survives_reset() {
        let mut fx = Fixture::new();
        fx.pick(fx.might).unwrap();
        fx.pick(fx.wand).unwrap();
        fx.pick(fx.might).unwrap();

        assert_eq!(
            fx.state.picked_upgrades(),
            &[
                PickRecord {
                    id: fx.might,
                    level: 2
                },
                PickRecord {
                    id: fx.wand,
                    level: 1
                },
            ]
        );

        fx.state.reset_all_upgrades();
        assert_eq!(fx.state.current_level(fx.might), 0);
        assert_eq!(fx.state.current_level(fx.wand), 0);
        assert_eq!(fx.state.picked_upgrades().len(), 2);

        fx.state.full_reset();
        assert!(fx.state.picked_upgrades().is_empty());
    }

    #[test]
    fn find_ignores_spacing_and_case() {
        let fx = Fixture::new();
        let catalog = fx.state.catalog();
        assert_eq!(catalog.find("magicwand").map(|d| d.id), Some(fx.wand));
        assert_eq!(catalog.find("  GARLIC ").map(|d| d.id), Some(fx.garlic));
        assert!(catalog.find("Whip").is_none());
    }

    #[test]
    fn catalog_stops_when_ids_run_out() {
        let mut catalog = UpgradeCatalog::new();
        let passive = UpgradeDefinition::passive(
            "Filler",
            1.0,
            vec![PassiveEffect::new(StatKind::Luck, 1.0, false)],
        );
        for _ in 0..=u16::MAX as usize {
            assert!(catalog.push(passive.clone()).is_some());
        }
        assert_eq!(catalog.push(passive), None);
        assert_eq!(catalog.len(), u16::MAX as usize + 1);
    }
}
