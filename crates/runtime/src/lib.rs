//! Run orchestration for the survivor upgrade system.
//!
//! This crate wires loaded content, oracle access, the stats-changed channel
//! and a weapon host into a single per-run context. Consumers embed
//! [`RunContext`] to start runs, feed experience, draw offers and apply picks.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the run context and its builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`host`] abstracts the weapon object pool and firing loops
//! - [`notify`] delivers stat changes to subscribed weapons
//! - [`oracle`] adapts static content to `game-core` oracle traits
//! - [`config`] reads runtime settings from the environment
pub mod api;
pub mod config;
pub mod events;
pub mod host;
pub mod notify;
pub mod oracle;
pub mod runtime;

pub use api::{Result, RuntimeError};
pub use config::RuntimeConfig;
pub use events::{Event, EventBus, RunEvent, RunOutcome, StatsEvent, Topic, UpgradeEvent};
pub use host::{PooledWeapon, PooledWeaponHost, WeaponHost};
pub use notify::StatsChannel;
pub use oracle::{OracleManager, UnlockOracleImpl, WeaponOracleImpl};
pub use runtime::{
    PickSummary, RunContext, RunContextBuilder, RunPhase, RunSummary, WeaponSummary,
    load_content,
};
