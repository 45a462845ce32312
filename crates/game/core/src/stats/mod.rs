//! Player stat system.
//!
//! ```text
//! [ StartingStats (character content) ]
//!      ↓  StatBlock::from_starting
//! [ StatBlock (run state, mutated by passive upgrades) ]
//!      ↓  StatLayer::compute
//! [ WeaponStats (per weapon, see crate::weapon) ]
//! ```

pub mod block;
pub mod effect;
pub mod kind;
pub mod layer;

pub use block::{StatBlock, StatChange, StatLevels};
pub use effect::StatEffect;
pub use kind::StatKind;
pub use layer::StatLayer;
