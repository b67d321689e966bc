//! Domain types shared across the battle engine

pub mod combatant;
pub mod effect;
pub mod event;
pub mod fighter;

pub use combatant::Combatant;
pub use effect::{ActiveEffect, DisableKind, EffectKind, MAX_STACKS, ModifierTarget, PERMANENT};
pub use event::{BattleEvent, BattleOutcome, LogEntry};
pub use fighter::Fighter;
