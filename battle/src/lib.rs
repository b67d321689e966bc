//! Turn-based battle state machine for the Rumble arena game.
//!
//! This crate holds the whole battle core: the domain types, the
//! status-effect engine, the static effect table, and the state machine
//! that carries two players from team selection through bans into the
//! turn loop. It is pure and synchronous; concurrency and storage live a
//! layer up.
//!
//! # Overview
//!
//! `rumble-battle` sits between `rumble-roster` (static game data) and the
//! service layer:
//!
//! ```text
//! rumble-roster (fighter catalog + skill tables)
//!        │
//!        ▼
//! rumble-battle (domain types + state machine) ← THIS CRATE
//!        │
//!        ├─> rumble-arena (async battle store for the chat adapter)
//!        └─> rumble-display (snapshots and chat rendering)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Fighter`] - One team member: HP, effects, cooldowns
//! - [`Combatant`] - A player's side: team, active slot, bans
//! - [`ActiveEffect`] - A status effect attached to a fighter
//! - [`BattleEvent`] / [`LogEntry`] - The chronological battle log
//!
//! ## State Machine
//! - [`SelectionSession`] - Team picks and bans before the battle exists
//! - [`Battle`] - The turn loop: one owner-checked action per turn
//!
//! # Example Usage
//!
//! ```
//! use rumble_battle::{Action, DEFAULT_TURN_CEILING, SelectionSession};
//!
//! let mut session = SelectionSession::new(1, "Alice", 2, "Bob");
//! session
//!     .pick_team(1, &["Ember Knight", "Frost Adept", "Storm Caller", "Iron Colossus", "Sun Paladin"])
//!     .unwrap();
//! session
//!     .pick_team(2, &["Thorn Witch", "Sand Runner", "Night Stalker", "Void Duelist", "World Serpent"])
//!     .unwrap();
//! session.ban(1, &["World Serpent", "Void Duelist"]).unwrap();
//! session.ban(2, &["Storm Caller", "Sun Paladin"]).unwrap();
//!
//! let mut battle = session.into_battle(DEFAULT_TURN_CEILING).unwrap();
//! let outcome = battle.submit(1, Action::Attack).unwrap();
//! assert_eq!(outcome.next_player, Some(2));
//! ```

pub mod effects;
pub mod engine;
pub mod error;
pub mod types;

// Re-export the main types at the crate root for convenience
pub use effects::{DamageKind, EFFECT_TABLE, EffectSpec, EffectTarget, Modifiers, lookup};
pub use engine::{
    Action, ActionOutcome, BAN_COUNT, Battle, BattleStatus, DEFAULT_TURN_CEILING, SelectionPhase,
    SelectionSession, Side, TEAM_SIZE,
};
pub use error::BattleError;
pub use types::{
    ActiveEffect, BattleEvent, BattleOutcome, Combatant, DisableKind, EffectKind, Fighter,
    LogEntry, MAX_STACKS, ModifierTarget, PERMANENT,
};

// Re-export the data-crate types callers routinely touch
pub use rumble_roster::{FighterEntry, Rarity, SkillEntry};
