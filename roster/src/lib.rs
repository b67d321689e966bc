//! Fighter catalog and skill tables for the Rumble arena game.
//!
//! This crate holds the static game data the battle engine resolves against:
//! which fighters exist, how strong they are, and which signature skill each
//! fighter brings at a given rarity. All lookups are synchronous reads of
//! in-memory tables; there is no I/O here.
//!
//! # Main Types
//!
//! - [`Rarity`] - The five summon tiers with their power multipliers
//! - [`FighterEntry`] - One catalog row (name, epithet, rarity, base power)
//! - [`SkillEntry`] - A signature skill (base damage, cooldown, effect key)
//!
//! # Lookups
//!
//! - [`fighter`] - find a catalog entry by name (case-insensitive)
//! - [`skill`] - signature skill for a fighter/rarity pair, falling back to
//!   [`DEFAULT_SKILL`] when no entry exists
//!
//! # Example Usage
//!
//! ```
//! use rumble_roster::{fighter, skill};
//!
//! let entry = fighter("Ember Knight").unwrap();
//! let sig = skill(entry.name, entry.rarity);
//! assert!(sig.base_damage > 0);
//! ```

pub mod fighters;
pub mod rarity;
pub mod skills;

pub use fighters::{FighterEntry, catalog, fighter};
pub use rarity::{ParseRarityError, Rarity};
pub use skills::{DEFAULT_SKILL, SkillEntry, skill, skill_entry};
