//! Fighter battle state

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::Serialize;

use rumble_roster::{FighterEntry, Rarity};

use super::effect::ActiveEffect;

/// HP granted per point of power at materialization
const HP_PER_POWER: f32 = 1.5;

/// One fighter on a combatant's team
///
/// HP only moves through [`apply_damage`](Fighter::apply_damage) and
/// [`heal`](Fighter::heal), which keep `0 <= current_hp <= max_hp`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Fighter {
    /// Catalog name
    pub name: String,
    /// Tier the fighter was summoned at
    pub rarity: Rarity,
    /// Effective power driving damage formulas
    pub power: u32,
    /// Current HP
    pub current_hp: u32,
    /// Maximum HP, fixed at materialization
    pub max_hp: u32,
    /// Active status effects
    pub effects: Vec<ActiveEffect>,
    /// Skill name -> remaining cooldown turns
    pub cooldowns: HashMap<String, u8>,
}

impl Fighter {
    /// Materialize a fighter from a catalog entry
    ///
    /// Max HP derives from effective power here, at battle creation, and
    /// never changes afterwards.
    pub fn from_entry(entry: &FighterEntry) -> Self {
        let power = entry.power();
        let max_hp = (power as f32 * HP_PER_POWER) as u32;
        Self {
            name: entry.name.to_string(),
            rarity: entry.rarity,
            power,
            current_hp: max_hp,
            max_hp,
            effects: Vec::new(),
            cooldowns: HashMap::new(),
        }
    }

    /// Whether this fighter can still fight
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// HP as a 0-100 percentage
    pub fn hp_percent(&self) -> u32 {
        if self.max_hp == 0 {
            return 0;
        }
        (self.current_hp * 100) / self.max_hp
    }

    /// Reduce HP, flooring at 0; returns the damage actually dealt
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.current_hp);
        self.current_hp -= dealt;
        dealt
    }

    /// Restore HP, clamped to max; returns the HP actually recovered
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_hp - self.current_hp);
        self.current_hp += healed;
        healed
    }

    /// Remaining cooldown for a skill (0 = ready)
    pub fn cooldown(&self, skill: &str) -> u8 {
        self.cooldowns.get(skill).copied().unwrap_or(0)
    }

    /// Start a skill's cooldown
    pub fn set_cooldown(&mut self, skill: &str, turns: u8) {
        self.cooldowns.insert(skill.to_string(), turns);
    }

    /// Count every cooldown down one turn, flooring at 0
    pub fn tick_cooldowns(&mut self) {
        for turns in self.cooldowns.values_mut() {
            *turns = turns.saturating_sub(1);
        }
    }

    /// Find an active effect by display name
    pub fn effect(&self, name: &str) -> Option<&ActiveEffect> {
        self.effects.iter().find(|e| e.name == name)
    }

    /// Whether an effect with this display name is active
    pub fn has_effect(&self, name: &str) -> bool {
        self.effect(name).is_some()
    }
}

impl std::fmt::Display for Fighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}/{} HP",
            self.name, self.rarity, self.current_hp, self.max_hp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rumble_roster::fighter;

    fn ember_knight() -> Fighter {
        Fighter::from_entry(fighter("Ember Knight").unwrap())
    }

    #[test]
    fn test_from_entry_derives_hp() {
        let f = ember_knight();
        // 340 base * 1.2 rare multiplier = 408 power, * 1.5 = 612 HP
        assert_eq!(f.power, 408);
        assert_eq!(f.max_hp, 612);
        assert_eq!(f.current_hp, f.max_hp);
        assert!(f.is_alive());
    }

    #[test]
    fn test_apply_damage_floors_at_zero() {
        let mut f = ember_knight();
        let dealt = f.apply_damage(100);
        assert_eq!(dealt, 100);
        assert_eq!(f.current_hp, 512);

        let dealt = f.apply_damage(100_000);
        assert_eq!(dealt, 512);
        assert_eq!(f.current_hp, 0);
        assert!(!f.is_alive());
    }

    #[test]
    fn test_heal_clamps_to_max() {
        let mut f = ember_knight();
        f.apply_damage(50);

        let healed = f.heal(30);
        assert_eq!(healed, 30);

        let healed = f.heal(100_000);
        assert_eq!(healed, 20);
        assert_eq!(f.current_hp, f.max_hp);
    }

    #[test]
    fn test_hp_percent() {
        let mut f = ember_knight();
        assert_eq!(f.hp_percent(), 100);
        f.current_hp = f.max_hp / 2;
        assert_eq!(f.hp_percent(), 50);
        f.current_hp = 0;
        assert_eq!(f.hp_percent(), 0);
    }

    #[test]
    fn test_cooldowns() {
        let mut f = ember_knight();
        assert_eq!(f.cooldown("Cinder Slash"), 0);

        f.set_cooldown("Cinder Slash", 2);
        assert_eq!(f.cooldown("Cinder Slash"), 2);

        f.tick_cooldowns();
        assert_eq!(f.cooldown("Cinder Slash"), 1);

        f.tick_cooldowns();
        f.tick_cooldowns(); // Already at 0, must not underflow
        assert_eq!(f.cooldown("Cinder Slash"), 0);
    }
}
