//! Signature skill tables

use serde::Serialize;

use crate::rarity::Rarity;

/// A fighter's signature skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillEntry {
    /// Skill name, also the cooldown key
    pub name: &'static str,
    /// Damage before the caster's power scaling
    pub base_damage: u32,
    /// Turns before the skill can be used again
    pub cooldown: u8,
    /// Secondary effect applied on cast, if any
    pub effect_key: Option<&'static str>,
}

/// Fallback skill used when a fighter has no table entry at their rarity
pub const DEFAULT_SKILL: SkillEntry = SkillEntry {
    name: "Wild Swing",
    base_damage: 40,
    cooldown: 2,
    effect_key: None,
};

/// Skill rows keyed by (fighter name, rarity)
static SKILLS: &[(&str, Rarity, SkillEntry)] = &[
    // Common
    ("Gutter Rat", Rarity::Common, SkillEntry { name: "Rusty Shiv", base_damage: 45, cooldown: 2, effect_key: Some("bleed") }),
    ("Street Brawler", Rarity::Common, SkillEntry { name: "Haymaker", base_damage: 55, cooldown: 2, effect_key: None }),
    ("Dockhand", Rarity::Common, SkillEntry { name: "Crate Toss", base_damage: 50, cooldown: 2, effect_key: Some("slow") }),
    ("Torch Juggler", Rarity::Common, SkillEntry { name: "Stray Spark", base_damage: 40, cooldown: 2, effect_key: Some("burn") }),
    // Rare
    ("Ember Knight", Rarity::Rare, SkillEntry { name: "Cinder Slash", base_damage: 65, cooldown: 2, effect_key: Some("burn") }),
    ("Frost Adept", Rarity::Rare, SkillEntry { name: "Glacial Lance", base_damage: 60, cooldown: 3, effect_key: Some("freeze") }),
    ("Thorn Witch", Rarity::Rare, SkillEntry { name: "Bramble Coil", base_damage: 55, cooldown: 2, effect_key: Some("poison") }),
    ("Sand Runner", Rarity::Rare, SkillEntry { name: "Dust Veil", base_damage: 45, cooldown: 2, effect_key: Some("blind") }),
    // Epic
    ("Storm Caller", Rarity::Epic, SkillEntry { name: "Forked Lightning", base_damage: 85, cooldown: 3, effect_key: Some("stun") }),
    ("Iron Colossus", Rarity::Epic, SkillEntry { name: "Bastion Stance", base_damage: 50, cooldown: 3, effect_key: Some("bulwark") }),
    ("Night Stalker", Rarity::Epic, SkillEntry { name: "Marked Prey", base_damage: 75, cooldown: 3, effect_key: Some("focus") }),
    ("Plague Doctor", Rarity::Epic, SkillEntry { name: "Miasma", base_damage: 60, cooldown: 3, effect_key: Some("weaken") }),
    // Legendary
    ("Dragon Oracle", Rarity::Legendary, SkillEntry { name: "Old Flame", base_damage: 100, cooldown: 3, effect_key: Some("burn") }),
    ("Void Duelist", Rarity::Legendary, SkillEntry { name: "Severing Dark", base_damage: 110, cooldown: 4, effect_key: Some("silence") }),
    ("Sun Paladin", Rarity::Legendary, SkillEntry { name: "Daybreak", base_damage: 90, cooldown: 3, effect_key: Some("blessing") }),
    // Mythic
    ("World Serpent", Rarity::Mythic, SkillEntry { name: "Coil of Ages", base_damage: 120, cooldown: 4, effect_key: Some("frenzy") }),
    ("Ash Empress", Rarity::Mythic, SkillEntry { name: "Last Ember", base_damage: 130, cooldown: 4, effect_key: Some("cleanse") }),
];

/// Exact skill row for a fighter/rarity pair, if one exists
pub fn skill_entry(fighter: &str, rarity: Rarity) -> Option<&'static SkillEntry> {
    SKILLS
        .iter()
        .find(|(name, r, _)| *r == rarity && name.eq_ignore_ascii_case(fighter))
        .map(|(_, _, entry)| entry)
}

/// Signature skill for a fighter/rarity pair
///
/// Missing rows fall back to [`DEFAULT_SKILL`] so a data-table gap never
/// breaks a battle.
pub fn skill(fighter: &str, rarity: Rarity) -> &'static SkillEntry {
    skill_entry(fighter, rarity).unwrap_or(&DEFAULT_SKILL)
}
