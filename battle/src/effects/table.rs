//! Static effect descriptor table
//!
//! Every secondary effect a skill (or the defend action) can apply is a row
//! here. The table is immutable game data: resolution looks descriptors up
//! by key and instantiates [`ActiveEffect`](crate::types::ActiveEffect)s
//! from them, nothing registers effects at runtime.

use crate::error::BattleError;
use crate::types::effect::{DisableKind, EffectKind, ModifierTarget};

/// Which fighter a skill's secondary effect lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectTarget {
    /// The caster's own active fighter (buffs, heals, cleanses)
    Caster,
    /// The opposing active fighter (dots, disables, debuffs)
    Opponent,
}

/// Immutable descriptor for one effect key
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSpec {
    /// Lookup key referenced by skill tables
    pub key: &'static str,
    /// Classification driving per-turn behavior
    pub kind: EffectKind,
    /// Default target when applied as a skill secondary
    pub target: EffectTarget,
    /// Duration in turns, or [`PERMANENT`]
    pub duration: i16,
    /// Per-stack magnitude (HP for dot/heal, fraction for modifiers)
    pub magnitude: f32,
    /// Display name, also the stacking identity
    pub display_name: &'static str,
    /// Emoji shown in battle summaries
    pub icon: &'static str,
}

/// Applied by the defend action: halves the next incoming hit
///
/// Durations count in global turns and both fighters tick after every
/// action, so covering one opposing action takes two turns on the clock.
pub const GUARD: EffectSpec = EffectSpec {
    key: "guard",
    kind: EffectKind::Defense,
    target: EffectTarget::Caster,
    duration: 2,
    magnitude: 0.5,
    display_name: "Guard",
    icon: "🛡️",
};

/// The full effect table
///
/// Keys are what skill rows reference; display names are what stacking and
/// the battle log use. Durations are global turns (see [`GUARD`]).
#[rustfmt::skip]
pub static EFFECT_TABLE: &[EffectSpec] = &[
    // Damage over time
    EffectSpec { key: "burn",      kind: EffectKind::DamageOverTime, target: EffectTarget::Opponent, duration: 3, magnitude: 8.0,   display_name: "Burn",        icon: "🔥" },
    EffectSpec { key: "poison",    kind: EffectKind::DamageOverTime, target: EffectTarget::Opponent, duration: 4, magnitude: 6.0,   display_name: "Poison",      icon: "☠️" },
    EffectSpec { key: "bleed",     kind: EffectKind::DamageOverTime, target: EffectTarget::Opponent, duration: 2, magnitude: 12.0,  display_name: "Bleed",       icon: "🩸" },
    // Healing over time
    EffectSpec { key: "regen",     kind: EffectKind::Heal,           target: EffectTarget::Caster,   duration: 3, magnitude: 10.0,  display_name: "Regeneration", icon: "🌿" },
    EffectSpec { key: "blessing",  kind: EffectKind::Heal,           target: EffectTarget::Caster,   duration: 2, magnitude: 18.0,  display_name: "Blessing",    icon: "✨" },
    // Disables
    EffectSpec { key: "stun",      kind: EffectKind::Disable(DisableKind::SkipTurn),    target: EffectTarget::Opponent, duration: 2, magnitude: 0.0, display_name: "Stun",    icon: "💫" },
    EffectSpec { key: "freeze",    kind: EffectKind::Disable(DisableKind::Immobilized), target: EffectTarget::Opponent, duration: 4, magnitude: 0.0, display_name: "Freeze",  icon: "🧊" },
    EffectSpec { key: "silence",   kind: EffectKind::Disable(DisableKind::SealSkills),  target: EffectTarget::Opponent, duration: 4, magnitude: 0.0, display_name: "Silence", icon: "🤐" },
    // Buffs
    EffectSpec { key: "rally",     kind: EffectKind::Buff(ModifierTarget::Damage),     target: EffectTarget::Caster, duration: 5, magnitude: 0.25,  display_name: "Rally",       icon: "📯" },
    EffectSpec { key: "focus",     kind: EffectKind::Buff(ModifierTarget::CritChance), target: EffectTarget::Caster, duration: 5, magnitude: 0.15,  display_name: "Focus",       icon: "🎯" },
    EffectSpec { key: "haste",     kind: EffectKind::Buff(ModifierTarget::Speed),      target: EffectTarget::Caster, duration: 5, magnitude: 0.30,  display_name: "Haste",       icon: "💨" },
    // Debuffs
    EffectSpec { key: "blind",     kind: EffectKind::Debuff(ModifierTarget::Accuracy), target: EffectTarget::Opponent, duration: 2, magnitude: -0.25, display_name: "Blind",     icon: "🌫️" },
    EffectSpec { key: "weaken",    kind: EffectKind::Debuff(ModifierTarget::Damage),   target: EffectTarget::Opponent, duration: 4, magnitude: -0.20, display_name: "Weaken",    icon: "📉" },
    EffectSpec { key: "slow",      kind: EffectKind::Debuff(ModifierTarget::Speed),    target: EffectTarget::Opponent, duration: 2, magnitude: -0.25, display_name: "Slow",      icon: "🐌" },
    // Defense and immunity
    GUARD,
    EffectSpec { key: "bulwark",   kind: EffectKind::Defense,  target: EffectTarget::Caster, duration: 4, magnitude: 0.35, display_name: "Bulwark", icon: "🧱" },
    EffectSpec { key: "barrier",   kind: EffectKind::Immunity, target: EffectTarget::Caster, duration: 2, magnitude: 0.0,  display_name: "Barrier", icon: "🔮" },
    // Specials and markers
    EffectSpec { key: "cleanse",   kind: EffectKind::Special,  target: EffectTarget::Caster, duration: 0, magnitude: 0.0,  display_name: "Cleanse", icon: "🧼" },
    EffectSpec { key: "frenzy",    kind: EffectKind::AttackModifier, target: EffectTarget::Caster,   duration: 5, magnitude: 0.40, display_name: "Frenzy", icon: "😤" },
    EffectSpec { key: "taunt",     kind: EffectKind::Utility,  target: EffectTarget::Opponent, duration: 2, magnitude: 0.0, display_name: "Taunt",   icon: "🗯️" },
];

/// Look up an effect descriptor by key
pub fn lookup(key: &str) -> Result<&'static EffectSpec, BattleError> {
    EFFECT_TABLE
        .iter()
        .find(|spec| spec.key == key)
        .ok_or_else(|| BattleError::UnknownEffect {
            key: key.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::effect::PERMANENT;

    #[test]
    fn test_lookup_known_keys() {
        assert_eq!(lookup("burn").unwrap().display_name, "Burn");
        assert_eq!(lookup("guard").unwrap().magnitude, 0.5);
        assert_eq!(
            lookup("stun").unwrap().kind,
            EffectKind::Disable(DisableKind::SkipTurn)
        );
    }

    #[test]
    fn test_lookup_unknown_key() {
        let err = lookup("petrify").unwrap_err();
        assert_eq!(
            err,
            BattleError::UnknownEffect {
                key: "petrify".to_string()
            }
        );
    }

    #[test]
    fn test_keys_unique() {
        for (i, a) in EFFECT_TABLE.iter().enumerate() {
            for b in &EFFECT_TABLE[i + 1..] {
                assert_ne!(a.key, b.key, "duplicate effect key");
                assert_ne!(a.display_name, b.display_name, "duplicate display name");
            }
        }
    }

    #[test]
    fn test_durations_positive_or_special() {
        for spec in EFFECT_TABLE {
            let instant = spec.kind == EffectKind::Special;
            assert!(
                spec.duration > 0 || spec.duration == PERMANENT || instant,
                "{} has a bad duration",
                spec.key
            );
        }
    }

    #[test]
    fn test_debuff_magnitudes_negative() {
        for spec in EFFECT_TABLE {
            if let EffectKind::Debuff(_) = spec.kind {
                assert!(spec.magnitude < 0.0, "{} should reduce its stat", spec.key);
            }
        }
    }

    #[test]
    fn test_guard_is_in_table() {
        assert_eq!(lookup("guard").unwrap(), &GUARD);
    }
}
