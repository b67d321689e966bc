//! Status effect instances and their classification

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::effects::table::EffectSpec;

/// Duration value marking an effect that never expires on its own
pub const PERMANENT: i16 = -1;

/// Maximum stack count for a single named effect
pub const MAX_STACKS: u8 = 3;

/// What a disable effect does to the afflicted fighter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum DisableKind {
    /// The fighter loses their action this turn
    SkipTurn,
    /// The fighter cannot act at all while the effect holds
    Immobilized,
    /// Basic actions work but skills cannot be cast
    SealSkills,
}

/// Which aggregate a buff or debuff feeds into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ModifierTarget {
    Damage,
    CritChance,
    Speed,
    Accuracy,
}

/// Status effect classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum EffectKind {
    /// Loses HP every turn (magnitude = HP per stack)
    DamageOverTime,
    /// Recovers HP every turn (magnitude = HP per stack)
    Heal,
    /// Restricts the fighter's actions
    Disable(DisableKind),
    /// Positive stat modifier
    Buff(ModifierTarget),
    /// Negative stat modifier
    Debuff(ModifierTarget),
    /// Reduces incoming damage (magnitude = fraction blocked)
    Defense,
    /// Blocks direct attack and skill damage entirely
    Immunity,
    /// One-shot behavior resolved on application (e.g. a cleanse)
    Special,
    /// Inert marker, display only
    Utility,
    /// Modifier applied to outgoing attacks
    AttackModifier,
}

impl EffectKind {
    /// Whether a cleanse strips this effect
    pub fn is_cleansable(&self) -> bool {
        matches!(self, EffectKind::Debuff(_) | EffectKind::Disable(_))
    }
}

/// A status effect attached to one fighter
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ActiveEffect {
    /// Display name, also the identity used for stacking
    pub name: &'static str,
    /// Emoji shown next to the name in battle summaries
    pub icon: &'static str,
    /// Classification driving per-turn behavior
    pub kind: EffectKind,
    /// Per-stack magnitude (HP for dot/heal, fraction for modifiers)
    pub magnitude: f32,
    /// Turns left, or [`PERMANENT`]
    pub remaining: i16,
    /// Current stack count (1..=[`MAX_STACKS`])
    pub stacks: u8,
}

impl ActiveEffect {
    /// Instantiate a fresh effect from its table spec
    pub fn from_spec(spec: &EffectSpec) -> Self {
        Self {
            name: spec.display_name,
            icon: spec.icon,
            kind: spec.kind,
            magnitude: spec.magnitude,
            remaining: spec.duration,
            stacks: 1,
        }
    }

    /// Whether this effect never expires on its own
    pub fn is_permanent(&self) -> bool {
        self.remaining == PERMANENT
    }

    /// Whether this effect has run out
    pub fn is_expired(&self) -> bool {
        !self.is_permanent() && self.remaining <= 0
    }

    /// Re-application: keep the longer duration, add a stack up to the cap
    pub fn refresh(&mut self, duration: i16) {
        if duration == PERMANENT {
            self.remaining = PERMANENT;
        } else if !self.is_permanent() {
            self.remaining = self.remaining.max(duration);
        }
        self.stacks = (self.stacks + 1).min(MAX_STACKS);
    }

    /// Count down one turn; permanent effects are untouched
    pub fn tick_duration(&mut self) {
        if !self.is_permanent() {
            self.remaining -= 1;
        }
    }
}

impl std::fmt::Display for ActiveEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.stacks > 1 {
            write!(f, "{} {} x{}", self.icon, self.name, self.stacks)
        } else {
            write!(f, "{} {}", self.icon, self.name)
        }
    }
}
