//! Battle log events

#[cfg(feature = "serde")]
use serde::Serialize;

/// How a finished battle resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum BattleOutcome {
    /// The named user won
    Victory { winner: u64 },
    /// Both sides fell together, or the ceiling tiebreak found equal HP
    Draw,
}

/// One thing that happened during resolution
///
/// Fighter fields carry display names; user fields carry chat-platform ids.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum BattleEvent {
    /// A basic attack connected
    AttackLanded {
        attacker: String,
        defender: String,
        damage: u32,
        critical: bool,
    },
    /// A basic attack or skill hit nothing
    Missed { attacker: String, defender: String },
    /// Incoming damage was fully absorbed by an immunity effect
    Blocked { defender: String, effect: String },
    /// A signature skill was cast
    SkillCast {
        caster: String,
        skill: String,
        damage: u32,
        critical: bool,
    },
    /// A status effect landed on a fighter
    EffectApplied {
        fighter: String,
        effect: String,
        stacks: u8,
    },
    /// A per-turn effect consequence (negative = damage, positive = heal)
    EffectTicked {
        fighter: String,
        effect: String,
        hp_delta: i32,
    },
    /// An effect ran out
    EffectExpired { fighter: String, effect: String },
    /// Debuffs and disables were stripped
    Cleansed { fighter: String, removed: usize },
    /// The fighter braced, healing and raising guard
    Defended { fighter: String, healed: u32 },
    /// A voluntary switch
    Switched {
        user_id: u64,
        from: String,
        to: String,
    },
    /// A fighter went down
    KnockedOut { fighter: String },
    /// The next living fighter stepped in after a knockout
    AutoSwitched { user_id: u64, to: String },
    /// The fighter lost their action to a disable
    Passed { fighter: String, effect: String },
    /// The battle finished
    Ended { outcome: BattleOutcome },
}

/// A battle event stamped with the turn it happened on
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LogEntry {
    pub turn: u32,
    pub event: BattleEvent,
}

impl std::fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BattleEvent::AttackLanded {
                attacker,
                defender,
                damage,
                critical,
            } => {
                let crit = if *critical { " Critical hit!" } else { "" };
                write!(f, "{attacker} hits {defender} for {damage}.{crit}")
            }
            BattleEvent::Missed { attacker, defender } => {
                write!(f, "{attacker}'s attack misses {defender}.")
            }
            BattleEvent::Blocked { defender, effect } => {
                write!(f, "{defender}'s {effect} absorbs the blow.")
            }
            BattleEvent::SkillCast {
                caster,
                skill,
                damage,
                critical,
            } => {
                let crit = if *critical { " Critical hit!" } else { "" };
                write!(f, "{caster} unleashes {skill} for {damage}.{crit}")
            }
            BattleEvent::EffectApplied {
                fighter,
                effect,
                stacks,
            } => {
                if *stacks > 1 {
                    write!(f, "{fighter} is afflicted by {effect} (x{stacks}).")
                } else {
                    write!(f, "{fighter} is afflicted by {effect}.")
                }
            }
            BattleEvent::EffectTicked {
                fighter,
                effect,
                hp_delta,
            } => {
                if *hp_delta < 0 {
                    write!(f, "{fighter} suffers {} from {effect}.", -hp_delta)
                } else {
                    write!(f, "{fighter} recovers {hp_delta} from {effect}.")
                }
            }
            BattleEvent::EffectExpired { fighter, effect } => {
                write!(f, "{effect} fades from {fighter}.")
            }
            BattleEvent::Cleansed { fighter, removed } => {
                write!(f, "{fighter} is cleansed of {removed} affliction(s).")
            }
            BattleEvent::Defended { fighter, healed } => {
                write!(f, "{fighter} braces, recovering {healed} HP.")
            }
            BattleEvent::Switched { from, to, .. } => {
                write!(f, "{from} falls back; {to} steps in.")
            }
            BattleEvent::KnockedOut { fighter } => write!(f, "{fighter} is knocked out!"),
            BattleEvent::AutoSwitched { to, .. } => write!(f, "{to} is forced onto the field."),
            BattleEvent::Passed { fighter, effect } => {
                write!(f, "{fighter} cannot act ({effect}).")
            }
            BattleEvent::Ended { outcome } => match outcome {
                BattleOutcome::Victory { .. } => write!(f, "The battle is over."),
                BattleOutcome::Draw => write!(f, "The battle ends in a draw."),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_display() {
        let event = BattleEvent::AttackLanded {
            attacker: "Ember Knight".to_string(),
            defender: "Frost Adept".to_string(),
            damage: 120,
            critical: false,
        };
        assert_eq!(event.to_string(), "Ember Knight hits Frost Adept for 120.");
    }

    #[test]
    fn test_crit_display() {
        let event = BattleEvent::AttackLanded {
            attacker: "A".to_string(),
            defender: "B".to_string(),
            damage: 240,
            critical: true,
        };
        assert!(event.to_string().ends_with("Critical hit!"));
    }

    #[test]
    fn test_tick_display_signs() {
        let dot = BattleEvent::EffectTicked {
            fighter: "A".to_string(),
            effect: "Burn".to_string(),
            hp_delta: -16,
        };
        assert_eq!(dot.to_string(), "A suffers 16 from Burn.");

        let heal = BattleEvent::EffectTicked {
            fighter: "A".to_string(),
            effect: "Regeneration".to_string(),
            hp_delta: 10,
        };
        assert_eq!(heal.to_string(), "A recovers 10 from Regeneration.");
    }
}
