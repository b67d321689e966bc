//! Status-effect engine
//!
//! Applies, ticks, and aggregates the effects attached to a fighter. All
//! mutation is confined to the fighter's own effect list and HP; the battle
//! state machine calls in here once per turn and never the other way around.

pub mod table;

pub use table::{EFFECT_TABLE, EffectSpec, EffectTarget, GUARD, lookup};

use crate::types::effect::{ActiveEffect, DisableKind, EffectKind, ModifierTarget};
use crate::types::event::BattleEvent;
use crate::types::fighter::Fighter;

/// Lower bound on the aggregate damage multiplier
const DAMAGE_FLOOR: f32 = 0.1;
/// Upper bound on the aggregate critical chance
const CRIT_CAP: f32 = 0.95;
/// Lower bound on the aggregate speed multiplier
const SPEED_FLOOR: f32 = 0.1;
/// Lower bound on the aggregate accuracy multiplier
const ACCURACY_FLOOR: f32 = 0.05;
/// Most damage a single defense effect can block
const DEFENSE_CAP: f32 = 0.9;

/// Classification of incoming damage, for immunity checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageKind {
    /// A basic attack
    Attack,
    /// Skill damage
    Skill,
    /// Ongoing affliction ticks
    Effect,
}

/// Aggregate combat modifiers folded from a fighter's buffs and debuffs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modifiers {
    /// Multiplier on outgoing damage
    pub damage: f32,
    /// Addend on top of the base critical chance
    pub crit_chance: f32,
    /// Speed multiplier (informational under strict turn alternation)
    pub speed: f32,
    /// Multiplier on the chance to hit
    pub accuracy: f32,
}

impl Default for Modifiers {
    fn default() -> Self {
        Self {
            damage: 1.0,
            crit_chance: 0.0,
            speed: 1.0,
            accuracy: 1.0,
        }
    }
}

impl Fighter {
    /// Attach an effect, stacking onto an existing one of the same name
    ///
    /// Re-application refreshes the duration to the longer of old and new
    /// and adds a stack up to the cap. Returns the resulting stack count.
    pub fn add_effect(&mut self, spec: &EffectSpec) -> u8 {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.name == spec.display_name) {
            existing.refresh(spec.duration);
            existing.stacks
        } else {
            self.effects.push(ActiveEffect::from_spec(spec));
            1
        }
    }

    /// Run one turn of effect consequences, then expire what ran out
    ///
    /// Damage-over-time subtracts `magnitude x stacks` HP, healing effects
    /// add the same clamped to max HP. Durations count down afterwards, so
    /// a one-turn effect gets exactly one tick.
    pub fn tick_effects(&mut self) -> Vec<BattleEvent> {
        let mut events = Vec::new();

        let pending: Vec<(&'static str, EffectKind, u32)> = self
            .effects
            .iter()
            .map(|e| (e.name, e.kind, (e.magnitude * e.stacks as f32) as u32))
            .collect();

        for (name, kind, amount) in pending {
            match kind {
                EffectKind::DamageOverTime => {
                    let dealt = self.apply_damage(amount);
                    events.push(BattleEvent::EffectTicked {
                        fighter: self.name.clone(),
                        effect: name.to_string(),
                        hp_delta: -(dealt as i32),
                    });
                }
                EffectKind::Heal => {
                    let healed = self.heal(amount);
                    events.push(BattleEvent::EffectTicked {
                        fighter: self.name.clone(),
                        effect: name.to_string(),
                        hp_delta: healed as i32,
                    });
                }
                _ => {}
            }
        }

        for effect in &mut self.effects {
            effect.tick_duration();
        }

        let mut expired = Vec::new();
        self.effects.retain(|e| {
            if e.is_expired() {
                expired.push(e.name);
                false
            } else {
                true
            }
        });
        for name in expired {
            events.push(BattleEvent::EffectExpired {
                fighter: self.name.clone(),
                effect: name.to_string(),
            });
        }

        events
    }

    /// Fold buffs, debuffs, and attack modifiers into the four aggregates
    pub fn modifiers(&self) -> Modifiers {
        let mut damage = 1.0;
        let mut crit_chance = 0.0;
        let mut speed = 1.0;
        let mut accuracy = 1.0;

        for effect in &self.effects {
            let m = effect.magnitude * effect.stacks as f32;
            match effect.kind {
                EffectKind::Buff(target) | EffectKind::Debuff(target) => match target {
                    ModifierTarget::Damage => damage *= 1.0 + m,
                    ModifierTarget::CritChance => crit_chance += m,
                    ModifierTarget::Speed => speed *= 1.0 + m,
                    ModifierTarget::Accuracy => accuracy *= 1.0 + m,
                },
                EffectKind::AttackModifier => damage *= 1.0 + m,
                _ => {}
            }
        }

        Modifiers {
            damage: damage.max(DAMAGE_FLOOR),
            crit_chance: crit_chance.clamp(0.0, CRIT_CAP),
            speed: speed.max(SPEED_FLOOR),
            accuracy: accuracy.clamp(ACCURACY_FLOOR, 1.0),
        }
    }

    /// Whether an active immunity blocks this kind of damage
    ///
    /// Barriers stop direct hits; ongoing afflictions keep ticking.
    pub fn has_immunity(&self, kind: DamageKind) -> bool {
        match kind {
            DamageKind::Attack | DamageKind::Skill => {
                self.effects.iter().any(|e| e.kind == EffectKind::Immunity)
            }
            DamageKind::Effect => false,
        }
    }

    /// The name of the immunity effect currently held, if any
    pub fn immunity_name(&self) -> Option<&'static str> {
        self.effects
            .iter()
            .find(|e| e.kind == EffectKind::Immunity)
            .map(|e| e.name)
    }

    /// Whether the fighter loses their action this turn
    pub fn is_disabled(&self) -> bool {
        self.effects.iter().any(|e| {
            matches!(
                e.kind,
                EffectKind::Disable(DisableKind::SkipTurn)
                    | EffectKind::Disable(DisableKind::Immobilized)
            )
        })
    }

    /// The effect responsible for the fighter being unable to act
    pub fn disabling_effect(&self) -> Option<&'static str> {
        self.effects
            .iter()
            .find(|e| {
                matches!(
                    e.kind,
                    EffectKind::Disable(DisableKind::SkipTurn)
                        | EffectKind::Disable(DisableKind::Immobilized)
                )
            })
            .map(|e| e.name)
    }

    /// Whether skills are sealed by an active effect
    pub fn skills_sealed(&self) -> bool {
        self.effects
            .iter()
            .any(|e| e.kind == EffectKind::Disable(DisableKind::SealSkills))
    }

    /// Strip every debuff and disable; returns how many were removed
    pub fn remove_debuffs(&mut self) -> usize {
        let before = self.effects.len();
        self.effects.retain(|e| !e.kind.is_cleansable());
        before - self.effects.len()
    }

    /// Factor applied to incoming direct damage by active defense effects
    pub fn incoming_damage_factor(&self) -> f32 {
        let mut factor = 1.0;
        for effect in &self.effects {
            if effect.kind == EffectKind::Defense {
                let blocked = (effect.magnitude * effect.stacks as f32).min(DEFENSE_CAP);
                factor *= 1.0 - blocked;
            }
        }
        factor
    }
}
