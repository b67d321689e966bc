//! Action resolution
//!
//! Turn intake and ownership checks live in [`battle`](super::battle); this
//! module holds what each accepted action actually does, plus the shared
//! end-of-turn pipeline (effect ticks, cooldown decay, forced switches).

use rand::Rng;
use tracing::warn;

use rumble_roster::{skill, skill_entry};

use super::battle::{Action, Battle, Side};
use crate::effects::table::{EffectTarget, GUARD, lookup};
use crate::effects::DamageKind;
use crate::types::{BattleEvent, Combatant, EffectKind};

/// Coefficient on attacker power for basic attacks
const ATTACK_COEFF: f32 = 0.3;
/// Basic attack variance bounds
const VARIANCE_MIN: f32 = 0.8;
const VARIANCE_MAX: f32 = 1.2;
/// Critical chance before modifiers
const BASE_CRIT: f32 = 0.05;
/// Hard cap on the total critical chance
const TOTAL_CRIT_CAP: f32 = 0.95;
/// Critical hit damage multiplier
const CRIT_MULTIPLIER: f32 = 2.0;
/// Divisor of max HP recovered by defending
const DEFEND_HEAL_DIV: u32 = 10;

impl Battle {
    pub(crate) fn resolve(&mut self, side: Side, action: Action) -> Vec<BattleEvent> {
        match action {
            Action::Attack => self.resolve_attack(side),
            Action::Skill => self.resolve_skill(side),
            Action::Defend => self.resolve_defend(side),
            Action::Switch { index } => self.resolve_switch(side, index),
        }
    }

    fn resolve_attack(&mut self, side: Side) -> Vec<BattleEvent> {
        let variance = self.rng.gen_range(VARIANCE_MIN..=VARIANCE_MAX);
        let hit_roll: f32 = self.rng.gen_range(0.0..1.0);
        let crit_roll: f32 = self.rng.gen_range(0.0..1.0);

        let (acting, other) = self.pair_mut(side);
        let attacker = acting.active_fighter();
        let attacker_name = attacker.name.clone();
        let power = attacker.power;
        let mods = attacker.modifiers();
        let defender = other.active_fighter_mut();

        if hit_roll >= mods.accuracy {
            return vec![BattleEvent::Missed {
                attacker: attacker_name,
                defender: defender.name.clone(),
            }];
        }
        if defender.has_immunity(DamageKind::Attack) {
            return vec![BattleEvent::Blocked {
                defender: defender.name.clone(),
                effect: defender.immunity_name().unwrap_or("Barrier").to_string(),
            }];
        }

        let critical = crit_roll < (BASE_CRIT + mods.crit_chance).min(TOTAL_CRIT_CAP);
        let mut damage = ATTACK_COEFF * power as f32 * variance * mods.damage;
        if critical {
            damage *= CRIT_MULTIPLIER;
        }
        damage *= defender.incoming_damage_factor();
        let dealt = defender.apply_damage(damage as u32);

        let mut events = vec![BattleEvent::AttackLanded {
            attacker: attacker_name,
            defender: defender.name.clone(),
            damage: dealt,
            critical,
        }];
        if !defender.is_alive() {
            events.push(BattleEvent::KnockedOut {
                fighter: defender.name.clone(),
            });
            if let Some(event) = auto_switch(other) {
                events.push(event);
            }
        }
        events
    }

    fn resolve_skill(&mut self, side: Side) -> Vec<BattleEvent> {
        let hit_roll: f32 = self.rng.gen_range(0.0..1.0);
        let crit_roll: f32 = self.rng.gen_range(0.0..1.0);

        let (acting, other) = self.pair_mut(side);
        let caster = acting.active_fighter_mut();
        let entry = skill(&caster.name, caster.rarity);
        if skill_entry(&caster.name, caster.rarity).is_none() {
            warn!(fighter = %caster.name, "no skill table entry, using the default");
        }

        // The cast is committed here; a miss or a barrier still spends it
        caster.set_cooldown(entry.name, entry.cooldown);
        let caster_name = caster.name.clone();
        let power = caster.power;
        let mods = caster.modifiers();
        let defender = other.active_fighter_mut();

        if hit_roll >= mods.accuracy {
            return vec![BattleEvent::Missed {
                attacker: caster_name,
                defender: defender.name.clone(),
            }];
        }
        if defender.has_immunity(DamageKind::Skill) {
            return vec![BattleEvent::Blocked {
                defender: defender.name.clone(),
                effect: defender.immunity_name().unwrap_or("Barrier").to_string(),
            }];
        }

        let critical = crit_roll < (BASE_CRIT + mods.crit_chance).min(TOTAL_CRIT_CAP);
        let base = entry.base_damage as f32 * (1.0 + power as f32 / 1000.0);
        let mut damage = base * mods.damage;
        if critical {
            damage *= CRIT_MULTIPLIER;
        }
        damage *= defender.incoming_damage_factor();
        let dealt = defender.apply_damage(damage as u32);

        let mut events = vec![BattleEvent::SkillCast {
            caster: caster_name.clone(),
            skill: entry.name.to_string(),
            damage: dealt,
            critical,
        }];

        let defender_down = !defender.is_alive();
        if defender_down {
            events.push(BattleEvent::KnockedOut {
                fighter: defender.name.clone(),
            });
        }

        if let Some(key) = entry.effect_key {
            match lookup(key) {
                Ok(spec) if spec.kind == EffectKind::Special => {
                    let caster = acting.active_fighter_mut();
                    let removed = caster.remove_debuffs();
                    events.push(BattleEvent::Cleansed {
                        fighter: caster_name,
                        removed,
                    });
                }
                Ok(spec) => match spec.target {
                    EffectTarget::Caster => {
                        let caster = acting.active_fighter_mut();
                        let stacks = caster.add_effect(spec);
                        events.push(BattleEvent::EffectApplied {
                            fighter: caster_name,
                            effect: spec.display_name.to_string(),
                            stacks,
                        });
                    }
                    EffectTarget::Opponent => {
                        // A downed fighter takes no affliction
                        if !defender_down {
                            let stacks = defender.add_effect(spec);
                            events.push(BattleEvent::EffectApplied {
                                fighter: defender.name.clone(),
                                effect: spec.display_name.to_string(),
                                stacks,
                            });
                        }
                    }
                },
                Err(_) => {
                    warn!(key, skill = entry.name, "unknown effect key, skipping");
                }
            }
        }

        if defender_down {
            if let Some(event) = auto_switch(other) {
                events.push(event);
            }
        }
        events
    }

    fn resolve_defend(&mut self, side: Side) -> Vec<BattleEvent> {
        let combatant = self.combatant_mut(side);
        let fighter = combatant.active_fighter_mut();
        let healed = fighter.heal(fighter.max_hp / DEFEND_HEAL_DIV);
        let stacks = fighter.add_effect(&GUARD);
        vec![
            BattleEvent::Defended {
                fighter: fighter.name.clone(),
                healed,
            },
            BattleEvent::EffectApplied {
                fighter: fighter.name.clone(),
                effect: GUARD.display_name.to_string(),
                stacks,
            },
        ]
    }

    fn resolve_switch(&mut self, side: Side, index: usize) -> Vec<BattleEvent> {
        let combatant = self.combatant_mut(side);
        let from = combatant.active_fighter().name.clone();
        combatant.active = index;
        vec![BattleEvent::Switched {
            user_id: combatant.user_id,
            from,
            to: combatant.active_fighter().name.clone(),
        }]
    }

    /// After any accepted action: tick both active fighters' effects, decay
    /// every cooldown, and force-replace anyone an affliction brought down
    pub(crate) fn end_of_turn(&mut self) -> Vec<BattleEvent> {
        let mut events = Vec::new();
        for side in [Side::Challenger, Side::Opponent] {
            let combatant = self.combatant_mut(side);
            let fighter = combatant.active_fighter_mut();
            if fighter.is_alive() {
                events.extend(fighter.tick_effects());
                if !fighter.is_alive() {
                    events.push(BattleEvent::KnockedOut {
                        fighter: fighter.name.clone(),
                    });
                    if let Some(event) = auto_switch(combatant) {
                        events.push(event);
                    }
                }
            }
            for fighter in &mut combatant.team {
                fighter.tick_cooldowns();
            }
        }
        events
    }
}

/// Bring in the next living fighter in team order after a knockout
fn auto_switch(combatant: &mut Combatant) -> Option<BattleEvent> {
    let next = combatant.next_living()?;
    combatant.active = next;
    Some(BattleEvent::AutoSwitched {
        user_id: combatant.user_id,
        to: combatant.active_fighter().name.clone(),
    })
}
