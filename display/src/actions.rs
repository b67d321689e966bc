//! Legal-action sets for the acting player

use serde::Serialize;

use rumble_battle::Battle;
use rumble_roster::skill;

/// One action the acting player may legally take right now
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LegalAction {
    Attack,
    Skill { name: String },
    Defend,
    Switch { index: usize, fighter: String },
}

/// The actions a player can take this turn
///
/// Empty unless the battle is running and it is this player's turn. A
/// switch is offered for every living benched fighter; the skill is
/// omitted while on cooldown or sealed; a downed active fighter leaves
/// only switches on the table.
pub fn legal_actions(battle: &Battle, user_id: u64) -> Vec<LegalAction> {
    if battle.status().is_ended() || battle.acting_user() != user_id {
        return Vec::new();
    }
    let Some(side) = battle.side_of(user_id) else {
        return Vec::new();
    };

    let combatant = battle.combatant(side);
    let mut actions = Vec::new();
    let active = combatant.active_fighter();

    if active.is_alive() {
        actions.push(LegalAction::Attack);

        let entry = skill(&active.name, active.rarity);
        if active.cooldown(entry.name) == 0 && !active.skills_sealed() {
            actions.push(LegalAction::Skill {
                name: entry.name.to_string(),
            });
        }

        actions.push(LegalAction::Defend);
    }

    for (index, fighter) in combatant.bench() {
        actions.push(LegalAction::Switch {
            index,
            fighter: fighter.name.clone(),
        });
    }

    actions
}
