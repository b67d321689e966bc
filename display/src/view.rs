//! Perspective snapshots of a running battle

use serde::Serialize;
use thiserror::Error;

use rumble_battle::{Battle, BattleOutcome, BattleStatus, Combatant, Fighter, Side};
use rumble_roster::skill;

/// Error building a view
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("user {0} is not part of this battle")]
    NotAParticipant(u64),
}

/// A status effect as shown to players
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectView {
    pub name: String,
    pub icon: String,
    pub stacks: u8,
    /// Turns left; negative means it will not expire on its own
    pub remaining: i16,
}

/// The viewer's own active fighter, in full detail
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FighterView {
    pub name: String,
    pub rarity: String,
    pub current_hp: u32,
    pub max_hp: u32,
    pub hp_percent: u32,
    pub down: bool,
    pub effects: Vec<EffectView>,
    /// Signature skill name
    pub skill: String,
    /// Turns before the skill is castable again (0 = ready)
    pub skill_cooldown: u8,
}

/// One team slot in the roster strip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterSlot {
    pub index: usize,
    pub name: String,
    pub hp_percent: u32,
    pub down: bool,
    pub active: bool,
}

/// One side of the battle as the viewer sees it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideView {
    pub user_id: u64,
    pub name: String,
    pub active: FighterView,
    pub roster: Vec<RosterSlot>,
    pub alive: usize,
}

/// A full snapshot from one viewer's perspective
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattleView {
    pub turn: u32,
    pub your_turn: bool,
    pub ended: bool,
    /// Winning user id, when the battle ended in a victory
    pub winner: Option<u64>,
    pub you: SideView,
    pub opponent: SideView,
    /// The last few log lines, oldest first, ready to post
    pub recent: Vec<String>,
}

/// Log lines included in a snapshot
const RECENT_LINES: usize = 6;

impl EffectView {
    fn of(fighter: &Fighter) -> Vec<EffectView> {
        fighter
            .effects
            .iter()
            .map(|e| EffectView {
                name: e.name.to_string(),
                icon: e.icon.to_string(),
                stacks: e.stacks,
                remaining: e.remaining,
            })
            .collect()
    }
}

impl FighterView {
    fn of(fighter: &Fighter) -> FighterView {
        let entry = skill(&fighter.name, fighter.rarity);
        FighterView {
            name: fighter.name.clone(),
            rarity: fighter.rarity.to_string(),
            current_hp: fighter.current_hp,
            max_hp: fighter.max_hp,
            hp_percent: fighter.hp_percent(),
            down: !fighter.is_alive(),
            effects: EffectView::of(fighter),
            skill: entry.name.to_string(),
            skill_cooldown: fighter.cooldown(entry.name),
        }
    }
}

impl SideView {
    fn of(combatant: &Combatant) -> SideView {
        SideView {
            user_id: combatant.user_id,
            name: combatant.name.clone(),
            active: FighterView::of(combatant.active_fighter()),
            roster: combatant
                .team
                .iter()
                .enumerate()
                .map(|(index, f)| RosterSlot {
                    index,
                    name: f.name.clone(),
                    hp_percent: f.hp_percent(),
                    down: !f.is_alive(),
                    active: index == combatant.active,
                })
                .collect(),
            alive: combatant.alive_count(),
        }
    }
}

impl BattleView {
    /// Snapshot the battle from one participant's perspective
    pub fn new(battle: &Battle, viewer: u64) -> Result<BattleView, ViewError> {
        let side = battle
            .side_of(viewer)
            .ok_or(ViewError::NotAParticipant(viewer))?;

        let winner = match battle.status() {
            BattleStatus::Ended(BattleOutcome::Victory { winner }) => Some(winner),
            _ => None,
        };

        let tail = battle.log().len().saturating_sub(RECENT_LINES);
        Ok(BattleView {
            turn: battle.turn(),
            your_turn: !battle.status().is_ended() && battle.acting_user() == viewer,
            ended: battle.status().is_ended(),
            winner,
            you: SideView::of(battle.combatant(side)),
            opponent: SideView::of(battle.combatant(side.opposite())),
            recent: battle.log()[tail..]
                .iter()
                .map(|entry| entry.event.to_string())
                .collect(),
        })
    }

    /// Both perspectives at once, challenger first
    pub fn both(battle: &Battle) -> (BattleView, BattleView) {
        let challenger = battle.combatant(Side::Challenger).user_id;
        let opponent = battle.combatant(Side::Opponent).user_id;
        (
            BattleView::new(battle, challenger).expect("challenger is a participant"),
            BattleView::new(battle, opponent).expect("opponent is a participant"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rumble_battle::{Action, Combatant, DEFAULT_TURN_CEILING, Fighter};
    use rumble_roster::fighter;

    const ALICE: u64 = 1;
    const BOB: u64 = 2;

    fn combatant(user_id: u64, name: &str, fighters: &[&str]) -> Combatant {
        let team = fighters
            .iter()
            .map(|n| Fighter::from_entry(fighter(n).unwrap()))
            .collect();
        Combatant::new(user_id, name, team, Vec::new())
    }

    fn test_battle() -> Battle {
        Battle::with_seed(
            combatant(ALICE, "Alice", &["Ember Knight", "Frost Adept"]),
            combatant(BOB, "Bob", &["Thorn Witch", "Sand Runner"]),
            DEFAULT_TURN_CEILING,
            1,
        )
    }

    #[test]
    fn test_view_perspective() {
        let battle = test_battle();

        let view = BattleView::new(&battle, ALICE).unwrap();
        assert!(view.your_turn);
        assert_eq!(view.you.name, "Alice");
        assert_eq!(view.opponent.name, "Bob");
        assert_eq!(view.you.active.name, "Ember Knight");

        let view = BattleView::new(&battle, BOB).unwrap();
        assert!(!view.your_turn);
        assert_eq!(view.you.name, "Bob");
        assert_eq!(view.opponent.name, "Alice");
    }

    #[test]
    fn test_view_rejects_stranger() {
        let battle = test_battle();
        assert_eq!(
            BattleView::new(&battle, 99).unwrap_err(),
            ViewError::NotAParticipant(99)
        );
    }

    #[test]
    fn test_view_tracks_state() {
        let mut battle = test_battle();
        battle.submit(ALICE, Action::Attack).unwrap();

        let view = BattleView::new(&battle, BOB).unwrap();
        assert_eq!(view.turn, 2);
        assert!(view.your_turn);
        assert!(view.you.active.hp_percent < 100);
        assert!(!view.recent.is_empty());
        assert!(!view.ended);
        assert_eq!(view.winner, None);
    }

    #[test]
    fn test_view_skill_cooldown() {
        let mut battle = test_battle();
        battle.submit(ALICE, Action::Skill).unwrap();

        let view = BattleView::new(&battle, ALICE).unwrap();
        assert_eq!(view.you.active.skill, "Cinder Slash");
        assert!(view.you.active.skill_cooldown > 0);
    }

    #[test]
    fn test_view_serializes() {
        let battle = test_battle();
        let view = BattleView::new(&battle, ALICE).unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["you"]["name"], "Alice");
        assert_eq!(json["turn"], 1);
    }
}
