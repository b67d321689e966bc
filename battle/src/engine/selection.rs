//! Pre-battle selection session (team picks and bans)

use rumble_roster::{FighterEntry, fighter};

use crate::engine::battle::Battle;
use crate::error::BattleError;
use crate::types::{Combatant, Fighter};

/// Fighters each side must pick
pub const TEAM_SIZE: usize = 5;

/// Opposing fighters each side must ban
pub const BAN_COUNT: usize = 2;

/// Where a selection session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// Both sides are choosing their five fighters
    TeamSelection,
    /// Both sides are striking two opposing fighters
    Banning,
    /// Picks and bans are locked; the battle can be materialized
    Ready,
}

/// One player's picks and bans in progress
#[derive(Debug, Clone)]
struct PickSlot {
    user_id: u64,
    name: String,
    picks: Vec<&'static FighterEntry>,
    bans: Vec<String>,
}

impl PickSlot {
    fn new(user_id: u64, name: String) -> Self {
        Self {
            user_id,
            name,
            picks: Vec::new(),
            bans: Vec::new(),
        }
    }
}

/// Transient pairing of two users' in-progress team picks and bans
///
/// Consumed by [`into_battle`](SelectionSession::into_battle) once both
/// sides have locked picks and bans. Fighters are materialized there, not
/// earlier, so HP cannot be influenced before the ban phase concludes.
#[derive(Debug, Clone)]
pub struct SelectionSession {
    challenger: PickSlot,
    opponent: PickSlot,
    phase: SelectionPhase,
}

impl SelectionSession {
    /// Open a session between a challenger and their opponent
    pub fn new(
        challenger_id: u64,
        challenger_name: impl Into<String>,
        opponent_id: u64,
        opponent_name: impl Into<String>,
    ) -> Self {
        Self {
            challenger: PickSlot::new(challenger_id, challenger_name.into()),
            opponent: PickSlot::new(opponent_id, opponent_name.into()),
            phase: SelectionPhase::TeamSelection,
        }
    }

    /// Current phase
    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    /// Whether the session can be turned into a battle
    pub fn is_ready(&self) -> bool {
        self.phase == SelectionPhase::Ready
    }

    /// Whether a user belongs to this session
    pub fn has_user(&self, user_id: u64) -> bool {
        self.challenger.user_id == user_id || self.opponent.user_id == user_id
    }

    fn slot(&self, user_id: u64) -> Result<&PickSlot, BattleError> {
        if self.challenger.user_id == user_id {
            Ok(&self.challenger)
        } else if self.opponent.user_id == user_id {
            Ok(&self.opponent)
        } else {
            Err(BattleError::NotInSession)
        }
    }

    fn slots_mut(&mut self, user_id: u64) -> Result<(&mut PickSlot, &PickSlot), BattleError> {
        if self.challenger.user_id == user_id {
            Ok((&mut self.challenger, &self.opponent))
        } else if self.opponent.user_id == user_id {
            Ok((&mut self.opponent, &self.challenger))
        } else {
            Err(BattleError::NotInSession)
        }
    }

    /// Lock in a user's team of exactly [`TEAM_SIZE`] catalog fighters
    ///
    /// Re-picking before the phase advances overwrites the previous team.
    /// Moves the session to the ban phase once both sides have picked.
    pub fn pick_team(&mut self, user_id: u64, names: &[&str]) -> Result<SelectionPhase, BattleError> {
        if self.phase != SelectionPhase::TeamSelection {
            return Err(BattleError::WrongPhase);
        }
        if names.len() != TEAM_SIZE {
            return Err(BattleError::InvalidTeamSize { got: names.len() });
        }

        let mut picks: Vec<&'static FighterEntry> = Vec::with_capacity(TEAM_SIZE);
        for name in names {
            let entry = fighter(name).ok_or_else(|| BattleError::UnknownFighter {
                name: name.to_string(),
            })?;
            if picks.iter().any(|p| p.name == entry.name) {
                return Err(BattleError::DuplicateFighter {
                    name: entry.name.to_string(),
                });
            }
            picks.push(entry);
        }

        let (slot, other) = self.slots_mut(user_id)?;
        slot.picks = picks;

        if !other.picks.is_empty() {
            self.phase = SelectionPhase::Banning;
        }
        Ok(self.phase)
    }

    /// Strike exactly [`BAN_COUNT`] fighters from the opposing team
    ///
    /// Ban names must match fighters the opponent actually picked. Moves the
    /// session to ready once both sides have banned.
    pub fn ban(&mut self, user_id: u64, names: &[&str]) -> Result<SelectionPhase, BattleError> {
        if self.phase != SelectionPhase::Banning {
            return Err(BattleError::WrongPhase);
        }
        if names.len() != BAN_COUNT {
            return Err(BattleError::InvalidBanCount { got: names.len() });
        }

        let (_, other) = self.slots_mut(user_id)?;
        let mut bans: Vec<String> = Vec::with_capacity(BAN_COUNT);
        for name in names {
            let entry = other
                .picks
                .iter()
                .find(|p| p.name.eq_ignore_ascii_case(name))
                .ok_or_else(|| BattleError::UnknownFighter {
                    name: name.to_string(),
                })?;
            if bans.iter().any(|b| b == entry.name) {
                return Err(BattleError::DuplicateFighter {
                    name: entry.name.to_string(),
                });
            }
            bans.push(entry.name.to_string());
        }

        let (slot, other) = self.slots_mut(user_id)?;
        slot.bans = bans;

        if !other.bans.is_empty() {
            self.phase = SelectionPhase::Ready;
        }
        Ok(self.phase)
    }

    /// A user's current picks (canonical names)
    pub fn picks(&self, user_id: u64) -> Result<Vec<&'static str>, BattleError> {
        Ok(self.slot(user_id)?.picks.iter().map(|p| p.name).collect())
    }

    /// Materialize the battle: bans strike the opposing roster, then
    /// fighters get their HP rolled from the catalog
    ///
    /// The challenger acts first.
    pub fn into_battle(self, turn_ceiling: u32) -> Result<Battle, BattleError> {
        if self.phase != SelectionPhase::Ready {
            return Err(BattleError::WrongPhase);
        }

        let challenger = materialize(self.challenger, &self.opponent.bans);
        let opponent = materialize(self.opponent, &challenger.bans);

        Ok(Battle::new(challenger, opponent, turn_ceiling))
    }
}

/// Build a combatant from a pick slot, dropping fighters the opponent banned
fn materialize(slot: PickSlot, opposing_bans: &[String]) -> Combatant {
    let team: Vec<Fighter> = slot
        .picks
        .iter()
        .filter(|entry| !opposing_bans.iter().any(|b| b == entry.name))
        .map(|entry| Fighter::from_entry(entry))
        .collect();
    Combatant::new(slot.user_id, slot.name, team, slot.bans)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: u64 = 1;
    const BOB: u64 = 2;

    const ALICE_PICKS: [&str; 5] = [
        "Ember Knight",
        "Frost Adept",
        "Storm Caller",
        "Iron Colossus",
        "Sun Paladin",
    ];
    const BOB_PICKS: [&str; 5] = [
        "Thorn Witch",
        "Sand Runner",
        "Night Stalker",
        "Void Duelist",
        "World Serpent",
    ];

    fn picked_session() -> SelectionSession {
        let mut session = SelectionSession::new(ALICE, "Alice", BOB, "Bob");
        session.pick_team(ALICE, &ALICE_PICKS).unwrap();
        session.pick_team(BOB, &BOB_PICKS).unwrap();
        session
    }

    #[test]
    fn test_phase_advances_when_both_pick() {
        let mut session = SelectionSession::new(ALICE, "Alice", BOB, "Bob");
        assert_eq!(session.phase(), SelectionPhase::TeamSelection);

        let phase = session.pick_team(ALICE, &ALICE_PICKS).unwrap();
        assert_eq!(phase, SelectionPhase::TeamSelection);
        assert_eq!(session.picks(ALICE).unwrap().len(), TEAM_SIZE);
        assert!(session.picks(BOB).unwrap().is_empty());

        let phase = session.pick_team(BOB, &BOB_PICKS).unwrap();
        assert_eq!(phase, SelectionPhase::Banning);
    }

    #[test]
    fn test_pick_team_wrong_size() {
        let mut session = SelectionSession::new(ALICE, "Alice", BOB, "Bob");
        let err = session.pick_team(ALICE, &["Ember Knight"]).unwrap_err();
        assert_eq!(err, BattleError::InvalidTeamSize { got: 1 });
    }

    #[test]
    fn test_pick_team_unknown_and_duplicate() {
        let mut session = SelectionSession::new(ALICE, "Alice", BOB, "Bob");

        let mut picks = ALICE_PICKS;
        picks[4] = "Nobody";
        assert!(matches!(
            session.pick_team(ALICE, &picks).unwrap_err(),
            BattleError::UnknownFighter { .. }
        ));

        picks[4] = "Ember Knight";
        assert!(matches!(
            session.pick_team(ALICE, &picks).unwrap_err(),
            BattleError::DuplicateFighter { .. }
        ));
    }

    #[test]
    fn test_stranger_rejected() {
        let mut session = SelectionSession::new(ALICE, "Alice", BOB, "Bob");
        let err = session.pick_team(99, &ALICE_PICKS).unwrap_err();
        assert_eq!(err, BattleError::NotInSession);
    }

    #[test]
    fn test_ban_requires_ban_phase() {
        let mut session = SelectionSession::new(ALICE, "Alice", BOB, "Bob");
        let err = session.ban(ALICE, &["Thorn Witch", "Sand Runner"]).unwrap_err();
        assert_eq!(err, BattleError::WrongPhase);
    }

    #[test]
    fn test_ban_count_enforced() {
        let mut session = picked_session();
        let err = session.ban(ALICE, &["Thorn Witch"]).unwrap_err();
        assert_eq!(err, BattleError::InvalidBanCount { got: 1 });
    }

    #[test]
    fn test_ban_must_name_opposing_picks() {
        let mut session = picked_session();
        // Ember Knight is Alice's own fighter, not Bob's
        let err = session
            .ban(ALICE, &["Ember Knight", "Thorn Witch"])
            .unwrap_err();
        assert!(matches!(err, BattleError::UnknownFighter { .. }));
    }

    #[test]
    fn test_banned_fighters_removed_from_roster() {
        let mut session = picked_session();
        session.ban(ALICE, &["Thorn Witch", "World Serpent"]).unwrap();
        let phase = session.ban(BOB, &["Ember Knight", "Sun Paladin"]).unwrap();
        assert_eq!(phase, SelectionPhase::Ready);

        let battle = session.into_battle(30).unwrap();

        let alice_team: Vec<_> = battle.challenger().team.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(alice_team, vec!["Frost Adept", "Storm Caller", "Iron Colossus"]);

        let bob_team: Vec<_> = battle.opponent().team.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(bob_team, vec!["Sand Runner", "Night Stalker", "Void Duelist"]);
    }

    #[test]
    fn test_into_battle_requires_ready() {
        let session = picked_session();
        assert!(!session.is_ready());
        assert!(matches!(
            session.into_battle(30).unwrap_err(),
            BattleError::WrongPhase
        ));
    }

    #[test]
    fn test_hp_materialized_at_battle_creation() {
        let mut session = picked_session();
        session.ban(ALICE, &["Thorn Witch", "Sand Runner"]).unwrap();
        session.ban(BOB, &["Ember Knight", "Frost Adept"]).unwrap();

        let battle = session.into_battle(30).unwrap();
        for fighter in &battle.challenger().team {
            assert_eq!(fighter.current_hp, fighter.max_hp);
            assert_eq!(fighter.max_hp, (fighter.power as f32 * 1.5) as u32);
        }
    }
}
