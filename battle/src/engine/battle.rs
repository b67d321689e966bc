//! Battle core: turn ownership, action intake, win evaluation

use rand::SeedableRng;
use rand::rngs::SmallRng;

use rumble_roster::skill;

use crate::error::BattleError;
use crate::types::{BattleEvent, BattleOutcome, Combatant, LogEntry};

/// Turns before the battle is forcibly resolved by HP comparison
pub const DEFAULT_TURN_CEILING: u32 = 30;

/// The two sides of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Challenger,
    Opponent,
}

impl Side {
    /// The other side
    pub fn opposite(&self) -> Side {
        match self {
            Side::Challenger => Side::Opponent,
            Side::Opponent => Side::Challenger,
        }
    }

    /// Array index for this side
    pub(crate) fn index(&self) -> usize {
        match self {
            Side::Challenger => 0,
            Side::Opponent => 1,
        }
    }
}

/// Whether the battle is still running, and how it ended if not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleStatus {
    Active,
    Ended(BattleOutcome),
}

impl BattleStatus {
    /// Whether no further actions are accepted
    pub fn is_ended(&self) -> bool {
        matches!(self, BattleStatus::Ended(_))
    }
}

/// One player action for the current turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Basic attack on the opposing active fighter
    Attack,
    /// Cast the active fighter's signature skill
    Skill,
    /// Brace: recover some HP and halve the next hit
    Defend,
    /// Bring the fighter at this team slot onto the field
    Switch { index: usize },
}

/// What an accepted action produced
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    /// Log entries appended by this action, in order
    pub events: Vec<LogEntry>,
    /// Battle status after resolution
    pub status: BattleStatus,
    /// Whose turn it is now, if the battle continues
    pub next_player: Option<u64>,
}

/// A running battle between two combatants
///
/// Exactly one action is accepted per turn, from the player the turn
/// pointer names. Everything else is rejected without touching state.
#[derive(Debug)]
pub struct Battle {
    combatants: [Combatant; 2],
    turn: u32,
    acting: Side,
    status: BattleStatus,
    turn_ceiling: u32,
    log: Vec<LogEntry>,
    pub(crate) rng: SmallRng,
}

impl Battle {
    /// Start a battle; the challenger acts first
    pub fn new(challenger: Combatant, opponent: Combatant, turn_ceiling: u32) -> Self {
        Self::with_rng(challenger, opponent, turn_ceiling, SmallRng::from_entropy())
    }

    /// Start a battle with a fixed seed, for reproducible resolution
    pub fn with_seed(
        challenger: Combatant,
        opponent: Combatant,
        turn_ceiling: u32,
        seed: u64,
    ) -> Self {
        Self::with_rng(
            challenger,
            opponent,
            turn_ceiling,
            SmallRng::seed_from_u64(seed),
        )
    }

    fn with_rng(challenger: Combatant, opponent: Combatant, turn_ceiling: u32, rng: SmallRng) -> Self {
        Self {
            combatants: [challenger, opponent],
            turn: 1,
            acting: Side::Challenger,
            status: BattleStatus::Active,
            turn_ceiling,
            log: Vec::new(),
            rng,
        }
    }

    /// Current turn number (starts at 1)
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Current status
    pub fn status(&self) -> BattleStatus {
        self.status
    }

    /// The side whose turn it is
    pub fn acting_side(&self) -> Side {
        self.acting
    }

    /// The user whose turn it is
    pub fn acting_user(&self) -> u64 {
        self.combatant(self.acting).user_id
    }

    /// A side's combatant
    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub(crate) fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        &mut self.combatants[side.index()]
    }

    /// The challenging side
    pub fn challenger(&self) -> &Combatant {
        self.combatant(Side::Challenger)
    }

    /// The challenged side
    pub fn opponent(&self) -> &Combatant {
        self.combatant(Side::Opponent)
    }

    /// Which side a user fights on
    pub fn side_of(&self, user_id: u64) -> Option<Side> {
        if self.challenger().user_id == user_id {
            Some(Side::Challenger)
        } else if self.opponent().user_id == user_id {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    /// The full battle log
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Both combatants, acting side first, as disjoint mutable borrows
    pub(crate) fn pair_mut(&mut self, side: Side) -> (&mut Combatant, &mut Combatant) {
        let [challenger, opponent] = &mut self.combatants;
        match side {
            Side::Challenger => (challenger, opponent),
            Side::Opponent => (opponent, challenger),
        }
    }

    pub(crate) fn push_events(&mut self, events: impl IntoIterator<Item = BattleEvent>) {
        let turn = self.turn;
        self.log
            .extend(events.into_iter().map(|event| LogEntry { turn, event }));
    }

    /// Submit the acting player's action for this turn
    ///
    /// Rejections (wrong player, cooldown, bad switch, finished battle) are
    /// pure: they mutate nothing and leave the turn where it was. Accepted
    /// actions resolve, tick both active fighters' effects and everyone's
    /// cooldowns, evaluate the win condition, and hand the turn over.
    pub fn submit(&mut self, user_id: u64, action: Action) -> Result<ActionOutcome, BattleError> {
        if self.status.is_ended() {
            return Err(BattleError::BattleEnded);
        }
        let side = self.side_of(user_id).ok_or(BattleError::NotYourTurn)?;
        if side != self.acting {
            return Err(BattleError::NotYourTurn);
        }

        let first_new = self.log.len();

        // A disabling effect costs the fighter their action outright; the
        // submitted action is discarded, not validated.
        let active = self.combatant(side).active_fighter();
        if let Some(effect) = active.disabling_effect() {
            let event = BattleEvent::Passed {
                fighter: active.name.clone(),
                effect: effect.to_string(),
            };
            self.push_events([event]);
        } else {
            self.validate(side, &action)?;
            let events = self.resolve(side, action);
            self.push_events(events);
        }

        let events = self.end_of_turn();
        self.push_events(events);

        self.status = self.evaluate_status();
        match self.status {
            BattleStatus::Ended(outcome) => {
                self.push_events([BattleEvent::Ended { outcome }]);
            }
            BattleStatus::Active => {
                self.acting = self.acting.opposite();
                self.turn += 1;
            }
        }

        Ok(ActionOutcome {
            events: self.log[first_new..].to_vec(),
            status: self.status,
            next_player: match self.status {
                BattleStatus::Active => Some(self.acting_user()),
                BattleStatus::Ended(_) => None,
            },
        })
    }

    /// Reject illegal actions before anything mutates
    fn validate(&self, side: Side, action: &Action) -> Result<(), BattleError> {
        let combatant = self.combatant(side);
        match action {
            Action::Attack | Action::Defend => Ok(()),
            Action::Switch { index } => {
                let target = combatant.fighter(*index);
                let valid = *index != combatant.active
                    && target.map(|f| f.is_alive()).unwrap_or(false);
                if valid {
                    Ok(())
                } else {
                    Err(BattleError::InvalidSwitch { index: *index })
                }
            }
            Action::Skill => {
                let fighter = combatant.active_fighter();
                if fighter.skills_sealed() {
                    return Err(BattleError::SkillsSealed);
                }
                let entry = skill(&fighter.name, fighter.rarity);
                let remaining = fighter.cooldown(entry.name);
                if remaining > 0 {
                    return Err(BattleError::SkillOnCooldown {
                        skill: entry.name.to_string(),
                        turns: remaining,
                    });
                }
                Ok(())
            }
        }
    }

    /// Win condition, checked after every accepted action
    fn evaluate_status(&self) -> BattleStatus {
        let challenger = self.challenger();
        let opponent = self.opponent();

        match (challenger.all_down(), opponent.all_down()) {
            (true, true) => BattleStatus::Ended(BattleOutcome::Draw),
            (true, false) => BattleStatus::Ended(BattleOutcome::Victory {
                winner: opponent.user_id,
            }),
            (false, true) => BattleStatus::Ended(BattleOutcome::Victory {
                winner: challenger.user_id,
            }),
            (false, false) if self.turn >= self.turn_ceiling => {
                // Ceiling tiebreak: the healthier team takes it
                match challenger.team_hp().cmp(&opponent.team_hp()) {
                    std::cmp::Ordering::Greater => BattleStatus::Ended(BattleOutcome::Victory {
                        winner: challenger.user_id,
                    }),
                    std::cmp::Ordering::Less => BattleStatus::Ended(BattleOutcome::Victory {
                        winner: opponent.user_id,
                    }),
                    std::cmp::Ordering::Equal => BattleStatus::Ended(BattleOutcome::Draw),
                }
            }
            _ => BattleStatus::Active,
        }
    }
}
