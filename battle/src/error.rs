//! Battle error taxonomy
//!
//! Every variant is recoverable at the caller boundary: a rejected action
//! leaves the battle untouched and the turn unconsumed. Normal endings
//! (knockout sweeps, draws, the turn ceiling) are reported through
//! [`BattleStatus`](crate::engine::BattleStatus), never as errors.

use thiserror::Error;

use crate::engine::selection::{BAN_COUNT, TEAM_SIZE};

/// Errors surfaced by the selection session and the battle state machine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("it is not your turn")]
    NotYourTurn,

    #[error("the battle has already ended")]
    BattleEnded,

    #[error("cannot switch to team slot {index}")]
    InvalidSwitch { index: usize },

    #[error("{skill} is on cooldown for {turns} more turn(s)")]
    SkillOnCooldown { skill: String, turns: u8 },

    #[error("skills are sealed by an active effect")]
    SkillsSealed,

    #[error("unknown effect key: {key}")]
    UnknownEffect { key: String },

    #[error("a team must have exactly {TEAM_SIZE} fighters, got {got}")]
    InvalidTeamSize { got: usize },

    #[error("exactly {BAN_COUNT} bans are required, got {got}")]
    InvalidBanCount { got: usize },

    #[error("unknown fighter: {name}")]
    UnknownFighter { name: String },

    #[error("duplicate fighter: {name}")]
    DuplicateFighter { name: String },

    #[error("that action is not available in the current phase")]
    WrongPhase,

    #[error("you are not part of this session")]
    NotInSession,
}
