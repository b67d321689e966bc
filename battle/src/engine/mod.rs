//! Battle state machine
//!
//! [`selection`] carries two players from team picks through the ban phase;
//! [`battle`] owns the turn loop once the rosters are locked in. Action
//! resolution lives in [`resolve`], split out the way the update logic is
//! kept apart from the state types.

pub mod battle;
pub mod resolve;
pub mod selection;

pub use battle::{
    Action, ActionOutcome, Battle, BattleStatus, DEFAULT_TURN_CEILING, Side,
};
pub use selection::{BAN_COUNT, SelectionPhase, SelectionSession, TEAM_SIZE};
