//! Arena error type

use thiserror::Error;

use rumble_battle::BattleError;
use rumble_display::ViewError;

use crate::store::{BattleId, SessionId};

/// Errors surfaced at the arena boundary
///
/// Battle rejections pass through unchanged so the chat adapter can map
/// each one to a reply; the arena only adds the not-found cases.
#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("no battle with id {0}")]
    BattleNotFound(BattleId),

    #[error("no selection session with id {0}")]
    SessionNotFound(SessionId),

    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    View(#[from] ViewError),
}
