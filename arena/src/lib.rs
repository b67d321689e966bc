//! Async battle and session store for the Rumble arena game.
//!
//! This crate is the boundary the chat adapter talks to. It owns every
//! live [`SelectionSession`](rumble_battle::SelectionSession) and
//! [`Battle`](rumble_battle::Battle), keyed by id, and serializes updates
//! so two near-simultaneous commands can never double-advance a turn.
//!
//! # Overview
//!
//! ```text
//! chat adapter (commands, embeds)
//!        │
//!        ▼
//! rumble-arena (keyed stores, per-battle locking) ← THIS CRATE
//!        │
//!        ├─> rumble-battle (state machine)
//!        └─> rumble-display (snapshots, legal actions)
//! ```
//!
//! # Example Usage
//!
//! ```ignore
//! let arena = Arena::new();
//! let session = arena.open_session(alice, "Alice", bob, "Bob").await;
//! arena.pick_team(session, alice, &picks).await?;
//! // ... picks and bans from both sides ...
//! let battle = arena.ban(session, bob, &bans).await?.battle.unwrap();
//! let outcome = arena.submit_action(battle, alice, Action::Attack).await?;
//! ```
//!
//! Abandoned sessions and finished battles are reclaimed by calling
//! [`Arena::sweep_idle`] on whatever cadence the host process prefers.

pub mod error;
pub mod store;

pub use error::ArenaError;
pub use store::{Arena, ArenaConfig, BanOutcome, BattleId, SessionId};

// Re-export what callers need to drive a battle end to end
pub use rumble_battle::{Action, ActionOutcome, BattleStatus, SelectionPhase};
pub use rumble_display::{BattleView, LegalAction};
