//! Battle snapshots and chat rendering for the Rumble arena game.
//!
//! The chat adapter never reads engine state directly; it asks this crate
//! for a [`BattleView`] built from one viewer's perspective (own side
//! detailed, opposing side summarized), the viewer's [`LegalAction`] set,
//! and ready-to-post text lines. Views are plain serializable data so the
//! adapter can turn them into whatever embed format the platform wants.
//!
//! # Example Usage
//!
//! ```ignore
//! use rumble_display::{BattleView, legal_actions, render_summary};
//!
//! let view = BattleView::new(&battle, user_id)?;
//! let text = render_summary(&view);
//! let buttons = legal_actions(&battle, user_id);
//! ```

pub mod actions;
pub mod render;
pub mod view;

pub use actions::{LegalAction, legal_actions};
pub use render::{hp_bar, render_event, render_log_tail, render_summary};
pub use view::{BattleView, EffectView, FighterView, RosterSlot, SideView, ViewError};
