//! Keyed stores for sessions and battles
//!
//! Battles are independent of one another and run concurrently; each entry
//! sits behind its own lock so exactly one update is in flight per battle.
//! The outer maps are locked only long enough to find, insert, or drop an
//! entry, never across resolution.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info};

use rumble_battle::{
    Action, ActionOutcome, Battle, DEFAULT_TURN_CEILING, SelectionPhase, SelectionSession,
};
use rumble_display::{BattleView, LegalAction, legal_actions};

use crate::error::ArenaError;

/// Identifier for a selection session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s{}", self.0)
    }
}

/// Identifier for a running battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BattleId(u64);

impl std::fmt::Display for BattleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "b{}", self.0)
    }
}

/// Arena tuning knobs
#[derive(Debug, Clone)]
pub struct ArenaConfig {
    /// Turn ceiling handed to every battle
    pub turn_ceiling: u32,
    /// Sessions and battles idle past this are dropped by the sweeper
    pub idle_timeout: Duration,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            turn_ceiling: DEFAULT_TURN_CEILING,
            idle_timeout: Duration::from_secs(15 * 60),
        }
    }
}

struct SessionEntry {
    session: SelectionSession,
    touched: Instant,
}

struct BattleEntry {
    battle: Battle,
    touched: Instant,
}

/// What a ban call produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BanOutcome {
    /// Selection phase after the ban
    pub phase: SelectionPhase,
    /// Set once both sides have banned and the battle exists
    pub battle: Option<BattleId>,
}

/// Owned store of every live selection session and battle
///
/// All methods take `&self`; the arena is meant to sit in an `Arc` shared
/// by the chat adapter's handler tasks.
pub struct Arena {
    config: ArenaConfig,
    next_id: AtomicU64,
    sessions: Mutex<HashMap<SessionId, SessionEntry>>,
    battles: Mutex<HashMap<BattleId, Arc<Mutex<BattleEntry>>>>,
}

impl Arena {
    /// An arena with default configuration
    pub fn new() -> Self {
        Self::with_config(ArenaConfig::default())
    }

    /// An arena with explicit configuration
    pub fn with_config(config: ArenaConfig) -> Self {
        Self {
            config,
            next_id: AtomicU64::new(1),
            sessions: Mutex::new(HashMap::new()),
            battles: Mutex::new(HashMap::new()),
        }
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Open a selection session between two users
    pub async fn open_session(
        &self,
        challenger_id: u64,
        challenger_name: &str,
        opponent_id: u64,
        opponent_name: &str,
    ) -> SessionId {
        let id = SessionId(self.next_id());
        let session =
            SelectionSession::new(challenger_id, challenger_name, opponent_id, opponent_name);
        self.sessions.lock().await.insert(
            id,
            SessionEntry {
                session,
                touched: Instant::now(),
            },
        );
        info!(session = %id, challenger = challenger_id, opponent = opponent_id, "selection session opened");
        id
    }

    /// Lock in a user's team picks
    pub async fn pick_team(
        &self,
        id: SessionId,
        user: u64,
        picks: &[&str],
    ) -> Result<SelectionPhase, ArenaError> {
        let mut sessions = self.sessions.lock().await;
        let entry = sessions
            .get_mut(&id)
            .ok_or(ArenaError::SessionNotFound(id))?;
        let phase = entry.session.pick_team(user, picks)?;
        entry.touched = Instant::now();
        Ok(phase)
    }

    /// Record a user's bans; the ban completing the phase materializes the
    /// battle and retires the session
    pub async fn ban(&self, id: SessionId, user: u64, bans: &[&str]) -> Result<BanOutcome, ArenaError> {
        let mut sessions = self.sessions.lock().await;
        let phase = {
            let entry = sessions
                .get_mut(&id)
                .ok_or(ArenaError::SessionNotFound(id))?;
            let phase = entry.session.ban(user, bans)?;
            entry.touched = Instant::now();
            phase
        };
        if phase != SelectionPhase::Ready {
            return Ok(BanOutcome { phase, battle: None });
        }

        let entry = sessions.remove(&id).expect("session was just updated");
        drop(sessions);

        let battle = entry.session.into_battle(self.config.turn_ceiling)?;
        let battle_id = BattleId(self.next_id());
        self.battles.lock().await.insert(
            battle_id,
            Arc::new(Mutex::new(BattleEntry {
                battle,
                touched: Instant::now(),
            })),
        );
        info!(session = %id, battle = %battle_id, "battle created");
        Ok(BanOutcome {
            phase,
            battle: Some(battle_id),
        })
    }

    async fn entry(&self, id: BattleId) -> Result<Arc<Mutex<BattleEntry>>, ArenaError> {
        self.battles
            .lock()
            .await
            .get(&id)
            .cloned()
            .ok_or(ArenaError::BattleNotFound(id))
    }

    /// Submit one player action against a battle
    ///
    /// The per-battle lock serializes near-simultaneous submissions; the
    /// loser of the race gets the engine's rejection, never corrupt state.
    pub async fn submit_action(
        &self,
        id: BattleId,
        user: u64,
        action: Action,
    ) -> Result<ActionOutcome, ArenaError> {
        let entry = self.entry(id).await?;
        let mut entry = entry.lock().await;
        let outcome = entry.battle.submit(user, action)?;
        entry.touched = Instant::now();
        debug!(battle = %id, user, turn = entry.battle.turn(), "action resolved");
        if outcome.status.is_ended() {
            info!(battle = %id, "battle ended");
        }
        Ok(outcome)
    }

    /// Snapshot a battle from one participant's perspective
    pub async fn view(&self, id: BattleId, user: u64) -> Result<BattleView, ArenaError> {
        let entry = self.entry(id).await?;
        let entry = entry.lock().await;
        Ok(BattleView::new(&entry.battle, user)?)
    }

    /// The actions a player can legally take right now
    pub async fn legal_actions(
        &self,
        id: BattleId,
        user: u64,
    ) -> Result<Vec<LegalAction>, ArenaError> {
        let entry = self.entry(id).await?;
        let entry = entry.lock().await;
        Ok(legal_actions(&entry.battle, user))
    }

    /// Drop sessions and battles idle past the configured timeout
    ///
    /// Returns how many of each were removed. An entry whose lock is held
    /// is mid-action and therefore not idle.
    pub async fn sweep_idle(&self) -> (usize, usize) {
        let Some(deadline) = Instant::now().checked_sub(self.config.idle_timeout) else {
            return (0, 0);
        };

        let swept_sessions = {
            let mut sessions = self.sessions.lock().await;
            let before = sessions.len();
            sessions.retain(|_, entry| entry.touched > deadline);
            before - sessions.len()
        };

        let swept_battles = {
            let mut battles = self.battles.lock().await;
            let stale: Vec<BattleId> = battles
                .iter()
                .filter_map(|(id, entry)| match entry.try_lock() {
                    Ok(guard) if guard.touched <= deadline => Some(*id),
                    _ => None,
                })
                .collect();
            for id in &stale {
                battles.remove(id);
            }
            stale.len()
        };

        if swept_sessions > 0 || swept_battles > 0 {
            info!(sessions = swept_sessions, battles = swept_battles, "swept idle entries");
        }
        (swept_sessions, swept_battles)
    }

    /// Live session count
    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Live battle count
    pub async fn battle_count(&self) -> usize {
        self.battles.lock().await.len()
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rumble_battle::{BattleError, BattleStatus};

    const ALICE: u64 = 1;
    const BOB: u64 = 2;

    const ALICE_PICKS: [&str; 5] = [
        "World Serpent",
        "Ash Empress",
        "Sun Paladin",
        "Dragon Oracle",
        "Void Duelist",
    ];
    const BOB_PICKS: [&str; 5] = [
        "Gutter Rat",
        "Street Brawler",
        "Dockhand",
        "Torch Juggler",
        "Ember Knight",
    ];

    async fn arena_with_battle() -> (Arena, BattleId) {
        let arena = Arena::new();
        let session = arena.open_session(ALICE, "Alice", BOB, "Bob").await;
        arena.pick_team(session, ALICE, &ALICE_PICKS).await.unwrap();
        arena.pick_team(session, BOB, &BOB_PICKS).await.unwrap();
        arena
            .ban(session, ALICE, &["Ember Knight", "Torch Juggler"])
            .await
            .unwrap();
        let outcome = arena
            .ban(session, BOB, &["World Serpent", "Ash Empress"])
            .await
            .unwrap();
        let battle = outcome.battle.expect("battle should exist after both bans");
        (arena, battle)
    }

    #[tokio::test]
    async fn test_session_flow_creates_battle() {
        let (arena, battle) = arena_with_battle().await;
        assert_eq!(arena.session_count().await, 0);
        assert_eq!(arena.battle_count().await, 1);

        let view = arena.view(battle, ALICE).await.unwrap();
        assert!(view.your_turn);
        // Bans struck two fighters from each five-pick team
        assert_eq!(view.you.roster.len(), 3);
        assert_eq!(view.opponent.roster.len(), 3);
    }

    #[tokio::test]
    async fn test_ban_before_picks_rejected() {
        let arena = Arena::new();
        let session = arena.open_session(ALICE, "Alice", BOB, "Bob").await;
        let err = arena
            .ban(session, ALICE, &["Gutter Rat", "Dockhand"])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ArenaError::Battle(BattleError::WrongPhase)
        ));
    }

    #[tokio::test]
    async fn test_submit_action_round_trip() {
        let (arena, battle) = arena_with_battle().await;

        let outcome = arena
            .submit_action(battle, ALICE, Action::Attack)
            .await
            .unwrap();
        assert!(!outcome.events.is_empty());
        assert_eq!(outcome.next_player, Some(BOB));

        // Out of turn: pure rejection
        let err = arena
            .submit_action(battle, ALICE, Action::Attack)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ArenaError::Battle(BattleError::NotYourTurn)
        ));
    }

    #[tokio::test]
    async fn test_unknown_ids_rejected() {
        let arena = Arena::new();
        let bogus_battle = BattleId(404);
        let bogus_session = SessionId(404);

        assert!(matches!(
            arena.submit_action(bogus_battle, ALICE, Action::Attack).await,
            Err(ArenaError::BattleNotFound(_))
        ));
        assert!(matches!(
            arena.pick_team(bogus_session, ALICE, &ALICE_PICKS).await,
            Err(ArenaError::SessionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_battle_runs_to_completion() {
        let (arena, battle) = arena_with_battle().await;

        let mut user = ALICE;
        let mut rounds = 0;
        loop {
            let outcome = arena.submit_action(battle, user, Action::Attack).await.unwrap();
            match outcome.next_player {
                Some(next) => user = next,
                None => {
                    assert!(outcome.status.is_ended());
                    break;
                }
            }
            rounds += 1;
            assert!(rounds < 80, "battle failed to terminate");
        }

        let view = arena.view(battle, ALICE).await.unwrap();
        assert!(view.ended);
        assert_eq!(view.winner, Some(ALICE));

        // The entry stays viewable but accepts nothing further
        let err = arena
            .submit_action(battle, BOB, Action::Attack)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ArenaError::Battle(BattleError::BattleEnded)
        ));
    }

    #[tokio::test]
    async fn test_concurrent_submissions_never_double_advance() {
        let (arena, battle) = arena_with_battle().await;
        let arena = Arc::new(arena);

        // Both players hammer the battle at once; only the turn owner's
        // actions are accepted, one at a time
        let mut handles = Vec::new();
        for user in [ALICE, BOB] {
            let arena = Arc::clone(&arena);
            handles.push(tokio::spawn(async move {
                let mut accepted = 0u32;
                for _ in 0..10 {
                    if arena.submit_action(battle, user, Action::Defend).await.is_ok() {
                        accepted += 1;
                    }
                }
                accepted
            }));
        }

        let mut total = 0;
        for handle in handles {
            total += handle.await.unwrap();
        }

        let view = arena.view(battle, ALICE).await.unwrap();
        // Turn moved exactly once per accepted action
        assert_eq!(view.turn, total + 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_drops_idle_entries() {
        let (arena, _battle) = arena_with_battle().await;
        arena.open_session(3, "Carol", 4, "Dave").await;
        assert_eq!(arena.session_count().await, 1);
        assert_eq!(arena.battle_count().await, 1);

        // Nothing is idle yet
        let (sessions, battles) = arena.sweep_idle().await;
        assert_eq!((sessions, battles), (0, 0));

        tokio::time::advance(Duration::from_secs(16 * 60)).await;
        let (sessions, battles) = arena.sweep_idle().await;
        assert_eq!((sessions, battles), (1, 1));
        assert_eq!(arena.session_count().await, 0);
        assert_eq!(arena.battle_count().await, 0);
    }
}
