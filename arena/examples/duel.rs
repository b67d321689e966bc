//! Scripted Duel Example
//!
//! Drives a full flow through the arena: open a session, pick two teams,
//! ban from both sides, then let both players make random legal moves
//! until the battle resolves.

use anyhow::Result;
use rand::seq::SliceRandom;

use rumble_arena::{Action, Arena, LegalAction};
use rumble_display::render_summary;

const ALICE: u64 = 101;
const BOB: u64 = 202;

fn to_action(choice: &LegalAction) -> Action {
    match choice {
        LegalAction::Attack => Action::Attack,
        LegalAction::Skill { .. } => Action::Skill,
        LegalAction::Defend => Action::Defend,
        LegalAction::Switch { index, .. } => Action::Switch { index: *index },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let arena = Arena::new();

    let session = arena.open_session(ALICE, "Alice", BOB, "Bob").await;
    arena
        .pick_team(
            session,
            ALICE,
            &["Ember Knight", "Storm Caller", "Sun Paladin", "Iron Colossus", "Frost Adept"],
        )
        .await?;
    arena
        .pick_team(
            session,
            BOB,
            &["Thorn Witch", "Night Stalker", "Void Duelist", "Sand Runner", "World Serpent"],
        )
        .await?;

    arena.ban(session, ALICE, &["World Serpent", "Void Duelist"]).await?;
    let outcome = arena.ban(session, BOB, &["Sun Paladin", "Storm Caller"]).await?;
    let battle = outcome.battle.expect("both sides have banned");
    println!("Battle {battle} begins!");

    let mut rng = rand::thread_rng();
    let mut user = ALICE;
    loop {
        let actions = arena.legal_actions(battle, user).await?;
        let choice = actions.choose(&mut rng).expect("a legal action exists");

        let outcome = arena.submit_action(battle, user, to_action(choice)).await?;
        for entry in &outcome.events {
            println!("T{}: {}", entry.turn, entry.event);
        }

        match outcome.next_player {
            Some(next) => user = next,
            None => break,
        }
    }

    println!();
    println!("{}", render_summary(&arena.view(battle, ALICE).await?));
    Ok(())
}
