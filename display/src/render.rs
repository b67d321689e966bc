//! Chat-text rendering

use rumble_battle::{Battle, LogEntry};

use crate::view::BattleView;

/// Width of the HP bar in characters
const BAR_WIDTH: usize = 10;

/// Render an HP percentage as a fixed-width bar, e.g. `[███░░░░░░░]`
pub fn hp_bar(percent: u32) -> String {
    let filled = (percent as usize * BAR_WIDTH).div_ceil(100).min(BAR_WIDTH);
    let mut bar = String::with_capacity(BAR_WIDTH + 2);
    bar.push('[');
    for i in 0..BAR_WIDTH {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar.push(']');
    bar
}

/// One log entry as a postable line
pub fn render_event(entry: &LogEntry) -> String {
    format!("T{}: {}", entry.turn, entry.event)
}

/// The last `count` log entries as postable lines, oldest first
pub fn render_log_tail(battle: &Battle, count: usize) -> Vec<String> {
    let log = battle.log();
    let tail = log.len().saturating_sub(count);
    log[tail..].iter().map(render_event).collect()
}

/// A multi-line battle summary for the viewer the snapshot was built for
pub fn render_summary(view: &BattleView) -> String {
    let mut lines = Vec::new();

    lines.push(format!("**Turn {}**", view.turn));

    let you = &view.you;
    lines.push(format!(
        "{} — {} {} {}/{} HP",
        you.name,
        you.active.name,
        hp_bar(you.active.hp_percent),
        you.active.current_hp,
        you.active.max_hp,
    ));
    if !you.active.effects.is_empty() {
        let effects: Vec<String> = you
            .active
            .effects
            .iter()
            .map(|e| {
                if e.stacks > 1 {
                    format!("{} {} x{}", e.icon, e.name, e.stacks)
                } else {
                    format!("{} {}", e.icon, e.name)
                }
            })
            .collect();
        lines.push(format!("  {}", effects.join(", ")));
    }

    let opp = &view.opponent;
    lines.push(format!(
        "{} — {} {} {}%",
        opp.name,
        opp.active.name,
        hp_bar(opp.active.hp_percent),
        opp.active.hp_percent,
    ));

    let roster: Vec<String> = view
        .you
        .roster
        .iter()
        .map(|slot| {
            if slot.down {
                format!("✖ {}", slot.name)
            } else if slot.active {
                format!("▶ {}", slot.name)
            } else {
                format!("· {}", slot.name)
            }
        })
        .collect();
    lines.push(format!("Team: {}", roster.join("  ")));

    if !view.recent.is_empty() {
        lines.push(String::new());
        for line in &view.recent {
            lines.push(format!("> {line}"));
        }
    }

    if view.ended {
        lines.push(match view.winner {
            Some(winner) if winner == view.you.user_id => "**Victory!**".to_string(),
            Some(_) => "**Defeat.**".to_string(),
            None => "**Draw.**".to_string(),
        });
    } else if view.your_turn {
        lines.push("It is your move.".to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rumble_battle::{Action, Combatant, DEFAULT_TURN_CEILING, Fighter};
    use rumble_roster::fighter;

    fn combatant(user_id: u64, name: &str, fighters: &[&str]) -> Combatant {
        let team = fighters
            .iter()
            .map(|n| Fighter::from_entry(fighter(n).unwrap()))
            .collect();
        Combatant::new(user_id, name, team, Vec::new())
    }

    fn test_battle() -> Battle {
        Battle::with_seed(
            combatant(1, "Alice", &["Ember Knight", "Frost Adept"]),
            combatant(2, "Bob", &["Thorn Witch"]),
            DEFAULT_TURN_CEILING,
            1,
        )
    }

    #[test]
    fn test_hp_bar_bounds() {
        assert_eq!(hp_bar(100), "[██████████]");
        assert_eq!(hp_bar(0), "[░░░░░░░░░░]");
        assert_eq!(hp_bar(50), "[█████░░░░░]");
        // Anything still alive shows at least one filled cell
        assert_eq!(hp_bar(1), "[█░░░░░░░░░]");
    }

    #[test]
    fn test_render_event_prefixes_turn() {
        let mut battle = test_battle();
        battle.submit(1, Action::Defend).unwrap();
        let lines = render_log_tail(&battle, 10);
        assert!(!lines.is_empty());
        assert!(lines[0].starts_with("T1: "));
    }

    #[test]
    fn test_render_log_tail_limits() {
        let mut battle = test_battle();
        battle.submit(1, Action::Defend).unwrap();
        battle.submit(2, Action::Defend).unwrap();
        let all = render_log_tail(&battle, 100);
        let last = render_log_tail(&battle, 1);
        assert!(all.len() > 1);
        assert_eq!(last.len(), 1);
        assert_eq!(last[0], *all.last().unwrap());
    }

    #[test]
    fn test_summary_mentions_both_sides() {
        let battle = test_battle();
        let view = BattleView::new(&battle, 1).unwrap();
        let text = render_summary(&view);
        assert!(text.contains("Alice"));
        assert!(text.contains("Bob"));
        assert!(text.contains("Ember Knight"));
        assert!(text.contains("It is your move."));
    }

    #[test]
    fn test_summary_reports_outcomes() {
        let mut battle = Battle::with_seed(
            combatant(1, "Alice", &["World Serpent"]),
            combatant(2, "Bob", &["Gutter Rat"]),
            DEFAULT_TURN_CEILING,
            5,
        );
        while !battle.status().is_ended() {
            battle.submit(battle.acting_user(), Action::Attack).unwrap();
        }

        let winner_text = render_summary(&BattleView::new(&battle, 1).unwrap());
        assert!(winner_text.contains("Victory"));
        let loser_text = render_summary(&BattleView::new(&battle, 2).unwrap());
        assert!(loser_text.contains("Defeat"));
    }
}
