//! Combatant (one side of a battle)

#[cfg(feature = "serde")]
use serde::Serialize;

use super::fighter::Fighter;

/// A battle participant owning a team of fighters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Combatant {
    /// Chat-platform user id
    pub user_id: u64,
    /// Display name
    pub name: String,
    /// Team in pick order, already reduced by the opponent's bans
    pub team: Vec<Fighter>,
    /// Index of the fighter currently on the field
    pub active: usize,
    /// Names this side banned from the opposing roster
    pub bans: Vec<String>,
}

impl Combatant {
    /// Create a combatant with the first fighter active
    pub fn new(user_id: u64, name: impl Into<String>, team: Vec<Fighter>, bans: Vec<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
            team,
            active: 0,
            bans,
        }
    }

    /// The fighter currently on the field
    pub fn active_fighter(&self) -> &Fighter {
        &self.team[self.active]
    }

    /// The fighter currently on the field, mutably
    pub fn active_fighter_mut(&mut self) -> &mut Fighter {
        &mut self.team[self.active]
    }

    /// Get a team member by index
    pub fn fighter(&self, index: usize) -> Option<&Fighter> {
        self.team.get(index)
    }

    /// Fighters still standing
    pub fn alive_count(&self) -> usize {
        self.team.iter().filter(|f| f.is_alive()).count()
    }

    /// Whether every fighter is down
    pub fn all_down(&self) -> bool {
        self.team.iter().all(|f| !f.is_alive())
    }

    /// First living fighter in team order, skipping the active slot
    pub fn next_living(&self) -> Option<usize> {
        self.team
            .iter()
            .enumerate()
            .find(|(i, f)| *i != self.active && f.is_alive())
            .map(|(i, _)| i)
    }

    /// Benched fighters that could be switched in
    pub fn bench(&self) -> impl Iterator<Item = (usize, &Fighter)> {
        self.team
            .iter()
            .enumerate()
            .filter(move |(i, f)| *i != self.active && f.is_alive())
    }

    /// Summed HP across the team, the ceiling tiebreak value
    pub fn team_hp(&self) -> u32 {
        self.team.iter().map(|f| f.current_hp).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rumble_roster::fighter;

    fn test_combatant() -> Combatant {
        let team = ["Ember Knight", "Frost Adept", "Thorn Witch"]
            .iter()
            .map(|name| Fighter::from_entry(fighter(name).unwrap()))
            .collect();
        Combatant::new(1, "Alice", team, vec!["Storm Caller".to_string()])
    }

    #[test]
    fn test_new_starts_on_first_fighter() {
        let c = test_combatant();
        assert_eq!(c.active, 0);
        assert_eq!(c.active_fighter().name, "Ember Knight");
        assert_eq!(c.alive_count(), 3);
        assert!(!c.all_down());
    }

    #[test]
    fn test_next_living_in_team_order() {
        let mut c = test_combatant();
        assert_eq!(c.next_living(), Some(1));

        // Knock out the second fighter; the third is next
        c.team[1].current_hp = 0;
        assert_eq!(c.next_living(), Some(2));

        // Active slot changes, so the first fighter becomes eligible
        c.active = 2;
        assert_eq!(c.next_living(), Some(0));

        c.team[0].current_hp = 0;
        assert_eq!(c.next_living(), None);
    }

    #[test]
    fn test_bench_excludes_active_and_downed() {
        let mut c = test_combatant();
        c.team[2].current_hp = 0;

        let bench: Vec<_> = c.bench().map(|(i, _)| i).collect();
        assert_eq!(bench, vec![1]);
    }

    #[test]
    fn test_all_down_and_team_hp() {
        let mut c = test_combatant();
        let full = c.team_hp();
        assert!(full > 0);

        for f in &mut c.team {
            f.current_hp = 0;
        }
        assert!(c.all_down());
        assert_eq!(c.team_hp(), 0);
    }
}
