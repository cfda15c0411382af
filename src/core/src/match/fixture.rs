use crate::club::{Person, Player};
use crate::r#match::Performance;
use itertools::Itertools;
use log::debug;
use std::collections::HashMap;

pub type MatchId = u32;

/// A fixture against a named opponent.
///
/// Performances are keyed by player name, so two players sharing a name
/// overwrite each other's entry within the same match.
#[derive(Debug, Clone)]
pub struct Match {
    id: MatchId,
    opponent: String,
    performances: HashMap<String, Performance>,
}

impl Match {
    pub fn new(id: MatchId, opponent: impl Into<String>) -> Self {
        Match {
            id,
            opponent: opponent.into(),
            performances: HashMap::new(),
        }
    }

    pub fn id(&self) -> MatchId {
        self.id
    }

    pub fn opponent(&self) -> &str {
        &self.opponent
    }

    /// Stores the figures for this match and credits them to the player's
    /// career totals. Calling it twice for the same player replaces the
    /// match entry but counts the career totals twice.
    pub fn add_player_performance(&mut self, player: &mut Player, runs: u32, wickets: u32) {
        let previous = self
            .performances
            .insert(player.name().to_string(), Performance::new(runs, wickets));

        if let Some(previous) = previous {
            debug!(
                "match {}: replaced performance of {} ({})",
                self.id,
                player.name(),
                previous
            );
        }

        player.play_match(runs, wickets);
    }

    pub fn performance(&self, player_name: &str) -> Option<Performance> {
        self.performances.get(player_name).copied()
    }

    pub fn runs_map(&self) -> HashMap<String, u32> {
        self.performances
            .iter()
            .map(|(name, p)| (name.clone(), p.runs))
            .collect()
    }

    pub fn wickets_map(&self) -> HashMap<String, u32> {
        self.performances
            .iter()
            .map(|(name, p)| (name.clone(), p.wickets))
            .collect()
    }

    /// Entries ordered by player name.
    pub fn performances(&self) -> Vec<(&str, Performance)> {
        self.performances
            .iter()
            .sorted_by(|a, b| a.0.cmp(b.0))
            .map(|(name, p)| (name.as_str(), *p))
            .collect()
    }

    /// Stops at `u32::MAX` instead of overflowing.
    pub fn total_runs(&self) -> u32 {
        self.performances
            .values()
            .fold(0u32, |total, p| total.saturating_add(p.runs))
    }

    pub fn has_performances(&self) -> bool {
        !self.performances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_match_has_no_performances() {
        let fixture = Match::new(1, "Zeta");

        assert_eq!("Zeta", fixture.opponent());
        assert!(!fixture.has_performances());
        assert_eq!(0, fixture.total_runs());
    }

    #[test]
    fn performance_updates_match_and_player() {
        let mut fixture = Match::new(1, "Zeta");
        let mut player = Player::new(1, "Asha", 22, "Batsman");

        fixture.add_player_performance(&mut player, 34, 2);

        assert_eq!(Some(Performance::new(34, 2)), fixture.performance("Asha"));
        assert_eq!(Some(&34), fixture.runs_map().get("Asha"));
        assert_eq!(Some(&2), fixture.wickets_map().get("Asha"));
        assert_eq!(1, player.matches_played());
        assert_eq!(34, player.runs_scored());
    }

    #[test]
    fn repeated_performance_overwrites_match_but_double_counts_player() {
        let mut fixture = Match::new(1, "Zeta");
        let mut player = Player::new(1, "Asha", 22, "Batsman");

        fixture.add_player_performance(&mut player, 10, 1);
        fixture.add_player_performance(&mut player, 15, 0);

        assert_eq!(15, fixture.total_runs());
        assert_eq!(2, player.matches_played());
        assert_eq!(25, player.runs_scored());
        assert_eq!(1, player.wickets_taken());
    }

    #[test]
    fn total_runs_saturates_at_max() {
        let mut fixture = Match::new(1, "X");
        let mut big = Player::new(1, "Big", 30, "Batsman");
        let mut small = Player::new(2, "Small", 19, "Batsman");

        fixture.add_player_performance(&mut big, u32::MAX, 0);
        fixture.add_player_performance(&mut small, 1, 0);

        assert_eq!(u32::MAX, fixture.total_runs());
    }

    #[test]
    fn snapshots_do_not_alias_match_state() {
        let mut fixture = Match::new(1, "Zeta");
        let mut player = Player::new(1, "Asha", 22, "Batsman");
        fixture.add_player_performance(&mut player, 10, 1);

        let mut runs = fixture.runs_map();
        runs.insert("Asha".to_string(), 999);

        assert_eq!(10, fixture.total_runs());
    }

    #[test]
    fn performances_are_sorted_by_name() {
        let mut fixture = Match::new(1, "Zeta");
        let mut zed = Player::new(1, "Zed", 30, "Bowler");
        let mut amy = Player::new(2, "Amy", 25, "Batsman");

        fixture.add_player_performance(&mut zed, 3, 4);
        fixture.add_player_performance(&mut amy, 40, 0);

        let names: Vec<&str> = fixture.performances().iter().map(|(n, _)| *n).collect();
        assert_eq!(vec!["Amy", "Zed"], names);
    }
}
