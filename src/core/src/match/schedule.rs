use crate::r#match::{Match, MatchId};

const DEFAULT_MATCH_LIST_SIZE: usize = 10;

#[derive(Debug, Clone)]
pub struct MatchSchedule {
    items: Vec<Match>,
    next_id: MatchId,
}

impl Default for MatchSchedule {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchSchedule {
    pub fn new() -> Self {
        MatchSchedule {
            items: Vec::with_capacity(DEFAULT_MATCH_LIST_SIZE),
            next_id: 1,
        }
    }

    /// Empty and repeated opponents are accepted as given.
    pub fn schedule(&mut self, opponent: impl Into<String>) -> MatchId {
        let id = self.next_id;
        self.next_id += 1;

        self.items.push(Match::new(id, opponent));

        id
    }

    pub fn items(&self) -> &[Match] {
        &self.items
    }

    pub fn get(&self, match_id: MatchId) -> Option<&Match> {
        self.items.iter().find(|m| m.id() == match_id)
    }

    pub fn get_mut(&mut self, match_id: MatchId) -> Option<&mut Match> {
        self.items.iter_mut().find(|m| m.id() == match_id)
    }

    pub fn latest(&self) -> Option<&Match> {
        self.items.last()
    }

    /// Stops at `u32::MAX` instead of overflowing.
    pub fn runs_against(&self, opponent: &str) -> u32 {
        self.items
            .iter()
            .filter(|m| m.opponent() == opponent)
            .fold(0u32, |total, m| total.saturating_add(m.total_runs()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn schedule_assigns_increasing_ids_and_keeps_order() {
        let mut schedule = MatchSchedule::new();

        let first = schedule.schedule("Alpha");
        let second = schedule.schedule("Alpha");
        let third = schedule.schedule("");

        assert!(first < second && second < third);
        assert_eq!(3, schedule.len());
        assert_eq!(Some(third), schedule.latest().map(|m| m.id()));
        assert_eq!("", schedule.get(third).unwrap().opponent());
    }

    #[test]
    fn runs_against_sums_every_match_with_that_opponent() {
        let mut schedule = MatchSchedule::new();
        let mut player = Player::new(1, "Asha", 22, "Batsman");

        let home = schedule.schedule("Zeta");
        let away = schedule.schedule("Zeta");
        let other = schedule.schedule("Omega");

        schedule.get_mut(home).unwrap().add_player_performance(&mut player, 12, 0);
        schedule.get_mut(away).unwrap().add_player_performance(&mut player, 30, 1);
        schedule.get_mut(other).unwrap().add_player_performance(&mut player, 99, 0);

        assert_eq!(42, schedule.runs_against("Zeta"));
        assert_eq!(99, schedule.runs_against("Omega"));
        assert_eq!(0, schedule.runs_against("zeta"));
    }

    #[test]
    fn runs_against_saturates_across_matches() {
        let mut schedule = MatchSchedule::new();
        let mut player = Player::new(1, "Asha", 22, "Batsman");

        let first = schedule.schedule("X");
        let second = schedule.schedule("X");

        schedule.get_mut(first).unwrap().add_player_performance(&mut player, u32::MAX, 0);
        schedule.get_mut(second).unwrap().add_player_performance(&mut player, 5, 0);

        assert_eq!(u32::MAX, schedule.runs_against("X"));
        assert_eq!(u32::MAX, player.runs_scored());
    }

    #[test]
    fn unknown_match_is_not_found() {
        let schedule = MatchSchedule::new();

        assert!(schedule.get(1).is_none());
        assert!(schedule.latest().is_none());
    }
}
