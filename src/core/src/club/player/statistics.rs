/// Career totals accumulated across every recorded match. Counters stop at
/// `u32::MAX` instead of wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStatistics {
    pub matches_played: u32,
    pub runs_scored: u32,
    pub wickets_taken: u32,
}

impl PlayerStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_match(&mut self, runs: u32, wickets: u32) {
        self.matches_played = self.matches_played.saturating_add(1);
        self.runs_scored = self.runs_scored.saturating_add(runs);
        self.wickets_taken = self.wickets_taken.saturating_add(wickets);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_match_accumulates_all_counters() {
        let mut statistics = PlayerStatistics::new();

        statistics.add_match(45, 0);
        statistics.add_match(12, 3);

        assert_eq!(2, statistics.matches_played);
        assert_eq!(57, statistics.runs_scored);
        assert_eq!(3, statistics.wickets_taken);
    }

    #[test]
    fn add_match_saturates_at_max() {
        let mut statistics = PlayerStatistics::new();

        statistics.add_match(u32::MAX, u32::MAX);
        statistics.add_match(1, 1);

        assert_eq!(2, statistics.matches_played);
        assert_eq!(u32::MAX, statistics.runs_scored);
        assert_eq!(u32::MAX, statistics.wickets_taken);
    }
}
