use crate::club::{Coach, Player, PlayerCollection, PlayerId, TrainingRecord};
use crate::r#match::{Match, MatchId, MatchSchedule};
use crate::{ClubError, ClubResult};
use log::{debug, info};

pub const DEFAULT_CLUB_NAME: &str = "Cricket Club";

/// Aggregate root: the only owner of its players, coach and matches.
/// Everything outside reads through the accessors below.
#[derive(Debug, Clone)]
pub struct Club {
    name: String,

    players: PlayerCollection,

    coach: Option<Coach>,

    matches: MatchSchedule,

    next_player_id: PlayerId,
}

impl Default for Club {
    fn default() -> Self {
        Club::new(DEFAULT_CLUB_NAME)
    }
}

impl Club {
    pub fn new(name: impl Into<String>) -> Self {
        Club {
            name: name.into(),
            players: PlayerCollection::new(),
            coach: None,
            matches: MatchSchedule::new(),
            next_player_id: 1,
        }
    }

    pub fn with_coach(mut self, coach: Coach) -> Self {
        self.coach = Some(coach);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ─── Roster ──────────────────────────────────────────────────────

    pub fn add_player(&mut self, name: impl Into<String>, age: u32, role: impl Into<String>) -> PlayerId {
        let id = self.next_player_id;
        self.next_player_id += 1;

        let player = Player::new(id, name, age, role);

        info!("club {}: added player {}", self.name, player);

        self.players.add(player);

        id
    }

    /// Unknown ids leave the roster unchanged.
    pub fn remove_player(&mut self, player_id: PlayerId) -> Option<Player> {
        let removed = self.players.remove(player_id);

        match &removed {
            Some(player) => info!("club {}: removed player {}", self.name, player.id()),
            None => debug!("club {}: no player with id = {} to remove", self.name, player_id),
        }

        removed
    }

    pub fn players(&self) -> &[Player] {
        self.players.players()
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.get(player_id)
    }

    // ─── Coach ───────────────────────────────────────────────────────

    /// Replaces any current coach, handing the previous one back.
    pub fn set_coach(&mut self, coach: Coach) -> Option<Coach> {
        info!("club {}: coach set to {}", self.name, coach);

        self.coach.replace(coach)
    }

    pub fn remove_coach(&mut self) -> Option<Coach> {
        let removed = self.coach.take();

        if removed.is_some() {
            info!("club {}: coach removed", self.name);
        }

        removed
    }

    pub fn coach(&self) -> Option<&Coach> {
        self.coach.as_ref()
    }

    // ─── Matches ─────────────────────────────────────────────────────

    pub fn schedule_match(&mut self, opponent: impl Into<String>) -> MatchId {
        let opponent = opponent.into();
        let match_id = self.matches.schedule(opponent.clone());

        info!("club {}: match {} against '{}' scheduled", self.name, match_id, opponent);

        match_id
    }

    pub fn matches(&self) -> &[Match] {
        self.matches.items()
    }

    pub fn latest_match_id(&self) -> Option<MatchId> {
        self.matches.latest().map(|m| m.id())
    }

    pub fn record_performance(
        &mut self,
        match_id: MatchId,
        player_id: PlayerId,
        runs: u32,
        wickets: u32,
    ) -> ClubResult<()> {
        let fixture = self
            .matches
            .get_mut(match_id)
            .ok_or(ClubError::UnknownMatch(match_id))?;

        let player = self
            .players
            .get_mut(player_id)
            .ok_or(ClubError::UnknownPlayer(player_id))?;

        fixture.add_player_performance(player, runs, wickets);

        debug!(
            "club {}: match {} player {} runs = {}, wickets = {}",
            self.name, match_id, player_id, runs, wickets
        );

        Ok(())
    }

    /// Returns the player's session count after this one.
    pub fn record_training(&mut self, player_id: PlayerId, record: TrainingRecord) -> ClubResult<u32> {
        let player = self
            .players
            .get_mut(player_id)
            .ok_or(ClubError::UnknownPlayer(player_id))?;

        player.record_training(record);

        Ok(player.training_sessions())
    }

    /// 0 when no match against `opponent` exists.
    pub fn runs_against_opponent(&self, opponent: &str) -> u32 {
        self.matches.runs_against(opponent)
    }
}
