use crate::club::{Person, PersonAttributes, PlayerStatistics, PlayerTrainingHistory, TrainingRecord};
use log::debug;
use std::fmt::{Display, Formatter, Result};

pub type PlayerId = u32;

/// Counters change only through `play_match` and the training methods.
#[derive(Debug, Clone)]
pub struct Player {
    //person data
    id: PlayerId,
    attributes: PersonAttributes,

    //player data
    role: String,
    statistics: PlayerStatistics,
    training_sessions: u32,
    training_history: PlayerTrainingHistory,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, age: u32, role: impl Into<String>) -> Self {
        Player {
            id,
            attributes: PersonAttributes::new(name, age),
            role: role.into(),
            statistics: PlayerStatistics::new(),
            training_sessions: 0,
            training_history: PlayerTrainingHistory::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn play_match(&mut self, runs: u32, wickets: u32) {
        self.statistics.add_match(runs, wickets);

        debug!(
            "player {} played match: runs = {}, wickets = {}",
            self.id, runs, wickets
        );
    }

    pub fn attend_training_session(&mut self) {
        self.training_sessions = self.training_sessions.saturating_add(1);
    }

    pub fn record_training(&mut self, record: TrainingRecord) {
        self.attend_training_session();
        self.training_history.add(record);

        debug!(
            "player {} attended training session #{}",
            self.id, self.training_sessions
        );
    }

    #[inline]
    pub fn matches_played(&self) -> u32 {
        self.statistics.matches_played
    }

    #[inline]
    pub fn runs_scored(&self) -> u32 {
        self.statistics.runs_scored
    }

    #[inline]
    pub fn wickets_taken(&self) -> u32 {
        self.statistics.wickets_taken
    }

    #[inline]
    pub fn training_sessions(&self) -> u32 {
        self.training_sessions
    }

    pub fn statistics(&self) -> PlayerStatistics {
        self.statistics
    }

    pub fn training_history(&self) -> &PlayerTrainingHistory {
        &self.training_history
    }
}

impl Person for Player {
    fn attributes(&self) -> &PersonAttributes {
        &self.attributes
    }
}

//DISPLAY
impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{}, Role: {}, Matches Played: {}, Runs Scored: {}, Wickets Taken: {}, Training Sessions: {}",
            self.attributes,
            self.role,
            self.statistics.matches_played,
            self.statistics.runs_scored,
            self.statistics.wickets_taken,
            self.training_sessions
        )
    }
}

const DEFAULT_SQUAD_SIZE: usize = 16;

/// Players are told apart by id only; names may repeat.
#[derive(Debug, Clone)]
pub struct PlayerCollection {
    players: Vec<Player>,
}

impl Default for PlayerCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerCollection {
    pub fn new() -> Self {
        PlayerCollection {
            players: Vec::with_capacity(DEFAULT_SQUAD_SIZE),
        }
    }

    pub fn add(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn remove(&mut self, player_id: PlayerId) -> Option<Player> {
        let player_idx = self.players.iter().position(|p| p.id == player_id)?;

        Some(self.players.remove(player_idx))
    }

    pub fn get(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn get_mut(&mut self, player_id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    pub fn by_name(&self, name: &str) -> Vec<&Player> {
        self.players.iter().filter(|p| p.name() == name).collect()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
