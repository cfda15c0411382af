use club_core::{Club, Match, Person, Player, TrainingRecord};
use serde::Serialize;

/// Read-only view of a club for display and export.
#[derive(Debug, Serialize)]
pub struct ClubSnapshot<'a> {
    pub name: &'a str,
    pub coach: Option<CoachSnapshot<'a>>,
    pub players: Vec<PlayerSnapshot<'a>>,
    pub matches: Vec<MatchSnapshot<'a>>,
}

#[derive(Debug, Serialize)]
pub struct CoachSnapshot<'a> {
    pub name: &'a str,
    pub age: u32,
    pub experience_years: u32,
}

#[derive(Debug, Serialize)]
pub struct PlayerSnapshot<'a> {
    pub id: u32,
    pub name: &'a str,
    pub age: u32,
    pub role: &'a str,
    pub matches_played: u32,
    pub runs_scored: u32,
    pub wickets_taken: u32,
    pub training_sessions: u32,
    pub training_hours: u32,
    pub training: &'a [TrainingRecord],
}

#[derive(Debug, Serialize)]
pub struct MatchSnapshot<'a> {
    pub id: u32,
    pub opponent: &'a str,
    pub total_runs: u32,
    pub performances: Vec<PerformanceRow<'a>>,
}

#[derive(Debug, Serialize)]
pub struct PerformanceRow<'a> {
    pub player: &'a str,
    pub runs: u32,
    pub wickets: u32,
}

impl<'a> ClubSnapshot<'a> {
    pub fn from_club(club: &'a Club) -> Self {
        ClubSnapshot {
            name: club.name(),
            coach: club.coach().map(|coach| CoachSnapshot {
                name: coach.name(),
                age: coach.age(),
                experience_years: coach.experience_years(),
            }),
            players: club.players().iter().map(PlayerSnapshot::from_player).collect(),
            matches: club.matches().iter().map(MatchSnapshot::from_match).collect(),
        }
    }
}

impl<'a> PlayerSnapshot<'a> {
    fn from_player(player: &'a Player) -> Self {
        PlayerSnapshot {
            id: player.id(),
            name: player.name(),
            age: player.age(),
            role: player.role(),
            matches_played: player.matches_played(),
            runs_scored: player.runs_scored(),
            wickets_taken: player.wickets_taken(),
            training_sessions: player.training_sessions(),
            training_hours: player.training_history().total_hours(),
            training: player.training_history().records(),
        }
    }
}

impl<'a> MatchSnapshot<'a> {
    fn from_match(fixture: &'a Match) -> Self {
        MatchSnapshot {
            id: fixture.id(),
            opponent: fixture.opponent(),
            total_runs: fixture.total_runs(),
            performances: fixture
                .performances()
                .into_iter()
                .map(|(player, performance)| PerformanceRow {
                    player,
                    runs: performance.runs,
                    wickets: performance.wickets,
                })
                .collect(),
        }
    }
}
