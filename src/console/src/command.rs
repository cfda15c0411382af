use crate::input::{tokenize, Arguments};
use crate::{reports, ClubSnapshot, ConsoleError, ConsoleResult};
use club_core::{Club, ClubError, Coach, MatchId, Person, PlayerId, TrainingRecord};
use log::debug;
use std::fmt::{Display, Formatter};

pub const HELP: &str = "\
Commands:
  add-player <name> <age> <role>
  remove-player <player-id>
  add-coach <name> <age> <experience-years>
  remove-coach
  squad
  schedule <opponent>
  matches
  runs-against <opponent>
  record <player-id> <runs> <wickets> [match-id]
  performances
  train <player-id> <hours> <batting-hours> <bowling-hours>
  training <player-id>
  export
  help
  quit
Use double quotes for names with spaces, e.g. add-player \"Mary Jane\" 24 Batsman";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddPlayer { name: String, age: u32, role: String },
    RemovePlayer { player_id: PlayerId },
    AddCoach { name: String, age: u32, experience_years: u32 },
    RemoveCoach,
    Squad,
    ScheduleMatch { opponent: String },
    Matches,
    RunsAgainst { opponent: String },
    RecordPerformance {
        player_id: PlayerId,
        runs: u32,
        wickets: u32,
        match_id: Option<MatchId>,
    },
    Performances,
    RecordTraining {
        player_id: PlayerId,
        hours: u32,
        batting_hours: u32,
        bowling_hours: u32,
    },
    TrainingSessions { player_id: PlayerId },
    Export,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Ack(String),
    Report(String),
    Quit,
}

impl Display for Response {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Response::Ack(message) | Response::Report(message) => write!(f, "{}", message),
            Response::Quit => write!(f, "Bye."),
        }
    }
}

impl Command {
    /// `Ok(None)` for blank lines and `#` comments.
    pub fn parse(line: &str) -> ConsoleResult<Option<Command>> {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut tokens = tokenize(line)?;
        if tokens.is_empty() {
            return Ok(None);
        }

        let verb = tokens.remove(0);

        let command = match verb.to_lowercase().as_str() {
            "add-player" => {
                let mut args = Arguments::new("add-player", tokens);
                let name = args.text("name")?;
                let age = args.number("age")?;
                let role = args.rest("role")?;
                args.finish()?;

                Command::AddPlayer { name, age, role }
            }
            "remove-player" => {
                let mut args = Arguments::new("remove-player", tokens);
                let player_id = args.number("player id")?;
                args.finish()?;

                Command::RemovePlayer { player_id }
            }
            "add-coach" => {
                let mut args = Arguments::new("add-coach", tokens);
                let name = args.text("name")?;
                let age = args.number("age")?;
                let experience_years = args.number("experience")?;
                args.finish()?;

                Command::AddCoach {
                    name,
                    age,
                    experience_years,
                }
            }
            "schedule" => {
                let mut args = Arguments::new("schedule", tokens);

                Command::ScheduleMatch {
                    opponent: args.rest("opponent")?,
                }
            }
            "runs-against" => {
                let mut args = Arguments::new("runs-against", tokens);

                Command::RunsAgainst {
                    opponent: args.rest("opponent")?,
                }
            }
            "record" => {
                let mut args = Arguments::new("record", tokens);
                let player_id = args.number("player id")?;
                let runs = args.number("runs")?;
                let wickets = args.number("wickets")?;
                let match_id = args.optional_number("match id")?;
                args.finish()?;

                Command::RecordPerformance {
                    player_id,
                    runs,
                    wickets,
                    match_id,
                }
            }
            "train" => {
                let mut args = Arguments::new("train", tokens);
                let player_id = args.number("player id")?;
                let hours = args.number("hours")?;
                let batting_hours = args.number("batting hours")?;
                let bowling_hours = args.number("bowling hours")?;
                args.finish()?;

                Command::RecordTraining {
                    player_id,
                    hours,
                    batting_hours,
                    bowling_hours,
                }
            }
            "training" => {
                let mut args = Arguments::new("training", tokens);
                let player_id = args.number("player id")?;
                args.finish()?;

                Command::TrainingSessions { player_id }
            }
            "remove-coach" => Self::no_arguments("remove-coach", tokens, Command::RemoveCoach)?,
            "squad" => Self::no_arguments("squad", tokens, Command::Squad)?,
            "matches" => Self::no_arguments("matches", tokens, Command::Matches)?,
            "performances" => Self::no_arguments("performances", tokens, Command::Performances)?,
            "export" => Self::no_arguments("export", tokens, Command::Export)?,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(ConsoleError::UnknownCommand(verb)),
        };

        Ok(Some(command))
    }

    fn no_arguments(
        name: &'static str,
        tokens: Vec<String>,
        command: Command,
    ) -> ConsoleResult<Command> {
        Arguments::new(name, tokens).finish()?;

        Ok(command)
    }

    pub fn execute(self, club: &mut Club) -> ConsoleResult<Response> {
        debug!("execute command: {:?}", self);

        let response = match self {
            Command::AddPlayer { name, age, role } => {
                let player_id = club.add_player(name, age, role);

                Response::Ack(format!("Player added successfully (id {}).", player_id))
            }
            Command::RemovePlayer { player_id } => {
                if club.players().is_empty() {
                    return Err(ClubError::EmptyRoster.into());
                }

                match club.remove_player(player_id) {
                    Some(_) => Response::Ack("Player removed successfully.".to_string()),
                    None => Response::Ack(format!(
                        "No player with id {} in the squad; roster unchanged.",
                        player_id
                    )),
                }
            }
            Command::AddCoach {
                name,
                age,
                experience_years,
            } => {
                club.set_coach(Coach::new(name, age, experience_years));

                Response::Ack("Coach added successfully.".to_string())
            }
            Command::RemoveCoach => {
                club.remove_coach().ok_or(ClubError::NoCoach)?;

                Response::Ack("Coach removed successfully.".to_string())
            }
            Command::Squad => Response::Report(reports::squad(club)),
            Command::ScheduleMatch { opponent } => {
                club.schedule_match(opponent.clone());

                Response::Ack(format!("Match against {} scheduled successfully.", opponent))
            }
            Command::Matches => Response::Report(reports::matches(club)),
            Command::RunsAgainst { opponent } => {
                let total_runs = club.runs_against_opponent(&opponent);

                Response::Report(format!(
                    "Total runs scored against {}: {}",
                    opponent, total_runs
                ))
            }
            Command::RecordPerformance {
                player_id,
                runs,
                wickets,
                match_id,
            } => {
                if club.players().is_empty() {
                    return Err(ClubError::EmptyRoster.into());
                }

                let match_id = match match_id {
                    Some(match_id) => match_id,
                    None => club.latest_match_id().ok_or(ClubError::NoMatchScheduled)?,
                };

                club.record_performance(match_id, player_id, runs, wickets)?;

                Response::Ack("Performance recorded successfully.".to_string())
            }
            Command::Performances => Response::Report(reports::performances(club)),
            Command::RecordTraining {
                player_id,
                hours,
                batting_hours,
                bowling_hours,
            } => {
                if club.players().is_empty() {
                    return Err(ClubError::EmptyRoster.into());
                }

                let record = TrainingRecord::today(hours, batting_hours, bowling_hours);
                club.record_training(player_id, record)?;

                let name = club.player(player_id).map(|p| p.name()).unwrap_or_default();

                Response::Ack(format!(
                    "Training session recorded successfully for {}.",
                    name
                ))
            }
            Command::TrainingSessions { player_id } => {
                if club.players().is_empty() {
                    return Err(ClubError::EmptyRoster.into());
                }

                let player = club
                    .player(player_id)
                    .ok_or(ClubError::UnknownPlayer(player_id))?;

                Response::Report(reports::training_sessions(player))
            }
            Command::Export => {
                let snapshot = ClubSnapshot::from_club(club);

                Response::Report(serde_json::to_string_pretty(&snapshot)?)
            }
            Command::Help => Response::Report(HELP.to_string()),
            Command::Quit => Response::Quit,
        };

        Ok(response)
    }
}
