use club_core::{Club, Person, Player};
use itertools::Itertools;
use std::fmt::Write;

pub fn squad(club: &Club) -> String {
    let mut report = format!("Club: {}\n", club.name());

    let coach = club
        .coach()
        .map(|coach| coach.to_string())
        .unwrap_or_else(|| "none".to_string());

    writeln!(report, "Coach: {}", coach).ok();

    report.push_str("Players:");

    let players = club
        .players()
        .iter()
        .map(|player| format!("[{}] {}", player.id(), player))
        .join("\n");

    if !players.is_empty() {
        report.push('\n');
        report.push_str(&players);
    }

    report
}

pub fn matches(club: &Club) -> String {
    let mut report = String::from("Matches Scheduled:");

    for fixture in club.matches() {
        write!(report, "\n[{}] Opponent: {}", fixture.id(), fixture.opponent()).ok();
    }

    report
}

pub fn performances(club: &Club) -> String {
    let mut report = String::from("Player Performances:\n");

    for fixture in club.matches() {
        writeln!(report, "Opponent: {}", fixture.opponent()).ok();
        report.push_str("Player Performances:\n");

        for (player_name, performance) in fixture.performances() {
            writeln!(report, "Player: {}, {}", player_name, performance).ok();
        }

        report.push('\n');
    }

    report.trim_end().to_string()
}

pub fn training_sessions(player: &Player) -> String {
    let history = player.training_history();

    let last_session = history
        .last_trained()
        .map(|date| date.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_else(|| "never".to_string());

    format!(
        "{} has attended {} training session(s).\nTotal hours: {}, Last session: {}",
        player.name(),
        player.training_sessions(),
        history.total_hours(),
        last_session
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use club_core::{Coach, TrainingRecord};

    fn club() -> Club {
        let mut club = Club::new("Riverside").with_coach(Coach::new("Darren", 52, 18));
        let a = club.add_player("A", 24, "Batsman");
        let b = club.add_player("B", 27, "Bowler");
        let zeta = club.schedule_match("Zeta");
        club.schedule_match("Omega");

        club.record_performance(zeta, b, 5, 0).unwrap();
        club.record_performance(zeta, a, 20, 1).unwrap();

        club
    }

    #[test]
    fn squad_lists_coach_and_players() {
        let report = squad(&club());

        assert_eq!(
            "Club: Riverside\n\
             Coach: Name: Darren, Age: 52, Experience: 18 years\n\
             Players:\n\
             [1] Name: A, Age: 24, Role: Batsman, Matches Played: 1, Runs Scored: 20, Wickets Taken: 1, Training Sessions: 0\n\
             [2] Name: B, Age: 27, Role: Bowler, Matches Played: 1, Runs Scored: 5, Wickets Taken: 0, Training Sessions: 0",
            report
        );
    }

    #[test]
    fn squad_of_empty_club() {
        assert_eq!("Club: Empty\nCoach: none\nPlayers:", squad(&Club::new("Empty")));
    }

    #[test]
    fn matches_lists_opponents_in_schedule_order() {
        assert_eq!(
            "Matches Scheduled:\n[1] Opponent: Zeta\n[2] Opponent: Omega",
            matches(&club())
        );
    }

    #[test]
    fn performances_grouped_by_match() {
        assert_eq!(
            "Player Performances:\n\
             Opponent: Zeta\n\
             Player Performances:\n\
             Player: A, Runs: 20, Wickets: 1\n\
             Player: B, Runs: 5, Wickets: 0\n\
             \n\
             Opponent: Omega\n\
             Player Performances:",
            performances(&club())
        );
    }

    #[test]
    fn training_sessions_show_hours_and_latest_date() {
        let mut club = Club::new("Riverside");
        let id = club.add_player("Asha", 22, "Bowler");

        for (day, hours) in [(4, 2), (11, 3), (7, 1)] {
            let date = NaiveDate::from_ymd_opt(2024, 3, day)
                .unwrap()
                .and_hms_opt(18, 30, 0)
                .unwrap();

            club.record_training(id, TrainingRecord::new(date, hours, 1, 0)).unwrap();
        }

        assert_eq!(
            "Asha has attended 3 training session(s).\nTotal hours: 6, Last session: 11.03.2024 18:30",
            training_sessions(club.player(id).unwrap())
        );
    }

    #[test]
    fn training_sessions_of_untrained_player() {
        let mut club = Club::new("Riverside");
        let id = club.add_player("Asha", 22, "Bowler");

        assert_eq!(
            "Asha has attended 0 training session(s).\nTotal hours: 0, Last session: never",
            training_sessions(club.player(id).unwrap())
        );
    }
}
