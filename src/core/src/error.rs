use crate::{MatchId, PlayerId};
use thiserror::Error;

/// Failures reported back to whoever drives the club.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClubError {
    #[error("Invalid input for {field}: '{input}' is not a valid number")]
    InvalidNumber { field: &'static str, input: String },

    #[error("No players in the squad.")]
    EmptyRoster,

    #[error("No coach to remove.")]
    NoCoach,

    #[error("No match has been scheduled.")]
    NoMatchScheduled,

    #[error("No player with id = {0}")]
    UnknownPlayer(PlayerId),

    #[error("No match with id = {0}")]
    UnknownMatch(MatchId),
}

impl ClubError {
    pub fn invalid_number(field: &'static str, input: impl Into<String>) -> Self {
        ClubError::InvalidNumber {
            field,
            input: input.into(),
        }
    }
}

pub type ClubResult<T> = Result<T, ClubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_number_message_names_field_and_input() {
        let error = ClubError::invalid_number("age", "twenty");

        assert_eq!(
            "Invalid input for age: 'twenty' is not a valid number",
            error.to_string()
        );
    }

    #[test]
    fn precondition_messages_match_console_wording() {
        assert_eq!("No players in the squad.", ClubError::EmptyRoster.to_string());
        assert_eq!("No coach to remove.", ClubError::NoCoach.to_string());
        assert_eq!("No player with id = 7", ClubError::UnknownPlayer(7).to_string());
    }
}
