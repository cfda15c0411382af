use club_core::ClubError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("{0}")]
    Club(#[from] ClubError),

    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    UnknownCommand(String),

    #[error("Missing {argument} for '{command}'")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Unexpected argument '{argument}' for '{command}'")]
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },

    #[error("Unterminated quote in input")]
    UnterminatedQuote,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConsoleError {
    /// Input mistakes are reported and the session goes on; IO failures end it.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ConsoleError::Club(_) => true,
            ConsoleError::UnknownCommand(_) => true,
            ConsoleError::MissingArgument { .. } => true,
            ConsoleError::UnexpectedArgument { .. } => true,
            ConsoleError::UnterminatedQuote => true,
            ConsoleError::Io(_) => false,
            ConsoleError::Json(_) => false,
        }
    }
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
