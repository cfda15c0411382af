mod command;
mod error;
mod input;
mod reports;
mod session;
mod settings;
mod snapshot;

pub use command::{Command, Response};
pub use error::{ConsoleError, ConsoleResult};
pub use input::{parse_number, tokenize};
pub use session::ClubConsole;
pub use settings::ConsoleSettings;
pub use snapshot::{ClubSnapshot, CoachSnapshot, MatchSnapshot, PerformanceRow, PlayerSnapshot};
