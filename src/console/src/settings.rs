use clap::Parser;
use club_core::DEFAULT_CLUB_NAME;

#[derive(Parser, Debug, Clone)]
#[command(name = "cricket-club")]
#[command(about = "Manage a cricket club roster, matches and training from the terminal")]
pub struct ConsoleSettings {
    /// Name of the club being managed
    #[arg(long, env = "CLUB_NAME", default_value = DEFAULT_CLUB_NAME)]
    pub club_name: String,

    /// Log filter passed to env_logger, e.g. "debug" or "club_core=trace"
    #[arg(long, env = "CLUB_LOG", default_value = "info")]
    pub log_filter: String,

    /// Echo every command before its response, useful with piped scripts
    #[arg(long, env = "CLUB_ECHO")]
    pub echo: bool,

    /// Prompt printed before each command
    #[arg(long, default_value = "> ")]
    pub prompt: String,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        ConsoleSettings {
            club_name: DEFAULT_CLUB_NAME.to_string(),
            log_filter: "info".to_string(),
            echo: false,
            prompt: "> ".to_string(),
        }
    }
}
