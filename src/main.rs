use clap::Parser;
use club_console::{ClubConsole, ConsoleSettings};
use env_logger::Env;
use log::info;
use std::io;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let settings = ConsoleSettings::parse();

    env_logger::Builder::from_env(Env::default()
        .default_filter_or(settings.log_filter.as_str())
    ).init();

    info!("cricket club console: {}", settings.club_name);

    let mut console = ClubConsole::new(settings);

    console.run(io::stdin().lock(), io::stdout().lock())?;

    info!(
        "session finished: {} players, {} matches",
        console.club().players().len(),
        console.club().matches().len()
    );

    Ok(())
}
