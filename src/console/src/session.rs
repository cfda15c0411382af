use crate::{Command, ConsoleResult, ConsoleSettings, Response};
use club_core::Club;
use log::{info, warn};
use std::io::{BufRead, Write};

pub struct ClubConsole {
    club: Club,
    settings: ConsoleSettings,
}

impl ClubConsole {
    pub fn new(settings: ConsoleSettings) -> Self {
        ClubConsole {
            club: Club::new(settings.club_name.clone()),
            settings,
        }
    }

    pub fn club(&self) -> &Club {
        &self.club
    }

    /// Runs until `quit` or end of input. Input mistakes are printed and
    /// the loop continues; IO failures end the session.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> ConsoleResult<()> {
        info!("console started for club: {}", self.club.name());

        self.prompt(&mut output)?;

        for line in input.lines() {
            let line = line?;

            if self.settings.echo {
                writeln!(output, "{}", line.trim())?;
            }

            match self.handle(&line) {
                Ok(Some(Response::Quit)) => {
                    writeln!(output, "{}", Response::Quit)?;
                    break;
                }
                Ok(Some(response)) => writeln!(output, "{}", response)?,
                Ok(None) => {}
                Err(err) if err.is_recoverable() => {
                    warn!("command failed: {}", err);
                    writeln!(output, "Error: {}", err)?;
                }
                Err(err) => return Err(err),
            }

            self.prompt(&mut output)?;
        }

        output.flush()?;

        info!("console stopped for club: {}", self.club.name());

        Ok(())
    }

    pub fn handle(&mut self, line: &str) -> ConsoleResult<Option<Response>> {
        match Command::parse(line)? {
            Some(command) => command.execute(&mut self.club).map(Some),
            None => Ok(None),
        }
    }

    fn prompt<W: Write>(&self, output: &mut W) -> ConsoleResult<()> {
        if !self.settings.prompt.is_empty() {
            write!(output, "{}", self.settings.prompt)?;
            output.flush()?;
        }

        Ok(())
    }
}
