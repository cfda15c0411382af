use crate::{ConsoleError, ConsoleResult};
use club_core::{ClubError, ClubResult};

/// Splits on whitespace; double quotes group words into one token and
/// `""` yields an empty token.
pub fn tokenize(line: &str) -> ConsoleResult<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        return Err(ConsoleError::UnterminatedQuote);
    }

    if has_token {
        tokens.push(current);
    }

    Ok(tokens)
}

pub fn parse_number(field: &'static str, text: &str) -> ClubResult<u32> {
    text.trim()
        .parse::<u32>()
        .map_err(|_| ClubError::invalid_number(field, text.trim()))
}

/// Positional arguments of one command line.
pub(crate) struct Arguments {
    command: &'static str,
    tokens: std::vec::IntoIter<String>,
}

impl Arguments {
    pub fn new(command: &'static str, tokens: Vec<String>) -> Self {
        Arguments {
            command,
            tokens: tokens.into_iter(),
        }
    }

    pub fn text(&mut self, argument: &'static str) -> ConsoleResult<String> {
        self.tokens.next().ok_or(ConsoleError::MissingArgument {
            command: self.command,
            argument,
        })
    }

    pub fn number(&mut self, argument: &'static str) -> ConsoleResult<u32> {
        let text = self.text(argument)?;

        Ok(parse_number(argument, &text)?)
    }

    pub fn optional_number(&mut self, argument: &'static str) -> ConsoleResult<Option<u32>> {
        match self.tokens.next() {
            Some(text) => Ok(Some(parse_number(argument, &text)?)),
            None => Ok(None),
        }
    }

    /// Joins everything left, so unquoted multi-word values still work.
    pub fn rest(&mut self, argument: &'static str) -> ConsoleResult<String> {
        let rest: Vec<String> = self.tokens.by_ref().collect();

        if rest.is_empty() {
            return Err(ConsoleError::MissingArgument {
                command: self.command,
                argument,
            });
        }

        Ok(rest.join(" "))
    }

    pub fn finish(mut self) -> ConsoleResult<()> {
        match self.tokens.next() {
            Some(argument) => Err(ConsoleError::UnexpectedArgument {
                command: self.command,
                argument,
            }),
            None => Ok(()),
        }
    }
}
