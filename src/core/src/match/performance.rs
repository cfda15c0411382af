use std::fmt::{Display, Formatter, Result};

/// Runs and wickets credited to one player within one match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Performance {
    pub runs: u32,
    pub wickets: u32,
}

impl Performance {
    pub fn new(runs: u32, wickets: u32) -> Self {
        Performance { runs, wickets }
    }
}

impl Display for Performance {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Runs: {}, Wickets: {}", self.runs, self.wickets)
    }
}
