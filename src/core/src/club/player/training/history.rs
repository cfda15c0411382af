use chrono::{NaiveDateTime, Utc};
use serde::Serialize;

const DEFAULT_TRAINING_HISTORY_SIZE: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct PlayerTrainingHistory {
    records: Vec<TrainingRecord>,
}

impl PlayerTrainingHistory {
    pub fn new() -> Self {
        PlayerTrainingHistory {
            records: Vec::with_capacity(DEFAULT_TRAINING_HISTORY_SIZE),
        }
    }

    pub fn add(&mut self, record: TrainingRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TrainingRecord] {
        &self.records
    }

    pub fn last_trained(&self) -> Option<NaiveDateTime> {
        self.records.iter().map(|r| r.date).max()
    }

    pub fn total_hours(&self) -> u32 {
        self.records
            .iter()
            .fold(0u32, |total, r| total.saturating_add(r.hours))
    }
}

/// One attended session. Batting and bowling hours are reported
/// separately from the session length and are not checked against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainingRecord {
    pub date: NaiveDateTime,
    pub hours: u32,
    pub batting_hours: u32,
    pub bowling_hours: u32,
}

impl TrainingRecord {
    pub fn new(date: NaiveDateTime, hours: u32, batting_hours: u32, bowling_hours: u32) -> Self {
        TrainingRecord {
            date,
            hours,
            batting_hours,
            bowling_hours,
        }
    }

    pub fn today(hours: u32, batting_hours: u32, bowling_hours: u32) -> Self {
        Self::new(Utc::now().naive_utc(), hours, batting_hours, bowling_hours)
    }
}
