pub mod club;
pub mod error;
pub mod r#match;

pub use error::{ClubError, ClubResult};

// Re-export club items
pub use club::{
    // Club itself
    Club, DEFAULT_CLUB_NAME,
    // Person exports
    Person, PersonAttributes,
    // Player exports
    Player, PlayerCollection, PlayerId, PlayerStatistics,
    PlayerTrainingHistory, TrainingRecord,
    // Staff exports
    Coach,
};

// Re-export match items
pub use r#match::{Match, MatchId, MatchSchedule, Performance};
