pub mod club;
pub mod person;
pub mod player;
pub mod staff;

pub use club::*;
pub use person::*;

// Player exports
pub use player::{
    Player, PlayerCollection, PlayerId, PlayerStatistics,
    PlayerTrainingHistory, TrainingRecord,
};

// Staff exports
pub use staff::Coach;
