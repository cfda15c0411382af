pub mod player;
pub mod statistics;
pub mod training;

pub use player::*;
pub use statistics::*;
pub use training::*;
