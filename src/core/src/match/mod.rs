pub mod fixture;
pub mod performance;
pub mod schedule;

pub use fixture::*;
pub use performance::*;
pub use schedule::*;
