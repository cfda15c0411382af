pub mod coach;

pub use coach::*;
