pub mod occurrence;
pub mod schedule;
pub mod seed;

pub use occurrence::*;
pub use schedule::*;
