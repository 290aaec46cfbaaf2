mod moves;
pub mod scalars;
mod search;

pub use moves::Move;
pub use scalars::*;
pub use search::SearchStats;
