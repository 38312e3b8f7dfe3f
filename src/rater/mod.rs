//! Rater dashboard state layer
//!
//! Owns the comparison tasks and the ratings recorded against them, exposes
//! the unrated-queue navigation used by the compare page, and projects the
//! dashboard statistics on demand.

pub mod context;
pub mod seed;
pub mod stats;
pub mod types;
pub mod views;

pub use context::{InMemoryRaterContext, RaterContext};
pub use seed::{rater_seed, RaterSeed};
pub use stats::{CategoryBreakdown, ChoiceDistribution, DailyCount, RaterStats};
pub use types::{
    ComparisonItem, ComparisonTask, Difficulty, Rating, RatingChoice, RaterProfile,
    RaterProfileUpdate,
};
pub use views::HistoryFilter;

#[cfg(test)]
mod tests;
