//! Data models for the rater dashboard

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two candidate responses on a comparison task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonItem {
    pub content: String,
    /// Model or pipeline that produced the response.
    pub source: String,
}

/// Difficulty tier assigned when the task was authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A prompt with two candidate responses awaiting judgment.
///
/// Tasks are created once at seed time and never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTask {
    pub id: String,
    pub prompt: String,
    pub category: String,
    pub response_a: ComparisonItem,
    pub response_b: ComparisonItem,
    pub difficulty: Difficulty,
}

/// The verdict recorded against a comparison task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatingChoice {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "tie")]
    Tie,
    #[serde(rename = "both_bad")]
    BothBad,
}

impl fmt::Display for RatingChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RatingChoice::A => "A",
            RatingChoice::B => "B",
            RatingChoice::Tie => "tie",
            RatingChoice::BothBad => "both_bad",
        };
        write!(f, "{label}")
    }
}

/// A recorded human judgment on one task.
///
/// Created exactly once per task by the submit operation; immutable
/// thereafter and never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: String,
    pub task_id: String,
    pub choice: RatingChoice,
    /// Self-reported confidence, 1 (guess) through 5 (certain).
    pub confidence: u8,
    pub reasoning: String,
    pub time_spent_ms: u64,
    pub rated_at: DateTime<Utc>,
    pub rater_name: String,
}

/// The rater's identity plus running performance aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaterProfile {
    pub name: String,
    pub email: String,
    pub expertise: Vec<String>,
    pub total_ratings: u32,
    pub average_time_ms: u64,
    /// Agreement with consensus raters, 0.0 to 1.0. Maintained upstream.
    pub agreement_rate: f64,
}

impl RaterProfile {
    /// Fold one more rating into the running average and bump the count.
    pub(crate) fn record_rating_time(&mut self, time_spent_ms: u64) {
        let n = f64::from(self.total_ratings);
        let avg = (self.average_time_ms as f64 * n + time_spent_ms as f64) / (n + 1.0);
        self.average_time_ms = avg.round() as u64;
        self.total_ratings += 1;
    }

    /// Merge an update request field by field. `None` leaves a field alone.
    pub(crate) fn apply(&mut self, update: RaterProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(expertise) = update.expertise {
            self.expertise = expertise;
        }
    }
}

/// Named-field partial update for [`RaterProfile`].
///
/// The running counters are maintained by the submit operation and cannot be
/// set through an update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RaterProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub expertise: Option<Vec<String>>,
}
