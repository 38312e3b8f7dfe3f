//! Dashboard statistics for the rater variant
//!
//! Statistics are always computed as a projection over the task and rating
//! collections at call time. There is no second copy of these numbers to
//! keep in sync with the store.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::types::{ComparisonTask, Rating, RatingChoice};

/// How the recorded verdicts split across the four choices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceDistribution {
    pub a: u32,
    pub b: u32,
    pub tie: u32,
    pub both_bad: u32,
}

impl ChoiceDistribution {
    pub fn count(&self, choice: RatingChoice) -> u32 {
        match choice {
            RatingChoice::A => self.a,
            RatingChoice::B => self.b,
            RatingChoice::Tie => self.tie,
            RatingChoice::BothBad => self.both_bad,
        }
    }

    pub fn total(&self) -> u32 {
        self.a + self.b + self.tie + self.both_bad
    }

    fn bump(&mut self, choice: RatingChoice) {
        match choice {
            RatingChoice::A => self.a += 1,
            RatingChoice::B => self.b += 1,
            RatingChoice::Tie => self.tie += 1,
            RatingChoice::BothBad => self.both_bad += 1,
        }
    }
}

/// Ratings submitted on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u32,
}

/// Progress within one task category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub total: u32,
    pub completed: u32,
}

/// Aggregate dashboard statistics for the rater variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaterStats {
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub pending_tasks: u32,
    pub average_time_ms: u64,
    pub choice_distribution: ChoiceDistribution,
    /// Trailing seven days ending today, oldest first.
    pub daily_ratings: Vec<DailyCount>,
    /// Categories in first-seen seed order.
    pub category_breakdown: Vec<CategoryBreakdown>,
}

/// Project the dashboard statistics from the collections.
///
/// `now` anchors the trailing-week window so the projection stays pure.
pub fn compute(tasks: &[ComparisonTask], ratings: &[Rating], now: DateTime<Utc>) -> RaterStats {
    let total_tasks = tasks.len() as u32;
    let completed_tasks = ratings.len() as u32;

    let average_time_ms = if ratings.is_empty() {
        0
    } else {
        let total: u64 = ratings.iter().map(|r| r.time_spent_ms).sum();
        ((total as f64) / (ratings.len() as f64)).round() as u64
    };

    let mut choice_distribution = ChoiceDistribution::default();
    for rating in ratings {
        choice_distribution.bump(rating.choice);
    }

    let today = now.date_naive();
    let daily_ratings = (0..7)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            let count = ratings
                .iter()
                .filter(|r| r.rated_at.date_naive() == date)
                .count() as u32;
            DailyCount { date, count }
        })
        .collect();

    let mut category_breakdown: Vec<CategoryBreakdown> = Vec::new();
    for task in tasks {
        let completed = super::views::is_task_rated(ratings, &task.id);
        match category_breakdown
            .iter_mut()
            .find(|c| c.category == task.category)
        {
            Some(entry) => {
                entry.total += 1;
                if completed {
                    entry.completed += 1;
                }
            }
            None => category_breakdown.push(CategoryBreakdown {
                category: task.category.clone(),
                total: 1,
                completed: u32::from(completed),
            }),
        }
    }

    RaterStats {
        total_tasks,
        completed_tasks,
        pending_tasks: total_tasks.saturating_sub(completed_tasks),
        average_time_ms,
        choice_distribution,
        daily_ratings,
        category_breakdown,
    }
}
