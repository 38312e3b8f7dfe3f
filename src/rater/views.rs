//! Pure derived views over the rater collections
//!
//! Every function here is side-effect free and reflects the slices it is
//! given at call time. The context methods wrap these with a read lock.

use std::collections::HashSet;

use super::types::{ComparisonTask, Rating, RatingChoice};

/// Tasks with no matching rating, in original seed order.
pub fn unrated_tasks(tasks: &[ComparisonTask], ratings: &[Rating]) -> Vec<ComparisonTask> {
    let rated: HashSet<&str> = ratings.iter().map(|r| r.task_id.as_str()).collect();
    tasks
        .iter()
        .filter(|t| !rated.contains(t.id.as_str()))
        .cloned()
        .collect()
}

pub fn is_task_rated(ratings: &[Rating], task_id: &str) -> bool {
    ratings.iter().any(|r| r.task_id == task_id)
}

/// Newest-first tail of the ratings list, as shown on the dashboard.
pub fn recent_ratings(ratings: &[Rating], limit: usize) -> Vec<Rating> {
    ratings.iter().rev().take(limit).cloned().collect()
}

/// Filter for the rating history view.
#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    /// Case-insensitive match against the task prompt or the rating reasoning.
    pub query: Option<String>,
    pub choice: Option<RatingChoice>,
    /// Oldest first when set; the history page defaults to newest first.
    pub ascending: bool,
}

pub fn search_history(
    tasks: &[ComparisonTask],
    ratings: &[Rating],
    filter: &HistoryFilter,
) -> Vec<Rating> {
    let query = filter.query.as_ref().map(|q| q.to_lowercase());
    let mut result: Vec<Rating> = ratings
        .iter()
        .filter(|r| match &query {
            None => true,
            Some(q) => {
                let prompt_matches = tasks
                    .iter()
                    .find(|t| t.id == r.task_id)
                    .map(|t| t.prompt.to_lowercase().contains(q))
                    .unwrap_or(false);
                prompt_matches || r.reasoning.to_lowercase().contains(q)
            }
        })
        .filter(|r| filter.choice.map(|c| r.choice == c).unwrap_or(true))
        .cloned()
        .collect();

    result.sort_by(|a, b| {
        if filter.ascending {
            a.rated_at.cmp(&b.rated_at)
        } else {
            b.rated_at.cmp(&a.rated_at)
        }
    });
    result
}
