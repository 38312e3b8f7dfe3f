//! Rater context: the state layer handed to page components
//!
//! Consumers receive the context by dependency injection and hold it for the
//! life of the application. Queries return owned snapshots; all writes go
//! through the mutation methods so the at-most-one-rating-per-task invariant
//! cannot be bypassed.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use super::seed::{rater_seed, RaterSeed};
use super::stats::{self, RaterStats};
use super::types::{
    ComparisonTask, Rating, RatingChoice, RaterProfile, RaterProfileUpdate,
};
use super::views::{self, HistoryFilter};

/// Contract between the rater state layer and its consumers.
#[async_trait]
pub trait RaterContext: Send + Sync {
    /// All seeded tasks, in seed order.
    async fn tasks(&self) -> Vec<ComparisonTask>;

    /// All recorded ratings, oldest first.
    async fn ratings(&self) -> Vec<Rating>;

    async fn profile(&self) -> RaterProfile;

    /// Tasks with no rating yet, in seed order.
    async fn unrated_tasks(&self) -> Vec<ComparisonTask>;

    async fn is_task_rated(&self, task_id: &str) -> bool;

    /// The task at the current pointer position within the unrated list, or
    /// `None` when the pointer is out of range or everything is rated.
    async fn current_task(&self) -> Option<ComparisonTask>;

    /// Newest-first tail of the ratings list.
    async fn recent_ratings(&self, limit: usize) -> Vec<Rating>;

    /// Ratings matching the history page's search/filter/sort controls.
    async fn search_history(&self, filter: &HistoryFilter) -> Vec<Rating>;

    /// Dashboard statistics, projected from the collections at call time.
    async fn stats(&self) -> RaterStats;

    /// Record a judgment on the current task.
    ///
    /// Returns the created rating, or `None` (leaving the store untouched)
    /// when there is no current task. Appends the rating, folds the elapsed
    /// time into the profile's running average, and resets the task pointer
    /// to the start of the now-shorter unrated list.
    async fn submit_rating(
        &self,
        choice: RatingChoice,
        confidence: u8,
        reasoning: String,
        time_spent_ms: u64,
    ) -> Option<Rating>;

    /// Advance the task pointer, wrapping past the last unrated task.
    async fn skip_task(&self);

    /// Merge the supplied fields into the profile.
    async fn update_profile(&self, update: RaterProfileUpdate);
}

struct RaterState {
    tasks: Vec<ComparisonTask>,
    ratings: Vec<Rating>,
    profile: RaterProfile,
    current_index: usize,
}

/// In-memory implementation seeded once at construction.
///
/// Cheap to clone; clones share the same store.
#[derive(Clone)]
pub struct InMemoryRaterContext {
    state: Arc<RwLock<RaterState>>,
}

impl InMemoryRaterContext {
    /// Context seeded with the standard dataset.
    pub fn new() -> Self {
        Self::from_seed(rater_seed(Utc::now()))
    }

    /// Context seeded with caller-supplied data.
    pub fn from_seed(seed: RaterSeed) -> Self {
        Self {
            state: Arc::new(RwLock::new(RaterState {
                tasks: seed.tasks,
                ratings: seed.ratings,
                profile: seed.profile,
                current_index: 0,
            })),
        }
    }
}

impl Default for InMemoryRaterContext {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RaterContext for InMemoryRaterContext {
    async fn tasks(&self) -> Vec<ComparisonTask> {
        self.state.read().await.tasks.clone()
    }

    async fn ratings(&self) -> Vec<Rating> {
        self.state.read().await.ratings.clone()
    }

    async fn profile(&self) -> RaterProfile {
        self.state.read().await.profile.clone()
    }

    async fn unrated_tasks(&self) -> Vec<ComparisonTask> {
        let state = self.state.read().await;
        views::unrated_tasks(&state.tasks, &state.ratings)
    }

    async fn is_task_rated(&self, task_id: &str) -> bool {
        let state = self.state.read().await;
        views::is_task_rated(&state.ratings, task_id)
    }

    async fn current_task(&self) -> Option<ComparisonTask> {
        let state = self.state.read().await;
        views::unrated_tasks(&state.tasks, &state.ratings)
            .into_iter()
            .nth(state.current_index)
    }

    async fn recent_ratings(&self, limit: usize) -> Vec<Rating> {
        let state = self.state.read().await;
        views::recent_ratings(&state.ratings, limit)
    }

    async fn search_history(&self, filter: &HistoryFilter) -> Vec<Rating> {
        let state = self.state.read().await;
        views::search_history(&state.tasks, &state.ratings, filter)
    }

    async fn stats(&self) -> RaterStats {
        let state = self.state.read().await;
        stats::compute(&state.tasks, &state.ratings, Utc::now())
    }

    async fn submit_rating(
        &self,
        choice: RatingChoice,
        confidence: u8,
        reasoning: String,
        time_spent_ms: u64,
    ) -> Option<Rating> {
        let mut state = self.state.write().await;

        let unrated = views::unrated_tasks(&state.tasks, &state.ratings);
        let task = match unrated.get(state.current_index) {
            Some(task) => task,
            None => {
                warn!("submit_rating called with no current task, ignoring");
                return None;
            }
        };

        let rating = Rating {
            id: format!("rating-{}", Uuid::new_v4()),
            task_id: task.id.clone(),
            choice,
            confidence,
            reasoning,
            time_spent_ms,
            rated_at: Utc::now(),
            rater_name: state.profile.name.clone(),
        };

        // The rating must land before the pointer reset so the pointer is
        // interpreted against the shortened unrated list.
        state.ratings.push(rating.clone());
        state.profile.record_rating_time(time_spent_ms);
        state.current_index = 0;

        debug!(task_id = %rating.task_id, choice = %rating.choice, "rating submitted");
        Some(rating)
    }

    async fn skip_task(&self) {
        let mut state = self.state.write().await;
        let remaining = views::unrated_tasks(&state.tasks, &state.ratings).len();
        if state.current_index + 1 < remaining {
            state.current_index += 1;
        } else {
            state.current_index = 0;
        }
        debug!(index = state.current_index, "task skipped");
    }

    async fn update_profile(&self, update: RaterProfileUpdate) {
        let mut state = self.state.write().await;
        state.profile.apply(update);
        debug!("rater profile updated");
    }
}
