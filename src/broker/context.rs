//! Broker context: the state layer handed to page components
//!
//! Same shape as the rater context: dependency-injected, seeded once at
//! construction, queries return owned snapshots, and the only mutation path
//! is the methods below. The bind transition is the single state change this
//! layer drives; every other submission status arrives from upstream.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

use super::deferred::BindHandle;
use super::seed::{broker_seed, BrokerSeed};
use super::stats::{self, BrokerStats};
use super::types::{
    BrokerProfile, BrokerProfileUpdate, CarrierQuote, InsuranceLine, QuoteStatus, Submission,
    SubmissionStatus,
};
use super::views::{self, SubmissionFilter};

/// Contract between the broker state layer and its consumers.
#[async_trait]
pub trait BrokerContext: Send + Sync {
    /// All submissions, in seed order.
    async fn submissions(&self) -> Vec<Submission>;

    /// Direct lookup; `None` when the id is unknown.
    async fn submission(&self, submission_id: &str) -> Option<Submission>;

    /// Submissions whose status is neither bound nor declined.
    async fn active_submissions(&self) -> Vec<Submission>;

    /// Submissions the compare page can open: quoted panels that are neither
    /// terminal nor drafts.
    async fn quotable_submissions(&self) -> Vec<Submission>;

    /// Quotes for one line on one submission, order preserved. Empty when
    /// the submission is unknown.
    async fn quotes_for_line(&self, submission_id: &str, line: InsuranceLine)
        -> Vec<CarrierQuote>;

    /// Submissions matching the list page's search/filter/sort controls.
    async fn search_submissions(&self, filter: &SubmissionFilter) -> Vec<Submission>;

    async fn profile(&self) -> BrokerProfile;

    /// Dashboard statistics, projected from the collection at call time.
    async fn stats(&self) -> BrokerStats;

    /// Mark a quote as the working selection on a submission.
    ///
    /// Sets `selected_quote_id` only: no status change, idempotent, and the
    /// quote id is deliberately not validated against the panel (callers
    /// pass ids straight from rendered quote cards).
    async fn select_quote(&self, submission_id: &str, quote_id: &str) -> Result<()>;

    /// Bind a quote: submission to `Bound`, the quote to `Bound` and no
    /// longer bindable, selection pinned to the bound quote.
    ///
    /// Irreversible; re-invocation re-applies the same end state. Unknown
    /// submission or quote ids produce a not-found error and leave the store
    /// untouched.
    async fn bind_quote(&self, submission_id: &str, quote_id: &str) -> Result<()>;

    /// Merge the supplied fields into the profile.
    async fn update_profile(&self, update: BrokerProfileUpdate);
}

struct BrokerState {
    submissions: Vec<Submission>,
    profile: BrokerProfile,
}

/// In-memory implementation seeded once at construction.
///
/// Cheap to clone; clones share the same store, which is what lets a
/// deferred bind task outlive the call that scheduled it.
#[derive(Clone)]
pub struct InMemoryBrokerContext {
    state: Arc<RwLock<BrokerState>>,
}

impl InMemoryBrokerContext {
    /// Delay between selecting a quote and the deferred bind landing.
    pub const DEFAULT_BIND_DELAY: Duration = Duration::from_millis(1200);

    /// Context seeded with the standard dataset.
    pub fn new() -> Self {
        Self::from_seed(broker_seed(Utc::now()))
    }

    /// Context seeded with caller-supplied data.
    pub fn from_seed(seed: BrokerSeed) -> Self {
        Self {
            state: Arc::new(RwLock::new(BrokerState {
                submissions: seed.submissions,
                profile: seed.profile,
            })),
        }
    }

    /// Select now, bind after `delay`.
    ///
    /// The returned [`BindHandle`] aborts the pending bind when dropped, so
    /// a consumer that is torn down mid-delay cancels the mutation instead
    /// of leaving it to fire against a disposed view. A bind that does fire
    /// re-validates its target and discards a not-found result with a
    /// warning.
    pub async fn schedule_bind(
        &self,
        submission_id: &str,
        quote_id: &str,
        delay: Duration,
    ) -> Result<BindHandle> {
        self.select_quote(submission_id, quote_id).await?;

        let ctx = self.clone();
        let sid = submission_id.to_string();
        let qid = quote_id.to_string();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(err) = ctx.bind_quote(&sid, &qid).await {
                warn!(%err, submission_id = %sid, quote_id = %qid, "deferred bind dropped");
            }
        });

        debug!(submission_id, quote_id, ?delay, "bind scheduled");
        Ok(BindHandle::new(task))
    }
}

impl Default for InMemoryBrokerContext {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BrokerContext for InMemoryBrokerContext {
    async fn submissions(&self) -> Vec<Submission> {
        self.state.read().await.submissions.clone()
    }

    async fn submission(&self, submission_id: &str) -> Option<Submission> {
        let state = self.state.read().await;
        state
            .submissions
            .iter()
            .find(|s| s.id == submission_id)
            .cloned()
    }

    async fn active_submissions(&self) -> Vec<Submission> {
        let state = self.state.read().await;
        views::active_submissions(&state.submissions)
    }

    async fn quotable_submissions(&self) -> Vec<Submission> {
        let state = self.state.read().await;
        views::quotable_submissions(&state.submissions)
    }

    async fn quotes_for_line(
        &self,
        submission_id: &str,
        line: InsuranceLine,
    ) -> Vec<CarrierQuote> {
        let state = self.state.read().await;
        state
            .submissions
            .iter()
            .find(|s| s.id == submission_id)
            .map(|s| views::quotes_for_line(s, line))
            .unwrap_or_default()
    }

    async fn search_submissions(&self, filter: &SubmissionFilter) -> Vec<Submission> {
        let state = self.state.read().await;
        views::search_submissions(&state.submissions, filter)
    }

    async fn profile(&self) -> BrokerProfile {
        self.state.read().await.profile.clone()
    }

    async fn stats(&self) -> BrokerStats {
        let state = self.state.read().await;
        stats::compute(&state.submissions)
    }

    async fn select_quote(&self, submission_id: &str, quote_id: &str) -> Result<()> {
        let mut state = self.state.write().await;
        let submission = state
            .submissions
            .iter_mut()
            .find(|s| s.id == submission_id)
            .ok_or_else(|| Error::SubmissionNotFound(submission_id.to_string()))?;

        submission.selected_quote_id = Some(quote_id.to_string());
        debug!(submission_id, quote_id, "quote selected");
        Ok(())
    }

    async fn bind_quote(&self, submission_id: &str, quote_id: &str) -> Result<()> {
        let mut state = self.state.write().await;
        let submission = state
            .submissions
            .iter_mut()
            .find(|s| s.id == submission_id)
            .ok_or_else(|| Error::SubmissionNotFound(submission_id.to_string()))?;

        // Locate the quote before touching anything so an unknown id leaves
        // the submission exactly as it was.
        let index = submission
            .quotes
            .iter()
            .position(|q| q.id == quote_id)
            .ok_or_else(|| Error::QuoteNotFound {
                submission_id: submission_id.to_string(),
                quote_id: quote_id.to_string(),
            })?;

        let quote = &mut submission.quotes[index];
        quote.status = QuoteStatus::Bound;
        quote.bindable = false;

        submission.status = SubmissionStatus::Bound;
        submission.selected_quote_id = Some(quote_id.to_string());
        submission.updated_at = Utc::now();

        info!(submission_id, quote_id, "quote bound");
        Ok(())
    }

    async fn update_profile(&self, update: BrokerProfileUpdate) {
        let mut state = self.state.write().await;
        state.profile.apply(update);
        debug!("broker profile updated");
    }
}
