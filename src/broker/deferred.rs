//! Handle for a scheduled bind
//!
//! The compare page shows a short "binding..." interstitial between the
//! click and the bind landing. That delay is a scheduled task tied to the
//! consumer's lifetime through this handle, so tearing the consumer down
//! cancels the pending mutation instead of letting a bare timer fire against
//! a disposed target.

use tokio::task::JoinHandle;

/// Owns a pending deferred bind. Dropping the handle aborts the bind if it
/// has not fired yet.
#[derive(Debug)]
pub struct BindHandle {
    task: Option<JoinHandle<()>>,
}

impl BindHandle {
    pub(crate) fn new(task: JoinHandle<()>) -> Self {
        Self { task: Some(task) }
    }

    /// Cancel the pending bind explicitly.
    pub fn cancel(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Whether the scheduled task has run to completion.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map(|t| t.is_finished()).unwrap_or(true)
    }

    /// Wait for the scheduled bind to land.
    pub async fn finished(mut self) {
        if let Some(task) = self.task.take() {
            // An aborted task surfaces as a JoinError; either way the bind
            // is no longer pending.
            let _ = task.await;
        }
    }
}

impl Drop for BindHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
