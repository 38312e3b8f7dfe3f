//! Pure derived views over the submission collection
//!
//! Side-effect free projections backing the submissions list, the compare
//! page, and the per-quote detail cards.

use chrono::{DateTime, Utc};

use super::types::{CarrierQuote, InsuranceLine, QuoteStatus, Submission, SubmissionStatus};

/// Submissions still in play: status neither bound nor declined.
pub fn active_submissions(submissions: &[Submission]) -> Vec<Submission> {
    submissions
        .iter()
        .filter(|s| !s.status.is_terminal())
        .cloned()
        .collect()
}

/// Submissions the compare page can work with: at least one quote and a
/// status that is neither terminal nor still a draft.
pub fn quotable_submissions(submissions: &[Submission]) -> Vec<Submission> {
    submissions
        .iter()
        .filter(|s| {
            !s.quotes.is_empty() && !s.status.is_terminal() && s.status != SubmissionStatus::Draft
        })
        .cloned()
        .collect()
}

/// Quotes on the submission for the given line, original order preserved.
pub fn quotes_for_line(submission: &Submission, line: InsuranceLine) -> Vec<CarrierQuote> {
    submission
        .quotes
        .iter()
        .filter(|q| q.line == line)
        .cloned()
        .collect()
}

/// Distinct lines that have at least one quote, in first-seen order.
pub fn lines_with_quotes(submission: &Submission) -> Vec<InsuranceLine> {
    let mut lines = Vec::new();
    for quote in &submission.quotes {
        if !lines.contains(&quote.line) {
            lines.push(quote.line);
        }
    }
    lines
}

/// The cheapest priced quote on the submission, if any carrier has priced.
pub fn lowest_premium_quote(submission: &Submission) -> Option<CarrierQuote> {
    submission
        .quotes
        .iter()
        .filter(|q| q.annual_premium.is_some())
        .min_by_key(|q| q.annual_premium)
        .cloned()
}

/// Per-status tallies shown on a collapsed submission row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuoteStatusCounts {
    pub quoted: u32,
    /// Pending plus referred: quotes still awaiting a final answer.
    pub awaiting: u32,
    pub declined: u32,
}

pub fn quote_status_counts(submission: &Submission) -> QuoteStatusCounts {
    let mut counts = QuoteStatusCounts::default();
    for quote in &submission.quotes {
        match quote.status {
            QuoteStatus::Quoted => counts.quoted += 1,
            QuoteStatus::Pending | QuoteStatus::Referred => counts.awaiting += 1,
            QuoteStatus::Declined => counts.declined += 1,
            QuoteStatus::Bound => {}
        }
    }
    counts
}

/// Whole days until the quote expires, rounding partial days up.
///
/// Zero or negative once the expiry has passed; `None` when the quote
/// carries no expiry. Takes `now` explicitly so the countdown stays a pure
/// function.
pub fn days_until_expiry(quote: &CarrierQuote, now: DateTime<Utc>) -> Option<i64> {
    quote.expires_at.map(|expires_at| {
        let seconds = (expires_at - now).num_seconds() as f64;
        (seconds / 86_400.0).ceil() as i64
    })
}

/// Filter for the submissions list view.
#[derive(Debug, Clone, Default)]
pub struct SubmissionFilter {
    /// Case-insensitive match against business name, industry, state, or any
    /// requested line label.
    pub query: Option<String>,
    pub status: Option<SubmissionStatus>,
    /// Oldest first when set; the list defaults to newest first.
    pub ascending: bool,
}

pub fn search_submissions(
    submissions: &[Submission],
    filter: &SubmissionFilter,
) -> Vec<Submission> {
    let query = filter.query.as_ref().map(|q| q.to_lowercase());
    let mut result: Vec<Submission> = submissions
        .iter()
        .filter(|s| match &query {
            None => true,
            Some(q) => {
                s.business.name.to_lowercase().contains(q)
                    || s.business.industry.to_lowercase().contains(q)
                    || s.business.state.to_lowercase().contains(q)
                    || s.requested_lines
                        .iter()
                        .any(|line| line.label().to_lowercase().contains(q))
            }
        })
        .filter(|s| filter.status.map(|st| s.status == st).unwrap_or(true))
        .cloned()
        .collect();

    result.sort_by(|a, b| {
        if filter.ascending {
            a.created_at.cmp(&b.created_at)
        } else {
            b.created_at.cmp(&a.created_at)
        }
    });
    result
}
