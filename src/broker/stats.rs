//! Dashboard statistics for the broker variant
//!
//! Computed on demand from the submission collection; never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{InsuranceLine, QuoteStatus, Submission, SubmissionStatus};

/// How responsive one carrier has been across all submissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierResponseRate {
    pub carrier: String,
    /// Fraction of this carrier's quotes that have been answered, 0.0 to 1.0.
    pub rate: f64,
    /// Mean days from submission creation to the quote landing.
    pub avg_days: f64,
}

/// Submission volume and bind count for one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineBreakdown {
    pub line: InsuranceLine,
    pub submissions: u32,
    pub bound: u32,
}

/// Submission volume for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyActivity {
    /// `YYYY-MM`.
    pub month: String,
    pub submissions: u32,
    pub bound: u32,
}

/// A recently received quote, flattened for the dashboard table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentQuote {
    pub carrier: String,
    pub business: String,
    pub line: InsuranceLine,
    pub premium: u64,
    pub quoted_at: DateTime<Utc>,
}

/// Aggregate dashboard statistics for the broker variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokerStats {
    pub active_submissions: u32,
    pub quotes_received: u32,
    pub policies_bound: u32,
    /// Sum of annual premiums across bound quotes.
    pub total_premium: u64,
    /// Mean days from submission creation to a quote landing, across all
    /// priced quotes.
    pub avg_quote_turnaround_days: f64,
    /// Bound submissions over all submissions, 0.0 to 1.0.
    pub conversion_rate: f64,
    pub carrier_response_rates: Vec<CarrierResponseRate>,
    pub line_breakdown: Vec<LineBreakdown>,
    /// Ascending by month.
    pub monthly_activity: Vec<MonthlyActivity>,
    /// Up to the five most recent priced quotes, newest first.
    pub recent_quotes: Vec<RecentQuote>,
}

/// Project the dashboard statistics from the submission collection.
pub fn compute(submissions: &[Submission]) -> BrokerStats {
    let active_submissions = submissions.iter().filter(|s| !s.status.is_terminal()).count() as u32;
    let policies_bound = submissions
        .iter()
        .filter(|s| s.status == SubmissionStatus::Bound)
        .count() as u32;

    let mut quotes_received = 0_u32;
    let mut total_premium = 0_u64;
    let mut turnaround_days: Vec<f64> = Vec::new();
    for submission in submissions {
        for quote in &submission.quotes {
            if matches!(quote.status, QuoteStatus::Quoted | QuoteStatus::Bound) {
                quotes_received += 1;
            }
            if quote.status == QuoteStatus::Bound {
                total_premium += quote.annual_premium.unwrap_or(0);
            }
            if let Some(quoted_at) = quote.quoted_at {
                let days = (quoted_at - submission.created_at).num_seconds() as f64 / 86_400.0;
                turnaround_days.push(days.max(0.0));
            }
        }
    }
    let avg_quote_turnaround_days = if turnaround_days.is_empty() {
        0.0
    } else {
        turnaround_days.iter().sum::<f64>() / turnaround_days.len() as f64
    };

    let conversion_rate = if submissions.is_empty() {
        0.0
    } else {
        f64::from(policies_bound) / submissions.len() as f64
    };

    BrokerStats {
        active_submissions,
        quotes_received,
        policies_bound,
        total_premium,
        avg_quote_turnaround_days,
        conversion_rate,
        carrier_response_rates: carrier_response_rates(submissions),
        line_breakdown: line_breakdown(submissions),
        monthly_activity: monthly_activity(submissions),
        recent_quotes: recent_quotes(submissions, 5),
    }
}

fn carrier_response_rates(submissions: &[Submission]) -> Vec<CarrierResponseRate> {
    struct Tally {
        carrier: String,
        total: u32,
        responded: u32,
        days: Vec<f64>,
    }

    let mut tallies: Vec<Tally> = Vec::new();
    for submission in submissions {
        for quote in &submission.quotes {
            let index = match tallies.iter().position(|t| t.carrier == quote.carrier_name) {
                Some(index) => index,
                None => {
                    tallies.push(Tally {
                        carrier: quote.carrier_name.clone(),
                        total: 0,
                        responded: 0,
                        days: Vec::new(),
                    });
                    tallies.len() - 1
                }
            };
            let tally = &mut tallies[index];
            tally.total += 1;
            if quote.status.is_responded() {
                tally.responded += 1;
            }
            if let Some(quoted_at) = quote.quoted_at {
                let days = (quoted_at - submission.created_at).num_seconds() as f64 / 86_400.0;
                tally.days.push(days.max(0.0));
            }
        }
    }

    tallies
        .into_iter()
        .map(|t| CarrierResponseRate {
            rate: f64::from(t.responded) / f64::from(t.total),
            avg_days: if t.days.is_empty() {
                0.0
            } else {
                t.days.iter().sum::<f64>() / t.days.len() as f64
            },
            carrier: t.carrier,
        })
        .collect()
}

fn line_breakdown(submissions: &[Submission]) -> Vec<LineBreakdown> {
    let mut breakdown: Vec<LineBreakdown> = Vec::new();
    for submission in submissions {
        for line in &submission.requested_lines {
            let bound = submission
                .quotes
                .iter()
                .any(|q| q.line == *line && q.status == QuoteStatus::Bound);
            match breakdown.iter_mut().find(|b| b.line == *line) {
                Some(entry) => {
                    entry.submissions += 1;
                    if bound {
                        entry.bound += 1;
                    }
                }
                None => breakdown.push(LineBreakdown {
                    line: *line,
                    submissions: 1,
                    bound: u32::from(bound),
                }),
            }
        }
    }
    breakdown
}

fn monthly_activity(submissions: &[Submission]) -> Vec<MonthlyActivity> {
    let mut months: Vec<MonthlyActivity> = Vec::new();
    for submission in submissions {
        let month = submission.created_at.format("%Y-%m").to_string();
        let bound = submission.status == SubmissionStatus::Bound;
        match months.iter_mut().find(|m| m.month == month) {
            Some(entry) => {
                entry.submissions += 1;
                if bound {
                    entry.bound += 1;
                }
            }
            None => months.push(MonthlyActivity {
                month,
                submissions: 1,
                bound: u32::from(bound),
            }),
        }
    }
    months.sort_by(|a, b| a.month.cmp(&b.month));
    months
}

fn recent_quotes(submissions: &[Submission], limit: usize) -> Vec<RecentQuote> {
    let mut quotes: Vec<RecentQuote> = submissions
        .iter()
        .flat_map(|submission| {
            submission.quotes.iter().filter_map(|quote| {
                match (quote.quoted_at, quote.annual_premium) {
                    (Some(quoted_at), Some(premium)) => Some(RecentQuote {
                        carrier: quote.carrier_name.clone(),
                        business: submission.business.name.clone(),
                        line: quote.line,
                        premium,
                        quoted_at,
                    }),
                    _ => None,
                }
            })
        })
        .collect();
    quotes.sort_by(|a, b| b.quoted_at.cmp(&a.quoted_at));
    quotes.truncate(limit);
    quotes
}
