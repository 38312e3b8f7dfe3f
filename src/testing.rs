//! Test builders for rater and broker fixtures
//!
//! Builders start from a minimal valid value and let each test state only
//! what it cares about. Used by the inline module tests and the integration
//! suites.

use chrono::{DateTime, Duration, Utc};

use crate::broker::{
    BusinessInfo, CarrierAppetite, CarrierQuote, InsuranceLine, QuoteStatus, Submission,
    SubmissionStatus,
};
use crate::rater::{ComparisonItem, ComparisonTask, Difficulty, Rating, RatingChoice};

/// Builder for [`ComparisonTask`] fixtures.
pub struct TaskBuilder {
    task: ComparisonTask,
}

impl TaskBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            task: ComparisonTask {
                id: id.to_string(),
                prompt: format!("Prompt for {id}"),
                category: "General".to_string(),
                response_a: ComparisonItem {
                    content: "Response A".to_string(),
                    source: "model-a".to_string(),
                },
                response_b: ComparisonItem {
                    content: "Response B".to_string(),
                    source: "model-b".to_string(),
                },
                difficulty: Difficulty::Medium,
            },
        }
    }

    pub fn prompt(mut self, prompt: &str) -> Self {
        self.task.prompt = prompt.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.task.category = category.to_string();
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.task.difficulty = difficulty;
        self
    }

    pub fn build(self) -> ComparisonTask {
        self.task
    }
}

/// Builder for [`Rating`] fixtures.
pub struct RatingBuilder {
    rating: Rating,
}

impl RatingBuilder {
    pub fn new(id: &str, task_id: &str) -> Self {
        Self {
            rating: Rating {
                id: id.to_string(),
                task_id: task_id.to_string(),
                choice: RatingChoice::A,
                confidence: 3,
                reasoning: String::new(),
                time_spent_ms: 30_000,
                rated_at: Utc::now(),
                rater_name: "Test Rater".to_string(),
            },
        }
    }

    pub fn choice(mut self, choice: RatingChoice) -> Self {
        self.rating.choice = choice;
        self
    }

    pub fn confidence(mut self, confidence: u8) -> Self {
        self.rating.confidence = confidence;
        self
    }

    pub fn reasoning(mut self, reasoning: &str) -> Self {
        self.rating.reasoning = reasoning.to_string();
        self
    }

    pub fn time_spent_ms(mut self, time_spent_ms: u64) -> Self {
        self.rating.time_spent_ms = time_spent_ms;
        self
    }

    pub fn rated_at(mut self, rated_at: DateTime<Utc>) -> Self {
        self.rating.rated_at = rated_at;
        self
    }

    pub fn build(self) -> Rating {
        self.rating
    }
}

/// Builder for [`CarrierQuote`] fixtures. Starts as a pending, unpriced
/// quote.
pub struct QuoteBuilder {
    quote: CarrierQuote,
}

impl QuoteBuilder {
    pub fn new(id: &str, carrier: &str, line: InsuranceLine) -> Self {
        Self {
            quote: CarrierQuote {
                id: id.to_string(),
                carrier_name: carrier.to_string(),
                line,
                status: QuoteStatus::Pending,
                annual_premium: None,
                monthly_premium: None,
                deductible: None,
                coverage_limit: None,
                coverage_details: Vec::new(),
                am_best_rating: "A".to_string(),
                bindable: false,
                expires_at: None,
                decline_reason: None,
                uw_notes: None,
                quoted_at: None,
                appetite: CarrierAppetite::Standard,
            },
        }
    }

    /// Price the quote: quoted status, bindable, quoted just now.
    pub fn quoted(mut self, annual_premium: u64) -> Self {
        self.quote.status = QuoteStatus::Quoted;
        self.quote.annual_premium = Some(annual_premium);
        self.quote.monthly_premium = Some(annual_premium / 12);
        self.quote.bindable = true;
        self.quote.quoted_at = Some(Utc::now());
        self
    }

    pub fn status(mut self, status: QuoteStatus) -> Self {
        self.quote.status = status;
        self
    }

    pub fn bindable(mut self, bindable: bool) -> Self {
        self.quote.bindable = bindable;
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.quote.expires_at = Some(expires_at);
        self
    }

    pub fn quoted_at(mut self, quoted_at: DateTime<Utc>) -> Self {
        self.quote.quoted_at = Some(quoted_at);
        self
    }

    pub fn build(self) -> CarrierQuote {
        self.quote
    }
}

/// Builder for [`Submission`] fixtures. Starts as a submitted request for
/// general liability with an empty quote panel.
pub struct SubmissionBuilder {
    submission: Submission,
    lines_customized: bool,
}

impl SubmissionBuilder {
    pub fn new(id: &str, business_name: &str) -> Self {
        let now = Utc::now();
        Self {
            lines_customized: false,
            submission: Submission {
                id: id.to_string(),
                business: BusinessInfo {
                    name: business_name.to_string(),
                    dba: None,
                    industry: "Retail".to_string(),
                    naics_code: "459999".to_string(),
                    years_in_business: 5,
                    annual_revenue: 1_000_000,
                    employee_count: 10,
                    locations: 1,
                    state: "OR".to_string(),
                    city: "Portland".to_string(),
                    zip_code: "97201".to_string(),
                    description: String::new(),
                },
                requested_lines: vec![InsuranceLine::GeneralLiability],
                effective_date: (now + Duration::days(30)).date_naive(),
                status: SubmissionStatus::Submitted,
                quotes: Vec::new(),
                selected_quote_id: None,
                created_at: now,
                updated_at: now,
                notes: None,
            },
        }
    }

    pub fn status(mut self, status: SubmissionStatus) -> Self {
        self.submission.status = status;
        self
    }

    /// Add a requested line. The first call replaces the default line.
    pub fn line(mut self, line: InsuranceLine) -> Self {
        if !self.lines_customized {
            self.submission.requested_lines.clear();
            self.lines_customized = true;
        }
        self.submission.requested_lines.push(line);
        self
    }

    pub fn quote(mut self, quote: CarrierQuote) -> Self {
        self.submission.quotes.push(quote);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.submission.created_at = created_at;
        self.submission.updated_at = created_at;
        self
    }

    pub fn notes(mut self, notes: &str) -> Self {
        self.submission.notes = Some(notes.to_string());
        self
    }

    pub fn build(self) -> Submission {
        self.submission
    }
}
