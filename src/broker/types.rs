//! Data models for the broker dashboard

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Commercial insurance lines a submission can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsuranceLine {
    #[serde(rename = "General Liability")]
    GeneralLiability,
    #[serde(rename = "Business Owners Policy")]
    BusinessOwnersPolicy,
    #[serde(rename = "Workers Compensation")]
    WorkersCompensation,
    #[serde(rename = "Commercial Auto")]
    CommercialAuto,
    #[serde(rename = "Commercial Property")]
    CommercialProperty,
    #[serde(rename = "Umbrella / Excess")]
    UmbrellaExcess,
    #[serde(rename = "Professional Liability")]
    ProfessionalLiability,
    #[serde(rename = "Cyber Liability")]
    CyberLiability,
    #[serde(rename = "Directors & Officers")]
    DirectorsOfficers,
    #[serde(rename = "Employment Practices")]
    EmploymentPractices,
}

impl InsuranceLine {
    /// Human-readable label, as shown in line tabs and search results.
    pub fn label(&self) -> &'static str {
        match self {
            InsuranceLine::GeneralLiability => "General Liability",
            InsuranceLine::BusinessOwnersPolicy => "Business Owners Policy",
            InsuranceLine::WorkersCompensation => "Workers Compensation",
            InsuranceLine::CommercialAuto => "Commercial Auto",
            InsuranceLine::CommercialProperty => "Commercial Property",
            InsuranceLine::UmbrellaExcess => "Umbrella / Excess",
            InsuranceLine::ProfessionalLiability => "Professional Liability",
            InsuranceLine::CyberLiability => "Cyber Liability",
            InsuranceLine::DirectorsOfficers => "Directors & Officers",
            InsuranceLine::EmploymentPractices => "Employment Practices",
        }
    }
}

impl fmt::Display for InsuranceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Lifecycle of a submission.
///
/// This layer only ever drives the `* -> Bound` transition; the intermediate
/// states arrive from upstream and are consumed as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Draft,
    Submitted,
    Quoting,
    Quoted,
    Bound,
    Declined,
}

impl SubmissionStatus {
    /// `Bound` and `Declined` are terminal; nothing moves a submission out
    /// of them.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionStatus::Bound | SubmissionStatus::Declined)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SubmissionStatus::Draft => "draft",
            SubmissionStatus::Submitted => "submitted",
            SubmissionStatus::Quoting => "quoting",
            SubmissionStatus::Quoted => "quoted",
            SubmissionStatus::Bound => "bound",
            SubmissionStatus::Declined => "declined",
        };
        write!(f, "{label}")
    }
}

/// One carrier's answer state for one line on one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    Pending,
    Quoted,
    Referred,
    Declined,
    Bound,
}

impl QuoteStatus {
    /// Whether the carrier has answered, one way or the other.
    pub fn is_responded(&self) -> bool {
        !matches!(self, QuoteStatus::Pending)
    }
}

/// A carrier's willingness tier for a given risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarrierAppetite {
    Preferred,
    Standard,
    Limited,
}

/// The business requesting coverage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub name: String,
    pub dba: Option<String>,
    pub industry: String,
    pub naics_code: String,
    pub years_in_business: u32,
    pub annual_revenue: u64,
    pub employee_count: u32,
    pub locations: u32,
    pub state: String,
    pub city: String,
    pub zip_code: String,
    pub description: String,
}

/// One labeled coverage term on a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageDetail {
    pub label: String,
    pub value: String,
}

/// One carrier's priced (or pending) offer against a requested line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierQuote {
    pub id: String,
    pub carrier_name: String,
    pub line: InsuranceLine,
    pub status: QuoteStatus,
    /// `None` until the carrier returns pricing.
    pub annual_premium: Option<u64>,
    pub monthly_premium: Option<u64>,
    pub deductible: Option<u64>,
    pub coverage_limit: Option<String>,
    pub coverage_details: Vec<CoverageDetail>,
    pub am_best_rating: String,
    pub bindable: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub decline_reason: Option<String>,
    pub uw_notes: Option<String>,
    pub quoted_at: Option<DateTime<Utc>>,
    pub appetite: CarrierAppetite,
}

/// A business's request for coverage and everything hung off it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub business: BusinessInfo,
    pub requested_lines: Vec<InsuranceLine>,
    pub effective_date: NaiveDate,
    pub status: SubmissionStatus,
    pub quotes: Vec<CarrierQuote>,
    pub selected_quote_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub notes: Option<String>,
}

impl Submission {
    pub fn quote(&self, quote_id: &str) -> Option<&CarrierQuote> {
        self.quotes.iter().find(|q| q.id == quote_id)
    }
}

/// The broker's identity and preferences, plus read-only performance
/// counters maintained outside this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokerProfile {
    pub name: String,
    pub email: String,
    pub agency: String,
    pub license_number: String,
    pub state: String,
    pub phone: String,
    pub preferred_lines: Vec<InsuranceLine>,
    pub carrier_appointments: Vec<String>,
    pub total_submissions: u32,
    pub total_bound: u32,
    pub conversion_rate: f64,
}

impl BrokerProfile {
    /// Merge an update request field by field. `None` leaves a field alone;
    /// the performance counters are not updatable.
    pub(crate) fn apply(&mut self, update: BrokerProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(agency) = update.agency {
            self.agency = agency;
        }
        if let Some(license_number) = update.license_number {
            self.license_number = license_number;
        }
        if let Some(state) = update.state {
            self.state = state;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(preferred_lines) = update.preferred_lines {
            self.preferred_lines = preferred_lines;
        }
        if let Some(carrier_appointments) = update.carrier_appointments {
            self.carrier_appointments = carrier_appointments;
        }
    }
}

/// Named-field partial update for [`BrokerProfile`], mirroring the settings
/// form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrokerProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub agency: Option<String>,
    pub license_number: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub preferred_lines: Option<Vec<InsuranceLine>>,
    pub carrier_appointments: Option<Vec<String>>,
}
