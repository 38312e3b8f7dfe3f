//! Fixed seed dataset for the broker store
//!
//! Six submissions spanning every status, with quote panels in various
//! states of completeness. Timestamps are relative to `now` so expiry
//! countdowns and the monthly dashboard always render sensibly.

use chrono::{DateTime, Duration, Utc};

use super::types::{
    BrokerProfile, BusinessInfo, CarrierAppetite, CarrierQuote, CoverageDetail, InsuranceLine,
    QuoteStatus, Submission, SubmissionStatus,
};

/// Everything the broker store starts with.
#[derive(Debug, Clone)]
pub struct BrokerSeed {
    pub submissions: Vec<Submission>,
    pub profile: BrokerProfile,
}

struct QuoteSpec<'a> {
    id: &'a str,
    carrier: &'a str,
    line: InsuranceLine,
    status: QuoteStatus,
    annual_premium: Option<u64>,
    deductible: Option<u64>,
    coverage_limit: Option<&'a str>,
    details: &'a [(&'a str, &'a str)],
    am_best: &'a str,
    bindable: bool,
    expires_in_days: Option<i64>,
    quoted_days_ago: Option<i64>,
    decline_reason: Option<&'a str>,
    uw_notes: Option<&'a str>,
    appetite: CarrierAppetite,
}

fn quote(now: DateTime<Utc>, spec: QuoteSpec<'_>) -> CarrierQuote {
    CarrierQuote {
        id: spec.id.to_string(),
        carrier_name: spec.carrier.to_string(),
        line: spec.line,
        status: spec.status,
        annual_premium: spec.annual_premium,
        monthly_premium: spec.annual_premium.map(|p| p / 12),
        deductible: spec.deductible,
        coverage_limit: spec.coverage_limit.map(str::to_string),
        coverage_details: spec
            .details
            .iter()
            .map(|(label, value)| CoverageDetail {
                label: (*label).to_string(),
                value: (*value).to_string(),
            })
            .collect(),
        am_best_rating: spec.am_best.to_string(),
        bindable: spec.bindable,
        expires_at: spec.expires_in_days.map(|d| now + Duration::days(d)),
        decline_reason: spec.decline_reason.map(str::to_string),
        uw_notes: spec.uw_notes.map(str::to_string),
        quoted_at: spec.quoted_days_ago.map(|d| now - Duration::days(d)),
        appetite: spec.appetite,
    }
}

#[allow(clippy::too_many_arguments)]
fn business(
    name: &str,
    industry: &str,
    naics: &str,
    years: u32,
    revenue: u64,
    employees: u32,
    city: &str,
    state: &str,
    zip: &str,
    description: &str,
) -> BusinessInfo {
    BusinessInfo {
        name: name.to_string(),
        dba: None,
        industry: industry.to_string(),
        naics_code: naics.to_string(),
        years_in_business: years,
        annual_revenue: revenue,
        employee_count: employees,
        locations: 1,
        state: state.to_string(),
        city: city.to_string(),
        zip_code: zip.to_string(),
        description: description.to_string(),
    }
}

/// The standard broker dataset.
pub fn broker_seed(now: DateTime<Utc>) -> BrokerSeed {
    let profile = BrokerProfile {
        name: "Morgan Hale".to_string(),
        email: "morgan@halepartners.example.com".to_string(),
        agency: "Hale & Partners Insurance".to_string(),
        license_number: "OR-7712043".to_string(),
        state: "OR".to_string(),
        phone: "503-555-0142".to_string(),
        preferred_lines: vec![
            InsuranceLine::GeneralLiability,
            InsuranceLine::BusinessOwnersPolicy,
            InsuranceLine::CyberLiability,
        ],
        carrier_appointments: vec![
            "Granite Mutual".to_string(),
            "Blue Harbor Specialty".to_string(),
            "Stateline Casualty".to_string(),
            "Pioneer National".to_string(),
            "Cascade Underwriters".to_string(),
        ],
        total_submissions: 6,
        total_bound: 1,
        conversion_rate: 1.0 / 6.0,
    };

    let submissions = vec![
        // Bound last month: the completed deal on the dashboard.
        Submission {
            id: "sub-001".to_string(),
            business: business(
                "Riverbend Coffee Roasters",
                "Food & Beverage Manufacturing",
                "311920",
                9,
                2_400_000,
                18,
                "Portland",
                "OR",
                "97209",
                "Small-batch coffee roastery with a tasting room and wholesale accounts.",
            ),
            requested_lines: vec![
                InsuranceLine::BusinessOwnersPolicy,
                InsuranceLine::WorkersCompensation,
            ],
            effective_date: (now + Duration::days(5)).date_naive(),
            status: SubmissionStatus::Bound,
            quotes: vec![
                quote(
                    now,
                    QuoteSpec {
                        id: "quote-001",
                        carrier: "Granite Mutual",
                        line: InsuranceLine::BusinessOwnersPolicy,
                        status: QuoteStatus::Bound,
                        annual_premium: Some(8_640),
                        deductible: Some(1_000),
                        coverage_limit: Some("$2M / $4M"),
                        details: &[
                            ("Property limit", "$850,000"),
                            ("Business interruption", "12 months ALS"),
                            ("Equipment breakdown", "Included"),
                        ],
                        am_best: "A+",
                        bindable: false,
                        expires_in_days: Some(20),
                        quoted_days_ago: Some(24),
                        decline_reason: None,
                        uw_notes: None,
                        appetite: CarrierAppetite::Preferred,
                    },
                ),
                quote(
                    now,
                    QuoteSpec {
                        id: "quote-002",
                        carrier: "Stateline Casualty",
                        line: InsuranceLine::BusinessOwnersPolicy,
                        status: QuoteStatus::Quoted,
                        annual_premium: Some(9_980),
                        deductible: Some(2_500),
                        coverage_limit: Some("$1M / $2M"),
                        details: &[("Property limit", "$750,000")],
                        am_best: "A",
                        bindable: true,
                        expires_in_days: Some(12),
                        quoted_days_ago: Some(22),
                        decline_reason: None,
                        uw_notes: None,
                        appetite: CarrierAppetite::Standard,
                    },
                ),
            ],
            selected_quote_id: Some("quote-001".to_string()),
            created_at: now - Duration::days(32),
            updated_at: now - Duration::days(19),
            notes: Some("Bound BOP with Granite; WC placed through the state fund.".to_string()),
        },
        // Fully quoted, the compare page's main subject.
        Submission {
            id: "sub-002".to_string(),
            business: business(
                "Summit Trail Outfitters",
                "Sporting Goods Retail",
                "459110",
                6,
                1_750_000,
                11,
                "Bend",
                "OR",
                "97702",
                "Outdoor gear retailer with guided-trip bookings and an online store.",
            ),
            requested_lines: vec![
                InsuranceLine::GeneralLiability,
                InsuranceLine::CyberLiability,
            ],
            effective_date: (now + Duration::days(21)).date_naive(),
            status: SubmissionStatus::Quoted,
            quotes: vec![
                quote(
                    now,
                    QuoteSpec {
                        id: "quote-003",
                        carrier: "Granite Mutual",
                        line: InsuranceLine::GeneralLiability,
                        status: QuoteStatus::Quoted,
                        annual_premium: Some(5_240),
                        deductible: Some(1_000),
                        coverage_limit: Some("$1M / $2M"),
                        details: &[
                            ("Products & completed ops", "Included"),
                            ("Guided activities", "Endorsed"),
                        ],
                        am_best: "A+",
                        bindable: true,
                        expires_in_days: Some(14),
                        quoted_days_ago: Some(3),
                        decline_reason: None,
                        uw_notes: None,
                        appetite: CarrierAppetite::Preferred,
                    },
                ),
                quote(
                    now,
                    QuoteSpec {
                        id: "quote-004",
                        carrier: "Pioneer National",
                        line: InsuranceLine::GeneralLiability,
                        status: QuoteStatus::Quoted,
                        annual_premium: Some(4_870),
                        deductible: Some(2_500),
                        coverage_limit: Some("$1M / $2M"),
                        details: &[("Products & completed ops", "Included")],
                        am_best: "A-",
                        bindable: true,
                        expires_in_days: Some(9),
                        quoted_days_ago: Some(2),
                        decline_reason: None,
                        uw_notes: Some("Guided trips excluded pending waiver review."),
                        appetite: CarrierAppetite::Standard,
                    },
                ),
                quote(
                    now,
                    QuoteSpec {
                        id: "quote-005",
                        carrier: "Blue Harbor Specialty",
                        line: InsuranceLine::CyberLiability,
                        status: QuoteStatus::Quoted,
                        annual_premium: Some(2_130),
                        deductible: Some(5_000),
                        coverage_limit: Some("$1M aggregate"),
                        details: &[
                            ("Ransomware sublimit", "$500,000"),
                            ("Social engineering", "$100,000"),
                        ],
                        am_best: "A",
                        bindable: true,
                        expires_in_days: Some(11),
                        quoted_days_ago: Some(1),
                        decline_reason: None,
                        uw_notes: None,
                        appetite: CarrierAppetite::Preferred,
                    },
                ),
                quote(
                    now,
                    QuoteSpec {
                        id: "quote-006",
                        carrier: "Cascade Underwriters",
                        line: InsuranceLine::CyberLiability,
                        status: QuoteStatus::Referred,
                        annual_premium: None,
                        deductible: None,
                        coverage_limit: None,
                        details: &[],
                        am_best: "A-",
                        bindable: false,
                        expires_in_days: None,
                        quoted_days_ago: None,
                        decline_reason: None,
                        uw_notes: Some("Referred to UW: online revenue share above appetite."),
                        appetite: CarrierAppetite::Limited,
                    },
                ),
            ],
            selected_quote_id: None,
            created_at: now - Duration::days(8),
            updated_at: now - Duration::days(1),
            notes: None,
        },
        // Out to market, carriers still working it.
        Submission {
            id: "sub-003".to_string(),
            business: business(
                "Alder & Vine Bistro",
                "Full-Service Restaurant",
                "722511",
                3,
                980_000,
                14,
                "Eugene",
                "OR",
                "97401",
                "Neighborhood bistro with a wine program and sidewalk seating.",
            ),
            requested_lines: vec![InsuranceLine::GeneralLiability],
            effective_date: (now + Duration::days(40)).date_naive(),
            status: SubmissionStatus::Quoting,
            quotes: vec![
                quote(
                    now,
                    QuoteSpec {
                        id: "quote-007",
                        carrier: "Granite Mutual",
                        line: InsuranceLine::GeneralLiability,
                        status: QuoteStatus::Pending,
                        annual_premium: None,
                        deductible: None,
                        coverage_limit: None,
                        details: &[],
                        am_best: "A+",
                        bindable: false,
                        expires_in_days: None,
                        quoted_days_ago: None,
                        decline_reason: None,
                        uw_notes: None,
                        appetite: CarrierAppetite::Standard,
                    },
                ),
                quote(
                    now,
                    QuoteSpec {
                        id: "quote-008",
                        carrier: "Stateline Casualty",
                        line: InsuranceLine::GeneralLiability,
                        status: QuoteStatus::Pending,
                        annual_premium: None,
                        deductible: None,
                        coverage_limit: None,
                        details: &[],
                        am_best: "A",
                        bindable: false,
                        expires_in_days: None,
                        quoted_days_ago: None,
                        decline_reason: None,
                        uw_notes: None,
                        appetite: CarrierAppetite::Preferred,
                    },
                ),
            ],
            selected_quote_id: None,
            created_at: now - Duration::days(4),
            updated_at: now - Duration::days(4),
            notes: Some("Liquor liability to follow once GL terms land.".to_string()),
        },
        // Submitted, nothing back yet.
        Submission {
            id: "sub-004".to_string(),
            business: business(
                "Cedar Peak HVAC",
                "HVAC Contracting",
                "238220",
                12,
                3_100_000,
                26,
                "Salem",
                "OR",
                "97301",
                "Commercial HVAC installation and service contractor.",
            ),
            requested_lines: vec![
                InsuranceLine::GeneralLiability,
                InsuranceLine::CommercialAuto,
                InsuranceLine::UmbrellaExcess,
            ],
            effective_date: (now + Duration::days(55)).date_naive(),
            status: SubmissionStatus::Submitted,
            quotes: Vec::new(),
            selected_quote_id: None,
            created_at: now - Duration::days(2),
            updated_at: now - Duration::days(2),
            notes: None,
        },
        // Still being worked up, not yet to market.
        Submission {
            id: "sub-005".to_string(),
            business: business(
                "Lumen Design Studio",
                "Graphic Design Services",
                "541430",
                2,
                420_000,
                5,
                "Portland",
                "OR",
                "97214",
                "Boutique brand and web design studio.",
            ),
            requested_lines: vec![
                InsuranceLine::ProfessionalLiability,
                InsuranceLine::CyberLiability,
            ],
            effective_date: (now + Duration::days(70)).date_naive(),
            status: SubmissionStatus::Draft,
            quotes: Vec::new(),
            selected_quote_id: None,
            created_at: now - Duration::days(1),
            updated_at: now - Duration::hours(5),
            notes: Some("Waiting on revenue split by client industry.".to_string()),
        },
        // Declined across the panel last month.
        Submission {
            id: "sub-006".to_string(),
            business: business(
                "Rook & Rye Taproom",
                "Drinking Places",
                "722410",
                1,
                310_000,
                7,
                "Astoria",
                "OR",
                "97103",
                "Taproom with live events and late-night hours.",
            ),
            requested_lines: vec![InsuranceLine::GeneralLiability],
            effective_date: (now + Duration::days(10)).date_naive(),
            status: SubmissionStatus::Declined,
            quotes: vec![quote(
                now,
                QuoteSpec {
                    id: "quote-009",
                    carrier: "Pioneer National",
                    line: InsuranceLine::GeneralLiability,
                    status: QuoteStatus::Declined,
                    annual_premium: None,
                    deductible: None,
                    coverage_limit: None,
                    details: &[],
                    am_best: "A-",
                    bindable: false,
                    expires_in_days: None,
                    quoted_days_ago: None,
                    decline_reason: Some("New venture with assault & battery exposure."),
                    uw_notes: None,
                    appetite: CarrierAppetite::Limited,
                },
            )],
            selected_quote_id: None,
            created_at: now - Duration::days(26),
            updated_at: now - Duration::days(21),
            notes: Some("Resubmit after one full year of operations.".to_string()),
        },
    ];

    BrokerSeed {
        submissions,
        profile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_spans_every_status() {
        let seed = broker_seed(Utc::now());
        assert_eq!(seed.submissions.len(), 6);

        for status in [
            SubmissionStatus::Draft,
            SubmissionStatus::Submitted,
            SubmissionStatus::Quoting,
            SubmissionStatus::Quoted,
            SubmissionStatus::Bound,
            SubmissionStatus::Declined,
        ] {
            assert!(
                seed.submissions.iter().any(|s| s.status == status),
                "missing status {status}"
            );
        }
    }

    #[test]
    fn test_seed_quote_ids_unique_and_selected_ids_resolve() {
        let seed = broker_seed(Utc::now());
        let mut ids = std::collections::HashSet::new();
        for submission in &seed.submissions {
            for quote in &submission.quotes {
                assert!(ids.insert(quote.id.clone()), "duplicate {}", quote.id);
            }
            if let Some(selected) = &submission.selected_quote_id {
                assert!(submission.quote(selected).is_some());
            }
        }
    }

    #[test]
    fn test_bound_submission_is_consistent() {
        let seed = broker_seed(Utc::now());
        let bound = seed
            .submissions
            .iter()
            .find(|s| s.status == SubmissionStatus::Bound)
            .unwrap();
        let selected = bound
            .quote(bound.selected_quote_id.as_deref().unwrap())
            .unwrap();
        assert_eq!(selected.status, QuoteStatus::Bound);
        assert!(!selected.bindable);
        assert!(selected.annual_premium.is_some());
    }

    #[test]
    fn test_profile_counters_match_collection() {
        let seed = broker_seed(Utc::now());
        assert_eq!(
            seed.profile.total_submissions as usize,
            seed.submissions.len()
        );
        let bound = seed
            .submissions
            .iter()
            .filter(|s| s.status == SubmissionStatus::Bound)
            .count();
        assert_eq!(seed.profile.total_bound as usize, bound);
    }
}
