//! Tests for the broker context covering selection and the bind transition

use std::time::Duration;

use super::*;
use crate::error::Error;
use crate::testing::{QuoteBuilder, SubmissionBuilder};

fn profile() -> BrokerProfile {
    BrokerProfile {
        name: "Test Broker".to_string(),
        email: "broker@example.com".to_string(),
        agency: "Test Agency".to_string(),
        license_number: "LIC-100".to_string(),
        state: "OR".to_string(),
        phone: "555-0100".to_string(),
        preferred_lines: Vec::new(),
        carrier_appointments: Vec::new(),
        total_submissions: 0,
        total_bound: 0,
        conversion_rate: 0.0,
    }
}

fn quoted_seed() -> BrokerSeed {
    BrokerSeed {
        submissions: vec![SubmissionBuilder::new("sub-1", "Summit Outfitters")
            .status(SubmissionStatus::Quoted)
            .quote(
                QuoteBuilder::new("q1", "Granite Mutual", InsuranceLine::GeneralLiability)
                    .quoted(5_000)
                    .build(),
            )
            .quote(QuoteBuilder::new("q2", "Blue Harbor", InsuranceLine::GeneralLiability).build())
            .build()],
        profile: profile(),
    }
}

#[tokio::test]
async fn test_bind_quote_scenario() {
    let ctx = InMemoryBrokerContext::from_seed(quoted_seed());

    ctx.bind_quote("sub-1", "q1").await.unwrap();

    let sub = ctx.submission("sub-1").await.unwrap();
    assert_eq!(sub.status, SubmissionStatus::Bound);
    assert_eq!(sub.selected_quote_id.as_deref(), Some("q1"));

    let q1 = sub.quote("q1").unwrap();
    assert_eq!(q1.status, QuoteStatus::Bound);
    assert!(!q1.bindable);

    // The other quote is untouched.
    let q2 = sub.quote("q2").unwrap();
    assert_eq!(q2.status, QuoteStatus::Pending);
}

#[tokio::test]
async fn test_bind_quote_is_idempotent() {
    let ctx = InMemoryBrokerContext::from_seed(quoted_seed());

    ctx.bind_quote("sub-1", "q1").await.unwrap();
    ctx.bind_quote("sub-1", "q1").await.unwrap();

    let sub = ctx.submission("sub-1").await.unwrap();
    assert_eq!(sub.status, SubmissionStatus::Bound);
    let q1 = sub.quote("q1").unwrap();
    assert_eq!(q1.status, QuoteStatus::Bound);
    assert!(!q1.bindable);
    assert_eq!(sub.quote("q2").unwrap().status, QuoteStatus::Pending);
}

#[tokio::test]
async fn test_bind_unknown_quote_leaves_store_untouched() {
    let ctx = InMemoryBrokerContext::from_seed(quoted_seed());
    let before = ctx.submission("sub-1").await.unwrap();

    let err = ctx.bind_quote("sub-1", "q-missing").await.unwrap_err();
    assert!(matches!(err, Error::QuoteNotFound { .. }));

    let after = ctx.submission("sub-1").await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_bind_unknown_submission() {
    let ctx = InMemoryBrokerContext::from_seed(quoted_seed());
    let err = ctx.bind_quote("sub-missing", "q1").await.unwrap_err();
    assert!(matches!(err, Error::SubmissionNotFound(_)));
}

#[tokio::test]
async fn test_select_quote_changes_selection_only() {
    let ctx = InMemoryBrokerContext::from_seed(quoted_seed());

    ctx.select_quote("sub-1", "q2").await.unwrap();
    let sub = ctx.submission("sub-1").await.unwrap();
    assert_eq!(sub.selected_quote_id.as_deref(), Some("q2"));
    assert_eq!(sub.status, SubmissionStatus::Quoted);

    // Selection is idempotent and re-targetable.
    ctx.select_quote("sub-1", "q1").await.unwrap();
    ctx.select_quote("sub-1", "q1").await.unwrap();
    let sub = ctx.submission("sub-1").await.unwrap();
    assert_eq!(sub.selected_quote_id.as_deref(), Some("q1"));

    // The quote id is not validated against the panel.
    ctx.select_quote("sub-1", "q-elsewhere").await.unwrap();
    let sub = ctx.submission("sub-1").await.unwrap();
    assert_eq!(sub.selected_quote_id.as_deref(), Some("q-elsewhere"));
}

#[tokio::test]
async fn test_active_submissions_after_bind() {
    let ctx = InMemoryBrokerContext::from_seed(quoted_seed());
    assert_eq!(ctx.active_submissions().await.len(), 1);

    ctx.bind_quote("sub-1", "q1").await.unwrap();
    assert!(ctx.active_submissions().await.is_empty());
}

#[tokio::test]
async fn test_unknown_submission_lookups() {
    let ctx = InMemoryBrokerContext::from_seed(quoted_seed());
    assert!(ctx.submission("nope").await.is_none());
    assert!(ctx
        .quotes_for_line("nope", InsuranceLine::GeneralLiability)
        .await
        .is_empty());
}

#[tokio::test]
async fn test_scheduled_bind_lands_after_delay() {
    let ctx = InMemoryBrokerContext::from_seed(quoted_seed());

    let handle = ctx
        .schedule_bind("sub-1", "q1", Duration::from_millis(20))
        .await
        .unwrap();

    // Selection applies immediately, the bind only after the delay.
    let sub = ctx.submission("sub-1").await.unwrap();
    assert_eq!(sub.selected_quote_id.as_deref(), Some("q1"));
    assert_eq!(sub.status, SubmissionStatus::Quoted);

    handle.finished().await;
    let sub = ctx.submission("sub-1").await.unwrap();
    assert_eq!(sub.status, SubmissionStatus::Bound);
}

#[tokio::test]
async fn test_dropped_handle_cancels_pending_bind() {
    let ctx = InMemoryBrokerContext::from_seed(quoted_seed());

    let handle = ctx
        .schedule_bind("sub-1", "q1", Duration::from_millis(40))
        .await
        .unwrap();
    drop(handle);

    tokio::time::sleep(Duration::from_millis(120)).await;
    let sub = ctx.submission("sub-1").await.unwrap();
    assert_eq!(sub.status, SubmissionStatus::Quoted, "bind must not land");
}

#[tokio::test]
async fn test_scheduled_bind_for_unknown_submission_fails_fast() {
    let ctx = InMemoryBrokerContext::from_seed(quoted_seed());
    let err = ctx
        .schedule_bind("sub-missing", "q1", Duration::from_millis(10))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::SubmissionNotFound(_)));
}

#[tokio::test]
async fn test_standard_seed_boots_consistent() {
    let ctx = InMemoryBrokerContext::new();

    let all = ctx.submissions().await;
    assert_eq!(all.len(), 6);
    assert_eq!(ctx.active_submissions().await.len(), 4);

    // Only the quoted (non-draft, non-terminal) panel is comparable.
    let quotable = ctx.quotable_submissions().await;
    assert_eq!(quotable.len(), 2);
    assert!(quotable.iter().any(|s| s.id == "sub-002"));
    assert!(quotable.iter().any(|s| s.id == "sub-003"));

    let stats = ctx.stats().await;
    assert_eq!(stats.policies_bound, 1);
    assert_eq!(stats.active_submissions, 4);
    assert_eq!(stats.total_premium, 8_640);
    assert!((stats.conversion_rate - 1.0 / 6.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_update_profile_merges_fields() {
    let ctx = InMemoryBrokerContext::from_seed(quoted_seed());
    ctx.update_profile(BrokerProfileUpdate {
        agency: Some("New Agency".to_string()),
        ..Default::default()
    })
    .await;

    let profile = ctx.profile().await;
    assert_eq!(profile.agency, "New Agency");
    assert_eq!(profile.name, "Test Broker");
}
