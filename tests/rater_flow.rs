//! End-to-end rating workflow against the seeded rater context

mod common;

use anyhow::Result;
use tandem::rater::{
    HistoryFilter, InMemoryRaterContext, RaterContext, RaterProfileUpdate, RatingChoice,
};

#[tokio::test]
async fn test_rate_through_the_entire_queue() -> Result<()> {
    common::init_tracing();
    let ctx = InMemoryRaterContext::new();

    let mut submitted = 0_u32;
    while let Some(task) = ctx.current_task().await {
        let rating = ctx
            .submit_rating(
                RatingChoice::A,
                4,
                format!("preferred A on {}", task.prompt),
                20_000 + u64::from(submitted) * 1_000,
            )
            .await
            .expect("current task was just observed");
        assert_eq!(rating.task_id, task.id);
        submitted += 1;

        // Invariants hold after every single mutation.
        assert!(ctx.is_task_rated(&task.id).await);
        for unrated in ctx.unrated_tasks().await {
            assert!(!ctx.is_task_rated(&unrated.id).await);
        }
    }

    // The seed ships 8 tasks with 3 already rated.
    assert_eq!(submitted, 5);
    assert!(ctx.unrated_tasks().await.is_empty());

    let stats = ctx.stats().await;
    assert_eq!(stats.completed_tasks, stats.total_tasks);
    assert_eq!(stats.pending_tasks, 0);
    assert_eq!(
        stats.choice_distribution.total(),
        ctx.ratings().await.len() as u32
    );

    // Once the queue is empty the submit operation refuses further work.
    assert!(ctx
        .submit_rating(RatingChoice::B, 1, String::new(), 1_000)
        .await
        .is_none());
    Ok(())
}

#[tokio::test]
async fn test_skip_then_submit_rates_the_skipped_to_task() -> Result<()> {
    common::init_tracing();
    let ctx = InMemoryRaterContext::new();

    let first = ctx.current_task().await.expect("seed has unrated tasks");
    ctx.skip_task().await;
    let second = ctx.current_task().await.expect("more than one unrated");
    assert_ne!(first.id, second.id);

    let rating = ctx
        .submit_rating(RatingChoice::Tie, 2, "close call".to_string(), 15_000)
        .await
        .expect("current task exists");
    assert_eq!(rating.task_id, second.id);

    // Pointer snapped back to the head of the unrated list.
    assert_eq!(ctx.current_task().await.unwrap().id, first.id);
    Ok(())
}

#[tokio::test]
async fn test_profile_average_follows_submissions() -> Result<()> {
    common::init_tracing();
    let ctx = InMemoryRaterContext::new();

    let before = ctx.profile().await;
    let times = [10_000_u64, 90_000, 35_000];
    for time in times {
        ctx.submit_rating(RatingChoice::B, 3, String::new(), time)
            .await
            .expect("queue is not empty yet");
    }

    let profile = ctx.profile().await;
    assert_eq!(profile.total_ratings, before.total_ratings + 3);

    // The running mean matches the arithmetic mean over every recorded
    // rating, within integer rounding drift.
    let ratings = ctx.ratings().await;
    let mean = ratings.iter().map(|r| r.time_spent_ms).sum::<u64>() as f64 / ratings.len() as f64;
    assert!((profile.average_time_ms as f64 - mean).abs() <= ratings.len() as f64);
    Ok(())
}

#[tokio::test]
async fn test_history_search_over_live_data() -> Result<()> {
    common::init_tracing();
    let ctx = InMemoryRaterContext::new();

    ctx.submit_rating(
        RatingChoice::BothBad,
        5,
        "neither answer cites the waterfall clause".to_string(),
        44_000,
    )
    .await
    .expect("seed has unrated tasks");

    let hits = ctx
        .search_history(&HistoryFilter {
            query: Some("waterfall".to_string()),
            ..Default::default()
        })
        .await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].choice, RatingChoice::BothBad);

    // Newest-first is the default ordering.
    let all = ctx.search_history(&HistoryFilter::default()).await;
    assert!(all.windows(2).all(|w| w[0].rated_at >= w[1].rated_at));

    let recent = ctx.recent_ratings(2).await;
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].choice, RatingChoice::BothBad);
    Ok(())
}

#[tokio::test]
async fn test_profile_update_and_stats_payload_shape() -> Result<()> {
    common::init_tracing();
    let ctx = InMemoryRaterContext::new();

    ctx.update_profile(RaterProfileUpdate {
        expertise: Some(vec!["reasoning".to_string()]),
        ..Default::default()
    })
    .await;
    assert_eq!(ctx.profile().await.expertise, vec!["reasoning".to_string()]);

    // The stats snapshot serializes with the field names consumers read.
    let payload = serde_json::to_value(ctx.stats().await)?;
    assert!(payload.get("choice_distribution").is_some());
    assert_eq!(payload["daily_ratings"].as_array().unwrap().len(), 7);
    assert!(payload["category_breakdown"].is_array());
    Ok(())
}
