//! Tests for the rater context covering the rating workflow

use super::*;
use crate::testing::TaskBuilder;

fn three_task_seed() -> RaterSeed {
    RaterSeed {
        tasks: vec![
            TaskBuilder::new("task-1").category("Coding").build(),
            TaskBuilder::new("task-2").category("Coding").build(),
            TaskBuilder::new("task-3").category("Writing").build(),
        ],
        ratings: Vec::new(),
        profile: RaterProfile {
            name: "Test Rater".to_string(),
            email: "rater@example.com".to_string(),
            expertise: Vec::new(),
            total_ratings: 0,
            average_time_ms: 0,
            agreement_rate: 1.0,
        },
    }
}

#[tokio::test]
async fn test_submit_rating_scenario() {
    let ctx = InMemoryRaterContext::from_seed(three_task_seed());

    let rating = ctx
        .submit_rating(RatingChoice::A, 4, "A was clearer".to_string(), 30_000)
        .await
        .expect("a current task exists");
    assert_eq!(rating.task_id, "task-1");
    assert_eq!(rating.confidence, 4);

    assert!(ctx.is_task_rated("task-1").await);
    assert!(ctx
        .unrated_tasks()
        .await
        .iter()
        .all(|t| t.id != "task-1"));

    let stats = ctx.stats().await;
    assert_eq!(stats.completed_tasks, 1);
    assert_eq!(stats.pending_tasks, 2);
    assert_eq!(stats.choice_distribution.a, 1);

    // Pointer resets to the head of the shortened unrated list.
    assert_eq!(ctx.current_task().await.unwrap().id, "task-2");
}

#[tokio::test]
async fn test_rating_each_task_empties_the_queue() {
    let ctx = InMemoryRaterContext::from_seed(three_task_seed());

    for _ in 0..3 {
        assert!(ctx
            .submit_rating(RatingChoice::B, 3, String::new(), 10_000)
            .await
            .is_some());
    }

    assert!(ctx.unrated_tasks().await.is_empty());
    assert!(ctx.current_task().await.is_none());

    // With nothing left to rate, submit is a no-op.
    let rejected = ctx
        .submit_rating(RatingChoice::A, 5, String::new(), 10_000)
        .await;
    assert!(rejected.is_none());
    assert_eq!(ctx.ratings().await.len(), 3);
    assert_eq!(ctx.profile().await.total_ratings, 3);
}

#[tokio::test]
async fn test_running_average_tracks_mean() {
    let ctx = InMemoryRaterContext::from_seed(three_task_seed());
    let times = [12_000_u64, 48_000, 21_000];
    for time in times {
        assert!(ctx
            .submit_rating(RatingChoice::Tie, 3, String::new(), time)
            .await
            .is_some());
    }

    let mean = times.iter().sum::<u64>() as f64 / times.len() as f64;
    let average = ctx.profile().await.average_time_ms;
    assert!((average as f64 - mean).abs() <= 1.0, "got {average}");
}

#[tokio::test]
async fn test_skip_wraps_around() {
    let ctx = InMemoryRaterContext::from_seed(three_task_seed());

    assert_eq!(ctx.current_task().await.unwrap().id, "task-1");
    ctx.skip_task().await;
    assert_eq!(ctx.current_task().await.unwrap().id, "task-2");
    ctx.skip_task().await;
    assert_eq!(ctx.current_task().await.unwrap().id, "task-3");
    ctx.skip_task().await;
    assert_eq!(ctx.current_task().await.unwrap().id, "task-1");
}

#[tokio::test]
async fn test_no_duplicate_ratings_per_task() {
    let ctx = InMemoryRaterContext::from_seed(three_task_seed());
    assert!(ctx
        .submit_rating(RatingChoice::A, 4, String::new(), 5_000)
        .await
        .is_some());
    assert!(ctx
        .submit_rating(RatingChoice::B, 4, String::new(), 5_000)
        .await
        .is_some());

    let ratings = ctx.ratings().await;
    let mut task_ids: Vec<&str> = ratings.iter().map(|r| r.task_id.as_str()).collect();
    task_ids.sort_unstable();
    task_ids.dedup();
    assert_eq!(task_ids.len(), ratings.len());

    // Rated ids never show up in the unrated view.
    for task in ctx.unrated_tasks().await {
        assert!(!ctx.is_task_rated(&task.id).await);
    }
}

#[tokio::test]
async fn test_update_profile_merges_fields() {
    let ctx = InMemoryRaterContext::from_seed(three_task_seed());
    ctx.update_profile(RaterProfileUpdate {
        email: Some("new@example.com".to_string()),
        ..Default::default()
    })
    .await;

    let profile = ctx.profile().await;
    assert_eq!(profile.email, "new@example.com");
    assert_eq!(profile.name, "Test Rater");
}

#[tokio::test]
async fn test_standard_seed_boots_consistent() {
    let ctx = InMemoryRaterContext::new();
    let stats = ctx.stats().await;

    assert_eq!(stats.total_tasks, 8);
    assert_eq!(stats.completed_tasks, 3);
    assert_eq!(stats.pending_tasks, 5);
    assert_eq!(ctx.unrated_tasks().await.len(), 5);

    // Seed ratings all landed inside the dashboard's trailing week.
    let week_total: u32 = stats.daily_ratings.iter().map(|d| d.count).sum();
    assert_eq!(week_total, 3);

    let current = ctx.current_task().await.expect("unrated tasks remain");
    assert_eq!(current.id, "task-004");
}

#[tokio::test]
async fn test_rating_ids_are_unique() {
    let ctx = InMemoryRaterContext::from_seed(three_task_seed());
    assert!(ctx
        .submit_rating(RatingChoice::A, 3, String::new(), 1_000)
        .await
        .is_some());
    assert!(ctx
        .submit_rating(RatingChoice::A, 3, String::new(), 1_000)
        .await
        .is_some());

    let ratings = ctx.ratings().await;
    assert_ne!(ratings[0].id, ratings[1].id);
    assert!(ratings.iter().all(|r| r.id.starts_with("rating-")));
}
