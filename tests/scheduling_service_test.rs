// ABOUTME: Integration tests for the scheduling service orchestration cycle
// ABOUTME: Setup-required, wholesale regeneration, weekly planning, and acceptance flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{durations, preference, window};
use stride::errors::AppError;
use stride::models::ActivityType;
use stride::services::SchedulingService;
use uuid::Uuid;

/// A preference with a morning window on every day of the week, so the
/// cycle produces suggestions no matter which weekday the test runs on.
fn everyday_preference() -> stride::models::SchedulePreference {
    let windows = (0..7).map(|day| window(day, (7, 0), (9, 0))).collect();
    preference(windows, durations(&[(ActivityType::Running, 30)]), 7)
}

#[tokio::test]
async fn missing_preference_reports_setup_required() {
    let service = SchedulingService::in_memory();
    let user_id = Uuid::new_v4();

    let err = service.regenerate_suggestions(user_id).await.unwrap_err();
    assert!(matches!(err, AppError::SetupRequired { user_id: id } if id == user_id));
}

#[tokio::test]
async fn regeneration_replaces_the_stored_set_wholesale() {
    let service = SchedulingService::in_memory();
    let user_id = Uuid::new_v4();
    service
        .preferences()
        .upsert_preference(user_id, everyday_preference())
        .await
        .unwrap();

    let first = service.regenerate_suggestions(user_id).await.unwrap();
    assert!(!first.is_empty());

    let second = service.regenerate_suggestions(user_id).await.unwrap();
    let stored = service
        .suggestions()
        .get_suggestions(user_id, usize::MAX)
        .await
        .unwrap();

    // The second cycle replaced the first set instead of appending to it.
    assert_eq!(stored.len(), second.len());
}

#[tokio::test]
async fn regenerated_suggestions_are_ranked_and_bounded() {
    let service = SchedulingService::in_memory();
    let user_id = Uuid::new_v4();
    let pref = everyday_preference();
    let cap = (pref.days_per_week * 2) as usize;
    service
        .preferences()
        .upsert_preference(user_id, pref)
        .await
        .unwrap();

    let suggestions = service.regenerate_suggestions(user_id).await.unwrap();

    assert!(suggestions.len() <= cap);
    for pair in suggestions.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for suggestion in &suggestions {
        assert!(suggestion.score >= 0.4);
        assert!(!suggestion.reasoning.is_empty());
        assert!(!suggestion.accepted);
    }
}

#[tokio::test]
async fn accepting_a_suggestion_logs_a_planned_workout() {
    let service = SchedulingService::in_memory();
    let user_id = Uuid::new_v4();
    service
        .preferences()
        .upsert_preference(user_id, everyday_preference())
        .await
        .unwrap();

    let suggestions = service.regenerate_suggestions(user_id).await.unwrap();
    let chosen = suggestions.first().unwrap();

    let activity = service
        .accept_suggestion(user_id, &chosen.id)
        .await
        .unwrap();

    assert_eq!(activity.activity_type, chosen.activity_type);
    assert_eq!(activity.duration_minutes, chosen.duration_minutes);
    assert_eq!(activity.title, "Running Workout");
    assert!(!activity.completed);
    assert!(!activity.id.is_empty());

    // The suggestion is flagged accepted in the store.
    let stored = service
        .suggestions()
        .get_suggestions(user_id, usize::MAX)
        .await
        .unwrap();
    let updated = stored.iter().find(|s| s.id == chosen.id).unwrap();
    assert!(updated.accepted);

    // And the planned workout is readable back from the activity store.
    let activities = service.activities().get_activities(user_id).await.unwrap();
    assert_eq!(activities.len(), 1);
}

#[tokio::test]
async fn accepting_an_unknown_suggestion_is_not_found() {
    let service = SchedulingService::in_memory();
    let user_id = Uuid::new_v4();
    service
        .preferences()
        .upsert_preference(user_id, everyday_preference())
        .await
        .unwrap();
    service.regenerate_suggestions(user_id).await.unwrap();

    let err = service
        .accept_suggestion(user_id, "2099-01-01-07:00-running")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn weekly_plan_is_one_workout_per_day() {
    let service = SchedulingService::in_memory();
    let user_id = Uuid::new_v4();
    let pref = everyday_preference();
    let target = pref.days_per_week;
    service
        .preferences()
        .upsert_preference(user_id, pref)
        .await
        .unwrap();

    let plan = service.weekly_plan(user_id).await.unwrap();

    assert!(!plan.is_empty());
    assert!(plan.len() as u32 <= target);
    let mut dates: Vec<_> = plan.iter().map(|s| s.suggested_date).collect();
    dates.sort_unstable();
    dates.dedup();
    assert_eq!(dates.len(), plan.len());

    // Planning is read-only: the stored suggestion set is untouched.
    let stored = service
        .suggestions()
        .get_suggestions(user_id, usize::MAX)
        .await
        .unwrap();
    assert!(stored.is_empty());
}
