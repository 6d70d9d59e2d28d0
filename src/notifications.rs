// ABOUTME: Workout reminder scheduling ahead of accepted workouts
// ABOUTME: Fire-and-forget side effect; reminders in the past are skipped, never errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppResult;
use crate::models::Activity;

/// Minutes before a workout's start at which the reminder fires.
const REMINDER_LEAD_MINUTES: i64 = 60;

/// A scheduled reminder handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledReminder {
    /// Scheduler-assigned reminder id
    pub id: String,
    /// When the reminder fires
    pub fire_at: DateTime<Utc>,
    /// Reminder body shown to the user
    pub body: String,
}

/// Schedules reminders for upcoming workouts.
#[async_trait]
pub trait NotificationScheduler: Send + Sync {
    /// Schedule a reminder one hour before the activity starts.
    ///
    /// Returns `None` when the reminder time has already passed; that is
    /// an expected outcome, not an error.
    async fn schedule_workout_reminder(
        &self,
        activity: &Activity,
    ) -> AppResult<Option<ScheduledReminder>>;
}

/// Scheduler that records reminders to the log only.
///
/// Stands in for a platform push service in tests and single-process
/// deployments.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotificationScheduler;

#[async_trait]
impl NotificationScheduler for TracingNotificationScheduler {
    async fn schedule_workout_reminder(
        &self,
        activity: &Activity,
    ) -> AppResult<Option<ScheduledReminder>> {
        let fire_at = activity.start - Duration::minutes(REMINDER_LEAD_MINUTES);
        if fire_at <= Utc::now() {
            debug!(activity_id = %activity.id, "reminder time already passed, skipping");
            return Ok(None);
        }

        let reminder = ScheduledReminder {
            id: Uuid::new_v4().to_string(),
            fire_at,
            body: format!("{} starts in 1 hour! Get ready to crush it!", activity.title),
        };
        info!(
            reminder_id = %reminder.id,
            %fire_at,
            activity_id = %activity.id,
            "scheduled workout reminder"
        );
        Ok(Some(reminder))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityBuilder, ActivityType};

    fn activity_starting(start: DateTime<Utc>) -> Activity {
        ActivityBuilder::new("a", "Morning Run", ActivityType::Running, start, 45).build()
    }

    #[tokio::test]
    async fn future_workout_gets_reminder_an_hour_before() {
        let start = Utc::now() + Duration::hours(4);
        let reminder = TracingNotificationScheduler
            .schedule_workout_reminder(&activity_starting(start))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(reminder.fire_at, start - Duration::hours(1));
        assert!(reminder.body.contains("Morning Run"));
    }

    #[tokio::test]
    async fn past_workout_is_skipped() {
        let start = Utc::now() - Duration::hours(1);
        let result = TracingNotificationScheduler
            .schedule_workout_reminder(&activity_starting(start))
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
