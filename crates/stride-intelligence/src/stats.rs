// ABOUTME: Weekly statistics calculator over completed activity history
// ABOUTME: Monday-based week containing a reference date, progress capped at 100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use chrono::{Datelike, Days, NaiveDate};
use stride_core::{Activity, WeeklyStats};

/// Computes weekly aggregate statistics from activity history.
pub struct WeeklyStatsCalculator;

impl WeeklyStatsCalculator {
    /// Stats for the Monday-based week containing `reference_date`.
    ///
    /// Only completed activities count. `week_progress` is the completed
    /// count against `weekly_target`, as a percentage capped at 100; a
    /// zero target reports zero progress.
    #[must_use]
    pub fn for_week(
        activities: &[Activity],
        reference_date: NaiveDate,
        weekly_target: u32,
    ) -> WeeklyStats {
        let days_from_monday = u64::from(reference_date.weekday().num_days_from_monday());
        let week_start = reference_date
            .checked_sub_days(Days::new(days_from_monday))
            .unwrap_or(reference_date);
        let week_end = week_start
            .checked_add_days(Days::new(6))
            .unwrap_or(week_start);

        let completed: Vec<&Activity> = activities
            .iter()
            .filter(|activity| {
                let date = activity.start.date_naive();
                activity.completed && date >= week_start && date <= week_end
            })
            .collect();

        let total_duration_minutes = completed.iter().map(|a| a.duration_minutes).sum();
        let total_distance_km = completed.iter().filter_map(|a| a.distance_km).sum();
        let total_calories = completed.iter().filter_map(|a| a.calories).sum();

        let week_progress = if weekly_target == 0 {
            0.0
        } else {
            (completed.len() as f64 / f64::from(weekly_target) * 100.0).min(100.0)
        };

        WeeklyStats {
            activities_completed: completed.len() as u32,
            total_duration_minutes,
            total_distance_km,
            total_calories,
            week_progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::{ActivityBuilder, ActivityType};

    fn activity_on(date: NaiveDate, completed: bool) -> Activity {
        let start = date.and_hms_opt(7, 0, 0).unwrap().and_utc();
        ActivityBuilder::new("a", "Run", ActivityType::Running, start, 40)
            .distance_km(5.0)
            .calories(300)
            .completed(completed)
            .build()
    }

    #[test]
    fn only_completed_activities_in_week_count() {
        let monday = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let sunday_before = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let wednesday = NaiveDate::from_ymd_opt(2025, 6, 4).unwrap();

        let activities = vec![
            activity_on(monday, true),
            activity_on(wednesday, true),
            activity_on(wednesday, false),
            activity_on(sunday_before, true), // previous week
        ];

        let stats = WeeklyStatsCalculator::for_week(&activities, wednesday, 4);
        assert_eq!(stats.activities_completed, 2);
        assert_eq!(stats.total_duration_minutes, 80);
        assert!((stats.total_distance_km - 10.0).abs() < 1e-9);
        assert_eq!(stats.total_calories, 600);
        assert!((stats.week_progress - 50.0).abs() < 1e-9);
    }

    #[test]
    fn progress_caps_at_one_hundred() {
        let monday = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let activities = vec![
            activity_on(monday, true),
            activity_on(monday, true),
            activity_on(monday, true),
        ];

        let stats = WeeklyStatsCalculator::for_week(&activities, monday, 2);
        assert!((stats.week_progress - 100.0).abs() < 1e-9);
    }

    #[test]
    fn zero_target_reports_zero_progress() {
        let monday = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let stats = WeeklyStatsCalculator::for_week(&[activity_on(monday, true)], monday, 0);
        assert!(stats.week_progress.abs() < f64::EPSILON);
    }
}
