// ABOUTME: Historical pattern analysis deriving per-activity-type preferences
// ABOUTME: Preferred times, completion rate, and average duration from completed workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use std::collections::HashMap;

use stride_core::{Activity, ActivityType, ClockTime};

/// Average duration assumed when a completed group is empty.
const DEFAULT_AVERAGE_DURATION_MINUTES: f64 = 45.0;

/// Historical summary for one activity type, derived from the user's
/// completed workouts of that type.
///
/// Patterns are ephemeral: recomputed on every generation pass, never
/// cached. A type with no logged history produces no pattern at all.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityPattern {
    /// Wall-clock start times of the completed workouts
    pub preferred_times: Vec<ClockTime>,
    /// Completed count divided by total logged count for the type
    pub completion_rate: f64,
    /// Mean duration in minutes of the completed workouts
    pub average_duration_minutes: f64,
}

/// Derives per-activity-type patterns from activity history.
pub struct PatternAnalyzer;

impl PatternAnalyzer {
    /// Analyze a user's full activity history.
    ///
    /// Only completed activities contribute a pattern entry; the
    /// completion rate still counts every logged activity of the type in
    /// its denominator. Absence of history means absence of an entry,
    /// not a zero-valued one.
    #[must_use]
    pub fn analyze(activities: &[Activity]) -> HashMap<ActivityType, ActivityPattern> {
        let mut groups: HashMap<ActivityType, Vec<&Activity>> = HashMap::new();
        for activity in activities.iter().filter(|a| a.completed) {
            groups
                .entry(activity.activity_type.clone())
                .or_default()
                .push(activity);
        }

        let mut patterns = HashMap::with_capacity(groups.len());
        for (activity_type, completed) in groups {
            let preferred_times: Vec<ClockTime> = completed
                .iter()
                .map(|a| ClockTime::from_datetime(&a.start))
                .collect();

            let total_logged = activities
                .iter()
                .filter(|a| a.activity_type == activity_type)
                .count();
            let completion_rate = if total_logged > 0 {
                completed.len() as f64 / total_logged as f64
            } else {
                0.0
            };

            let average_duration_minutes = if completed.is_empty() {
                DEFAULT_AVERAGE_DURATION_MINUTES
            } else {
                completed
                    .iter()
                    .map(|a| f64::from(a.duration_minutes))
                    .sum::<f64>()
                    / completed.len() as f64
            };

            patterns.insert(
                activity_type,
                ActivityPattern {
                    preferred_times,
                    completion_rate,
                    average_duration_minutes,
                },
            );
        }

        patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use stride_core::ActivityBuilder;

    fn run_at(hour: u32, completed: bool, duration: u32) -> Activity {
        let start = Utc.with_ymd_and_hms(2025, 5, 5, hour, 0, 0).unwrap();
        ActivityBuilder::new("a", "Run", ActivityType::Running, start, duration)
            .completed(completed)
            .build()
    }

    #[test]
    fn completion_rate_counts_all_logged_activities() {
        let activities = vec![
            run_at(7, true, 40),
            run_at(7, true, 50),
            run_at(18, false, 30),
        ];

        let patterns = PatternAnalyzer::analyze(&activities);
        let pattern = patterns.get(&ActivityType::Running).unwrap();

        assert!((pattern.completion_rate - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(pattern.preferred_times.len(), 2);
        assert!((pattern.average_duration_minutes - 45.0).abs() < 1e-9);
    }

    #[test]
    fn types_without_history_have_no_entry() {
        let activities = vec![run_at(7, true, 40)];
        let patterns = PatternAnalyzer::analyze(&activities);

        assert!(patterns.contains_key(&ActivityType::Running));
        assert!(!patterns.contains_key(&ActivityType::Yoga));
    }

    #[test]
    fn incomplete_only_history_yields_no_pattern() {
        let activities = vec![run_at(7, false, 40), run_at(18, false, 40)];
        assert!(PatternAnalyzer::analyze(&activities).is_empty());
    }

    #[test]
    fn preferred_times_keep_wall_clock_starts() {
        let activities = vec![run_at(6, true, 30), run_at(19, true, 30)];
        let patterns = PatternAnalyzer::analyze(&activities);
        let pattern = patterns.get(&ActivityType::Running).unwrap();

        let hours: Vec<u8> = pattern.preferred_times.iter().map(|t| t.hour).collect();
        assert!(hours.contains(&6));
        assert!(hours.contains(&19));
    }
}
