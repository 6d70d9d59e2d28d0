// ABOUTME: Suggestion generation pipeline - availability, scoring, reasoning, ranking
// ABOUTME: Also builds the one-workout-per-day weekly plan by greedy date deduplication
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{Days, NaiveDate, Utc};
use tracing::debug;

use stride_core::{
    Activity, ActivityType, CalendarEvent, SchedulePreference, WorkoutSuggestion,
};

use crate::availability::{AvailabilityFinder, AvailabilitySlot};
use crate::config::SchedulerConfig;
use crate::pattern_analysis::{ActivityPattern, PatternAnalyzer};
use crate::scoring::{SlotScorer, EVENING_HOURS, MORNING_HOURS};

/// Completion rate above which the reasoning mentions the user's history.
const HIGH_COMPLETION_RATE: f64 = 0.7;

/// Slot duration from which the reasoning mentions the extended window.
const EXTENDED_SLOT_MINUTES: u32 = 90;

/// Horizon used when optimizing a weekly plan.
const WEEKLY_HORIZON_DAYS: u32 = 7;

/// Suggestions kept per target workout day after ranking.
const SUGGESTIONS_PER_TARGET_DAY: u32 = 2;

/// Midday hours mentioned in reasoning (no scoring bonus attached).
const MIDDAY_START_HOUR: u8 = 12;
const MIDDAY_END_HOUR: u8 = 14;

/// The workout suggestion engine.
///
/// Stateless and instantiable: every call takes all required data as
/// parameters, including the reference date, so identical inputs always
/// produce identical suggestions apart from `created_at`.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    config: SchedulerConfig,
    finder: AvailabilityFinder,
    scorer: SlotScorer,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionEngine {
    /// Engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SchedulerConfig::default())
    }

    /// Engine with a custom configuration.
    #[must_use]
    pub fn with_config(config: SchedulerConfig) -> Self {
        let finder = AvailabilityFinder::with_config(config.clone());
        let scorer = SlotScorer::with_weights(config.weights.clone());
        Self {
            config,
            finder,
            scorer,
        }
    }

    /// Generate ranked workout suggestions over the coming days.
    ///
    /// `today` is the first day of the horizon, inclusive. Days whose
    /// existing-activity count already meets the weekly-days target are
    /// skipped entirely. Empty inputs produce an empty list, never an
    /// error.
    #[must_use]
    pub fn generate_suggestions(
        &self,
        activities: &[Activity],
        preference: &SchedulePreference,
        calendar_events: &[CalendarEvent],
        today: NaiveDate,
        days_ahead: u32,
    ) -> Vec<WorkoutSuggestion> {
        let patterns = PatternAnalyzer::analyze(activities);
        let candidate_types = self.candidate_types(preference);
        let mut suggestions = Vec::new();

        for offset in 0..days_ahead {
            let Some(date) = today.checked_add_days(Days::new(u64::from(offset))) else {
                break;
            };

            let day_events: Vec<CalendarEvent> = calendar_events
                .iter()
                .filter(|event| event.start.date_naive() == date)
                .cloned()
                .collect();
            let available = self.finder.find_slots(date, &day_events, preference);

            let existing_count = activities
                .iter()
                .filter(|activity| activity.start.date_naive() == date)
                .count();
            if existing_count as u32 >= preference.days_per_week {
                debug!(%date, existing_count, "day already at weekly target, skipping");
                continue;
            }

            for activity_type in &candidate_types {
                let target_duration = preference
                    .workout_durations
                    .get(activity_type)
                    .copied()
                    .unwrap_or(self.config.default_duration_minutes);

                for slot in available
                    .iter()
                    .filter(|slot| slot.duration_minutes >= target_duration)
                {
                    let score =
                        self.scorer
                            .score(slot, &patterns, activity_type, activities);
                    if score < self.config.min_suggestion_score {
                        continue;
                    }

                    suggestions.push(WorkoutSuggestion {
                        id: WorkoutSuggestion::composite_id(date, slot.start, activity_type),
                        suggested_date: date,
                        suggested_time: slot.start,
                        duration_minutes: target_duration,
                        activity_type: activity_type.clone(),
                        score,
                        reasoning: build_reasoning(
                            slot,
                            activity_type,
                            patterns.get(activity_type),
                            existing_count,
                        ),
                        accepted: false,
                        created_at: Utc::now(),
                    });
                }
            }
        }

        // Stable sort: equal scores keep deterministic generation order.
        suggestions.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        suggestions.truncate((preference.days_per_week * SUGGESTIONS_PER_TARGET_DAY) as usize);
        suggestions
    }

    /// Build a one-workout-per-day plan for the coming week.
    ///
    /// Reuses the seven-day suggestion ranking and greedily keeps the
    /// best suggestion per distinct date until the weekly-days target is
    /// reached.
    #[must_use]
    pub fn optimize_weekly_schedule(
        &self,
        activities: &[Activity],
        preference: &SchedulePreference,
        calendar_events: &[CalendarEvent],
        today: NaiveDate,
    ) -> Vec<WorkoutSuggestion> {
        let suggestions = self.generate_suggestions(
            activities,
            preference,
            calendar_events,
            today,
            WEEKLY_HORIZON_DAYS,
        );

        let mut plan = Vec::new();
        let mut used_dates = HashSet::new();
        for suggestion in suggestions {
            if plan.len() as u32 >= preference.days_per_week {
                break;
            }
            if used_dates.insert(suggestion.suggested_date) {
                plan.push(suggestion);
            }
        }
        plan
    }

    /// Candidate activity types for a generation pass: the configured
    /// duration targets when the user declared availability windows, a
    /// fixed starter set otherwise.
    fn candidate_types(&self, preference: &SchedulePreference) -> Vec<ActivityType> {
        if preference.preferred_time_slots.is_empty() {
            self.config.fallback_activity_types.clone()
        } else {
            preference.workout_durations.keys().cloned().collect()
        }
    }
}

/// Assemble the human-readable explanation for a suggestion.
fn build_reasoning(
    slot: &AvailabilitySlot,
    activity_type: &ActivityType,
    pattern: Option<&ActivityPattern>,
    workouts_today: usize,
) -> String {
    let mut reasons: Vec<String> = Vec::new();

    let hour = slot.start.hour;
    if MORNING_HOURS.contains(&hour) {
        reasons.push("Morning workout to start your day energized".into());
    } else if (MIDDAY_START_HOUR..=MIDDAY_END_HOUR).contains(&hour) {
        reasons.push("Midday session to break up your day".into());
    } else if EVENING_HOURS.contains(&hour) {
        reasons.push("Evening workout after work hours".into());
    }

    if let Some(pattern) = pattern {
        if pattern.completion_rate > HIGH_COMPLETION_RATE {
            let percent = (pattern.completion_rate * 100.0).round() as i64;
            reasons.push(format!(
                "You have a {percent}% completion rate for {activity_type}"
            ));
        }
    }

    if workouts_today == 0 {
        reasons.push("First workout of the day".into());
    }

    if slot.duration_minutes >= EXTENDED_SLOT_MINUTES {
        reasons.push("Extended time slot available for a longer session".into());
    }

    if reasons.is_empty() {
        "Good time slot based on your schedule".into()
    } else {
        reasons.join(". ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::BTreeMap;
    use stride_core::{
        ActivityBuilder, CalendarIntegration, ClockTime, PreferredTimeSlot, SchedulePriority,
    };

    fn time(hour: u8, minute: u8) -> ClockTime {
        ClockTime::new(hour, minute).unwrap()
    }

    fn preference(
        slots: Vec<PreferredTimeSlot>,
        durations: BTreeMap<ActivityType, u32>,
        days_per_week: u32,
    ) -> SchedulePreference {
        SchedulePreference {
            id: "pref".into(),
            preferred_time_slots: slots,
            workout_durations: durations,
            priority: SchedulePriority::Flexible,
            days_per_week,
            calendar_integration: Some(CalendarIntegration::manual()),
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    // 2025-06-02 is a Monday.
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    #[test]
    fn declared_windows_use_configured_duration_targets() {
        let mut durations = BTreeMap::new();
        durations.insert(ActivityType::Running, 45);
        let pref = preference(
            vec![PreferredTimeSlot::new(1, time(8, 0), time(10, 0)).unwrap()],
            durations,
            3,
        );

        let suggestions =
            SuggestionEngine::new().generate_suggestions(&[], &pref, &[], monday(), 1);

        assert!(!suggestions.is_empty());
        assert!(suggestions
            .iter()
            .all(|s| s.activity_type == ActivityType::Running));
        assert!(suggestions.iter().all(|s| s.duration_minutes == 45));
    }

    #[test]
    fn no_declared_windows_fall_back_to_starter_types() {
        let pref = preference(vec![], BTreeMap::new(), 3);
        let suggestions =
            SuggestionEngine::new().generate_suggestions(&[], &pref, &[], monday(), 1);

        let types: HashSet<&ActivityType> =
            suggestions.iter().map(|s| &s.activity_type).collect();
        assert!(types.contains(&ActivityType::Running));
        // Generic slots baseline 0.5 + open day 0.2 clears the threshold.
        assert!(suggestions.iter().all(|s| s.score >= 0.4));
    }

    #[test]
    fn suggestion_ids_are_deterministic_composites() {
        let mut durations = BTreeMap::new();
        durations.insert(ActivityType::Yoga, 30);
        let pref = preference(
            vec![PreferredTimeSlot::new(1, time(7, 0), time(7, 30)).unwrap()],
            durations,
            2,
        );

        let suggestions =
            SuggestionEngine::new().generate_suggestions(&[], &pref, &[], monday(), 1);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].id, "2025-06-02-07:00-yoga");
    }

    #[test]
    fn reasoning_falls_back_when_no_clause_applies() {
        // 15:00 slot, one existing workout, short window: no clause fires.
        let slot = AvailabilitySlot {
            date: monday(),
            start: time(15, 0),
            end: time(15, 30),
            duration_minutes: 30,
            score: 1.0,
        };
        let reasoning = build_reasoning(&slot, &ActivityType::Gym, None, 1);
        assert_eq!(reasoning, "Good time slot based on your schedule");
    }

    #[test]
    fn reasoning_joins_clauses_with_periods() {
        let slot = AvailabilitySlot {
            date: monday(),
            start: time(7, 0),
            end: time(7, 30),
            duration_minutes: 120,
            score: 1.0,
        };
        let pattern = ActivityPattern {
            preferred_times: vec![time(7, 0)],
            completion_rate: 0.8,
            average_duration_minutes: 45.0,
        };
        let reasoning = build_reasoning(&slot, &ActivityType::Running, Some(&pattern), 0);
        assert_eq!(
            reasoning,
            "Morning workout to start your day energized. \
             You have a 80% completion rate for running. \
             First workout of the day. \
             Extended time slot available for a longer session"
        );
    }

    #[test]
    fn full_days_are_skipped_even_with_open_slots() {
        let mut durations = BTreeMap::new();
        durations.insert(ActivityType::Running, 30);
        let pref = preference(
            vec![PreferredTimeSlot::new(1, time(8, 0), time(10, 0)).unwrap()],
            durations,
            1,
        );
        let existing = vec![ActivityBuilder::new(
            "a",
            "Lift",
            ActivityType::Gym,
            monday().and_hms_opt(18, 0, 0).unwrap().and_utc(),
            45,
        )
        .build()];

        let suggestions =
            SuggestionEngine::new().generate_suggestions(&existing, &pref, &[], monday(), 1);
        assert!(suggestions.is_empty());
    }

    #[test]
    fn weekly_plan_deduplicates_dates() {
        let mut durations = BTreeMap::new();
        durations.insert(ActivityType::Running, 30);
        // One exact-width window each on Monday (1), Wednesday (3), and
        // Friday (5): one candidate slot per day survives.
        let pref = preference(
            vec![
                PreferredTimeSlot::new(1, time(7, 0), time(7, 30)).unwrap(),
                PreferredTimeSlot::new(3, time(7, 0), time(7, 30)).unwrap(),
                PreferredTimeSlot::new(5, time(7, 0), time(7, 30)).unwrap(),
            ],
            durations,
            3,
        );

        let plan =
            SuggestionEngine::new().optimize_weekly_schedule(&[], &pref, &[], monday());

        let dates: HashSet<NaiveDate> = plan.iter().map(|s| s.suggested_date).collect();
        assert_eq!(dates.len(), plan.len());
        assert!(plan.len() as u32 <= pref.days_per_week);
        assert_eq!(plan.len(), 3);
    }
}
