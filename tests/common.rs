// ABOUTME: Shared helpers for integration tests
// ABOUTME: Builders for preferences, windows, and activities with sensible defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeZone, Utc};
use stride::models::{
    Activity, ActivityBuilder, ActivityType, CalendarIntegration, ClockTime, PreferredTimeSlot,
    SchedulePreference, SchedulePriority,
};

/// `ClockTime` from hour and minute literals.
pub fn time(hour: u8, minute: u8) -> ClockTime {
    ClockTime::new(hour, minute).unwrap()
}

/// Preferred window on a Sunday-based day-of-week index.
pub fn window(day_of_week: u8, start: (u8, u8), end: (u8, u8)) -> PreferredTimeSlot {
    PreferredTimeSlot::new(day_of_week, time(start.0, start.1), time(end.0, end.1)).unwrap()
}

/// Duration targets from a literal slice.
pub fn durations(entries: &[(ActivityType, u32)]) -> BTreeMap<ActivityType, u32> {
    entries.iter().cloned().collect()
}

/// A schedule preference with no calendar integration.
pub fn preference(
    slots: Vec<PreferredTimeSlot>,
    workout_durations: BTreeMap<ActivityType, u32>,
    days_per_week: u32,
) -> SchedulePreference {
    SchedulePreference {
        id: "pref-1".into(),
        preferred_time_slots: slots,
        workout_durations,
        priority: SchedulePriority::Flexible,
        days_per_week,
        calendar_integration: None,
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}

/// The same preference wired to a calendar integration.
pub fn preference_with_calendar(
    slots: Vec<PreferredTimeSlot>,
    workout_durations: BTreeMap<ActivityType, u32>,
    days_per_week: u32,
    integration: CalendarIntegration,
) -> SchedulePreference {
    let mut pref = preference(slots, workout_durations, days_per_week);
    pref.calendar_integration = Some(integration);
    pref
}

/// An activity on `date` at `hour:00`.
pub fn activity_at(
    date: NaiveDate,
    hour: u32,
    activity_type: ActivityType,
    completed: bool,
) -> Activity {
    let start = date.and_hms_opt(hour, 0, 0).unwrap().and_utc();
    ActivityBuilder::new(
        format!("act-{date}-{hour}"),
        "Workout",
        activity_type,
        start,
        45,
    )
    .completed(completed)
    .build()
}

/// 2025-06-02, a Monday (day-of-week index 1).
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}
