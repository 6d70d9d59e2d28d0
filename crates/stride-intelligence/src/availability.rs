// ABOUTME: Availability finder enumerating open candidate slots on a given day
// ABOUTME: Scans declared windows at full baseline score, falls back to generic working hours
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use chrono::{Datelike, NaiveDate};
use stride_core::{CalendarEvent, ClockTime, PreferredTimeSlot, SchedulePreference};

use crate::config::SchedulerConfig;

/// An open candidate window on a specific date.
///
/// Slots are ephemeral: they exist only within one suggestion-generation
/// pass and are never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilitySlot {
    /// Calendar date of the slot
    pub date: NaiveDate,
    /// Candidate start time
    pub start: ClockTime,
    /// Candidate end time (start plus the probe width)
    pub end: ClockTime,
    /// Usable minutes from the candidate start to the window end, capped
    pub duration_minutes: u32,
    /// Baseline desirability score before pattern and load adjustments
    pub score: f64,
}

/// Enumerates open slots for a day from declared windows or, absent any,
/// a generic working-hours scan.
///
/// Users who declared explicit windows are only ever offered slots inside
/// them; users without declarations get lower-baseline generic offers so
/// declared availability always outranks guessed availability.
#[derive(Debug, Clone)]
pub struct AvailabilityFinder {
    config: SchedulerConfig,
}

impl Default for AvailabilityFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl AvailabilityFinder {
    /// Finder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SchedulerConfig::default())
    }

    /// Finder with a custom configuration.
    #[must_use]
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Enumerate the open slots for `date`.
    ///
    /// `events` should be the day's busy blocks; events on other dates
    /// simply never conflict. Output depends only on the inputs.
    #[must_use]
    pub fn find_slots(
        &self,
        date: NaiveDate,
        events: &[CalendarEvent],
        preference: &SchedulePreference,
    ) -> Vec<AvailabilitySlot> {
        let day_index = date.weekday().num_days_from_sunday();
        let windows: Vec<&PreferredTimeSlot> = preference
            .preferred_time_slots
            .iter()
            .filter(|slot| u32::from(slot.day_of_week) == day_index)
            .collect();

        if windows.is_empty() {
            return self.generic_slots(date, events);
        }

        let mut slots = Vec::new();
        for window in windows {
            self.scan_window(
                date,
                events,
                window.start.minutes_from_midnight(),
                window.end.minutes_from_midnight(),
                self.config.preferred_probe_minutes,
                self.config.preferred_slot_score,
                &mut slots,
            );
        }
        slots
    }

    /// Generic working-hours scan used when no window is declared for the
    /// day's weekday.
    fn generic_slots(&self, date: NaiveDate, events: &[CalendarEvent]) -> Vec<AvailabilitySlot> {
        let mut slots = Vec::new();
        self.scan_window(
            date,
            events,
            u32::from(self.config.working_hours.start_hour) * 60,
            u32::from(self.config.working_hours.end_hour) * 60,
            self.config.generic_probe_minutes,
            self.config.generic_slot_score,
            &mut slots,
        );
        slots
    }

    /// Step through `[window_start, window_end)` emitting conflict-free
    /// probe-width candidates. Durations run from the candidate start to
    /// the window end, capped at the configured maximum.
    #[allow(clippy::too_many_arguments)]
    fn scan_window(
        &self,
        date: NaiveDate,
        events: &[CalendarEvent],
        window_start: u32,
        window_end: u32,
        probe_minutes: u32,
        baseline_score: f64,
        slots: &mut Vec<AvailabilitySlot>,
    ) {
        let mut cursor = window_start;
        while cursor < window_end {
            let probe_end = cursor + probe_minutes;
            if probe_end > window_end {
                break;
            }

            if !conflicts(date, cursor, probe_end, events) {
                let remaining = window_end - cursor;
                slots.push(AvailabilitySlot {
                    date,
                    start: ClockTime::from_minutes(cursor),
                    end: ClockTime::from_minutes(probe_end),
                    duration_minutes: remaining.min(self.config.max_slot_minutes),
                    score: baseline_score,
                });
            }

            cursor += self.config.scan_step_minutes;
        }
    }
}

/// Interval-overlap predicate shared by both scan modes.
///
/// A candidate conflicts with an event when its start or end falls
/// strictly inside the event, or when it fully contains the event.
/// Comparisons use naive date-times, so all-day (midnight-to-midnight)
/// events swallow every in-day candidate and events on other dates never
/// match.
fn conflicts(date: NaiveDate, start_minutes: u32, end_minutes: u32, events: &[CalendarEvent]) -> bool {
    let candidate_start = date.and_time(ClockTime::from_minutes(start_minutes).to_naive_time());
    let candidate_end = date.and_time(ClockTime::from_minutes(end_minutes).to_naive_time());

    events.iter().any(|event| {
        let event_start = event.start.naive_utc();
        let event_end = event.end.naive_utc();
        (candidate_start > event_start && candidate_start < event_end)
            || (candidate_end > event_start && candidate_end < event_end)
            || (candidate_start < event_start && candidate_end > event_end)
    })
}
