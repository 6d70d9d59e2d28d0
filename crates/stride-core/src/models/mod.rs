// ABOUTME: Domain model module for the Stride fitness platform
// ABOUTME: Activities, schedule preferences, calendar events, suggestions, and weekly stats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Shared domain models.
//!
//! Wall-clock times and dates are parsed into value types at the edge
//! ([`ClockTime`], [`chrono::NaiveDate`]); no string re-parsing happens
//! downstream of these models.

/// Activity records and the activity type enumeration
pub mod activity;

/// Activity type enumeration with parsing and display
pub mod activity_type;

/// Calendar events and integration descriptors
pub mod calendar;

/// Schedule preferences and preferred time windows
pub mod preference;

/// Weekly aggregate statistics
pub mod stats;

/// Workout suggestion output model
pub mod suggestion;

/// Wall-clock time value type
pub mod time;

pub use activity::{Activity, ActivityBuilder};
pub use activity_type::ActivityType;
pub use calendar::{CalendarEvent, CalendarIntegration, CalendarProviderKind};
pub use preference::{PreferredTimeSlot, SchedulePreference, SchedulePriority};
pub use stats::WeeklyStats;
pub use suggestion::WorkoutSuggestion;
pub use time::ClockTime;
