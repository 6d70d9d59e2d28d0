// ABOUTME: Domain model re-exports from the stride-core crate
// ABOUTME: Preserves crate-local import paths while delegating to the extracted crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Shared domain models, re-exported from `stride-core`.

pub use stride_core::models::{
    Activity, ActivityBuilder, ActivityType, CalendarEvent, CalendarIntegration,
    CalendarProviderKind, ClockTime, PreferredTimeSlot, SchedulePreference, SchedulePriority,
    WeeklyStats, WorkoutSuggestion,
};
pub use stride_core::ModelError;
