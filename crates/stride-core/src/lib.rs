// ABOUTME: Library entry point for the Stride core domain crate
// ABOUTME: Re-exports models and model-level errors for the rest of the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! # Stride Core
//!
//! Foundation crate for the Stride fitness platform. Holds the domain
//! models shared by the scheduling engine and the application layer:
//! activities, schedule preferences, calendar events, and workout
//! suggestions, together with the typed errors their boundary parsing
//! can produce.
//!
//! This crate performs no I/O and has no async surface.

/// Model-level error types
pub mod errors;

/// Domain models for activities, preferences, calendars, and suggestions
pub mod models;

pub use errors::ModelError;
pub use models::{
    Activity, ActivityBuilder, ActivityType, CalendarEvent, CalendarIntegration,
    CalendarProviderKind, ClockTime, PreferredTimeSlot, SchedulePreference, SchedulePriority,
    WeeklyStats, WorkoutSuggestion,
};
