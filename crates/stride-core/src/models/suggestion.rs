// ABOUTME: Workout suggestion output model produced by the scheduling engine
// ABOUTME: Regenerated wholesale each cycle; acceptance is flipped by the store, never the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{ActivityType, ClockTime};

/// A scored, explained candidate workout offered to the user.
///
/// The id is a deterministic composite of date, start time, and activity
/// type, so regenerating with identical inputs reproduces identical ids.
/// `created_at` is the single wall-clock read in a generation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSuggestion {
    /// Deterministic composite id: `{date}-{HH:MM}-{activity_type}`
    pub id: String,
    /// Suggested calendar date
    pub suggested_date: NaiveDate,
    /// Suggested start time
    pub suggested_time: ClockTime,
    /// Suggested duration in minutes
    pub duration_minutes: u32,
    /// Suggested workout category
    pub activity_type: ActivityType,
    /// Combined desirability score in [0, 1]
    pub score: f64,
    /// Human-readable explanation of why this slot was offered
    pub reasoning: String,
    /// Whether the user accepted the suggestion
    pub accepted: bool,
    /// When the suggestion was generated
    pub created_at: DateTime<Utc>,
}

impl WorkoutSuggestion {
    /// Build the deterministic composite id for a suggestion.
    #[must_use]
    pub fn composite_id(date: NaiveDate, time: ClockTime, activity_type: &ActivityType) -> String {
        format!("{date}-{time}-{activity_type}")
    }
}
