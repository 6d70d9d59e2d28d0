// ABOUTME: Activity model for logged and planned workouts
// ABOUTME: Builder-based construction keeps optional metrics ergonomic in tests and imports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ActivityType;

/// A single logged or planned workout.
///
/// Activities are owned by a user at the store layer; the model itself is
/// user-agnostic. The scheduler only ever reads activities — creation,
/// completion toggling, and deletion are store concerns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier, assigned by the store on creation
    pub id: String,
    /// Workout category
    pub activity_type: ActivityType,
    /// Human-readable title
    pub title: String,
    /// When the workout starts or started (UTC)
    pub start: DateTime<Utc>,
    /// Planned or recorded duration in minutes
    pub duration_minutes: u32,
    /// Distance covered in kilometers, if applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Energy expended in kilocalories, if recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Link to an external workout description or video
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_link: Option<String>,
    /// Whether the user completed this workout
    pub completed: bool,
}

/// Builder for [`Activity`] instances.
#[derive(Debug, Clone)]
pub struct ActivityBuilder {
    activity: Activity,
}

impl ActivityBuilder {
    /// Start a builder from the required fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        activity_type: ActivityType,
        start: DateTime<Utc>,
        duration_minutes: u32,
    ) -> Self {
        Self {
            activity: Activity {
                id: id.into(),
                activity_type,
                title: title.into(),
                start,
                duration_minutes,
                distance_km: None,
                calories: None,
                notes: None,
                workout_link: None,
                completed: false,
            },
        }
    }

    /// Set the distance covered in kilometers.
    #[must_use]
    pub fn distance_km(mut self, distance: f64) -> Self {
        self.activity.distance_km = Some(distance);
        self
    }

    /// Set the energy expended in kilocalories.
    #[must_use]
    pub fn calories(mut self, calories: u32) -> Self {
        self.activity.calories = Some(calories);
        self
    }

    /// Attach free-form notes.
    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.activity.notes = Some(notes.into());
        self
    }

    /// Attach an external workout link.
    #[must_use]
    pub fn workout_link(mut self, link: impl Into<String>) -> Self {
        self.activity.workout_link = Some(link.into());
        self
    }

    /// Mark the workout completed (or not).
    #[must_use]
    pub fn completed(mut self, completed: bool) -> Self {
        self.activity.completed = completed;
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Activity {
        self.activity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn builder_sets_required_and_optional_fields() {
        let start = Utc.with_ymd_and_hms(2025, 6, 2, 7, 30, 0).unwrap();
        let activity = ActivityBuilder::new("a1", "Morning Run", ActivityType::Running, start, 40)
            .distance_km(8.2)
            .completed(true)
            .build();

        assert_eq!(activity.id, "a1");
        assert_eq!(activity.activity_type, ActivityType::Running);
        assert_eq!(activity.duration_minutes, 40);
        assert_eq!(activity.distance_km, Some(8.2));
        assert!(activity.completed);
        assert!(activity.calories.is_none());
    }
}
