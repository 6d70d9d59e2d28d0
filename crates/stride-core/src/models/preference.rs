// ABOUTME: Schedule preference models - preferred time windows, durations, weekly targets
// ABOUTME: Windows are validated on construction so inverted ranges never reach the scheduler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ActivityType, CalendarIntegration, ClockTime};
use crate::errors::ModelError;

/// Highest valid day-of-week index (Saturday).
const MAX_DAY_OF_WEEK: u8 = 6;

/// How strongly scheduled workouts should be treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchedulePriority {
    /// Workouts are firm commitments
    MustDo,
    /// Workouts can move when life intervenes
    Flexible,
}

/// A recurring weekly availability window declared by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferredTimeSlot {
    /// Day of week, 0 = Sunday through 6 = Saturday
    pub day_of_week: u8,
    /// Window start
    pub start: ClockTime,
    /// Window end, strictly after `start`
    pub end: ClockTime,
}

impl PreferredTimeSlot {
    /// Create a validated window.
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidDayOfWeek`] for indices above 6 and
    /// [`ModelError::InvalidTimeWindow`] when the end does not follow the
    /// start.
    pub fn new(day_of_week: u8, start: ClockTime, end: ClockTime) -> Result<Self, ModelError> {
        let slot = Self {
            day_of_week,
            start,
            end,
        };
        slot.validate()?;
        Ok(slot)
    }

    /// Re-check the window invariants.
    ///
    /// # Errors
    /// Same conditions as [`PreferredTimeSlot::new`]; useful after
    /// deserializing externally supplied preferences.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.day_of_week > MAX_DAY_OF_WEEK {
            return Err(ModelError::InvalidDayOfWeek {
                value: self.day_of_week,
            });
        }
        if self.start >= self.end {
            return Err(ModelError::InvalidTimeWindow {
                start: self.start.to_string(),
                end: self.end.to_string(),
            });
        }
        Ok(())
    }
}

/// A user's scheduling preferences. At most one active preference exists
/// per user; the store enforces that with an upsert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulePreference {
    /// Unique identifier
    pub id: String,
    /// Declared weekly availability windows
    pub preferred_time_slots: Vec<PreferredTimeSlot>,
    /// Target duration in minutes per activity type.
    ///
    /// A `BTreeMap` keeps candidate-type iteration deterministic during
    /// suggestion generation.
    pub workout_durations: BTreeMap<ActivityType, u32>,
    /// How firmly scheduled workouts should be treated
    pub priority: SchedulePriority,
    /// Target number of workout days per week
    pub days_per_week: u32,
    /// Optional calendar integration for busy-block lookup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_integration: Option<CalendarIntegration>,
    /// When the preference was first saved
    pub created_at: DateTime<Utc>,
    /// When the preference was last updated
    pub updated_at: DateTime<Utc>,
}

impl SchedulePreference {
    /// Validate every declared window.
    ///
    /// # Errors
    /// Returns the first window's [`ModelError`] if any window is
    /// malformed.
    pub fn validate(&self) -> Result<(), ModelError> {
        for slot in &self.preferred_time_slots {
            slot.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(hour: u8, minute: u8) -> ClockTime {
        ClockTime::new(hour, minute).unwrap()
    }

    #[test]
    fn accepts_well_formed_windows() {
        let slot = PreferredTimeSlot::new(1, time(8, 0), time(10, 0)).unwrap();
        assert_eq!(slot.day_of_week, 1);
    }

    #[test]
    fn rejects_inverted_window() {
        let err = PreferredTimeSlot::new(1, time(10, 0), time(8, 0)).unwrap_err();
        assert!(matches!(err, ModelError::InvalidTimeWindow { .. }));
    }

    #[test]
    fn rejects_zero_length_window() {
        assert!(PreferredTimeSlot::new(1, time(8, 0), time(8, 0)).is_err());
    }

    #[test]
    fn rejects_bad_day_index() {
        let err = PreferredTimeSlot::new(7, time(8, 0), time(10, 0)).unwrap_err();
        assert_eq!(err, ModelError::InvalidDayOfWeek { value: 7 });
    }
}
