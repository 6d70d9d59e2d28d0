// ABOUTME: Wall-clock time value type parsed from HH:MM strings
// ABOUTME: Replaces raw time strings so scoring math never re-parses or silently ingests garbage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveTime, Timelike, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ModelError;

const MINUTES_PER_HOUR: u32 = 60;
const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

/// A wall-clock time of day with minute resolution.
///
/// Serializes as the `"HH:MM"` string the rest of the platform exchanges;
/// parsing validates ranges, so a deserialized `ClockTime` is always
/// well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    /// Hour of day, 0-23
    pub hour: u8,
    /// Minute of hour, 0-59
    pub minute: u8,
}

impl ClockTime {
    /// Create a validated clock time.
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidClockTime`] when the hour or minute is
    /// out of range.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ModelError> {
        if hour > 23 || minute > 59 {
            return Err(ModelError::InvalidClockTime {
                value: format!("{hour:02}:{minute:02}"),
            });
        }
        Ok(Self { hour, minute })
    }

    /// Clock time from a count of minutes past midnight, wrapping at 24h.
    #[must_use]
    pub fn from_minutes(minutes: u32) -> Self {
        let wrapped = minutes % MINUTES_PER_DAY;
        Self {
            hour: (wrapped / MINUTES_PER_HOUR) as u8,
            minute: (wrapped % MINUTES_PER_HOUR) as u8,
        }
    }

    /// Wall-clock time of an instant, dropping the date portion.
    #[must_use]
    pub fn from_datetime(instant: &DateTime<Utc>) -> Self {
        let time = instant.time();
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }

    /// Minutes elapsed since midnight.
    #[must_use]
    pub fn minutes_from_midnight(self) -> u32 {
        u32::from(self.hour) * MINUTES_PER_HOUR + u32::from(self.minute)
    }

    /// Conversion into a [`chrono::NaiveTime`] for date-time arithmetic.
    #[must_use]
    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidClockTime {
            value: value.to_owned(),
        };
        let (hour_part, minute_part) = value.split_once(':').ok_or_else(invalid)?;
        let hour: u8 = hour_part.parse().map_err(|_| invalid())?;
        let minute: u8 = minute_part.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
