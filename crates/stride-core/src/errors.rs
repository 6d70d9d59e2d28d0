// ABOUTME: Typed errors produced by domain model parsing and validation
// ABOUTME: Boundary parsing rejects malformed times and windows before they reach scoring math
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use thiserror::Error;

/// Errors raised while parsing or validating domain models.
///
/// All time and window validation happens at the model boundary so the
/// scheduling engine never has to re-parse strings or defend against
/// inverted windows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A wall-clock time string did not match `HH:MM` or was out of range
    #[error("invalid clock time {value:?}: expected HH:MM with hour 0-23 and minute 0-59")]
    InvalidClockTime {
        /// The rejected input
        value: String,
    },

    /// A day-of-week index outside 0 (Sunday) through 6 (Saturday)
    #[error("invalid day of week {value}: expected 0 (Sunday) through 6 (Saturday)")]
    InvalidDayOfWeek {
        /// The rejected index
        value: u8,
    },

    /// A preferred time window whose end does not follow its start
    #[error("invalid time window {start}-{end}: end must be after start")]
    InvalidTimeWindow {
        /// Window start
        start: String,
        /// Window end
        end: String,
    },
}
