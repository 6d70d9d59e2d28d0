// ABOUTME: Activity type enumeration for logged and suggested workouts
// ABOUTME: Covers the supported workout categories with parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use std::fmt;

use serde::{Deserialize, Serialize};

/// Enumeration of supported workout activity types.
///
/// The `Other` variant carries free-form labels for workouts that don't
/// map to a standard category. `Ord` is derived so maps keyed by activity
/// type iterate in a stable order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    /// Running workout
    Running,
    /// Cycling workout
    Cycling,
    /// Swimming workout
    Swimming,
    /// General gym session
    Gym,
    /// Yoga practice
    Yoga,
    /// Hiking activity
    Hiking,
    /// Pilates session
    Pilates,
    /// Strength/weight training
    Strength,
    /// High-intensity interval training
    Hiit,
    /// Any workout type not covered by the standard categories
    Other(String),
}

impl ActivityType {
    /// Parse from the platform's internal lowercase name.
    ///
    /// Unknown names are preserved as [`ActivityType::Other`] rather than
    /// rejected, matching how imported history is handled.
    #[must_use]
    pub fn from_internal_string(name: &str) -> Self {
        match name {
            "running" => Self::Running,
            "cycling" => Self::Cycling,
            "swimming" => Self::Swimming,
            "gym" => Self::Gym,
            "yoga" => Self::Yoga,
            "hiking" => Self::Hiking,
            "pilates" => Self::Pilates,
            "strength" => Self::Strength,
            "hiit" => Self::Hiit,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Internal lowercase name, used in suggestion ids and storage keys.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
            Self::Swimming => "swimming",
            Self::Gym => "gym",
            Self::Yoga => "yoga",
            Self::Hiking => "hiking",
            Self::Pilates => "pilates",
            Self::Strength => "strength",
            Self::Hiit => "hiit",
            Self::Other(name) => name.as_str(),
        }
    }

    /// Human-readable name for titles and notifications.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Running => "Running".into(),
            Self::Cycling => "Cycling".into(),
            Self::Swimming => "Swimming".into(),
            Self::Gym => "Gym".into(),
            Self::Yoga => "Yoga".into(),
            Self::Hiking => "Hiking".into(),
            Self::Pilates => "Pilates".into(),
            Self::Strength => "Strength".into(),
            Self::Hiit => "HIIT".into(),
            Self::Other(name) => {
                let mut chars = name.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().collect::<String>() + chars.as_str()
                })
            }
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
