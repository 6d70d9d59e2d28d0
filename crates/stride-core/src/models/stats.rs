// ABOUTME: Weekly aggregate statistics surfaced on the home screen
// ABOUTME: Computed over the completed activities of a Monday-based week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use serde::{Deserialize, Serialize};

/// Aggregate statistics for one calendar week of training.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeeklyStats {
    /// Completed workouts this week
    pub activities_completed: u32,
    /// Total completed duration in minutes
    pub total_duration_minutes: u32,
    /// Total completed distance in kilometers
    pub total_distance_km: f64,
    /// Total energy expended in kilocalories
    pub total_calories: u32,
    /// Progress toward the weekly target, 0-100
    pub week_progress: f64,
}
