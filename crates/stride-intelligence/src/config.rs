// ABOUTME: Configuration for the scheduling engine - working hours, probe widths, scoring weights
// ABOUTME: Defaults carry the tuned production constants; override per-instance, never globally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use serde::{Deserialize, Serialize};
use stride_core::ActivityType;

/// Daily working-hours bounds scanned when a user has no declared
/// availability window for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    /// First hour of the scan, inclusive
    pub start_hour: u8,
    /// Last hour of the scan, exclusive
    pub end_hour: u8,
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            start_hour: 6,
            end_hour: 22,
        }
    }
}

/// Additive adjustments applied by the slot scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Bonus when a historical start hour lands within one hour of the slot
    pub time_affinity_bonus: f64,
    /// Multiplier applied to the historical completion rate
    pub completion_rate_weight: f64,
    /// Bonus when no workout is scheduled on the slot's date yet
    pub open_day_bonus: f64,
    /// Penalty when two or more workouts already sit on the slot's date
    pub crowded_day_penalty: f64,
    /// Bonus for morning slots (06:00-09:59)
    pub morning_bonus: f64,
    /// Bonus for evening slots (17:00-19:59)
    pub evening_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            time_affinity_bonus: 0.3,
            completion_rate_weight: 0.2,
            open_day_bonus: 0.2,
            crowded_day_penalty: 0.3,
            morning_bonus: 0.15,
            evening_bonus: 0.1,
        }
    }
}

/// Full configuration for one scheduling engine instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Fallback scan bounds for days without declared windows
    pub working_hours: WorkingHours,
    /// Minutes between candidate starts
    pub scan_step_minutes: u32,
    /// Candidate width inside a declared window
    pub preferred_probe_minutes: u32,
    /// Candidate width during a generic working-hours scan
    pub generic_probe_minutes: u32,
    /// Hard cap on a slot's usable duration
    pub max_slot_minutes: u32,
    /// Baseline score for slots inside a declared window
    pub preferred_slot_score: f64,
    /// Baseline score for generic working-hours slots
    pub generic_slot_score: f64,
    /// Minimum combined score for a slot to become a suggestion
    pub min_suggestion_score: f64,
    /// Duration assumed when a type has no configured target
    pub default_duration_minutes: u32,
    /// Candidate types offered to users with no declared windows
    pub fallback_activity_types: Vec<ActivityType>,
    /// Scorer adjustment weights
    pub weights: ScoringWeights,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            working_hours: WorkingHours::default(),
            scan_step_minutes: 30,
            preferred_probe_minutes: 30,
            generic_probe_minutes: 60,
            max_slot_minutes: 120,
            preferred_slot_score: 1.0,
            generic_slot_score: 0.5,
            min_suggestion_score: 0.4,
            default_duration_minutes: 45,
            fallback_activity_types: vec![
                ActivityType::Running,
                ActivityType::Gym,
                ActivityType::Yoga,
            ],
            weights: ScoringWeights::default(),
        }
    }
}
