// ABOUTME: Slot scoring combining baseline, historical affinity, daily load, and time of day
// ABOUTME: Pure additive adjustments clamped into the unit interval
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use std::collections::HashMap;
use std::ops::RangeInclusive;

use stride_core::{Activity, ActivityType};

use crate::availability::AvailabilitySlot;
use crate::config::ScoringWeights;
use crate::pattern_analysis::ActivityPattern;

/// Hours considered "morning" for the time-of-day bonus.
pub(crate) const MORNING_HOURS: RangeInclusive<u8> = 6..=9;

/// Hours considered "evening" for the time-of-day bonus.
pub(crate) const EVENING_HOURS: RangeInclusive<u8> = 17..=19;

/// Maximum hour distance for a historical start time to count as a match.
const TIME_AFFINITY_HOURS: i32 = 1;

/// Same-day workout count at which the crowding penalty kicks in.
const CROWDED_DAY_THRESHOLD: usize = 2;

/// Scores a candidate slot for one activity type.
///
/// Pure function of its inputs: no clock reads, no side effects.
#[derive(Debug, Clone, Default)]
pub struct SlotScorer {
    weights: ScoringWeights,
}

impl SlotScorer {
    /// Scorer with the default weights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scorer with custom weights.
    #[must_use]
    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Combine the slot baseline with historical affinity, same-day load,
    /// and time-of-day adjustments, clamped to `[0, 1]`.
    #[must_use]
    pub fn score(
        &self,
        slot: &AvailabilitySlot,
        patterns: &HashMap<ActivityType, ActivityPattern>,
        activity_type: &ActivityType,
        existing_activities: &[Activity],
    ) -> f64 {
        let mut score = slot.score;

        if let Some(pattern) = patterns.get(activity_type) {
            if !pattern.preferred_times.is_empty() {
                let slot_hour = i32::from(slot.start.hour);
                let time_match = pattern
                    .preferred_times
                    .iter()
                    .any(|time| (i32::from(time.hour) - slot_hour).abs() <= TIME_AFFINITY_HOURS);
                if time_match {
                    score += self.weights.time_affinity_bonus;
                }
                score += pattern.completion_rate * self.weights.completion_rate_weight;
            }
        }

        let same_day = existing_activities
            .iter()
            .filter(|activity| activity.start.date_naive() == slot.date)
            .count();
        if same_day == 0 {
            score += self.weights.open_day_bonus;
        } else if same_day >= CROWDED_DAY_THRESHOLD {
            score -= self.weights.crowded_day_penalty;
        }

        if MORNING_HOURS.contains(&slot.start.hour) {
            score += self.weights.morning_bonus;
        } else if EVENING_HOURS.contains(&slot.start.hour) {
            score += self.weights.evening_bonus;
        }

        score.clamp(0.0, 1.0)
    }
}
