// ABOUTME: Intelligence module re-exports from the stride-intelligence crate
// ABOUTME: Preserves existing import paths while delegating to the extracted crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! # Intelligence Module
//!
//! The workout scheduling engine: pattern analysis, availability
//! finding, slot scoring, suggestion generation, and weekly statistics.
//!
//! This module re-exports from the `stride-intelligence` crate.

pub use stride_intelligence::{
    availability, config, pattern_analysis, scoring, stats, suggestion,
};

pub use stride_intelligence::{
    ActivityPattern, AvailabilityFinder, AvailabilitySlot, PatternAnalyzer, SchedulerConfig,
    ScoringWeights, SlotScorer, SuggestionEngine, WeeklyStatsCalculator, WorkingHours,
};
