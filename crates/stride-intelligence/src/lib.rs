// ABOUTME: Library entry point for the Stride scheduling intelligence crate
// ABOUTME: Pattern analysis, availability finding, slot scoring, and suggestion generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! # Stride Intelligence
//!
//! The workout scheduling engine. Given a user's activity history, stated
//! time preferences, and calendar busy blocks, it produces ranked,
//! explainable candidate workout slots over a multi-day horizon.
//!
//! The whole pipeline is synchronous and pure: the reference date is an
//! explicit parameter, inputs arrive fully materialized, and identical
//! inputs yield identical suggestions apart from the creation timestamp.
//! Callers may therefore regenerate freely and discard stale results.

/// Enumeration of open candidate slots on a given day
pub mod availability;

/// Engine configuration: working hours, probe widths, scoring weights
pub mod config;

/// Per-activity-type historical preference analysis
pub mod pattern_analysis;

/// Combined slot desirability scoring
pub mod scoring;

/// Weekly aggregate statistics over activity history
pub mod stats;

/// Multi-day suggestion generation and weekly plan optimization
pub mod suggestion;

pub use availability::{AvailabilityFinder, AvailabilitySlot};
pub use config::{SchedulerConfig, ScoringWeights, WorkingHours};
pub use pattern_analysis::{ActivityPattern, PatternAnalyzer};
pub use scoring::SlotScorer;
pub use stats::WeeklyStatsCalculator;
pub use suggestion::SuggestionEngine;
