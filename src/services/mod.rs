// ABOUTME: Application services orchestrating stores, providers, and the engine
// ABOUTME: The scheduling service owns the regenerate and accept suggestion cycles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

/// Suggestion regeneration, weekly planning, and acceptance
pub mod scheduling;

pub use scheduling::SchedulingService;
