// ABOUTME: Main library entry point for the Stride fitness platform
// ABOUTME: Wires stores, calendar providers, and notifications around the scheduling engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

#![deny(unsafe_code)]

//! # Stride
//!
//! A personal fitness-tracking platform: users log workouts, view
//! progress, and receive ranked, explainable workout-scheduling
//! suggestions for the coming days.
//!
//! ## Architecture
//!
//! The platform follows a modular architecture:
//! - **Models** (`stride-core`): shared domain types
//! - **Intelligence** (`stride-intelligence`): the pure, synchronous
//!   scheduling engine
//! - **Stores**: async persistence traits with in-memory implementations
//! - **Calendar**: pluggable busy-block providers (manual, mock)
//! - **Services**: orchestration of the regenerate/accept suggestion
//!   cycle
//!
//! ## Example Usage
//!
//! ```rust
//! use stride::services::SchedulingService;
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = SchedulingService::in_memory();
//!     let user_id = uuid::Uuid::new_v4();
//!
//!     // Without a saved schedule preference the user is asked to finish
//!     // setup first.
//!     let result = service.regenerate_suggestions(user_id).await;
//!     assert!(result.is_err());
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────

/// Calendar busy-block providers
pub mod calendar;

/// Environment-driven application configuration
pub mod config;

/// Unified error handling for the application layer
pub mod errors;

/// Scheduling intelligence re-exports
pub mod intelligence;

/// Structured logging configuration
pub mod logging;

/// Domain model re-exports
pub mod models;

/// Workout reminder scheduling
pub mod notifications;

/// Application services orchestrating the scheduling cycle
pub mod services;

/// Persistence traits and in-memory implementations
pub mod stores;
