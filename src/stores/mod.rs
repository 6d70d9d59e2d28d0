// ABOUTME: Persistence traits for activities, schedule preferences, and workout suggestions
// ABOUTME: Trait-based backends so storage stays pluggable; in-memory implementations included
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Persistence abstraction layer.
//!
//! The scheduling engine never touches storage directly: the
//! [`crate::services::SchedulingService`] reads through these traits and
//! writes the engine's output back wholesale. All stores are keyed by
//! user id; models themselves stay user-agnostic.

/// In-memory store implementations
pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppResult;
use crate::models::{Activity, SchedulePreference, WorkoutSuggestion};

pub use memory::{InMemoryActivityStore, InMemoryPreferenceStore, InMemorySuggestionStore};

/// Storage for logged and planned activities.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// All activities for a user, oldest first.
    async fn get_activities(&self, user_id: Uuid) -> AppResult<Vec<Activity>>;

    /// Persist a new activity. A blank id is replaced with a generated
    /// one; the stored record is returned.
    async fn create_activity(&self, user_id: Uuid, activity: Activity) -> AppResult<Activity>;

    /// Replace an existing activity (e.g. completion toggling).
    ///
    /// # Errors
    /// [`crate::errors::AppError::NotFound`] when the id is unknown.
    async fn update_activity(&self, user_id: Uuid, activity: Activity) -> AppResult<()>;

    /// Delete an activity by id.
    ///
    /// # Errors
    /// [`crate::errors::AppError::NotFound`] when the id is unknown.
    async fn delete_activity(&self, user_id: Uuid, activity_id: &str) -> AppResult<()>;
}

/// Storage for the single schedule preference a user may have.
#[async_trait]
pub trait SchedulePreferenceStore: Send + Sync {
    /// The user's preference, if one was saved.
    async fn get_preference(&self, user_id: Uuid) -> AppResult<Option<SchedulePreference>>;

    /// Create or replace the user's preference. Windows are validated
    /// before the write.
    async fn upsert_preference(
        &self,
        user_id: Uuid,
        preference: SchedulePreference,
    ) -> AppResult<()>;
}

/// Storage for generated workout suggestions.
///
/// Suggestions are replaced wholesale each generation cycle
/// (clear-then-create), never incrementally diffed.
#[async_trait]
pub trait WorkoutSuggestionStore: Send + Sync {
    /// Up to `limit` suggestions, ordered by score descending.
    async fn get_suggestions(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> AppResult<Vec<WorkoutSuggestion>>;

    /// Append a batch of freshly generated suggestions.
    async fn create_suggestions(
        &self,
        user_id: Uuid,
        suggestions: Vec<WorkoutSuggestion>,
    ) -> AppResult<()>;

    /// Remove every suggestion for a user.
    async fn clear_suggestions(&self, user_id: Uuid) -> AppResult<()>;

    /// Flip a suggestion's accepted flag and return the updated record.
    ///
    /// # Errors
    /// [`crate::errors::AppError::NotFound`] when the id is unknown.
    async fn set_accepted(
        &self,
        user_id: Uuid,
        suggestion_id: &str,
        accepted: bool,
    ) -> AppResult<WorkoutSuggestion>;
}
