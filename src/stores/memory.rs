// ABOUTME: In-memory store implementations backed by concurrent maps
// ABOUTME: Used by tests and single-process deployments; no persistence across restarts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use async_trait::async_trait;
use dashmap::DashMap;
use std::cmp::Ordering;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::{Activity, SchedulePreference, WorkoutSuggestion};

use super::{ActivityStore, SchedulePreferenceStore, WorkoutSuggestionStore};

/// In-memory activity storage keyed by user.
#[derive(Debug, Default)]
pub struct InMemoryActivityStore {
    activities: DashMap<Uuid, Vec<Activity>>,
}

impl InMemoryActivityStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn get_activities(&self, user_id: Uuid) -> AppResult<Vec<Activity>> {
        Ok(self
            .activities
            .get(&user_id)
            .map(|entry| entry.clone())
            .unwrap_or_default())
    }

    async fn create_activity(&self, user_id: Uuid, mut activity: Activity) -> AppResult<Activity> {
        if activity.id.is_empty() {
            activity.id = Uuid::new_v4().to_string();
        }
        self.activities
            .entry(user_id)
            .or_default()
            .push(activity.clone());
        Ok(activity)
    }

    async fn update_activity(&self, user_id: Uuid, activity: Activity) -> AppResult<()> {
        let mut entry = self
            .activities
            .get_mut(&user_id)
            .ok_or_else(|| AppError::NotFound {
                resource: "activity",
                id: activity.id.clone(),
            })?;
        let existing = entry
            .iter_mut()
            .find(|candidate| candidate.id == activity.id)
            .ok_or_else(|| AppError::NotFound {
                resource: "activity",
                id: activity.id.clone(),
            })?;
        *existing = activity;
        Ok(())
    }

    async fn delete_activity(&self, user_id: Uuid, activity_id: &str) -> AppResult<()> {
        let mut entry = self
            .activities
            .get_mut(&user_id)
            .ok_or_else(|| AppError::NotFound {
                resource: "activity",
                id: activity_id.to_owned(),
            })?;
        let before = entry.len();
        entry.retain(|activity| activity.id != activity_id);
        if entry.len() == before {
            return Err(AppError::NotFound {
                resource: "activity",
                id: activity_id.to_owned(),
            });
        }
        Ok(())
    }
}

/// In-memory schedule preference storage; at most one per user.
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    preferences: DashMap<Uuid, SchedulePreference>,
}

impl InMemoryPreferenceStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SchedulePreferenceStore for InMemoryPreferenceStore {
    async fn get_preference(&self, user_id: Uuid) -> AppResult<Option<SchedulePreference>> {
        Ok(self.preferences.get(&user_id).map(|entry| entry.clone()))
    }

    async fn upsert_preference(
        &self,
        user_id: Uuid,
        preference: SchedulePreference,
    ) -> AppResult<()> {
        preference.validate()?;
        self.preferences.insert(user_id, preference);
        Ok(())
    }
}

/// In-memory workout suggestion storage.
#[derive(Debug, Default)]
pub struct InMemorySuggestionStore {
    suggestions: DashMap<Uuid, Vec<WorkoutSuggestion>>,
}

impl InMemorySuggestionStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkoutSuggestionStore for InMemorySuggestionStore {
    async fn get_suggestions(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> AppResult<Vec<WorkoutSuggestion>> {
        let mut suggestions = self
            .suggestions
            .get(&user_id)
            .map(|entry| entry.clone())
            .unwrap_or_default();
        suggestions.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        suggestions.truncate(limit);
        Ok(suggestions)
    }

    async fn create_suggestions(
        &self,
        user_id: Uuid,
        suggestions: Vec<WorkoutSuggestion>,
    ) -> AppResult<()> {
        self.suggestions
            .entry(user_id)
            .or_default()
            .extend(suggestions);
        Ok(())
    }

    async fn clear_suggestions(&self, user_id: Uuid) -> AppResult<()> {
        self.suggestions.remove(&user_id);
        Ok(())
    }

    async fn set_accepted(
        &self,
        user_id: Uuid,
        suggestion_id: &str,
        accepted: bool,
    ) -> AppResult<WorkoutSuggestion> {
        let mut entry = self
            .suggestions
            .get_mut(&user_id)
            .ok_or_else(|| AppError::NotFound {
                resource: "suggestion",
                id: suggestion_id.to_owned(),
            })?;
        let suggestion = entry
            .iter_mut()
            .find(|candidate| candidate.id == suggestion_id)
            .ok_or_else(|| AppError::NotFound {
                resource: "suggestion",
                id: suggestion_id.to_owned(),
            })?;
        suggestion.accepted = accepted;
        Ok(suggestion.clone())
    }
}
