// ABOUTME: Scheduling service - the orchestrator around the pure suggestion engine
// ABOUTME: Reads stores and calendar, regenerates suggestions wholesale, handles acceptance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calendar::{provider_for, CalendarProvider};
use crate::errors::{AppError, AppResult};
use crate::intelligence::SuggestionEngine;
use crate::models::{Activity, CalendarEvent, SchedulePreference, WorkoutSuggestion};
use crate::notifications::{NotificationScheduler, TracingNotificationScheduler};
use crate::stores::{
    ActivityStore, InMemoryActivityStore, InMemoryPreferenceStore, InMemorySuggestionStore,
    SchedulePreferenceStore, WorkoutSuggestionStore,
};

/// Default suggestion horizon in days.
const DEFAULT_DAYS_AHEAD: u32 = 7;

/// Orchestrates the suggestion lifecycle around the pure engine.
///
/// The service owns every fallible edge: store reads, calendar fetches,
/// and the wholesale clear-then-create write of each generation cycle.
/// The engine call in the middle is synchronous and cannot fail.
pub struct SchedulingService {
    activities: Arc<dyn ActivityStore>,
    preferences: Arc<dyn SchedulePreferenceStore>,
    suggestions: Arc<dyn WorkoutSuggestionStore>,
    calendar_override: Option<Arc<dyn CalendarProvider>>,
    notifications: Arc<dyn NotificationScheduler>,
    engine: SuggestionEngine,
    days_ahead: u32,
}

impl SchedulingService {
    /// Service over explicit collaborators.
    #[must_use]
    pub fn new(
        activities: Arc<dyn ActivityStore>,
        preferences: Arc<dyn SchedulePreferenceStore>,
        suggestions: Arc<dyn WorkoutSuggestionStore>,
        notifications: Arc<dyn NotificationScheduler>,
    ) -> Self {
        Self {
            activities,
            preferences,
            suggestions,
            calendar_override: None,
            notifications,
            engine: SuggestionEngine::new(),
            days_ahead: DEFAULT_DAYS_AHEAD,
        }
    }

    /// Fully in-memory service: memory stores, per-preference calendar
    /// routing, log-only notifications.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryActivityStore::new()),
            Arc::new(InMemoryPreferenceStore::new()),
            Arc::new(InMemorySuggestionStore::new()),
            Arc::new(TracingNotificationScheduler),
        )
    }

    /// Replace the per-preference calendar routing with a fixed provider.
    #[must_use]
    pub fn with_calendar_provider(mut self, provider: Arc<dyn CalendarProvider>) -> Self {
        self.calendar_override = Some(provider);
        self
    }

    /// Replace the engine (e.g. with a custom configuration).
    #[must_use]
    pub fn with_engine(mut self, engine: SuggestionEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Change the suggestion horizon.
    #[must_use]
    pub fn with_days_ahead(mut self, days_ahead: u32) -> Self {
        self.days_ahead = days_ahead;
        self
    }

    /// The preference store, for setup flows.
    #[must_use]
    pub fn preferences(&self) -> &Arc<dyn SchedulePreferenceStore> {
        &self.preferences
    }

    /// The activity store, for logging flows.
    #[must_use]
    pub fn activities(&self) -> &Arc<dyn ActivityStore> {
        &self.activities
    }

    /// The suggestion store, for read-back flows.
    #[must_use]
    pub fn suggestions(&self) -> &Arc<dyn WorkoutSuggestionStore> {
        &self.suggestions
    }

    /// Regenerate the user's workout suggestions for the coming days.
    ///
    /// Replaces any previously stored suggestion set wholesale and
    /// returns the fresh ranking. An empty result is valid: a fully
    /// booked horizon produces no suggestions and clears the old set.
    ///
    /// # Errors
    /// [`AppError::SetupRequired`] when no preference is saved; store
    /// and provider failures propagate.
    pub async fn regenerate_suggestions(
        &self,
        user_id: Uuid,
    ) -> AppResult<Vec<WorkoutSuggestion>> {
        let preference = self.require_preference(user_id).await?;
        let activities = self.activities.get_activities(user_id).await?;
        let today = Utc::now().date_naive();
        let events = self.fetch_events(&preference, today).await?;

        let generated = self.engine.generate_suggestions(
            &activities,
            &preference,
            &events,
            today,
            self.days_ahead,
        );
        info!(
            %user_id,
            count = generated.len(),
            days_ahead = self.days_ahead,
            "regenerated workout suggestions"
        );

        self.suggestions.clear_suggestions(user_id).await?;
        self.suggestions
            .create_suggestions(user_id, generated.clone())
            .await?;
        Ok(generated)
    }

    /// Build a one-workout-per-day plan for the coming week.
    ///
    /// Read-only: the plan is returned to the caller without touching
    /// the stored suggestion set.
    ///
    /// # Errors
    /// Same conditions as [`SchedulingService::regenerate_suggestions`].
    pub async fn weekly_plan(&self, user_id: Uuid) -> AppResult<Vec<WorkoutSuggestion>> {
        let preference = self.require_preference(user_id).await?;
        let activities = self.activities.get_activities(user_id).await?;
        let today = Utc::now().date_naive();
        let events = self.fetch_events(&preference, today).await?;

        Ok(self
            .engine
            .optimize_weekly_schedule(&activities, &preference, &events, today))
    }

    /// Accept a suggestion: mark it accepted, log the workout as a
    /// planned activity, and schedule a reminder.
    ///
    /// The reminder is fire-and-forget; its failure is logged and does
    /// not undo the acceptance.
    ///
    /// # Errors
    /// [`AppError::NotFound`] when the suggestion id is unknown; store
    /// failures propagate.
    pub async fn accept_suggestion(
        &self,
        user_id: Uuid,
        suggestion_id: &str,
    ) -> AppResult<Activity> {
        let suggestion = self
            .suggestions
            .set_accepted(user_id, suggestion_id, true)
            .await?;

        let start = suggestion
            .suggested_date
            .and_time(suggestion.suggested_time.to_naive_time())
            .and_utc();
        let activity = Activity {
            id: String::new(),
            activity_type: suggestion.activity_type.clone(),
            title: format!("{} Workout", suggestion.activity_type.display_name()),
            start,
            duration_minutes: suggestion.duration_minutes,
            distance_km: None,
            calories: None,
            notes: None,
            workout_link: None,
            completed: false,
        };
        let created = self.activities.create_activity(user_id, activity).await?;

        match self
            .notifications
            .schedule_workout_reminder(&created)
            .await
        {
            Ok(Some(reminder)) => {
                info!(%user_id, reminder_id = %reminder.id, "reminder scheduled for accepted workout");
            }
            Ok(None) => {}
            Err(err) => {
                warn!(%user_id, error = %err, "failed to schedule workout reminder");
            }
        }

        Ok(created)
    }

    async fn require_preference(&self, user_id: Uuid) -> AppResult<SchedulePreference> {
        self.preferences
            .get_preference(user_id)
            .await?
            .ok_or(AppError::SetupRequired { user_id })
    }

    /// Fetch busy blocks for the horizon. No integration means no busy
    /// blocks, not an error.
    async fn fetch_events(
        &self,
        preference: &SchedulePreference,
        today: chrono::NaiveDate,
    ) -> AppResult<Vec<CalendarEvent>> {
        let Some(integration) = &preference.calendar_integration else {
            return Ok(Vec::new());
        };

        let provider: Arc<dyn CalendarProvider> = match &self.calendar_override {
            Some(provider) => Arc::clone(provider),
            None => provider_for(integration.provider),
        };
        provider
            .get_events(integration, today, self.days_ahead)
            .await
    }
}
