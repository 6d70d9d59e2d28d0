// ABOUTME: Calendar event and integration models consumed by the scheduler
// ABOUTME: Events are read-only busy blocks sourced from a calendar provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A busy interval on the user's calendar.
///
/// All-day events carry midnight-to-midnight bounds, which makes them
/// conflict with every in-day candidate under the scheduler's overlap
/// test without any special casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Provider-scoped identifier
    pub id: String,
    /// Event title
    pub title: String,
    /// Busy interval start (UTC)
    pub start: DateTime<Utc>,
    /// Busy interval end (UTC)
    pub end: DateTime<Utc>,
    /// Whether this is an all-day event
    pub all_day: bool,
}

/// Which calendar backend a preference is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarProviderKind {
    /// No external calendar; the user manages conflicts manually
    Manual,
    /// Deterministic synthetic calendar used for demos and tests
    Mock,
    /// Google Calendar (requires OAuth, not wired in this build)
    Google,
}

/// Descriptor for a user's calendar integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarIntegration {
    /// Backend kind
    pub provider: CalendarProviderKind,
    /// OAuth access token for live providers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Provider-side calendar identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_id: Option<String>,
}

impl CalendarIntegration {
    /// Integration descriptor for manual conflict management.
    #[must_use]
    pub fn manual() -> Self {
        Self {
            provider: CalendarProviderKind::Manual,
            access_token: None,
            calendar_id: None,
        }
    }

    /// Integration descriptor for the deterministic mock calendar.
    #[must_use]
    pub fn mock() -> Self {
        Self {
            provider: CalendarProviderKind::Mock,
            access_token: None,
            calendar_id: None,
        }
    }
}
