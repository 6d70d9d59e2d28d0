// ABOUTME: Calendar provider abstraction supplying busy blocks to the scheduler
// ABOUTME: Manual mode returns nothing; the mock synthesizes a deterministic weekly rhythm
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

//! Calendar busy-block providers.
//!
//! The scheduler consumes [`CalendarEvent`] values without caring where
//! they came from. Live providers would map an external API's events
//! into the same shape within the same time window; this build ships the
//! manual (empty) and deterministic mock backends.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use tracing::warn;

use crate::errors::AppResult;
use crate::models::{CalendarEvent, CalendarIntegration, CalendarProviderKind, ClockTime};

/// Source of calendar busy blocks for a user.
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    /// Events between `from` (inclusive) and `from + days_ahead`
    /// (exclusive), mapped into the scheduler's event shape.
    async fn get_events(
        &self,
        integration: &CalendarIntegration,
        from: NaiveDate,
        days_ahead: u32,
    ) -> AppResult<Vec<CalendarEvent>>;
}

/// Provider for users who manage conflicts by hand: no busy blocks.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualCalendarProvider;

#[async_trait]
impl CalendarProvider for ManualCalendarProvider {
    async fn get_events(
        &self,
        _integration: &CalendarIntegration,
        _from: NaiveDate,
        _days_ahead: u32,
    ) -> AppResult<Vec<CalendarEvent>> {
        Ok(Vec::new())
    }
}

/// Deterministic synthetic calendar for demos and tests.
///
/// Synthesizes a "Work Meeting" from 09:00 to 10:00 on even day indices
/// and a "Lunch" block from 12:00 to 13:00 on day indices divisible by
/// three. Output depends only on `from` and `days_ahead`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockCalendarProvider;

impl MockCalendarProvider {
    fn block(date: NaiveDate, id: String, title: &str, start_hour: u8, end_hour: u8) -> CalendarEvent {
        let start = ClockTime {
            hour: start_hour,
            minute: 0,
        };
        let end = ClockTime {
            hour: end_hour,
            minute: 0,
        };
        CalendarEvent {
            id,
            title: title.to_owned(),
            start: date.and_time(start.to_naive_time()).and_utc(),
            end: date.and_time(end.to_naive_time()).and_utc(),
            all_day: false,
        }
    }
}

#[async_trait]
impl CalendarProvider for MockCalendarProvider {
    async fn get_events(
        &self,
        _integration: &CalendarIntegration,
        from: NaiveDate,
        days_ahead: u32,
    ) -> AppResult<Vec<CalendarEvent>> {
        let mut events = Vec::new();
        for index in 0..days_ahead {
            let Some(date) = from.checked_add_days(Days::new(u64::from(index))) else {
                break;
            };

            if index % 2 == 0 {
                events.push(Self::block(
                    date,
                    format!("work-{index}"),
                    "Work Meeting",
                    9,
                    10,
                ));
            }
            if index % 3 == 0 {
                events.push(Self::block(date, format!("lunch-{index}"), "Lunch", 12, 13));
            }
        }
        Ok(events)
    }
}

/// Resolve the provider implementation for an integration kind.
///
/// Google requires an OAuth flow this build does not ship; it degrades
/// to the empty manual provider with a warning rather than failing the
/// whole scheduling cycle.
#[must_use]
pub fn provider_for(kind: CalendarProviderKind) -> Arc<dyn CalendarProvider> {
    match kind {
        CalendarProviderKind::Manual => Arc::new(ManualCalendarProvider),
        CalendarProviderKind::Mock => Arc::new(MockCalendarProvider),
        CalendarProviderKind::Google => {
            warn!("google calendar integration is not configured; treating as manual");
            Arc::new(ManualCalendarProvider)
        }
    }
}
