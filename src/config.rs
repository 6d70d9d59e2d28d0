// ABOUTME: Environment-driven application configuration
// ABOUTME: Malformed values fall back to defaults with a warning, never a panic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use std::env;

use tracing::warn;

use crate::logging::{LogFormat, LoggingConfig};
use stride_intelligence::SchedulerConfig;

/// Default suggestion horizon in days.
const DEFAULT_DAYS_AHEAD: u32 = 7;

/// Application configuration assembled from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Logging level and format
    pub logging: LoggingConfig,
    /// Scheduling engine configuration
    pub scheduler: SchedulerConfig,
    /// How many days ahead suggestions are generated for
    pub days_ahead: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            scheduler: SchedulerConfig::default(),
            days_ahead: DEFAULT_DAYS_AHEAD,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// Recognized variables: `STRIDE_LOG_LEVEL`, `STRIDE_LOG_FORMAT`,
    /// `STRIDE_DAYS_AHEAD`. Unset variables use defaults; malformed
    /// values log a warning and fall back rather than failing startup.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(level) = env::var("STRIDE_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Ok(format) = env::var("STRIDE_LOG_FORMAT") {
            config.logging.format = LogFormat::from_name(&format);
        }
        if let Ok(raw) = env::var("STRIDE_DAYS_AHEAD") {
            match raw.parse::<u32>() {
                Ok(days) if days > 0 => config.days_ahead = days,
                _ => warn!(value = %raw, "ignoring invalid STRIDE_DAYS_AHEAD"),
            }
        }

        config
    }
}
