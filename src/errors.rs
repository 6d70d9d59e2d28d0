// ABOUTME: Unified error handling for the Stride application layer
// ABOUTME: Typed variants for setup, lookup, validation, storage, and provider failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Fitness

use stride_core::ModelError;
use thiserror::Error;
use uuid::Uuid;

/// Application-level errors surfaced by stores, providers, and services.
///
/// The scheduling engine itself never fails: empty inputs produce empty
/// outputs. These variants cover the fallible edges around it.
#[derive(Debug, Error)]
pub enum AppError {
    /// The user has not saved schedule preferences yet; scheduling
    /// cannot run and the client should route them to setup.
    #[error("schedule preferences are not configured for user {user_id}")]
    SetupRequired {
        /// The user missing a preference
        user_id: Uuid,
    },

    /// A referenced entity does not exist.
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Entity kind, e.g. "activity" or "suggestion"
        resource: &'static str,
        /// The identifier that failed to resolve
        id: String,
    },

    /// Input rejected by model-boundary validation.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ModelError),

    /// A persistence backend failed.
    #[error("storage failure: {0}")]
    Storage(String),

    /// A calendar provider failed or is unsupported.
    #[error("calendar provider failure: {0}")]
    CalendarProvider(String),

    /// Anything else.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Convenience result alias used across the application layer.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_required_names_the_user() {
        let user_id = Uuid::nil();
        let message = AppError::SetupRequired { user_id }.to_string();
        assert!(message.contains(&user_id.to_string()));
    }

    #[test]
    fn model_errors_convert_into_invalid_input() {
        let err: AppError = ModelError::InvalidDayOfWeek { value: 9 }.into();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
