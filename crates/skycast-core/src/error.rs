//! Centralized error types for SkyCast.
//!
//! This module provides a typed error hierarchy that:
//! - Separates input problems from upstream weather failures
//! - Provides user-friendly messages suitable for UI display
//! - Preserves full error context for logging

use std::borrow::Cow;

use thiserror::Error;

/// Top-level application error type.
///
/// Every error that reaches the view should be convertible to this type.
/// Use `user_message()` to get a UI-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    ///
    /// These messages are designed to be actionable and non-technical.
    pub fn user_message(&self) -> Cow<'static, str> {
        match self {
            AppError::Validation(e) => e.user_message(),
            AppError::Weather(e) => e.user_message().into(),
            AppError::Config(e) => e.user_message().into(),
            AppError::Io(_) => "A file operation failed. Please try again.".into(),
            AppError::Other(_) => "Something went wrong. Please try again later.".into(),
        }
    }

    /// Sort an `anyhow` chain into the typed variants it wraps.
    pub fn classify(err: anyhow::Error) -> Self {
        let err = match err.downcast::<ConfigError>() {
            Ok(config) => return AppError::Config(config),
            Err(err) => err,
        };
        match err.downcast::<std::io::Error>() {
            Ok(io) => AppError::Io(io),
            Err(err) => AppError::Other(err),
        }
    }
}

/// Input rejected before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("City name is empty")]
    EmptyQuery,

    #[error("City name shorter than {min} characters")]
    QueryTooShort { min: usize },
}

impl ValidationError {
    pub fn user_message(&self) -> Cow<'static, str> {
        match self {
            ValidationError::EmptyQuery => "Please enter a city name.".into(),
            ValidationError::QueryTooShort { min } => {
                format!("City name must be at least {min} characters.").into()
            }
        }
    }
}

/// Weather service errors as seen by the user.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("Weather API error: {0}")]
    ApiError(String),
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::CityNotFound(_) => "City not found. Please check the spelling.",
            WeatherError::ApiError(_) => "Something went wrong. Please try again later.",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration location not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NotFound(_) => "Configuration location not found. Check your environment.",
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
        }
    }
}
