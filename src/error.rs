use std::time::Duration;

use thiserror::Error;

/// Failures while reading `window.__NOTEBOX_CONFIG__`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to decode configuration: {0}")]
    Decode(String),
    #[error("invalid configuration for {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
}

/// Failures while scheduling a deferred callback.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimerError {
    #[error("no global window available")]
    NoWindow,
    #[error("delay of {0:?} does not fit a browser timeout")]
    DelayOutOfRange(Duration),
    #[error("setTimeout failed: {0}")]
    Schedule(String),
}

/// Input validation failures reported back to the user as alerts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
    #[error("Passwords do not match")]
    PasswordMismatch,
}
