// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for settings-ui
//!
//! Every fallible operation returns [`Result`]; the console layer decides
//! which errors are reported and which are fatal.

use thiserror::Error;

/// Main error type for settings-ui operations
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Update check or download failures
    #[error("Update error: {0}")]
    Update(String),

    /// Downloaded archive could not be read
    #[error("Archive error: {0}")]
    Archive(String),

    /// Updater process could not be started
    #[error("Failed to launch updater: {0}")]
    Launch(String),
}

/// Result type alias for settings-ui operations
pub type Result<T> = std::result::Result<T, AppError>;

impl From<zip::result::ZipError> for AppError {
    fn from(err: zip::result::ZipError) -> Self {
        AppError::Archive(err.to_string())
    }
}
