// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Self-update functionality for settings-ui
//!
//! Polls a remote version manifest, downloads the update archive and hands
//! off to an external updater process.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

mod checker;
mod installer;

pub use checker::UpdateChecker;
pub use installer::{UpdateHandoff, UpdateInstaller};

/// Latest version advertised by the remote manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VersionInfo {
    pub version: String,
    pub download_url: String,
}

/// Outcome of comparing the manifest with the running version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateDecision {
    /// Remote version differs from the running one
    Available(VersionInfo),
    UpToDate,
}

impl UpdateDecision {
    /// Any version string other than `current` counts as an update,
    /// including ones that would sort lower.
    pub fn from_manifest(info: VersionInfo, current: &str) -> Self {
        if info.version != current {
            UpdateDecision::Available(info)
        } else {
            UpdateDecision::UpToDate
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, UpdateDecision::Available(_))
    }
}

/// Build the HTTP client shared by the checker and installer.
fn http_client(version: &str) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(format!("settings-ui/{}", version))
        .build()
        .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))
}

/// Path of the running executable and the directory it is installed in.
pub fn current_install_paths() -> Result<(PathBuf, PathBuf)> {
    let exe = std::env::current_exe()
        .map_err(|e| AppError::Update(format!("Failed to get current executable: {}", e)))?;
    let install_dir = exe
        .parent()
        .map(|p| p.to_path_buf())
        .ok_or_else(|| AppError::Update("Executable has no parent directory".to_string()))?;
    Ok((exe, install_dir))
}
