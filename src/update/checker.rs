// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::config::AppConfig;
use crate::error::{AppError, Result};

use super::{http_client, UpdateDecision, VersionInfo};

/// Fetches the remote manifest and compares it with the running version.
#[derive(Debug, Clone)]
pub struct UpdateChecker {
    client: reqwest::Client,
    manifest_url: String,
    current_version: String,
}

impl UpdateChecker {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            client: http_client(&config.current_version)?,
            manifest_url: config.manifest_url.clone(),
            current_version: config.current_version.clone(),
        })
    }

    /// Check if a different version is available
    pub async fn check(&self) -> Result<UpdateDecision> {
        let info = self.fetch_manifest().await?;
        tracing::debug!(
            remote = %info.version,
            current = %self.current_version,
            "Fetched version manifest"
        );
        Ok(UpdateDecision::from_manifest(info, &self.current_version))
    }

    async fn fetch_manifest(&self) -> Result<VersionInfo> {
        let response = self
            .client
            .get(&self.manifest_url)
            .send()
            .await
            .map_err(|e| AppError::Update(format!("Failed to check for updates: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Update(format!(
                "Version manifest request failed: {}",
                response.status()
            )));
        }

        response
            .json::<VersionInfo>()
            .await
            .map_err(|e| AppError::Update(format!("Failed to parse version manifest: {}", e)))
    }
}
