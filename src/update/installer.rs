// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Child, Command};

use crate::config::AppConfig;
use crate::error::{AppError, Result};

use super::{http_client, VersionInfo};

/// A started updater. The caller is expected to exit right after.
#[derive(Debug)]
pub struct UpdateHandoff {
    pub version: String,
    pub archive_path: PathBuf,
    pub updater_pid: u32,
}

/// Downloads the update archive and starts the external updater.
#[derive(Debug, Clone)]
pub struct UpdateInstaller {
    client: reqwest::Client,
    updater_path: PathBuf,
    archive_path: PathBuf,
}

impl UpdateInstaller {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            client: http_client(&config.current_version)?,
            updater_path: config.updater_path.clone(),
            archive_path: config.archive_path.clone(),
        })
    }

    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }

    /// Download the archive, then start the updater with it.
    ///
    /// Does not wait for the updater.
    pub async fn download_and_launch(
        &self,
        release: &VersionInfo,
        exe_path: &Path,
        install_dir: &Path,
    ) -> Result<UpdateHandoff> {
        let archive = self.download(&release.download_url).await?;
        let child = self.launch(&archive, install_dir, exe_path)?;

        tracing::info!(
            version = %release.version,
            pid = child.id(),
            "Updater started"
        );

        Ok(UpdateHandoff {
            version: release.version.clone(),
            archive_path: archive,
            updater_pid: child.id(),
        })
    }

    /// Download `url` to the archive path, replacing any previous download.
    pub async fn download(&self, url: &str) -> Result<PathBuf> {
        tracing::debug!(url, "Downloading update");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Update(format!("Failed to download update: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Update(format!(
                "Failed to download update: {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Update(format!("Failed to read download: {}", e)))?;

        fs::write(&self.archive_path, &bytes)
            .map_err(|e| AppError::Update(format!("Failed to write temp file: {}", e)))?;

        if let Err(e) = validate_archive(&self.archive_path) {
            let _ = fs::remove_file(&self.archive_path);
            return Err(e);
        }

        tracing::debug!(
            path = %self.archive_path.display(),
            bytes = bytes.len(),
            "Update downloaded"
        );
        Ok(self.archive_path.clone())
    }

    /// Updater executable, with relative paths taken from `install_dir`.
    pub fn updater_for(&self, install_dir: &Path) -> PathBuf {
        if self.updater_path.is_absolute() {
            self.updater_path.clone()
        } else {
            install_dir.join(&self.updater_path)
        }
    }

    /// Command line for the updater: archive, install directory, executable.
    pub fn updater_command(&self, archive: &Path, install_dir: &Path, exe_path: &Path) -> Command {
        let mut command = Command::new(self.updater_for(install_dir));
        command.arg(archive).arg(install_dir).arg(exe_path);
        command
    }

    pub fn launch(&self, archive: &Path, install_dir: &Path, exe_path: &Path) -> Result<Child> {
        let updater = self.updater_for(install_dir);
        self.updater_command(archive, install_dir, exe_path)
            .spawn()
            .map_err(|e| AppError::Launch(format!("{}: {}", updater.display(), e)))
    }
}

/// Check that the file is a readable zip archive.
fn validate_archive(path: &Path) -> Result<usize> {
    let file = fs::File::open(path)?;
    let archive = zip::ZipArchive::new(file)?;
    Ok(archive.len())
}
