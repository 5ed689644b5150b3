// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Runtime configuration
//!
//! Paths, URLs and the running version, resolved once at startup and handed
//! to the store, checker and installer.

use std::path::PathBuf;

use crate::cli::Cli;

/// Current version of settings-ui
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default location of the remote version manifest
pub const DEFAULT_MANIFEST_URL: &str = "https://example.com/latest-version.json";

/// Default settings file, relative to the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// File name of the downloaded update inside the temp directory
pub const ARCHIVE_FILE_NAME: &str = "app-update.zip";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Settings JSON file
    pub settings_path: PathBuf,

    /// Version compared against the remote manifest
    pub current_version: String,

    /// Remote manifest URL
    pub manifest_url: String,

    /// External updater executable
    pub updater_path: PathBuf,

    /// Where the downloaded archive is written
    pub archive_path: PathBuf,

    /// Run the update check before entering the menu
    pub check_updates: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings_path: PathBuf::from(DEFAULT_SETTINGS_FILE),
            current_version: VERSION.to_string(),
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            updater_path: default_updater_path(),
            archive_path: std::env::temp_dir().join(ARCHIVE_FILE_NAME),
            check_updates: false,
        }
    }
}

impl AppConfig {
    /// Defaults with any command-line overrides applied.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Self::default();
        if let Some(ref path) = cli.settings {
            config.settings_path = path.clone();
        }
        if let Some(ref url) = cli.manifest_url {
            config.manifest_url = url.clone();
        }
        if let Some(ref updater) = cli.updater {
            config.updater_path = updater.clone();
        }
        config.check_updates = cli.check_updates;
        config
    }
}

fn default_updater_path() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("Updater.exe")
    } else {
        PathBuf::from("updater")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.settings_path, PathBuf::from("settings.json"));
        assert_eq!(config.current_version, VERSION);
        assert_eq!(config.manifest_url, DEFAULT_MANIFEST_URL);
        assert!(!config.check_updates);
        assert!(config.archive_path.ends_with(ARCHIVE_FILE_NAME));
        assert!(config.archive_path.starts_with(std::env::temp_dir()));
    }

    #[test]
    fn test_version_constant() {
        assert_eq!(VERSION.split('.').count(), 3);
    }

    #[test]
    fn test_from_cli_without_flags_matches_default() {
        let cli = Cli::try_parse_from(["settings-ui"]).unwrap();
        let config = AppConfig::from_cli(&cli);
        let default = AppConfig::default();
        assert_eq!(config.settings_path, default.settings_path);
        assert_eq!(config.manifest_url, default.manifest_url);
        assert_eq!(config.updater_path, default.updater_path);
        assert_eq!(config.check_updates, default.check_updates);
    }

    #[test]
    fn test_from_cli_overrides() {
        let cli = Cli::try_parse_from([
            "settings-ui",
            "--settings",
            "/tmp/prefs.json",
            "--manifest-url",
            "http://localhost/v.json",
            "--updater",
            "/opt/app/updater",
            "--check-updates",
        ])
        .unwrap();
        let config = AppConfig::from_cli(&cli);
        assert_eq!(config.settings_path, PathBuf::from("/tmp/prefs.json"));
        assert_eq!(config.manifest_url, "http://localhost/v.json");
        assert_eq!(config.updater_path, PathBuf::from("/opt/app/updater"));
        assert!(config.check_updates);
    }
}
