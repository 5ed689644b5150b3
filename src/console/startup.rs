// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Update check run before the menu opens

use std::io::{BufRead, Write};

use crate::config::AppConfig;
use crate::error::Result;
use crate::update::{self, UpdateChecker, UpdateDecision, UpdateHandoff, UpdateInstaller};

use super::Console;

#[derive(Debug)]
pub enum StartupOutcome {
    UpToDate,
    /// A different version exists but the user said no
    Declined,
    /// The updater is running; the caller should exit
    HandedOff(UpdateHandoff),
    /// Check or install failed and was reported to the user
    Failed,
}

/// Check for updates and, if the user agrees, download and start the updater.
///
/// Update failures are printed and reported as [`StartupOutcome::Failed`];
/// only console I/O errors are returned.
pub async fn run_update_check<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &AppConfig,
) -> Result<StartupOutcome> {
    console.println("Checking for updates...")?;

    let decision = match UpdateChecker::new(config) {
        Ok(checker) => checker.check().await,
        Err(e) => Err(e),
    };

    let release = match decision {
        Ok(UpdateDecision::Available(release)) => release,
        Ok(UpdateDecision::UpToDate) => {
            console.success("You are already using the latest version.")?;
            return Ok(StartupOutcome::UpToDate);
        }
        Err(e) => {
            tracing::warn!(error = %e, "Update check failed");
            console.error(&format!("Error checking for updates: {}", e))?;
            return Ok(StartupOutcome::Failed);
        }
    };

    console.notice(&format!(
        "A new version ({}) is available.",
        release.version
    ))?;
    let answer = console.prompt("Do you want to update? (yes/no): ")?;
    let accepted = answer
        .as_deref()
        .map(|a| a.trim().eq_ignore_ascii_case("yes"))
        .unwrap_or(false);
    if !accepted {
        return Ok(StartupOutcome::Declined);
    }

    console.println("Downloading the update...")?;
    let installed = match (UpdateInstaller::new(config), update::current_install_paths()) {
        (Ok(installer), Ok((exe, install_dir))) => {
            installer
                .download_and_launch(&release, &exe, &install_dir)
                .await
        }
        (Err(e), _) | (_, Err(e)) => Err(e),
    };

    match installed {
        Ok(handoff) => {
            console.success("Update downloaded successfully.")?;
            console.println("Launching updater...")?;
            Ok(StartupOutcome::HandedOff(handoff))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Update install failed");
            console.error(&format!("Error updating application: {}", e))?;
            Ok(StartupOutcome::Failed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    fn console(input: &str) -> TestConsole {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: TestConsole) -> String {
        String::from_utf8(console.into_parts().1).unwrap()
    }

    async fn manifest_server(version: &str) -> MockServer {
        let server = MockServer::start().await;
        let body = format!(
            r#"{{"Version":"{}","DownloadUrl":"{}/app-update.zip"}}"#,
            version,
            server.uri()
        );
        Mock::given(method("GET"))
            .and(path("/latest-version.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;
        server
    }

    fn config_for(server: &MockServer, temp_dir: &TempDir) -> AppConfig {
        AppConfig {
            manifest_url: format!("{}/latest-version.json", server.uri()),
            current_version: "1.0.0".to_string(),
            archive_path: temp_dir.path().join("app-update.zip"),
            updater_path: temp_dir.path().join("missing-updater"),
            check_updates: true,
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn test_up_to_date() {
        let server = manifest_server("1.0.0").await;
        let temp_dir = TempDir::new().unwrap();
        let mut console = console("");

        let outcome = run_update_check(&mut console, &config_for(&server, &temp_dir))
            .await
            .unwrap();

        assert!(matches!(outcome, StartupOutcome::UpToDate));
        assert!(output(console).contains("You are already using the latest version."));
    }

    #[tokio::test]
    async fn test_declined_update_does_not_download() {
        let server = manifest_server("1.0.1").await;
        let temp_dir = TempDir::new().unwrap();
        let config = config_for(&server, &temp_dir);
        let mut console = console("no\n");

        let outcome = run_update_check(&mut console, &config).await.unwrap();

        assert!(matches!(outcome, StartupOutcome::Declined));
        assert!(!config.archive_path.exists());
        assert!(output(console).contains("A new version (1.0.1) is available."));
    }

    #[tokio::test]
    async fn test_closed_input_declines() {
        let server = manifest_server("2.0.0").await;
        let temp_dir = TempDir::new().unwrap();
        let mut console = console("");

        let outcome = run_update_check(&mut console, &config_for(&server, &temp_dir))
            .await
            .unwrap();
        assert!(matches!(outcome, StartupOutcome::Declined));
    }

    #[tokio::test]
    async fn test_check_failure_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        let temp_dir = TempDir::new().unwrap();
        let mut console = console("");

        let outcome = run_update_check(&mut console, &config_for(&server, &temp_dir))
            .await
            .unwrap();

        assert!(matches!(outcome, StartupOutcome::Failed));
        assert!(output(console).contains("Error checking for updates"));
    }

    #[tokio::test]
    async fn test_download_failure_is_reported() {
        // Manifest points at an archive path the server does not serve.
        let server = manifest_server("1.0.1").await;
        let temp_dir = TempDir::new().unwrap();
        let mut console = console("YES\n");

        let outcome = run_update_check(&mut console, &config_for(&server, &temp_dir))
            .await
            .unwrap();

        assert!(matches!(outcome, StartupOutcome::Failed));
        assert!(output(console).contains("Error updating application"));
    }
}
