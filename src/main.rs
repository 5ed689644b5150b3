// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! settings-ui - edit and persist preferences from the console
//!
//! Entry point for the settings-ui binary.

use std::io;

use clap::Parser;

use settings_ui::cli::Cli;
use settings_ui::config::{AppConfig, SettingsStore};
use settings_ui::console::{run_update_check, Console, MenuController, StartupOutcome};
use settings_ui::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the menu.
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    let mut directives = Vec::new();
    if cli.verbose > 0 {
        directives.push("settings_ui=debug");
    }
    if cli.verbose > 1 {
        directives.push("reqwest=debug");
    }
    for directive in directives {
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let config = AppConfig::from_cli(&cli);
    tracing::debug!(?config, "Starting");

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    console.println(&format!(
        "Welcome to the Settings UI Version {}\n",
        config.current_version
    ))?;

    if config.check_updates {
        if let StartupOutcome::HandedOff(handoff) = run_update_check(&mut console, &config).await? {
            tracing::info!(pid = handoff.updater_pid, "Handing off to updater");
            console.println("Exiting application to complete the update...")?;
            std::process::exit(0);
        }
    }

    let store = SettingsStore::new(&config.settings_path);
    let mut menu = MenuController::new(console, store);
    menu.run()
}
