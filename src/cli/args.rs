// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! All flags are optional; with none given the program behaves as a plain
//! interactive menu.

use clap::Parser;
use std::path::PathBuf;

/// settings-ui - edit and persist your preferences from the console
#[derive(Parser, Debug)]
#[command(name = "settings-ui")]
#[command(version, about = "Edit and persist preferences from the console")]
pub struct Cli {
    /// Settings file path (defaults to ./settings.json)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Check for a newer version before opening the menu
    #[arg(long)]
    pub check_updates: bool,

    /// Override the remote version manifest URL
    #[arg(long)]
    pub manifest_url: Option<String>,

    /// Override the external updater executable (relative to the install directory)
    #[arg(long)]
    pub updater: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::try_parse_from(["settings-ui"]).unwrap();
        assert!(cli.settings.is_none());
        assert!(!cli.check_updates);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_verbose_count() {
        let cli = Cli::try_parse_from(["settings-ui", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_unknown_flag_fails() {
        assert!(Cli::try_parse_from(["settings-ui", "--nope"]).is_err());
    }
}
