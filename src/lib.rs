// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! settings-ui - console preferences editor with self-update handoff.
//!
//! - `config`: runtime configuration and the persisted `Settings` record
//! - `update`: version manifest check, archive download, updater launch
//! - `console`: numbered menu loop and the startup update prompt
//! - `cli`: optional command-line overrides

pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod update;

pub use error::{AppError, Result};
