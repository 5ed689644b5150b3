// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Configuration module for settings-ui
//!
//! Runtime configuration plus the persisted user settings.

pub mod app;
pub mod settings;

pub use app::AppConfig;
pub use settings::*;
