// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! User preferences record
//!
//! Stored as `settings.json` in the working directory by default.

use serde::{Deserialize, Serialize};

mod edit;
mod io;

pub use edit::{parse_font_size, parse_notifications, parse_theme, SettingsUpdate};
pub use io::SettingsStore;

/// Persisted user preferences
///
/// Keys are written in PascalCase to stay compatible with existing
/// `settings.json` files. Missing keys fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Settings {
    /// Color theme name, e.g. "Light" or "Dark"
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Font size in points
    #[serde(default = "default_font_size")]
    pub font_size: i32,

    /// Whether notifications are shown
    #[serde(default = "default_notifications_enabled")]
    pub notifications_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            font_size: default_font_size(),
            notifications_enabled: default_notifications_enabled(),
        }
    }
}

fn default_theme() -> String {
    "Light".to_string()
}

fn default_font_size() -> i32 {
    12
}

fn default_notifications_enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.theme, "Light");
        assert_eq!(settings.font_size, 12);
        assert!(settings.notifications_enabled);
    }

    #[test]
    fn test_settings_serialize_pascal_case_keys() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert_eq!(
            json,
            r#"{"Theme":"Light","FontSize":12,"NotificationsEnabled":true}"#
        );
    }

    #[test]
    fn test_settings_missing_keys_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"Theme":"Dark"}"#).unwrap();
        assert_eq!(settings.theme, "Dark");
        assert_eq!(settings.font_size, 12);
        assert!(settings.notifications_enabled);
    }

    #[test]
    fn test_settings_unknown_keys_ignored() {
        let settings: Settings =
            serde_json::from_str(r#"{"FontSize":18,"Language":"en"}"#).unwrap();
        assert_eq!(settings.font_size, 18);
        assert_eq!(settings.theme, "Light");
    }

    #[test]
    fn test_settings_wrong_type_is_error() {
        let result = serde_json::from_str::<Settings>(r#"{"FontSize":"big"}"#);
        assert!(result.is_err());
    }
}
