// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use super::Settings;

/// Raw answers to the three update prompts.
///
/// Any answer that does not parse leaves its field untouched.
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate<'a> {
    pub theme: &'a str,
    pub font_size: &'a str,
    pub notifications: &'a str,
}

impl SettingsUpdate<'_> {
    /// Apply the parsable answers to `settings`.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(theme) = parse_theme(self.theme) {
            settings.theme = theme;
        }
        if let Some(font_size) = parse_font_size(self.font_size) {
            settings.font_size = font_size;
        }
        if let Some(enabled) = parse_notifications(self.notifications) {
            settings.notifications_enabled = enabled;
        }
    }
}

/// Empty or whitespace-only input keeps the current theme; anything else
/// is stored as typed.
pub fn parse_theme(input: &str) -> Option<String> {
    if input.trim().is_empty() {
        None
    } else {
        Some(input.to_string())
    }
}

pub fn parse_font_size(input: &str) -> Option<i32> {
    input.trim().parse().ok()
}

/// Accepts `true`/`false` in any letter case.
pub fn parse_notifications(input: &str) -> Option<bool> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Some(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
