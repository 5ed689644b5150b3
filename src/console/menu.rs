// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Numbered settings menu

use std::io::{BufRead, Write};

use crate::config::{Settings, SettingsStore, SettingsUpdate};
use crate::error::Result;

use super::Console;

const MENU: &str = "\n======= Settings Menu =======\n\
1. View Settings\n\
2. Update Settings\n\
3. Save Settings\n\
4. Exit\n\
=============================\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    View,
    Update,
    Save,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::View),
            "2" => Some(MenuChoice::Update),
            "3" => Some(MenuChoice::Save),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Exited,
}

/// Owns the live settings for the lifetime of the menu loop.
pub struct MenuController<R, W> {
    console: Console<R, W>,
    store: SettingsStore,
    settings: Settings,
    state: MenuState,
}

impl<R: BufRead, W: Write> MenuController<R, W> {
    /// Load settings from `store` and start in the running state.
    pub fn new(console: Console<R, W>, store: SettingsStore) -> Self {
        let settings = store.load();
        Self::with_settings(console, store, settings)
    }

    pub fn with_settings(console: Console<R, W>, store: SettingsStore, settings: Settings) -> Self {
        Self {
            console,
            store,
            settings,
            state: MenuState::Running,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        while self.state == MenuState::Running {
            self.step()?;
        }
        Ok(())
    }

    /// Show the menu, read one choice and act on it.
    pub fn step(&mut self) -> Result<MenuState> {
        self.console.println(MENU)?;
        let Some(input) = self.console.prompt("Select an option: ")? else {
            tracing::debug!("Input closed, leaving menu");
            self.state = MenuState::Exited;
            return Ok(self.state);
        };

        match MenuChoice::parse(&input) {
            Some(MenuChoice::View) => self.view()?,
            Some(MenuChoice::Update) => self.update()?,
            Some(MenuChoice::Save) => self.save()?,
            Some(MenuChoice::Exit) => {
                self.state = MenuState::Exited;
                self.console.println("Exiting application. Goodbye!")?;
            }
            None => self.console.error("Invalid option. Please try again.\n")?,
        }

        Ok(self.state)
    }

    fn view(&mut self) -> Result<()> {
        let text = format!(
            "\nCurrent Settings:\nTheme: {}\nFontSize: {}\nNotificationsEnabled: {}\n",
            self.settings.theme, self.settings.font_size, self.settings.notifications_enabled
        );
        self.console.println(&text)
    }

    fn update(&mut self) -> Result<()> {
        let theme = self.console.prompt("Enter Theme (Light/Dark): ")?;
        let font_size = self.console.prompt("Enter Font Size (e.g., 12, 14, 16): ")?;
        let notifications = self.console.prompt("Enable Notifications (true/false): ")?;

        SettingsUpdate {
            theme: theme.as_deref().unwrap_or_default(),
            font_size: font_size.as_deref().unwrap_or_default(),
            notifications: notifications.as_deref().unwrap_or_default(),
        }
        .apply(&mut self.settings);

        self.console.success("Settings updated!\n")
    }

    fn save(&mut self) -> Result<()> {
        match self.store.save(&self.settings) {
            Ok(()) => {
                let text = format!(
                    "Settings saved to '{}'.\n",
                    self.store.path().display()
                );
                self.console.success(&text)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Saving settings failed");
                self.console.error(&format!("Error saving settings: {}\n", e))
            }
        }
    }
}
