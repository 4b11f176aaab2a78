// ABOUTME: In-memory settings source returning a fixed user settings snapshot
// ABOUTME: Used for built-in defaults and for driving the controller in tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use pierre_zones_core::models::{UserSettings, UserZones};

use super::{default_user_zones, SettingsSource};
use crate::errors::AppResult;

/// Settings source serving one fixed snapshot
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsSource {
    settings: UserSettings,
}

impl InMemorySettingsSource {
    /// Source serving `settings`
    #[must_use]
    pub const fn new(settings: UserSettings) -> Self {
        Self { settings }
    }

    /// Source serving only `zones`
    #[must_use]
    pub const fn from_zones(zones: UserZones) -> Self {
        Self::new(UserSettings::new(zones))
    }

    /// Source serving the built-in default zones
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::from_zones(default_user_zones())
    }
}

#[async_trait]
impl SettingsSource for InMemorySettingsSource {
    async fn fetch(&self) -> AppResult<UserSettings> {
        Ok(self.settings.clone())
    }
}
