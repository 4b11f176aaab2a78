// ABOUTME: JSON file settings source reading persisted user settings from disk
// ABOUTME: Async file read via tokio with serde_json deserialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;

use async_trait::async_trait;
use pierre_zones_core::models::UserSettings;
use tokio::fs;
use tracing::debug;

use super::SettingsSource;
use crate::errors::{AppError, AppResult};

/// Settings source reading a JSON document shaped like [`UserSettings`]:
///
/// ```json
/// { "zones": { "speed": [{ "from": 0, "to": 10 }] }, "syncedAt": "2025-01-01T00:00:00Z" }
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileSettingsSource {
    path: PathBuf,
}

impl JsonFileSettingsSource {
    /// Source reading `path` on every fetch
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl SettingsSource for JsonFileSettingsSource {
    async fn fetch(&self) -> AppResult<UserSettings> {
        let contents = fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::storage(format!(
                "Failed to read settings file {}",
                self.path.display()
            ))
            .with_source(e)
        })?;

        let settings: UserSettings = serde_json::from_str(&contents)?;
        debug!(
            "Loaded {} zone types from {}",
            settings.zones.len(),
            self.path.display()
        );
        Ok(settings)
    }
}
