// ABOUTME: User settings source abstraction supplying persisted zone configuration
// ABOUTME: Pluggable sources (in-memory, JSON file) behind one async trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Settings Sources
//!
//! The selection controller asks its [`SettingsSource`] for a single
//! [`UserSettings`] snapshot at start-up and never writes back.

/// Built-in default zones
pub mod defaults;
/// JSON file backed source
pub mod file;
/// Fixed in-memory source
pub mod memory;

pub use defaults::default_user_zones;
pub use file::JsonFileSettingsSource;
pub use memory::InMemorySettingsSource;

use std::sync::Arc;

use async_trait::async_trait;
use pierre_zones_core::models::UserSettings;

use crate::config::ZoneSettingsConfig;
use crate::errors::AppResult;

/// Supplies the user's persisted settings
#[async_trait]
pub trait SettingsSource: Send + Sync {
    /// Fetch the full settings snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be read
    async fn fetch(&self) -> AppResult<UserSettings>;
}

/// Source selected by configuration: the JSON file when a path is set,
/// built-in default zones otherwise
#[must_use]
pub fn source_from_config(config: &ZoneSettingsConfig) -> Arc<dyn SettingsSource> {
    match &config.settings_path {
        Some(path) => Arc::new(JsonFileSettingsSource::new(path.clone())),
        None => Arc::new(InMemorySettingsSource::with_defaults()),
    }
}
