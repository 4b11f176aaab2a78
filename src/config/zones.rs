// ABOUTME: Zone selection configuration loaded from environment variables
// ABOUTME: Default zone identifier, update channel sizing, settings fetch timeout and source path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use pierre_zones_core::constants::{channels, env_config, zone_values};
use tracing::warn;

/// Runtime configuration for zone selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSettingsConfig {
    /// Zone identifier used when a requested identifier cannot be resolved
    pub default_zone_value: String,
    /// Capacity of the external zones update channel
    pub updates_channel_size: usize,
    /// Upper bound on the settings fetch; `None` waits indefinitely
    pub settings_fetch_timeout: Option<Duration>,
    /// JSON settings file; `None` uses built-in default zones
    pub settings_path: Option<PathBuf>,
}

impl Default for ZoneSettingsConfig {
    fn default() -> Self {
        Self {
            default_zone_value: zone_values::DEFAULT_ZONE_VALUE.to_owned(),
            updates_channel_size: channels::ZONES_UPDATES_CHANNEL_SIZE,
            settings_fetch_timeout: None,
            settings_path: None,
        }
    }
}

impl ZoneSettingsConfig {
    /// Load configuration from environment variables
    ///
    /// Unparseable numeric values fall back to their defaults with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let default_zone_value = env::var(env_config::DEFAULT_ZONE)
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.default_zone_value);

        let updates_channel_size =
            parse_env::<usize>(env_config::UPDATES_CHANNEL_SIZE)
                .filter(|size| *size > 0)
                .unwrap_or(defaults.updates_channel_size);

        let settings_fetch_timeout =
            parse_env::<u64>(env_config::SETTINGS_TIMEOUT_SECS).map(Duration::from_secs);

        let settings_path = env::var(env_config::SETTINGS_PATH)
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self {
            default_zone_value,
            updates_channel_size,
            settings_fetch_timeout,
            settings_path,
        }
    }

    /// Override the default zone identifier
    #[must_use]
    pub fn with_default_zone(mut self, zone_value: impl Into<String>) -> Self {
        self.default_zone_value = zone_value.into();
        self
    }

    /// Bound the settings fetch
    #[must_use]
    pub const fn with_settings_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.settings_fetch_timeout = Some(timeout);
        self
    }
}

/// Parse an environment variable, warning when it is set but invalid
fn parse_env<T: FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    raw.trim().parse::<T>().map_or_else(
        |_| {
            warn!("Ignoring invalid value '{}' for {}", raw, key);
            None
        },
        Some,
    )
}
