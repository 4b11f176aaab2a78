// ABOUTME: User settings snapshot as delivered by a settings source
// ABOUTME: Carries the user's zone sets plus sync metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserZones;

/// Persisted user settings relevant to zone selection.
///
/// Treated as an immutable snapshot: a new fetch produces a new value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// Zone sets keyed by zone type identifier
    #[serde(default)]
    pub zones: UserZones,
    /// When the settings were last synced from storage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced_at: Option<DateTime<Utc>>,
}

impl UserSettings {
    /// Settings holding the given zones, never synced
    #[must_use]
    pub const fn new(zones: UserZones) -> Self {
        Self {
            zones,
            synced_at: None,
        }
    }
}
