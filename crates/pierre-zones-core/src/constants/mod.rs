// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Zone identifiers, route segments, channel sizes and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large list.

/// Zone type identifiers used as selector keys
pub mod zone_values {
    /// Cycling speed zones
    pub const SPEED: &str = "speed";
    /// Running pace zones
    pub const PACE: &str = "pace";
    /// Grade adjusted running pace zones
    pub const GRADE_ADJUSTED_PACE: &str = "gradeAdjustedPace";
    /// Heart rate zones
    pub const HEART_RATE: &str = "heartRate";
    /// Cycling power zones
    pub const POWER: &str = "power";
    /// Running power zones
    pub const RUNNING_POWER: &str = "runningPower";
    /// Cycling cadence zones
    pub const CYCLING_CADENCE: &str = "cyclingCadence";
    /// Running cadence zones
    pub const RUNNING_CADENCE: &str = "runningCadence";
    /// Grade zones
    pub const GRADE: &str = "grade";
    /// Elevation zones
    pub const ELEVATION: &str = "elevation";
    /// Ascent speed zones
    pub const ASCENT: &str = "ascent";

    /// Zone selected when the requested identifier cannot be resolved
    pub const DEFAULT_ZONE_VALUE: &str = SPEED;
}

/// Navigation route segments
pub mod routes {
    /// Route segment under which each zone type is addressed
    pub const ZONES_SETTINGS: &str = "zonesSettings";
}

/// Channel sizing for state propagation
pub mod channels {
    /// Buffered external zone updates before slow subscribers start lagging
    pub const ZONES_UPDATES_CHANNEL_SIZE: usize = 32;
}

/// Environment variable names
pub mod env_config {
    /// Default zone identifier override
    pub const DEFAULT_ZONE: &str = "PIERRE_ZONES_DEFAULT";
    /// Capacity of the external zone updates channel
    pub const UPDATES_CHANNEL_SIZE: &str = "PIERRE_ZONES_UPDATES_CHANNEL_SIZE";
    /// Settings fetch timeout in seconds
    pub const SETTINGS_TIMEOUT_SECS: &str = "PIERRE_ZONES_SETTINGS_TIMEOUT_SECS";
    /// Path of a JSON user settings file
    pub const SETTINGS_PATH: &str = "PIERRE_ZONES_SETTINGS_PATH";
}

/// Service identity for structured logging
pub mod service_names {
    /// Name reported in log records
    pub const PIERRE_ZONE_SETTINGS: &str = "pierre-zone-settings";
}
