// ABOUTME: Core data models for training zone selection
// ABOUTME: Zone thresholds, zone type definitions and the user's persisted zone settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Zone`: one threshold range of a zone set
//! - `ZoneDefinition`: catalog metadata describing a zone type
//! - `UserZones`: the user's zone sets keyed by zone type identifier
//! - `UserSettings`: the settings snapshot delivered by a settings source

/// User settings snapshot
pub mod settings;
/// Zones and zone definitions
pub mod zone;

pub use settings::UserSettings;
pub use zone::{CustomDisplay, UserZones, Zone, ZoneDefinition};
