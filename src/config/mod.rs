// ABOUTME: Configuration management module for zone selection settings
// ABOUTME: Environment-only configuration with built-in defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All configuration is read from environment variables with built-in
//! defaults, so deployments need no configuration files.

/// Zone selection controller configuration
pub mod zones;

pub use zones::ZoneSettingsConfig;
