// ABOUTME: Integration tests for logging configuration
// ABOUTME: Validates environment handling and defaults for structured logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use pierre_zone_settings::constants::service_names;
use pierre_zone_settings::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

const LOGGING_VARS: [&str; 6] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "SERVICE_NAME",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_SPANS",
];

fn clear_logging_env() {
    for key in LOGGING_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_logging_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "zones-test");

    let config = LoggingConfig::from_env();
    clear_logging_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "zones-test");
    assert!(config.include_location);
    assert!(config.include_thread);
    assert!(!config.include_spans);
}

#[test]
#[serial]
fn test_logging_feature_flags_in_development() {
    clear_logging_env();
    env::set_var("LOG_FORMAT", "compact");
    env::set_var("LOG_INCLUDE_SPANS", "1");

    let config = LoggingConfig::from_env();
    clear_logging_env();

    assert_eq!(config.format, LogFormat::Compact);
    assert!(config.include_spans);
    assert!(!config.include_location);
    assert!(!config.include_thread);
}

#[test]
#[serial]
fn test_default_logging_config() {
    clear_logging_env();
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, service_names::PIERRE_ZONE_SETTINGS);
    assert_eq!(config.service_version, env!("CARGO_PKG_VERSION"));
    assert!(!config.include_location);
}
