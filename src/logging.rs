// ABOUTME: Logging configuration and structured logging setup for zone selection services
// ABOUTME: Configures log levels, formatters, and output destinations from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration built on `tracing-subscriber`

use std::env;
use std::io;

use pierre_zones_core::constants::service_names;
use serde_json::json;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info};
use tracing_subscriber::{
    filter::Directive,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::errors::{AppError, AppResult};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Include span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to pretty output
    #[must_use]
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("json") => Self::Json,
            Some("compact") => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::PIERRE_ZONE_SETTINGS.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = LogFormat::from_env_value(env::var("LOG_FORMAT").ok().as_deref());

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::PIERRE_ZONE_SETTINGS.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
            environment,
        }
    }

    /// Verbose variant used by the CLI `--verbose` flag
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.level = "debug".into();
        self
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> AppResult<()> {
        let mut env_filter = EnvFilter::new(&self.level);
        if let Ok(tokio_directive) = "tokio=warn".parse() {
            env_filter = env_filter.add_directive(tokio_directive);
        }
        if let Some(directive) = crate_directive(&self.level) {
            env_filter = env_filter.add_directive(directive);
        }

        let registry = tracing_subscriber::registry().with(env_filter);
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let result = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .with_span_events(span_events)
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .with_span_events(span_events),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr)
                        .with_span_events(FmtSpan::NONE),
                )
                .try_init(),
        };

        result.map_err(|e| {
            AppError::internal(format!("Failed to initialize tracing subscriber: {e}"))
        })?;

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Pierre zone settings starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread,
                    "spans": self.include_spans
                }
            }
        });

        debug!("Logging configuration loaded: {}", config_summary);
    }
}

/// Directive scoping a bare level such as `debug` to this crate.
///
/// Full filter strings (`info,tokio=debug`) already name their targets and
/// yield `None`.
fn crate_directive(level: &str) -> Option<Directive> {
    let level = level.trim();
    level.parse::<LevelFilter>().ok()?;
    format!("pierre_zone_settings={level}").parse().ok()
}

/// Zone-selection specific structured log events
pub struct ZoneLogger;

impl ZoneLogger {
    /// A requested zone resolved and its zones were published
    pub fn log_selection_loaded(controller_id: &str, zone_value: &str, zone_count: usize) {
        info!(
            controller.id = %controller_id,
            zone.value = %zone_value,
            zone.count = zone_count,
            "Zone selection loaded"
        );
    }

    /// A requested zone failed to resolve and a redirect was issued
    pub fn log_redirect(controller_id: &str, requested: &str, target: &str, reason: &str) {
        debug!(
            controller.id = %controller_id,
            zone.requested = %requested,
            zone.redirect_to = %target,
            zone.reason = %reason,
            "Zone selection redirected to default"
        );
    }

    /// Zones replaced by an external actor were mirrored into the view
    pub fn log_external_update(controller_id: &str, zone_count: usize) {
        debug!(
            controller.id = %controller_id,
            zone.count = zone_count,
            "Mirrored external zones update"
        );
    }

    /// The controller reached a terminal failure
    pub fn log_failure(controller_id: &str, reason: &str) {
        error!(
            controller.id = %controller_id,
            failure.reason = %reason,
            "Zone selection controller failed"
        );
    }
}
