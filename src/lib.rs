// ABOUTME: Main library entry point for Pierre training zone settings
// ABOUTME: Resolves the selected zone type and keeps shared zone state synchronized
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Zone Settings
//!
//! Selection and synchronization of a user's training zones (speed, pace,
//! heart rate, power, cadence, grade, elevation, ascent).
//!
//! ## Architecture
//!
//! - **Zones**: catalog, resolver, shared state, routing and the selection controller
//! - **Settings**: pluggable sources of the user's persisted zones
//! - **Config**: environment-driven configuration
//! - **Logging**: structured `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pierre_zone_settings::config::ZoneSettingsConfig;
//! use pierre_zone_settings::errors::AppResult;
//! use pierre_zone_settings::settings::InMemorySettingsSource;
//! use pierre_zone_settings::zones::{
//!     ControllerPhase, RouteParams, SelectionController, ZoneCatalog, ZoneRouter, ZoneSyncState,
//! };
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ZoneSettingsConfig::from_env();
//!     let state = Arc::new(ZoneSyncState::from_config(&config));
//!     let (router, routes) = ZoneRouter::new(RouteParams::new("heartRate"));
//!
//!     let controller = SelectionController::new(
//!         &config,
//!         ZoneCatalog::builtin(),
//!         Arc::new(InMemorySettingsSource::with_defaults()),
//!         Arc::new(router),
//!         Arc::clone(&state),
//!     )?;
//!     let mut handle = controller.start(routes);
//!
//!     let view = handle
//!         .wait_for(|view| view.phase == ControllerPhase::Loaded)
//!         .await?;
//!     println!("Selected {:?}", view.selected_value());
//!
//!     handle.shutdown().await
//! }
//! ```

/// Configuration loaded from the environment
pub mod config;

/// Unified error handling re-exported from the core crate
pub mod errors;

/// Structured logging setup
pub mod logging;

/// User settings sources
pub mod settings;

/// Zone catalog, resolution, shared state and selection controller
pub mod zones;

pub use pierre_zones_core::{constants, models};
