// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides zone fixtures, controllable settings sources and a controller harness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
//! Shared test utilities for `pierre_zone_settings`

use std::env;
use std::future::pending;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use pierre_zone_settings::{
    config::ZoneSettingsConfig,
    errors::{AppError, AppResult},
    models::{UserSettings, UserZones, Zone},
    settings::SettingsSource,
    zones::{
        ControllerHandle, ControllerView, Navigator, RouteParams, SelectionController,
        ZoneCatalog, ZoneRouter, ZoneSyncState,
    },
};
use tokio::sync::Notify;
use tokio::time::timeout;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// How long a test waits for the controller before giving up
pub const SETTLE_TIMEOUT: Duration = Duration::from_secs(2);

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub fn z1() -> Zone {
    Zone::new(0.0, 10.0)
}

pub fn z2() -> Zone {
    Zone::new(10.0, 20.0)
}

pub fn z3() -> Zone {
    Zone::new(100.0, 150.0)
}

/// `{speed: [z1, z2], heartRate: [z3]}`
pub fn sample_zones() -> UserZones {
    UserZones::new()
        .with_zones("speed", vec![z1(), z2()])
        .with_zones("heartRate", vec![z3()])
}

pub fn sample_settings() -> UserSettings {
    UserSettings::new(sample_zones())
}

/// Settings source whose fetch completes only after [`Self::release`]
pub struct GatedSettingsSource {
    settings: UserSettings,
    gate: Notify,
}

impl GatedSettingsSource {
    pub fn new(settings: UserSettings) -> Self {
        Self {
            settings,
            gate: Notify::new(),
        }
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl SettingsSource for GatedSettingsSource {
    async fn fetch(&self) -> AppResult<UserSettings> {
        self.gate.notified().await;
        Ok(self.settings.clone())
    }
}

/// Settings source that always fails
pub struct FailingSettingsSource;

#[async_trait]
impl SettingsSource for FailingSettingsSource {
    async fn fetch(&self) -> AppResult<UserSettings> {
        Err(AppError::storage("settings store offline"))
    }
}

/// Settings source that never settles
pub struct PendingSettingsSource;

#[async_trait]
impl SettingsSource for PendingSettingsSource {
    async fn fetch(&self) -> AppResult<UserSettings> {
        pending().await
    }
}

/// Navigator that records every request before forwarding it to a router
pub struct RecordingNavigator {
    router: ZoneRouter,
    targets: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new(router: ZoneRouter) -> Self {
        Self {
            router,
            targets: Mutex::new(Vec::new()),
        }
    }

    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, zone_value: &str) -> AppResult<()> {
        self.targets.lock().unwrap().push(zone_value.to_owned());
        self.router.navigate(zone_value)
    }
}

/// A started controller with its collaborators
pub struct Harness {
    pub state: Arc<ZoneSyncState>,
    pub navigator: Arc<RecordingNavigator>,
    /// Unrecorded router for navigation performed by the test itself
    pub router: ZoneRouter,
    pub handle: ControllerHandle,
}

impl Harness {
    pub fn start(source: Arc<dyn SettingsSource>, initial_zone: &str) -> AppResult<Self> {
        Self::start_with_config(&ZoneSettingsConfig::default(), source, initial_zone)
    }

    pub fn start_with_config(
        config: &ZoneSettingsConfig,
        source: Arc<dyn SettingsSource>,
        initial_zone: &str,
    ) -> AppResult<Self> {
        init_test_logging();
        let state = Arc::new(ZoneSyncState::from_config(config));
        let (router, routes) = ZoneRouter::new(RouteParams::new(initial_zone));
        let navigator = Arc::new(RecordingNavigator::new(router.clone()));

        let controller = SelectionController::new(
            config,
            ZoneCatalog::builtin(),
            source,
            Arc::clone(&navigator) as Arc<dyn Navigator>,
            Arc::clone(&state),
        )?;

        Ok(Self {
            state,
            navigator,
            router,
            handle: controller.start(routes),
        })
    }

    /// Wait until the controller view satisfies `predicate`
    pub async fn wait_until(
        &mut self,
        predicate: impl FnMut(&ControllerView) -> bool,
    ) -> ControllerView {
        timeout(SETTLE_TIMEOUT, self.handle.wait_for(predicate))
            .await
            .expect("controller did not settle in time")
            .expect("controller stopped before settling")
    }
}
