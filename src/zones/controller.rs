// ABOUTME: Selection controller orchestrating settings fetch, resolution, publishing and redirects
// ABOUTME: Runs as one tokio task and mirrors external zone updates into its exposed view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Selection Controller
//!
//! State machine driving the current zone selection:
//!
//! ```text
//! Uninitialized -> AwaitingSettings -> Resolving -> Loaded
//!                                      Resolving -> Redirecting -> Resolving
//! ```
//!
//! No route event is looked at before the settings fetch settles; events
//! queued meanwhile collapse to the most recent one. Afterwards events are
//! handled one at a time, in arrival order, inside a single task. A requested
//! identifier that does not resolve triggers one navigation to the default
//! zone, whose route event re-enters resolution. The default zone failing to
//! resolve is a configuration defect and ends the controller.

use std::sync::Arc;
use std::time::Duration;

use pierre_zones_core::models::{UserSettings, UserZones, Zone, ZoneDefinition};
use serde::Serialize;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use super::catalog::ZoneCatalog;
use super::resolver::resolve;
use super::routing::{Navigator, RouteParams, RouteStream};
use super::state::ZoneSyncState;
use crate::config::ZoneSettingsConfig;
use crate::errors::{AppError, AppResult, UnknownSelection, ZoneError};
use crate::logging::ZoneLogger;
use crate::settings::SettingsSource;

/// Lifecycle phase of a selection controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum ControllerPhase {
    /// Created, task not running yet
    Uninitialized,
    /// Waiting for the settings fetch to settle
    AwaitingSettings,
    /// Resolving a requested identifier
    Resolving,
    /// Waiting for the route event caused by a redirect to the default zone
    Redirecting,
    /// The requested zone is loaded and published
    Loaded,
    /// Terminal failure (settings unavailable or catalog misconfiguration)
    Failed(String),
    /// Torn down
    Stopped,
}

/// Read-only snapshot of what the controller exposes to rendering layers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerView {
    /// Current lifecycle phase
    pub phase: ControllerPhase,
    /// Identifier of the last route event handled
    pub requested: Option<String>,
    /// Zones currently shown, from a selection or an external update
    pub current_zones: Option<Vec<Zone>>,
    /// Definition of the active selection
    pub zone_definition_selected: Option<&'static ZoneDefinition>,
    /// Full catalog
    pub zone_definitions: &'static [ZoneDefinition],
    /// Redirects to the default zone issued so far
    pub redirects: u64,
}

impl ControllerView {
    fn initial(catalog: &ZoneCatalog) -> Self {
        Self {
            phase: ControllerPhase::Uninitialized,
            requested: None,
            current_zones: None,
            zone_definition_selected: None,
            zone_definitions: catalog.list(),
            redirects: 0,
        }
    }

    /// Value of the selected definition, if any
    #[must_use]
    pub fn selected_value(&self) -> Option<&'static str> {
        self.zone_definition_selected.map(|d| d.value)
    }

    /// Whether the controller has reached a terminal phase
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(
            self.phase,
            ControllerPhase::Failed(_) | ControllerPhase::Stopped
        )
    }
}

/// A successfully resolved selection, superseded entirely by the next one
#[derive(Debug)]
struct Selection {
    requested: String,
    definition: &'static ZoneDefinition,
    zones: Vec<Zone>,
}

impl Selection {
    fn load(
        requested: String,
        definition: &'static ZoneDefinition,
        user_zones: &UserZones,
    ) -> Result<Self, UnknownSelection> {
        let zones = user_zones
            .get(definition.value)
            .ok_or_else(|| UnknownSelection::NotConfigured(definition.value.to_owned()))?
            .to_vec();
        Ok(Self {
            requested,
            definition,
            zones,
        })
    }
}

/// Keeps the shared zones state in line with the requested zone type
pub struct SelectionController {
    id: Uuid,
    catalog: ZoneCatalog,
    default_zone_value: String,
    settings_fetch_timeout: Option<Duration>,
    settings: Arc<dyn SettingsSource>,
    navigator: Arc<dyn Navigator>,
    state: Arc<ZoneSyncState>,
    view_tx: watch::Sender<ControllerView>,
}

impl SelectionController {
    /// Create a controller.
    ///
    /// # Errors
    ///
    /// Returns a catalog misconfiguration error if the configured default
    /// zone is blank or not in `catalog`
    pub fn new(
        config: &ZoneSettingsConfig,
        catalog: ZoneCatalog,
        settings: Arc<dyn SettingsSource>,
        navigator: Arc<dyn Navigator>,
        state: Arc<ZoneSyncState>,
    ) -> AppResult<Self> {
        let default_zone_value = config.default_zone_value.as_str();
        if default_zone_value.trim().is_empty() || catalog.find(default_zone_value).is_none() {
            return Err(
                ZoneError::catalog_misconfiguration(default_zone_value, "zone catalog").into(),
            );
        }

        let (view_tx, _) = watch::channel(ControllerView::initial(&catalog));
        Ok(Self {
            id: Uuid::new_v4(),
            catalog,
            default_zone_value: config.default_zone_value.clone(),
            settings_fetch_timeout: config.settings_fetch_timeout,
            settings,
            navigator,
            state,
            view_tx,
        })
    }

    /// Spawn the controller task consuming `routes`
    #[must_use]
    pub fn start(self, routes: RouteStream) -> ControllerHandle {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let id = self.id;
        let view_rx = self.view_tx.subscribe();
        let navigator = Arc::clone(&self.navigator);
        let span = info_span!("zone_selection", controller.id = %id);

        let task = tokio::spawn(self.run(routes, shutdown_rx).instrument(span));

        ControllerHandle {
            id,
            view_rx,
            navigator,
            shutdown_tx: Some(shutdown_tx),
            task,
        }
    }

    async fn run(
        self,
        mut routes: RouteStream,
        mut shutdown_rx: oneshot::Receiver<()>,
    ) -> AppResult<()> {
        // Subscribed before the fetch so resets during start-up are not lost
        let mut zones_updates = self.state.zones_updates();
        self.set_phase(ControllerPhase::AwaitingSettings);

        let user_zones = match self
            .await_settings(&mut zones_updates, &mut shutdown_rx)
            .await
        {
            Ok(Some(settings)) => settings.zones,
            Ok(None) => {
                self.stop();
                return Ok(());
            }
            Err(error) => return Err(self.fail(error)),
        };

        if !user_zones.contains(&self.default_zone_value) {
            return Err(self.fail(ZoneError::catalog_misconfiguration(
                self.default_zone_value.as_str(),
                "user zone settings",
            )));
        }

        if let Some(params) = routes.take_latest() {
            self.handle_route(&user_zones, params);
        }

        let mut updates_open = true;
        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown_rx => break,
                update = zones_updates.recv(), if updates_open => {
                    updates_open = self.on_zones_update(update);
                }
                params = routes.recv() => {
                    let Some(params) = params else {
                        debug!("Route stream closed");
                        break;
                    };
                    self.handle_route(&user_zones, params);
                }
            }
        }

        self.stop();
        Ok(())
    }

    /// Wait for the settings fetch while still mirroring external updates.
    ///
    /// Returns `Ok(None)` on shutdown; the fetch is dropped and its result
    /// discarded.
    async fn await_settings(
        &self,
        zones_updates: &mut broadcast::Receiver<Vec<Zone>>,
        shutdown_rx: &mut oneshot::Receiver<()>,
    ) -> Result<Option<UserSettings>, ZoneError> {
        let fetch = self.fetch_settings();
        tokio::pin!(fetch);

        let mut updates_open = true;
        loop {
            tokio::select! {
                biased;
                _ = &mut *shutdown_rx => return Ok(None),
                update = zones_updates.recv(), if updates_open => {
                    updates_open = self.on_zones_update(update);
                }
                settings = &mut fetch => return settings.map(Some),
            }
        }
    }

    async fn fetch_settings(&self) -> Result<UserSettings, ZoneError> {
        let fetch = self.settings.fetch();
        let result = match self.settings_fetch_timeout {
            Some(limit) => timeout(limit, fetch).await.map_err(|_| {
                ZoneError::settings_unavailable(format!(
                    "settings fetch timed out after {}ms",
                    limit.as_millis()
                ))
            })?,
            None => fetch.await,
        };

        let settings = result.map_err(|e| ZoneError::settings_unavailable(e.to_string()))?;
        info!("User settings fetched ({} zone types)", settings.zones.len());
        Ok(settings)
    }

    fn handle_route(&self, user_zones: &UserZones, params: RouteParams) {
        let RouteParams { zone_value } = params;
        self.view_tx.send_modify(|view| {
            view.phase = ControllerPhase::Resolving;
            view.requested = Some(zone_value.clone());
        });

        let resolved = resolve(&zone_value, user_zones, self.catalog.list())
            .and_then(|definition| Selection::load(zone_value.clone(), definition, user_zones));

        match resolved {
            Ok(selection) => self.apply(selection),
            Err(reason) => self.redirect(&zone_value, &reason),
        }
    }

    fn apply(&self, selection: Selection) {
        let Selection {
            requested,
            definition,
            zones,
        } = selection;
        ZoneLogger::log_selection_loaded(&self.id.to_string(), definition.value, zones.len());

        self.state.set_selection(zones.clone(), definition);
        self.view_tx.send_modify(|view| {
            view.phase = ControllerPhase::Loaded;
            view.requested = Some(requested);
            view.current_zones = Some(zones);
            view.zone_definition_selected = Some(definition);
        });
    }

    fn redirect(&self, requested: &str, reason: &UnknownSelection) {
        // `new` and `run` established that the default is non-blank, catalogued
        // and configured, so it always resolves and a redirect cannot repeat
        debug_assert_ne!(
            requested, self.default_zone_value,
            "default zone failed to resolve"
        );

        ZoneLogger::log_redirect(
            &self.id.to_string(),
            requested,
            &self.default_zone_value,
            &reason.to_string(),
        );
        self.view_tx.send_modify(|view| {
            view.phase = ControllerPhase::Redirecting;
            view.redirects += 1;
        });

        if let Err(error) = self.navigator.navigate(&self.default_zone_value) {
            warn!(
                "Redirect to '{}' could not be issued: {}",
                self.default_zone_value, error
            );
        }
    }

    /// Mirror an external zones update. Returns `false` once the stream closed.
    fn on_zones_update(&self, update: Result<Vec<Zone>, RecvError>) -> bool {
        match update {
            Ok(zones) => {
                ZoneLogger::log_external_update(&self.id.to_string(), zones.len());
                self.view_tx
                    .send_modify(|view| view.current_zones = Some(zones));
                true
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Zones updates lagged, {} updates skipped", skipped);
                true
            }
            Err(RecvError::Closed) => {
                debug!("Zones updates stream closed");
                false
            }
        }
    }

    fn set_phase(&self, phase: ControllerPhase) {
        self.view_tx.send_modify(|view| view.phase = phase);
    }

    fn fail(&self, error: ZoneError) -> AppError {
        let reason = error.to_string();
        ZoneLogger::log_failure(&self.id.to_string(), &reason);
        self.set_phase(ControllerPhase::Failed(reason));
        error.into()
    }

    fn stop(&self) {
        self.set_phase(ControllerPhase::Stopped);
        info!("Zone selection controller stopped");
    }
}

/// Handle to a running controller: read surface, zone selection and teardown.
///
/// Dropping the handle tears the controller down.
pub struct ControllerHandle {
    id: Uuid,
    view_rx: watch::Receiver<ControllerView>,
    navigator: Arc<dyn Navigator>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<AppResult<()>>,
}

impl ControllerHandle {
    /// Controller identifier used in log records
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Latest view snapshot
    #[must_use]
    pub fn view(&self) -> ControllerView {
        self.view_rx.borrow().clone()
    }

    /// Current lifecycle phase
    #[must_use]
    pub fn phase(&self) -> ControllerPhase {
        self.view_rx.borrow().phase.clone()
    }

    /// Zones currently shown
    #[must_use]
    pub fn current_zones(&self) -> Option<Vec<Zone>> {
        self.view_rx.borrow().current_zones.clone()
    }

    /// Definition of the active selection
    #[must_use]
    pub fn zone_definition_selected(&self) -> Option<&'static ZoneDefinition> {
        self.view_rx.borrow().zone_definition_selected
    }

    /// Full catalog
    #[must_use]
    pub fn zone_definitions(&self) -> &'static [ZoneDefinition] {
        self.view_rx.borrow().zone_definitions
    }

    /// Observe view changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ControllerView> {
        self.view_rx.clone()
    }

    /// Request the zones of `definition`; equivalent to navigating to its identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the navigation request cannot be issued
    pub fn select_zone(&self, definition: &ZoneDefinition) -> AppResult<()> {
        self.navigator.navigate(definition.value)
    }

    /// Wait until the view satisfies `predicate`
    ///
    /// # Errors
    ///
    /// Returns an error if the controller ends before the predicate holds
    pub async fn wait_for(
        &mut self,
        predicate: impl FnMut(&ControllerView) -> bool,
    ) -> AppResult<ControllerView> {
        self.view_rx
            .wait_for(predicate)
            .await
            .map(|view| view.clone())
            .map_err(|_| ZoneError::ControllerStopped.into())
    }

    /// Stop the controller and wait for its task to finish
    ///
    /// # Errors
    ///
    /// Returns the controller's terminal error, if it had already failed
    pub async fn shutdown(mut self) -> AppResult<()> {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            // The task may already be gone; either way it is finished
            let _ = shutdown_tx.send(());
        }
        self.join().await
    }

    /// Wait for the controller to finish on its own
    ///
    /// # Errors
    ///
    /// Returns the controller's terminal error or a task join failure
    pub async fn join(self) -> AppResult<()> {
        self.task
            .await
            .map_err(|e| AppError::internal(format!("Zone selection task failed: {e}")))?
    }
}
