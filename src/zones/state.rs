// ABOUTME: Shared zones state holding the current zone list and zone definition
// ABOUTME: Publishes snapshots over watch and external zone replacements over broadcast
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_zones_core::models::{UserZones, Zone, ZoneDefinition};
use serde::Serialize;
use tokio::sync::{broadcast, watch};
use tracing::debug;

use crate::config::ZoneSettingsConfig;
use crate::errors::{AppError, AppResult, ZoneError};

/// Who performed the most recent write to the shared state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOrigin {
    /// Nothing has been written yet
    Initial,
    /// A successful selection pushed by the controller
    Selection,
    /// A reset, import or replacement by another actor
    External,
}

/// Snapshot of the shared zones state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharedZones {
    /// Current zone list
    pub zones: Option<Vec<Zone>>,
    /// Zone definition the list belongs to
    pub definition: Option<&'static ZoneDefinition>,
    /// Origin of the last write
    pub origin: UpdateOrigin,
    /// Incremented on every write
    pub revision: u64,
}

impl Default for SharedZones {
    fn default() -> Self {
        Self {
            zones: None,
            definition: None,
            origin: UpdateOrigin::Initial,
            revision: 0,
        }
    }
}

/// Session-wide zones state shared between the selection controller and
/// other actors (reset, import, rendering).
///
/// Every write replaces the snapshot as a whole; readers never observe a
/// partially applied update.
#[derive(Debug)]
pub struct ZoneSyncState {
    snapshot_tx: watch::Sender<SharedZones>,
    updates_tx: broadcast::Sender<Vec<Zone>>,
}

impl ZoneSyncState {
    /// Create state whose external updates channel buffers `updates_capacity` events
    #[must_use]
    pub fn new(updates_capacity: usize) -> Self {
        let (snapshot_tx, _) = watch::channel(SharedZones::default());
        let (updates_tx, _) = broadcast::channel(updates_capacity.max(1));
        Self {
            snapshot_tx,
            updates_tx,
        }
    }

    /// Create state sized from configuration
    #[must_use]
    pub fn from_config(config: &ZoneSettingsConfig) -> Self {
        Self::new(config.updates_channel_size)
    }

    /// Current snapshot
    #[must_use]
    pub fn snapshot(&self) -> SharedZones {
        self.snapshot_tx.borrow().clone()
    }

    /// Current zone list
    #[must_use]
    pub fn current_zones(&self) -> Option<Vec<Zone>> {
        self.snapshot_tx.borrow().zones.clone()
    }

    /// Current zone definition
    #[must_use]
    pub fn zone_definition(&self) -> Option<&'static ZoneDefinition> {
        self.snapshot_tx.borrow().definition
    }

    /// Observe every write, whatever its origin
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SharedZones> {
        self.snapshot_tx.subscribe()
    }

    /// Observe zone lists replaced by external actors
    #[must_use]
    pub fn zones_updates(&self) -> broadcast::Receiver<Vec<Zone>> {
        self.updates_tx.subscribe()
    }

    /// Number of live [`Self::zones_updates`] subscriptions
    #[must_use]
    pub fn zones_updates_subscribers(&self) -> usize {
        self.updates_tx.receiver_count()
    }

    /// Publish a successful selection.
    ///
    /// Does not emit on [`Self::zones_updates`]; that stream carries external
    /// replacements only.
    pub fn set_selection(&self, zones: Vec<Zone>, definition: &'static ZoneDefinition) {
        self.snapshot_tx.send_modify(|snapshot| {
            snapshot.zones = Some(zones);
            snapshot.definition = Some(definition);
            snapshot.origin = UpdateOrigin::Selection;
            snapshot.revision += 1;
        });
        debug!("Shared zones set from selection '{}'", definition.value);
    }

    /// Replace the current zone list on behalf of an external actor and
    /// notify [`Self::zones_updates`] subscribers. The definition is kept.
    ///
    /// Returns the number of subscribers notified.
    pub fn replace_zones(&self, zones: Vec<Zone>) -> usize {
        let zone_count = zones.len();
        self.snapshot_tx.send_modify(|snapshot| {
            snapshot.zones = Some(zones.clone());
            snapshot.origin = UpdateOrigin::External;
            snapshot.revision += 1;
        });

        match self.updates_tx.send(zones) {
            Ok(receivers) => {
                debug!("Zones update ({} zones) sent to {} subscribers", zone_count, receivers);
                receivers
            }
            Err(_) => {
                debug!("Zones update ({} zones) had no subscribers", zone_count);
                0
            }
        }
    }

    /// Reset the zones of the selected definition to `defaults`.
    ///
    /// # Errors
    ///
    /// Returns an error if no definition is selected or `defaults` has no
    /// zones for it.
    pub fn reset_to_default(&self, defaults: &UserZones) -> AppResult<Vec<Zone>> {
        let definition = self
            .zone_definition()
            .ok_or(ZoneError::NoActiveSelection)?;

        let zones = defaults
            .get(definition.value)
            .ok_or_else(|| AppError::not_found(format!("Default zones for '{}'", definition.value)))?
            .to_vec();

        self.replace_zones(zones.clone());
        Ok(zones)
    }
}

impl Default for ZoneSyncState {
    fn default() -> Self {
        Self::from_config(&ZoneSettingsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::catalog::ZONE_DEFINITIONS;

    #[test]
    fn test_initial_snapshot_is_empty() {
        let state = ZoneSyncState::default();
        let snapshot = state.snapshot();
        assert!(snapshot.zones.is_none());
        assert!(snapshot.definition.is_none());
        assert_eq!(snapshot.origin, UpdateOrigin::Initial);
        assert_eq!(snapshot.revision, 0);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let state = ZoneSyncState::new(0);
        let _rx = state.zones_updates();
        assert_eq!(state.replace_zones(vec![Zone::new(1.0, 2.0)]), 1);
    }

    #[test]
    fn test_replace_without_subscribers_still_updates_snapshot() {
        let state = ZoneSyncState::default();
        state.set_selection(vec![Zone::new(0.0, 1.0)], &ZONE_DEFINITIONS[0]);
        assert_eq!(state.replace_zones(vec![Zone::new(5.0, 6.0)]), 0);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.zones, Some(vec![Zone::new(5.0, 6.0)]));
        assert_eq!(snapshot.definition.map(|d| d.value), Some("speed"));
        assert_eq!(snapshot.revision, 2);
    }
}
