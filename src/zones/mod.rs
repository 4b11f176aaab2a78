// ABOUTME: Training zone selection, resolution and shared-state synchronization
// ABOUTME: Catalog, resolver, shared state, routing and the selection controller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Zone Selection
//!
//! A navigation event names a zone type. The [`SelectionController`] resolves
//! it against the [`ZoneCatalog`] and the user's zones, publishes the result
//! into [`ZoneSyncState`], and redirects to the default zone type when the
//! identifier is unknown. Zones replaced by other actors through
//! [`ZoneSyncState`] are mirrored back into the controller's view.

/// Static catalog of zone type definitions
pub mod catalog;
/// Selection controller state machine
pub mod controller;
/// Pure resolution of requested identifiers
pub mod resolver;
/// Route parameters, navigation sink and route stream
pub mod routing;
/// Shared zones state with publish/subscribe
pub mod state;

pub use catalog::{ZoneCatalog, ZONE_DEFINITIONS};
pub use controller::{ControllerHandle, ControllerPhase, ControllerView, SelectionController};
pub use resolver::resolve;
pub use routing::{Navigator, RouteParams, RouteStream, ZoneRouter};
pub use state::{SharedZones, UpdateOrigin, ZoneSyncState};
