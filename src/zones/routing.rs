// ABOUTME: Zone route parameters, the navigation sink trait and the in-process router
// ABOUTME: Navigation requests become route events delivered through an ordered queue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_zones_core::constants::routes;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::debug;

use crate::errors::{AppError, AppResult, ZoneError};

/// Parameters of a zones settings route, `/zonesSettings/<zoneValue>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteParams {
    /// Requested zone type identifier, possibly empty
    pub zone_value: String,
}

impl RouteParams {
    /// Route params requesting `zone_value`
    #[must_use]
    pub fn new(zone_value: impl Into<String>) -> Self {
        Self {
            zone_value: zone_value.into(),
        }
    }

    /// Parse a route path such as `/zonesSettings/heartRate`.
    ///
    /// A path naming only the zones settings route yields an empty
    /// `zone_value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a zones settings route
    pub fn from_path(path: &str) -> AppResult<Self> {
        let mut segments = path.trim_matches('/').splitn(2, '/');
        match segments.next() {
            Some(routes::ZONES_SETTINGS) => {
                let zone_value = segments.next().unwrap_or_default().trim_end_matches('/');
                Ok(Self::new(zone_value))
            }
            _ => Err(AppError::invalid_input(format!(
                "'{path}' is not a {} route",
                routes::ZONES_SETTINGS
            ))),
        }
    }

    /// Route path addressing these params
    #[must_use]
    pub fn path(&self) -> String {
        zone_route_path(&self.zone_value)
    }
}

/// Route path addressing the zones of `zone_value`
#[must_use]
pub fn zone_route_path(zone_value: &str) -> String {
    format!("/{}/{zone_value}", routes::ZONES_SETTINGS)
}

/// Navigation sink.
///
/// Requests are fire-and-forget: the resulting route event is delivered
/// asynchronously on the route stream.
pub trait Navigator: Send + Sync {
    /// Request navigation to the zones of `zone_value`
    ///
    /// # Errors
    ///
    /// Returns an error if nothing listens to route events any more
    fn navigate(&self, zone_value: &str) -> AppResult<()>;
}

/// Ordered stream of route events consumed by the selection controller
#[derive(Debug)]
pub struct RouteStream {
    rx: mpsc::UnboundedReceiver<RouteParams>,
}

impl RouteStream {
    /// Next route event; `None` once every router is dropped
    pub async fn recv(&mut self) -> Option<RouteParams> {
        self.rx.recv().await
    }

    /// Discard queued events except the most recent one.
    ///
    /// Returns `None` when nothing is queued.
    pub fn take_latest(&mut self) -> Option<RouteParams> {
        let mut latest = None;
        while let Ok(params) = self.rx.try_recv() {
            latest = Some(params);
        }
        latest
    }
}

/// In-process router for zones settings routes
#[derive(Debug, Clone)]
pub struct ZoneRouter {
    tx: mpsc::UnboundedSender<RouteParams>,
}

impl ZoneRouter {
    /// Create a router positioned on `initial`.
    ///
    /// The initial params are queued right away, the way an active route
    /// emits its current params to a new subscriber.
    #[must_use]
    pub fn new(initial: RouteParams) -> (Self, RouteStream) {
        let (tx, rx) = mpsc::unbounded_channel();
        // Receiver is alive, so the first send cannot fail
        let _ = tx.send(initial);
        (Self { tx }, RouteStream { rx })
    }

    /// Push route params as if the location changed
    ///
    /// # Errors
    ///
    /// Returns an error if the route stream was dropped
    pub fn push(&self, params: RouteParams) -> AppResult<()> {
        debug!("Routing to {}", params.path());
        self.tx
            .send(params)
            .map_err(|_| ZoneError::ControllerStopped.into())
    }
}

impl Navigator for ZoneRouter {
    fn navigate(&self, zone_value: &str) -> AppResult<()> {
        self.push(RouteParams::new(zone_value))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_path_round_trip() {
        let params = RouteParams::from_path("/zonesSettings/heartRate").unwrap();
        assert_eq!(params.zone_value, "heartRate");
        assert_eq!(params.path(), "/zonesSettings/heartRate");
    }

    #[test]
    fn test_bare_route_has_empty_zone_value() {
        assert_eq!(
            RouteParams::from_path("/zonesSettings").unwrap(),
            RouteParams::default()
        );
        assert_eq!(
            RouteParams::from_path("zonesSettings/").unwrap(),
            RouteParams::default()
        );
    }

    #[test]
    fn test_foreign_route_rejected() {
        assert!(RouteParams::from_path("/athleteSettings/speed").is_err());
        assert!(RouteParams::from_path("").is_err());
    }

    #[test]
    fn test_take_latest_keeps_last_event() {
        let (router, mut stream) = ZoneRouter::new(RouteParams::new("power"));
        router.navigate("pace").unwrap();
        router.navigate("heartRate").unwrap();

        assert_eq!(stream.take_latest(), Some(RouteParams::new("heartRate")));
        assert_eq!(stream.take_latest(), None);
    }

    #[test]
    fn test_navigate_after_stream_dropped_fails() {
        let (router, stream) = ZoneRouter::new(RouteParams::default());
        drop(stream);
        assert!(router.navigate("speed").is_err());
    }
}
