// ABOUTME: Zone threshold and zone type definition models
// ABOUTME: Typed identifier-to-zones mapping that fails closed on unknown keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single threshold range of a zone set.
///
/// The zone's rank is its position in the owning sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Lower bound, in the units of the owning zone definition
    pub from: f64,
    /// Upper bound, in the units of the owning zone definition
    pub to: f64,
}

impl Zone {
    /// Create a zone spanning `from..to`
    #[must_use]
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }
}

/// Alternative display of a zone type's values, e.g. pace as `mm:ss`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomDisplay {
    /// Label of the alternative display
    pub name: &'static str,
    /// Units shown by the alternative display
    pub output_units: &'static str,
}

/// Catalog metadata describing one zone type.
///
/// Definitions are static data; the rest of the system holds
/// `&'static ZoneDefinition` references rather than copies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDefinition {
    /// Display name
    pub name: &'static str,
    /// Selector key, unique within a catalog
    pub value: &'static str,
    /// Units of the zone bounds
    pub units: &'static str,
    /// Editing step for bounds
    pub step: f64,
    /// Smallest allowed bound
    pub min: f64,
    /// Largest allowed bound
    pub max: f64,
    /// Optional alternative display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_display: Option<CustomDisplay>,
}

/// The user's zone sets keyed by zone type identifier.
///
/// Lookups of unknown identifiers return `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserZones(BTreeMap<String, Vec<Zone>>);

impl UserZones {
    /// Empty zone settings
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert
    #[must_use]
    pub fn with_zones(mut self, zone_value: impl Into<String>, zones: Vec<Zone>) -> Self {
        self.insert(zone_value, zones);
        self
    }

    /// Insert or replace the zones of a zone type
    pub fn insert(&mut self, zone_value: impl Into<String>, zones: Vec<Zone>) -> Option<Vec<Zone>> {
        self.0.insert(zone_value.into(), zones)
    }

    /// Zones configured for a zone type
    #[must_use]
    pub fn get(&self, zone_value: &str) -> Option<&[Zone]> {
        self.0.get(zone_value).map(Vec::as_slice)
    }

    /// Whether the zone type has an entry
    #[must_use]
    pub fn contains(&self, zone_value: &str) -> bool {
        self.0.contains_key(zone_value)
    }

    /// Number of configured zone types
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no zone type is configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_fails_closed() {
        let zones = UserZones::new().with_zones("speed", vec![Zone::new(0.0, 10.0)]);
        assert_eq!(zones.get("speed"), Some(&[Zone::new(0.0, 10.0)][..]));
        assert!(zones.get("power").is_none());
        assert!(zones.get("").is_none());
    }

    #[test]
    fn test_user_zones_json_shape() {
        let json = r#"{"heartRate":[{"from":0,"to":120},{"from":120,"to":150}]}"#;
        let zones: UserZones = serde_json::from_str(json).unwrap();
        assert_eq!(zones.len(), 1);
        assert_eq!(zones.get("heartRate").map(<[Zone]>::len), Some(2));
        assert!(zones.contains("heartRate"));
    }
}
