// ABOUTME: Static catalog of training zone type definitions
// ABOUTME: Stable ordered list of zone types with units, bounds and display hints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_zones_core::constants::zone_values;
use pierre_zones_core::models::{CustomDisplay, ZoneDefinition};

use crate::errors::{AppError, AppResult};

/// Every zone type the application knows about, in display order
pub static ZONE_DEFINITIONS: [ZoneDefinition; 11] = [
    ZoneDefinition {
        name: "Cycling Speed",
        value: zone_values::SPEED,
        units: "KPH",
        step: 0.1,
        min: 0.0,
        max: 9999.0,
        custom_display: None,
    },
    ZoneDefinition {
        name: "Running Pace",
        value: zone_values::PACE,
        units: "Seconds",
        step: 1.0,
        min: 0.0,
        max: 3599.0,
        custom_display: Some(CustomDisplay {
            name: "Switch mm:ss format",
            output_units: "mm:ss/km",
        }),
    },
    ZoneDefinition {
        name: "Grade Adjusted Running Pace",
        value: zone_values::GRADE_ADJUSTED_PACE,
        units: "Seconds",
        step: 1.0,
        min: 0.0,
        max: 3599.0,
        custom_display: Some(CustomDisplay {
            name: "Switch mm:ss format",
            output_units: "mm:ss/km",
        }),
    },
    ZoneDefinition {
        name: "Heart Rate",
        value: zone_values::HEART_RATE,
        units: "BPM",
        step: 1.0,
        min: 0.0,
        max: 9999.0,
        custom_display: None,
    },
    ZoneDefinition {
        name: "Cycling Power",
        value: zone_values::POWER,
        units: "Watts",
        step: 1.0,
        min: 0.0,
        max: 9999.0,
        custom_display: None,
    },
    ZoneDefinition {
        name: "Running Power",
        value: zone_values::RUNNING_POWER,
        units: "Watts",
        step: 1.0,
        min: 0.0,
        max: 9999.0,
        custom_display: None,
    },
    ZoneDefinition {
        name: "Cycling Cadence",
        value: zone_values::CYCLING_CADENCE,
        units: "RPM",
        step: 1.0,
        min: 0.0,
        max: 9999.0,
        custom_display: None,
    },
    ZoneDefinition {
        name: "Running Cadence",
        value: zone_values::RUNNING_CADENCE,
        units: "SPM",
        step: 0.1,
        min: 0.0,
        max: 9999.0,
        custom_display: None,
    },
    ZoneDefinition {
        name: "Grade",
        value: zone_values::GRADE,
        units: "%",
        step: 0.1,
        min: -9999.0,
        max: 9999.0,
        custom_display: None,
    },
    ZoneDefinition {
        name: "Elevation",
        value: zone_values::ELEVATION,
        units: "m",
        step: 5.0,
        min: 0.0,
        max: 9999.0,
        custom_display: None,
    },
    ZoneDefinition {
        name: "Ascent speed",
        value: zone_values::ASCENT,
        units: "Vertical Meters / hour",
        step: 5.0,
        min: 0.0,
        max: 9999.0,
        custom_display: None,
    },
];

/// Ordered, immutable list of zone definitions
#[derive(Debug, Clone, Copy)]
pub struct ZoneCatalog {
    definitions: &'static [ZoneDefinition],
}

impl ZoneCatalog {
    /// Catalog over a custom definition list
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `definitions` is empty
    pub fn new(definitions: &'static [ZoneDefinition]) -> AppResult<Self> {
        if definitions.is_empty() {
            return Err(AppError::config("Zone catalog must not be empty"));
        }
        Ok(Self { definitions })
    }

    /// Catalog over [`ZONE_DEFINITIONS`]
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            definitions: &ZONE_DEFINITIONS,
        }
    }

    /// All definitions in catalog order
    #[must_use]
    pub const fn list(&self) -> &'static [ZoneDefinition] {
        self.definitions
    }

    /// First definition whose value equals `zone_value`
    #[must_use]
    pub fn find(&self, zone_value: &str) -> Option<&'static ZoneDefinition> {
        self.definitions.iter().find(|d| d.value == zone_value)
    }
}

impl Default for ZoneCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_builtin_catalog_values_are_unique() {
        let catalog = ZoneCatalog::builtin();
        let values: HashSet<&str> = catalog.list().iter().map(|d| d.value).collect();
        assert_eq!(values.len(), catalog.list().len());
    }

    #[test]
    fn test_builtin_catalog_order_is_stable() {
        let catalog = ZoneCatalog::builtin();
        assert_eq!(catalog.list()[0].value, zone_values::SPEED);
        assert_eq!(catalog.list()[3].value, zone_values::HEART_RATE);
        assert_eq!(catalog.list().last().map(|d| d.value), Some(zone_values::ASCENT));
    }

    #[test]
    fn test_default_zone_is_catalogued() {
        assert!(ZoneCatalog::builtin()
            .find(zone_values::DEFAULT_ZONE_VALUE)
            .is_some());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        static EMPTY: [ZoneDefinition; 0] = [];
        assert!(ZoneCatalog::new(&EMPTY).is_err());
    }

    #[test]
    fn test_bounds_are_ordered() {
        for definition in ZoneCatalog::builtin().list() {
            assert!(definition.min < definition.max, "{}", definition.value);
            assert!(definition.step > 0.0, "{}", definition.value);
        }
    }
}
