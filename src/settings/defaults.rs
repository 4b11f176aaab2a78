// ABOUTME: Built-in default zone sets for every catalogued zone type
// ABOUTME: Seeds new users and backs the "reset zones to default" action
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_zones_core::constants::zone_values;
use pierre_zones_core::models::{UserZones, Zone};

/// Consecutive zones between successive bounds: `[a, b, c]` gives `a..b, b..c`
fn contiguous(bounds: &[f64]) -> Vec<Zone> {
    bounds
        .windows(2)
        .map(|pair| Zone::new(pair[0], pair[1]))
        .collect()
}

/// Default zones for every zone type in the built-in catalog
#[must_use]
pub fn default_user_zones() -> UserZones {
    UserZones::new()
        .with_zones(
            zone_values::SPEED,
            contiguous(&[
                0.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 60.0, 80.0,
            ]),
        )
        .with_zones(
            zone_values::PACE,
            contiguous(&[
                0.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0, 360.0, 420.0, 540.0, 900.0,
            ]),
        )
        .with_zones(
            zone_values::GRADE_ADJUSTED_PACE,
            contiguous(&[
                0.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0, 360.0, 420.0, 540.0, 900.0,
            ]),
        )
        .with_zones(
            zone_values::HEART_RATE,
            contiguous(&[
                30.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 110.0, 120.0, 130.0, 140.0, 150.0,
                160.0, 170.0, 180.0, 190.0, 200.0, 220.0,
            ]),
        )
        .with_zones(
            zone_values::POWER,
            contiguous(&[
                0.0, 50.0, 100.0, 150.0, 200.0, 250.0, 300.0, 350.0, 400.0, 500.0, 700.0, 1000.0,
            ]),
        )
        .with_zones(
            zone_values::RUNNING_POWER,
            contiguous(&[
                0.0, 50.0, 100.0, 150.0, 200.0, 250.0, 300.0, 350.0, 400.0, 500.0, 700.0, 1000.0,
            ]),
        )
        .with_zones(
            zone_values::CYCLING_CADENCE,
            contiguous(&[
                0.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 110.0, 120.0, 150.0,
            ]),
        )
        .with_zones(
            zone_values::RUNNING_CADENCE,
            contiguous(&[
                0.0, 60.0, 70.0, 75.0, 80.0, 85.0, 90.0, 95.0, 100.0, 110.0, 125.0,
            ]),
        )
        .with_zones(
            zone_values::GRADE,
            contiguous(&[
                -20.0, -10.0, -5.0, -2.0, -1.0, 0.0, 1.0, 2.0, 5.0, 10.0, 20.0,
            ]),
        )
        .with_zones(
            zone_values::ELEVATION,
            contiguous(&[
                0.0, 100.0, 200.0, 300.0, 500.0, 750.0, 1000.0, 1500.0, 2000.0, 3000.0, 5000.0,
            ]),
        )
        .with_zones(
            zone_values::ASCENT,
            contiguous(&[
                0.0, 100.0, 200.0, 300.0, 400.0, 500.0, 600.0, 800.0, 1000.0, 1500.0, 2000.0,
            ]),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::ZoneCatalog;

    #[test]
    fn test_defaults_cover_catalog() {
        let defaults = default_user_zones();
        for definition in ZoneCatalog::builtin().list() {
            let zones = defaults.get(definition.value);
            assert!(
                zones.is_some_and(|z| !z.is_empty()),
                "missing defaults for {}",
                definition.value
            );
        }
    }

    #[test]
    fn test_contiguous_zones_share_bounds() {
        let zones = contiguous(&[0.0, 1.0, 3.0]);
        assert_eq!(zones, vec![Zone::new(0.0, 1.0), Zone::new(1.0, 3.0)]);
        assert!(contiguous(&[5.0]).is_empty());
    }
}
