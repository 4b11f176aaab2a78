// ABOUTME: Integration tests for zone identifier resolution against the built-in catalog
// ABOUTME: Checks configured, unconfigured, blank and uncatalogued identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::ptr;

use common::{sample_zones, z1};
use pierre_zone_settings::{
    errors::UnknownSelection,
    models::UserZones,
    settings::default_user_zones,
    zones::{resolve, ZoneCatalog, ZONE_DEFINITIONS},
};

#[test]
fn test_every_catalog_entry_resolves_with_default_zones() {
    let zones = default_user_zones();
    for definition in &ZONE_DEFINITIONS {
        let resolved = resolve(definition.value, &zones, &ZONE_DEFINITIONS).unwrap();
        assert_eq!(resolved, definition);
        assert!(
            zones.get(definition.value).is_some_and(|z| !z.is_empty()),
            "no default zones for {}",
            definition.value
        );
    }
}

#[test]
fn test_resolution_requires_user_zones() {
    let zones = sample_zones();
    let catalog = ZoneCatalog::builtin();

    for definition in catalog.list() {
        let result = resolve(definition.value, &zones, catalog.list());
        if zones.contains(definition.value) {
            assert_eq!(result.unwrap().value, definition.value);
        } else {
            assert_eq!(
                result,
                Err(UnknownSelection::NotConfigured(definition.value.to_owned()))
            );
        }
    }
}

#[test]
fn test_blank_identifiers_never_resolve() {
    let zones = sample_zones().with_zones("", vec![z1()]);
    for blank in ["", " ", "\t\n"] {
        assert_eq!(
            resolve(blank, &zones, &ZONE_DEFINITIONS),
            Err(UnknownSelection::Blank)
        );
    }
}

#[test]
fn test_uncatalogued_identifier_is_rejected() {
    let zones = UserZones::new().with_zones("swimPace", vec![z1()]);
    assert_eq!(
        resolve("swimPace", &zones, &ZONE_DEFINITIONS),
        Err(UnknownSelection::NotInCatalog("swimPace".to_owned()))
    );
}

#[test]
fn test_resolution_is_case_sensitive_and_repeatable() {
    let zones = sample_zones();
    assert!(resolve("HeartRate", &zones, &ZONE_DEFINITIONS).is_err());

    let first = resolve("heartRate", &zones, &ZONE_DEFINITIONS).unwrap();
    let second = resolve("heartRate", &zones, &ZONE_DEFINITIONS).unwrap();
    assert!(ptr::eq(first, second));
}
