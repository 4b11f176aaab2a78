// ABOUTME: Pure resolution of a requested zone identifier to a catalog definition
// ABOUTME: Requires the identifier to be present in the user's zone settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_zones_core::models::{UserZones, ZoneDefinition};

use crate::errors::UnknownSelection;

/// Resolve `requested` to the first catalog definition with that value.
///
/// The identifier must be a key of `config`: a definition without user zones
/// cannot produce a zone sequence. Blank identifiers never resolve.
///
/// # Errors
///
/// Returns the [`UnknownSelection`] reason when the identifier is blank, not
/// configured for the user, or not catalogued.
pub fn resolve<'c>(
    requested: &str,
    config: &UserZones,
    catalog: &'c [ZoneDefinition],
) -> Result<&'c ZoneDefinition, UnknownSelection> {
    if requested.trim().is_empty() {
        return Err(UnknownSelection::Blank);
    }

    if !config.contains(requested) {
        return Err(UnknownSelection::NotConfigured(requested.to_owned()));
    }

    catalog
        .iter()
        .find(|definition| definition.value == requested)
        .ok_or_else(|| UnknownSelection::NotInCatalog(requested.to_owned()))
}
