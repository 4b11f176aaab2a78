// ABOUTME: Zone-specific error types for selection resolution and synchronization
// ABOUTME: Provides structured errors that integrate with the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

use super::{AppError, ErrorCode};

/// Why a requested zone identifier could not be resolved.
///
/// Resolution failures are recovered by redirecting to the default zone, so
/// this type is only ever logged, never handed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnknownSelection {
    /// The requested identifier was empty or whitespace
    #[error("no zone identifier requested")]
    Blank,
    /// The user's settings have no zones for this identifier
    #[error("zone '{0}' is not present in the user zone settings")]
    NotConfigured(String),
    /// The user has zones for this identifier but the catalog has no definition
    #[error("zone '{0}' has no catalog definition")]
    NotInCatalog(String),
}

/// Errors raised by zone selection and synchronization
#[non_exhaustive]
#[derive(Debug, Clone, Error)]
pub enum ZoneError {
    /// Requested identifier could not be resolved
    #[error("unknown zone selection: {0}")]
    UnknownSelection(#[from] UnknownSelection),

    /// Settings fetch failed or did not settle in time
    #[error("user settings unavailable: {reason}")]
    SettingsUnavailable {
        /// What went wrong while fetching
        reason: String,
    },

    /// The default zone identifier is missing from the catalog or the user settings
    #[error("default zone '{zone_value}' is missing from the {location}")]
    CatalogMisconfiguration {
        /// The default identifier that failed to resolve
        zone_value: String,
        /// Where it was expected ("zone catalog" or "user zone settings")
        location: &'static str,
    },

    /// No zone definition is selected yet
    #[error("no zone definition is currently selected")]
    NoActiveSelection,

    /// The controller task is no longer running
    #[error("zone selection controller has stopped")]
    ControllerStopped,
}

impl ZoneError {
    /// Create a "settings unavailable" error
    #[must_use]
    pub fn settings_unavailable(reason: impl Into<String>) -> Self {
        Self::SettingsUnavailable {
            reason: reason.into(),
        }
    }

    /// Create a "catalog misconfiguration" error
    #[must_use]
    pub fn catalog_misconfiguration(zone_value: impl Into<String>, location: &'static str) -> Self {
        Self::CatalogMisconfiguration {
            zone_value: zone_value.into(),
            location,
        }
    }

    /// Standard error code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownSelection(_) => ErrorCode::ResourceNotFound,
            Self::SettingsUnavailable { .. } => ErrorCode::ExternalServiceUnavailable,
            Self::CatalogMisconfiguration { .. } => ErrorCode::ConfigInvalid,
            Self::NoActiveSelection => ErrorCode::ResourceUnavailable,
            Self::ControllerStopped => ErrorCode::InternalError,
        }
    }
}

impl From<ZoneError> for AppError {
    fn from(error: ZoneError) -> Self {
        Self::new(error.code(), error.to_string()).with_source(error)
    }
}
