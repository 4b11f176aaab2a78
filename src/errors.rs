// ABOUTME: Error types re-exported from the core crate for the zone settings library
// ABOUTME: Keeps `crate::errors` as the single import path for AppError and ZoneError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Re-exports the error types defined in `pierre-zones-core`.

pub use pierre_zones_core::errors::{
    AppError, AppResult, ErrorCode, UnknownSelection, ZoneError,
};
