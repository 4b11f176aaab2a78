// ABOUTME: Core types and constants for Pierre training zone settings
// ABOUTME: Foundation crate with error handling, zone models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Zones Core
//!
//! Foundation crate providing shared types and constants for training zone
//! selection. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ZoneError`
//! - **constants**: Zone identifiers, route segments and channel sizes
//! - **models**: `Zone`, `ZoneDefinition`, `UserZones`, `UserSettings`

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models for training zones
pub mod models;
