// ABOUTME: Core types and constants for the Goal Paces marathon pace service
// ABOUTME: Foundation crate with error handling, clock parsing, pace models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Goal Paces Contributors

#![deny(unsafe_code)]

//! # Goal Paces Core
//!
//! Foundation crate providing shared types and constants for the Goal Paces
//! service. Both the pace engine and the HTTP adapter depend on it; it has no
//! knowledge of either.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorResponse`
//! - **constants**: Distances, unit conversions, and service-wide defaults
//! - **models**: Clock-time parsing/formatting and the pace report data model

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`ClockTime`, `PaceReport`, `RacePace`)
pub mod models;
