// ABOUTME: Error handling re-exports for the Goal Paces server crate
// ABOUTME: Exposes the core error taxonomy so binaries and tests import from one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Goal Paces Contributors

//! # Unified Error Handling System
//!
//! The error types live in `goal-paces-core`; with the `http-response`
//! feature enabled there, [`AppError`] renders directly as an axum response.

pub use goal_paces_core::errors::{
    AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails,
};
