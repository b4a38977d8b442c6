// ABOUTME: Route module organization for Goal Paces HTTP endpoints
// ABOUTME: Groups route definitions by domain with thin handlers over the pace engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Goal Paces Contributors

//! Route module for Goal Paces
//!
//! Each domain module contains route definitions and thin handler functions
//! that delegate to the pace engine.

/// Health check and system status routes
pub mod health;
/// Marathon pace report and race pace routes
pub mod paces;

/// Health check route handlers
pub use health::HealthRoutes;
/// Pace route handlers
pub use paces::PaceRoutes;
