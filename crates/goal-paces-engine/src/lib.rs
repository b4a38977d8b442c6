// ABOUTME: Pace calculation engine for marathon training and racing paces
// ABOUTME: Stateless calculator plus the fixed per-unit ratio tables it applies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Goal Paces Contributors

#![deny(unsafe_code)]

//! # Goal Paces Engine
//!
//! Converts a marathon finish time into a [`PaceReport`] and a race time into
//! a per-mile [`RacePace`]. Everything here is pure arithmetic over constant
//! tables; there is no I/O and no shared mutable state.
//!
//! [`PaceReport`]: goal_paces_core::models::PaceReport
//! [`RacePace`]: goal_paces_core::models::RacePace

/// Stateless pace calculator
pub mod calculator;

/// Fixed ratio tables per unit system
pub mod ratios;

pub use calculator::{BasePaces, PaceCalculator};
pub use ratios::{PaceUnit, RatioTable, KILOMETER_RATIOS, MILE_RATIOS};
