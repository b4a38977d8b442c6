// ABOUTME: Core data models for clock times and pace reports
// ABOUTME: Re-exports clock parsing/formatting and the serializable pace report tree
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Goal Paces Contributors

/// Clock-time decomposition, parsing, and `MM:SS` rendering
pub mod clock;

/// Pace report data model
pub mod pace;

pub use clock::{parse_clock, seconds_to_clock, ClockFormat, ClockTime};
pub use pace::{
    ContinuousPaces, FundamentalPaces, IntervalPaces, PaceReport, RacePace, SpecialPaces,
    SpecificPaces, UnitPaces,
};
