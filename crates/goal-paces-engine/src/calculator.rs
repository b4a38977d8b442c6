// ABOUTME: Stateless pace calculator turning finish times into formatted pace tables
// ABOUTME: Computes base 100 m / km / mile paces and applies the per-unit ratio tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Goal Paces Contributors

use crate::ratios::PaceUnit;
use goal_paces_core::constants::clock::SECONDS_PER_HOUR;
use goal_paces_core::constants::conversions::{HUNDRED_TO_KILOMETER, HUNDRED_TO_MARATHON_MILE};
use goal_paces_core::constants::distances::HUNDRED_METER_SEGMENTS;
use goal_paces_core::errors::{AppError, AppResult};
use goal_paces_core::models::{seconds_to_clock, PaceReport, RacePace, UnitPaces};
use tracing::debug;

// Largest pace whose hour count still fits a `ClockTime`
const MAX_REPRESENTABLE_SECONDS: f64 = 4_294_967_295.0 * SECONDS_PER_HOUR;

/// Unformatted base paces in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasePaces {
    /// Seconds per 100 meters
    pub hundred: f64,
    /// Seconds per kilometer
    pub kilometer: f64,
    /// Seconds per mile at marathon pace
    pub mile_marathon: f64,
}

impl BasePaces {
    /// Derive base paces from a marathon finish time in seconds
    #[must_use]
    pub fn from_finish_time(finish_time_seconds: f64) -> Self {
        let hundred = finish_time_seconds / HUNDRED_METER_SEGMENTS;
        Self {
            hundred,
            kilometer: hundred * HUNDRED_TO_KILOMETER,
            mile_marathon: hundred * HUNDRED_TO_MARATHON_MILE,
        }
    }
}

/// Marathon pace calculator.
///
/// Holds no state; one value is created per process and shared by handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaceCalculator;

impl PaceCalculator {
    /// Create a calculator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Compute every training and racing pace for a marathon finish time.
    ///
    /// The input is not validated; negative values produce `00:00` paces.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn compute_report(self, finish_time_seconds: f64) -> PaceReport {
        let base = BasePaces::from_finish_time(finish_time_seconds);

        debug!(
            finish_time_seconds,
            hundred_pace_seconds = base.hundred,
            kilometer_pace_seconds = base.kilometer,
            "Computing pace report"
        );

        PaceReport {
            hundred_pace: format_pace(base.hundred),
            kilometer_paces: Self::unit_paces(PaceUnit::Kilometer, base.kilometer, base.kilometer),
            mile_paces: Self::unit_paces(PaceUnit::Mile, base.mile_marathon, base.kilometer),
        }
    }

    /// Compute the average per-mile pace for a race.
    ///
    /// # Errors
    ///
    /// Returns a `ValueOutOfRange` error if `distance_miles` is zero,
    /// negative, or not finite, or if the resulting pace overflows a clock.
    #[allow(clippy::unused_self)]
    pub fn compute_single_race_pace(
        self,
        distance_miles: f64,
        duration_seconds: f64,
    ) -> AppResult<RacePace> {
        if !distance_miles.is_finite() || distance_miles <= 0.0 {
            return Err(AppError::out_of_range(format!(
                "Distance must be a positive number of miles, got {distance_miles}"
            ))
            .with_details(serde_json::json!({ "distance": distance_miles })));
        }

        let mile_pace_seconds = duration_seconds / distance_miles;
        if !mile_pace_seconds.is_finite() || mile_pace_seconds > MAX_REPRESENTABLE_SECONDS {
            return Err(AppError::out_of_range(format!(
                "Distance {distance_miles} miles is too short to express a pace"
            ))
            .with_details(serde_json::json!({ "distance": distance_miles })));
        }

        debug!(
            distance_miles,
            duration_seconds, mile_pace_seconds, "Computing race pace"
        );

        Ok(RacePace {
            mile_pace: format_pace(mile_pace_seconds),
        })
    }

    fn unit_paces(unit: PaceUnit, marathon_seconds: f64, kilometer_seconds: f64) -> UnitPaces {
        let ratios = unit.ratios();
        let pace = |ratio: &f64| format_pace(unit.multiplier(*ratio) * kilometer_seconds);

        UnitPaces {
            marathon_pace: format_pace(marathon_seconds),
            fundamental: ratios.fundamental.map(&pace),
            special: ratios.special.map(&pace),
            specific: ratios.specific.map(&pace),
        }
    }
}

fn format_pace(seconds: f64) -> String {
    seconds_to_clock(seconds).to_pace_string()
}
