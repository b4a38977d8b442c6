// ABOUTME: Fixed multiplier tables applied to the kilometer marathon pace
// ABOUTME: One literal table per unit system; the mile table is not derived from the kilometer one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Goal Paces Contributors

//! Ratio tables for training paces.
//!
//! Each multiplier scales the kilometer marathon pace. Mile paces use their own
//! table and are additionally scaled by [`KILOMETERS_PER_MILE`]. The two tables
//! mostly agree, but the `one_k` and `thirty_five_k` interval ratios were tuned
//! separately and must stay as they are.

use goal_paces_core::constants::conversions::KILOMETERS_PER_MILE;
use goal_paces_core::models::{
    ContinuousPaces, FundamentalPaces, IntervalPaces, SpecialPaces, SpecificPaces,
};

/// Multipliers for every category in one unit system
#[derive(Debug, Clone, PartialEq)]
pub struct RatioTable {
    /// Fundamental (easy) pace multipliers
    pub fundamental: FundamentalPaces<f64>,
    /// Special (race distance) pace multipliers
    pub special: SpecialPaces<f64>,
    /// Specific (workout) pace multipliers
    pub specific: SpecificPaces<f64>,
}

/// Kilometer ratio table
pub static KILOMETER_RATIOS: RatioTable = RatioTable {
    fundamental: FundamentalPaces {
        ten_percent: 1.1,
        twenty_percent: 1.2,
    },
    special: SpecialPaces {
        one_k: 0.922,
        two_k: 0.95,
        three_k: 0.965,
        five_k: 0.975,
        twenty_k: 1.01,
        forty_five_k: 1.12,
    },
    specific: SpecificPaces {
        intervals: IntervalPaces {
            one_k: 1.12,
            two_k: 0.953,
            four_k: 0.98,
            five_k: 0.986,
            six_k: 0.989,
            seven_k: 1.008,
            thirty_five_k: 1.09,
        },
        continuous: ContinuousPaces {
            twenty_five_k: 0.980,
            thirty_k: 1.0,
            thirty_five_k: 1.031,
            forty_k: 1.087,
        },
    },
};

/// Mile ratio table, applied before the kilometers-per-mile scale
pub static MILE_RATIOS: RatioTable = RatioTable {
    fundamental: FundamentalPaces {
        ten_percent: 1.1,
        twenty_percent: 1.2,
    },
    special: SpecialPaces {
        one_k: 0.922,
        two_k: 0.95,
        three_k: 0.965,
        five_k: 0.975,
        twenty_k: 1.01,
        forty_five_k: 1.12,
    },
    specific: SpecificPaces {
        intervals: IntervalPaces {
            one_k: 1.117,
            two_k: 0.953,
            four_k: 0.98,
            five_k: 0.986,
            six_k: 0.989,
            seven_k: 1.008,
            thirty_five_k: 1.092_896,
        },
        continuous: ContinuousPaces {
            twenty_five_k: 0.980,
            thirty_k: 1.0,
            thirty_five_k: 1.031,
            forty_k: 1.087,
        },
    },
};

/// Unit system a pace is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaceUnit {
    /// Time per kilometer
    Kilometer,
    /// Time per mile
    Mile,
}

impl PaceUnit {
    /// Ratio table for this unit
    #[must_use]
    pub fn ratios(self) -> &'static RatioTable {
        match self {
            Self::Kilometer => &KILOMETER_RATIOS,
            Self::Mile => &MILE_RATIOS,
        }
    }

    /// Extra factor applied on top of each ratio
    #[must_use]
    pub const fn scale(self) -> f64 {
        match self {
            Self::Kilometer => 1.0,
            Self::Mile => KILOMETERS_PER_MILE,
        }
    }

    /// Combined multiplier for one ratio in this unit.
    ///
    /// Must be evaluated as `ratio * scale` before multiplying the base pace;
    /// reassociating changes which second some paces truncate to.
    #[must_use]
    pub fn multiplier(self, ratio: f64) -> f64 {
        ratio * self.scale()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_kilometer_multiplier_is_the_ratio() {
        assert_eq!(PaceUnit::Kilometer.multiplier(0.922), 0.922);
    }

    #[test]
    fn test_mile_tables_diverge_only_on_tuned_intervals() {
        let km = &KILOMETER_RATIOS;
        let mile = &MILE_RATIOS;

        assert_eq!(km.fundamental, mile.fundamental);
        assert_eq!(km.special, mile.special);
        assert_eq!(km.specific.continuous, mile.specific.continuous);

        assert_eq!(km.specific.intervals.one_k, 1.12);
        assert_eq!(mile.specific.intervals.one_k, 1.117);
        assert_eq!(km.specific.intervals.thirty_five_k, 1.09);
        assert_eq!(mile.specific.intervals.thirty_five_k, 1.092_896);
        assert_eq!(km.specific.intervals.two_k, mile.specific.intervals.two_k);
    }

    #[test]
    fn test_unit_lookup() {
        assert_eq!(PaceUnit::Mile.ratios(), &MILE_RATIOS);
        assert_eq!(PaceUnit::Mile.scale(), 1.609);
    }
}
