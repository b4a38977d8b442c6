// ABOUTME: Serializable pace report tree grouped by unit system and training category
// ABOUTME: Category structs are generic over the leaf so ratio tables share the same shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Goal Paces Contributors

use serde::{Deserialize, Serialize};

// Leaves default to `MM:SS` strings. The pace engine instantiates the same
// category structs with `f64` for its ratio tables and maps them to strings.

/// Full set of paces derived from one marathon finish time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaceReport {
    /// Marathon pace per 100 meters
    pub hundred_pace: String,
    /// Paces per kilometer
    pub kilometer_paces: UnitPaces,
    /// Paces per mile
    pub mile_paces: UnitPaces,
}

/// Paces for one unit system (kilometer or mile)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPaces<T = String> {
    /// Goal marathon race pace
    pub marathon_pace: T,
    /// Easy paces slower than marathon pace
    pub fundamental: FundamentalPaces<T>,
    /// Race-distance paces
    pub special: SpecialPaces<T>,
    /// Marathon-specific workout paces
    pub specific: SpecificPaces<T>,
}

/// Fundamental training paces, a fixed percentage slower than marathon pace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundamentalPaces<T = String> {
    /// 10% slower than marathon pace
    pub ten_percent: T,
    /// 20% slower than marathon pace
    pub twenty_percent: T,
}

/// Special paces tied to race distances
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct SpecialPaces<T = String> {
    pub one_k: T,
    pub two_k: T,
    pub three_k: T,
    pub five_k: T,
    pub twenty_k: T,
    pub forty_five_k: T,
}

/// Specific workout paces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecificPaces<T = String> {
    /// Interval repetitions
    pub intervals: IntervalPaces<T>,
    /// Continuous efforts
    pub continuous: ContinuousPaces<T>,
}

/// Interval workout paces keyed by repetition distance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct IntervalPaces<T = String> {
    pub one_k: T,
    pub two_k: T,
    pub four_k: T,
    pub five_k: T,
    pub six_k: T,
    pub seven_k: T,
    pub thirty_five_k: T,
}

/// Continuous workout paces keyed by run distance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct ContinuousPaces<T = String> {
    pub twenty_five_k: T,
    pub thirty_k: T,
    pub thirty_five_k: T,
    pub forty_k: T,
}

/// Average pace per mile for a single race
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RacePace {
    /// Pace per mile as `MM:SS`
    pub mile_pace: String,
}

impl<T> FundamentalPaces<T> {
    /// Transform every leaf, keeping the category shape
    pub fn map<U, F: Fn(&T) -> U>(&self, f: &F) -> FundamentalPaces<U> {
        FundamentalPaces {
            ten_percent: f(&self.ten_percent),
            twenty_percent: f(&self.twenty_percent),
        }
    }
}

impl<T> SpecialPaces<T> {
    /// Transform every leaf, keeping the category shape
    pub fn map<U, F: Fn(&T) -> U>(&self, f: &F) -> SpecialPaces<U> {
        SpecialPaces {
            one_k: f(&self.one_k),
            two_k: f(&self.two_k),
            three_k: f(&self.three_k),
            five_k: f(&self.five_k),
            twenty_k: f(&self.twenty_k),
            forty_five_k: f(&self.forty_five_k),
        }
    }
}

impl<T> SpecificPaces<T> {
    /// Transform every leaf, keeping the category shape
    pub fn map<U, F: Fn(&T) -> U>(&self, f: &F) -> SpecificPaces<U> {
        SpecificPaces {
            intervals: self.intervals.map(f),
            continuous: self.continuous.map(f),
        }
    }
}

impl<T> IntervalPaces<T> {
    /// Transform every leaf, keeping the category shape
    pub fn map<U, F: Fn(&T) -> U>(&self, f: &F) -> IntervalPaces<U> {
        IntervalPaces {
            one_k: f(&self.one_k),
            two_k: f(&self.two_k),
            four_k: f(&self.four_k),
            five_k: f(&self.five_k),
            six_k: f(&self.six_k),
            seven_k: f(&self.seven_k),
            thirty_five_k: f(&self.thirty_five_k),
        }
    }
}

impl<T> ContinuousPaces<T> {
    /// Transform every leaf, keeping the category shape
    pub fn map<U, F: Fn(&T) -> U>(&self, f: &F) -> ContinuousPaces<U> {
        ContinuousPaces {
            twenty_five_k: f(&self.twenty_five_k),
            thirty_k: f(&self.thirty_k),
            thirty_five_k: f(&self.thirty_five_k),
            forty_k: f(&self.forty_k),
        }
    }
}
