// ABOUTME: Application constants organized by domain
// ABOUTME: Race distances, unit conversion factors, clock limits, and service defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Goal Paces Contributors

//! Constants shared between the pace engine and the HTTP adapter.

/// Distance constants in meters
pub mod distances {
    /// Marathon distance in meters
    pub const MARATHON_METERS: f64 = 42_195.0;

    /// Length of the shortest pace segment in meters
    pub const HUNDRED_METERS: f64 = 100.0;

    /// Number of 100 m segments in a marathon
    pub const HUNDRED_METER_SEGMENTS: f64 = MARATHON_METERS / HUNDRED_METERS;
}

/// Unit conversion factors applied to base paces
pub mod conversions {
    /// 100 m segments per kilometer
    pub const HUNDRED_TO_KILOMETER: f64 = 10.0;

    /// Multiplier from 100 m pace to marathon pace per mile.
    ///
    /// Used for the mile marathon pace only. Every other mile figure goes
    /// through [`KILOMETERS_PER_MILE`], so the two do not agree exactly.
    pub const HUNDRED_TO_MARATHON_MILE: f64 = 16.09;

    /// Kilometers per mile, applied to kilometer paces to get mile paces
    pub const KILOMETERS_PER_MILE: f64 = 1.609;
}

/// Clock decomposition limits
pub mod clock {
    /// Seconds in one hour
    pub const SECONDS_PER_HOUR: f64 = 3600.0;

    /// Seconds in one minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;

    /// Largest accepted hours field in a clock string
    pub const MAX_HOURS: u32 = 23;

    /// Largest accepted minutes or seconds field in a clock string
    pub const MAX_MINUTES_OR_SECONDS: u32 = 59;
}

/// Service identification
pub mod service_names {
    /// Service name used in logs and health responses
    pub const GOAL_PACES: &str = "goal-paces";
}

/// Defaults for environment-driven configuration
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8081;

    /// Default bind address
    pub const HOST: &str = "127.0.0.1";

    /// Default per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Default CORS origin policy
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// HTTP header names
pub mod headers {
    /// Request correlation header
    pub const REQUEST_ID: &str = "x-request-id";
}
