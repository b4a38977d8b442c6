// ABOUTME: Clock-time model for finish times and paces
// ABOUTME: Parses H:MM:SS / MM:SS strings and truncates seconds into hours, minutes, seconds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Goal Paces Contributors

use crate::constants::clock::{
    MAX_HOURS, MAX_MINUTES_OR_SECONDS, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A duration decomposed into whole hours, minutes, and seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime {
    /// Whole hours
    pub hours: u32,
    /// Whole minutes after removing hours (0-59)
    pub minutes: u32,
    /// Whole seconds after removing minutes (0-59)
    pub seconds: u32,
}

impl ClockTime {
    /// Build a clock time from its components
    #[must_use]
    pub const fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Total whole seconds represented by this clock time
    #[must_use]
    pub fn total_seconds(&self) -> f64 {
        f64::from(self.hours).mul_add(
            SECONDS_PER_HOUR,
            f64::from(self.minutes).mul_add(SECONDS_PER_MINUTE, f64::from(self.seconds)),
        )
    }

    /// Render as zero-padded `MM:SS`, dropping the hours component
    #[must_use]
    pub fn to_pace_string(&self) -> String {
        format!("{:02}:{:02}", self.minutes, self.seconds)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Decompose a number of seconds into a [`ClockTime`].
///
/// Every component is truncated; sub-second precision is dropped. Negative
/// and non-finite inputs decompose to zero. Minutes and seconds always stay
/// within 0-59; hours saturate at `u32::MAX`.
#[must_use]
pub fn seconds_to_clock(seconds: f64) -> ClockTime {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    };

    let hours = (total / SECONDS_PER_HOUR).trunc();
    let within_hour = total.rem_euclid(SECONDS_PER_HOUR);
    let minutes = (within_hour / SECONDS_PER_MINUTE).trunc();
    let remaining = minutes.mul_add(-SECONDS_PER_MINUTE, within_hour);

    ClockTime {
        hours: hours as u32,
        minutes: (minutes as u32).min(MAX_MINUTES_OR_SECONDS),
        seconds: (remaining.trunc() as u32).min(MAX_MINUTES_OR_SECONDS),
    }
}

/// Accepted input layouts for a clock string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockFormat {
    /// Exactly `H:MM:SS`
    HoursMinutesSeconds,
    /// `H:MM:SS` or `MM:SS`
    HoursOrMinutes,
}

impl ClockFormat {
    /// Human-readable description of the accepted layout
    #[must_use]
    pub const fn expected(self) -> &'static str {
        match self {
            Self::HoursMinutesSeconds => "HH:MM:SS",
            Self::HoursOrMinutes => "HH:MM:SS or MM:SS",
        }
    }
}

/// Parse a human-entered clock string into a [`ClockTime`].
///
/// Each field is one or two ASCII digits. Hours range 0-23; minutes and
/// seconds range 0-59.
///
/// # Errors
///
/// Returns an `InvalidFormat` error naming the value and the expected layout
/// when the string has the wrong number of fields, a non-numeric field, or a
/// field out of range.
pub fn parse_clock(value: &str, format: ClockFormat) -> AppResult<ClockTime> {
    let invalid = || {
        AppError::invalid_format(format!(
            "Invalid time '{value}': expected {}",
            format.expected()
        ))
        .with_details(serde_json::json!({
            "value": value,
            "expected": format.expected(),
        }))
    };

    let fields: Vec<&str> = value.split(':').collect();

    let (hours, minutes, seconds) = match (fields.as_slice(), format) {
        ([h, m, s], _) => (
            parse_field(h, MAX_HOURS).ok_or_else(invalid)?,
            parse_field(m, MAX_MINUTES_OR_SECONDS).ok_or_else(invalid)?,
            parse_field(s, MAX_MINUTES_OR_SECONDS).ok_or_else(invalid)?,
        ),
        ([m, s], ClockFormat::HoursOrMinutes) => (
            0,
            parse_field(m, MAX_MINUTES_OR_SECONDS).ok_or_else(invalid)?,
            parse_field(s, MAX_MINUTES_OR_SECONDS).ok_or_else(invalid)?,
        ),
        _ => return Err(invalid()),
    };

    Ok(ClockTime::new(hours, minutes, seconds))
}

fn parse_field(field: &str, max: u32) -> Option<u32> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse::<u32>().ok().filter(|v| *v <= max)
}
