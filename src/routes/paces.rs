// ABOUTME: Pace route handlers for the marathon pace table and single race pace
// ABOUTME: Parses and validates query parameters, then delegates to the pace calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Goal Paces Contributors

//! Pace routes
//!
//! - `GET /api/v1/paces?time=H:MM:SS` returns the full pace report
//! - `GET /api/v1/race?distance=<miles>&time=<H:MM:SS|MM:SS>` returns the mile pace
//!
//! Missing or malformed parameters are reported as 400 responses with the
//! standard JSON error body.

use crate::middleware::RequestId;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Extension, Json, Router,
};
use goal_paces_core::errors::{AppError, AppResult};
use goal_paces_core::models::{parse_clock, ClockFormat, PaceReport, RacePace};
use goal_paces_engine::PaceCalculator;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Path of the pace report endpoint
pub const PACES_PATH: &str = "/api/v1/paces";

/// Path of the race pace endpoint
pub const RACE_PATH: &str = "/api/v1/race";

/// Query parameters for the pace report endpoint
#[derive(Debug, Default, Deserialize)]
pub struct PacesQuery {
    /// Goal marathon finish time
    pub time: Option<String>,
}

/// Query parameters for the race pace endpoint
#[derive(Debug, Default, Deserialize)]
pub struct RaceQuery {
    /// Race distance in miles
    pub distance: Option<String>,
    /// Race finish time
    pub time: Option<String>,
}

/// Pace report response, echoing the requested time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacesResponse {
    /// Finish time exactly as supplied by the client
    pub time: String,
    /// Computed paces
    #[serde(flatten)]
    pub report: PaceReport,
}

/// Pace route handlers
pub struct PaceRoutes;

impl PaceRoutes {
    /// Create all pace routes backed by the given calculator
    pub fn routes(calculator: PaceCalculator) -> Router {
        Router::new()
            .route(PACES_PATH, get(Self::handle_paces))
            .route(RACE_PATH, get(Self::handle_race))
            .with_state(calculator)
    }

    /// Handle `GET /api/v1/paces`
    async fn handle_paces(
        State(calculator): State<PaceCalculator>,
        request_id: Option<Extension<RequestId>>,
        query: Result<Query<PacesQuery>, QueryRejection>,
    ) -> Result<Json<PacesResponse>, AppError> {
        Self::paces(calculator, query)
            .map(Json)
            .map_err(|e| tag_request(e, request_id))
    }

    /// Handle `GET /api/v1/race`
    async fn handle_race(
        State(calculator): State<PaceCalculator>,
        request_id: Option<Extension<RequestId>>,
        query: Result<Query<RaceQuery>, QueryRejection>,
    ) -> Result<Json<RacePace>, AppError> {
        Self::race(calculator, query)
            .map(Json)
            .map_err(|e| tag_request(e, request_id))
    }

    fn paces(
        calculator: PaceCalculator,
        query: Result<Query<PacesQuery>, QueryRejection>,
    ) -> AppResult<PacesResponse> {
        let Query(params) = query.map_err(reject_query)?;
        let time = params.time.ok_or_else(|| AppError::missing_field("time"))?;

        // The report endpoint only takes a full H:MM:SS finish time
        let finish = parse_clock(&time, ClockFormat::HoursMinutesSeconds)?;
        let report = calculator.compute_report(finish.total_seconds());

        debug!(time = %time, hundred_pace = %report.hundred_pace, "Pace report computed");
        Ok(PacesResponse { time, report })
    }

    fn race(
        calculator: PaceCalculator,
        query: Result<Query<RaceQuery>, QueryRejection>,
    ) -> AppResult<RacePace> {
        let Query(params) = query.map_err(reject_query)?;
        let distance = params
            .distance
            .ok_or_else(|| AppError::missing_field("distance"))?;
        let time = params.time.ok_or_else(|| AppError::missing_field("time"))?;

        let distance_miles = parse_distance(&distance)?;
        let duration = parse_clock(&time, ClockFormat::HoursOrMinutes)?;
        let pace = calculator.compute_single_race_pace(distance_miles, duration.total_seconds())?;

        debug!(distance_miles, time = %time, mile_pace = %pace.mile_pace, "Race pace computed");
        Ok(pace)
    }
}

fn parse_distance(raw: &str) -> AppResult<f64> {
    raw.trim().parse::<f64>().map_err(|_| {
        AppError::invalid_format(format!(
            "Invalid distance '{raw}': expected a number of miles"
        ))
        .with_details(serde_json::json!({ "value": raw }))
    })
}

fn reject_query(rejection: QueryRejection) -> AppError {
    AppError::invalid_input(format!("Invalid query string: {}", rejection.body_text()))
}

fn tag_request(error: AppError, request_id: Option<Extension<RequestId>>) -> AppError {
    match request_id {
        Some(Extension(id)) => error.with_request_id(id.as_str()),
        None => error,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use goal_paces_core::errors::ErrorCode;

    #[test]
    fn test_parse_distance() {
        assert_eq!(parse_distance("26.2").unwrap(), 26.2);
        assert_eq!(parse_distance(" 13.1 ").unwrap(), 13.1);
        assert_eq!(
            parse_distance("marathon").unwrap_err().code,
            ErrorCode::InvalidFormat
        );
    }

    #[test]
    fn test_paces_response_flattens_report() {
        let report = PaceCalculator::new().compute_report(10_800.0);
        let response = PacesResponse {
            time: "3:00:00".to_owned(),
            report,
        };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["time"], "3:00:00");
        assert_eq!(json["hundred_pace"], "00:25");
        assert!(json["kilometer_paces"]["specific"]["intervals"]["one_k"].is_string());
        assert!(json.get("report").is_none());
    }
}
