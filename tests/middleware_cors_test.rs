// ABOUTME: Integration tests for the CORS layer on the assembled router
// ABOUTME: Checks preflight handling for open and restricted origin lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Goal Paces Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use goal_paces::config::{CorsConfig, ServerConfig};
use goal_paces::server::build_router;
use helpers::axum_test::AxumTestRequest;

fn app() -> axum::Router {
    build_router(&ServerConfig::default())
}

#[tokio::test]
async fn test_cors_preflight_allowed() {
    let response = AxumTestRequest::options("/api/v1/paces")
        .header("origin", "https://example.org")
        .header("access-control-request-method", "GET")
        .send(app())
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("*")
    );
}

#[tokio::test]
async fn test_restricted_origins_only_echo_listed_origin() {
    let config = ServerConfig {
        cors: CorsConfig {
            allowed_origins: "https://coach.example.com, https://plan.example.com".to_owned(),
        },
        ..ServerConfig::default()
    };

    let response = AxumTestRequest::get("/health")
        .header("origin", "https://plan.example.com")
        .send(build_router(&config))
        .await;
    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("https://plan.example.com")
    );

    let response = AxumTestRequest::get("/health")
        .header("origin", "https://elsewhere.example.com")
        .send(build_router(&config))
        .await;
    assert!(response.header("access-control-allow-origin").is_none());
}
