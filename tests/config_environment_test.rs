// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates environment parsing, defaults, overrides, and rejection of bad numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Goal Paces Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use goal_paces::config::{Environment, ServerConfig};
use goal_paces::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const SERVER_VARS: [&str; 5] = [
    "HTTP_PORT",
    "HOST",
    "ENVIRONMENT",
    "CORS_ALLOWED_ORIGINS",
    "REQUEST_TIMEOUT_SECS",
];

fn clear_server_env() {
    for key in SERVER_VARS {
        env::remove_var(key);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("anything"),
        Environment::Development
    );
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_server_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 8081);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.cors.allowed_origins, "*");
    assert_eq!(config.request_timeout_secs, 30);
    assert_eq!(config.bind_address(), "127.0.0.1:8081");
}

#[test]
#[serial]
fn test_overrides_from_environment() {
    clear_server_env();
    env::set_var("HTTP_PORT", "9090");
    env::set_var("HOST", "0.0.0.0");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("CORS_ALLOWED_ORIGINS", "https://plan.example.com");
    env::set_var("REQUEST_TIMEOUT_SECS", "5");

    let config = ServerConfig::from_env().unwrap();
    clear_server_env();

    assert_eq!(config.bind_address(), "0.0.0.0:9090");
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.cors.allowed_origins, "https://plan.example.com");
    assert_eq!(config.request_timeout_secs, 5);
    assert!(config.summary().contains("bind=0.0.0.0:9090"));
    assert!(!config.summary().contains("log_level"));
}

#[test]
#[serial]
fn test_invalid_port_rejected() {
    clear_server_env();
    env::set_var("HTTP_PORT", "not-a-port");

    let result = ServerConfig::from_env();
    clear_server_env();

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("HTTP_PORT"), "{message}");
}

#[test]
#[serial]
fn test_zero_timeout_rejected() {
    clear_server_env();
    env::set_var("REQUEST_TIMEOUT_SECS", "0");

    let result = ServerConfig::from_env();
    clear_server_env();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_logging_config_prefers_rust_log() {
    env::set_var("RUST_LOG", "goal_paces=trace");
    env::set_var("LOG_LEVEL", "warn");
    env::set_var("LOG_FORMAT", "json");

    let config = LoggingConfig::from_env();
    env::remove_var("RUST_LOG");
    env::remove_var("LOG_LEVEL");
    env::remove_var("LOG_FORMAT");

    assert_eq!(config.level, "goal_paces=trace");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_name, "goal-paces");
}

#[test]
#[serial]
fn test_log_level_directives_reach_logging_config() {
    env::remove_var("RUST_LOG");
    env::set_var("LOG_LEVEL", "debug,hyper=trace");

    let config = LoggingConfig::from_env();
    env::remove_var("LOG_LEVEL");

    assert_eq!(config.level, "debug,hyper=trace");
}
