// ABOUTME: Main library entry point for the Goal Paces HTTP service
// ABOUTME: Wires configuration, logging, middleware, and routes around the pace engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Goal Paces Contributors

#![deny(unsafe_code)]

//! # Goal Paces
//!
//! An HTTP API that turns a goal marathon finish time into training and
//! racing paces per 100 meters, per kilometer, and per mile.
//!
//! ## Architecture
//!
//! - **`goal-paces-core`**: errors, constants, clock parsing, report model
//! - **`goal-paces-engine`**: the stateless pace calculator and ratio tables
//! - **this crate**: configuration, logging, middleware, routes, server
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use goal_paces::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     goal_paces::server::run(config).await
//! }
//! ```

/// Configuration management loaded from the environment
pub mod config;

/// Unified error handling re-exported from the core crate
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for request correlation and CORS
pub mod middleware;

/// HTTP route definitions
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

pub use goal_paces_engine::PaceCalculator;
