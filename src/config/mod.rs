// ABOUTME: Configuration module for server settings loaded at startup
// ABOUTME: Re-exports the environment-driven ServerConfig and its typed enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Goal Paces Contributors

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, ServerConfig};
