// ABOUTME: Configuration module organization for the recipe API
// ABOUTME: Environment-based configuration only, no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe API Contributors

//! Configuration management

/// Environment-based server configuration
pub mod environment;

pub use environment::{DatabaseConfig, Environment, LogLevel, ServerConfig};
