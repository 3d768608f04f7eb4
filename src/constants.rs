// ABOUTME: Named constants for environment variables and default configuration values
// ABOUTME: Single source of truth consumed by the config and server modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe API Contributors

//! Application constants

/// Environment variable names
pub mod env_config {
    /// Connection string for the recipe store
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// HTTP listening port override
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level override
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}

/// Default configuration values
pub mod defaults {
    /// Default HTTP listening port
    pub const HTTP_PORT: u16 = 3000;
    /// Default store connection string for local runs
    pub const DATABASE_URL: &str = "sqlite:data/recipes.db";
}

/// Service identification for structured logging
pub mod service_names {
    /// Name reported in log output
    pub const RECIPE_API: &str = "recipe-api";
}
