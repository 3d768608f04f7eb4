// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe API Contributors

//! Environment-based configuration management
//!
//! All configuration comes from process environment variables. The only
//! required external surface is the store connection string; everything else
//! has a sensible default.

use crate::constants::{defaults, env_config};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Environment type for deployment-specific behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Store connection string
    pub url: String,
}

/// Complete server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listening port
    pub http_port: u16,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable fails to parse (e.g. a
    /// non-numeric port)
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var(env_config::HTTP_PORT) {
            Ok(port) => port
                .parse::<u16>()
                .with_context(|| format!("Invalid {} value: {port}", env_config::HTTP_PORT))?,
            Err(_) => defaults::HTTP_PORT,
        };

        let database_url = env::var(env_config::DATABASE_URL)
            .unwrap_or_else(|_| defaults::DATABASE_URL.to_owned());

        let environment = env::var(env_config::ENVIRONMENT)
            .map(|s| Environment::from_str_or_default(&s))
            .unwrap_or_default();

        let log_level = env::var(env_config::LOG_LEVEL)
            .map(|s| LogLevel::from_str_or_default(&s))
            .unwrap_or_default();

        Ok(Self {
            http_port,
            database: DatabaseConfig { url: database_url },
            environment,
            log_level,
        })
    }

    /// One-line configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} database={} environment={} log_level={}",
            self.http_port, self.database.url, self.environment, self.log_level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("warn"), LogLevel::Warn);
        assert_eq!(LogLevel::from_str_or_default("bogus"), LogLevel::Info);
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("prod"),
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
}
