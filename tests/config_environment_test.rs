// ABOUTME: Integration tests for environment-based configuration loading
// ABOUTME: Covers defaults, overrides, and invalid values in one sequential test
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe API Contributors

#![allow(missing_docs, clippy::unwrap_used)]

use recipe_api::config::{Environment, LogLevel, ServerConfig};
use recipe_api::constants::{defaults, env_config};
use std::env;

// Environment variables are process-global, so every scenario runs inside
// one sequential test function.
#[test]
fn test_config_from_env() {
    // Defaults with nothing set
    env::remove_var(env_config::HTTP_PORT);
    env::remove_var(env_config::DATABASE_URL);
    env::remove_var(env_config::ENVIRONMENT);
    env::remove_var(env_config::LOG_LEVEL);

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, defaults::HTTP_PORT);
    assert_eq!(config.database.url, defaults::DATABASE_URL);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.log_level, LogLevel::Info);

    // Overrides
    env::set_var(env_config::HTTP_PORT, "8080");
    env::set_var(env_config::DATABASE_URL, "sqlite:test.db");
    env::set_var(env_config::ENVIRONMENT, "production");
    env::set_var(env_config::LOG_LEVEL, "debug");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.database.url, "sqlite:test.db");
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(config.summary().contains("port=8080"));

    // Invalid port is an error, not a silent fallback
    env::set_var(env_config::HTTP_PORT, "not-a-port");
    assert!(ServerConfig::from_env().is_err());

    env::remove_var(env_config::HTTP_PORT);
    env::remove_var(env_config::DATABASE_URL);
    env::remove_var(env_config::ENVIRONMENT);
    env::remove_var(env_config::LOG_LEVEL);
}
