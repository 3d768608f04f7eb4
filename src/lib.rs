// ABOUTME: Main library entry point for the recipe API
// ABOUTME: REST CRUD service over a single recipe collection backed by SQLite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe API Contributors

#![deny(unsafe_code)]

//! # Recipe API
//!
//! A minimal REST API exposing create/read/update/delete operations over a
//! single recipe collection. Route handlers map HTTP verbs and paths to
//! repository operations with exact-match filtering by title, author, and
//! difficulty.
//!
//! ## Architecture
//!
//! - **Routes**: thin axum handlers that shape JSON responses
//! - **Database**: connection management and the recipe repository
//! - **Models**: the schema-flexible recipe document
//! - **Config**: environment-only configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_api::config::ServerConfig;
//! use recipe_api::database::Database;
//! use recipe_api::server::{RecipeApiServer, ServerResources};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let database = Database::new(&config.database.url).await?;
//!     let resources = Arc::new(ServerResources::new(database, config));
//!     RecipeApiServer::new(resources).run().await
//! }
//! ```

/// Environment-based configuration management
pub mod config;

/// Application constants
pub mod constants;

/// Database connection and repository operations
pub mod database;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Recipe data model
pub mod models;

/// HTTP route handlers
pub mod routes;

/// Server resources and serving loop
pub mod server;
