// ABOUTME: Server resources and HTTP serving loop for the recipe API
// ABOUTME: Wires recipe and health routers onto a tokio TCP listener
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe API Contributors

//! Server assembly
//!
//! [`ServerResources`] holds the shared state handed to every handler:
//! the database handle (created once at startup) and the loaded
//! configuration. It is passed explicitly as axum state, never stored in
//! module-level globals.

use crate::config::ServerConfig;
use crate::database::Database;
use crate::routes::{HealthRoutes, RecipeRoutes};
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared server state passed to all route handlers
pub struct ServerResources {
    /// Store connection handle
    pub database: Database,
    /// Loaded configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Create new server resources
    #[must_use]
    pub const fn new(database: Database, config: ServerConfig) -> Self {
        Self { database, config }
    }
}

/// Recipe API HTTP server
pub struct RecipeApiServer {
    resources: Arc<ServerResources>,
}

impl RecipeApiServer {
    /// Create a new server around shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the complete router with all routes and middleware
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .merge(RecipeRoutes::routes(self.resources.clone()))
            .merge(HealthRoutes::routes(self.resources.clone()))
            .layer(TraceLayer::new_for_http())
    }

    /// Bind the configured port and serve until the process is stopped
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server exits
    /// abnormally
    pub async fn run(&self) -> Result<()> {
        let port = self.resources.config.http_port;
        let listener = TcpListener::bind(format!("0.0.0.0:{port}"))
            .await
            .with_context(|| format!("Failed to bind port {port}"))?;

        info!("Server running on {port}");

        axum::serve(listener, self.router())
            .await
            .context("HTTP server exited")?;

        Ok(())
    }
}
