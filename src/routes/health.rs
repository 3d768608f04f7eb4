// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness is static; readiness probes the recipe store through the shared pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe API Contributors

//! Health check routes for service monitoring
//!
//! `/health` reports process liveness. `/ready` runs a probe query against
//! the recipe store and returns 503 when the store is unreachable, so load
//! balancers stop routing traffic to a process whose store has gone away.

use crate::server::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    /// Handle GET /health - Process liveness
    async fn handle_health() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    /// Handle GET /ready - Store-backed readiness
    async fn handle_ready(State(resources): State<Arc<ServerResources>>) -> Response {
        match sqlx::query("SELECT 1")
            .execute(resources.database.pool())
            .await
        {
            Ok(_) => (
                StatusCode::OK,
                Json(serde_json::json!({
                    "status": "ready",
                    "timestamp": chrono::Utc::now().to_rfc3339()
                })),
            )
                .into_response(),
            Err(e) => {
                tracing::warn!("readiness probe failed: {e}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(serde_json::json!({
                        "status": "unavailable",
                        "timestamp": chrono::Utc::now().to_rfc3339()
                    })),
                )
                    .into_response()
            }
        }
    }
}
