// ABOUTME: Route module organization for recipe API HTTP endpoints
// ABOUTME: Route definitions and thin handler functions that delegate to the repository layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe API Contributors

//! Route module for the recipe API
//!
//! Each module contains only route definitions and thin handler functions
//! that delegate to the repository layer.

/// Health check and system status routes
pub mod health;
/// Recipe CRUD and filtering routes
pub mod recipes;

/// Health check route handlers
pub use health::HealthRoutes;
/// Recipe route handlers
pub use recipes::RecipeRoutes;
