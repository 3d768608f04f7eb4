// ABOUTME: Route handlers for the recipes REST API
// ABOUTME: Maps HTTP verbs and paths to repository operations and shapes JSON responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe API Contributors

//! Recipe routes
//!
//! Every handler follows the same shape: invoke one repository operation,
//! branch on the result, emit a JSON response. No authentication and no
//! input schema validation; absent records map to a single 404 response.
//!
//! An empty collection on the list routes is a 404 (`"No recipe found"`),
//! not an empty 200 array.

use crate::{
    database::RecipesManager,
    errors::AppError,
    models::{CreateRecipeRequest, Recipe, UpdateRecipeRequest},
    server::ServerResources,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Response carrying a confirmation message and the affected recipe
#[derive(Debug, Serialize)]
pub struct RecipeMessageResponse {
    /// Confirmation message
    pub message: String,
    /// The created or updated recipe
    pub recipe: Recipe,
}

/// Response carrying only a confirmation message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Confirmation message
    pub message: String,
}

/// Recipe routes handler
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/recipes",
                post(Self::handle_create).get(Self::handle_list),
            )
            // One registration per path pattern: the second segment is a
            // title for GET and an id for POST/DELETE.
            .route(
                "/recipes/:title",
                get(Self::handle_get_by_title)
                    .post(Self::handle_update_by_id)
                    .delete(Self::handle_delete),
            )
            .route(
                "/recipes/author/:author_name",
                get(Self::handle_list_by_author),
            )
            .route(
                "/recipes/difficulty/:difficulty_type",
                get(Self::handle_list_by_difficulty),
            )
            .route(
                "/recipes/title/:recipe_title",
                post(Self::handle_update_by_title),
            )
            .with_state(resources)
    }

    /// Handle POST /recipes - Create a new recipe
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<CreateRecipeRequest>,
    ) -> Result<Response, AppError> {
        let manager = Self::recipes_manager(&resources);
        let recipe = manager.create(&body).await?;

        let response = RecipeMessageResponse {
            message: "Recipe added successfully".to_owned(),
            recipe,
        };
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle GET /recipes - List all recipes
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let manager = Self::recipes_manager(&resources);
        let recipes = manager.list_all().await?;

        if recipes.is_empty() {
            return Err(AppError::not_found("No recipe found"));
        }

        Ok((StatusCode::OK, Json(recipes)).into_response())
    }

    /// Handle GET /recipes/:title - Get a recipe by exact title
    async fn handle_get_by_title(
        State(resources): State<Arc<ServerResources>>,
        Path(title): Path<String>,
    ) -> Result<Response, AppError> {
        let manager = Self::recipes_manager(&resources);
        let recipe = manager
            .find_by_title(&title)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe does not exist"))?;

        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    /// Handle GET /recipes/author/:authorName - List recipes by author
    async fn handle_list_by_author(
        State(resources): State<Arc<ServerResources>>,
        Path(author_name): Path<String>,
    ) -> Result<Response, AppError> {
        let manager = Self::recipes_manager(&resources);
        let recipes = manager.list_by_author(&author_name).await?;

        if recipes.is_empty() {
            return Err(AppError::not_found("No recipe found"));
        }

        Ok((StatusCode::OK, Json(recipes)).into_response())
    }

    /// Handle GET /recipes/difficulty/:difficultyType - List recipes by difficulty
    async fn handle_list_by_difficulty(
        State(resources): State<Arc<ServerResources>>,
        Path(difficulty_type): Path<String>,
    ) -> Result<Response, AppError> {
        let manager = Self::recipes_manager(&resources);
        let recipes = manager.list_by_difficulty(&difficulty_type).await?;

        if recipes.is_empty() {
            return Err(AppError::not_found("No recipe found"));
        }

        Ok((StatusCode::OK, Json(recipes)).into_response())
    }

    /// Handle POST /recipes/:id - Update a recipe by id
    async fn handle_update_by_id(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        Json(body): Json<UpdateRecipeRequest>,
    ) -> Result<Response, AppError> {
        let manager = Self::recipes_manager(&resources);
        let recipe = manager
            .update_by_id(&id, &body)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe not found"))?;

        let response = RecipeMessageResponse {
            message: "Recipe updated successfully".to_owned(),
            recipe,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /recipes/title/:recipeTitle - Update the first recipe with a title
    async fn handle_update_by_title(
        State(resources): State<Arc<ServerResources>>,
        Path(recipe_title): Path<String>,
        Json(body): Json<UpdateRecipeRequest>,
    ) -> Result<Response, AppError> {
        let manager = Self::recipes_manager(&resources);
        let recipe = manager
            .update_by_title(&recipe_title, &body)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe not found"))?;

        let response = RecipeMessageResponse {
            message: "Recipe updated successfully".to_owned(),
            recipe,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle DELETE /recipes/:id - Delete a recipe by id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let manager = Self::recipes_manager(&resources);
        let deleted = manager.delete_by_id(&id).await?;

        if deleted.is_none() {
            return Err(AppError::not_found("Recipe not found"));
        }

        let response = MessageResponse {
            message: "Recipe deleted successfully".to_owned(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    fn recipes_manager(resources: &Arc<ServerResources>) -> RecipesManager {
        resources.database.recipes()
    }
}
