// ABOUTME: Database operations for the recipes collection
// ABOUTME: Handles CRUD plus exact-match filtering by title, author, and difficulty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe API Contributors

//! Recipe repository operations
//!
//! Each operation performs exactly one logical store interaction and returns
//! an [`AppResult`]. Store errors are wrapped with operation context as
//! [`AppError::database`]; absent records are `Ok(None)` / empty vectors,
//! never errors. Filtering is exact, case-sensitive equality through the
//! typed [`RecipeFilter`].

use crate::errors::{AppError, AppResult};
use crate::models::{CreateRecipeRequest, Recipe, UpdateRecipeRequest};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

/// Document keys managed by the store, stripped from client-supplied extras
const RESERVED_FIELDS: &[&str] = &["id", "created_at", "updated_at"];

/// Exact-match filter over the indexed recipe fields
///
/// An empty filter matches every record. Matching is case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    /// Match on exact title
    pub title: Option<String>,
    /// Match on exact author
    pub author: Option<String>,
    /// Match on exact difficulty label
    pub difficulty: Option<String>,
}

impl RecipeFilter {
    /// Filter by exact title
    #[must_use]
    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Filter by exact author
    #[must_use]
    pub fn by_author(author: impl Into<String>) -> Self {
        Self {
            author: Some(author.into()),
            ..Self::default()
        }
    }

    /// Filter by exact difficulty label
    #[must_use]
    pub fn by_difficulty(difficulty: impl Into<String>) -> Self {
        Self {
            difficulty: Some(difficulty.into()),
            ..Self::default()
        }
    }
}

/// Recipe database operations manager
pub struct RecipesManager {
    pool: SqlitePool,
}

impl RecipesManager {
    /// Create a new recipes manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new recipe in the store
    ///
    /// The id and timestamps are assigned here; no field validation is
    /// performed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create(&self, request: &CreateRecipeRequest) -> AppResult<Recipe> {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let mut extra = request.extra.clone();
        strip_reserved_fields(&mut extra);
        let document = serde_json::to_string(&extra)?;

        sqlx::query(
            r"
            INSERT INTO recipes (id, title, author, difficulty, document, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            ",
        )
        .bind(id.to_string())
        .bind(&request.title)
        .bind(&request.author)
        .bind(&request.difficulty)
        .bind(&document)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create recipe: {e}")))?;

        Ok(Recipe {
            id,
            title: request.title.clone(),
            author: request.author.clone(),
            difficulty: request.difficulty.clone(),
            extra,
            created_at: now,
            updated_at: now,
        })
    }

    /// List every recipe in the store, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list_all(&self) -> AppResult<Vec<Recipe>> {
        self.find(&RecipeFilter::default()).await
    }

    /// Find recipes matching a filter, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn find(&self, filter: &RecipeFilter) -> AppResult<Vec<Recipe>> {
        let mut sql = String::from(
            "SELECT id, title, author, difficulty, document, created_at, updated_at FROM recipes",
        );
        let mut clauses = Vec::new();
        let mut binds = Vec::new();

        if let Some(title) = &filter.title {
            clauses.push("title = ?");
            binds.push(title.as_str());
        }
        if let Some(author) = &filter.author {
            clauses.push("author = ?");
            binds.push(author.as_str());
        }
        if let Some(difficulty) = &filter.difficulty {
            clauses.push("difficulty = ?");
            binds.push(difficulty.as_str());
        }

        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY created_at ASC");

        let mut query = sqlx::query(&sql);
        for bind in binds {
            query = query.bind(bind);
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to find recipes: {e}")))?;

        rows.iter().map(row_to_recipe).collect()
    }

    /// Get a recipe by id
    ///
    /// A malformed id matches nothing and returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn find_by_id(&self, recipe_id: &str) -> AppResult<Option<Recipe>> {
        let row = sqlx::query(
            r"
            SELECT id, title, author, difficulty, document, created_at, updated_at
            FROM recipes
            WHERE id = $1
            ",
        )
        .bind(recipe_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get recipe: {e}")))?;

        row.map(|r| row_to_recipe(&r)).transpose()
    }

    /// Get the first recipe with an exact title match
    ///
    /// Titles are not unique at the data layer; ties resolve oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn find_by_title(&self, title: &str) -> AppResult<Option<Recipe>> {
        let row = sqlx::query(
            r"
            SELECT id, title, author, difficulty, document, created_at, updated_at
            FROM recipes
            WHERE title = $1
            ORDER BY created_at ASC
            LIMIT 1
            ",
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get recipe by title: {e}")))?;

        row.map(|r| row_to_recipe(&r)).transpose()
    }

    /// List all recipes by an author
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list_by_author(&self, author: &str) -> AppResult<Vec<Recipe>> {
        self.find(&RecipeFilter::by_author(author)).await
    }

    /// List all recipes with a difficulty label
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list_by_difficulty(&self, difficulty: &str) -> AppResult<Vec<Recipe>> {
        self.find(&RecipeFilter::by_difficulty(difficulty)).await
    }

    /// Update a recipe by id with merge semantics
    ///
    /// Provided fields replace the stored values; absent fields are
    /// retained. Extra fields merge key by key into the stored document.
    /// Returns the post-update state, or `None` if no such recipe exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn update_by_id(
        &self,
        recipe_id: &str,
        request: &UpdateRecipeRequest,
    ) -> AppResult<Option<Recipe>> {
        let existing = self.find_by_id(recipe_id).await?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let now = Utc::now();
        let title = request.title.clone().or(existing.title);
        let author = request.author.clone().or(existing.author);
        let difficulty = request.difficulty.clone().or(existing.difficulty);

        let mut extra = existing.extra;
        let mut incoming = request.extra.clone();
        strip_reserved_fields(&mut incoming);
        for (key, value) in incoming {
            extra.insert(key, value);
        }
        let document = serde_json::to_string(&extra)?;

        let result = sqlx::query(
            r"
            UPDATE recipes SET
                title = $1, author = $2, difficulty = $3, document = $4, updated_at = $5
            WHERE id = $6
            ",
        )
        .bind(&title)
        .bind(&author)
        .bind(&difficulty)
        .bind(&document)
        .bind(now.to_rfc3339())
        .bind(recipe_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update recipe: {e}")))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        // Return post-update state
        self.find_by_id(recipe_id).await
    }

    /// Update the first recipe with an exact title match
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn update_by_title(
        &self,
        title: &str,
        request: &UpdateRecipeRequest,
    ) -> AppResult<Option<Recipe>> {
        let row = sqlx::query(
            r"
            SELECT id FROM recipes
            WHERE title = $1
            ORDER BY created_at ASC
            LIMIT 1
            ",
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get recipe by title: {e}")))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let recipe_id: String = row.get("id");

        self.update_by_id(&recipe_id, request).await
    }

    /// Delete a recipe by id
    ///
    /// Returns the deleted record, or `None` if no such recipe exists. No
    /// cascading effects.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn delete_by_id(&self, recipe_id: &str) -> AppResult<Option<Recipe>> {
        let existing = self.find_by_id(recipe_id).await?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(recipe_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete recipe: {e}")))?;

        Ok(Some(existing))
    }
}

/// Drop store-managed keys a client may have smuggled into the extras map
fn strip_reserved_fields(extra: &mut Map<String, Value>) {
    for field in RESERVED_FIELDS {
        extra.remove(*field);
    }
}

/// Convert a database row to a Recipe
fn row_to_recipe(row: &SqliteRow) -> AppResult<Recipe> {
    let id_str: String = row.get("id");
    let document_json: String = row.get("document");
    let created_at_str: String = row.get("created_at");
    let updated_at_str: String = row.get("updated_at");

    let extra: Map<String, Value> = serde_json::from_str(&document_json)?;

    Ok(Recipe {
        id: Uuid::parse_str(&id_str)
            .map_err(|e| AppError::internal(format!("Invalid UUID: {e}")))?,
        title: row.get("title"),
        author: row.get("author"),
        difficulty: row.get("difficulty"),
        extra,
        created_at: parse_timestamp(&created_at_str)?,
        updated_at: parse_timestamp(&updated_at_str)?,
    })
}

fn parse_timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::internal(format!("Invalid timestamp: {e}")))
}
