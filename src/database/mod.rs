// ABOUTME: Database connection management and schema migration for the recipe store
// ABOUTME: Opens the SQLite pool once at startup and hands out repository managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe API Contributors

//! # Database Management
//!
//! The store connection is opened exactly once at startup and passed
//! explicitly wherever it is needed; there is no global connection state.
//! A failed connection is a startup error, not a silently degraded process.

/// Recipe repository operations
pub mod recipes;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use std::fs;
use std::path::Path;

pub use recipes::{RecipeFilter, RecipesManager};

/// Database handle for the recipe store
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open a connection pool and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreachable or migration fails
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist.
        // `mode=rwc` creates a missing file but not a missing parent
        // directory, so that is created here first. In-memory databases are
        // left untouched.
        let connection_options = if database_url.starts_with("sqlite:")
            && !database_url.contains(":memory:")
        {
            let file_path = database_url
                .trim_start_matches("sqlite:")
                .trim_start_matches("//");
            let file_path = file_path.split('?').next().unwrap_or(file_path);
            if let Some(parent) = Path::new(file_path).parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create database directory {}", parent.display())
                    })?;
                }
            }
            if database_url.contains('?') {
                database_url.to_owned()
            } else {
                format!("{database_url}?mode=rwc")
            }
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails
    pub async fn migrate(&self) -> Result<()> {
        // The three filterable fields are materialized as columns; the rest
        // of each document lives verbatim in the JSON `document` column.
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id TEXT PRIMARY KEY,
                title TEXT,
                author TEXT,
                difficulty TEXT,
                document TEXT NOT NULL DEFAULT '{}',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_recipes_title ON recipes(title)")
            .execute(&self.pool)
            .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_recipes_author ON recipes(author)")
            .execute(&self.pool)
            .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_recipes_difficulty ON recipes(difficulty)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Access the underlying connection pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Repository manager for the recipes collection
    #[must_use]
    pub fn recipes(&self) -> RecipesManager {
        RecipesManager::new(self.pool.clone())
    }
}
