// ABOUTME: Core data model for the recipe API
// ABOUTME: Defines the Recipe record plus create and partial-update request shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe API Contributors

//! Recipe data model
//!
//! A recipe is a schema-flexible document: `title`, `author`, and
//! `difficulty` are the filterable fields and everything else the client
//! sends rides along verbatim in the flattened `extra` map. None of the
//! named fields are required; the store enforces nothing beyond the
//! generated id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A stored recipe document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier assigned by the store at creation
    pub id: Uuid,
    /// Display title, used as a secondary lookup key (not unique)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Author name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Difficulty label (e.g. "easy", "medium", "hard"), matched verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Remaining client-supplied fields, preserved as given
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Request to create a new recipe
///
/// No field is validated; the store accepts whatever the client sends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRecipeRequest {
    /// Display title
    pub title: Option<String>,
    /// Author name
    pub author: Option<String>,
    /// Difficulty label
    pub difficulty: Option<String>,
    /// Arbitrary additional fields, stored verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request to partially update an existing recipe
///
/// Absent fields are retained (merge semantics); extra fields replace the
/// stored value key by key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRecipeRequest {
    /// New title (if provided)
    pub title: Option<String>,
    /// New author (if provided)
    pub author: Option<String>,
    /// New difficulty (if provided)
    pub difficulty: Option<String>,
    /// Additional fields to merge into the stored document
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_preserves_unknown_fields() {
        let body = json!({
            "title": "Pasta",
            "author": "A",
            "difficulty": "easy",
            "ingredients": ["flour", "eggs"],
            "servings": 4
        });
        let request: CreateRecipeRequest = serde_json::from_value(body).unwrap();

        assert_eq!(request.title.as_deref(), Some("Pasta"));
        assert_eq!(request.extra["servings"], json!(4));
        assert_eq!(request.extra["ingredients"], json!(["flour", "eggs"]));
    }

    #[test]
    fn test_recipe_serializes_extra_at_top_level() {
        let mut extra = Map::new();
        extra.insert("servings".to_owned(), json!(2));
        let recipe = Recipe {
            id: Uuid::new_v4(),
            title: Some("Soup".to_owned()),
            author: None,
            difficulty: None,
            extra,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(value["title"], json!("Soup"));
        assert_eq!(value["servings"], json!(2));
        // absent optional fields are omitted, not null
        assert!(value.get("author").is_none());
    }

    #[test]
    fn test_update_request_all_fields_optional() {
        let request: UpdateRecipeRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.title.is_none());
        assert!(request.author.is_none());
        assert!(request.difficulty.is_none());
        assert!(request.extra.is_empty());
    }
}
