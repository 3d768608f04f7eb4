// ABOUTME: Server binary for the recipe REST API
// ABOUTME: Loads configuration, initializes logging and the store, then serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe API Contributors

//! # Recipe API Server Binary
//!
//! Starts the recipe REST API. Configuration comes from the environment;
//! a store connection failure at startup is fatal.

use anyhow::Result;
use clap::Parser;
use recipe_api::{
    config::ServerConfig,
    database::Database,
    logging,
    server::{RecipeApiServer, ServerResources},
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "recipe-api-server")]
#[command(about = "Recipe API - REST CRUD service for recipe documents")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Recipe API");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url).await?;
    info!("Connected to database");

    let resources = Arc::new(ServerResources::new(database, config));
    let server = RecipeApiServer::new(resources);

    server.run().await
}
