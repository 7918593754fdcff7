// src/lib.rs
use anyhow::Result;
use app_state::AppState;
use axum::{routing::get, Router};

use handlers::{get_product, health_check, list_products, root_handler};

// Public exports (visible outside this module)
pub mod domain;

// Internal-only exports (sibling access within this module)
mod app_state;
mod catalog_store;
mod config;
mod error;
mod handlers;
mod infrastructure;
mod seed;
mod session_store;

// Hoist up only the public symbol(s)
pub use catalog_store::CatalogStore;
pub use error::StoreError;
pub use seed::demo_products;
pub use session_store::SessionStore;

pub use config::*;

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    create_file_storage, // ---
    create_memory_storage,
};

/// Build the HTTP router with the storage backend determined by environment variables.
///
/// This is the placeholder API server: a single read surface over the
/// catalog. It never serves authentication or write endpoints; those
/// operations run locally through [`SessionStore`] and [`CatalogStore`].
pub fn create_router() -> Result<Router> {
    // ---
    // Load all configuration from environment
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt::try_init().ok(); // ✅ Ignores if already initialized

    // Create infrastructure dependencies
    let storage = match &config.storage.path {
        Some(path) => create_file_storage(path)?,
        None => create_memory_storage(),
    };

    // Build the catalog and bring it up; an unreadable durable copy means
    // an empty catalog, not a failed startup.
    let catalog = CatalogStore::new(storage);
    if let Err(err) = catalog.load() {
        tracing::error!("Catalog did not load cleanly: {err}");
    }

    // Build application state with all dependencies
    let app_state = AppState::new(catalog);

    let router = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .route("/products", get(list_products))
        .route("/products/{id}", get(get_product))
        .with_state(app_state);

    Ok(router)
}
