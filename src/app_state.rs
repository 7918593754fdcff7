//! Application state management.
//!
//! This module defines the shared state structure that gets passed to all
//! Axum handlers via the `State` extractor. The placeholder API server is
//! read-only, so the state carries only the catalog store: session
//! operations and catalog writes stay local to the embedding application
//! and never cross this boundary.

use crate::catalog_store::CatalogStore;

/// Shared application state passed to all Axum handlers.
///
/// Built once in `create_router()` during startup, attached via
/// `.with_state(app_state)`, and cloned by Axum per request. Cloning is
/// cheap: the catalog store is an `Arc` handle internally.
#[derive(Clone)]
pub(crate) struct AppState {
    // ---
    catalog: CatalogStore,
}

impl AppState {
    // ---
    pub fn new(catalog: CatalogStore) -> Self {
        // ---
        AppState { catalog }
    }

    /// Get a reference to the catalog store.
    pub(crate) fn catalog(&self) -> &CatalogStore {
        // ---
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::infrastructure::create_memory_storage;

    #[test]
    fn test_app_state_creation_and_clone() {
        // ---
        let catalog = CatalogStore::new(create_memory_storage());
        catalog.load().unwrap();

        let app_state = AppState::new(catalog);
        let cloned = app_state.clone();

        // Clones share the underlying store
        assert_eq!(
            app_state.catalog().products().len(),
            cloned.catalog().products().len()
        );
    }
}
