//! Product catalog: an insertion-ordered collection seeded from the demo
//! set on first run, with every mutation rewriting the whole durable copy.
//!
//! Whole-collection rewrites bound this store to small catalogs; there is
//! deliberately no incremental write path.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use crate::domain::{Product, ProductDraft, ProductUpdate, Storage as _, StoragePtr, PRODUCTS_KEY};
use crate::error::StoreError;
use crate::seed::demo_products;

/// Catalog store handle. Cheap to clone; all clones share one catalog.
#[derive(Clone)]
pub struct CatalogStore {
    // ---
    inner: Arc<Inner>,
}

struct Inner {
    // ---
    storage: StoragePtr,
    state: Mutex<CatalogState>,
    products_tx: watch::Sender<Vec<Product>>,
}

struct CatalogState {
    // ---
    products: Vec<Product>,
    last_error: Option<StoreError>,
    is_loading: bool,
}

impl CatalogStore {
    // ---
    pub fn new(storage: StoragePtr) -> Self {
        // ---
        let (products_tx, _) = watch::channel(Vec::new());

        Self {
            inner: Arc::new(Inner {
                storage,
                state: Mutex::new(CatalogState {
                    products: Vec::new(),
                    last_error: None,
                    is_loading: true,
                }),
                products_tx,
            }),
        }
    }

    /// Loads the catalog from durable storage.
    ///
    /// An absent `products` key seeds the fixed demo set and persists it;
    /// a present key becomes the working set. An unreadable value yields
    /// [`StoreError::CatalogLoad`] and an empty working set so the caller
    /// can keep rendering instead of crashing. Idempotent; re-loading just
    /// re-reads the durable copy.
    #[tracing::instrument(skip(self))]
    pub fn load(&self) -> Result<(), StoreError> {
        // ---
        let result = self.read_or_seed();

        let mut state = self.state();
        state.is_loading = false;
        match result {
            Ok(products) => {
                tracing::info!("Loaded {} products", products.len());
                state.products = products.clone();
                state.last_error = None;
                self.inner.products_tx.send_replace(products);
                Ok(())
            }
            Err(err) => {
                tracing::error!("Failed to load products: {err}");
                state.products = Vec::new();
                state.last_error = Some(err.clone());
                self.inner.products_tx.send_replace(Vec::new());
                Err(err)
            }
        }
    }

    /// Creates a product from a draft, assigning a fresh id and creation
    /// timestamp, and appends it at the end of the collection. No
    /// duplicate detection: identical drafts produce distinct products.
    #[tracing::instrument(skip(self, draft))]
    pub fn create(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        // ---
        let mut state = self.state();

        let product = Product::from_draft(draft);
        tracing::info!("Creating product {} ({})", product.id, product.title);

        let mut next = state.products.clone();
        next.push(product.clone());
        self.commit(&mut state, next)?;

        Ok(product)
    }

    /// Merges `update` into the product with the given id. Unknown ids are
    /// a silent no-op so stale UI references cannot fault; nothing is
    /// written in that case.
    #[tracing::instrument(skip(self, update))]
    pub fn update(&self, id: &str, update: &ProductUpdate) -> Result<(), StoreError> {
        // ---
        let mut state = self.state();

        if !state.products.iter().any(|p| p.id == id) {
            return Ok(());
        }

        let mut next = state.products.clone();
        for product in next.iter_mut().filter(|p| p.id == id) {
            product.apply(update);
        }
        self.commit(&mut state, next)
    }

    /// Removes the product with the given id, if present.
    #[tracing::instrument(skip(self))]
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        // ---
        let mut state = self.state();

        if !state.products.iter().any(|p| p.id == id) {
            return Ok(());
        }

        let mut next = state.products.clone();
        next.retain(|p| p.id != id);
        self.commit(&mut state, next)
    }

    /// Read-only snapshot of the collection, in insertion order.
    pub fn products(&self) -> Vec<Product> {
        // ---
        self.state().products.clone()
    }

    pub fn find(&self, id: &str) -> Option<Product> {
        // ---
        self.state().products.iter().find(|p| p.id == id).cloned()
    }

    /// True until the first `load` completes.
    pub fn is_loading(&self) -> bool {
        // ---
        self.state().is_loading
    }

    pub fn last_error(&self) -> Option<StoreError> {
        // ---
        self.state().last_error.clone()
    }

    /// Watch the product collection. Receivers observe every load and
    /// mutation.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Product>> {
        // ---
        self.inner.products_tx.subscribe()
    }

    // ---

    fn state(&self) -> MutexGuard<'_, CatalogState> {
        // ---
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_or_seed(&self) -> Result<Vec<Product>, StoreError> {
        // ---
        let stored = self
            .inner
            .storage
            .get(PRODUCTS_KEY)
            .map_err(StoreError::catalog_load)?;

        match stored {
            Some(json) => serde_json::from_str(&json).map_err(StoreError::catalog_load),
            None => {
                let seed = demo_products();
                self.persist(&seed)?;
                tracing::info!("Seeded catalog with {} demo products", seed.len());
                Ok(seed)
            }
        }
    }

    /// Persists `next` and, only once the write succeeds, makes it the
    /// working set. A rejected write records the error and leaves the
    /// prior collection untouched.
    fn commit(&self, state: &mut CatalogState, next: Vec<Product>) -> Result<(), StoreError> {
        // ---
        match self.persist(&next) {
            Ok(()) => {
                state.products = next.clone();
                state.last_error = None;
                self.inner.products_tx.send_replace(next);
                Ok(())
            }
            Err(err) => {
                tracing::error!("Failed to persist catalog: {err}");
                state.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn persist(&self, products: &[Product]) -> Result<(), StoreError> {
        // ---
        let json = serde_json::to_string(products).map_err(StoreError::persistence)?;
        self.inner
            .storage
            .set(PRODUCTS_KEY, &json)
            .map_err(StoreError::persistence)
    }
}
