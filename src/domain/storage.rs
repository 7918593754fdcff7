use anyhow::Result;
use std::sync::Arc;

/// Durable key for the serialized session identity.
pub const USER_KEY: &str = "user";

/// Durable key for the serialized product collection.
pub const PRODUCTS_KEY: &str = "products";

/// Abstraction for durable key-value persistence.
///
/// Synchronous, single-origin, string-keyed. No expiry, no size guarantees,
/// and no atomicity across keys; the stores never assume transactional
/// multi-key writes.
pub trait Storage: Send + Sync {
    // ---
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value under `key`. Absent keys are not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Type alias for any backend that implements Storage.
pub type StoragePtr = Arc<dyn Storage>;
