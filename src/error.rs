use thiserror::Error;

/// Recoverable failures reported by the session and catalog stores.
///
/// Every variant is local to the operation that produced it: the store
/// reports it to the caller, records it as `last_error`, and leaves prior
/// state (previous session, previous catalog) intact. Nothing here is
/// process-fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No credential record matches the given email/password pair.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Signup attempted with an email already present in the registry.
    #[error("User with this email already exists")]
    EmailAlreadyRegistered,

    /// The durable catalog value exists but could not be deserialized, or
    /// the storage read itself failed. Callers treat this as an empty
    /// catalog rather than crashing.
    #[error("Failed to load products: {0}")]
    CatalogLoad(String),

    /// The durable medium rejected a write (quota exceeded, I/O failure).
    #[error("Failed to write to storage: {0}")]
    PersistenceWrite(String),
}

impl StoreError {
    pub(crate) fn catalog_load(err: impl std::fmt::Display) -> Self {
        // ---
        Self::CatalogLoad(err.to_string())
    }

    pub(crate) fn persistence(err: impl std::fmt::Display) -> Self {
        // ---
        Self::PersistenceWrite(err.to_string())
    }
}
