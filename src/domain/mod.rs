mod models;
mod registry;
mod storage;

// Publicly expose the identity and catalog models
pub use models::{Product, ProductDraft, ProductUpdate, Role, User};

// Publicly expose the credential registry
pub use registry::{CredentialRecord, UserRegistry};

// Publicly expose the persistence abstraction
pub use storage::{Storage, StoragePtr, PRODUCTS_KEY, USER_KEY};
