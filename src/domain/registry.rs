use std::fmt;

use super::{Role, User};

/// An identity plus its password, used only for verification inside the
/// session store. Never serialized; `Debug` redacts the password so the
/// credential cannot leak into logs.
#[derive(Clone)]
pub struct CredentialRecord {
    // ---
    user: User,
    password: String,
}

impl CredentialRecord {
    // ---
    pub fn new(user: User, password: String) -> Self {
        // ---
        Self { user, password }
    }

    /// The identity half of this record, safe to expose and persist.
    pub fn identity(&self) -> &User {
        // ---
        &self.user
    }

    /// Exact, case-sensitive password comparison.
    pub fn verify(&self, password: &str) -> bool {
        // ---
        self.password == password
    }
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // ---
        f.debug_struct("CredentialRecord")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Owned registry of credential records.
///
/// Each [`SessionStore`](crate::SessionStore) holds its own registry rather
/// than sharing process-global state, so tests (and any second store
/// instance) start from a known set of accounts. The registry is in-memory
/// only: accounts added through signup do not survive a restart.
#[derive(Debug, Default)]
pub struct UserRegistry {
    // ---
    records: Vec<CredentialRecord>,
}

impl UserRegistry {
    /// Empty registry; every lookup fails until records are added.
    pub fn new() -> Self {
        // ---
        Self::default()
    }

    /// Registry seeded with the two fixed demo accounts.
    pub fn with_demo_users() -> Self {
        // ---
        let mut registry = Self::new();
        registry.register(CredentialRecord::new(
            User {
                id: "1".to_string(),
                username: "admin".to_string(),
                email: "admin@example.com".to_string(),
                role: Role::Admin,
            },
            "admin123".to_string(),
        ));
        registry.register(CredentialRecord::new(
            User {
                id: "2".to_string(),
                username: "customer".to_string(),
                email: "customer@example.com".to_string(),
                role: Role::Customer,
            },
            "customer123".to_string(),
        ));
        registry
    }

    /// Exact email match, case-sensitive, no normalization.
    pub fn find_by_email(&self, email: &str) -> Option<&CredentialRecord> {
        // ---
        self.records.iter().find(|r| r.user.email == email)
    }

    pub fn contains_email(&self, email: &str) -> bool {
        // ---
        self.records.iter().any(|r| r.user.email == email)
    }

    pub fn register(&mut self, record: CredentialRecord) {
        // ---
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        // ---
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        // ---
        self.records.is_empty()
    }
}
