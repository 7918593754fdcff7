use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role attached to an identity. Serialized lowercase in the durable record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
}

/// A user's public profile. This is the only shape that ever reaches
/// durable storage or the wire; credential material lives in
/// [`CredentialRecord`](super::CredentialRecord) and stays behind the
/// registry boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    // ---
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl User {
    // ---
    pub fn new(username: String, email: String, role: Role) -> Self {
        // ---
        Self {
            id: Uuid::new_v4().to_string(),
            username,
            email,
            role,
        }
    }
}

/// A catalog entry. `id` and `created_at` are assigned exactly once at
/// creation and never change afterwards.
///
/// Field names serialize camelCase (`createdBy`, `createdAt`) so the durable
/// `products` record keeps its layout across versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    // ---
    pub id: String,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub stock: u32,

    /// Identity id of the admin that created this record.
    pub created_by: String,

    /// Creation timestamp, immutable after creation.
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Builds a new record from a draft, assigning a fresh opaque id and
    /// stamping the creation time.
    pub fn from_draft(draft: ProductDraft) -> Self {
        // ---
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            price: draft.price,
            description: draft.description,
            category: draft.category,
            image: draft.image,
            stock: draft.stock,
            created_by: draft.created_by,
            created_at: Utc::now(),
        }
    }

    /// Merges a partial update into this record. `id` and `created_at` are
    /// not part of [`ProductUpdate`] and therefore always preserved.
    pub fn apply(&mut self, update: &ProductUpdate) {
        // ---
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
        if let Some(category) = &update.category {
            self.category = category.clone();
        }
        if let Some(image) = &update.image {
            self.image = image.clone();
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(created_by) = &update.created_by {
            self.created_by = created_by.clone();
        }
    }
}

/// Everything a caller supplies when creating a product. The store fills in
/// `id` and `created_at` itself; price/stock validation is the caller's job.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    // ---
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub stock: u32,
    pub created_by: String,
}

/// Per-field patch for `update`. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    // ---
    pub title: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub stock: Option<u32>,
    pub created_by: Option<String>,
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        // ---
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::to_string(&Role::Customer).unwrap(),
            "\"customer\""
        );
    }

    #[test]
    fn product_serializes_camel_case() {
        // ---
        let product = Product::from_draft(ProductDraft {
            title: "Desk Lamp".into(),
            price: 24.99,
            description: "Adjustable LED lamp".into(),
            category: "home".into(),
            image: "https://example.com/lamp.jpg".into(),
            stock: 12,
            created_by: "1".into(),
        });

        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("\"createdBy\""));
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("created_by"));
    }

    #[test]
    fn apply_preserves_id_and_created_at() {
        // ---
        let mut product = Product::from_draft(ProductDraft {
            title: "Desk Lamp".into(),
            price: 24.99,
            description: String::new(),
            category: "home".into(),
            image: String::new(),
            stock: 12,
            created_by: "1".into(),
        });
        let id = product.id.clone();
        let created_at = product.created_at;

        product.apply(&ProductUpdate {
            title: Some("Floor Lamp".into()),
            price: Some(39.99),
            stock: Some(3),
            ..Default::default()
        });

        assert_eq!(product.id, id);
        assert_eq!(product.created_at, created_at);
        assert_eq!(product.title, "Floor Lamp");
        assert_eq!(product.price, 39.99);
        assert_eq!(product.stock, 3);
        assert_eq!(product.category, "home");
    }
}
