use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::domain::Product;
use crate::handlers::shared_types::ApiResponse;
use crate::AppState;

/// Handler for listing the full catalog (GET /products).
///
/// Responds with `200 OK` and the ordered product collection as JSON. The
/// collection is whatever the catalog store currently holds; an unreadable
/// durable copy surfaces here as an empty list, not an error.
#[tracing::instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
) -> (StatusCode, ApiResponse<Vec<Product>>) {
    // ---
    let products = state.catalog().products();

    (StatusCode::OK, ApiResponse { data: products })
}

/// Handler for fetching a single product by ID (GET /products/{id}).
///
/// - If the product exists, responds with `200 OK` and the full record.
/// - If it does not, responds with `404 Not Found` and an empty body.
#[tracing::instrument(skip(state, id))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, ApiResponse<Product>), StatusCode> {
    // ---
    let product = state.catalog().find(&id).ok_or(StatusCode::NOT_FOUND)?;

    Ok((StatusCode::OK, ApiResponse { data: product }))
}
