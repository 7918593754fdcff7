use axum::response::IntoResponse;

pub async fn root_handler() -> impl IntoResponse {
    let version = env!("CARGO_PKG_VERSION");
    format!(
        r#"Welcome to the Storefront API 👋
Version: {version}

Available endpoints:
  - GET    /products        - List the full product catalog
  - GET    /products/{{id}}   - Fetch a product by ID
  - GET    /health          - Light health check
  - GET    /health?mode=full - Full health check (includes catalog load status)

This placeholder server is read-only: authentication and catalog writes happen
locally through the session and catalog stores, not over HTTP.
"#
    )
}
