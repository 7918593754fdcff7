use anyhow::Result;
use std::env;
use storefront_core::create_router;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load a local .env if present, then initialize tracing to stdout
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let app = create_router()?;

    // Get optional bind endpoint from environment
    let endpoint = env::var("API_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    info!("Starting at endpoint:{}", endpoint);
    info!(
        "Starting Storefront API server v{}...",
        env!("CARGO_PKG_VERSION")
    );

    let listener = tokio::net::TcpListener::bind(&endpoint).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
