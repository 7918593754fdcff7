// Test helpers are intentionally partially used
#![allow(dead_code)]

use reqwest::Client;
use std::sync::Once;
use std::time::Duration;
use storefront_core::create_router;
use tokio::net::TcpListener;
use tokio::time::sleep;

macro_rules! set_env_if_unset {
    // ---
    ($key:expr, $val:expr) => {
        if std::env::var($key).is_err() {
            std::env::set_var($key, $val);
        }
    };
}

static INIT: Once = Once::new();

// ============================================================================
// Test Setup
// ============================================================================

/// Initialize test environment variables once
pub fn setup_test_env() {
    // ---
    INIT.call_once(|| {
        // ---
        // Memory storage and a fast clock so tests never touch the
        // filesystem or wait on simulated latency
        std::env::remove_var("STOREFRONT_STORAGE_PATH");
        set_env_if_unset!("STOREFRONT_REQUEST_LATENCY_MS", "0");
        set_env_if_unset!("STOREFRONT_SESSION_TTL_SEC", "1800");
    });
}

pub struct TestServer {
    pub addr: std::net::SocketAddr,
    pub client: Client,
}

impl TestServer {
    // ---
    pub async fn new() -> Self {
        // --
        setup_test_env();

        let app = create_router().expect("Should be able to create router");
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Spawn the server in the background
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start
        sleep(Duration::from_millis(100)).await;

        let client = Client::new();

        Self { addr, client }
    }

    pub fn url(&self, path: &str) -> String {
        // ---
        format!("http://{}{}", self.addr, path)
    }
}
