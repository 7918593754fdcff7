//! Fixed demo catalog used to seed a fresh store.
//!
//! The catalog store writes this set durably the first time it loads with no
//! prior `products` key; after that the durable copy is authoritative and
//! this set is never consulted again.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::Product;

/// Identity id of the demo admin account that owns the seed records.
const SEED_ADMIN_ID: &str = "1";

fn seed_time(day: u32) -> DateTime<Utc> {
    // ---
    Utc.with_ymd_and_hms(2024, 1, day, 9, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// The default product set. Ids and timestamps are fixed so seeding is
/// deterministic and the persisted copy round-trips verbatim.
pub fn demo_products() -> Vec<Product> {
    // ---
    vec![
        Product {
            id: "p-1001".to_string(),
            title: "Wireless Headphones".to_string(),
            price: 129.99,
            description: "Over-ear Bluetooth headphones with active noise cancellation and a 30-hour battery.".to_string(),
            category: "electronics".to_string(),
            image: "https://images.example.com/products/wireless-headphones.jpg".to_string(),
            stock: 25,
            created_by: SEED_ADMIN_ID.to_string(),
            created_at: seed_time(2),
        },
        Product {
            id: "p-1002".to_string(),
            title: "Smart Watch".to_string(),
            price: 199.0,
            description: "Fitness tracking, heart-rate monitoring, and week-long battery life.".to_string(),
            category: "electronics".to_string(),
            image: "https://images.example.com/products/smart-watch.jpg".to_string(),
            stock: 18,
            created_by: SEED_ADMIN_ID.to_string(),
            created_at: seed_time(3),
        },
        Product {
            id: "p-1003".to_string(),
            title: "Canvas Backpack".to_string(),
            price: 59.5,
            description: "Water-resistant 25L backpack with a padded laptop sleeve.".to_string(),
            category: "accessories".to_string(),
            image: "https://images.example.com/products/canvas-backpack.jpg".to_string(),
            stock: 40,
            created_by: SEED_ADMIN_ID.to_string(),
            created_at: seed_time(5),
        },
        Product {
            id: "p-1004".to_string(),
            title: "Ceramic Pour-Over Set".to_string(),
            price: 34.95,
            description: "Dripper, carafe, and reusable filter for slow-brewed coffee.".to_string(),
            category: "home".to_string(),
            image: "https://images.example.com/products/pour-over-set.jpg".to_string(),
            stock: 12,
            created_by: SEED_ADMIN_ID.to_string(),
            created_at: seed_time(8),
        },
        Product {
            id: "p-1005".to_string(),
            title: "Mechanical Keyboard".to_string(),
            price: 89.99,
            description: "Tenkeyless board with hot-swappable switches and PBT keycaps.".to_string(),
            category: "electronics".to_string(),
            image: "https://images.example.com/products/mechanical-keyboard.jpg".to_string(),
            stock: 0,
            created_by: SEED_ADMIN_ID.to_string(),
            created_at: seed_time(11),
        },
        Product {
            id: "p-1006".to_string(),
            title: "Linen Throw Blanket".to_string(),
            price: 45.0,
            description: "Stonewashed linen blanket, 130x170cm.".to_string(),
            category: "home".to_string(),
            image: "https://images.example.com/products/linen-throw.jpg".to_string(),
            stock: 7,
            created_by: SEED_ADMIN_ID.to_string(),
            created_at: seed_time(14),
        },
    ]
}
