// Gateway module - controls public API for handlers
// Modules are private, only exported symbols are public

mod health;
mod products;
mod root;
mod shared_types;

// Core handlers
pub use health::health_check;
pub use root::root_handler;

// Catalog read handlers
pub use products::{get_product, list_products};
