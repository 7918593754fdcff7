mod storage;

// Re-export the factory functions for easy access
pub use storage::{create_file_storage, create_memory_storage};
