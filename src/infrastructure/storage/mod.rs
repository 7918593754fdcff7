mod file;
mod memory;

pub use file::create_file_storage;
pub use memory::create_memory_storage;
