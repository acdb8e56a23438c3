pub mod config;
pub mod memory_store;
pub mod shared_store;
