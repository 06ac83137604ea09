// src/storage/mod.rs
//
// Storage layer - key/value persistence gateway
//
// PRINCIPLES:
// - One abstraction (StorageGateway) over all persistence
// - Values are opaque text; decoding is the caller's explicit step
// - No hidden writes inside reads
// - Clear error propagation

pub mod file_store;
pub mod gateway;
pub mod memory;

pub use file_store::{get_storage_dir, FileStorage};
pub use gateway::{keys, StorageGateway};
pub use memory::MemoryStorage;
