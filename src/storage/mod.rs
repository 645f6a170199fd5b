//! Local persistence: string key-value stores and the JSON list adapter on top.

mod adapter;
mod kv;

pub use adapter::StorageAdapter;
pub use kv::{FileStore, KeyValueStore, MemoryStore, Result, StorageError};
