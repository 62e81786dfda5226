//! In-memory indexed store.

pub mod store;

pub use store::MemoryIndexedStore;
