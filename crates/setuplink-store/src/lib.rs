//! # setuplink-store
//!
//! Key derivation and indexed store backends. Supports two providers:
//!
//! - **memory**: In-process store using [dashmap](https://crates.io/crates/dashmap)
//! - **redis**: Redis-backed store using the [redis](https://crates.io/crates/redis) crate
//!
//! The provider is selected at runtime based on configuration.

pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use keys::IndexName;
pub use provider::StoreManager;
