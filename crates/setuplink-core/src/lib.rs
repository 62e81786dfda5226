//! # setuplink-core
//!
//! Core crate for the setup link service. Contains the indexed store trait,
//! configuration schemas, the API response envelope, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other setuplink crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
