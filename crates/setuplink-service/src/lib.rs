//! # setuplink-service
//!
//! Business logic for setup links. The service orchestrates the key codec
//! and the indexed store to issue, look up, list, and delete links.
//!
//! Services follow constructor injection; the store is provided as an
//! `Arc<dyn IndexedStore>` at construction time.

pub mod setup_link;

pub use setup_link::{SetupLinkService, TokenService};
