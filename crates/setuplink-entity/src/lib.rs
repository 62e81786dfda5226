//! # setuplink-entity
//!
//! Domain entities persisted by the setup link service.

pub mod setup_link;

pub use setup_link::{CreateSetupLink, SetupLink};
