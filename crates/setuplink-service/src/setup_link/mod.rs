//! Setup link management — issue, look up, list, and remove links.

pub mod service;
pub mod token;

pub use service::SetupLinkService;
pub use token::TokenService;
