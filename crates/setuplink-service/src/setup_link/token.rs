//! Setup link token generation.

use rand::RngCore;
use rand::rngs::OsRng;

/// Number of random bytes behind each token.
pub const TOKEN_BYTES: usize = 24;

/// Generates setup link tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenService;

impl TokenService {
    /// Creates a new token service.
    pub fn new() -> Self {
        Self
    }

    /// Generates a cryptographically secure random token, hex encoded.
    pub fn generate_token(&self) -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}
