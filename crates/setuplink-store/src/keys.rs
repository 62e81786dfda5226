//! Key codec and backend key builders.
//!
//! Composite keys are built from ordered parts; primary keys are digests of
//! composite keys so they have a uniform length and do not expose raw
//! tenant/product names. Centralising key construction makes it easy to find
//! every key the backends touch.

use std::fmt;

use sha2::{Digest, Sha256};

use setuplink_core::traits::store::IndexEntry;

/// Separator placed between composite key parts.
pub const PART_SEPARATOR: &str = ":";

/// Join ordered parts into one deterministic composite key.
pub fn key_from_parts(parts: &[&str]) -> String {
    parts.join(PART_SEPARATOR)
}

/// SHA-256 of a composite key, hex encoded.
pub fn key_digest(composite: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(composite.as_bytes());
    hex::encode(hasher.finalize())
}

/// Secondary indexes recognized by the setup link service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexName {
    /// Lookup by public token.
    SetupToken,
    /// Dedup by (tenant, product, service).
    TenantProductService,
    /// Listing by service.
    Service,
}

impl IndexName {
    /// Stable wire name of the index.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SetupToken => "token",
            Self::TenantProductService => "tenantProductService",
            Self::Service => "service",
        }
    }

    /// Build an entry of this index for `value`.
    pub fn entry(self, value: impl Into<String>) -> IndexEntry {
        IndexEntry::new(self.as_str(), value)
    }
}

impl fmt::Display for IndexName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Backend keys ───────────────────────────────────────────

/// Storage key of a primary record.
pub fn record_key(key: &str) -> String {
    format!("record:{key}")
}

/// Storage key of one secondary index bucket.
pub fn index_key(index: &IndexEntry) -> String {
    format!("idx:{}:{}", index.name, index.value)
}

/// Storage key of the list of index buckets a record is registered in.
pub fn owned_indexes_key(key: &str) -> String {
    format!("owned:{key}")
}
