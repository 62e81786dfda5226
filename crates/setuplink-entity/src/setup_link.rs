//! Setup link entity model.

use serde::{Deserialize, Serialize};

/// A time-bounded, token-authenticated link that lets an external party
/// configure an identity provider for a tenant/product (and optional service).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupLink {
    /// Primary key: digest of (tenant, product, service).
    #[serde(rename = "setupID")]
    pub setup_id: String,
    /// Owning tenant.
    pub tenant: String,
    /// Owning product.
    pub product: String,
    /// Optional sub-scope; empty when absent.
    #[serde(default)]
    pub service: String,
    /// Public secret embedded in the URL.
    pub token: String,
    /// Expiry as epoch milliseconds.
    pub valid_till: i64,
    /// Shareable URL.
    pub url: String,
}

impl SetupLink {
    /// Whether the link has expired at `now_ms`.
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        self.valid_till <= now_ms
    }

    /// Whether the link is still usable at `now_ms`.
    pub fn is_live_at(&self, now_ms: i64) -> bool {
        !self.is_expired_at(now_ms)
    }
}

/// Payload for issuing a setup link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSetupLink {
    /// Owning tenant.
    pub tenant: String,
    /// Owning product.
    pub product: String,
    /// Optional sub-scope.
    #[serde(default)]
    pub service: String,
    /// Issue a fresh token even if a live link exists.
    #[serde(default)]
    pub regenerate: bool,
}

impl CreateSetupLink {
    /// Build a payload.
    pub fn new(
        tenant: impl Into<String>,
        product: impl Into<String>,
        service: impl Into<String>,
        regenerate: bool,
    ) -> Self {
        Self {
            tenant: tenant.into(),
            product: product.into(),
            service: service.into(),
            regenerate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(valid_till: i64) -> SetupLink {
        SetupLink {
            setup_id: "id".to_string(),
            tenant: "acme".to_string(),
            product: "crm".to_string(),
            service: String::new(),
            token: "tok".to_string(),
            valid_till,
            url: "http://localhost/setup/tok".to_string(),
        }
    }

    #[test]
    fn test_expiry_boundary() {
        let now = 1_700_000_000_000;
        assert!(link(now - 1).is_expired_at(now));
        assert!(link(now).is_expired_at(now));
        assert!(link(now + 1).is_live_at(now));
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(link(42)).unwrap();
        assert_eq!(json["setupID"], "id");
        assert_eq!(json["validTill"], 42);
        assert!(json.get("setup_id").is_none());
    }
}
