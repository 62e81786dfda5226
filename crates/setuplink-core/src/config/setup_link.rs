//! Setup link issuance configuration.

use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Settings passed explicitly into the setup link service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupLinkConfig {
    /// Public base URL; links are issued as `{base_url}/setup/{token}`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// How long a freshly issued link stays valid, in days.
    #[serde(default = "default_ttl_days")]
    pub ttl_days: u32,
}

impl SetupLinkConfig {
    /// Link lifetime in milliseconds.
    pub fn ttl_millis(&self) -> i64 {
        i64::from(self.ttl_days) * MILLIS_PER_DAY
    }

    /// Build the shareable URL for `token`.
    pub fn link_url(&self, token: &str) -> String {
        format!("{}/setup/{token}", self.base_url.trim_end_matches('/'))
    }
}

impl Default for SetupLinkConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            ttl_days: default_ttl_days(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5225".to_string()
}

fn default_ttl_days() -> u32 {
    3
}
