//! Shared test helpers for integration tests.

use std::sync::Arc;

use setuplink_core::config::AppConfig;
use setuplink_core::traits::store::IndexedStore;
use setuplink_entity::setup_link::SetupLink;
use setuplink_service::SetupLinkService;
use setuplink_store::StoreManager;
use setuplink_store::keys::{self, IndexName};

/// Test application context
pub struct TestApp {
    /// The service under test
    pub service: SetupLinkService,
    /// Direct handle on the backing store
    pub store: Arc<dyn IndexedStore>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application on a fresh in-memory store
    pub async fn new() -> Self {
        Self::with_config(AppConfig::default()).await
    }

    /// Create a test application on the Redis server named by `REDIS_URL`,
    /// under a key prefix unique to this call. `None` when unset.
    #[allow(dead_code)]
    pub async fn redis(name: &str) -> Option<Self> {
        let url = std::env::var("REDIS_URL").ok()?;
        let mut config = AppConfig::default();
        config.store.provider = "redis".to_string();
        config.store.redis.url = url;
        config.store.redis.key_prefix = format!(
            "setuplink-it:{}:{}:{name}:",
            std::process::id(),
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        );
        Some(Self::with_config(config).await)
    }

    async fn with_config(mut config: AppConfig) -> Self {
        config.setup_link.base_url = "https://sso.example.test".to_string();

        let store = StoreManager::new(&config.store)
            .await
            .expect("Failed to init store")
            .store();
        let service = SetupLinkService::new(store.clone(), config.setup_link.clone());

        Self {
            service,
            store,
            config,
        }
    }

    /// Write a link straight into the store with the same indexes the
    /// service maintains
    pub async fn seed(&self, link: &SetupLink) {
        let composite = keys::key_from_parts(&[&link.tenant, &link.product, &link.service]);
        self.store
            .put_json(
                &link.setup_id,
                link,
                &[
                    IndexName::SetupToken.entry(link.token.as_str()),
                    IndexName::TenantProductService.entry(composite),
                    IndexName::Service.entry(link.service.as_str()),
                ],
            )
            .await
            .expect("Failed to seed link");
    }
}

/// Current time in epoch milliseconds
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
