//! Setup link lifecycle service.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use setuplink_core::config::setup_link::SetupLinkConfig;
use setuplink_core::error::AppError;
use setuplink_core::result::AppResult;
use setuplink_core::traits::store::IndexedStore;
use setuplink_core::types::response::ApiResponse;
use setuplink_entity::setup_link::{CreateSetupLink, SetupLink};
use setuplink_store::keys::{self, IndexName};

use super::token::TokenService;

/// Issues and resolves setup links.
///
/// Every operation returns `Ok(ApiResponse)` for expected outcomes,
/// including validation, not-found and expiry failures. `Err` is reserved
/// for store faults, which the caller decides whether to retry.
///
/// `create` is check-then-write: two concurrent calls for the same
/// (tenant, product, service) may both issue a token, and the later write
/// wins at the shared primary key. Callers that need one token per tuple
/// must serialize creation themselves.
#[derive(Debug, Clone)]
pub struct SetupLinkService {
    /// Backing indexed store.
    store: Arc<dyn IndexedStore>,
    /// Base URL and TTL.
    config: SetupLinkConfig,
    /// Token generator.
    tokens: TokenService,
}

impl SetupLinkService {
    /// Creates a new setup link service.
    pub fn new(store: Arc<dyn IndexedStore>, config: SetupLinkConfig) -> Self {
        Self {
            store,
            config,
            tokens: TokenService::new(),
        }
    }

    /// Issues a link for the payload's scope, reusing a live one unless
    /// `regenerate` is set.
    pub async fn create(&self, payload: CreateSetupLink) -> AppResult<ApiResponse<SetupLink>> {
        let CreateSetupLink {
            tenant,
            product,
            service,
            regenerate,
        } = payload;

        if let Err(err) = validate_scope(&tenant, &product, &service) {
            return Ok(ApiResponse::fail(err));
        }

        let composite = keys::key_from_parts(&[&tenant, &product, &service]);
        let setup_id = keys::key_digest(&composite);
        let now = Utc::now().timestamp_millis();

        let existing: Vec<SetupLink> = self
            .store
            .get_by_index_json(&IndexName::TenantProductService.entry(composite.as_str()))
            .await?;

        if let Some(current) = existing.into_iter().next() {
            let same_scope = current.tenant == tenant
                && current.product == product
                && current.service == service;
            if !regenerate && same_scope && current.is_live_at(now) {
                debug!(setup_id = %current.setup_id, "Reusing live setup link");
                return Ok(ApiResponse::ok(current));
            }
        }

        let token = self.tokens.generate_token();
        let link = SetupLink {
            setup_id: setup_id.clone(),
            tenant,
            product,
            service,
            url: self.config.link_url(&token),
            token,
            valid_till: now + self.config.ttl_millis(),
        };

        self.store
            .put_json(
                &setup_id,
                &link,
                &[
                    IndexName::SetupToken.entry(link.token.as_str()),
                    IndexName::TenantProductService.entry(composite),
                    IndexName::Service.entry(link.service.as_str()),
                ],
            )
            .await?;

        info!(
            setup_id = %link.setup_id,
            tenant = %link.tenant,
            product = %link.product,
            service = %link.service,
            regenerate,
            valid_till = link.valid_till,
            "Setup link issued"
        );

        Ok(ApiResponse::ok(link))
    }

    /// Resolves a link by its public token, rejecting expired links.
    pub async fn get_by_token(&self, token: &str) -> AppResult<ApiResponse<SetupLink>> {
        if token.is_empty() {
            return Ok(ApiResponse::fail(AppError::not_found("Invalid setup token")));
        }

        let matches: Vec<SetupLink> = self
            .store
            .get_by_index_json(&IndexName::SetupToken.entry(token))
            .await?;

        let Some(link) = matches.into_iter().find(|link| link.token == token) else {
            debug!("Setup link lookup missed");
            return Ok(ApiResponse::fail(AppError::not_found("Link not found!")));
        };

        if link.is_expired_at(Utc::now().timestamp_millis()) {
            warn!(setup_id = %link.setup_id, "Expired setup link presented");
            return Ok(ApiResponse::fail(AppError::expired("Link is expired!")));
        }

        Ok(ApiResponse::ok(link))
    }

    /// Lists every link for a service, live or expired.
    pub async fn get_by_service(&self, service: &str) -> AppResult<ApiResponse<Vec<SetupLink>>> {
        if service.is_empty() {
            return Ok(ApiResponse::ok(Vec::new()));
        }

        let links: Vec<SetupLink> = self
            .store
            .get_by_index_json(&IndexName::Service.entry(service))
            .await?;

        debug!(service, count = links.len(), "Listed setup links");
        Ok(ApiResponse::ok(links))
    }

    /// Deletes a link by its setup ID. Unknown IDs succeed.
    pub async fn remove(&self, key: &str) -> AppResult<ApiResponse<bool>> {
        if key.is_empty() {
            return Ok(ApiResponse::fail_with(
                false,
                AppError::validation("Invalid setup key sent!"),
            ));
        }

        self.store.delete(key).await?;
        info!(setup_id = %key, "Setup link removed");
        Ok(ApiResponse::ok(true))
    }

    /// Listing every link is not supported.
    pub async fn get_all(&self) -> AppResult<ApiResponse<Vec<SetupLink>>> {
        Ok(ApiResponse::fail(AppError::not_implemented(
            "Method not implemented.",
        )))
    }
}

/// Tenant and product must both be present, and no part may contain the
/// composite key separator.
fn validate_scope(tenant: &str, product: &str, service: &str) -> Result<(), AppError> {
    if tenant.trim().is_empty() {
        return Err(AppError::validation("Please provide tenant"));
    }
    if product.trim().is_empty() {
        return Err(AppError::validation("Please provide product"));
    }
    if [tenant, product, service]
        .iter()
        .any(|part| part.contains(keys::PART_SEPARATOR))
    {
        return Err(AppError::validation(format!(
            "tenant, product and service must not contain '{}'",
            keys::PART_SEPARATOR
        )));
    }
    Ok(())
}
