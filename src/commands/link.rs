//! Setup link CLI commands.

use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use setuplink_core::config::AppConfig;
use setuplink_core::error::AppError;
use setuplink_entity::setup_link::{CreateSetupLink, SetupLink};

/// Arguments for `create`
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Tenant
    #[arg(long)]
    pub tenant: String,
    /// Product
    #[arg(long)]
    pub product: String,
    /// Service (optional sub-scope)
    #[arg(long, default_value = "")]
    pub service: String,
    /// Issue a new token even if a live link exists
    #[arg(long)]
    pub regenerate: bool,
}

/// Arguments for `get`
#[derive(Debug, Args)]
pub struct GetArgs {
    /// Setup token
    pub token: String,
}

/// Arguments for `list`
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Service
    pub service: String,
}

/// Arguments for `remove`
#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Setup ID
    pub setup_id: String,
}

/// Setup link display row
#[derive(Debug, Serialize, Tabled)]
struct SetupLinkRow {
    /// Setup ID
    setup_id: String,
    /// Tenant
    tenant: String,
    /// Product
    product: String,
    /// Service
    service: String,
    /// Valid till
    valid_till: String,
    /// URL
    url: String,
}

impl From<&SetupLink> for SetupLinkRow {
    fn from(link: &SetupLink) -> Self {
        let valid_till = DateTime::<Utc>::from_timestamp_millis(link.valid_till)
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| link.valid_till.to_string());

        Self {
            setup_id: link.setup_id.chars().take(12).collect(),
            tenant: link.tenant.clone(),
            product: link.product.clone(),
            service: link.service.clone(),
            valid_till,
            url: link.url.clone(),
        }
    }
}

/// Execute `create`
pub async fn create(
    args: &CreateArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<bool, AppError> {
    let service = super::build_service(config).await?;
    let resp = service
        .create(CreateSetupLink::new(
            &args.tenant,
            &args.product,
            &args.service,
            args.regenerate,
        ))
        .await?;

    Ok(output::print_envelope(&resp, format, |link| {
        output::print_list(&[SetupLinkRow::from(link)], OutputFormat::Table)
    }))
}

/// Execute `get`
pub async fn get(args: &GetArgs, config: &AppConfig, format: OutputFormat) -> Result<bool, AppError> {
    super::warn_if_ephemeral(config);
    let service = super::build_service(config).await?;
    let resp = service.get_by_token(&args.token).await?;

    Ok(output::print_envelope(&resp, format, |link| {
        output::print_list(&[SetupLinkRow::from(link)], OutputFormat::Table)
    }))
}

/// Execute `list`
pub async fn list(
    args: &ListArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<bool, AppError> {
    super::warn_if_ephemeral(config);
    let service = super::build_service(config).await?;
    let resp = service.get_by_service(&args.service).await?;

    Ok(output::print_envelope(&resp, format, |links| {
        let rows: Vec<SetupLinkRow> = links.iter().map(SetupLinkRow::from).collect();
        output::print_list(&rows, OutputFormat::Table)
    }))
}

/// Execute `remove`
pub async fn remove(
    args: &RemoveArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<bool, AppError> {
    super::warn_if_ephemeral(config);
    let service = super::build_service(config).await?;
    let resp = service.remove(&args.setup_id).await?;

    Ok(output::print_envelope(&resp, format, |_| {
        output::print_success(&format!("Removed setup link {}", args.setup_id))
    }))
}
