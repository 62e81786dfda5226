//! Configuration inspection command.

use crate::output::{self, OutputFormat};
use setuplink_core::config::AppConfig;
use setuplink_core::error::AppError;

/// Print the effective configuration
pub fn execute(config: &AppConfig, format: OutputFormat) -> Result<bool, AppError> {
    output::print_item(config, format);
    Ok(true)
}
