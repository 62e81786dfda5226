//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use setuplink_core::types::response::ApiResponse;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                let table = Table::new(items).to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{}", json);
        }
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{:#?}", item);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

/// Print a service envelope. JSON mode prints the envelope verbatim; table
/// mode renders `data` with `render` or the error on stderr. Returns whether
/// the envelope was free of errors.
pub fn print_envelope<T: Serialize>(
    resp: &ApiResponse<T>,
    format: OutputFormat,
    render: impl FnOnce(&T),
) -> bool {
    if format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(resp).unwrap_or_else(|_| "{}".to_string());
        println!("{}", json);
        return !resp.is_err();
    }

    match (&resp.error, &resp.data) {
        (Some(err), _) => {
            eprintln!("✗ [{}] {}", err.code, err.message);
            false
        }
        (None, Some(data)) => {
            render(data);
            true
        }
        (None, None) => true,
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}
