//! Search command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use explorer_core::error::AppError;
use explorer_entity::SearchResults;

/// Arguments for the search command
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to match against folder names and paths, file names and types
    pub query: String,

    /// Page number (1-based)
    #[arg(short, long)]
    pub page: Option<u64>,

    /// Items per page, applied to folders and files separately
    #[arg(short, long)]
    pub limit: Option<u64>,
}

/// Search result row
#[derive(Debug, Serialize, Tabled)]
struct MatchRow {
    kind: &'static str,
    name: String,
    detail: String,
    id: String,
}

fn rows(results: &SearchResults) -> Vec<MatchRow> {
    let folders = results.folders.iter().map(|f| MatchRow {
        kind: "folder",
        name: f.name.clone(),
        detail: f.path.clone(),
        id: f.id.to_string(),
    });
    let files = results.files.iter().map(|f| MatchRow {
        kind: "file",
        name: f.name.clone(),
        detail: format!("{}, {}", f.file_type, output::format_size(f.size)),
        id: f.id.to_string(),
    });
    folders.chain(files).collect()
}

/// Execute the search command
pub async fn execute(
    args: &SearchArgs,
    config_path: &str,
    server: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let explorer = crate::source::open(config, server).await?;
    let results = explorer.search(&args.query, args.page, args.limit).await?;

    if format == OutputFormat::Json {
        output::print_item(&results, format);
        return Ok(());
    }

    output::print_list(&rows(&results), format);
    let pagination = &results.pagination;
    output::print_kv(
        "Page",
        &format!("{} of {}", pagination.page, pagination.total_pages),
    );
    output::print_kv("Total matches", &pagination.total.to_string());
    Ok(())
}
