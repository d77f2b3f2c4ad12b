//! Folder listing commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use explorer_api::extractors::path::parse_folder_ref;
use explorer_core::error::AppError;
use explorer_entity::{File, FolderWithStats};

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// List the folders and files inside a folder
    List {
        /// Parent folder ID, or `root` (default) for the top level
        #[arg(short, long)]
        parent: Option<String>,
    },
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
pub struct FolderRow {
    name: String,
    path: String,
    folders: u64,
    files: u64,
    id: String,
}

impl From<&FolderWithStats> for FolderRow {
    fn from(f: &FolderWithStats) -> Self {
        Self {
            name: f.folder.name.clone(),
            path: f.folder.path.clone(),
            folders: f.count.children,
            files: f.count.files,
            id: f.folder.id.to_string(),
        }
    }
}

/// File display row
#[derive(Debug, Serialize, Tabled)]
pub struct FileRow {
    name: String,
    #[tabled(rename = "type")]
    #[serde(rename = "type")]
    file_type: String,
    size: String,
    modified: String,
}

impl From<&File> for FileRow {
    fn from(f: &File) -> Self {
        Self {
            name: f.name.clone(),
            file_type: f.file_type.clone(),
            size: output::format_size(f.size),
            modified: f.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute folder commands
pub async fn execute(
    args: &FolderArgs,
    config_path: &str,
    server: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        FolderCommand::List { parent } => {
            let folder_id = parse_folder_ref(parent.as_deref().unwrap_or("root"))?;

            let config = super::load_config(config_path)?;
            let explorer = crate::source::open(config, server).await?;
            let contents = explorer.get_folder_contents(folder_id).await?;

            if format == OutputFormat::Json {
                output::print_item(&contents, format);
                return Ok(());
            }

            let location = contents
                .current_folder
                .as_ref()
                .map_or("/", |f| f.path.as_str());
            output::print_kv("Location", location);

            let folders: Vec<FolderRow> = contents.folders.iter().map(FolderRow::from).collect();
            output::print_list(&folders, format);

            if !contents.files.is_empty() {
                let files: Vec<FileRow> = contents.files.iter().map(FileRow::from).collect();
                output::print_list(&files, format);
            }
        }
    }

    Ok(())
}
