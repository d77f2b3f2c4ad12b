//! CLI command definitions and dispatch.

pub mod folder;
pub mod migrate;
pub mod search;
pub mod seed;
pub mod serve;
pub mod tree;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use explorer_core::config::AppConfig;
use explorer_core::error::AppError;

/// File explorer: browse a folder hierarchy and its files
#[derive(Debug, Parser)]
#[command(name = "explorer-cli", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Browse a running server (e.g. http://localhost:3001) instead of
    /// opening the configured store
    #[arg(short, long, global = true)]
    pub server: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the explorer server
    Serve(serve::ServeArgs),
    /// Apply database migrations
    Migrate,
    /// Replace the store contents with the sample hierarchy
    Seed,
    /// Print the folder tree
    Tree,
    /// Folder listings
    Folder(folder::FolderArgs),
    /// Search folders and files
    Search(search::SearchArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let server = self.server.as_deref();
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate => migrate::execute(&self.config).await,
            Commands::Seed => seed::execute(&self.config).await,
            Commands::Tree => tree::execute(&self.config, server, self.format).await,
            Commands::Folder(args) => folder::execute(args, &self.config, server, self.format).await,
            Commands::Search(args) => search::execute(args, &self.config, server, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_folder_list() {
        let cli = Cli::try_parse_from(["explorer-cli", "--format", "json", "folder", "list", "--parent", "root"])
            .expect("parse");
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Folder(args) => match args.command {
                folder::FolderCommand::List { parent } => assert_eq!(parent.as_deref(), Some("root")),
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_search_with_server() {
        let cli = Cli::try_parse_from([
            "explorer-cli",
            "search",
            "docs",
            "--limit",
            "5",
            "--server",
            "http://localhost:3001",
        ])
        .expect("parse");
        assert_eq!(cli.server.as_deref(), Some("http://localhost:3001"));
        match cli.command {
            Commands::Search(args) => {
                assert_eq!(args.query, "docs");
                assert_eq!(args.page, None);
                assert_eq!(args.limit, Some(5));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
