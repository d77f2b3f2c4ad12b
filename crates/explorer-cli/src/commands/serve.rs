//! Start the explorer server.

use clap::Args;

use explorer_core::config::StoreBackend;
use explorer_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Apply database migrations before serving
    #[arg(long)]
    pub migrate: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    println!("Starting file explorer...");
    println!("  Host:  {}", config.server.host);
    println!("  Port:  {}", config.server.port);
    println!("  Store: {}", config.store.backend.as_str());

    if args.migrate && config.store.backend == StoreBackend::Postgres {
        super::migrate::apply(&config).await?;
    }

    explorer_api::run_server(config).await
}
