use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use keygate::config;

#[derive(Parser)]
#[command(name = "keygate", about = "Minimal authentication backend", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default keygate.toml in the current directory
    Init,
    /// Create the database schema
    Migrate,
    /// Run the HTTP API server
    Serve {
        /// Bind host, overriding the config file
        #[arg(long)]
        host: Option<String>,

        /// Bind port, overriding the config file
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "keygate=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            let path = Path::new("keygate.toml");
            config::write_default_config(path)?;
            tracing::info!("Wrote {}", path.display());
        }
        Commands::Migrate => {
            let config = config::load_config()?;
            if config.database.url.is_empty() {
                anyhow::bail!("database.url is empty; set DATABASE_URL or edit keygate.toml");
            }
            let store = keygate::Store::connect(&config.database).await?;
            store.migrate().await?;
            tracing::info!("Database schema is up to date");
        }
        Commands::Serve { host, port } => {
            let mut config = config::load_config()?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            keygate::api::run_server(config).await?;
        }
    }

    Ok(())
}
