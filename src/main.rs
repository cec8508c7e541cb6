use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use libris::{api, config::ServerConfig, store::BookStore};

#[derive(Parser)]
#[command(name = "libris")]
#[command(about = "Flat-file book catalog HTTP service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the catalog server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Path of the catalog file (defaults to the platform data directory)
        #[arg(short, long)]
        data_file: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "libris=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let (port, data_file) = match cli.command {
        Some(Commands::Serve { port, data_file }) => (port, data_file),
        None => (ServerConfig::DEFAULT_PORT, None),
    };

    let config = ServerConfig::resolve(port, data_file)?;
    serve(config).await
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting libris server on port {}", config.port);

    let store = BookStore::open(&config.data_file)?;
    let app = api::create_router(store);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", config.port)).await?;
    tracing::info!(
        "Book catalog server listening on http://127.0.0.1:{}",
        config.port
    );

    axum::serve(listener, app).await?;
    Ok(())
}
