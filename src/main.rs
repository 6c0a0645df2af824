use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use order_documents::config::Config;
use order_documents::documents::{DocumentService, StoreSnapshot};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "order-documents",
    version,
    about = "Render invoice and packing slip data for orders"
)]
struct Cli {
    /// YAML settings file; environment variables are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the full document view as JSON
    View {
        /// Store snapshot with orders and tax rates (YAML or JSON)
        #[arg(long)]
        fixture: PathBuf,
        #[arg(long)]
        order: i64,
    },
    /// Print only the totals table as JSON
    Totals {
        #[arg(long)]
        fixture: PathBuf,
        #[arg(long)]
        order: i64,
    },
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("order_documents={}", config.app.log_level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.app.log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::from_yaml_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Config::from_env().context("Failed to load configuration")?,
    };
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config);
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Platform generation: {}", config.platform);

    let (fixture, order_id) = match &cli.command {
        Command::View { fixture, order } | Command::Totals { fixture, order } => (fixture, *order),
    };

    let snapshot = StoreSnapshot::from_path(fixture)
        .with_context(|| format!("Failed to read store snapshot {}", fixture.display()))?;
    let service = DocumentService::from_snapshot(
        snapshot,
        config.platform.adapter(),
        config.document.clone(),
    );
    let document = service.document_for(order_id).await?;

    let output = match cli.command {
        Command::View { .. } => serde_json::to_string_pretty(&document.view().await?)?,
        Command::Totals { .. } => serde_json::to_string_pretty(&document.aggregate_totals())?,
    };
    println!("{}", output);

    tracing::info!(order_id, "Document rendered");
    Ok(())
}
