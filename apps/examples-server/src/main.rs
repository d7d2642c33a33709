use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sea_orm::Database;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod examples;

use config::AppConfig;
use examples::{build_router, ExampleKind};

/// HTTP CRUD examples on axum and SeaORM
#[derive(Parser)]
#[command(name = "examples-server")]
#[command(about = "Serves one of the CRUD examples (crud, tx or list)")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Which example to serve
    #[arg(short, long, value_enum, default_value = "crud")]
    example: ExampleKind,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Print the effective configuration and exit
    PrintConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::PrintConfig => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        Commands::Run => {
            init_tracing(&config.log.level, cli.verbose);
            run(cli.example, config).await
        }
    }
}

fn init_tracing(level: &str, verbose: u8) {
    let level = match verbose {
        0 => level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG still wins when set explicitly.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(example: ExampleKind, config: AppConfig) -> Result<()> {
    let db = Database::connect(&config.database.url)
        .await
        .with_context(|| format!("connecting to {}", config.database.url))?;

    let app = build_router(example, db)
        .await?
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!(%addr, ?example, "Serving example");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    // Errors installing the handler leave the server running without
    // graceful shutdown, which is still the better option.
    let _ = tokio::signal::ctrl_c().await;
}
