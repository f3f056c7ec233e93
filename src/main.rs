//! Biblioteca - Digital Library Management System
//!
//! An interactive terminal menu over three JSON snapshot files.

use std::fs;
use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblioteca::{
    cli::{Cli, MenuSession},
    config::AppConfig,
    repository::Library,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();

    // Load configuration
    let config =
        AppConfig::load(cli.data_dir, cli.log_level).expect("Failed to load configuration");

    fs::create_dir_all(&config.storage.data_dir)?;

    // Initialize tracing; logs go to a file so the menu stays readable
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("biblioteca={}", config.logging.level).into());
    let file_appender =
        tracing_appender::rolling::never(&config.storage.data_dir, &config.logging.file);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false),
        )
        .init();

    tracing::info!("Starting Biblioteca v{}", env!("CARGO_PKG_VERSION"));

    let mut library = Library::open(&config.storage);

    let stdin = io::stdin();
    MenuSession::new(&mut library, stdin.lock(), io::stdout()).run()?;

    Ok(())
}
