use crate::app_config::AppConfig;
use crate::cli::{Cli, Commands};
use clap::Parser;
use tracing::info;

mod app_config;
mod booking;
mod booking_store;
mod cli;
mod commands;
mod distance_matrix;
mod domain;
mod estimator;
mod extensions;
mod location_deserializer;
mod notifier;
mod places;
mod stats;
#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).with_writer(std::io::stderr).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load(&cli.config)?;
    info!("✅  Loaded configuration");

    match cli.command {
        Commands::Estimate { pickup, dropoff } => commands::estimate(&config, &pickup, &dropoff).await?,
        Commands::Places { query } => commands::places(&config, &query),
        Commands::Book {
            pickup,
            dropoff,
            name,
            phone,
            scheduled,
            notes,
        } => commands::book(&config, &pickup, &dropoff, name, phone, scheduled, notes).await?,
        Commands::History => commands::history(&config).await?,
        Commands::Stats => commands::stats(&config).await?,
    }

    Ok(())
}
