use crate::config::Config;
use crate::error::Result;
use crate::services::pipeline::StatsPipeline;
use std::str::FromStr;
use tracing::{info, Level};

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::new()?;

    let level = Level::from_str(&config.args.log_level).unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    StatsPipeline::new(config).process().await?;

    info!("Done!");
    Ok(())
}
