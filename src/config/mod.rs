use crate::config::cli::Args;
use crate::error::Result;
use clap::Parser;
use reqwest::Client;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub(crate) mod cli;

pub const DEFAULT_GAMES_TABLE: &str =
    "#tm-main > div.row > div.large-8.columns > div:nth-child(2) > div.responsive-table > table";
pub const DEFAULT_SUMMARY_TABLE: &str = "table.items";
pub const DEFAULT_SUBHEADER_CLASS: &str = "tm-subheader";

/// Structural selectors used to find the stats on a profile page.
///
/// Every field is optional in the JSON file; missing ones keep the default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub games_table: String,
    pub summary_table: String,
    pub subheader_class: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            games_table: DEFAULT_GAMES_TABLE.to_string(),
            summary_table: DEFAULT_SUMMARY_TABLE.to_string(),
            subheader_class: DEFAULT_SUBHEADER_CLASS.to_string(),
        }
    }
}

impl SelectorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let config = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        info!("Loaded selectors from {}", path.display());
        Ok(config)
    }
}

pub struct Config {
    pub args: Args,
    pub selectors: SelectorConfig,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        let args = Args::parse();

        let selectors = match &args.selectors {
            Some(path) => SelectorConfig::load(path)?,
            None => SelectorConfig::default(),
        };

        let http_client = Client::builder()
            .timeout(Duration::from_secs(args.timeout_secs))
            .user_agent(args.user_agent.clone())
            .build()?;

        Ok(Self {
            args,
            selectors,
            http_client,
        })
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.args.delay_ms)
    }
}
