use super::toml_config::FileConfig;
use super::AggregatorConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-aggregator")]
#[command(about = "Fetch the service catalog and USD rate, translate the catalog, print JSON")]
pub struct CliConfig {
    #[arg(long, help = "TOML settings file; explicit flags take precedence")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub catalog_url: Option<String>,

    #[arg(long)]
    pub rate_url: Option<String>,

    #[arg(long)]
    pub translation_endpoint: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub target_language: Option<String>,

    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, help = "Pretty-print the JSON body")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Defaults, then the optional file, then explicit flags.
    pub fn resolve(&self) -> Result<AggregatorConfig> {
        let mut config = match &self.config {
            Some(path) => FileConfig::from_file(path)?.apply_to(AggregatorConfig::default()),
            None => AggregatorConfig::default(),
        };

        if let Some(v) = &self.catalog_url {
            config.catalog_url = v.clone();
        }
        if let Some(v) = &self.rate_url {
            config.rate_url = v.clone();
        }
        if let Some(v) = &self.translation_endpoint {
            config.translation_endpoint = v.clone();
        }
        if let Some(v) = &self.model {
            config.model = v.clone();
        }
        if let Some(v) = &self.target_language {
            config.target_language = v.clone();
        }
        config.api_key = self.api_key.clone();

        Ok(config)
    }
}
