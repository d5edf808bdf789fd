#[cfg(feature = "cli")]
pub mod cli;
pub mod env;
pub mod toml_config;

use crate::adapters::gemini::{DEFAULT_GEMINI_ENDPOINT, DEFAULT_GEMINI_MODEL};
use crate::core::ConfigProvider;
use crate::utils::validation::{validate_provider, Validate};

pub const DEFAULT_CATALOG_URL: &str = "https://gist.githubusercontent.com/Shenzemo/7014871bbc721823ef28a5332740445f/raw/98b589c932a2598a484afa28a348a19986be043a/gistfile1.txt";
pub const DEFAULT_RATE_URL: &str = "https://sarfe.erfjab.com/prices";
pub const DEFAULT_TARGET_LANGUAGE: &str = "Persian";

/// Resolved settings for one invocation.
#[derive(Clone)]
pub struct AggregatorConfig {
    pub catalog_url: String,
    pub rate_url: String,
    pub translation_endpoint: String,
    pub model: String,
    pub target_language: String,
    pub api_key: Option<String>,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            rate_url: DEFAULT_RATE_URL.to_string(),
            translation_endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
            api_key: None,
        }
    }
}

// 不輸出金鑰內容
impl std::fmt::Debug for AggregatorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AggregatorConfig")
            .field("catalog_url", &self.catalog_url)
            .field("rate_url", &self.rate_url)
            .field("translation_endpoint", &self.translation_endpoint)
            .field("model", &self.model)
            .field("target_language", &self.target_language)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ConfigProvider for AggregatorConfig {
    fn catalog_url(&self) -> &str {
        &self.catalog_url
    }

    fn rate_url(&self) -> &str {
        &self.rate_url
    }

    fn translation_endpoint(&self) -> &str {
        &self.translation_endpoint
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn target_language(&self) -> &str {
        &self.target_language
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

impl Validate for AggregatorConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_provider(self)?;
        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}
