use super::AggregatorConfig;
use crate::utils::error::{AggregatorError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every key may be omitted; the API key is never read from here.
///
/// ```toml
/// [sources]
/// catalog_url = "${CATALOG_URL}"
/// rate_url = "https://sarfe.erfjab.com/prices"
///
/// [translation]
/// model = "gemini-1.5-flash"
/// target_language = "Persian"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourcesConfig {
    pub catalog_url: Option<String>,
    pub rate_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslationConfig {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub target_language: Option<String>,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${CATALOG_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AggregatorError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Values present in the file replace the ones in `base`.
    pub fn apply_to(self, mut base: AggregatorConfig) -> AggregatorConfig {
        if let Some(v) = self.sources.catalog_url {
            base.catalog_url = v;
        }
        if let Some(v) = self.sources.rate_url {
            base.rate_url = v;
        }
        if let Some(v) = self.translation.endpoint {
            base.translation_endpoint = v;
        }
        if let Some(v) = self.translation.model {
            base.model = v;
        }
        if let Some(v) = self.translation.target_language {
            base.target_language = v;
        }
        base
    }
}
