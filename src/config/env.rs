use super::AggregatorConfig;
use std::env;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const CATALOG_URL_VAR: &str = "CATALOG_URL";
pub const RATE_URL_VAR: &str = "RATE_URL";
pub const GEMINI_ENDPOINT_VAR: &str = "GEMINI_ENDPOINT";
pub const GEMINI_MODEL_VAR: &str = "GEMINI_MODEL";
pub const TARGET_LANGUAGE_VAR: &str = "TARGET_LANGUAGE";

impl AggregatorConfig {
    /// Reads settings from the process environment. Only the API key has no default,
    /// and its absence is reported when the invocation runs, not here.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |name: &str, default: String| {
            lookup(name).filter(|v| !v.trim().is_empty()).unwrap_or(default)
        };

        Self {
            catalog_url: var(CATALOG_URL_VAR, defaults.catalog_url),
            rate_url: var(RATE_URL_VAR, defaults.rate_url),
            translation_endpoint: var(GEMINI_ENDPOINT_VAR, defaults.translation_endpoint),
            model: var(GEMINI_MODEL_VAR, defaults.model),
            target_language: var(TARGET_LANGUAGE_VAR, defaults.target_language),
            api_key: lookup(API_KEY_VAR),
        }
    }
}
