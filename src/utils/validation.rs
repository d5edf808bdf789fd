use crate::utils::error::{AggregatorError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(AggregatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AggregatorError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(AggregatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AggregatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Shared checks for anything implementing [`ConfigProvider`](crate::domain::ports::ConfigProvider).
/// The API key is deliberately not checked here; its absence is reported per invocation.
pub fn validate_provider<C: crate::domain::ports::ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_url("catalog_url", config.catalog_url())?;
    validate_url("rate_url", config.rate_url())?;
    validate_url("translation_endpoint", config.translation_endpoint())?;
    validate_non_empty_string("model", config.model())?;
    validate_non_empty_string("target_language", config.target_language())?;
    Ok(())
}
