use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregatorError {
    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{message}")]
    UpstreamFetchError {
        message: String,
        status: Option<u16>,
    },

    #[error("Translation request failed: {message}")]
    TranslationInvocationError { message: String },

    /// `raw` 保留模型原始輸出供診斷，不會回傳給呼叫端
    #[error("Translation output was not a valid JSON object.")]
    TranslationFormatError { raw: String },
}

impl AggregatorError {
    /// HTTP status reported to the caller. Every failure currently maps to 500.
    pub fn status_code(&self) -> u16 {
        500
    }
}

pub type Result<T> = std::result::Result<T, AggregatorError>;
