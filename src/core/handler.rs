use crate::adapters::gemini::GeminiTranslator;
use crate::core::aggregator::Aggregator;
use crate::domain::model::ResponseEnvelope;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AggregatorError, Result};
use reqwest::Client;
use serde::Serialize;
use serde_json::{json, Value};

/// Transport-neutral result of one invocation. Always carries a JSON body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandlerResponse {
    pub status_code: u16,
    pub body: Value,
}

impl HandlerResponse {
    pub fn ok(envelope: &ResponseEnvelope) -> Self {
        match serde_json::to_value(envelope) {
            Ok(body) => Self {
                status_code: 200,
                body,
            },
            Err(e) => Self::from_error(&AggregatorError::from(e)),
        }
    }

    pub fn from_error(error: &AggregatorError) -> Self {
        Self {
            status_code: error.status_code(),
            body: json!({ "error": error.to_string() }),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    pub fn body_string(&self, pretty: bool) -> String {
        if pretty {
            // Value 序列化不會失敗
            serde_json::to_string_pretty(&self.body).unwrap_or_else(|_| self.body.to_string())
        } else {
            self.body.to_string()
        }
    }
}

/// Runs one invocation end to end. Never fails; errors become a 500 body.
pub async fn handle<C: ConfigProvider>(config: C) -> HandlerResponse {
    match aggregate(config).await {
        Ok(envelope) => HandlerResponse::ok(&envelope),
        Err(e) => {
            tracing::error!("Error in catalog aggregation: {}", e);
            HandlerResponse::from_error(&e)
        }
    }
}

async fn aggregate<C: ConfigProvider>(config: C) -> Result<ResponseEnvelope> {
    // 沒有金鑰時不做任何網路呼叫
    let api_key = config
        .api_key()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or_else(|| AggregatorError::ConfigError {
            message: "GEMINI_API_KEY is not configured.".to_string(),
        })?
        .to_string();

    let client = Client::new();
    let translator = GeminiTranslator::new(
        client.clone(),
        config.translation_endpoint(),
        config.model(),
        api_key,
    );

    Aggregator::with_client(config, translator, client).run().await
}
