#[cfg(feature = "lambda")]
use catalog_aggregator::{handle, AggregatorConfig, HandlerResponse};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use serde::Serialize;
#[cfg(feature = "lambda")]
use serde_json::{json, Value};

/// API Gateway proxy response; the body is the serialized JSON payload.
#[cfg(feature = "lambda")]
#[derive(Serialize)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

#[cfg(feature = "lambda")]
impl From<HandlerResponse> for ApiGatewayResponse {
    fn from(response: HandlerResponse) -> Self {
        Self {
            status_code: response.status_code,
            headers: json!({ "Content-Type": "application/json" }),
            body: response.body.to_string(),
        }
    }
}

// 事件內容與邏輯無關，只在每次呼叫時重新讀取環境變數
#[cfg(feature = "lambda")]
async fn function_handler(_event: LambdaEvent<Value>) -> Result<ApiGatewayResponse, Error> {
    tracing::info!("Starting catalog aggregation");

    let config = AggregatorConfig::from_env();
    let response = handle(config).await;

    tracing::info!("Catalog aggregation finished with status {}", response.status_code);
    Ok(response.into())
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    catalog_aggregator::utils::logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
