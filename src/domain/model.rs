use serde::{Deserialize, Serialize};

/// One catalog entry, kept as the full source object so unknown fields pass through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceRecord {
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl ServiceRecord {
    pub fn id(&self) -> Option<&serde_json::Value> {
        self.data.get("service")
    }

    pub fn product_name(&self) -> Option<&serde_json::Value> {
        self.data.get("product_name")
    }

    pub fn category(&self) -> Option<&serde_json::Value> {
        self.data.get("category")
    }
}

/// A single quote from the rate source. `price` is usually a comma-grouped string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrencyRecord {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub price: Option<serde_json::Value>,
}

/// What gets sent to the translation service for each catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<serde_json::Value>,
}

/// Translated entries keyed by the stringified service id, in the order the model returned them.
/// Each entry is expected to be `{product_name, category}` and is passed through verbatim.
pub type TranslatedServices = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub original_services: Vec<ServiceRecord>,
    pub translated_services: TranslatedServices,
    pub usd_to_toman_rate: f64,
}
