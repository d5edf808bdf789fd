use crate::core::rate::{normalize_rate_document, usd_to_toman_rate};
use crate::core::translation::{
    build_translation_prompt, parse_translation_output, project_for_translation,
};
use crate::domain::model::{CurrencyRecord, ResponseEnvelope, ServiceRecord};
use crate::domain::ports::{ConfigProvider, Translator};
use crate::utils::error::{AggregatorError, Result};
use reqwest::Client;

/// Fetches the catalog and rates, translates the catalog head and assembles the envelope.
pub struct Aggregator<C: ConfigProvider, T: Translator> {
    config: C,
    translator: T,
    client: Client,
}

impl<C: ConfigProvider, T: Translator> Aggregator<C, T> {
    pub fn new(config: C, translator: T) -> Self {
        Self::with_client(config, translator, Client::new())
    }

    pub fn with_client(config: C, translator: T, client: Client) -> Self {
        Self {
            config,
            translator,
            client,
        }
    }

    pub async fn run(&self) -> Result<ResponseEnvelope> {
        // 兩個來源同時抓取，兩者都會等到完成
        let (catalog, rates) = tokio::join!(self.fetch_catalog(), self.fetch_rates());
        let original_services = catalog?;
        tracing::info!("Fetched {} catalog records", original_services.len());

        let usd_to_toman_rate = usd_to_toman_rate(&rates);
        tracing::debug!("USD to Toman rate: {}", usd_to_toman_rate);

        let items = project_for_translation(&original_services);
        let prompt = build_translation_prompt(&items, self.config.target_language())?;
        tracing::info!(
            "Requesting translation of {} of {} records into {}",
            items.len(),
            original_services.len(),
            self.config.target_language()
        );

        let raw = self.translator.translate(&prompt).await?;
        let translated_services = parse_translation_output(&raw)?;
        tracing::info!("Received {} translated entries", translated_services.len());

        Ok(ResponseEnvelope {
            original_services,
            translated_services,
            usd_to_toman_rate,
        })
    }

    /// Catalog failures are fatal for the whole invocation.
    pub async fn fetch_catalog(&self) -> Result<Vec<ServiceRecord>> {
        let url = self.config.catalog_url();
        tracing::debug!("Making catalog request to: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("Catalog response status: {}", status);
        if !status.is_success() {
            return Err(AggregatorError::UpstreamFetchError {
                message: format!("Failed to fetch service catalog. Status: {}", status.as_u16()),
                status: Some(status.as_u16()),
            });
        }

        // 來源可能以 text/plain 回傳，所以先讀成文字再解析
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(AggregatorError::UpstreamFetchError {
                message: "Service catalog is empty or could not be loaded.".to_string(),
                status: Some(status.as_u16()),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Any rate-source problem degrades to an empty quote list.
    pub async fn fetch_rates(&self) -> Vec<CurrencyRecord> {
        match self.try_fetch_rates().await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("{}. Defaulting Toman rate to 0.", e);
                Vec::new()
            }
        }
    }

    async fn try_fetch_rates(&self) -> Result<Vec<CurrencyRecord>> {
        let url = self.config.rate_url();
        tracing::debug!("Making currency request to: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AggregatorError::UpstreamFetchError {
                message: format!("Failed to fetch currency rates. Status: {}", status.as_u16()),
                status: Some(status.as_u16()),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(AggregatorError::UpstreamFetchError {
                message: "Currency data was empty".to_string(),
                status: Some(status.as_u16()),
            });
        }

        let document: serde_json::Value = serde_json::from_str(&body)?;
        normalize_rate_document(document).ok_or_else(|| AggregatorError::UpstreamFetchError {
            message: "Currency data has an unrecognized shape".to_string(),
            status: Some(status.as_u16()),
        })
    }
}
