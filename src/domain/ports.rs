use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn catalog_url(&self) -> &str;
    fn rate_url(&self) -> &str;
    fn translation_endpoint(&self) -> &str;
    fn model(&self) -> &str;
    fn target_language(&self) -> &str;
    /// `None` when the credential is not configured.
    fn api_key(&self) -> Option<&str>;
}

/// External text-generation service. Returns the raw model text untouched.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, prompt: &str) -> Result<String>;
}
