pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::gemini::GeminiTranslator;
pub use config::AggregatorConfig;
pub use crate::core::{
    aggregator::Aggregator,
    handler::{handle, HandlerResponse},
};
pub use utils::error::{AggregatorError, Result};
