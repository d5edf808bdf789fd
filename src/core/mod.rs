pub mod aggregator;
pub mod handler;
pub mod rate;
pub mod translation;

pub use crate::domain::model::{ResponseEnvelope, ServiceRecord};
pub use crate::domain::ports::{ConfigProvider, Translator};
pub use crate::utils::error::Result;
