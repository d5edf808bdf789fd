//! Currency rate normalization.
//!
//! The rate source has served both a bare array of quotes and an object
//! wrapping that array under `result`. [`normalize_rate_document`] is the only
//! place that knows about the two shapes.

use crate::domain::model::CurrencyRecord;
use serde_json::Value;

/// Quoted prices are in Rial; the displayed rate is in Toman.
pub const RIAL_PER_TOMAN: f64 = 10.0;

/// Slug of the quote used for the conversion rate. Matched case-sensitively.
pub const USD_SLUG: &str = "usd";

/// Field that wraps the quote list in the object-shaped response.
const WRAPPED_FIELD: &str = "result";

/// Returns the quote list for either accepted shape, or `None` for anything else.
/// Array elements that are not quote objects are skipped.
pub fn normalize_rate_document(document: Value) -> Option<Vec<CurrencyRecord>> {
    let items = match document {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove(WRAPPED_FIELD) {
            Some(Value::Array(items)) => items,
            _ => return None,
        },
        _ => return None,
    };

    Some(
        items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<CurrencyRecord>(item).ok())
            .collect(),
    )
}

/// Parses a price such as `"1,234,500"`. Numbers are accepted as-is.
pub fn parse_price(price: &Value) -> Option<f64> {
    let parsed = match price {
        Value::String(s) => s.replace(',', "").trim().parse::<f64>().ok()?,
        Value::Number(n) => n.as_f64()?,
        _ => return None,
    };

    parsed.is_finite().then_some(parsed)
}

/// First `usd` quote divided by [`RIAL_PER_TOMAN`]; `0.0` when it cannot be determined.
pub fn usd_to_toman_rate(records: &[CurrencyRecord]) -> f64 {
    let Some(usd) = records
        .iter()
        .find(|r| r.slug.as_deref() == Some(USD_SLUG))
    else {
        tracing::warn!("No '{}' quote in currency data. Defaulting Toman rate to 0.", USD_SLUG);
        return 0.0;
    };

    match usd.price.as_ref().and_then(parse_price) {
        Some(price) => price / RIAL_PER_TOMAN,
        None => {
            tracing::warn!("USD quote has no usable price ({:?}). Defaulting Toman rate to 0.", usd.price);
            0.0
        }
    }
}
