//! Building the translation request and reading the model's answer back.

use crate::domain::model::{ServiceRecord, TranslatedServices, TranslationItem};
use crate::utils::error::{AggregatorError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Only this many leading catalog entries are sent for translation.
pub const TRANSLATION_BATCH_LIMIT: usize = 75;

static LEADING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*```(?i:json)?[ \t]*\r?\n?").expect("valid fence regex"));
static TRAILING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n?[ \t]*```\s*$").expect("valid fence regex"));

pub fn project_for_translation(services: &[ServiceRecord]) -> Vec<TranslationItem> {
    services
        .iter()
        .take(TRANSLATION_BATCH_LIMIT)
        .map(|s| TranslationItem {
            id: s.id().cloned(),
            product_name: s.product_name().cloned(),
            category: s.category().cloned(),
        })
        .collect()
}

pub fn build_translation_prompt(items: &[TranslationItem], target_language: &str) -> Result<String> {
    let payload = serde_json::to_string(items)?;

    Ok(format!(
        "Translate the following list of social media marketing services into natural-sounding {lang}.\n\
         Provide the response ONLY as a valid JSON object, where keys are the original service 'id' as a string, \
         and values are objects containing the translated 'product_name' and 'category'.\n\
         Do not include any other text, explanations, or markdown formatting like ```json. Just the raw JSON object.\n\
         Example: {{\"2\": {{ \"product_name\": \"...\", \"category\": \"...\" }}}}\n\
         Translate this list:\n\
         {payload}",
        lang = target_language,
        payload = payload,
    ))
}

/// Strips one optional leading fence (```` ``` ```` or ```` ```json ````), one optional
/// trailing fence and the surrounding whitespace. Text without fences is only trimmed.
pub fn strip_code_fences(text: &str) -> &str {
    let start = LEADING_FENCE.find(text).map(|m| m.end()).unwrap_or(0);
    let rest = &text[start..];
    let end = TRAILING_FENCE.find(rest).map(|m| m.start()).unwrap_or(rest.len());
    rest[..end].trim()
}

/// Parses the model output as a JSON object; entries are kept as the model wrote them.
/// Failure keeps the raw text.
pub fn parse_translation_output(raw: &str) -> Result<TranslatedServices> {
    let cleaned = strip_code_fences(raw);

    serde_json::from_str::<TranslatedServices>(cleaned).map_err(|e| {
        tracing::error!("Failed to parse translation output as JSON ({}): {}", e, raw);
        AggregatorError::TranslationFormatError {
            raw: raw.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog(len: usize) -> Vec<ServiceRecord> {
        (1..=len)
            .map(|i| {
                serde_json::from_value(json!({
                    "service": i,
                    "product_name": format!("Service {}", i),
                    "category": "Instagram",
                    "rate": "1.20"
                }))
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_projection_caps_at_batch_limit() {
        assert_eq!(project_for_translation(&catalog(120)).len(), 75);
        assert_eq!(project_for_translation(&catalog(75)).len(), 75);
        assert_eq!(project_for_translation(&catalog(3)).len(), 3);
        assert!(project_for_translation(&[]).is_empty());
    }

    #[test]
    fn test_projection_keeps_order_and_drops_extra_fields() {
        let items = project_for_translation(&catalog(80));
        assert_eq!(items[0].id, Some(json!(1)));
        assert_eq!(items[74].id, Some(json!(75)));
        assert_eq!(
            serde_json::to_value(&items[1]).unwrap(),
            json!({"id": 2, "product_name": "Service 2", "category": "Instagram"})
        );
    }

    #[test]
    fn test_prompt_embeds_language_and_items() {
        let items = project_for_translation(&catalog(2));
        let prompt = build_translation_prompt(&items, "Persian").unwrap();

        assert!(prompt.contains("natural-sounding Persian"));
        assert!(prompt.contains("ONLY as a valid JSON object"));
        assert!(prompt.contains(&serde_json::to_string(&items).unwrap()));
    }

    #[test]
    fn test_strip_json_fence() {
        let raw = "```json\n{\"1\":{\"product_name\":\"a\",\"category\":\"b\"}}\n```";
        assert_eq!(
            strip_code_fences(raw),
            "{\"1\":{\"product_name\":\"a\",\"category\":\"b\"}}"
        );
    }

    #[test]
    fn test_strip_bare_fence_and_whitespace() {
        assert_eq!(strip_code_fences("  \n```\n{}\n```  \n"), "{}");
        assert_eq!(strip_code_fences("```JSON {} ```"), "{}");
    }

    #[test]
    fn test_unfenced_text_is_only_trimmed() {
        assert_eq!(strip_code_fences("  {\"a\": 1}\n"), "{\"a\": 1}");
        assert_eq!(strip_code_fences(""), "");
    }

    #[test]
    fn test_parse_fenced_output() {
        let raw = "```json\n{\"1\":{\"product_name\":\"a\",\"category\":\"b\"}}\n```";
        let parsed = parse_translation_output(raw).unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed["1"], json!({"product_name": "a", "category": "b"}));
    }

    #[test]
    fn test_entries_pass_through_unchanged() {
        let raw = r#"{"1":{"product_name":"a","category":null},"2":{"product_name":"b"},"3":{"product_name":"c","category":"d","note":"x"}}"#;
        let parsed = parse_translation_output(raw).unwrap();

        assert_eq!(parsed["1"], json!({"product_name": "a", "category": null}));
        assert_eq!(parsed["2"], json!({"product_name": "b"}));
        assert!(parsed["2"].get("category").is_none());
        assert_eq!(parsed["3"]["note"], "x");
        assert_eq!(serde_json::to_string(&parsed).unwrap(), raw);
    }

    #[test]
    fn test_entries_keep_model_order() {
        let raw = r#"{"2":{"product_name":"b","category":"y"},"10":{"product_name":"a","category":"x"}}"#;
        let parsed = parse_translation_output(raw).unwrap();

        let keys: Vec<&str> = parsed.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["2", "10"]);
    }

    #[test]
    fn test_prose_output_keeps_raw_text() {
        let raw = "Sure! Here are your translations.";
        match parse_translation_output(raw) {
            Err(AggregatorError::TranslationFormatError { raw: kept }) => assert_eq!(kept, raw),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_non_object_json_is_rejected() {
        assert!(parse_translation_output("[1, 2, 3]").is_err());
        assert!(parse_translation_output("\"done\"").is_err());
        assert!(parse_translation_output("null").is_err());
    }
}
