//! Markdown rendering of API results
//!
//! Jira responses arrive as arbitrary JSON shapes. [`to_markdown`] folds
//! every shape into a single text form: records become fenced JSON blocks,
//! lists become newline-joined renderings of their elements, and scalars
//! fall back to plain string coercion.

use serde_json::Value;

/// Render an arbitrary JSON value as Markdown text.
///
/// Rules, applied in order:
///
/// 1. an object renders as a pretty-printed ```` ```json ```` fenced block
/// 2. an array renders each element with this function and joins the
///    results with newlines; an empty array renders as the empty string
/// 3. a string renders as itself, without quotes
/// 4. anything else renders via its JSON string form
///
/// A list of records therefore renders as N consecutive fenced blocks,
/// not as one combined JSON array.
pub fn to_markdown(value: &Value) -> String {
    match value {
        Value::Object(_) => {
            let pretty =
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
            format!("```json\n{pretty}\n```")
        }
        Value::Array(items) => items
            .iter()
            .map(to_markdown)
            .collect::<Vec<_>>()
            .join("\n"),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_renders_as_fenced_json_block() {
        let record = json!({"key": "TEST-1", "summary": "A bug"});
        let rendered = to_markdown(&record);

        assert!(rendered.starts_with("```json\n"));
        assert!(rendered.ends_with("\n```"));

        let inner = rendered
            .strip_prefix("```json\n")
            .and_then(|s| s.strip_suffix("\n```"))
            .unwrap();
        let parsed: Value = serde_json::from_str(inner).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_list_of_records_is_newline_joined_blocks() {
        let records = json!([{"a": 1}, {"b": 2}, {"c": 3}]);
        let rendered = to_markdown(&records);

        let expected: Vec<String> = records
            .as_array()
            .unwrap()
            .iter()
            .map(to_markdown)
            .collect();
        assert_eq!(rendered, expected.join("\n"));
        assert_eq!(rendered.matches("```json").count(), 3);
    }

    #[test]
    fn test_empty_list_renders_as_empty_string() {
        assert_eq!(to_markdown(&json!([])), "");
    }

    #[test]
    fn test_nested_lists_recurse() {
        let value = json!([["x", "y"], "z"]);
        assert_eq!(to_markdown(&value), "x\ny\nz");
    }

    #[test]
    fn test_scalar_coercion() {
        assert_eq!(to_markdown(&json!("plain")), "plain");
        assert_eq!(to_markdown(&json!(42)), "42");
        assert_eq!(to_markdown(&json!(true)), "true");
        assert_eq!(to_markdown(&Value::Null), "null");
    }
}
