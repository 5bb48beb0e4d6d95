//! Readers for exported design-token JSON documents.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::TokenError;

pub const SPACING_GROUP: &str = "Spacing (Margin & Padding)";
pub const BORDER_RADIUS_GROUP: &str = "Border Radius";
/// Semantic groups merged, in order, into one color table.
pub const SEMANTIC_GROUPS: [&str; 4] = ["core", "content", "background", "Border"];

const FULL_RADIUS: f64 = 9999.0;
const EXPORT_DECIMAL_POINT: char = '\u{2024}';

/// Parses one token document and checks that its root is an object.
pub fn parse_document(name: &str, body: &str) -> Result<Value, TokenError> {
    let value: Value = serde_json::from_str(body).map_err(|source| TokenError::Json {
        document: name.to_string(),
        source,
    })?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(TokenError::NotAnObject(name.to_string()))
    }
}

/// Spacing scale as `key -> "Npx"`. Exported keys such as `0․5` are normalized to `0.5`.
pub fn spacing_tokens(primitives: &Value) -> BTreeMap<String, String> {
    group_entries(primitives, SPACING_GROUP)
        .filter_map(|(key, token)| {
            let value = number_value(token)?;
            Some((
                key.replace(EXPORT_DECIMAL_POINT, "."),
                format!("{}px", format_number(value)),
            ))
        })
        .collect()
}

/// Border radius scale as `key -> "Npx"`.
pub fn border_radius_tokens(primitives: &Value) -> BTreeMap<String, String> {
    group_entries(primitives, BORDER_RADIUS_GROUP)
        .filter_map(|(key, token)| {
            let value = number_value(token)?;
            let css = if value == FULL_RADIUS {
                "9999px".to_string()
            } else {
                format!("{}px", format_number(value))
            };
            Some((key.clone(), css))
        })
        .collect()
}

/// Semantic color table (`name -> #hex`) merged from [`SEMANTIC_GROUPS`].
///
/// Nested `extensions` / `Extensions` objects are flattened into the same table.
pub fn semantic_colors(semantic: &Value) -> BTreeMap<String, String> {
    let mut colors = BTreeMap::new();
    for group in SEMANTIC_GROUPS {
        if let Some(source) = semantic.get(group).and_then(Value::as_object) {
            extract_colors(source, &mut colors);
        }
    }
    colors
}

fn extract_colors(source: &Map<String, Value>, target: &mut BTreeMap<String, String>) {
    for (key, item) in source {
        if key == "extensions" || key == "Extensions" {
            if let Some(nested) = item.as_object() {
                extract_colors(nested, target);
            }
        } else if let Some(hex) = item
            .get("$value")
            .and_then(|value| value.get("hex"))
            .and_then(Value::as_str)
        {
            target.insert(key.clone(), hex.to_string());
        }
    }
}

fn group_entries<'a>(
    document: &'a Value,
    group: &str,
) -> impl Iterator<Item = (&'a String, &'a Value)> {
    document
        .get(group)
        .and_then(Value::as_object)
        .into_iter()
        .flat_map(|entries| entries.iter())
}

fn number_value(token: &Value) -> Option<f64> {
    token.get("$value").and_then(Value::as_f64)
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn spacing_normalizes_export_decimal_point() {
        let doc = json!({
            "Spacing (Margin & Padding)": {
                "0": { "$type": "number", "$value": 0 },
                "0\u{2024}5": { "$type": "number", "$value": 2 },
                "4": { "$type": "number", "$value": 16 },
                "$description": "ignored"
            }
        });
        let spacing = spacing_tokens(&doc);
        assert_eq!(spacing.get("0.5").map(String::as_str), Some("2px"));
        assert_eq!(spacing.get("4").map(String::as_str), Some("16px"));
        assert_eq!(spacing.len(), 3);
    }

    #[test]
    fn full_radius_is_kept_as_pill_value() {
        let doc = json!({
            "Border Radius": {
                "rounded-md": { "$value": 6 },
                "rounded-full": { "$value": 9999 }
            }
        });
        let radius = border_radius_tokens(&doc);
        assert_eq!(radius["rounded-md"], "6px");
        assert_eq!(radius["rounded-full"], "9999px");
    }

    #[test]
    fn semantic_colors_flatten_extensions() {
        let doc = json!({
            "core": { "tealPrimary": { "$value": { "hex": "#0F766E" } } },
            "content": {
                "contentPrimary": { "$value": { "hex": "#09090B" } },
                "extensions": {
                    "contentRed": { "$value": { "hex": "#DC2626" } }
                }
            },
            "unrelated": { "skipMe": { "$value": { "hex": "#000000" } } }
        });
        let colors = semantic_colors(&doc);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors["contentRed"], "#DC2626");
        assert!(!colors.contains_key("skipMe"));
    }

    #[test]
    fn non_object_document_is_rejected() {
        let err = parse_document("light", "[1, 2]").expect_err("array root");
        assert!(matches!(err, TokenError::NotAnObject(name) if name == "light"));
    }
}
