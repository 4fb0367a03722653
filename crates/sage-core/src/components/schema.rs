//! Coercion helpers shared by the per-component validators.
//!
//! The agent's props are untrusted: fields go missing, arrive as `null`,
//! carry the wrong primitive type, or hold half-generated URLs. Every helper
//! here substitutes a caller-supplied default instead of failing, so a
//! validator built from them can never reject its input.
//!
//! `null` is treated as absent everywhere. Numbers additionally accept
//! numeric strings (with an optional leading `$`), since agents routinely
//! quote prices.

use serde_json::Value;
use tracing::debug;

/// Looks up a field, treating `null` as absent.
pub fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| !v.is_null())
}

/// String field with a default.
pub fn str_or(value: &Value, key: &str, default: &str) -> String {
    match field(value, key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            debug!(key, got = %type_name(other), "invalid string field, using default");
            default.to_string()
        }
        None => default.to_string(),
    }
}

/// Optional string field.
pub fn opt_str(value: &Value, key: &str) -> Option<String> {
    match field(value, key)? {
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// Numeric field with a default. Accepts numbers and numeric strings.
pub fn num_or(value: &Value, key: &str, default: f64) -> f64 {
    match field(value, key) {
        Some(v) => coerce_num(v).unwrap_or_else(|| {
            debug!(key, got = %type_name(v), "invalid numeric field, using default");
            default
        }),
        None => default,
    }
}

/// Optional numeric field.
pub fn opt_num(value: &Value, key: &str) -> Option<f64> {
    coerce_num(field(value, key)?)
}

/// Non-negative integer field with a default.
pub fn int_or(value: &Value, key: &str, default: u32) -> u32 {
    match field(value, key).and_then(coerce_num) {
        Some(n) if n >= 0.0 => n as u32,
        Some(_) | None => default,
    }
}

/// Optional boolean field.
pub fn opt_bool(value: &Value, key: &str) -> Option<bool> {
    field(value, key)?.as_bool()
}

/// Nested object field.
pub fn object<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    field(value, key).filter(|v| v.is_object())
}

/// Array field as an iterator over its object elements.
///
/// Missing or non-array fields yield an empty iterator; non-object elements
/// (a common agent slip inside arrays) are skipped.
pub fn objects<'a>(value: &'a Value, key: &str) -> impl Iterator<Item = &'a Value> {
    field(value, key)
        .and_then(Value::as_array)
        .map(|items| items.as_slice())
        .unwrap_or_default()
        .iter()
        .filter(|item| item.is_object())
}

/// Array field of strings; non-string elements are skipped.
pub fn strings(value: &Value, key: &str) -> Vec<String> {
    field(value, key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn coerce_num(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_start_matches('$').parse().ok(),
        _ => None,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// Image URL guard
// ============================================================================

/// Minimum plausible length for an image URL ("https://a.io/x.png" is 19).
const MIN_URL_LEN: usize = 15;

/// Unsplash URLs carry long query strings; anything shorter was truncated
/// mid-generation.
const MIN_UNSPLASH_LEN: usize = 50;

/// Image URL field with a category placeholder fallback.
pub fn image_url_or(value: &Value, key: &str, fallback: &str) -> String {
    match field(value, key) {
        Some(Value::String(url)) => sanitize_image_url(url, fallback),
        Some(_) | None => fallback.to_string(),
    }
}

/// Replaces a URL with the fallback unless it is plausibly fetchable.
///
/// Rejected: empty strings, bare schemes, anything under [`MIN_URL_LEN`],
/// truncated Unsplash URLs, bare-domain tails (`...example.com/`),
/// unparseable URLs, and URLs whose path is empty. Everything else passes
/// through untouched.
pub fn sanitize_image_url(url: &str, fallback: &str) -> String {
    if url.is_empty() || url == "https://" || url == "http://" || url.len() < MIN_URL_LEN {
        return fallback.to_string();
    }
    if url.contains("unsplash.com") && url.len() < MIN_UNSPLASH_LEN {
        debug!(url, "truncated unsplash url, using placeholder");
        return fallback.to_string();
    }
    if ends_with_bare_domain(url) {
        debug!(url, "bare-domain url, using placeholder");
        return fallback.to_string();
    }
    match url::Url::parse(url) {
        Ok(parsed) if !matches!(parsed.path(), "" | "/") => url.to_string(),
        _ => fallback.to_string(),
    }
}

fn ends_with_bare_domain(url: &str) -> bool {
    let tail = url.strip_suffix('/').unwrap_or(url);
    [".com", ".org", ".net", ".io"]
        .iter()
        .any(|suffix| tail.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const FALLBACK: &str = "https://picsum.photos/seed/default/300/300";

    #[test]
    fn test_null_treated_as_absent() {
        let value = json!({ "name": null });
        assert_eq!(str_or(&value, "name", "fallback"), "fallback");
        assert_eq!(opt_str(&value, "name"), None);
    }

    #[test]
    fn test_wrong_type_falls_back() {
        let value = json!({ "name": 42, "price": true });
        assert_eq!(str_or(&value, "name", "Unnamed"), "Unnamed");
        assert_eq!(num_or(&value, "price", 0.0), 0.0);
    }

    #[test]
    fn test_numeric_string_coerces() {
        let value = json!({ "price": "49.99", "dollars": "$120", "count": "3" });
        assert_eq!(num_or(&value, "price", 0.0), 49.99);
        assert_eq!(num_or(&value, "dollars", 0.0), 120.0);
        assert_eq!(int_or(&value, "count", 1), 3);
    }

    #[test]
    fn test_int_rejects_negative() {
        let value = json!({ "columns": -2 });
        assert_eq!(int_or(&value, "columns", 3), 3);
    }

    #[test]
    fn test_objects_skips_non_objects() {
        let value = json!({ "products": [{ "id": "1" }, "oops", null, { "id": "2" }] });
        assert_eq!(objects(&value, "products").count(), 2);
        assert_eq!(objects(&value, "missing").count(), 0);
    }

    #[test]
    fn test_strings_skips_non_strings() {
        let value = json!({ "tips": ["a", 1, "b"] });
        assert_eq!(strings(&value, "tips"), vec!["a", "b"]);
    }

    #[test]
    fn test_url_guard_rejects_invalid_patterns() {
        for bad in [
            "",
            "https://",
            "http://",
            "https://a.io", // shorter than minimum plausible length
            "https://images.unsplash.com/photo", // truncated unsplash
            "https://www.example.com",
            "https://www.example.com/",
            "https://shop.example.net",
            "not a url at all definitely",
            "https://example.test.host/", // parses but empty path
        ] {
            assert_eq!(sanitize_image_url(bad, FALLBACK), FALLBACK, "url: {bad}");
        }
    }

    #[test]
    fn test_url_guard_passes_well_formed() {
        for good in [
            "https://picsum.photos/seed/shoes/300/300",
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=400",
            "https://cdn.example.com/products/42.jpg",
        ] {
            assert_eq!(sanitize_image_url(good, FALLBACK), good, "url: {good}");
        }
    }

    #[test]
    fn test_image_field_wrong_type_falls_back() {
        let value = json!({ "image": 7 });
        assert_eq!(image_url_or(&value, "image", FALLBACK), FALLBACK);
    }
}
