//! Key translation between the backend's `snake_case` and the client's
//! `camelCase`.
//!
//! Only object keys are rewritten. String values are left alone, so a post
//! slug like `my_first_post` survives the round trip.

use serde_json::{Map, Value};

/// `tech_stack` -> `techStack`. Leading underscores are kept.
pub fn snake_to_camel(key: &str) -> String {
    let trimmed = key.trim_start_matches('_');
    let mut out = String::with_capacity(key.len());
    out.push_str(&key[..key.len() - trimmed.len()]);

    let mut upper_next = false;
    for ch in trimmed.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// `techStack` -> `tech_stack`.
pub fn camel_to_snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Rewrite every object key in `value` to camelCase, recursively.
pub fn keys_to_camel(value: Value) -> Value {
    rewrite_keys(value, snake_to_camel)
}

/// Rewrite every object key in `value` to snake_case, recursively.
pub fn keys_to_snake(value: Value) -> Value {
    rewrite_keys(value, camel_to_snake)
}

fn rewrite_keys(value: Value, rename: fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, inner)| (rename(&key), rewrite_keys(inner, rename)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| rewrite_keys(item, rename))
                .collect(),
        ),
        other => other,
    }
}
