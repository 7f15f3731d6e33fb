//! Wire-field casing normalization.
//!
//! The API is tolerant about key style: `user_name` and `userName` describe
//! the same field. Response bodies are normalized to snake_case before typed
//! deserialization so models only ever declare snake_case fields.

use serde_json::Value;

/// Convert one JSON key to snake_case.
///
/// Keys without uppercase letters are returned unchanged. Acronym runs
/// collapse into a single word: `baseURL` becomes `base_url`, `userID`
/// becomes `user_id`.
pub fn normalize_key(key: &str) -> String {
    if !key.chars().any(|c| c.is_ascii_uppercase()) {
        return key.to_string();
    }

    let chars: Vec<char> = key.chars().collect();
    let mut normalized = String::with_capacity(key.len() + 4);

    for (index, &character) in chars.iter().enumerate() {
        if !character.is_ascii_uppercase() {
            normalized.push(character);
            continue;
        }

        // Word boundary: lowercase/digit before the uppercase, or the last
        // letter of an acronym run followed by a lowercase letter.
        let follows_word = index > 0
            && (chars[index - 1].is_ascii_lowercase() || chars[index - 1].is_ascii_digit());
        let ends_acronym = index > 0
            && chars[index - 1].is_ascii_uppercase()
            && chars.get(index + 1).is_some_and(|next| next.is_ascii_lowercase());

        if follows_word || ends_acronym {
            normalized.push('_');
        }
        normalized.push(character.to_ascii_lowercase());
    }

    normalized
}

/// Recursively normalize every object key in a decoded JSON value.
///
/// Values are never touched; arrays and nested objects are walked in place.
pub fn normalize_json(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (normalize_key(&key), normalize_json(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_json).collect()),
        other => other,
    }
}
