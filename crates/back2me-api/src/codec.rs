//! Request field extraction and response encoding.
//!
//! Request bodies are JSON objects with flat string (or scalar) values.
//! Bodies that are not valid JSON get a best-effort positional scan so that
//! sloppy clients still work; that scan does not understand escapes or
//! nesting.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("missing or malformed field: {0}")]
    MalformedField(String),

    #[error("response encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Value of `key` in `raw`, or the empty string when it is absent.
pub fn extract_field(raw: &str, key: &str) -> String {
    try_extract_field(raw, key).unwrap_or_default()
}

/// Like [`extract_field`] but reports a missing key (or a null, array, or
/// object value) as [`CodecError::MalformedField`].
pub fn try_extract_field(raw: &str, key: &str) -> Result<String, CodecError> {
    let found = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map.get(key).and_then(scalar_text),
        Ok(_) => None,
        Err(_) => scan_field(raw, key),
    };
    found.ok_or_else(|| CodecError::MalformedField(key.to_string()))
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// First `"key"`, past the colon, skip spaces and one opening quote, then
/// read up to the next quote, comma, or closing brace.
fn scan_field(raw: &str, key: &str) -> Option<String> {
    let quoted = format!("\"{key}\"");
    let key_at = raw.find(&quoted)?;
    let after_key = &raw[key_at + quoted.len()..];
    let colon = after_key.find(':')?;

    let rest = after_key[colon + 1..].trim_start_matches(' ');
    let rest = rest.strip_prefix('"').unwrap_or(rest);
    let end = rest.find(['"', ',', '}']).unwrap_or(rest.len());

    Some(rest[..end].to_string())
}

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    success: bool,
    #[serde(flatten)]
    body: &'a T,
}

/// `{"success": true, ...fields of body}`.
pub fn encode_success<T: Serialize>(body: &T) -> Result<String, CodecError> {
    Ok(serde_json::to_string(&Envelope {
        success: true,
        body,
    })?)
}

/// `{"success": false, "error": error}`.
pub fn encode_failure(error: &str) -> String {
    serde_json::json!({ "success": false, "error": error }).to_string()
}
