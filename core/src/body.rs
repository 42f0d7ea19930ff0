//! Request body handling: declared length, text decoding, and the
//! parse-or-fallback payload echoed back to POST clients.

use serde::Serialize;
use serde_json::{Map, Value};

/// The body of a request as it appears under `received_data`.
///
/// Serialized untagged: a parsed body is emitted as-is, an unparsable one as
/// `{"raw": "<text>"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BodyPayload {
    Json(Value),
    Raw { raw: String },
}

impl BodyPayload {
    /// Classify body text.
    ///
    /// An empty body becomes `{}`. Anything that parses as a JSON value is
    /// kept structurally; everything else, including whitespace-only text,
    /// falls back to the raw arm.
    pub fn classify(text: &str) -> Self {
        if text.is_empty() {
            return BodyPayload::Json(Value::Object(Map::new()));
        }
        match serde_json::from_str::<Value>(text) {
            Ok(value) => BodyPayload::Json(value),
            Err(_) => BodyPayload::Raw {
                raw: text.to_string(),
            },
        }
    }
}

/// Byte count announced by a `Content-Length` header value.
///
/// Absent or malformed values count as zero.
pub fn declared_content_length(value: Option<&str>) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0)
}

/// Decode at most `declared` bytes of `bytes` as UTF-8 text.
///
/// Invalid sequences are replaced rather than rejected so that the console
/// trace and the raw fallback always have something to show.
pub fn decode_body(bytes: &[u8], declared: usize) -> String {
    let end = declared.min(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}
