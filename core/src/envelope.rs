//! The JSON acknowledgment returned for every JSON-producing method.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::body::BodyPayload;
use crate::method::EchoMethod;

/// Greeting included in GET responses.
pub const GREETING: &str = "Hello from Rust test server";

/// Response body describing what was received.
///
/// Optional fields are omitted from the JSON, not emitted as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub status: &'static str,
    pub method: &'static str,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_data: Option<BodyPayload>,
    pub timestamp: String,
}

impl Envelope {
    /// Build the envelope for `method`, stamped with the current local time.
    ///
    /// Returns `None` for OPTIONS, which answers with headers only.
    pub fn for_request(method: EchoMethod, path: &str, body: Option<&str>) -> Option<Self> {
        Self::at(method, path, body, Local::now())
    }

    /// Same as [`Envelope::for_request`] with an explicit clock reading.
    pub fn at(
        method: EchoMethod,
        path: &str,
        body: Option<&str>,
        now: DateTime<Local>,
    ) -> Option<Self> {
        let status = method.status_tag()?;
        let message = (method == EchoMethod::Get).then_some(GREETING);
        let received_data = method
            .echoes_body()
            .then(|| BodyPayload::classify(body.unwrap_or_default()));

        Some(Envelope {
            status,
            method: method.as_str(),
            path: path.to_string(),
            message,
            received_data,
            timestamp: iso_timestamp(now),
        })
    }

    /// Two-space indented JSON, as written to the response body.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// ISO-8601 local time with microseconds and no offset.
pub fn iso_timestamp(now: DateTime<Local>) -> String {
    now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
