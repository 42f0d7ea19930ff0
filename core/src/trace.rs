//! Human-readable console trace printed for each request and response.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Local};

use crate::envelope::Envelope;
use crate::method::EchoMethod;

/// Visual separator opening every request trace.
pub const SEPARATOR_WIDTH: usize = 50;

/// Snapshot of an inbound request for the operator's console.
#[derive(Debug, Clone)]
pub struct RequestTrace {
    pub received_at: DateTime<Local>,
    pub method: EchoMethod,
    pub path: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

impl RequestTrace {
    /// Start a trace stamped with the current local time.
    ///
    /// Header names are lower-cased; a name seen more than once has its
    /// values joined with `", "`.
    pub fn new<'a, I>(method: EchoMethod, path: &str, headers: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        let mut map: BTreeMap<String, String> = BTreeMap::new();
        for (name, value) in headers {
            match map.entry(name.to_ascii_lowercase()) {
                Entry::Occupied(mut entry) => {
                    let existing = entry.get_mut();
                    existing.push_str(", ");
                    existing.push_str(&value);
                }
                Entry::Vacant(entry) => {
                    entry.insert(value);
                }
            }
        }
        RequestTrace {
            received_at: Local::now(),
            method,
            path: path.to_string(),
            headers: map,
            body: None,
        }
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }
}

impl fmt::Display for RequestTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", "=".repeat(SEPARATOR_WIDTH))?;
        writeln!(f, "[{}]", self.received_at.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "Method: {}", self.method)?;
        writeln!(f, "Path: {}", self.path)?;
        let headers = serde_json::to_string(&self.headers).map_err(|_| fmt::Error)?;
        write!(f, "Headers: {headers}")?;
        if let Some(body) = &self.body {
            write!(f, "\nBody: {body}")?;
        }
        Ok(())
    }
}

/// Console line for an outgoing envelope.
pub struct ResponseTrace<'a>(pub &'a Envelope);

impl fmt::Display for ResponseTrace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self.0).map_err(|_| fmt::Error)?;
        write!(f, "Response: {json}")
    }
}

/// A request trace and, when one was sent, its envelope.
///
/// Rendered as a single block so that one request's lines are written
/// together.
pub struct ExchangeTrace<'a> {
    pub request: &'a RequestTrace,
    pub response: Option<&'a Envelope>,
}

impl fmt::Display for ExchangeTrace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.request)?;
        if let Some(envelope) = self.response {
            write!(f, "\n{}", ResponseTrace(envelope))?;
        }
        Ok(())
    }
}
