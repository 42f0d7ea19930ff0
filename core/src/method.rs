//! The six HTTP verbs the echo responder answers.
//!
//! # Design
//! Dispatch happens on this enum rather than on raw method strings, so every
//! per-method decision (does it read a body, which status tag it reports)
//! is an exhaustive `match`. Anything outside the six verbs fails to parse
//! and is left to the HTTP stack's 405 path.

use std::fmt;
use std::str::FromStr;

use crate::error::UnsupportedMethod;

/// HTTP method accepted by the echo responder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EchoMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
}

impl EchoMethod {
    /// Every supported verb, in the order advertised by `Allow`.
    pub const ALL: [EchoMethod; 6] = [
        EchoMethod::Get,
        EchoMethod::Post,
        EchoMethod::Put,
        EchoMethod::Delete,
        EchoMethod::Patch,
        EchoMethod::Options,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EchoMethod::Get => "GET",
            EchoMethod::Post => "POST",
            EchoMethod::Put => "PUT",
            EchoMethod::Delete => "DELETE",
            EchoMethod::Patch => "PATCH",
            EchoMethod::Options => "OPTIONS",
        }
    }

    /// Whether the request body is read and printed to the console.
    pub fn reads_body(self) -> bool {
        matches!(self, EchoMethod::Post | EchoMethod::Put | EchoMethod::Patch)
    }

    /// Whether the body is echoed back under `received_data`.
    ///
    /// Only POST does. PUT and PATCH read and log the body but leave it out
    /// of the envelope.
    pub fn echoes_body(self) -> bool {
        matches!(self, EchoMethod::Post)
    }

    /// The `status` tag of the JSON envelope, or `None` for OPTIONS which
    /// answers with headers only.
    pub fn status_tag(self) -> Option<&'static str> {
        match self {
            EchoMethod::Get => Some("success"),
            EchoMethod::Post => Some("received"),
            EchoMethod::Put => Some("updated"),
            EchoMethod::Delete => Some("deleted"),
            EchoMethod::Patch => Some("patched"),
            EchoMethod::Options => None,
        }
    }

    /// Value for the `Allow` and `Access-Control-Allow-Methods` headers.
    pub fn allow_header_value() -> String {
        EchoMethod::ALL
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for EchoMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EchoMethod {
    type Err = UnsupportedMethod;

    /// Method names are case-sensitive on the wire, so only the upper-case
    /// spelling matches.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EchoMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnsupportedMethod(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_supported_verb() {
        for method in EchoMethod::ALL {
            assert_eq!(method.as_str().parse::<EchoMethod>().unwrap(), method);
        }
    }

    #[test]
    fn rejects_unknown_and_lowercase_verbs() {
        let err = "HEAD".parse::<EchoMethod>().unwrap_err();
        assert_eq!(err, UnsupportedMethod("HEAD".to_string()));
        assert!("get".parse::<EchoMethod>().is_err());
        assert!("".parse::<EchoMethod>().is_err());
    }

    #[test]
    fn only_post_put_patch_read_a_body() {
        let readers: Vec<_> = EchoMethod::ALL.into_iter().filter(|m| m.reads_body()).collect();
        assert_eq!(readers, vec![EchoMethod::Post, EchoMethod::Put, EchoMethod::Patch]);
    }

    #[test]
    fn only_post_echoes_its_body() {
        assert!(EchoMethod::Post.echoes_body());
        assert!(!EchoMethod::Put.echoes_body());
        assert!(!EchoMethod::Patch.echoes_body());
    }

    #[test]
    fn status_tags_match_wire_table() {
        assert_eq!(EchoMethod::Get.status_tag(), Some("success"));
        assert_eq!(EchoMethod::Post.status_tag(), Some("received"));
        assert_eq!(EchoMethod::Put.status_tag(), Some("updated"));
        assert_eq!(EchoMethod::Delete.status_tag(), Some("deleted"));
        assert_eq!(EchoMethod::Patch.status_tag(), Some("patched"));
        assert_eq!(EchoMethod::Options.status_tag(), None);
    }

    #[test]
    fn allow_header_lists_six_verbs_in_order() {
        assert_eq!(
            EchoMethod::allow_header_value(),
            "GET, POST, PUT, DELETE, PATCH, OPTIONS"
        );
    }
}
