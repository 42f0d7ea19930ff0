//! Error types for the echo core.
//!
//! A body that fails to parse as JSON is not an error here; it becomes
//! [`BodyPayload::Raw`](crate::BodyPayload::Raw). The only failure the core
//! reports is a method outside the six supported verbs.

use thiserror::Error;

/// The request used an HTTP method the echo responder does not answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported HTTP method: {0}")]
pub struct UnsupportedMethod(pub String);
