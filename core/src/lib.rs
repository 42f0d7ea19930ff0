//! Pure building blocks of the echo responder.
//!
//! # Overview
//! Everything here is I/O free: the supported-method enum, the
//! parse-or-fallback body payload, the JSON envelope, and the console trace.
//! The `echo-server` crate owns the listener and feeds requests through
//! these types.
//!
//! # Design
//! - Per-method behavior is an exhaustive match on [`EchoMethod`].
//! - A body that is not valid JSON is a [`BodyPayload::Raw`] value, not an
//!   error.
//! - Nothing outlives a request; all types are built, rendered, and dropped
//!   within one handler call.

pub mod body;
pub mod envelope;
pub mod error;
pub mod method;
pub mod trace;

pub use body::{decode_body, declared_content_length, BodyPayload};
pub use envelope::{iso_timestamp, Envelope, GREETING};
pub use error::UnsupportedMethod;
pub use method::EchoMethod;
pub use trace::{ExchangeTrace, RequestTrace, ResponseTrace};
