//! Errors surfaced by the listener.
//!
//! Per-request faults never reach this type: malformed bodies are echoed as
//! raw text and transport errors are answered by the HTTP stack itself.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// The accept loop stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}
