//! Error types for the I/O layer.
//!
//! The core solve has no recoverable failure path: instances that reach it
//! are already validated, and internal inconsistencies are contract
//! violations (panics). Everything here concerns reading and parsing input.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while obtaining or decoding an instance.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened or read. Fatal; the input source
    /// is presumed static, so there is no retry.
    #[error("cannot read input file {}: {source}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input text is not the expected integer sequence: a token failed
    /// to parse as a base-10 `u64` (negative numbers fail here too), tokens
    /// were missing, or data trailed the item list.
    #[error("malformed input at token {token_index}: {reason}")]
    MalformedInput { token_index: usize, reason: String },
}

/// Specialized result for instance I/O.
pub type Result<T> = std::result::Result<T, Error>;
