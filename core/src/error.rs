//! Error taxonomy shared by every transport.
//!
//! # Design
//! The set of variants is closed: callers pattern-match on it, so nothing
//! outside these five kinds ever leaves a transport. Faults from lower
//! layers (reqwest, `std::io`, serialization of request bodies) are coerced
//! into `Network` with the underlying message; response decode faults land
//! in `Decode` with serde_json's message preserved.

use std::fmt::Display;

use thiserror::Error;

/// Errors returned by `Transport` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The base address, path and query did not form a valid absolute URL,
    /// or a mock resource for the endpoint does not exist.
    #[error("malformed url")]
    MalformedUrl,

    /// A successful response carried an empty body where a typed value was
    /// expected.
    #[error("no data in response")]
    NoData,

    /// The response body could not be decoded into the requested type.
    #[error("decoding failed: {0}")]
    Decode(String),

    /// The server answered with a status outside 200..=299.
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// Transport-level fault, or any other fault coerced into the taxonomy.
    #[error("network error: {0}")]
    Network(String),
}

impl ClientError {
    /// Coerce an arbitrary fault into `Network`.
    pub fn network(err: impl Display) -> Self {
        ClientError::Network(err.to_string())
    }

    /// The status code carried by `HttpStatus`, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::HttpStatus(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::network(err)
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::network(err)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}
