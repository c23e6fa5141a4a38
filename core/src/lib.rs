//! Declarative HTTP client core.
//!
//! # Overview
//! Describe a call as an `Endpoint`, hand it to a `Transport`, get back a
//! decoded value or a `ClientError`. Two transports share the contract:
//! `LiveTransport` performs the call over the network with reqwest, and
//! `MockTransport` answers from canned JSON files on disk.
//!
//! # Design
//! - `http::build_request` is pure; URL and header resolution is testable
//!   without a server.
//! - Every failure is one of five `ClientError` variants.
//! - No retries, caching or shared per-call state. Each call builds and owns
//!   its own `WireRequest`.
//! - `RequestState` is a plain container callers use to track one call.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod live;
pub mod mock;
pub mod state;
pub mod transport;

pub use client::Client;
pub use config::{ClientConfig, ConfigError, Mode};
pub use endpoint::{Endpoint, EndpointSpec};
pub use error::ClientError;
pub use http::{build_request, HttpMethod, WireRequest};
pub use live::LiveTransport;
pub use mock::{mock_file_name, MockTransport};
pub use state::RequestState;
pub use transport::{decode_body, Transport};
