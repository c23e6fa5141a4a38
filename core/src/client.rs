//! Transport selection for the host application.
//!
//! # Design
//! `Client` is an ordinary immutable value. The host builds one at start-up,
//! usually from a `ClientConfig`, and passes it by reference to whatever
//! needs to make calls. It carries no per-call state, so concurrent calls
//! through the same `Client` never observe each other.

use bytes::Bytes;

use crate::config::{ClientConfig, ConfigError, Mode};
use crate::endpoint::Endpoint;
use crate::error::ClientError;
use crate::live::LiveTransport;
use crate::mock::MockTransport;
use crate::transport::Transport;

#[derive(Debug, Clone)]
pub enum Client {
    Live(LiveTransport),
    Mock(MockTransport),
}

impl Client {
    pub fn live() -> Self {
        Client::Live(LiveTransport::new())
    }

    pub fn mock(transport: MockTransport) -> Self {
        Client::Mock(transport)
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        match config.mode {
            Mode::Live => Ok(Client::live()),
            Mode::Mock => {
                let dir = config
                    .resource_dir
                    .clone()
                    .ok_or(ConfigError::MissingResourceDir)?;
                Ok(Client::Mock(MockTransport::new(dir).with_delay(config.delay())))
            }
        }
    }

    pub fn is_mock(&self) -> bool {
        matches!(self, Client::Mock(_))
    }
}

impl Transport for Client {
    async fn request_raw(&self, endpoint: &Endpoint) -> Result<Bytes, ClientError> {
        match self {
            Client::Live(transport) => transport.request_raw(endpoint).await,
            Client::Mock(transport) => transport.request_raw(endpoint).await,
        }
    }
}
