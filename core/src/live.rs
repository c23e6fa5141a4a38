//! Reqwest-backed live transport.

use bytes::Bytes;
use tracing::{debug, warn};

use crate::endpoint::Endpoint;
use crate::error::ClientError;
use crate::http::{build_request, HttpMethod, WireRequest};
use crate::transport::Transport;

/// A [`Transport`] that performs real network I/O through [`reqwest`].
///
/// Holds no per-call state. The wrapped `reqwest::Client` supplies TLS,
/// redirects and any timeout policy.
#[derive(Debug, Clone, Default)]
pub struct LiveTransport {
    client: reqwest::Client,
}

impl LiveTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `LiveTransport` from an existing [`reqwest::Client`].
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn execute(&self, request: WireRequest) -> Result<Bytes, ClientError> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), request.url.clone());
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!(method = %request.method, url = %request.url, status = status.as_u16(), "response received");

        if !status.is_success() {
            return Err(ClientError::HttpStatus(status.as_u16()));
        }

        Ok(response.bytes().await?)
    }
}

impl Transport for LiveTransport {
    async fn request_raw(&self, endpoint: &Endpoint) -> Result<Bytes, ClientError> {
        let request = build_request(endpoint)?;
        debug!(method = %request.method, url = %request.url, "sending request");

        let result = self.execute(request).await;
        match &result {
            Ok(body) => debug!(bytes = body.len(), "request completed"),
            Err(err) => warn!(method = %endpoint.method(), path = endpoint.path(), error = %err, "request failed"),
        }
        result
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
        HttpMethod::Patch => reqwest::Method::PATCH,
    }
}
