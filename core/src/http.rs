//! Wire-level request types and the request builder.
//!
//! # Design
//! `build_request` is a pure function from an `Endpoint` to a `WireRequest`.
//! It never touches the network, so every URL and header decision can be
//! tested without a server. The path and query are merged into the URL's
//! component structure through `url::Url`, which owns percent-encoding.

use std::fmt;

use bytes::Bytes;
use url::Url;

use crate::endpoint::Endpoint;
use crate::error::ClientError;

/// Headers applied to every request before caller headers.
pub const DEFAULT_HEADERS: [(&str, &str); 2] = [
    ("Content-Type", "application/json"),
    ("Accept", "application/json"),
];

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// Upper-case method name as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved request, ready to hand to the network stack.
///
/// Built once per call by `build_request` and consumed by the transport
/// that executes it.
#[derive(Debug, Clone)]
pub struct WireRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Bytes>,
}

impl WireRequest {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Resolve an `Endpoint` into a `WireRequest`.
///
/// Fails with `ClientError::MalformedUrl` when the base address is not an
/// absolute URL that can carry a path.
pub fn build_request(endpoint: &Endpoint) -> Result<WireRequest, ClientError> {
    let mut url = Url::parse(endpoint.base()).map_err(|_| ClientError::MalformedUrl)?;
    if url.cannot_be_a_base() {
        return Err(ClientError::MalformedUrl);
    }

    let path = join_path(url.path(), endpoint.path());
    url.set_path(&path);

    if !endpoint.query_params().is_empty() {
        url.query_pairs_mut().extend_pairs(endpoint.query_params());
    }

    let mut headers: Vec<(String, String)> = DEFAULT_HEADERS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    for (key, value) in endpoint.header_pairs() {
        merge_header(&mut headers, key, value);
    }

    Ok(WireRequest {
        method: endpoint.method(),
        url,
        headers,
        body: endpoint.body_bytes().cloned(),
    })
}

/// Join a base path and an endpoint path with exactly one `/` between them.
///
/// An empty endpoint path leaves the base path untouched, trailing slash
/// included.
fn join_path(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Insert a header, replacing any existing entry with the same name.
fn merge_header(headers: &mut Vec<(String, String)>, key: &str, value: &str) {
    match headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(key)) {
        Some(existing) => *existing = (key.to_string(), value.to_string()),
        None => headers.push((key.to_string(), value.to_string())),
    }
}
