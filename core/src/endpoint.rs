//! Declarative endpoint descriptors.
//!
//! # Design
//! An `Endpoint` is passive data: base address, path, method, headers,
//! ordered query parameters and an optional body. Nothing is validated
//! here; `http::build_request` resolves it and reports a malformed URL.
//! API-specific call sites usually live in a caller-defined enum that
//! implements `EndpointSpec`.

use bytes::Bytes;
use serde::Serialize;

use crate::error::ClientError;
use crate::http::HttpMethod;

/// Description of one HTTP call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    method: HttpMethod,
    base: String,
    path: String,
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
    body: Option<Bytes>,
}

impl Endpoint {
    pub fn new(method: HttpMethod, base: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method,
            base: base.into(),
            path: path.into(),
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(base: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, base, path)
    }

    pub fn post(base: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, base, path)
    }

    pub fn put(base: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, base, path)
    }

    pub fn delete(base: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, base, path)
    }

    pub fn patch(base: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, base, path)
    }

    /// Add a header. Later headers with the same name win when the request
    /// is built.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn headers<K, V>(mut self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Append a query parameter. Order is preserved on the wire.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn query_pairs<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Attach a pre-serialized body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `value` as JSON and attach it as the body.
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, ClientError> {
        let body = serde_json::to_vec(value).map_err(ClientError::network)?;
        Ok(self.body(body))
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn header_pairs(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn query_params(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body_bytes(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }
}

/// Something that knows how to describe itself as an `Endpoint`.
///
/// Typically implemented by an enum with one variant per API call.
pub trait EndpointSpec {
    fn endpoint(&self) -> Endpoint;
}

impl EndpointSpec for Endpoint {
    fn endpoint(&self) -> Endpoint {
        self.clone()
    }
}
