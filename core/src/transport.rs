//! The transport contract shared by the live and mock implementations.
//!
//! # Design
//! Implementors only supply `request_raw`. Typed decoding, `send` for any
//! `EndpointSpec`, and the `get`/`post`/`put`/`patch`/`delete` conveniences
//! are provided methods, so both transports decode identically and surface
//! the same closed set of `ClientError` variants.
//!
//! Uses native `impl Future` in traits, no `async-trait` macro required.

use std::future::Future;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::endpoint::{Endpoint, EndpointSpec};
use crate::error::ClientError;

/// A single-shot executor for `Endpoint` descriptors.
pub trait Transport: Send + Sync {
    /// Perform the call and return the raw response body.
    ///
    /// An empty body on a successful response is returned as-is.
    fn request_raw(
        &self,
        endpoint: &Endpoint,
    ) -> impl Future<Output = Result<Bytes, ClientError>> + Send;

    /// Perform the call and decode the JSON body into `T`.
    ///
    /// An empty body is reported as `ClientError::NoData`.
    fn request<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
    ) -> impl Future<Output = Result<T, ClientError>> + Send {
        async move {
            let body = self.request_raw(endpoint).await?;
            decode_body(&body)
        }
    }

    /// Resolve `spec` into an `Endpoint` and return the raw body.
    fn send_raw<E: EndpointSpec + ?Sized>(
        &self,
        spec: &E,
    ) -> impl Future<Output = Result<Bytes, ClientError>> + Send {
        let endpoint = spec.endpoint();
        async move { self.request_raw(&endpoint).await }
    }

    /// Resolve `spec` into an `Endpoint` and decode the body into `T`.
    fn send<T: DeserializeOwned, E: EndpointSpec + ?Sized>(
        &self,
        spec: &E,
    ) -> impl Future<Output = Result<T, ClientError>> + Send {
        let endpoint = spec.endpoint();
        async move { self.request(&endpoint).await }
    }

    fn get<T: DeserializeOwned>(
        &self,
        base: &str,
        path: &str,
        query: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> impl Future<Output = Result<T, ClientError>> + Send {
        let endpoint = Endpoint::get(base, path)
            .query_pairs(query.iter().copied())
            .headers(headers.iter().copied());
        async move { self.request(&endpoint).await }
    }

    fn post<T: DeserializeOwned, U: Serialize + ?Sized>(
        &self,
        base: &str,
        path: &str,
        body: &U,
        headers: &[(&str, &str)],
    ) -> impl Future<Output = Result<T, ClientError>> + Send {
        let endpoint = Endpoint::post(base, path)
            .headers(headers.iter().copied())
            .json(body);
        async move { self.request(&endpoint?).await }
    }

    fn put<T: DeserializeOwned, U: Serialize + ?Sized>(
        &self,
        base: &str,
        path: &str,
        body: &U,
        headers: &[(&str, &str)],
    ) -> impl Future<Output = Result<T, ClientError>> + Send {
        let endpoint = Endpoint::put(base, path)
            .headers(headers.iter().copied())
            .json(body);
        async move { self.request(&endpoint?).await }
    }

    fn patch<T: DeserializeOwned, U: Serialize + ?Sized>(
        &self,
        base: &str,
        path: &str,
        body: &U,
        headers: &[(&str, &str)],
    ) -> impl Future<Output = Result<T, ClientError>> + Send {
        let endpoint = Endpoint::patch(base, path)
            .headers(headers.iter().copied())
            .json(body);
        async move { self.request(&endpoint?).await }
    }

    fn delete<T: DeserializeOwned>(
        &self,
        base: &str,
        path: &str,
        headers: &[(&str, &str)],
    ) -> impl Future<Output = Result<T, ClientError>> + Send {
        let endpoint = Endpoint::delete(base, path).headers(headers.iter().copied());
        async move { self.request(&endpoint).await }
    }
}

/// Decode a JSON body, rejecting empty input with `NoData`.
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ClientError> {
    if body.is_empty() {
        return Err(ClientError::NoData);
    }
    serde_json::from_slice(body).map_err(ClientError::from)
}
