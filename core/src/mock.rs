//! File-backed mock transport for tests and previews.
//!
//! # Design
//! Each `(method, path)` pair maps to one JSON resource named
//! `mock_<method>_<segments>.json` inside a resource directory. Lookup is by
//! exact name only. The request body, headers, query and base address play
//! no part in the lookup.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use bytes::Bytes;
use tracing::{debug, warn};

use crate::endpoint::Endpoint;
use crate::error::ClientError;
use crate::http::HttpMethod;
use crate::transport::Transport;

/// Extension of every mock resource file.
pub const RESOURCE_EXTENSION: &str = "json";

/// A [`Transport`] that answers from canned JSON files instead of the
/// network.
#[derive(Debug, Clone)]
pub struct MockTransport {
    resources: PathBuf,
    delay: Duration,
}

impl MockTransport {
    /// Serve resources from `dir` with no artificial latency.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            resources: dir.into(),
            delay: Duration::ZERO,
        }
    }

    /// Suspend every call for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn resource_dir(&self) -> &Path {
        &self.resources
    }

    /// The file that would answer `endpoint`.
    pub fn resource_path(&self, endpoint: &Endpoint) -> PathBuf {
        let name = mock_file_name(endpoint.method(), endpoint.path());
        self.resources.join(format!("{name}.{RESOURCE_EXTENSION}"))
    }
}

impl Transport for MockTransport {
    async fn request_raw(&self, endpoint: &Endpoint) -> Result<Bytes, ClientError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let path = self.resource_path(endpoint);
        debug!(method = %endpoint.method(), path = endpoint.path(), resource = %path.display(), "serving mock resource");

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Bytes::from(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(resource = %path.display(), "mock resource not found");
                Err(ClientError::MalformedUrl)
            }
            Err(err) => {
                warn!(resource = %path.display(), error = %err, "mock resource unreadable");
                Err(ClientError::from(err))
            }
        }
    }
}

/// Derive the resource name for a method and path.
///
/// `GET /users/1` becomes `mock_get_users_1`; a path with no segments
/// becomes `mock_<method>_root`.
pub fn mock_file_name(method: HttpMethod, path: &str) -> String {
    let method = method.as_str().to_lowercase();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        format!("mock_{method}_root")
    } else {
        format!("mock_{method}_{}", segments.join("_"))
    }
}
