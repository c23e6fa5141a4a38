//! Caller-facing lifecycle state for one outstanding request.
//!
//! Transitions are driven entirely by the caller: set `Loading` before
//! issuing a call, then store the outcome.

use crate::error::ClientError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Failure(String),
}

impl<T> RequestState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, RequestState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    /// The success payload, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            RequestState::Success(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failure(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> From<Result<T, ClientError>> for RequestState<T> {
    fn from(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(value) => RequestState::Success(value),
            Err(err) => RequestState::Failure(err.to_string()),
        }
    }
}
