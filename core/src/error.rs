//! Error types, split in two tiers.
//!
//! # Design
//! Local errors (`StoreError::Validation`, `StoreError::UnknownId`) are raised
//! before any request is issued and never reach the network. Remote failures
//! collapse into a single user-facing message (`StoreError::Remote`), with the
//! underlying cause logged for diagnostics rather than surfaced. The server's
//! own error payload message wins over the generic per-operation fallback when
//! it carries one.

use thiserror::Error;
use uuid::Uuid;

use crate::transport::TransportError;

/// Errors produced by `TodoClient` when building requests or interpreting
/// responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 for the requested todo.
    #[error("todo not found")]
    NotFound {
        /// Message extracted from the error payload, if any.
        message: Option<String>,
    },

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no error payload"))]
    Http { status: u16, message: Option<String> },

    /// The response body could not be deserialized into the expected type.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("failed to encode request: {0}")]
    Encode(String),
}

/// Errors returned by `TodoStore` operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Rejected locally; no request was issued.
    #[error("{0}")]
    Validation(String),

    /// The id does not reference any item in the current list; no request
    /// was issued.
    #[error("no todo with id {0}")]
    UnknownId(Uuid),

    /// The remote collaborator failed or rejected the operation. `message`
    /// is the single user-facing string shown in the error banner.
    #[error("{message}")]
    Remote { message: String },
}

/// A failed round-trip, before it is collapsed into the one user-facing
/// message the store surfaces.
#[derive(Debug, Error)]
pub(crate) enum RemoteFailure {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl RemoteFailure {
    /// The server's own payload message when present, else the
    /// per-operation fallback.
    pub(crate) fn user_message(&self, fallback: &str) -> String {
        match self {
            RemoteFailure::Api(ApiError::Http {
                message: Some(message),
                ..
            })
            | RemoteFailure::Api(ApiError::NotFound {
                message: Some(message),
            }) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
