//! Error types for the JSONPlaceholder client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the call failed". Every other failure
//! (non-2xx status, timeout, connection loss, bad JSON) is another variant of
//! the same `ApiError`, with the underlying cause kept as `source()` where
//! there is one.

use std::fmt;

use thiserror::Error;

use crate::types::Id;

/// The id-addressed resource a 404 refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Post(Id),
    Comments { post_id: Id },
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Post(id) => write!(f, "post {id}"),
            Resource::Comments { post_id } => write!(f, "comments for post {post_id}"),
        }
    }
}

/// Errors returned by `PostsClient` parse methods and by the blocking client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 for an id-addressed resource.
    #[error("{0} not found")]
    NotFound(Resource),

    /// The server returned a non-2xx status other than an id-addressed 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// No response arrived within the configured timeout.
    #[error("request timeout")]
    Timeout(#[source] ureq::Error),

    /// The connection could not be established or was dropped.
    #[error("connection error")]
    Connection(#[source] ureq::Error),

    /// Any other failure raised by the HTTP stack.
    #[error("request failed: {0}")]
    Transport(#[source] ureq::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Timeout(_) => ApiError::Timeout(err),
            ureq::Error::ConnectionFailed | ureq::Error::HostNotFound | ureq::Error::Io(_) => {
                ApiError::Connection(err)
            }
            other => ApiError::Transport(other),
        }
    }
}
