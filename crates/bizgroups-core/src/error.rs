// Rust guideline compliant 2026-10-17

//! Error types for the Bizgroups core library.

use crate::models::ResourceType;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for configuration and general operations.
pub type Result<T> = std::result::Result<T, Error>;

/// General errors not tied to resolution.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value or file.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Failure to obtain a directory snapshot.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or the response body could not be read.
    #[error("Request to {url} failed")]
    Transport {
        /// Requested URL.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("Request to {url} returned status {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The response body is not a valid group listing.
    #[error("Failed to decode response")]
    Decode(#[from] serde_json::Error),
}

/// Failure to resolve a token to exactly one full ID.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Fetching the directory failed. Resolution is aborted.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Neither a short ID prefix nor a label matched.
    #[error("No {resource} found with ID or name \"{token}\".")]
    NoElementsFound {
        /// Token supplied by the caller.
        token: String,
        /// Resource type searched.
        resource: ResourceType,
    },

    /// The token prefixes several short IDs and equals several labels.
    #[error("Non-unique {resource} ID \"{token}\", and more than one {resource} is named \"{token}\".")]
    NonUniqueId {
        /// Token supplied by the caller.
        token: String,
        /// Resource type searched.
        resource: ResourceType,
    },

    /// The token prefixes several short IDs and equals no label.
    #[error("Non-unique {resource} ID \"{token}\", and no {resource} is named \"{token}\".")]
    NonUniqueIdAndNoElementsWithName {
        /// Token supplied by the caller.
        token: String,
        /// Resource type searched.
        resource: ResourceType,
    },

    /// The token prefixes no short ID and equals several labels.
    #[error("No {resource} found with ID \"{token}\", and more than one {resource} is named \"{token}\".")]
    NotFoundIdAndDuplicateName {
        /// Token supplied by the caller.
        token: String,
        /// Resource type searched.
        resource: ResourceType,
    },
}

/// Discriminant of a [`ResolveError`], for matching without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveErrorKind {
    /// See [`ResolveError::Fetch`].
    Fetch,
    /// See [`ResolveError::NoElementsFound`].
    NoElementsFound,
    /// See [`ResolveError::NonUniqueId`].
    NonUniqueId,
    /// See [`ResolveError::NonUniqueIdAndNoElementsWithName`].
    NonUniqueIdAndNoElementsWithName,
    /// See [`ResolveError::NotFoundIdAndDuplicateName`].
    NotFoundIdAndDuplicateName,
}

/// Stable error codes for machine-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Nothing matched the token.
    NotFound,
    /// The token matched several entities.
    AmbiguousId,
    /// The token matched several short IDs and no label.
    AmbiguousIdNoName,
    /// The token matched no short ID and several labels.
    DuplicateName,
    /// Network or HTTP status failure.
    TransportError,
    /// Response body could not be decoded.
    JsonError,
}

impl FetchError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            FetchError::Transport { .. } | FetchError::Status { .. } => ErrorCode::TransportError,
            FetchError::Decode(_) => ErrorCode::JsonError,
        }
    }
}

impl ResolveError {
    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ResolveErrorKind {
        match self {
            ResolveError::Fetch(_) => ResolveErrorKind::Fetch,
            ResolveError::NoElementsFound { .. } => ResolveErrorKind::NoElementsFound,
            ResolveError::NonUniqueId { .. } => ResolveErrorKind::NonUniqueId,
            ResolveError::NonUniqueIdAndNoElementsWithName { .. } => {
                ResolveErrorKind::NonUniqueIdAndNoElementsWithName
            }
            ResolveError::NotFoundIdAndDuplicateName { .. } => {
                ResolveErrorKind::NotFoundIdAndDuplicateName
            }
        }
    }

    /// Returns the offending token, if this is a classified resolution failure.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            ResolveError::Fetch(_) => None,
            ResolveError::NoElementsFound { token, .. }
            | ResolveError::NonUniqueId { token, .. }
            | ResolveError::NonUniqueIdAndNoElementsWithName { token, .. }
            | ResolveError::NotFoundIdAndDuplicateName { token, .. } => Some(token),
        }
    }

    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            ResolveError::Fetch(fetch) => fetch.code(),
            ResolveError::NoElementsFound { .. } => ErrorCode::NotFound,
            ResolveError::NonUniqueId { .. } => ErrorCode::AmbiguousId,
            ResolveError::NonUniqueIdAndNoElementsWithName { .. } => ErrorCode::AmbiguousIdNoName,
            ResolveError::NotFoundIdAndDuplicateName { .. } => ErrorCode::DuplicateName,
        }
    }
}
