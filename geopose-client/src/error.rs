//! Error types for building clients and sending requests.

use std::time::Duration;

use geopose_core::SchemaError;
use thiserror::Error;

/// The HTTP client could not be constructed.
#[derive(Debug, Error)]
#[error("failed to build HTTP client: {source}")]
pub struct ClientBuildError {
    #[source]
    source: reqwest::Error,
}

impl From<reqwest::Error> for ClientBuildError {
    fn from(source: reqwest::Error) -> Self {
        Self { source }
    }
}

/// A request could not be delivered, or the service rejected it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TransportError {
    /// The service answered with a non-success status.
    #[error("HTTP request to {url} failed with status {status}: {body}")]
    Http {
        /// Target URL.
        url: String,
        /// Status code returned by the service.
        status: u16,
        /// Response body text.
        body: String,
    },
    /// The connection failed before a response arrived.
    #[error("network error contacting {url}: {message}")]
    Network {
        /// Target URL.
        url: String,
        /// Underlying error message.
        message: String,
    },
    /// The request did not complete in time.
    #[error("request to {url} timed out after {timeout:?}")]
    Timeout {
        /// Target URL.
        url: String,
        /// Timeout that elapsed.
        timeout: Duration,
    },
    /// The service URL could not be parsed.
    #[error("invalid service URL {url}: {source}")]
    InvalidUrl {
        /// URL text as supplied.
        url: String,
        /// Parser diagnostic.
        #[source]
        source: url::ParseError,
    },
}

/// A send failed at one of its stages.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SendError {
    /// The outbound payload did not validate.
    #[error("request failed validation: {0}")]
    RequestSchema(#[source] SchemaError),
    /// The request could not be delivered or was rejected.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The response body was not JSON.
    #[error("response from {url} is not valid JSON: {source}")]
    ResponseJson {
        /// Target URL.
        url: String,
        /// Parser diagnostic.
        #[source]
        source: serde_json::Error,
    },
    /// The response JSON did not validate.
    #[error("response failed validation: {0}")]
    ResponseSchema(#[source] SchemaError),
}
