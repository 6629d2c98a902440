//! Delivery of request text to a service.
//!
//! [`Transport`] is the seam between the send pipeline and the network.
//! [`HttpTransport`] implements it with `reqwest`; tests substitute the stub
//! in [`crate::test_support`].

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use url::Url;

use crate::{ClientBuildError, TransportError};

/// A fully resolved request ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// Target URL.
    pub url: Url,
    /// HTTP method.
    pub method: Method,
    /// Request headers.
    pub headers: HeaderMap,
    /// Request body.
    pub body: String,
    /// Per-request timeout, if any.
    pub timeout: Option<Duration>,
}

/// Status and body text of a service response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

impl TransportResponse {
    /// Build a response.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Delivers a request and returns the service's answer.
///
/// Implementations return a [`TransportResponse`] for every status the
/// service answers with; interpreting the status is the caller's job.
#[async_trait(?Send)]
pub trait Transport {
    /// Deliver `request`.
    ///
    /// # Errors
    /// Returns [`TransportError`] when no response could be obtained.
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

/// `reqwest`-backed [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
}

impl HttpTransport {
    /// Build a transport with the given user agent and default timeout.
    ///
    /// # Errors
    /// Returns [`ClientBuildError`] when the HTTP client fails to build.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, ClientBuildError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self { client, timeout })
    }

    fn convert_reqwest_error(
        error: &reqwest::Error,
        url: &Url,
        timeout: Duration,
    ) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout {
                url: url.to_string(),
                timeout,
            };
        }
        TransportError::Network {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let TransportRequest {
            url,
            method,
            headers,
            body,
            timeout,
        } = request;
        let effective_timeout = timeout.unwrap_or(self.timeout);
        let mut builder = self
            .client
            .request(method, url.clone())
            .headers(headers)
            .body(body);
        if let Some(limit) = timeout {
            builder = builder.timeout(limit);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| Self::convert_reqwest_error(&err, &url, effective_timeout))?;
        let status = response.status().as_u16();
        debug!("{url} answered with status {status}");
        let text = response
            .text()
            .await
            .map_err(|err| Self::convert_reqwest_error(&err, &url, effective_timeout))?;
        Ok(TransportResponse::new(status, text))
    }
}
