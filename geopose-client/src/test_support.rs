//! Test utilities for the send pipeline.
//!
//! This module provides [`StubTransport`], a deterministic test double for
//! [`Transport`] that answers with a pre-configured response and records
//! every request it receives, without touching the network.

use std::cell::RefCell;

use async_trait::async_trait;
use serde_json::Value;

use crate::{Transport, TransportError, TransportRequest, TransportResponse};

/// Stub [`Transport`] for testing.
///
/// # Example
///
/// ```
/// use geopose_client::test_support::StubTransport;
/// use geopose_client::{GeoPoseClient, TransportOptions};
///
/// let stub = StubTransport::with_response(500, "service down");
/// let client = GeoPoseClient::from_transport(stub);
/// let runtime = tokio::runtime::Builder::new_current_thread()
///     .enable_all()
///     .build()
///     .expect("runtime");
/// let result = runtime.block_on(client.send_request(
///     "http://localhost/geopose",
///     "{}",
///     TransportOptions::default(),
/// ));
/// assert!(result.is_err());
/// ```
#[derive(Debug)]
pub struct StubTransport {
    response: StubResponse,
    requests: RefCell<Vec<TransportRequest>>,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Response(TransportResponse),
    Error(TransportError),
}

impl StubTransport {
    /// Create a transport answering every request with `status` and `body`.
    #[must_use]
    pub fn with_response(status: u16, body: impl Into<String>) -> Self {
        Self::from_response(StubResponse::Response(TransportResponse::new(status, body)))
    }

    /// Create a transport answering every request with `200` and `json`.
    #[must_use]
    pub fn with_json(json: &Value) -> Self {
        Self::with_response(200, json.to_string())
    }

    /// Create a transport failing every request with `error`.
    #[must_use]
    pub fn with_error(error: TransportError) -> Self {
        Self::from_response(StubResponse::Error(error))
    }

    const fn from_response(response: StubResponse) -> Self {
        Self {
            response,
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Requests received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.borrow().clone()
    }

    /// The most recent request, if any.
    #[must_use]
    pub fn last_request(&self) -> Option<TransportRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl Transport for StubTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        match &self.response {
            StubResponse::Response(response) => Ok(response.clone()),
            StubResponse::Error(error) => Err(error.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;
    use reqwest::header::HeaderMap;
    use rstest::rstest;
    use url::Url;

    fn request(body: &str) -> TransportRequest {
        TransportRequest {
            url: Url::parse("http://localhost/geopose").expect("url parses"),
            method: Method::POST,
            headers: HeaderMap::new(),
            body: body.to_owned(),
            timeout: None,
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn with_response_returns_configured_response() {
        let stub = StubTransport::with_response(201, "created");
        let response = stub.execute(request("a")).await.expect("stub answers");
        assert_eq!(response, TransportResponse::new(201, "created"));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn with_error_returns_configured_error() {
        let error = TransportError::Network {
            url: "http://localhost/geopose".into(),
            message: "refused".into(),
        };
        let stub = StubTransport::with_error(error.clone());
        let err = stub.execute(request("a")).await.expect_err("stub fails");
        assert_eq!(err, error);
    }

    #[rstest]
    fn starts_with_no_requests() {
        let stub = StubTransport::with_response(200, "{}");
        assert!(stub.requests().is_empty());
        assert!(stub.last_request().is_none());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn records_requests_in_order() {
        let stub = StubTransport::with_response(200, "{}");
        stub.execute(request("first")).await.expect("stub answers");
        stub.execute(request("second")).await.expect("stub answers");
        let bodies: Vec<String> = stub.requests().into_iter().map(|r| r.body).collect();
        assert_eq!(bodies, vec!["first", "second"]);
        assert_eq!(stub.last_request().map(|r| r.body), Some("second".to_owned()));
    }
}
