//! HTTP client for GeoPose services.
//!
//! Responsibilities:
//! - Validate outbound request text before it leaves the process.
//! - POST it to a service endpoint with merged transport options.
//! - Check the status, decode the body and validate the response.
//!
//! Boundaries:
//! - Request assembly and the data model live in `geopose-core`.
//! - No retries or internal cancellation; one send yields one outcome.
//!
//! Invariants:
//! - No global mutable state. Validation is a per-client setting.
//! - The request body is always the caller's payload, whatever the options.
//!
//! # Example
//!
//! ```no_run
//! use geopose_client::{
//!     DEFAULT_ENDPOINT, GeoPoseClient, GeoPoseClientConfig, TransportOptions, endpoint_url,
//! };
//! use std::time::Duration;
//!
//! # async fn run(payload: &str) -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeoPoseClientConfig::default().with_timeout(Duration::from_secs(10));
//! let client = GeoPoseClient::with_config(&config)?;
//! let url = endpoint_url("https://geopose.example.com/scr/", DEFAULT_ENDPOINT)?;
//! let response = client
//!     .send_request(url.as_str(), payload, TransportOptions::default())
//!     .await?;
//! println!("{:?}", response.validated());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod client;
mod endpoints;
mod error;
mod options;
mod transport;

#[doc(hidden)]
pub mod test_support;

pub use client::{DEFAULT_USER_AGENT, GeoPoseClient, GeoPoseClientConfig, ServiceResponse};
pub use endpoints::{DEFAULT_ENDPOINT, Endpoint, OBJECT_ENDPOINT, endpoint_url};
pub use error::{ClientBuildError, SendError, TransportError};
pub use options::TransportOptions;
pub use transport::{HttpTransport, Transport, TransportRequest, TransportResponse};
