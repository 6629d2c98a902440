//! The send pipeline.

use std::time::Duration;

use geopose_core::schema::{RequestSchema, ResponseSchema, Schema};
use geopose_core::GeoPoseResponse;
use log::{debug, warn};
use reqwest::Method;
use serde_json::Value;
use url::Url;

use crate::{
    ClientBuildError, HttpTransport, SendError, Transport, TransportError, TransportOptions,
    TransportRequest,
};

/// Default user agent for service requests.
pub const DEFAULT_USER_AGENT: &str = "geopose-client/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`GeoPoseClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoPoseClientConfig {
    /// Request timeout applied when a send does not set its own.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
    /// Whether sends validate the request and the response.
    pub validate: bool,
}

impl Default for GeoPoseClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            validate: true,
        }
    }
}

impl GeoPoseClientConfig {
    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Enable or disable validation.
    #[must_use]
    pub fn validate_request(mut self, enabled: bool) -> Self {
        self.validate = enabled;
        self
    }
}

/// Outcome of a successful send.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceResponse {
    /// The body conformed to the response schema.
    Validated(GeoPoseResponse),
    /// Validation was disabled; the body is returned as parsed JSON.
    Unchecked(Value),
}

impl ServiceResponse {
    /// The typed response, when validation ran.
    #[must_use]
    pub const fn validated(&self) -> Option<&GeoPoseResponse> {
        match self {
            Self::Validated(response) => Some(response),
            Self::Unchecked(_) => None,
        }
    }

    /// The response as JSON, whichever form it arrived in.
    ///
    /// # Errors
    /// Returns a serialization error only if a typed response cannot be
    /// converted, which a decoded response never triggers in practice.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            Self::Validated(response) => serde_json::to_value(response),
            Self::Unchecked(value) => Ok(value.clone()),
        }
    }
}

/// Sends GeoPose requests through a [`Transport`].
///
/// A client is immutable once built apart from its validation toggle, and
/// may be shared by reference across sequential sends.
#[derive(Debug)]
pub struct GeoPoseClient<T = HttpTransport> {
    transport: T,
    validate: bool,
}

impl GeoPoseClient<HttpTransport> {
    /// Create a client with default configuration.
    ///
    /// # Errors
    /// Returns [`ClientBuildError`] when the HTTP client fails to build.
    pub fn new() -> Result<Self, ClientBuildError> {
        Self::with_config(&GeoPoseClientConfig::default())
    }

    /// Create a client with explicit configuration.
    ///
    /// # Errors
    /// Returns [`ClientBuildError`] when the HTTP client fails to build.
    pub fn with_config(config: &GeoPoseClientConfig) -> Result<Self, ClientBuildError> {
        let transport = HttpTransport::new(&config.user_agent, config.timeout)?;
        Ok(Self {
            transport,
            validate: config.validate,
        })
    }
}

impl<T: Transport> GeoPoseClient<T> {
    /// Wrap an existing transport. Validation starts enabled.
    #[must_use]
    pub const fn from_transport(transport: T) -> Self {
        Self {
            transport,
            validate: true,
        }
    }

    /// Enable or disable validation for subsequent sends.
    pub const fn validate_request(&mut self, enabled: bool) -> &mut Self {
        self.validate = enabled;
        self
    }

    /// Whether sends currently validate.
    #[must_use]
    pub const fn validates(&self) -> bool {
        self.validate
    }

    /// Borrow the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// POST `payload` to `service_url` and return the service's answer.
    ///
    /// The caller's `options` are merged over `POST` with
    /// `Content-Type: application/json`; the body is always `payload`.
    ///
    /// # Errors
    /// - [`SendError::RequestSchema`] when validation is on and `payload`
    ///   does not conform. Nothing is sent.
    /// - [`SendError::Transport`] for an unparseable URL, a failed delivery
    ///   or a non-success status (carrying the body text).
    /// - [`SendError::ResponseJson`] when the body is not JSON.
    /// - [`SendError::ResponseSchema`] when validation is on and the body
    ///   does not conform.
    pub async fn send_request(
        &self,
        service_url: &str,
        payload: &str,
        options: TransportOptions,
    ) -> Result<ServiceResponse, SendError> {
        if self.validate {
            RequestSchema
                .parse(payload)
                .map_err(SendError::RequestSchema)?;
        } else {
            debug!("request validation disabled; sending payload unchecked");
        }

        let url = Url::parse(service_url).map_err(|source| TransportError::InvalidUrl {
            url: service_url.to_owned(),
            source,
        })?;
        let merged = TransportOptions::json_post().merge(options);
        let request = TransportRequest {
            url,
            method: merged.method.unwrap_or(Method::POST),
            headers: merged.headers,
            body: payload.to_owned(),
            timeout: merged.timeout,
        };
        debug!("sending {} request to {service_url}", request.method);

        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            warn!(
                "{service_url} rejected the request with status {}",
                response.status
            );
            return Err(TransportError::Http {
                url: service_url.to_owned(),
                status: response.status,
                body: response.body,
            }
            .into());
        }

        let value: Value =
            serde_json::from_str(&response.body).map_err(|source| SendError::ResponseJson {
                url: service_url.to_owned(),
                source,
            })?;
        if !self.validate {
            return Ok(ServiceResponse::Unchecked(value));
        }
        ResponseSchema
            .parse_value(value)
            .map(ServiceResponse::Validated)
            .map_err(SendError::ResponseSchema)
    }
}
