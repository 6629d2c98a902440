//! Caller-supplied transport options.
//!
//! Options are layered: a send starts from [`TransportOptions::json_post`]
//! and merges the caller's options over it. Header names compare
//! case-insensitively and the caller's values replace the defaults.

use std::time::Duration;

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

/// Method, headers and timeout for a single send.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportOptions {
    /// HTTP method; `None` leaves the default in place.
    pub method: Option<Method>,
    /// Extra request headers.
    pub headers: HeaderMap,
    /// Per-request timeout overriding the client's.
    pub timeout: Option<Duration>,
}

impl TransportOptions {
    /// Defaults for a GeoPose send: `POST` with a JSON content type.
    #[must_use]
    pub fn json_post() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Self {
            method: Some(Method::POST),
            headers,
            timeout: None,
        }
    }

    /// Set the HTTP method.
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Add a header, replacing any existing value under the same name.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Layer `overrides` over `self`.
    ///
    /// Every header name present in `overrides` drops all of its values from
    /// `self` before the override values are appended. Method and timeout
    /// are taken from `overrides` when set.
    #[must_use]
    pub fn merge(mut self, overrides: Self) -> Self {
        for name in overrides.headers.keys() {
            self.headers.remove(name);
        }
        for (name, value) in &overrides.headers {
            self.headers.append(name.clone(), value.clone());
        }
        self.method = overrides.method.or(self.method);
        self.timeout = overrides.timeout.or(self.timeout);
        self
    }
}
