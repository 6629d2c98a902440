//! Well-known service endpoints.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::TransportError;

/// Relative path of the default GeoPose endpoint.
pub const DEFAULT_ENDPOINT: &str = "geopose";

/// Relative path of the endpoint that also locates known objects.
pub const OBJECT_ENDPOINT: &str = "geopose_objs";

/// The endpoints a GeoPose service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endpoint {
    /// Device pose only.
    #[default]
    GeoPose,
    /// Device pose plus object poses.
    Objects,
}

impl Endpoint {
    /// Relative path of the endpoint.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::GeoPose => DEFAULT_ENDPOINT,
            Self::Objects => OBJECT_ENDPOINT,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Endpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            DEFAULT_ENDPOINT => Ok(Self::GeoPose),
            OBJECT_ENDPOINT | "objects" => Ok(Self::Objects),
            other => Err(format!(
                "unknown endpoint {other:?}; expected {DEFAULT_ENDPOINT}, {OBJECT_ENDPOINT} or objects"
            )),
        }
    }
}

/// Resolve `endpoint` against a service base URL.
///
/// The base is treated as a directory, so `https://host/scr` and
/// `https://host/scr/` both resolve to `https://host/scr/geopose`.
///
/// # Errors
/// Returns [`TransportError::InvalidUrl`] when `base` is not an absolute URL
/// or the joined URL is malformed.
///
/// # Examples
///
/// ```
/// use geopose_client::{DEFAULT_ENDPOINT, endpoint_url};
///
/// let url = endpoint_url("https://example.com/scr", DEFAULT_ENDPOINT)?;
/// assert_eq!(url.as_str(), "https://example.com/scr/geopose");
/// # Ok::<(), geopose_client::TransportError>(())
/// ```
pub fn endpoint_url(base: &str, endpoint: &str) -> Result<Url, TransportError> {
    let invalid = |source| TransportError::InvalidUrl {
        url: base.to_owned(),
        source,
    };
    let mut url = Url::parse(base).map_err(invalid)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.join(endpoint).map_err(invalid)
}
