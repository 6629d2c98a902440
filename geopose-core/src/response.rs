//! Pose estimates returned by a GeoPose service.

use serde::{Deserialize, Serialize};

use crate::request::DEFAULT_REQUEST_TYPE;
use crate::{Quaternion, wire};

/// Geodetic position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Longitude in decimal degrees.
    #[serde(serialize_with = "wire::number")]
    pub lon: f64,
    /// Latitude in decimal degrees.
    #[serde(serialize_with = "wire::number")]
    pub lat: f64,
    /// Height above the ellipsoid in metres.
    #[serde(serialize_with = "wire::number")]
    pub h: f64,
}

impl Position {
    /// Construct a position.
    #[must_use]
    pub const fn new(lon: f64, lat: f64, h: f64) -> Self {
        Self { lon, lat, h }
    }
}

/// Position plus orientation.
///
/// The default is the origin with the identity rotation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPose {
    /// Where the device is.
    pub position: Position,
    /// Which way the device faces.
    pub quaternion: Quaternion,
}

impl GeoPose {
    /// Construct a pose.
    #[must_use]
    pub const fn new(position: Position, quaternion: Quaternion) -> Self {
        Self {
            position,
            quaternion,
        }
    }
}

/// Mean error of a pose estimate.
///
/// The default reports `f64::MAX` for both components, meaning unknown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoseAccuracy {
    /// Mean positional error in metres.
    #[serde(serialize_with = "wire::number")]
    pub position: f64,
    /// Mean angular error in degrees.
    #[serde(serialize_with = "wire::number")]
    pub orientation: f64,
}

impl Default for GeoPoseAccuracy {
    fn default() -> Self {
        Self {
            position: f64::MAX,
            orientation: f64::MAX,
        }
    }
}

/// A pose estimate as returned by the service.
///
/// Responses can be fed back into a later request as prior poses.
///
/// # Examples
///
/// ```
/// use geopose_core::{GeoPose, GeoPoseResponse};
///
/// let response = GeoPoseResponse::new("pose-1", 1_700_000_000_000.0, GeoPose::default());
/// assert_eq!(response.response_type, "geopose");
/// assert_eq!(response.accuracy.position, f64::MAX);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoseResponse {
    /// Identifier assigned by the service.
    pub id: String,
    /// Milliseconds since the Unix epoch.
    #[serde(serialize_with = "wire::number")]
    pub timestamp: f64,
    /// Mean error of the estimate.
    pub accuracy: GeoPoseAccuracy,
    /// Response kind, usually `geopose`.
    #[serde(rename = "type")]
    pub response_type: String,
    /// The estimated pose.
    pub geopose: GeoPose,
}

impl GeoPoseResponse {
    /// Construct a response with unknown accuracy and the default type.
    #[must_use]
    pub fn new(id: impl Into<String>, timestamp: f64, geopose: GeoPose) -> Self {
        Self {
            id: id.into(),
            timestamp,
            accuracy: GeoPoseAccuracy::default(),
            response_type: DEFAULT_REQUEST_TYPE.to_owned(),
            geopose,
        }
    }

    /// Replace the accuracy.
    #[must_use]
    pub const fn with_accuracy(mut self, accuracy: GeoPoseAccuracy) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Replace the response kind.
    #[must_use]
    pub fn with_type(mut self, response_type: impl Into<String>) -> Self {
        self.response_type = response_type.into();
        self
    }
}
