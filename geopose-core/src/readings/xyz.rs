use serde::{Deserialize, Serialize};

use super::Reading;
use crate::wire;

/// Three-axis measurement shared by the inertial sensors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct XyzData {
    /// X axis.
    #[serde(serialize_with = "wire::number")]
    pub x: f64,
    /// Y axis.
    #[serde(serialize_with = "wire::number")]
    pub y: f64,
    /// Z axis.
    #[serde(serialize_with = "wire::number")]
    pub z: f64,
}

impl XyzData {
    /// Construct a measurement from its axes.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Acceleration in m/s².
pub type AccelerometerReading = Reading<XyzData>;
/// Angular velocity in rad/s.
pub type GyroscopeReading = Reading<XyzData>;
/// Magnetic field in µT.
pub type MagnetometerReading = Reading<XyzData>;
