//! Timestamped measurements taken from registered sensors.
//!
//! Every reading shares the same base fields (`timestamp`, `sensorId` and
//! `privacy`) and adds a variant payload. [`Reading`] carries the base fields
//! around a payload type, and the wire format flattens both into one object
//! with the payload fields first.
//!
//! [`SensorReading`] is the closed set of variants a request accepts; its
//! [`SensorReading::sensor_type`] names the sensor type a reading must be
//! matched against.

mod camera;
mod geolocation;
mod radio;
mod xyz;

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::{Privacy, SensorType, wire};

pub use camera::{CameraData, CameraReading, ImageFormat};
pub use geolocation::{GeolocationData, GeolocationReading};
pub use radio::{BluetoothData, BluetoothReading, WifiData, WifiReading};
pub use xyz::{AccelerometerReading, GyroscopeReading, MagnetometerReading, XyzData};

/// A variant payload together with the fields every reading carries.
///
/// # Examples
///
/// ```
/// use geopose_core::{AccelerometerReading, Privacy, XyzData};
///
/// let reading = AccelerometerReading::new(XyzData::new(0.0, 0.0, 0.0), 5.0, "sensorid", Privacy::default());
/// let json = serde_json::to_string(&reading).unwrap();
/// assert!(json.starts_with(r#"{"x":0,"y":0,"z":0,"timestamp":5,"sensorId":"sensorid""#));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading<T> {
    #[serde(flatten)]
    data: T,
    #[serde(serialize_with = "wire::number")]
    timestamp: f64,
    sensor_id: String,
    privacy: Privacy,
}

impl<T> Reading<T> {
    /// Wrap `data` with its base fields.
    #[must_use]
    pub fn new(data: T, timestamp: f64, sensor_id: impl Into<String>, privacy: Privacy) -> Self {
        Self {
            data,
            timestamp,
            sensor_id: sensor_id.into(),
            privacy,
        }
    }

    /// Wrap `data` stamped with the current time and the default policy.
    #[must_use]
    pub fn now(data: T, sensor_id: impl Into<String>) -> Self {
        Self::new(data, now_millis(), sensor_id, Privacy::default())
    }

    /// Variant payload.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Mutable variant payload.
    pub const fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Milliseconds since the Unix epoch.
    #[must_use]
    pub const fn timestamp(&self) -> f64 {
        self.timestamp
    }

    /// Replace the timestamp.
    pub const fn set_timestamp(&mut self, timestamp: f64) {
        self.timestamp = timestamp;
    }

    /// Identifier of the sensor that produced the reading.
    #[must_use]
    pub fn sensor_id(&self) -> &str {
        &self.sensor_id
    }

    /// Point the reading at another sensor.
    pub fn set_sensor_id(&mut self, sensor_id: impl Into<String>) {
        self.sensor_id = sensor_id.into();
    }

    /// Data-handling policy.
    #[must_use]
    pub const fn privacy(&self) -> &Privacy {
        &self.privacy
    }

    /// Replace the data-handling policy.
    pub fn set_privacy(&mut self, privacy: Privacy) {
        self.privacy = privacy;
    }

    /// Consume the reading and return its payload.
    #[must_use]
    pub fn into_data(self) -> T {
        self.data
    }
}

/// One reading of any supported variant.
#[derive(Debug, Clone, PartialEq)]
pub enum SensorReading {
    /// Linear acceleration.
    Accelerometer(AccelerometerReading),
    /// Bluetooth beacon sighting.
    Bluetooth(BluetoothReading),
    /// Camera frame.
    Camera(CameraReading),
    /// Position fix.
    Geolocation(GeolocationReading),
    /// Angular velocity.
    Gyroscope(GyroscopeReading),
    /// Magnetic field.
    Magnetometer(MagnetometerReading),
    /// WiFi access point sighting.
    Wifi(WifiReading),
}

impl SensorReading {
    /// Sensor type the referenced sensor must have.
    #[must_use]
    pub const fn sensor_type(&self) -> SensorType {
        match self {
            Self::Accelerometer(_) => SensorType::Accelerometer,
            Self::Bluetooth(_) => SensorType::Bluetooth,
            Self::Camera(_) => SensorType::Camera,
            Self::Geolocation(_) => SensorType::Geolocation,
            Self::Gyroscope(_) => SensorType::Gyroscope,
            Self::Magnetometer(_) => SensorType::Magnetometer,
            Self::Wifi(_) => SensorType::Wifi,
        }
    }

    /// Identifier of the referenced sensor.
    #[must_use]
    pub fn sensor_id(&self) -> &str {
        match self {
            Self::Accelerometer(r) | Self::Gyroscope(r) | Self::Magnetometer(r) => r.sensor_id(),
            Self::Bluetooth(r) => r.sensor_id(),
            Self::Camera(r) => r.sensor_id(),
            Self::Geolocation(r) => r.sensor_id(),
            Self::Wifi(r) => r.sensor_id(),
        }
    }

    /// Milliseconds since the Unix epoch.
    #[must_use]
    pub const fn timestamp(&self) -> f64 {
        match self {
            Self::Accelerometer(r) | Self::Gyroscope(r) | Self::Magnetometer(r) => r.timestamp(),
            Self::Bluetooth(r) => r.timestamp(),
            Self::Camera(r) => r.timestamp(),
            Self::Geolocation(r) => r.timestamp(),
            Self::Wifi(r) => r.timestamp(),
        }
    }
}

/// Current time in whole milliseconds since the Unix epoch.
///
/// A clock set before the epoch yields `0`.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "epoch milliseconds stay far below 2^53"
)]
pub fn now_millis() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
        }) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn base_fields_follow_payload_fields() {
        let reading = GyroscopeReading::new(XyzData::new(1.5, -2.0, 0.25), 42.0, "gyro", Privacy::default());
        let json = serde_json::to_string(&reading).expect("reading serializes");
        assert_eq!(
            json,
            r#"{"x":1.5,"y":-2,"z":0.25,"timestamp":42,"sensorId":"gyro","privacy":{"dataRetention":[],"dataAcceptableUse":[],"dataSanitizationApplied":[],"dataSanitizationRequested":[]}}"#
        );
    }

    #[rstest]
    fn flattened_reading_decodes() {
        let json = r#"{"x":1,"y":2,"z":3,"timestamp":7,"sensorId":"mag","privacy":{"dataRetention":[],"dataAcceptableUse":[],"dataSanitizationApplied":[],"dataSanitizationRequested":[]}}"#;
        let reading: MagnetometerReading = serde_json::from_str(json).expect("reading decodes");
        assert_eq!(reading.data(), &XyzData::new(1.0, 2.0, 3.0));
        assert_eq!(reading.timestamp(), 7.0);
        assert_eq!(reading.sensor_id(), "mag");
    }

    #[rstest]
    #[case(
        SensorReading::Accelerometer(Reading::new(XyzData::default(), 1.0, "a", Privacy::default())),
        SensorType::Accelerometer
    )]
    #[case(
        SensorReading::Magnetometer(Reading::new(XyzData::default(), 1.0, "a", Privacy::default())),
        SensorType::Magnetometer
    )]
    #[case(
        SensorReading::Bluetooth(Reading::new(
            BluetoothData::new("00:11", -60.0, "beacon"),
            1.0,
            "a",
            Privacy::default()
        )),
        SensorType::Bluetooth
    )]
    fn variant_names_required_sensor_type(#[case] reading: SensorReading, #[case] expected: SensorType) {
        assert_eq!(reading.sensor_type(), expected);
        assert_eq!(reading.sensor_id(), "a");
        assert_eq!(reading.timestamp(), 1.0);
    }

    #[rstest]
    fn now_stamps_with_wall_clock() {
        let before = now_millis();
        let reading = Reading::now(XyzData::default(), "imu");
        assert!(reading.timestamp() >= before);
        assert_eq!(reading.privacy(), &Privacy::default());
    }
}
