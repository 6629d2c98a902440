//! The request aggregate: sensors, their readings and optional prior poses.

mod error;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use error::RequestError;

use crate::readings::now_millis;
use crate::{
    BluetoothData, CameraData, GeoPoseResponse, GeolocationData, ModelError, Privacy, Reading,
    Sensor, SensorReading, SensorReadings, SensorType, WifiData, XyzData, wire,
};

/// Request kind sent when none is given.
pub const DEFAULT_REQUEST_TYPE: &str = "geopose";

/// A localization request under construction.
///
/// Sensors are registered first; every reading added afterwards must name a
/// registered sensor of the matching type. Failing calls leave the request
/// unchanged.
///
/// # Examples
///
/// ```
/// use geopose_core::{GeoPoseRequest, Privacy, RequestError, Sensor, SensorType};
///
/// let mut request = GeoPoseRequest::new("request_uuid").with_timestamp(0.0);
/// let id = request.next_sensor_id();
/// request.add_sensor(Sensor::new(id.clone(), SensorType::Gyroscope))?;
///
/// let err = request
///     .add_accelerometer_data(0.0, 0.0, 0.0, 0.0, &id, Privacy::default())
///     .unwrap_err();
/// assert!(matches!(err, RequestError::SensorTypeMismatch { .. }));
///
/// request.clear_sensor_data();
/// assert_eq!(
///     request.to_json()?,
///     r#"{"id":"request_uuid","timestamp":0,"type":"geopose","sensors":[],"sensorReadings":{}}"#
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoseRequest {
    id: String,
    #[serde(serialize_with = "wire::number")]
    timestamp: f64,
    #[serde(rename = "type")]
    request_type: String,
    sensors: Vec<Sensor>,
    sensor_readings: SensorReadings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prior_poses: Option<Vec<GeoPoseResponse>>,
    #[serde(skip)]
    sensor_id_counter: u64,
}

impl GeoPoseRequest {
    /// Start an empty request of the default type, stamped with the current
    /// time.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            timestamp: now_millis(),
            request_type: DEFAULT_REQUEST_TYPE.to_owned(),
            sensors: Vec::new(),
            sensor_readings: SensorReadings::default(),
            prior_poses: None,
            sensor_id_counter: 0,
        }
    }

    /// Replace the request kind.
    #[must_use]
    pub fn with_type(mut self, request_type: impl Into<String>) -> Self {
        self.request_type = request_type.into();
        self
    }

    /// Replace the timestamp.
    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: f64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Request identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Replace the identifier.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
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

    /// Request kind.
    #[must_use]
    pub fn request_type(&self) -> &str {
        &self.request_type
    }

    /// Replace the request kind.
    pub fn set_request_type(&mut self, request_type: impl Into<String>) {
        self.request_type = request_type.into();
    }

    /// Registered sensors in registration order.
    #[must_use]
    pub fn sensors(&self) -> &[Sensor] {
        &self.sensors
    }

    /// Look up a registered sensor.
    #[must_use]
    pub fn sensor(&self, id: &str) -> Option<&Sensor> {
        self.sensors.iter().find(|sensor| sensor.id() == id)
    }

    /// Readings added so far.
    #[must_use]
    pub const fn sensor_readings(&self) -> &SensorReadings {
        &self.sensor_readings
    }

    /// Allocate the next generated sensor id: `"0"`, `"1"`, `"2"`, ...
    ///
    /// The sequence belongs to this request and never repeats. It is not
    /// checked against caller-supplied ids.
    pub fn next_sensor_id(&mut self) -> String {
        let id = self.sensor_id_counter;
        self.sensor_id_counter = self.sensor_id_counter.saturating_add(1);
        id.to_string()
    }

    /// Register a sensor.
    ///
    /// # Errors
    /// Returns [`RequestError::DuplicateSensorId`] when a sensor with the same
    /// id is already registered.
    pub fn add_sensor(&mut self, sensor: Sensor) -> Result<&mut Self, RequestError> {
        if self.sensor(sensor.id()).is_some() {
            return Err(RequestError::DuplicateSensorId {
                id: sensor.id().to_owned(),
            });
        }
        debug!(
            "registered {} sensor {:?} on request {:?}",
            sensor.sensor_type(),
            sensor.id(),
            self.id
        );
        self.sensors.push(sensor);
        Ok(self)
    }

    /// Append a reading of any variant.
    ///
    /// # Errors
    /// Returns [`RequestError::UnknownSensor`] when the reading names no
    /// registered sensor, or [`RequestError::SensorTypeMismatch`] when that
    /// sensor's type differs from the reading's.
    pub fn add_reading(&mut self, reading: SensorReading) -> Result<&mut Self, RequestError> {
        self.verify_sensor(reading.sensor_id(), reading.sensor_type())?;
        debug!(
            "appended {} reading from sensor {:?}",
            reading.sensor_type(),
            reading.sensor_id()
        );
        self.sensor_readings.push(reading);
        Ok(self)
    }

    /// Append an accelerometer sample.
    ///
    /// # Errors
    /// As [`GeoPoseRequest::add_reading`].
    pub fn add_accelerometer_data(
        &mut self,
        x: f64,
        y: f64,
        z: f64,
        timestamp: f64,
        sensor_id: impl Into<String>,
        privacy: Privacy,
    ) -> Result<&mut Self, RequestError> {
        self.add_reading(SensorReading::Accelerometer(Reading::new(
            XyzData::new(x, y, z),
            timestamp,
            sensor_id,
            privacy,
        )))
    }

    /// Append a gyroscope sample.
    ///
    /// # Errors
    /// As [`GeoPoseRequest::add_reading`].
    pub fn add_gyroscope_data(
        &mut self,
        x: f64,
        y: f64,
        z: f64,
        timestamp: f64,
        sensor_id: impl Into<String>,
        privacy: Privacy,
    ) -> Result<&mut Self, RequestError> {
        self.add_reading(SensorReading::Gyroscope(Reading::new(
            XyzData::new(x, y, z),
            timestamp,
            sensor_id,
            privacy,
        )))
    }

    /// Append a magnetometer sample.
    ///
    /// # Errors
    /// As [`GeoPoseRequest::add_reading`].
    pub fn add_magnetometer_data(
        &mut self,
        x: f64,
        y: f64,
        z: f64,
        timestamp: f64,
        sensor_id: impl Into<String>,
        privacy: Privacy,
    ) -> Result<&mut Self, RequestError> {
        self.add_reading(SensorReading::Magnetometer(Reading::new(
            XyzData::new(x, y, z),
            timestamp,
            sensor_id,
            privacy,
        )))
    }

    /// Append a Bluetooth sighting.
    ///
    /// # Errors
    /// As [`GeoPoseRequest::add_reading`].
    pub fn add_bluetooth_data(
        &mut self,
        address: impl Into<String>,
        rssi: f64,
        name: impl Into<String>,
        timestamp: f64,
        sensor_id: impl Into<String>,
        privacy: Privacy,
    ) -> Result<&mut Self, RequestError> {
        self.add_reading(SensorReading::Bluetooth(Reading::new(
            BluetoothData::new(address, rssi, name),
            timestamp,
            sensor_id,
            privacy,
        )))
    }

    /// Append a WiFi sighting.
    ///
    /// # Errors
    /// As [`GeoPoseRequest::add_reading`].
    pub fn add_wifi_data(
        &mut self,
        data: WifiData,
        timestamp: f64,
        sensor_id: impl Into<String>,
        privacy: Privacy,
    ) -> Result<&mut Self, RequestError> {
        self.add_reading(SensorReading::Wifi(Reading::new(
            data, timestamp, sensor_id, privacy,
        )))
    }

    /// Append a camera frame.
    ///
    /// # Errors
    /// As [`GeoPoseRequest::add_reading`].
    pub fn add_camera_data(
        &mut self,
        data: CameraData,
        timestamp: f64,
        sensor_id: impl Into<String>,
        privacy: Privacy,
    ) -> Result<&mut Self, RequestError> {
        self.add_reading(SensorReading::Camera(Reading::new(
            data, timestamp, sensor_id, privacy,
        )))
    }

    /// Append a position fix.
    ///
    /// # Errors
    /// As [`GeoPoseRequest::add_reading`].
    pub fn add_geolocation_data(
        &mut self,
        data: GeolocationData,
        timestamp: f64,
        sensor_id: impl Into<String>,
        privacy: Privacy,
    ) -> Result<&mut Self, RequestError> {
        self.add_reading(SensorReading::Geolocation(Reading::new(
            data, timestamp, sensor_id, privacy,
        )))
    }

    /// Drop every sensor and reading.
    pub fn clear_sensor_data(&mut self) {
        self.sensors.clear();
        self.sensor_readings = SensorReadings::default();
    }

    /// Prior poses, or `None` if none were ever supplied since the last
    /// clear.
    #[must_use]
    pub fn prior_poses(&self) -> Option<&[GeoPoseResponse]> {
        self.prior_poses.as_deref()
    }

    /// Append earlier responses as localization hints.
    ///
    /// An empty input still creates the (empty) sequence.
    pub fn add_prior_poses<I>(&mut self, poses: I) -> &mut Self
    where
        I: IntoIterator<Item = GeoPoseResponse>,
    {
        self.prior_poses.get_or_insert_with(Vec::new).extend(poses);
        self
    }

    /// Append prior poses supplied as untyped JSON.
    ///
    /// # Errors
    /// Returns [`ModelError::PriorPosesNotArray`] when `poses` is not an array
    /// and [`ModelError::InvalidPriorPose`] when an element does not decode as
    /// a response. Nothing is appended on failure.
    pub fn add_prior_poses_json(&mut self, poses: &Value) -> Result<&mut Self, RequestError> {
        let items = poses.as_array().ok_or(ModelError::PriorPosesNotArray)?;
        let decoded = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                GeoPoseResponse::deserialize(item).map_err(|err| ModelError::InvalidPriorPose {
                    index,
                    message: err.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.add_prior_poses(decoded))
    }

    /// Remove the prior poses entirely.
    pub fn clear_prior_poses(&mut self) {
        self.prior_poses = None;
    }

    /// Project the request to its JSON wire text.
    ///
    /// # Errors
    /// Propagates `serde_json` failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    fn verify_sensor(&self, id: &str, expected: SensorType) -> Result<(), RequestError> {
        let sensor = self.sensor(id).ok_or_else(|| RequestError::UnknownSensor {
            id: id.to_owned(),
        })?;
        if sensor.sensor_type() == expected {
            Ok(())
        } else {
            Err(RequestError::SensorTypeMismatch {
                id: id.to_owned(),
                expected,
                actual: sensor.sensor_type(),
            })
        }
    }
}
