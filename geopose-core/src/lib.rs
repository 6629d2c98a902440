//! Core domain types for GeoPose requests and responses.
//!
//! A [`GeoPoseRequest`] accumulates [`Sensor`] declarations and the readings
//! taken from them. Every reading is checked against its sensor when it is
//! added, so a request that exists is always internally consistent: sensor
//! ids are unique and every reading points at a registered sensor of the
//! matching [`SensorType`].
//!
//! Requests serialize to the protocol's JSON wire format through `serde`.
//! The [`schema`] module validates outbound and inbound documents against the
//! request and response shapes.
//!
//! # Examples
//!
//! ```
//! use geopose_core::{GeoPoseRequest, Privacy, Sensor, SensorType};
//!
//! # fn main() -> Result<(), geopose_core::RequestError> {
//! let mut request = GeoPoseRequest::new("request_uuid");
//! request
//!     .add_sensor(Sensor::new("imu", SensorType::Accelerometer))?
//!     .add_accelerometer_data(0.0, 0.0, 9.81, 1_700_000_000_000.0, "imu", Privacy::default())?;
//! assert_eq!(request.sensor_readings().len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod geometry;
mod options;
mod privacy;
pub mod readings;
mod request;
mod response;
pub mod schema;
mod sensor;
mod sensor_readings;
mod wire;

pub use error::ModelError;
pub use geometry::{Quaternion, Vector3};
pub use options::{CameraModel, CameraParam, ImageOrientation};
pub use privacy::Privacy;
pub use readings::{
    AccelerometerReading, BluetoothData, BluetoothReading, CameraData, CameraReading,
    GeolocationData, GeolocationReading, GyroscopeReading, ImageFormat, MagnetometerReading,
    Reading, SensorReading, WifiData, WifiReading, XyzData,
};
pub use request::{DEFAULT_REQUEST_TYPE, GeoPoseRequest, RequestError};
pub use response::{GeoPose, GeoPoseAccuracy, GeoPoseResponse, Position};
pub use schema::{RequestSchema, ResponseSchema, Schema, SchemaError};
pub use sensor::{Sensor, SensorType};
pub use sensor_readings::SensorReadings;
