//! Facade crate for the GeoPose client library.
//!
//! This crate re-exports the request/response data model and exposes the
//! HTTP client behind the `client` feature flag.

#![forbid(unsafe_code)]

pub use geopose_core::{
    AccelerometerReading, BluetoothData, BluetoothReading, CameraData, CameraModel, CameraParam,
    CameraReading, GeoPose, GeoPoseAccuracy, GeoPoseRequest, GeoPoseResponse, GeolocationData,
    GeolocationReading, GyroscopeReading, ImageFormat, ImageOrientation, MagnetometerReading,
    ModelError, Position, Privacy, Quaternion, Reading, RequestError, RequestSchema,
    ResponseSchema, Schema, SchemaError, Sensor, SensorReading, SensorReadings, SensorType,
    Vector3, WifiData, WifiReading, XyzData, schema,
};

#[cfg(feature = "client")]
pub use geopose_client::{
    DEFAULT_ENDPOINT, Endpoint, GeoPoseClient, GeoPoseClientConfig, HttpTransport,
    OBJECT_ENDPOINT, SendError, ServiceResponse, Transport, TransportError, TransportOptions,
    endpoint_url,
};
