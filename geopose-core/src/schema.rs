//! Validation of JSON documents against the request and response shapes.
//!
//! A [`Schema`] names the document type a JSON text must decode into.
//! Validation is two-staged: the text must first be well-formed JSON
//! ([`SchemaError::Parse`]) and the parsed value must then conform to the
//! document's shape ([`SchemaError::Validation`]). Conformance is structural:
//! required keys, value kinds and enumerated names. The identity rules a
//! [`GeoPoseRequest`] enforces while it is being built are not re-checked.
//!
//! # Examples
//!
//! ```
//! use geopose_core::schema::{self, RequestSchema, SchemaError};
//!
//! let err = schema::validate(&RequestSchema, "not json").unwrap_err();
//! assert!(matches!(err, SchemaError::Parse { .. }));
//!
//! let err = schema::validate(&RequestSchema, "{}").unwrap_err();
//! assert!(matches!(err, SchemaError::Validation { .. }));
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::{GeoPoseRequest, GeoPoseResponse};

/// A JSON document failed validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The text is not well-formed JSON.
    #[error("unable to parse JSON content: {source}")]
    Parse {
        /// Parser diagnostic.
        #[source]
        source: serde_json::Error,
    },
    /// The JSON does not have the expected shape.
    #[error("document does not conform to the {schema} schema: {diagnostic}")]
    Validation {
        /// Name of the schema checked against.
        schema: &'static str,
        /// Diagnostic text produced by the decoder.
        diagnostic: String,
    },
}

/// A document shape that JSON can be checked against.
pub trait Schema {
    /// Typed form of a conforming document.
    type Document: DeserializeOwned;

    /// Human-readable schema name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Check already-parsed JSON and return its typed form.
    ///
    /// # Errors
    /// Returns [`SchemaError::Validation`] when `value` does not conform.
    fn parse_value(&self, value: Value) -> Result<Self::Document, SchemaError> {
        serde_json::from_value(value).map_err(|err| SchemaError::Validation {
            schema: self.name(),
            diagnostic: err.to_string(),
        })
    }

    /// Parse JSON text, check it and return its typed form.
    ///
    /// # Errors
    /// Returns [`SchemaError::Parse`] for malformed text and
    /// [`SchemaError::Validation`] for non-conforming documents.
    fn parse(&self, json: &str) -> Result<Self::Document, SchemaError> {
        let value: Value =
            serde_json::from_str(json).map_err(|source| SchemaError::Parse { source })?;
        self.parse_value(value)
    }
}

/// Shape of an outbound [`GeoPoseRequest`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSchema;

impl Schema for RequestSchema {
    type Document = GeoPoseRequest;

    fn name(&self) -> &'static str {
        "GeoPoseRequest"
    }
}

/// Shape of an inbound [`GeoPoseResponse`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseSchema;

impl Schema for ResponseSchema {
    type Document = GeoPoseResponse;

    fn name(&self) -> &'static str {
        "GeoPoseResponse"
    }
}

/// Check that `json` is a well-formed document conforming to `schema`.
///
/// # Errors
/// Returns [`SchemaError::Parse`] for malformed text and
/// [`SchemaError::Validation`] for non-conforming documents.
pub fn validate<S: Schema>(schema: &S, json: &str) -> Result<(), SchemaError> {
    schema.parse(json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GeoPose, Privacy, Reading, Sensor, SensorType};
    use rstest::rstest;

    fn request_json() -> String {
        let mut request = GeoPoseRequest::new("id").with_timestamp(3.0);
        request
            .add_sensor(Sensor::new("imu", SensorType::Accelerometer))
            .expect("sensor registers")
            .add_accelerometer_data(0.0, 9.8, 0.0, 3.0, "imu", Privacy::default())
            .expect("reading appends");
        request.to_json().expect("request serializes")
    }

    #[rstest]
    #[case("not json")]
    #[case("{")]
    #[case("")]
    fn malformed_text_is_a_parse_error(#[case] json: &str) {
        let err = validate(&RequestSchema, json).expect_err("malformed");
        assert!(matches!(err, SchemaError::Parse { .. }));
    }

    #[rstest]
    #[case("{}", "missing field")]
    #[case("5", "invalid type")]
    #[case(r#"{"id":"a","timestamp":"now","type":"geopose","sensors":[],"sensorReadings":{}}"#, "invalid type")]
    #[case(r#"{"id":"a","timestamp":1,"type":"geopose","sensors":[{"id":"s","type":"lidar"}],"sensorReadings":{}}"#, "unknown variant")]
    fn wrong_shape_is_a_validation_error(#[case] json: &str, #[case] fragment: &str) {
        let err = validate(&RequestSchema, json).expect_err("non-conforming");
        match err {
            SchemaError::Validation { schema, diagnostic } => {
                assert_eq!(schema, "GeoPoseRequest");
                assert!(diagnostic.contains(fragment), "diagnostic: {diagnostic}");
            }
            SchemaError::Parse { source } => panic!("unexpected parse error: {source}"),
        }
    }

    #[rstest]
    fn built_request_conforms() {
        let json = request_json();
        validate(&RequestSchema, &json).expect("request conforms");
        let parsed = RequestSchema.parse(&json).expect("request parses");
        assert_eq!(parsed.sensors().len(), 1);
    }

    #[rstest]
    fn request_is_not_a_response() {
        let err = validate(&ResponseSchema, &request_json()).expect_err("wrong schema");
        assert!(matches!(
            err,
            SchemaError::Validation {
                schema: "GeoPoseResponse",
                ..
            }
        ));
    }

    #[rstest]
    fn response_parses_to_typed_value() {
        let json = r#"{"id":"pose","timestamp":10,"accuracy":{"position":0.5,"orientation":2},"type":"geopose","geopose":{"position":{"lon":24.9,"lat":60.2,"h":12},"quaternion":{"x":0,"y":0,"z":0,"w":1}}}"#;
        let response = ResponseSchema.parse(json).expect("response conforms");
        assert_eq!(response.id, "pose");
        assert_eq!(response.geopose.quaternion, GeoPose::default().quaternion);
    }

    #[rstest]
    #[case("1700000000000.0", 1_700_000_000_000.0)]
    #[case("1.5", 1.5)]
    #[case("0", 0.0)]
    fn response_timestamp_accepts_any_number(#[case] timestamp: &str, #[case] expected: f64) {
        let json = format!(
            r#"{{"id":"pose","timestamp":{timestamp},"accuracy":{{"position":1,"orientation":1}},"type":"geopose","geopose":{{"position":{{"lon":0,"lat":0,"h":0}},"quaternion":{{"x":0,"y":0,"z":0,"w":1}}}}}}"#
        );
        validate(&ResponseSchema, &json).expect("response conforms");
        let response = ResponseSchema.parse(&json).expect("response parses");
        assert_eq!(response.timestamp, expected);
    }

    #[rstest]
    fn request_timestamps_accept_fractional_values() {
        let json = r#"{"id":"a","timestamp":1.5,"type":"geopose","sensors":[{"id":"imu","type":"accelerometer"}],"sensorReadings":{"accelerometerReadings":[{"x":0,"y":0,"z":0,"timestamp":2.25,"sensorId":"imu","privacy":{"dataRetention":[],"dataAcceptableUse":[],"dataSanitizationApplied":[],"dataSanitizationRequested":[]}}]}}"#;
        validate(&RequestSchema, json).expect("request conforms");
        let request = RequestSchema.parse(json).expect("request parses");
        assert_eq!(request.timestamp(), 1.5);
        let readings = request
            .sensor_readings()
            .accelerometer()
            .unwrap_or_default();
        assert_eq!(readings.first().map(Reading::timestamp), Some(2.25));
        assert_eq!(request.to_json().expect("request serializes"), json);
    }

    #[rstest]
    fn error_messages_carry_diagnostics() {
        let err = validate(&ResponseSchema, "{}").expect_err("non-conforming");
        let message = err.to_string();
        assert!(message.starts_with("document does not conform to the GeoPoseResponse schema"));
        assert!(message.contains("missing field"));
    }
}
