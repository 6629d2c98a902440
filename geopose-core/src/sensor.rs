//! Sensor declarations referenced by readings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CameraParam, ModelError, Quaternion, Vector3};

/// Kinds of sensor the protocol understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorType {
    /// Image sensor.
    Camera,
    /// Satellite or network positioning.
    Geolocation,
    /// WiFi access point scanner.
    Wifi,
    /// Bluetooth beacon scanner.
    Bluetooth,
    /// Linear acceleration.
    Accelerometer,
    /// Angular velocity.
    Gyroscope,
    /// Magnetic field.
    Magnetometer,
}

impl SensorType {
    /// Every supported sensor type.
    pub const ALL: [Self; 7] = [
        Self::Camera,
        Self::Geolocation,
        Self::Wifi,
        Self::Bluetooth,
        Self::Accelerometer,
        Self::Gyroscope,
        Self::Magnetometer,
    ];

    /// Wire name of the sensor type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::Geolocation => "geolocation",
            Self::Wifi => "wifi",
            Self::Bluetooth => "bluetooth",
            Self::Accelerometer => "accelerometer",
            Self::Gyroscope => "gyroscope",
            Self::Magnetometer => "magnetometer",
        }
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensorType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ModelError::InvalidSensorType(s.to_owned()))
    }
}

/// A physical or logical input source.
///
/// Readings reference a sensor by [`Sensor::id`]. The optional rig fields
/// describe where the sensor sits on a multi-sensor device.
///
/// # Examples
///
/// ```
/// use geopose_core::{Sensor, SensorType};
/// use serde_json::json;
///
/// # fn main() -> Result<(), geopose_core::ModelError> {
/// let mut sensor = Sensor::new("cam0", SensorType::Camera).with_name("rear");
/// sensor.set_rig_rotation(&json!({"x": 0.0, "y": 0.0, "z": 0.0, "w": 1.0}))?;
/// assert!(sensor.set_rig_translation(&json!([1, 2])).is_err());
/// assert!(sensor.set_type_name("myspecialsensortype").is_err());
/// assert_eq!(sensor.sensor_type(), SensorType::Camera);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sensor {
    id: String,
    #[serde(rename = "type")]
    sensor_type: SensorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rig_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rig_rotation: Option<Quaternion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rig_translation: Option<Vector3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<CameraParam>,
}

impl Sensor {
    /// Declare a sensor with the given id and type.
    #[must_use]
    pub fn new(id: impl Into<String>, sensor_type: SensorType) -> Self {
        Self {
            id: id.into(),
            sensor_type,
            name: None,
            model: None,
            rig_identifier: None,
            rig_rotation: None,
            rig_translation: None,
            params: None,
        }
    }

    /// Declare a sensor whose type is given by its wire name.
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidSensorType`] when `type_name` is not a
    /// supported sensor type.
    pub fn with_type_name(id: impl Into<String>, type_name: &str) -> Result<Self, ModelError> {
        Ok(Self::new(id, type_name.parse()?))
    }

    /// Attach a human-readable name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a hardware model string.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Attach the identifier of the rig carrying this sensor.
    #[must_use]
    pub fn with_rig_identifier(mut self, rig_identifier: impl Into<String>) -> Self {
        self.rig_identifier = Some(rig_identifier.into());
        self
    }

    /// Attach the rotation relative to the rig origin.
    #[must_use]
    pub const fn with_rig_rotation(mut self, rotation: Quaternion) -> Self {
        self.rig_rotation = Some(rotation);
        self
    }

    /// Attach the translation relative to the rig origin.
    #[must_use]
    pub const fn with_rig_translation(mut self, translation: Vector3) -> Self {
        self.rig_translation = Some(translation);
        self
    }

    /// Attach camera intrinsics.
    #[must_use]
    pub fn with_params(mut self, params: CameraParam) -> Self {
        self.params = Some(params);
        self
    }

    /// Sensor identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Replace the identifier.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Sensor type.
    #[must_use]
    pub const fn sensor_type(&self) -> SensorType {
        self.sensor_type
    }

    /// Replace the sensor type.
    pub const fn set_sensor_type(&mut self, sensor_type: SensorType) {
        self.sensor_type = sensor_type;
    }

    /// Replace the sensor type by its wire name.
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidSensorType`] for unsupported names; the
    /// current type is kept.
    pub fn set_type_name(&mut self, type_name: &str) -> Result<(), ModelError> {
        self.sensor_type = type_name.parse()?;
        Ok(())
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Replace or clear the name.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Hardware model string.
    #[must_use]
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Replace or clear the hardware model.
    pub fn set_model(&mut self, model: Option<String>) {
        self.model = model;
    }

    /// Rig identifier.
    #[must_use]
    pub fn rig_identifier(&self) -> Option<&str> {
        self.rig_identifier.as_deref()
    }

    /// Replace or clear the rig identifier.
    pub fn set_rig_identifier(&mut self, rig_identifier: Option<String>) {
        self.rig_identifier = rig_identifier;
    }

    /// Rotation relative to the rig origin.
    #[must_use]
    pub const fn rig_rotation(&self) -> Option<Quaternion> {
        self.rig_rotation
    }

    /// Replace the rig rotation.
    ///
    /// Accepts a [`Quaternion`] or an untyped JSON value with four numeric
    /// components.
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidRigRotation`] when a component is missing
    /// or not numeric; the current rotation is kept.
    pub fn set_rig_rotation<Q>(&mut self, rotation: Q) -> Result<(), ModelError>
    where
        Q: TryInto<Quaternion>,
        Q::Error: Into<ModelError>,
    {
        self.rig_rotation = Some(rotation.try_into().map_err(Into::into)?);
        Ok(())
    }

    /// Translation relative to the rig origin.
    #[must_use]
    pub const fn rig_translation(&self) -> Option<Vector3> {
        self.rig_translation
    }

    /// Replace the rig translation.
    ///
    /// Accepts a [`Vector3`], a `[f64; 3]`, or an untyped JSON value with
    /// exactly three numeric components.
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidRigTranslation`] when the value does not
    /// have exactly three numeric components; the current translation is
    /// kept.
    pub fn set_rig_translation<V>(&mut self, translation: V) -> Result<(), ModelError>
    where
        V: TryInto<Vector3>,
        V::Error: Into<ModelError>,
    {
        self.rig_translation = Some(translation.try_into().map_err(Into::into)?);
        Ok(())
    }

    /// Camera intrinsics.
    #[must_use]
    pub const fn params(&self) -> Option<&CameraParam> {
        self.params.as_ref()
    }

    /// Replace or clear the camera intrinsics.
    pub fn set_params(&mut self, params: Option<CameraParam>) {
        self.params = params;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    const SENSOR_ID: &str = "sensorid";

    #[fixture]
    fn camera() -> Sensor {
        Sensor::new(SENSOR_ID, SensorType::Camera)
    }

    #[rstest]
    fn constructor_keeps_id_and_type(camera: Sensor) {
        assert_eq!(camera.id(), SENSOR_ID);
        assert_eq!(camera.sensor_type(), SensorType::Camera);
        assert!(camera.name().is_none());
        assert!(camera.model().is_none());
        assert!(camera.rig_identifier().is_none());
        assert!(camera.params().is_none());
    }

    #[rstest]
    #[case("camera", SensorType::Camera)]
    #[case("wifi", SensorType::Wifi)]
    #[case("magnetometer", SensorType::Magnetometer)]
    fn type_names_parse(#[case] name: &str, #[case] expected: SensorType) {
        let sensor = Sensor::with_type_name(SENSOR_ID, name).expect("supported type");
        assert_eq!(sensor.sensor_type(), expected);
    }

    #[rstest]
    #[case("myspecialsensortype")]
    #[case("Camera")]
    #[case("5")]
    fn unsupported_type_names_fail(mut camera: Sensor, #[case] name: &str) {
        let err = camera.set_type_name(name).expect_err("unsupported type");
        assert_eq!(err, ModelError::InvalidSensorType(name.to_owned()));
        assert_eq!(camera.sensor_type(), SensorType::Camera);
    }

    #[rstest]
    fn rig_rotation_requires_all_components(mut camera: Sensor) {
        camera
            .set_rig_rotation(&json!({"x": 0.1, "y": 0.2, "z": 0.3, "w": 1}))
            .expect("complete quaternion");
        assert_eq!(camera.rig_rotation(), Some(Quaternion::new(0.1, 0.2, 0.3, 1.0)));

        assert!(camera.set_rig_rotation(&json!({})).is_err());
        assert!(
            camera
                .set_rig_rotation(&json!({"x": 0.1, "y": 0.2, "z": 0.3}))
                .is_err()
        );
        assert_eq!(camera.rig_rotation(), Some(Quaternion::new(0.1, 0.2, 0.3, 1.0)));
    }

    #[rstest]
    fn rig_translation_requires_three_numbers(mut camera: Sensor) {
        camera
            .set_rig_translation([0.1, 0.2, 0.3])
            .expect("typed translation");
        assert!(camera.set_rig_translation(&json!([1, 2])).is_err());
        assert!(camera.set_rig_translation(&json!([1, 2, "3"])).is_err());
        assert_eq!(camera.rig_translation(), Some(Vector3::new(0.1, 0.2, 0.3)));
    }

    #[rstest]
    fn required_json_lists_id_type_then_names(camera: Sensor) {
        let sensor = camera.with_name("name").with_model("model");
        let json = serde_json::to_string(&sensor).expect("sensor serializes");
        assert_eq!(
            json,
            r#"{"id":"sensorid","type":"camera","name":"name","model":"model"}"#
        );
    }

    #[rstest]
    fn rig_json_follows_required_fields(camera: Sensor) {
        let sensor = camera
            .with_rig_identifier("identifier")
            .with_rig_rotation(Quaternion::new(0.1, 0.2, 0.3, 1.0))
            .with_rig_translation(Vector3::new(0.1, 0.2, 0.3));
        let json = serde_json::to_string(&sensor).expect("sensor serializes");
        assert_eq!(
            json,
            r#"{"id":"sensorid","type":"camera","rigIdentifier":"identifier","rigRotation":{"x":0.1,"y":0.2,"z":0.3,"w":1},"rigTranslation":{"x":0.1,"y":0.2,"z":0.3}}"#
        );
    }

    #[rstest]
    fn params_serialize_last(camera: Sensor) {
        let sensor = camera.with_name("rear").with_params(CameraParam::default());
        let json = serde_json::to_string(&sensor).expect("sensor serializes");
        assert_eq!(
            json,
            r#"{"id":"sensorid","type":"camera","name":"rear","params":{"model":"UNKNOWN","modelParams":[]}}"#
        );
    }

    #[rstest]
    fn unknown_type_is_rejected_on_decode() {
        let result: Result<Sensor, _> =
            serde_json::from_str(r#"{"id":"a","type":"myspecialsensortype"}"#);
        assert!(result.is_err());
    }
}
