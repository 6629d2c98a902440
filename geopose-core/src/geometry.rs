//! Rotation and translation values shared by sensors and poses.
//!
//! Both types accept untyped JSON through `TryFrom<&serde_json::Value>`, in
//! either object (`{"x": .., "y": ..}`) or array (`[x, y, ..]`) form. Every
//! component must be a JSON number.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ModelError;
use crate::wire;

/// Orientation quaternion.
///
/// The default is the identity rotation `(0, 0, 0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    /// X component.
    #[serde(serialize_with = "wire::number")]
    pub x: f64,
    /// Y component.
    #[serde(serialize_with = "wire::number")]
    pub y: f64,
    /// Z component.
    #[serde(serialize_with = "wire::number")]
    pub z: f64,
    /// Scalar component.
    #[serde(serialize_with = "wire::number")]
    pub w: f64,
}

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Construct a quaternion from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TryFrom<&Value> for Quaternion {
    type Error = ModelError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let [x, y, z, w] =
            components(value, ["x", "y", "z", "w"]).ok_or(ModelError::InvalidRigRotation)?;
        Ok(Self { x, y, z, w })
    }
}

/// Three-component translation in metres.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    /// X offset.
    #[serde(serialize_with = "wire::number")]
    pub x: f64,
    /// Y offset.
    #[serde(serialize_with = "wire::number")]
    pub y: f64,
    /// Z offset.
    #[serde(serialize_with = "wire::number")]
    pub z: f64,
}

impl Vector3 {
    /// Construct a vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl TryFrom<&Value> for Vector3 {
    type Error = ModelError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let [x, y, z] =
            components(value, ["x", "y", "z"]).ok_or(ModelError::InvalidRigTranslation)?;
        Ok(Self { x, y, z })
    }
}

/// Read exactly `N` numeric components from an object or array.
///
/// Objects must carry exactly `keys`; arrays exactly `N` items.
fn components<const N: usize>(value: &Value, keys: [&str; N]) -> Option<[f64; N]> {
    let mut out = [0.0; N];
    match value {
        Value::Object(map) if map.len() == N => {
            for (slot, key) in out.iter_mut().zip(keys) {
                *slot = map.get(key)?.as_f64()?;
            }
        }
        Value::Array(items) if items.len() == N => {
            for (slot, item) in out.iter_mut().zip(items) {
                *slot = item.as_f64()?;
            }
        }
        _ => return None,
    }
    Some(out)
}
