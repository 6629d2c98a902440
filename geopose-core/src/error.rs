//! Errors raised when a value does not fit the GeoPose data model.

use std::convert::Infallible;

use thiserror::Error;

use crate::CameraModel;

/// A value had the wrong shape or named an unsupported enumeration member.
///
/// These are raised by the mutating call that received the value; the target
/// is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The sensor type is not one of the supported kinds.
    #[error("invalid sensor type {0:?}")]
    InvalidSensorType(String),
    /// The image format is not one of the supported encodings.
    #[error("unknown image format {0:?}")]
    InvalidImageFormat(String),
    /// The camera model is not one of the supported models.
    #[error("invalid camera model {0:?}")]
    InvalidCameraModel(String),
    /// The parameter list does not match the camera model.
    #[error("camera model {model} takes {expected} parameters, got {actual}")]
    CameraParamCount {
        /// Model the parameters were supplied for.
        model: CameraModel,
        /// Number of parameters the model takes.
        expected: usize,
        /// Number of parameters supplied.
        actual: usize,
    },
    /// A rig rotation lacked one of the four numeric components.
    #[error("rig rotation requires numeric x, y, z and w components")]
    InvalidRigRotation,
    /// A rig translation was not exactly three numeric components.
    #[error("rig translation requires exactly three numeric components")]
    InvalidRigTranslation,
    /// Prior poses were not supplied as an array.
    #[error("prior poses must be an array")]
    PriorPosesNotArray,
    /// An element of the prior poses array is not a GeoPose response.
    #[error("prior pose at index {index} is not a GeoPose response: {message}")]
    InvalidPriorPose {
        /// Position of the offending element.
        index: usize,
        /// Decoder diagnostic for the element.
        message: String,
    },
}

impl From<Infallible> for ModelError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
