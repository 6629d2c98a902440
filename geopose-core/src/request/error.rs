//! Errors raised while assembling a request.

use thiserror::Error;

use crate::{ModelError, SensorType};

/// A sensor or reading could not be added to a request.
///
/// The request is left exactly as it was before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// A sensor with the same id is already registered.
    #[error("sensor id {id:?} is already registered")]
    DuplicateSensorId {
        /// Offending identifier.
        id: String,
    },
    /// A reading referenced a sensor that is not registered.
    #[error("no sensor registered with id {id:?}")]
    UnknownSensor {
        /// Identifier the reading referenced.
        id: String,
    },
    /// A reading referenced a sensor of another type.
    #[error("sensor {id:?} is of type {actual}, expected {expected}")]
    SensorTypeMismatch {
        /// Identifier the reading referenced.
        id: String,
        /// Type required by the reading variant.
        expected: SensorType,
        /// Type of the registered sensor.
        actual: SensorType,
    },
    /// A value did not fit the data model.
    #[error(transparent)]
    Model(#[from] ModelError),
}
