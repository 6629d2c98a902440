//! Optional camera metadata: intrinsics and image orientation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;
use crate::wire;

/// Camera projection models, named after the COLMAP camera models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CameraModel {
    /// `f, cx, cy`
    SimplePinhole,
    /// `fx, fy, cx, cy`
    Pinhole,
    /// `f, cx, cy, k`
    SimpleRadial,
    /// `f, cx, cy, k1, k2`
    Radial,
    /// `fx, fy, cx, cy, k1, k2, p1, p2`
    Opencv,
    /// `fx, fy, cx, cy, k1, k2, k3, k4`
    OpencvFisheye,
    /// `fx, fy, cx, cy, k1, k2, p1, p2, k3, k4, k5, k6`
    FullOpencv,
    /// `fx, fy, cx, cy, omega`
    Fov,
    /// `f, cx, cy, k`
    SimpleRadialFisheye,
    /// `f, cx, cy, k1, k2`
    RadialFisheye,
    /// `fx, fy, cx, cy, k1, k2, p1, p2, k3, k4, sx1, sy1`
    ThinPrism,
    /// Model not known; any parameter list is accepted.
    #[default]
    Unknown,
}

impl CameraModel {
    /// Every supported model.
    pub const ALL: [Self; 12] = [
        Self::SimplePinhole,
        Self::Pinhole,
        Self::SimpleRadial,
        Self::Radial,
        Self::Opencv,
        Self::OpencvFisheye,
        Self::FullOpencv,
        Self::Fov,
        Self::SimpleRadialFisheye,
        Self::RadialFisheye,
        Self::ThinPrism,
        Self::Unknown,
    ];

    /// Wire name of the model.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SimplePinhole => "SIMPLE_PINHOLE",
            Self::Pinhole => "PINHOLE",
            Self::SimpleRadial => "SIMPLE_RADIAL",
            Self::Radial => "RADIAL",
            Self::Opencv => "OPENCV",
            Self::OpencvFisheye => "OPENCV_FISHEYE",
            Self::FullOpencv => "FULL_OPENCV",
            Self::Fov => "FOV",
            Self::SimpleRadialFisheye => "SIMPLE_RADIAL_FISHEYE",
            Self::RadialFisheye => "RADIAL_FISHEYE",
            Self::ThinPrism => "THIN_PRISM",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Number of intrinsic parameters the model takes, if fixed.
    #[must_use]
    pub const fn param_count(self) -> Option<usize> {
        match self {
            Self::SimplePinhole => Some(3),
            Self::Pinhole | Self::SimpleRadial | Self::SimpleRadialFisheye => Some(4),
            Self::Radial | Self::Fov | Self::RadialFisheye => Some(5),
            Self::Opencv | Self::OpencvFisheye => Some(8),
            Self::FullOpencv | Self::ThinPrism => Some(12),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for CameraModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CameraModel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| ModelError::InvalidCameraModel(s.to_owned()))
    }
}

/// Camera intrinsics attached to a camera reading or sensor.
///
/// [`CameraParam::new`] and the setters keep the parameter count in line with
/// the model. Decoding accepts any count, as services do; call
/// [`CameraParam::check_param_count`] on decoded values that must be complete.
///
/// # Examples
///
/// ```
/// use geopose_core::{CameraModel, CameraParam};
///
/// # fn main() -> Result<(), geopose_core::ModelError> {
/// let params = CameraParam::new(CameraModel::Pinhole, vec![500.0, 500.0, 320.0, 240.0])?;
/// assert_eq!(params.model(), CameraModel::Pinhole);
/// assert!(CameraParam::new(CameraModel::Pinhole, vec![500.0]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraParam {
    #[serde(default)]
    model: CameraModel,
    #[serde(default, serialize_with = "wire::numbers")]
    model_params: Vec<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::optional_pair"
    )]
    min_max_depth: Option<[f64; 2]>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::optional_pair"
    )]
    min_max_disparity: Option<[f64; 2]>,
}

impl CameraParam {
    /// Construct parameters for `model`.
    ///
    /// # Errors
    /// Returns [`ModelError::CameraParamCount`] when the model takes a fixed
    /// number of parameters and `model_params` has a different length.
    pub fn new(model: CameraModel, model_params: Vec<f64>) -> Result<Self, ModelError> {
        param_count_fits(model, &model_params)?;
        Ok(Self {
            model,
            model_params,
            min_max_depth: None,
            min_max_disparity: None,
        })
    }

    /// Attach the `[min, max]` depth range.
    #[must_use]
    pub const fn with_min_max_depth(mut self, min: f64, max: f64) -> Self {
        self.min_max_depth = Some([min, max]);
        self
    }

    /// Attach the `[min, max]` disparity range.
    #[must_use]
    pub const fn with_min_max_disparity(mut self, min: f64, max: f64) -> Self {
        self.min_max_disparity = Some([min, max]);
        self
    }

    /// Projection model.
    #[must_use]
    pub const fn model(&self) -> CameraModel {
        self.model
    }

    /// Replace the projection model, keeping the current parameters.
    ///
    /// # Errors
    /// Returns [`ModelError::CameraParamCount`] when the current parameters do
    /// not fit `model`; the current model is kept.
    pub fn set_model(&mut self, model: CameraModel) -> Result<(), ModelError> {
        param_count_fits(model, &self.model_params)?;
        self.model = model;
        Ok(())
    }

    /// Replace the projection model by its wire name.
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidCameraModel`] for unknown names and
    /// [`ModelError::CameraParamCount`] as [`CameraParam::set_model`]; the
    /// current model is kept.
    pub fn set_model_name(&mut self, name: &str) -> Result<(), ModelError> {
        self.set_model(name.parse()?)
    }

    /// Replace the model and its parameters together.
    ///
    /// # Errors
    /// As [`CameraParam::new`]; nothing is changed on failure.
    pub fn set_model_with_params(
        &mut self,
        model: CameraModel,
        model_params: Vec<f64>,
    ) -> Result<(), ModelError> {
        param_count_fits(model, &model_params)?;
        self.model = model;
        self.model_params = model_params;
        Ok(())
    }

    /// Confirm the parameter count matches the model.
    ///
    /// # Errors
    /// Returns [`ModelError::CameraParamCount`] on a mismatch.
    pub fn check_param_count(&self) -> Result<(), ModelError> {
        param_count_fits(self.model, &self.model_params)
    }

    /// Intrinsic parameters in model order.
    #[must_use]
    pub fn model_params(&self) -> &[f64] {
        &self.model_params
    }

    /// Replace the intrinsic parameters.
    ///
    /// # Errors
    /// Returns [`ModelError::CameraParamCount`] when `model_params` does not
    /// fit the current model; the current parameters are kept.
    pub fn set_model_params(&mut self, model_params: Vec<f64>) -> Result<(), ModelError> {
        param_count_fits(self.model, &model_params)?;
        self.model_params = model_params;
        Ok(())
    }

    /// Depth range, if known.
    #[must_use]
    pub const fn min_max_depth(&self) -> Option<[f64; 2]> {
        self.min_max_depth
    }

    /// Disparity range, if known.
    #[must_use]
    pub const fn min_max_disparity(&self) -> Option<[f64; 2]> {
        self.min_max_disparity
    }
}

fn param_count_fits(model: CameraModel, model_params: &[f64]) -> Result<(), ModelError> {
    match model.param_count() {
        Some(expected) if expected != model_params.len() => Err(ModelError::CameraParamCount {
            model,
            expected,
            actual: model_params.len(),
        }),
        _ => Ok(()),
    }
}

/// Orientation of a captured image relative to the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageOrientation {
    /// Whether the image is mirrored.
    pub mirrored: bool,
    /// Clockwise rotation in degrees.
    #[serde(serialize_with = "wire::number")]
    pub rotation: f64,
}

impl ImageOrientation {
    /// Construct an orientation.
    #[must_use]
    pub const fn new(mirrored: bool, rotation: f64) -> Self {
        Self { mirrored, rotation }
    }
}
