//! Camera frames.

use std::fmt;
use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use super::Reading;
use crate::{CameraParam, ImageOrientation, ModelError};

/// Pixel encoding of a camera frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImageFormat {
    /// 8-bit RGBA.
    Rgba32,
    /// 8-bit greyscale.
    Gray8,
    /// Depth map.
    Depth,
    /// JPEG file.
    Jpg,
}

impl ImageFormat {
    /// Every supported format.
    pub const ALL: [Self; 4] = [Self::Rgba32, Self::Gray8, Self::Depth, Self::Jpg];

    /// Wire name of the format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rgba32 => "RGBA32",
            Self::Gray8 => "GRAY8",
            Self::Depth => "DEPTH",
            Self::Jpg => "JPG",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageFormat {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| ModelError::InvalidImageFormat(s.to_owned()))
    }
}

/// One camera frame.
///
/// `image_bytes` holds the base64 text of the encoded frame.
///
/// # Examples
///
/// ```
/// use geopose_core::{CameraData, ImageFormat};
///
/// let frame = CameraData::from_image_bytes(ImageFormat::Gray8, [2, 1], &[0, 255]);
/// assert_eq!(frame.image_bytes, "AP8=");
/// assert_eq!(frame.sequence_number, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraData {
    /// Position of the frame in its capture sequence.
    #[serde(default)]
    pub sequence_number: u64,
    /// Pixel encoding.
    pub image_format: ImageFormat,
    /// `[width, height]` in pixels.
    pub size: [u32; 2],
    /// Base64 text of the frame.
    pub image_bytes: String,
    /// Orientation relative to the sensor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_orientation: Option<ImageOrientation>,
    /// Intrinsics in effect for this frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<CameraParam>,
}

impl CameraData {
    /// Describe a frame whose bytes are already base64 encoded.
    #[must_use]
    pub fn new(image_format: ImageFormat, size: [u32; 2], image_bytes: impl Into<String>) -> Self {
        Self {
            sequence_number: 0,
            image_format,
            size,
            image_bytes: image_bytes.into(),
            image_orientation: None,
            params: None,
        }
    }

    /// Describe a frame from its raw bytes.
    #[must_use]
    pub fn from_image_bytes(image_format: ImageFormat, size: [u32; 2], bytes: &[u8]) -> Self {
        Self::new(image_format, size, STANDARD.encode(bytes))
    }

    /// Set the position in the capture sequence.
    #[must_use]
    pub const fn with_sequence_number(mut self, sequence_number: u64) -> Self {
        self.sequence_number = sequence_number;
        self
    }

    /// Attach the image orientation.
    #[must_use]
    pub const fn with_image_orientation(mut self, orientation: ImageOrientation) -> Self {
        self.image_orientation = Some(orientation);
        self
    }

    /// Attach camera intrinsics.
    #[must_use]
    pub fn with_params(mut self, params: CameraParam) -> Self {
        self.params = Some(params);
        self
    }

    /// Replace the image format by its wire name.
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidImageFormat`] for unknown names; the
    /// current format is kept.
    pub fn set_image_format(&mut self, name: &str) -> Result<(), ModelError> {
        self.image_format = name.parse()?;
        Ok(())
    }
}

/// Camera frame with its base fields.
pub type CameraReading = Reading<CameraData>;
