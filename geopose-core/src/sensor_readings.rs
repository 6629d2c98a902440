//! Per-variant reading sequences.

use serde::{Deserialize, Serialize};

use crate::{
    AccelerometerReading, BluetoothReading, CameraReading, GeolocationReading, GyroscopeReading,
    MagnetometerReading, SensorReading, WifiReading,
};

/// Readings grouped by variant, in submission order.
///
/// A sequence exists only once a reading of its variant has been added, and
/// absent sequences are left out of the JSON projection, so an empty
/// container serializes as `{}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorReadings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    accelerometer_readings: Option<Vec<AccelerometerReading>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bluetooth_readings: Option<Vec<BluetoothReading>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    camera_readings: Option<Vec<CameraReading>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    geolocation_readings: Option<Vec<GeolocationReading>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gyroscope_readings: Option<Vec<GyroscopeReading>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    magnetometer_readings: Option<Vec<MagnetometerReading>>,
    #[serde(
        default,
        rename = "wiFiReadings",
        skip_serializing_if = "Option::is_none"
    )]
    wifi_readings: Option<Vec<WifiReading>>,
}

impl SensorReadings {
    /// Camera frames, if any were added.
    #[must_use]
    pub fn camera(&self) -> Option<&[CameraReading]> {
        self.camera_readings.as_deref()
    }

    /// Position fixes, if any were added.
    #[must_use]
    pub fn geolocation(&self) -> Option<&[GeolocationReading]> {
        self.geolocation_readings.as_deref()
    }

    /// WiFi sightings, if any were added.
    #[must_use]
    pub fn wifi(&self) -> Option<&[WifiReading]> {
        self.wifi_readings.as_deref()
    }

    /// Bluetooth sightings, if any were added.
    #[must_use]
    pub fn bluetooth(&self) -> Option<&[BluetoothReading]> {
        self.bluetooth_readings.as_deref()
    }

    /// Accelerometer samples, if any were added.
    #[must_use]
    pub fn accelerometer(&self) -> Option<&[AccelerometerReading]> {
        self.accelerometer_readings.as_deref()
    }

    /// Gyroscope samples, if any were added.
    #[must_use]
    pub fn gyroscope(&self) -> Option<&[GyroscopeReading]> {
        self.gyroscope_readings.as_deref()
    }

    /// Magnetometer samples, if any were added.
    #[must_use]
    pub fn magnetometer(&self) -> Option<&[MagnetometerReading]> {
        self.magnetometer_readings.as_deref()
    }

    /// Total number of readings across all variants.
    #[must_use]
    pub fn len(&self) -> usize {
        [
            self.camera_readings.as_ref().map(Vec::len),
            self.geolocation_readings.as_ref().map(Vec::len),
            self.wifi_readings.as_ref().map(Vec::len),
            self.bluetooth_readings.as_ref().map(Vec::len),
            self.accelerometer_readings.as_ref().map(Vec::len),
            self.gyroscope_readings.as_ref().map(Vec::len),
            self.magnetometer_readings.as_ref().map(Vec::len),
        ]
        .into_iter()
        .flatten()
        .sum()
    }

    /// Whether no reading of any variant is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a reading to its variant's sequence, creating it if needed.
    ///
    /// Identity checks belong to the owning request.
    pub(crate) fn push(&mut self, reading: SensorReading) {
        match reading {
            SensorReading::Camera(r) => self.camera_readings.get_or_insert_with(Vec::new).push(r),
            SensorReading::Geolocation(r) => {
                self.geolocation_readings.get_or_insert_with(Vec::new).push(r);
            }
            SensorReading::Wifi(r) => self.wifi_readings.get_or_insert_with(Vec::new).push(r),
            SensorReading::Bluetooth(r) => {
                self.bluetooth_readings.get_or_insert_with(Vec::new).push(r);
            }
            SensorReading::Accelerometer(r) => {
                self.accelerometer_readings.get_or_insert_with(Vec::new).push(r);
            }
            SensorReading::Gyroscope(r) => {
                self.gyroscope_readings.get_or_insert_with(Vec::new).push(r);
            }
            SensorReading::Magnetometer(r) => {
                self.magnetometer_readings.get_or_insert_with(Vec::new).push(r);
            }
        }
    }
}
