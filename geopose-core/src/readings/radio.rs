//! Radio beacon sightings.

use serde::{Deserialize, Serialize};

use super::Reading;
use crate::wire;

/// A Bluetooth device seen during a scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BluetoothData {
    /// Device address.
    pub address: String,
    /// Received signal strength in dBm.
    #[serde(rename = "RSSI", serialize_with = "wire::number")]
    pub rssi: f64,
    /// Advertised device name.
    pub name: String,
}

impl BluetoothData {
    /// Construct a sighting.
    #[must_use]
    pub fn new(address: impl Into<String>, rssi: f64, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            rssi,
            name: name.into(),
        }
    }
}

/// A WiFi access point seen during a scan.
///
/// Scan times are milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WifiData {
    /// Access point hardware address.
    #[serde(rename = "BSSID")]
    pub bssid: String,
    /// Channel frequency in MHz.
    #[serde(serialize_with = "wire::number")]
    pub frequency: f64,
    /// Received signal strength in dBm.
    #[serde(rename = "RSSI", serialize_with = "wire::number")]
    pub rssi: f64,
    /// Network name.
    #[serde(rename = "SSID")]
    pub ssid: String,
    /// Start of the scan that saw the access point.
    #[serde(serialize_with = "wire::number")]
    pub scan_time_start: f64,
    /// End of the scan that saw the access point.
    #[serde(serialize_with = "wire::number")]
    pub scan_time_end: f64,
}

impl WifiData {
    /// Construct a sighting.
    #[must_use]
    pub fn new(
        bssid: impl Into<String>,
        frequency: f64,
        rssi: f64,
        ssid: impl Into<String>,
        scan_time_start: f64,
        scan_time_end: f64,
    ) -> Self {
        Self {
            bssid: bssid.into(),
            frequency,
            rssi,
            ssid: ssid.into(),
            scan_time_start,
            scan_time_end,
        }
    }
}

/// Bluetooth sighting with its base fields.
pub type BluetoothReading = Reading<BluetoothData>;
/// WiFi sighting with its base fields.
pub type WifiReading = Reading<WifiData>;
