use serde::{Deserialize, Serialize};

use super::Reading;
use crate::wire;

/// A position fix in WGS84.
///
/// Field semantics follow the W3C Geolocation API: accuracies are in metres,
/// `heading` is degrees clockwise from true north and `speed` is m/s.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeolocationData {
    /// Latitude in decimal degrees.
    #[serde(serialize_with = "wire::number")]
    pub latitude: f64,
    /// Longitude in decimal degrees.
    #[serde(serialize_with = "wire::number")]
    pub longitude: f64,
    /// Height above the ellipsoid in metres.
    #[serde(serialize_with = "wire::number")]
    pub altitude: f64,
    /// Horizontal accuracy.
    #[serde(serialize_with = "wire::number")]
    pub accuracy: f64,
    /// Vertical accuracy.
    #[serde(serialize_with = "wire::number")]
    pub altitude_accuracy: f64,
    /// Direction of travel.
    #[serde(serialize_with = "wire::number")]
    pub heading: f64,
    /// Horizontal speed.
    #[serde(serialize_with = "wire::number")]
    pub speed: f64,
}

/// Position fix with its base fields.
pub type GeolocationReading = Reading<GeolocationData>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Privacy;
    use rstest::rstest;

    #[rstest]
    fn fix_fields_precede_base_fields() {
        let data = GeolocationData {
            latitude: 60.17,
            longitude: 24.94,
            altitude: 10.0,
            accuracy: 5.0,
            altitude_accuracy: 3.0,
            heading: 90.0,
            speed: 0.5,
        };
        let reading = GeolocationReading::new(data, 9.0, "gps", Privacy::default());
        let json = serde_json::to_string(&reading).expect("reading serializes");
        assert!(json.starts_with(
            r#"{"latitude":60.17,"longitude":24.94,"altitude":10,"accuracy":5,"altitudeAccuracy":3,"heading":90,"speed":0.5,"timestamp":9,"sensorId":"gps","#
        ));
    }
}
