//! Test helpers for writing GeoPose documents into a scratch workspace.

use camino::{Utf8Path, Utf8PathBuf};
use geopose_core::{GeoPoseRequest, Privacy, Sensor, SensorType};
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

/// Temporary directory addressed through UTF-8 paths.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write `contents` to `name` and return the full path.
    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents)
        .unwrap_or_else(|err| panic!("failed to write {path}: {err}"));
}

/// A conforming request with one accelerometer reading.
pub(super) fn request_json() -> String {
    let mut request = GeoPoseRequest::new("request_uuid").with_timestamp(1_000.0);
    request
        .add_sensor(Sensor::new("imu", SensorType::Accelerometer))
        .expect("sensor registers")
        .add_accelerometer_data(0.0, 0.0, 9.81, 1_000.0, "imu", Privacy::default())
        .expect("reading appends");
    request.to_json().expect("request serializes")
}

/// A conforming response.
pub(super) fn response_json() -> Value {
    json!({
        "id": "pose",
        "timestamp": 1_001,
        "accuracy": {"position": 1, "orientation": 2},
        "type": "geopose",
        "geopose": {
            "position": {"lon": 2.35, "lat": 48.85, "h": 35},
            "quaternion": {"x": 0, "y": 0, "z": 0, "w": 1}
        }
    })
}
