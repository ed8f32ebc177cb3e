//! Record types for discovered serial ports.

use serde::Serialize;

/// One serial port discovered by a single enumeration run.
///
/// `name` is the OS-level path used to open the port and is unique within
/// one snapshot; ports may appear or disappear between snapshots, so
/// uniqueness does not hold across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortInfo {
    /// OS-level port path (e.g., "/dev/ttyUSB0", "COM3").
    pub name: String,
    /// Descriptive manufacturer string; empty when the helper output
    /// carries no detail beyond the port name.
    pub manufacturer: String,
}

impl PortInfo {
    /// Create a record for a port name with no manufacturer detail.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            manufacturer: String::new(),
        }
    }
}
