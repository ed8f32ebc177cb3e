//! Error types for serial port discovery and selection.

use thiserror::Error;

/// Primary error type for portpick operations.
#[derive(Error, Debug)]
pub enum PortError {
    // Discovery errors
    #[error("No serial ports found")]
    NoPortsFound,

    #[error("Failed to run enumeration helper '{helper}': {reason}")]
    HelperSpawnFailed { helper: String, reason: String },

    #[error("Enumeration helper '{helper}' exited with {status}")]
    HelperFailed { helper: String, status: String },

    // Selection errors
    #[error("Chooser failed: {0}")]
    ChooserFailed(String),

    // Configuration errors
    #[error("Failed to write settings to {path}: {reason}")]
    ConfigWrite { path: String, reason: String },

    #[error("Settings parse error: {0}")]
    ConfigParse(String),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl PortError {
    /// Returns true if the error is recoverable by the user.
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NoPortsFound | Self::HelperSpawnFailed { .. } | Self::ConfigParse(_)
        )
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::NoPortsFound => Some("Ensure the device is connected via USB"),
            Self::HelperSpawnFailed { .. } => {
                Some("Set the 'helper' key in .portpick.toml to the enumeration interpreter")
            }
            Self::ConfigParse(_) => Some("Check .portpick.toml for syntax errors"),
            _ => None,
        }
    }
}

/// Convenience type alias for Results using PortError.
pub type Result<T> = std::result::Result<T, PortError>;
