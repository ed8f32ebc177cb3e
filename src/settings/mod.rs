//! Workspace-scoped settings storage.
//!
//! Settings live in a `.portpick.toml` file at the workspace root. Two keys
//! matter: `port` (the persisted serial port selection) and `helper` (the
//! interpreter invoked for enumeration). The store is a plain key/value
//! document; each save is a single whole-file write.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{PortError, Result};

/// Settings file name, resolved against the workspace root.
pub const SETTINGS_FILE: &str = ".portpick.toml";

/// Default enumeration helper interpreter.
pub const DEFAULT_HELPER: &str = "python3";

/// Persisted workspace settings document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceSettings {
    /// The selected serial port, if one has been persisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,

    /// Interpreter used to run the enumeration helper script.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helper: Option<String>,
}

impl WorkspaceSettings {
    /// Path of the settings file inside a workspace.
    #[must_use]
    pub fn file_path(scope: &Path) -> PathBuf {
        scope.join(SETTINGS_FILE)
    }

    /// Load settings for a workspace, defaulting to an empty document when
    /// the file does not exist yet.
    pub fn load_or_default(scope: &Path) -> Result<Self> {
        let path = Self::file_path(scope);
        trace!(path = %path.display(), "Loading workspace settings");

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)?;
        toml::from_str(&contents)
            .map_err(|e| PortError::ConfigParse(format!("{}: {e}", path.display())))
    }

    /// Write the document back, returning the location it was saved to.
    pub fn save(&self, scope: &Path) -> Result<PathBuf> {
        let path = Self::file_path(scope);
        let doc = toml::to_string_pretty(self)
            .map_err(|e| PortError::ConfigParse(e.to_string()))?;

        fs::write(&path, doc).map_err(|e| PortError::ConfigWrite {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        debug!(path = %path.display(), "Saved workspace settings");
        Ok(path)
    }

    /// The helper interpreter for this workspace, falling back to the
    /// default when unset.
    #[must_use]
    pub fn helper_command(&self) -> String {
        self.helper
            .clone()
            .unwrap_or_else(|| DEFAULT_HELPER.to_string())
    }
}

/// Persist a port selection for a workspace, preserving unrelated keys.
///
/// Returns the settings file path the value was written to; the caller uses
/// it in the success notification.
pub fn write_port_setting(scope: &Path, port: &str) -> Result<PathBuf> {
    let mut settings = WorkspaceSettings::load_or_default(scope)?;
    settings.port = Some(port.to_string());
    settings.save(scope)
}

/// Read the persisted port selection for a workspace, if any.
pub fn read_port_setting(scope: &Path) -> Result<Option<String>> {
    Ok(WorkspaceSettings::load_or_default(scope)?.port)
}
