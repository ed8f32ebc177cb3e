//! Enumeration via the external helper process.
//!
//! The helper is an opaque external program (by default a Python
//! interpreter running `get_serial_ports.py`) that prints the attached
//! serial ports as quoted tokens. One child process is spawned per
//! enumeration call; results are never cached because a snapshot goes
//! stale as soon as a device is plugged or unplugged.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::error::{PortError, Result};
use crate::settings::WorkspaceSettings;

use super::info::PortInfo;
use super::parser::parse_port_list;
use super::Enumerate;

/// Fixed script argument passed to the helper interpreter.
pub const HELPER_SCRIPT: &str = "get_serial_ports.py";

/// Enumerator backed by the external helper process.
#[derive(Debug, Default)]
pub struct HelperEnumerator;

impl HelperEnumerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Enumerate for HelperEnumerator {
    fn enumerate(&self, scope: &Path) -> Result<Vec<PortInfo>> {
        let helper = WorkspaceSettings::load_or_default(scope)?.helper_command();
        debug!(helper = %helper, scope = %scope.display(), "Running enumeration helper");

        let output = Command::new(&helper)
            .arg(HELPER_SCRIPT)
            .current_dir(scope)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| PortError::HelperSpawnFailed {
                helper: helper.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(status = %output.status, stderr = %stderr.trim(), "Helper exited with failure");
            return Err(PortError::HelperFailed {
                helper,
                status: output.status.to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_port_list(&stdout)
    }
}
