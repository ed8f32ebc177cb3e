//! The list → choose → persist selection workflow.
//!
//! The workflow runs as explicit sequential steps. Its two blocking points
//! are the enumeration child process and the interactive choice; dismissal
//! of the chooser is the sole cancellation path. Failures from any step are
//! caught here, reported through the [`Notifier`], and never escape; the
//! caller receives a [`SelectionOutcome`] describing how the run ended.
//! Each invocation is a fresh instance holding no state afterwards, so
//! concurrent runs cannot corrupt each other.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::discovery::{Enumerate, PortInfo};
use crate::error::{PortError, Result};

/// Prompt shown above the port list.
pub const SELECT_PROMPT: &str =
    "Select the available serial port where your device is connected.";

/// Fallback message when an error carries no text of its own.
const GENERIC_FAILURE: &str = "Something went wrong while getting the serial port list";

/// One entry presented to the chooser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortItem {
    /// Display label; the port name the selection resolves to.
    pub label: String,
    /// Secondary description; the manufacturer when known.
    pub description: String,
}

impl From<&PortInfo> for PortItem {
    fn from(port: &PortInfo) -> Self {
        Self {
            label: port.name.clone(),
            description: port.manufacturer.clone(),
        }
    }
}

/// Interactive selection capability.
///
/// `Ok(None)` signals dismissal: the user closed the picker without
/// choosing, which is a valid no-op termination rather than an error.
pub trait Chooser {
    fn choose(&self, items: &[PortItem], prompt: &str) -> Result<Option<String>>;
}

/// Durable persistence capability for the chosen port.
///
/// Writes the value against the workspace scope and returns the location
/// it was physically saved to.
pub trait SettingsWriter {
    fn write_port(&self, scope: &Path, value: &str) -> Result<PathBuf>;
}

/// User-facing reporting channels.
///
/// `error` receives the rendered message together with the underlying
/// error value, so implementations can add hints or emit a structured
/// record instead of plain text.
pub trait Notifier {
    fn info(&self, message: &str);
    fn error(&self, message: &str, err: &PortError);
}

/// How a selection workflow run terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// A port was chosen and persisted at the given location.
    Saved { port: String, location: PathBuf },
    /// The user dismissed the picker; nothing was written.
    Dismissed,
    /// Enumeration or persistence failed; already reported via the notifier.
    Failed,
}

/// Run one selection workflow instance.
///
/// Steps: enumerate, present, persist, notify. Enumeration failures stop
/// the run before the writer is ever invoked; persistence failures are
/// reported through the same channel. Neither is retried.
pub fn run_selection(
    enumerator: &dyn Enumerate,
    scope: &Path,
    chooser: &dyn Chooser,
    writer: &dyn SettingsWriter,
    notifier: &dyn Notifier,
) -> SelectionOutcome {
    debug!(scope = %scope.display(), "Starting port selection");

    let ports = match enumerator.enumerate(scope) {
        Ok(ports) => ports,
        Err(err) => return report_failure(notifier, &err),
    };

    let items: Vec<PortItem> = ports.iter().map(PortItem::from).collect();
    let chosen = match chooser.choose(&items, SELECT_PROMPT) {
        Ok(chosen) => chosen,
        Err(err) => return report_failure(notifier, &err),
    };

    let Some(label) = chosen else {
        debug!("Picker dismissed, leaving settings untouched");
        return SelectionOutcome::Dismissed;
    };

    match writer.write_port(scope, &label) {
        Ok(location) => {
            info!(port = %label, location = %location.display(), "Port selection saved");
            notifier.info(&format!(
                "Port has been updated to {label} in {}",
                location.display()
            ));
            SelectionOutcome::Saved {
                port: label,
                location,
            }
        }
        Err(err) => report_failure(notifier, &err),
    }
}

fn report_failure(notifier: &dyn Notifier, err: &PortError) -> SelectionOutcome {
    let mut msg = err.to_string();
    if msg.is_empty() {
        msg = GENERIC_FAILURE.to_string();
    }
    warn!(error = %msg, "Port selection failed");
    notifier.error(&msg, err);
    SelectionOutcome::Failed
}
