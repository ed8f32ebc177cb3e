//! Process-wide registry for port discovery and selection.
//!
//! The registry is an explicitly constructed handle owning the enumerator
//! seam; callers pass it by reference. [`PortRegistry::shared`] provides
//! the one process-wide instance for the CLI entry point, constructed
//! lazily through a single `LazyLock` initialization point so concurrent
//! first use cannot build two instances. The registry holds no mutable
//! cross-call state: every query re-enumerates, and every selection run is
//! a fresh workflow instance.

use std::path::Path;
use std::sync::LazyLock;

use crate::discovery::{BoxedEnumerator, HelperEnumerator, PortInfo};
use crate::error::Result;
use crate::workflow::{self, Chooser, Notifier, SelectionOutcome, SettingsWriter};

static SHARED: LazyLock<PortRegistry> =
    LazyLock::new(|| PortRegistry::new(Box::new(HelperEnumerator::new())));

/// Handle over the discovery and selection operations.
pub struct PortRegistry {
    enumerator: BoxedEnumerator,
}

impl PortRegistry {
    /// Construct a registry around an enumerator implementation.
    ///
    /// This is the dependency-injection constructor used by tests and
    /// programmatic callers; the CLI uses [`Self::shared`].
    #[must_use]
    pub fn new(enumerator: BoxedEnumerator) -> Self {
        Self { enumerator }
    }

    /// The process-wide instance, constructed on first use and identical
    /// for every caller thereafter.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Query path: take a fresh enumeration snapshot for a workspace.
    ///
    /// Errors propagate unchanged to the caller, who owns the handling
    /// policy; nothing is notified or retried here.
    pub fn ports(&self, scope: &Path) -> Result<Vec<PortInfo>> {
        self.enumerator.enumerate(scope)
    }

    /// Guided path: run the full list → choose → persist workflow.
    ///
    /// Failures are reported through `notifier` and folded into the
    /// returned outcome; they never escape as errors.
    pub fn prompt_and_persist(
        &self,
        scope: &Path,
        chooser: &dyn Chooser,
        writer: &dyn SettingsWriter,
        notifier: &dyn Notifier,
    ) -> SelectionOutcome {
        workflow::run_selection(self.enumerator.as_ref(), scope, chooser, writer, notifier)
    }
}
