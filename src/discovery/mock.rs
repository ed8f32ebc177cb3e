//! Mock enumerator for unit testing.
//!
//! Records every call and returns either a scripted port list or an
//! injected error, so workflow tests never touch a real child process.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tracing::debug;

use crate::error::{PortError, Result};

use super::info::PortInfo;
use super::Enumerate;

/// Scripted enumerator for tests.
pub struct MockEnumerator {
    ports: Vec<PortInfo>,
    injected_error: Mutex<Option<PortError>>,
    call_count: AtomicUsize,
}

impl MockEnumerator {
    /// Create a mock that yields the given port names on every call.
    #[must_use]
    pub fn with_ports(names: &[&str]) -> Self {
        debug!(count = names.len(), "Creating mock enumerator");
        Self {
            ports: names.iter().copied().map(PortInfo::new).collect(),
            injected_error: Mutex::new(None),
            call_count: AtomicUsize::new(0),
        }
    }

    /// Create a mock that fails every call with the given error.
    #[must_use]
    pub fn failing(error: PortError) -> Self {
        Self {
            ports: Vec::new(),
            injected_error: Mutex::new(Some(error)),
            call_count: AtomicUsize::new(0),
        }
    }

    /// Number of enumeration calls observed so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Enumerate for MockEnumerator {
    fn enumerate(&self, _scope: &Path) -> Result<Vec<PortInfo>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if let Some(err) = self.injected_error.lock().expect("mock lock poisoned").take() {
            return Err(err);
        }

        if self.ports.is_empty() {
            return Err(PortError::NoPortsFound);
        }

        Ok(self.ports.clone())
    }
}
