//! Serial port discovery.
//!
//! This module provides a trait-based abstraction over the real helper
//! process and a mock implementation, enabling workflow tests without
//! spawning children. Discovery is a pure query: every call produces a
//! fresh snapshot and nothing is cached.

mod helper;
mod info;
pub mod mock;
mod parser;

pub use helper::{HelperEnumerator, HELPER_SCRIPT};
pub use info::PortInfo;
pub use parser::parse_port_list;

use std::path::Path;

use crate::error::Result;

/// Core enumeration seam.
///
/// Implementations take a workspace scope (used to resolve which helper
/// applies) and return one ordered snapshot of the currently attached
/// ports. Zero ports is an error, never an empty snapshot; callers own
/// any retry policy.
pub trait Enumerate {
    /// Produce a fresh enumeration snapshot for the given workspace.
    fn enumerate(&self, scope: &Path) -> Result<Vec<PortInfo>>;
}

/// Type alias for boxed trait object used by the registry.
pub type BoxedEnumerator = Box<dyn Enumerate + Send + Sync>;
