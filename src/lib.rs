//! portpick library - serial port discovery and workspace-scoped selection.
//!
//! This library exposes the core functionality of the `portpick` CLI for use
//! in tests and potentially other applications.
//!
//! # Modules
//!
//! - `discovery`: Enumeration seam, helper process invocation, output parser
//! - `registry`: Process-wide handle over discovery and selection
//! - `workflow`: The list → choose → persist selection workflow
//! - `settings`: Workspace-scoped `.portpick.toml` storage
//! - `prompt`: Terminal chooser and notifier implementations
//! - `error`: Error types with user-recoverable hints
#![forbid(unsafe_code)]

pub mod cli;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod registry;
pub mod settings;
pub mod workflow;
