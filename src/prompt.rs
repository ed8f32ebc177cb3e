//! Terminal implementations of the chooser and notifier capabilities.
//!
//! The chooser prints a numbered port list to the terminal and reads one
//! line from stdin; an empty line or end-of-input is a dismissal. There is
//! no timeout on the read, so the workflow blocks until the user answers
//! or dismisses.

use std::io::{self, BufRead};

use console::{style, Term};
use tracing::error as log_error;

use crate::error::{PortError, Result};
use crate::workflow::{Chooser, Notifier, PortItem};

/// Interactive chooser over the terminal.
#[derive(Debug, Default)]
pub struct TermChooser;

impl TermChooser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Chooser for TermChooser {
    fn choose(&self, items: &[PortItem], prompt: &str) -> Result<Option<String>> {
        let term = Term::stderr();

        term.write_line(prompt)
            .map_err(|e| PortError::ChooserFailed(e.to_string()))?;
        for (idx, item) in items.iter().enumerate() {
            let line = if item.description.is_empty() {
                format!("  {} {}", style(format!("[{}]", idx + 1)).cyan(), item.label)
            } else {
                format!(
                    "  {} {}  {}",
                    style(format!("[{}]", idx + 1)).cyan(),
                    item.label,
                    style(&item.description).dim()
                )
            };
            term.write_line(&line)
                .map_err(|e| PortError::ChooserFailed(e.to_string()))?;
        }
        term.write_str("Port number (empty to cancel): ")
            .map_err(|e| PortError::ChooserFailed(e.to_string()))?;

        // Read the answer from stdin; end-of-input counts as dismissal.
        let mut answer = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut answer)
            .map_err(|e| PortError::ChooserFailed(e.to_string()))?;
        let answer = answer.trim();

        if read == 0 || answer.is_empty() {
            return Ok(None);
        }

        let index: usize = answer
            .parse()
            .map_err(|_| PortError::ChooserFailed(format!("Not a port number: '{answer}'")))?;
        let item = index
            .checked_sub(1)
            .and_then(|i| items.get(i))
            .ok_or_else(|| {
                PortError::ChooserFailed(format!(
                    "Port number {index} out of range (1-{})",
                    items.len()
                ))
            })?;

        Ok(Some(item.label.clone()))
    }
}

/// Notifier that prints styled lines to stderr and mirrors errors into the
/// tracing log.
#[derive(Debug, Default)]
pub struct TermNotifier;

impl TermNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TermNotifier {
    fn info(&self, message: &str) {
        eprintln!("{}", style(message).green());
    }

    fn error(&self, message: &str, err: &PortError) {
        log_error!(detail = ?err, "{message}");
        eprintln!("{} {message}", style("error:").red().bold());
        if let Some(hint) = err.suggestion() {
            eprintln!("{}: {hint}", style("Hint").yellow());
        }
    }
}
