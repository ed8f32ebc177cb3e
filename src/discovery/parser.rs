//! Parser for the enumeration helper's output.
//!
//! The helper's output format is an unstable contract, so the grammar is
//! isolated here: the captured text is free text containing zero or more
//! single-quoted tokens (e.g., `['/dev/ttyUSB0', '/dev/ttyUSB1']`). Each
//! quoted substring, trimmed of surrounding whitespace, is one candidate
//! port name in order of appearance. Everything outside the quotes is
//! ignored. Swapping the helper for a structured (line-delimited or tagged)
//! format only requires replacing this module.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::error::{PortError, Result};

use super::info::PortInfo;

/// Non-greedy single-quoted token, matching the helper's list-print format.
static QUOTED_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'(.*?)'").expect("quoted-token pattern is valid"));

/// Extract port records from raw helper output.
///
/// Zero extracted tokens is an error, not an empty snapshot: a helper that
/// ran but printed nothing parseable is indistinguishable from one that
/// found no devices, and both surface as [`PortError::NoPortsFound`].
pub fn parse_port_list(output: &str) -> Result<Vec<PortInfo>> {
    trace!(bytes = output.len(), "Parsing helper output");

    let ports: Vec<PortInfo> = QUOTED_TOKEN
        .captures_iter(output)
        .map(|cap| PortInfo::new(cap[1].trim()))
        .collect();

    if ports.is_empty() {
        debug!("Helper output contained no quoted tokens");
        return Err(PortError::NoPortsFound);
    }

    debug!(count = ports.len(), "Parsed port list");
    Ok(ports)
}
