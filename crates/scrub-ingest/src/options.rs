//! Ingestion options.

use serde::{Deserialize, Serialize};

/// Text found in the category and label rows KW Command writes above the header.
pub const DEFAULT_PREAMBLE_MARKERS: &[&str] = &["Key Dates", "Select Y if applies"];

/// Options controlling how a contact export is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestOptions {
    /// Leading lines containing any of these substrings are dropped before parsing.
    pub preamble_markers: Vec<String>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            preamble_markers: DEFAULT_PREAMBLE_MARKERS
                .iter()
                .map(|m| (*m).to_string())
                .collect(),
        }
    }
}
