//! The edited contact CSV.

use std::path::Path;

use csv::{Terminator, WriterBuilder};

use scrub_model::RunResult;

use crate::atomic::write_atomic;
use crate::error::{OutputError, Result};

/// Encodes the accepted contacts as CSV: header row, then one row per contact.
///
/// Values are written verbatim and quoted only when they contain a comma,
/// a quote or a line break.
pub fn edited_csv_bytes(result: &RunResult) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(&result.columns)?;
    for record in result.records() {
        writer.write_record(&record.values)?;
    }

    writer.into_inner().map_err(|e| OutputError::Csv {
        message: e.error().to_string(),
    })
}

/// Writes the edited CSV to `path` atomically.
pub fn write_edited_csv(path: &Path, result: &RunResult) -> Result<()> {
    let bytes = edited_csv_bytes(result)?;
    write_atomic(path, &bytes)
}
