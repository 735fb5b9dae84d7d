//! Output generation for a contact scrub run.
//!
//! Two artifacts are produced next to each other in the save directory:
//!
//! - `<stem>_edited.csv`: the accepted contacts in output column order
//! - `<stem>_log.txt`: a human-readable audit log of the run
//!
//! Both are written through a temporary file and renamed into place, so a
//! failed run never leaves a partial file behind.

mod atomic;
mod edited;
mod error;
mod paths;
mod report;

use chrono::{Local, NaiveDateTime};
use tracing::info;

use scrub_model::RunResult;

// === Error Types ===
pub use error::{OutputError, Result};

// === Paths ===
pub use paths::{OutputNaming, OutputPaths};

// === Writers ===
pub use atomic::write_atomic;
pub use edited::{edited_csv_bytes, write_edited_csv};
pub use report::{AuditLog, TIMESTAMP_FORMAT, format_timestamp, write_log};

/// Writes the edited CSV and then the audit log for `result`.
///
/// Creates the save directory when needed. `started` is the run start time
/// shown in the log; the end time is taken once the edited file is in place.
/// Returns the end time.
pub fn write_outputs(
    paths: &OutputPaths,
    result: &RunResult,
    started: NaiveDateTime,
) -> Result<NaiveDateTime> {
    paths.ensure_save_dir()?;
    write_edited_csv(&paths.edited, result)?;

    let finished = Local::now().naive_local();
    let log = AuditLog {
        started,
        finished,
        source: &paths.source,
        edited: &paths.edited,
        result,
    };
    write_log(&paths.log, &log)?;

    info!(
        edited = %paths.edited.display(),
        log = %paths.log.display(),
        "Wrote outputs"
    );
    Ok(finished)
}
