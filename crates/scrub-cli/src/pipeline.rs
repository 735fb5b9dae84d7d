//! Contact conversion pipeline with explicit stages.
//!
//! 1. **Paths**: derive the edited CSV and log paths (fails before any work
//!    if an output would overwrite the source)
//! 2. **Ingest**: read and decode the export, strip preamble rows
//! 3. **Header check**: compare the source header with the schema
//! 4. **Filter**: evaluate and reproject every row
//! 5. **Output**: write the edited CSV and the audit log (skipped on dry runs)

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use tracing::{debug, info, info_span};

use scrub_filter::{HeaderCheck, HeaderPolicy, enforce_header, filter_contacts};
use scrub_ingest::{SourceEncoding, read_contacts};
use scrub_model::RunResult;
use scrub_output::{OutputPaths, write_outputs};

use crate::config::ScrubConfig;
use crate::logging::log_data_enabled;

/// One conversion request from a front-end.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub input: PathBuf,
    /// Defaults to the directory holding `input`.
    pub output_dir: Option<PathBuf>,
    pub header_policy: HeaderPolicy,
    /// Filter and report without writing output files.
    pub dry_run: bool,
}

/// What a conversion did.
#[derive(Debug)]
pub struct RunReport {
    pub paths: OutputPaths,
    pub result: RunResult,
    /// Schema columns absent from the source (only non-empty under the lenient policy).
    pub header: HeaderCheck,
    pub preamble_rows: usize,
    pub duplicate_columns: Vec<String>,
    pub encoding: SourceEncoding,
    /// Whether the output files were written.
    pub written: bool,
    pub started: NaiveDateTime,
    pub finished: NaiveDateTime,
}

/// Runs every stage for `request` using `config`.
pub fn execute(request: &RunRequest, config: &ScrubConfig) -> Result<RunReport> {
    let span = info_span!("convert", input = %request.input.display());
    let _guard = span.enter();
    let started = Local::now().naive_local();
    let clock = Instant::now();

    let paths = OutputPaths::derive(
        &request.input,
        request.output_dir.as_deref(),
        &config.output,
    )
    .context("derive output paths")?;

    let table = read_contacts(&request.input, &config.ingest_options())
        .with_context(|| format!("read contacts from {}", request.input.display()))?;

    let header = enforce_header(
        &table.headers.columns,
        &config.schema,
        request.header_policy,
    )
    .with_context(|| format!("check header of {}", request.input.display()))?;

    let result = filter_contacts(&table.records, &config.schema);
    if log_data_enabled() {
        // The filter already logged row and reason; this adds the name.
        for contact in result.rejected() {
            debug!(
                row = contact.id.row,
                contact = %contact.id.display_name,
                "Skipped contact name"
            );
        }
    }

    let (written, finished) = if request.dry_run {
        info!("Dry run; no files written");
        (false, Local::now().naive_local())
    } else {
        let finished = write_outputs(&paths, &result, started).context("write outputs")?;
        (true, finished)
    };

    info!(
        total = result.total_count(),
        formatted = result.accepted_count(),
        skipped = result.rejected_count(),
        elapsed_ms = clock.elapsed().as_millis(),
        "Conversion complete"
    );

    Ok(RunReport {
        paths,
        result,
        header,
        preamble_rows: table.preamble_rows,
        duplicate_columns: table.headers.duplicates,
        encoding: table.encoding,
        written,
        started,
        finished,
    })
}
