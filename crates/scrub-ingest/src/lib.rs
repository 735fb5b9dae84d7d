//! Contact export ingestion.
//!
//! This crate turns a CRM contact export on disk into [`ContactRecord`]s.
//!
//! # Features
//!
//! - **Encoding**: UTF-8 (with or without BOM), Windows-1252 fallback, UTF-16 rejected
//! - **Preamble stripping**: category/label rows above the real header are dropped in memory
//! - **Duplicate columns**: the last occurrence of a repeated header wins
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use scrub_ingest::{IngestOptions, read_contacts};
//!
//! let table = read_contacts(Path::new("contacts.csv"), &IngestOptions::default())?;
//! println!("{} rows", table.records.len());
//! ```
//!
//! [`ContactRecord`]: scrub_model::ContactRecord

mod csv;
mod error;
mod options;

// === Error Types ===
pub use error::{IngestError, Result};

// === Options ===
pub use options::{DEFAULT_PREAMBLE_MARKERS, IngestOptions};

// === CSV Reading ===
pub use csv::{
    ContactTable, CsvHeaders, SourceEncoding, decode_source, parse_contacts, read_contacts,
    strip_preamble, validate_encoding,
};
