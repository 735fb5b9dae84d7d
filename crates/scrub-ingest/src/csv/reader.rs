//! Contact CSV loading.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use csv::ReaderBuilder;
use encoding_rs::WINDOWS_1252;
use tracing::{debug, info, warn};

use scrub_model::ContactRecord;

use crate::error::{IngestError, Result};
use crate::options::IngestOptions;

use super::header::CsvHeaders;
use super::preamble::strip_preamble;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Text encoding the source file was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    /// Legacy Windows exports that are not valid UTF-8.
    Windows1252,
}

impl fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utf8 => f.write_str("UTF-8"),
            Self::Windows1252 => f.write_str("Windows-1252"),
        }
    }
}

/// A loaded contact export.
#[derive(Debug, Clone)]
pub struct ContactTable {
    pub headers: CsvHeaders,
    /// One record per data row, numbered from 1.
    pub records: Vec<ContactRecord>,
    /// Marker lines removed above the header.
    pub preamble_rows: usize,
    pub encoding: SourceEncoding,
}

/// Rejects byte-order marks for encodings we do not read.
///
/// Checks for UTF-16 BOM markers, which are not supported.
pub fn validate_encoding(bytes: &[u8], path: &Path) -> Result<()> {
    if bytes.len() >= 2 {
        // UTF-16 LE BOM
        if bytes[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        // UTF-16 BE BOM
        if bytes[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }
    Ok(())
}

/// Decodes raw file bytes into text.
///
/// A UTF-8 BOM is dropped. Bytes that are not valid UTF-8 are decoded as
/// Windows-1252, which every byte sequence maps into.
pub fn decode_source<'a>(bytes: &'a [u8], path: &Path) -> Result<(Cow<'a, str>, SourceEncoding)> {
    validate_encoding(bytes, path)?;
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok((Cow::Borrowed(text), SourceEncoding::Utf8)),
        Err(_) => {
            warn!(
                path = %path.display(),
                "Source is not valid UTF-8, decoding as Windows-1252"
            );
            let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
            Ok((text, SourceEncoding::Windows1252))
        }
    }
}

/// Parses CSV text (header first) into contact records.
///
/// Short rows leave trailing fields empty; cells past the header are ignored.
/// `path` is only used in error messages.
pub fn parse_contacts(text: &str, path: &Path) -> Result<(CsvHeaders, Vec<ContactRecord>)> {
    if text.trim().is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = CsvHeaders::new(reader.headers().map_err(|e| csv_error(path, &e))?);
    if headers.is_empty() || headers.is_blank() {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }
    for name in &headers.duplicates {
        debug!(column = %name, "Duplicate column; using its last occurrence");
    }

    let resolved = headers.resolved();
    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row.map_err(|e| csv_error(path, &e))?;
        let mut record = ContactRecord::new(idx + 1);
        for (name, position) in &resolved {
            record.insert(*name, row.get(*position).unwrap_or(""));
        }
        records.push(record);
    }

    Ok((headers, records))
}

/// Reads a contact export from disk.
///
/// Decodes the file, strips preamble rows using `options`, and parses the rest.
pub fn read_contacts(path: &Path, options: &IngestOptions) -> Result<ContactTable> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::open(path, e))?;
    let (text, encoding) = decode_source(&bytes, path)?;
    let (body, preamble_rows) = strip_preamble(&text, &options.preamble_markers);
    if preamble_rows > 0 {
        debug!(rows = preamble_rows, "Stripped preamble rows above the header");
    }

    let (headers, records) = parse_contacts(body, path)?;
    info!(
        path = %path.display(),
        columns = headers.len(),
        rows = records.len(),
        %encoding,
        "Loaded contact export"
    );

    Ok(ContactTable {
        headers,
        records,
        preamble_rows,
        encoding,
    })
}

fn csv_error(path: &Path, err: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
