//! CSV reading utilities.

mod header;
mod preamble;
mod reader;

pub use header::CsvHeaders;
pub use preamble::strip_preamble;
pub use reader::{
    ContactTable, SourceEncoding, decode_source, parse_contacts, read_contacts, validate_encoding,
};
