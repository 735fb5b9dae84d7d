//! Core types for contact scrubbing.
//!
//! This crate holds the data model shared by the rest of the workspace:
//!
//! - **Field schema**: output column order, mandatory fields, the
//!   at-least-one group and the display-name fields
//! - **Contact records**: one field-name to value map per source row
//! - **Run results**: counters and audit lists produced by one filter run
//!
//! Nothing here performs I/O.

mod error;
mod record;
mod result;
mod schema;

// === Error Types ===
pub use error::{ModelError, Result};

// === Schema ===
pub use schema::{
    ADDRESS_LINE_1, ADDRESS_LINE_2, BIRTHDAY, CITY, COUNTRY, FIRST_NAME, FieldSchema,
    HOME_ANNIVERSARY, LAST_NAME, STATE, ZIP_CODE,
};

// === Records ===
pub use record::{ContactRecord, ProjectedContact};

// === Run Results ===
pub use result::{AcceptedContact, ContactId, RejectedContact, RejectionReason, RowOutcome, RunResult};
