//! Contact reprojection filter.
//!
//! Decides for every contact row whether it is kept, reprojects kept rows
//! onto the schema's output columns, and accumulates a [`RunResult`].
//!
//! # Example
//!
//! ```
//! use scrub_filter::filter_contacts;
//! use scrub_model::{ContactRecord, FieldSchema};
//!
//! let schema = FieldSchema::default();
//! let row = ContactRecord::from_pairs(
//!     1,
//!     [
//!         ("First Name", "Jo"),
//!         ("Last Name", "Lee"),
//!         ("Address line 1", "1 Ave"),
//!         ("City", "X"),
//!         ("State", "Y"),
//!         ("Zip code", "1"),
//!         ("Country", "Z"),
//!         ("Home Anniversary", "2020-01-01"),
//!     ],
//! );
//! let result = filter_contacts([&row], &schema);
//! assert_eq!(result.accepted_count(), 1);
//! ```
//!
//! [`RunResult`]: scrub_model::RunResult

mod error;
mod header;
mod project;
mod rules;
mod run;

// === Error Types ===
pub use error::{FilterError, Result};

// === Header Check ===
pub use header::{HeaderCheck, HeaderPolicy, check_header, enforce_header};

// === Row Rules ===
pub use rules::{display_name, evaluate, missing_mandatory, qualifying_fields};

// === Reprojection ===
pub use project::project;

// === Run ===
pub use run::filter_contacts;
