//! Source header check against the field schema.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use scrub_model::FieldSchema;

use crate::error::{FilterError, Result};

/// What to do when a schema column is absent from the source header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderPolicy {
    /// Abort the run with [`FilterError::SchemaMismatch`].
    #[default]
    Strict,
    /// Warn and treat the absent columns as empty in every row.
    Lenient,
}

/// Result of comparing a source header with a schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderCheck {
    /// Schema fields with no column in the header, in schema order.
    pub missing: Vec<String>,
}

impl HeaderCheck {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Lists every field referenced by `schema` that `headers` does not contain.
pub fn check_header<S: AsRef<str>>(headers: &[S], schema: &FieldSchema) -> HeaderCheck {
    let present: BTreeSet<&str> = headers.iter().map(AsRef::as_ref).collect();
    let missing = schema
        .referenced_fields()
        .into_iter()
        .filter(|field| !present.contains(field))
        .map(str::to_string)
        .collect();
    HeaderCheck { missing }
}

/// Runs [`check_header`] and applies `policy` to the outcome.
///
/// # Errors
///
/// Returns [`FilterError::SchemaMismatch`] under [`HeaderPolicy::Strict`]
/// when any schema column is absent.
pub fn enforce_header<S: AsRef<str>>(
    headers: &[S],
    schema: &FieldSchema,
    policy: HeaderPolicy,
) -> Result<HeaderCheck> {
    let check = check_header(headers, schema);
    if check.is_complete() {
        return Ok(check);
    }
    match policy {
        HeaderPolicy::Strict => Err(FilterError::SchemaMismatch {
            missing: check.missing,
        }),
        HeaderPolicy::Lenient => {
            warn!(
                missing = %check.missing.join(", "),
                "Source header is missing schema columns; treating them as empty"
            );
            Ok(check)
        }
    }
}
