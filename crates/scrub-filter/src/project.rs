//! Reprojection of a contact row onto the output columns.

use scrub_model::{ContactRecord, FieldSchema, ProjectedContact};

/// Copies the output-order fields of `record`, verbatim, in schema order.
///
/// Absent fields become empty strings.
pub fn project(record: &ContactRecord, schema: &FieldSchema) -> ProjectedContact {
    ProjectedContact {
        row: record.row(),
        values: schema
            .output_order
            .iter()
            .map(|field| record.get(field).to_string())
            .collect(),
    }
}
