//! Folding a sequence of rows into a run result.

use tracing::{debug, info, info_span};

use scrub_model::{ContactId, ContactRecord, FieldSchema, RowOutcome, RunResult};

use crate::project::project;
use crate::rules::{display_name, evaluate};

/// Evaluates every row against `schema` and returns a fresh [`RunResult`].
///
/// Rows are processed in order and each one lands in exactly one of the
/// accepted or rejected lists. Rejections are recorded, never raised.
pub fn filter_contacts<'a, I>(records: I, schema: &FieldSchema) -> RunResult
where
    I: IntoIterator<Item = &'a ContactRecord>,
{
    let span = info_span!("filter_contacts", columns = schema.width());
    let _guard = span.enter();

    let mut result = RunResult::new(schema.output_order.clone());
    for record in records {
        let id = ContactId::new(record.row(), display_name(record, schema));
        match evaluate(record, schema) {
            RowOutcome::Accepted { qualified_by } => {
                debug!(
                    row = record.row(),
                    qualified_by = %qualified_by.join(", "),
                    "Formatting contact"
                );
                result.push_accepted(id, qualified_by, project(record, schema));
            }
            RowOutcome::Rejected(reason) => {
                debug!(
                    row = record.row(),
                    reason = reason.code(),
                    detail = %reason,
                    "Skipping contact"
                );
                result.push_rejected(id, reason);
            }
        }
    }

    info!(
        total = result.total_count(),
        formatted = result.accepted_count(),
        skipped = result.rejected_count(),
        "Contact filter complete"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrub_model::RejectionReason;

    fn row(n: usize, pairs: &[(&str, &str)]) -> ContactRecord {
        ContactRecord::from_pairs(n, pairs.iter().copied())
    }

    #[test]
    fn test_empty_input() {
        let rows: Vec<ContactRecord> = Vec::new();
        let result = filter_contacts(&rows, &FieldSchema::default());
        assert_eq!(result.total_count(), 0);
        assert_eq!(result.columns.len(), 10);
    }

    #[test]
    fn test_preserves_input_order() {
        let schema = FieldSchema {
            output_order: vec!["Name".into(), "Date".into()],
            mandatory: vec!["Name".into()],
            at_least_one: vec!["Date".into()],
            display_name: vec!["Name".into()],
        };
        let rows = vec![
            row(1, &[("Name", "b"), ("Date", "1")]),
            row(2, &[("Name", "a")]),
            row(3, &[("Name", "c"), ("Date", "2")]),
            row(4, &[("Date", "3")]),
        ];
        let result = filter_contacts(&rows, &schema);

        let accepted: Vec<&str> = result
            .accepted()
            .iter()
            .map(|c| c.id.display_name.as_str())
            .collect();
        assert_eq!(accepted, vec!["b", "c"]);
        assert_eq!(result.records()[1].values, vec!["c", "2"]);

        let rejected: Vec<usize> = result.rejected().iter().map(|c| c.id.row).collect();
        assert_eq!(rejected, vec![2, 4]);
        assert!(matches!(
            result.rejected()[1].reason,
            RejectionReason::MissingMandatoryField { .. }
        ));
    }
}
