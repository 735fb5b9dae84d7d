//! Inclusion rules for a single contact row.

use scrub_model::{ContactRecord, FieldSchema, RejectionReason, RowOutcome};

/// Mandatory fields that are empty or absent in `record`, in schema order.
pub fn missing_mandatory(record: &ContactRecord, schema: &FieldSchema) -> Vec<String> {
    schema
        .mandatory
        .iter()
        .filter(|field| !record.has_value(field))
        .cloned()
        .collect()
}

/// At-least-one fields that are non-empty in `record`, in schema order.
pub fn qualifying_fields(record: &ContactRecord, schema: &FieldSchema) -> Vec<String> {
    schema
        .at_least_one
        .iter()
        .filter(|field| record.has_value(field))
        .cloned()
        .collect()
}

/// Decides whether `record` is kept.
///
/// Mandatory fields are checked first; the at-least-one group is only
/// consulted once every mandatory field has a value.
pub fn evaluate(record: &ContactRecord, schema: &FieldSchema) -> RowOutcome {
    let missing = missing_mandatory(record, schema);
    if !missing.is_empty() {
        return RowOutcome::Rejected(RejectionReason::MissingMandatoryField { fields: missing });
    }

    let qualified_by = qualifying_fields(record, schema);
    if qualified_by.is_empty() {
        return RowOutcome::Rejected(RejectionReason::NoQualifyingDate {
            fields: schema.at_least_one.clone(),
        });
    }

    RowOutcome::Accepted { qualified_by }
}

/// Non-empty display-name values joined by a single space.
pub fn display_name(record: &ContactRecord, schema: &FieldSchema) -> String {
    schema
        .display_name
        .iter()
        .map(|field| record.get(field))
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_row() -> ContactRecord {
        ContactRecord::from_pairs(
            1,
            [
                ("First Name", "Jo"),
                ("Last Name", "Lee"),
                ("Address line 1", "1 Ave"),
                ("City", "X"),
                ("State", "Y"),
                ("Zip code", "1"),
                ("Country", "Z"),
                ("Birthday", ""),
                ("Home Anniversary", "2020-01-01"),
            ],
        )
    }

    #[test]
    fn test_accepts_with_one_date() {
        let outcome = evaluate(&complete_row(), &FieldSchema::default());
        assert_eq!(
            outcome,
            RowOutcome::Accepted {
                qualified_by: vec!["Home Anniversary".to_string()]
            }
        );
    }

    #[test]
    fn test_accepts_with_both_dates() {
        let mut row = complete_row();
        row.insert("Birthday", "1990-05-05");
        match evaluate(&row, &FieldSchema::default()) {
            RowOutcome::Accepted { qualified_by } => {
                assert_eq!(qualified_by, vec!["Birthday", "Home Anniversary"]);
            }
            other => panic!("expected accepted, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_without_dates() {
        let mut row = complete_row();
        row.insert("Home Anniversary", "");
        assert_eq!(
            evaluate(&row, &FieldSchema::default()),
            RowOutcome::Rejected(RejectionReason::NoQualifyingDate {
                fields: vec!["Birthday".to_string(), "Home Anniversary".to_string()]
            })
        );
    }

    #[test]
    fn test_missing_field_wins_over_missing_date() {
        let mut row = complete_row();
        row.insert("City", "");
        row.insert("Home Anniversary", "");
        assert_eq!(
            evaluate(&row, &FieldSchema::default()),
            RowOutcome::Rejected(RejectionReason::MissingMandatoryField {
                fields: vec!["City".to_string()]
            })
        );
    }

    #[test]
    fn test_lists_every_missing_field() {
        let row = ContactRecord::from_pairs(2, [("First Name", "Jo"), ("Birthday", "x")]);
        assert_eq!(
            missing_mandatory(&row, &FieldSchema::default()),
            vec![
                "Last Name",
                "Address line 1",
                "City",
                "State",
                "Zip code",
                "Country"
            ]
        );
    }

    #[test]
    fn test_address_line_2_not_required() {
        let row = complete_row();
        assert!(!row.has_value("Address line 2"));
        assert!(evaluate(&row, &FieldSchema::default()).is_accepted());
    }

    #[test]
    fn test_whitespace_counts_as_value() {
        let mut row = complete_row();
        row.insert("City", " ");
        assert!(evaluate(&row, &FieldSchema::default()).is_accepted());
    }

    #[test]
    fn test_display_name() {
        let schema = FieldSchema::default();
        assert_eq!(display_name(&complete_row(), &schema), "Jo Lee");

        let row = ContactRecord::from_pairs(1, [("Last Name", "Lee")]);
        assert_eq!(display_name(&row, &schema), "Lee");

        let row = ContactRecord::new(1);
        assert_eq!(display_name(&row, &schema), "");
    }
}
