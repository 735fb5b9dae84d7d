//! Contact records as read from the source file and as written to the output.

use std::collections::BTreeMap;

use serde::Serialize;

/// One source row: field name to raw value.
///
/// A missing key and an empty value mean the same thing. Values are kept
/// verbatim; nothing is trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRecord {
    row: usize,
    fields: BTreeMap<String, String>,
}

impl ContactRecord {
    /// Creates an empty record for the given 1-based data row.
    pub fn new(row: usize) -> Self {
        Self {
            row,
            fields: BTreeMap::new(),
        }
    }

    /// Builds a record from `(name, value)` pairs. Later pairs overwrite earlier ones.
    pub fn from_pairs<I, K, V>(row: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::new(row);
        for (name, value) in pairs {
            record.insert(name, value);
        }
        record
    }

    /// Sets a field, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// 1-based data row number in the source file (the header is row 0).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the value for a field, or `""` when the field is absent.
    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map_or("", String::as_str)
    }

    /// True if the field is present and non-empty.
    pub fn has_value(&self, name: &str) -> bool {
        !self.get(name).is_empty()
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// An accepted contact reprojected onto the schema's output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedContact {
    /// Source row the values came from.
    pub row: usize,
    /// Values aligned with the output columns.
    pub values: Vec<String>,
}

impl ProjectedContact {
    /// Rebuilds a source-shaped record using `columns` as field names.
    ///
    /// Used to feed an edited file back through the filter.
    pub fn to_record(&self, columns: &[String]) -> ContactRecord {
        ContactRecord::from_pairs(
            self.row,
            columns
                .iter()
                .zip(&self.values)
                .map(|(name, value)| (name.clone(), value.clone())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_empty_are_equivalent() {
        let record = ContactRecord::from_pairs(1, [("City", "")]);
        assert_eq!(record.get("City"), "");
        assert_eq!(record.get("State"), "");
        assert!(!record.has_value("City"));
        assert!(!record.has_value("State"));
        assert!(record.contains_field("City"));
        assert!(!record.contains_field("State"));
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let record = ContactRecord::from_pairs(3, [("City", " ")]);
        assert_eq!(record.get("City"), " ");
        assert!(record.has_value("City"));
        assert_eq!(record.row(), 3);
    }

    #[test]
    fn test_later_pairs_overwrite() {
        let record = ContactRecord::from_pairs(1, [("City", "Home"), ("City", "Mailing")]);
        assert_eq!(record.get("City"), "Mailing");
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_projected_to_record() {
        let projected = ProjectedContact {
            row: 4,
            values: vec!["Jo".to_string(), "Lee".to_string()],
        };
        let columns = vec!["First Name".to_string(), "Last Name".to_string()];
        let record = projected.to_record(&columns);
        assert_eq!(record.row(), 4);
        assert_eq!(record.get("First Name"), "Jo");
        assert_eq!(record.get("Last Name"), "Lee");
    }
}
