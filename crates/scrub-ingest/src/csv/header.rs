//! CSV header normalization and duplicate-column resolution.

/// Result of CSV header analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Normalized column names, in file order, duplicates included.
    pub columns: Vec<String>,
    /// Non-empty names that appear more than once, in first-seen order.
    pub duplicates: Vec<String>,
}

impl CsvHeaders {
    /// Builds headers from raw header cells.
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let columns: Vec<String> = raw
            .into_iter()
            .map(|cell| normalize_header(cell.as_ref()))
            .collect();
        let mut duplicates = Vec::new();
        for (idx, name) in columns.iter().enumerate() {
            if !name.is_empty() && columns[..idx].contains(name) && !duplicates.contains(name) {
                duplicates.push(name.clone());
            }
        }
        Self {
            columns,
            duplicates,
        }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// True when no column has a name.
    pub fn is_blank(&self) -> bool {
        self.columns.iter().all(String::is_empty)
    }

    /// Index of the column that supplies values for `name`.
    ///
    /// When a name repeats, the last occurrence wins. KW Command writes the
    /// home address columns before the mailing address columns under the
    /// same names, so this picks the mailing address.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().rposition(|c| c == name)
    }

    /// Each distinct non-empty name with the index that supplies its values.
    pub fn resolved(&self) -> Vec<(&str, usize)> {
        let mut resolved: Vec<(&str, usize)> = Vec::with_capacity(self.columns.len());
        for (idx, name) in self.columns.iter().enumerate() {
            if name.is_empty() {
                continue;
            }
            match resolved.iter_mut().find(|(seen, _)| *seen == name.as_str()) {
                Some(entry) => entry.1 = idx,
                None => resolved.push((name.as_str(), idx)),
            }
        }
        resolved
    }
}

/// Normalizes a header value by stripping a BOM and trimming whitespace.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  City  "), "City");
        assert_eq!(normalize_header("\u{feff}First Name"), "First Name");
        assert_eq!(normalize_header("City"), "City");
    }

    #[test]
    fn test_headers_without_duplicates() {
        let headers = CsvHeaders::new(["A", "B", "C"]);
        assert_eq!(headers.len(), 3);
        assert!(headers.duplicates.is_empty());
        assert_eq!(headers.position("B"), Some(1));
        assert_eq!(headers.position("Z"), None);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let headers = CsvHeaders::new(["Name", "City", "Zip", "City", "Zip", "City"]);
        assert_eq!(headers.duplicates, vec!["City", "Zip"]);
        assert_eq!(headers.position("City"), Some(5));
        assert_eq!(
            headers.resolved(),
            vec![("Name", 0), ("City", 5), ("Zip", 4)]
        );
    }

    #[test]
    fn test_blank_columns_skipped() {
        let headers = CsvHeaders::new(["A", "", " "]);
        assert!(!headers.is_blank());
        assert_eq!(headers.resolved(), vec![("A", 0)]);
        assert!(CsvHeaders::new(["", " "]).is_blank());
    }

    #[test]
    fn test_trailing_blank_columns_are_not_duplicates() {
        let headers = CsvHeaders::new(["First Name", "Country", "", ""]);
        assert!(headers.duplicates.is_empty());
        assert_eq!(headers.len(), 4);
    }
}
