//! Human-readable audit log for a run.

use std::path::Path;

use chrono::NaiveDateTime;

use scrub_model::RunResult;

use crate::atomic::write_atomic;
use crate::error::Result;

/// Day-first timestamp used in the log, e.g. `22/07/2024 12:31:55`.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

const RULE_WIDTH: usize = 99;
const NONE: &str = "(none)";

pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Everything the audit log reports about one run.
#[derive(Debug, Clone, Copy)]
pub struct AuditLog<'a> {
    pub started: NaiveDateTime,
    pub finished: NaiveDateTime,
    pub source: &'a Path,
    pub edited: &'a Path,
    pub result: &'a RunResult,
}

impl AuditLog<'_> {
    /// Renders the log text.
    ///
    /// Sections, in order: start time, file paths, counts, skipped contacts
    /// with the reason, formatted contacts with the qualifying fields, end time.
    pub fn render(&self) -> String {
        let rule = "-".repeat(RULE_WIDTH);
        let result = self.result;
        let mut lines = vec![
            format!(
                "START file conversion process {}",
                format_timestamp(self.started)
            ),
            format!("Original file: {}", self.source.display()),
            format!("Edited file: {}", self.edited.display()),
            rule.clone(),
            format!(
                "Total number of original contacts: {}",
                result.total_count()
            ),
            format!(
                "Number of contacts skipped (see below for list): {}",
                result.rejected_count()
            ),
            format!(
                "Number of contacts formatted (see below for list): {}",
                result.accepted_count()
            ),
            rule.clone(),
        ];

        lines.push("--SKIPPED CONTACTS".to_string());
        if result.rejected().is_empty() {
            lines.push(NONE.to_string());
        }
        lines.extend(result.rejected().iter().map(|contact| {
            format!("{} (row {}): {}", contact.id, contact.id.row, contact.reason)
        }));

        lines.push("--FORMATTED CONTACTS".to_string());
        if result.accepted().is_empty() {
            lines.push(NONE.to_string());
        }
        lines.extend(result.accepted().iter().map(|contact| {
            format!(
                "{} (row {}): {}",
                contact.id,
                contact.id.row,
                contact.qualified_by.join(", ")
            )
        }));

        lines.push(rule);
        lines.push(format!(
            "END file conversion process {}",
            format_timestamp(self.finished)
        ));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// Writes the rendered log to `path` atomically.
pub fn write_log(path: &Path, log: &AuditLog<'_>) -> Result<()> {
    write_atomic(path, log.render().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 22)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_timestamp_is_day_first() {
        assert_eq!(format_timestamp(at(12, 31, 55)), "22/07/2024 12:31:55");
    }

    #[test]
    fn test_empty_run_lists_none() {
        let result = RunResult::new(vec!["Name".to_string()]);
        let log = AuditLog {
            started: at(9, 0, 0),
            finished: at(9, 0, 1),
            source: Path::new("in.csv"),
            edited: Path::new("in_edited.csv"),
            result: &result,
        };
        let text = log.render();
        assert!(text.contains("Total number of original contacts: 0\n"));
        assert!(text.contains("--SKIPPED CONTACTS\n(none)\n--FORMATTED CONTACTS\n(none)\n"));
        assert!(text.ends_with("END file conversion process 22/07/2024 09:00:01\n"));
    }

    #[test]
    fn test_one_line_per_contact() {
        use scrub_model::{ContactId, ProjectedContact, RejectionReason};

        let mut result = RunResult::new(vec!["Name".to_string()]);
        result.push_rejected(
            ContactId::new(1, ""),
            RejectionReason::MissingMandatoryField {
                fields: vec!["City".to_string(), "State".to_string()],
            },
        );
        result.push_accepted(
            ContactId::new(2, "Jo Lee"),
            vec!["Birthday".to_string(), "Home Anniversary".to_string()],
            ProjectedContact {
                row: 2,
                values: vec!["Jo".to_string()],
            },
        );
        let log = AuditLog {
            started: at(9, 0, 0),
            finished: at(9, 0, 1),
            source: Path::new("in.csv"),
            edited: Path::new("in_edited.csv"),
            result: &result,
        };
        let text = log.render();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 14);
        assert_eq!(lines[3], "-".repeat(RULE_WIDTH));
        assert_eq!(lines[9], "(unnamed) (row 1): missing City, State");
        assert_eq!(lines[11], "Jo Lee (row 2): Birthday, Home Anniversary");
        assert!(!text.contains("\n\n"));
    }
}
