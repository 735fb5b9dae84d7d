use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde_json::{Value, json};

use scrub_model::{FieldSchema, RejectionReason};
use scrub_output::format_timestamp;

use scrub_cli::pipeline::RunReport;

pub fn print_summary(report: &RunReport) {
    let result = &report.result;
    println!("Original file: {}", report.paths.source.display());
    if report.written {
        println!("Edited file: {}", report.paths.edited.display());
        println!("Log file: {}", report.paths.log.display());
    } else {
        println!("Dry run: no files written");
    }
    if report.preamble_rows > 0 {
        println!("Preamble rows stripped: {}", report.preamble_rows);
    }
    if !report.duplicate_columns.is_empty() {
        println!(
            "Repeated columns (last one used): {}",
            report.duplicate_columns.join(", ")
        );
    }
    if !report.header.is_complete() {
        eprintln!(
            "warning: columns missing from the source were treated as empty: {}",
            report.header.missing.join(", ")
        );
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Contacts"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Total"), Cell::new(result.total_count())]);
    table.add_row(vec![
        Cell::new("Formatted"),
        count_cell(result.accepted_count(), Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Skipped: missing field"),
        count_cell(result.missing_field_count(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Skipped: no date"),
        count_cell(result.no_date_count(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Skipped")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(result.rejected_count(), Color::Red).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_skipped_table(report);
}

fn print_skipped_table(report: &RunReport) {
    let rejected = report.result.rejected();
    if rejected.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Contact"),
        header_cell("Reason"),
        header_cell("Fields"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for contact in rejected {
        let (label, fields) = match &contact.reason {
            RejectionReason::MissingMandatoryField { fields } => {
                (Cell::new("missing field").fg(Color::Red), fields)
            }
            RejectionReason::NoQualifyingDate { fields } => {
                (Cell::new("no date").fg(Color::Yellow), fields)
            }
        };
        table.add_row(vec![
            Cell::new(contact.id.row),
            contact_cell(&contact.id.display_name),
            label,
            Cell::new(fields.join(", ")),
        ]);
    }
    println!();
    println!("Skipped contacts:");
    println!("{table}");
}

pub fn print_schema(schema: &FieldSchema) {
    println!("{}", schema_table(schema));
    let unlisted = checked_not_output(schema);
    if !unlisted.is_empty() {
        println!("Checked but not output: {}", unlisted.join(", "));
    }
    println!("Contact name: {}", schema.display_name.join(" + "));
}

fn schema_table(schema: &FieldSchema) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Output column"),
        header_cell("Rule"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (idx, field) in schema.output_order.iter().enumerate() {
        let rule = if schema.is_mandatory(field) {
            Cell::new("mandatory").fg(Color::Red)
        } else if schema.is_at_least_one(field) {
            Cell::new("at least one").fg(Color::Yellow)
        } else {
            dim_cell("optional")
        };
        table.add_row(vec![Cell::new(idx + 1), Cell::new(field), rule]);
    }
    table
}

/// Mandatory and at-least-one fields that are not output columns.
fn checked_not_output(schema: &FieldSchema) -> Vec<&str> {
    schema
        .mandatory
        .iter()
        .chain(&schema.at_least_one)
        .map(String::as_str)
        .filter(|field| !schema.output_order.iter().any(|o| o == field))
        .collect()
}

/// JSON document printed by `run --json`.
///
/// Paths are rendered for display, so names that are not valid UTF-8 are
/// shown lossily instead of failing.
pub fn report_json(report: &RunReport) -> serde_json::Result<Value> {
    Ok(json!({
        "source": report.paths.source.display().to_string(),
        "edited": report.paths.edited.display().to_string(),
        "log": report.paths.log.display().to_string(),
        "written": report.written,
        "started": format_timestamp(report.started),
        "finished": format_timestamp(report.finished),
        "preamble_rows": report.preamble_rows,
        "duplicate_columns": report.duplicate_columns,
        "missing_columns": report.header.missing,
        "encoding": report.encoding.to_string(),
        "result": serde_json::to_value(&report.result)?,
    }))
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn contact_cell(name: &str) -> Cell {
    if name.is_empty() {
        dim_cell("(unnamed)")
    } else {
        Cell::new(name)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use chrono::NaiveDate;
    use scrub_filter::HeaderCheck;
    use scrub_ingest::SourceEncoding;
    use scrub_model::{ContactId, RunResult};
    use scrub_output::OutputPaths;

    fn report() -> RunReport {
        let at = NaiveDate::from_ymd_opt(2024, 7, 22)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let mut result = RunResult::new(vec!["First Name".to_string()]);
        result.push_rejected(
            ContactId::new(1, "Mo Diaz"),
            RejectionReason::NoQualifyingDate {
                fields: vec!["Birthday".to_string()],
            },
        );
        RunReport {
            paths: OutputPaths {
                source: PathBuf::from("/data/testDoc.csv"),
                save_dir: PathBuf::from("/data"),
                edited: PathBuf::from("/data/testDoc_edited.csv"),
                log: PathBuf::from("/data/testDoc_log.txt"),
            },
            result,
            header: HeaderCheck {
                missing: vec!["Address line 2".to_string()],
            },
            preamble_rows: 2,
            duplicate_columns: vec!["City".to_string()],
            encoding: SourceEncoding::Utf8,
            written: false,
            started: at,
            finished: at,
        }
    }

    #[test]
    fn test_report_json() {
        let value = report_json(&report()).unwrap();
        assert_eq!(value["source"], "/data/testDoc.csv");
        assert_eq!(value["written"], false);
        assert_eq!(value["started"], "22/07/2024 09:00:00");
        assert_eq!(value["missing_columns"][0], "Address line 2");
        assert_eq!(value["encoding"], "UTF-8");
        let rejected = &value["result"]["rejected"][0];
        assert_eq!(rejected["id"]["display_name"], "Mo Diaz");
        assert_eq!(rejected["reason"]["kind"], "no_qualifying_date");
    }

    #[cfg(unix)]
    #[test]
    fn test_report_json_non_utf8_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let mut report = report();
        report.paths.source = PathBuf::from(OsStr::from_bytes(b"/data/caf\xe9.csv"));
        let value = report_json(&report).unwrap();
        assert!(value["source"].as_str().unwrap().starts_with("/data/caf"));
    }

    #[test]
    fn test_schema_table_lists_rules() {
        let schema = FieldSchema::default();
        let text = schema_table(&schema).to_string();
        for field in &schema.output_order {
            assert!(text.contains(field.as_str()), "{field} missing");
        }
        assert!(text.contains("mandatory"));
        assert!(text.contains("at least one"));
        assert!(text.contains("optional"));
    }

    #[test]
    fn test_checked_not_output() {
        let mut schema = FieldSchema::default();
        assert!(checked_not_output(&schema).is_empty());
        schema.mandatory.push("Email".to_string());
        assert_eq!(checked_not_output(&schema), vec!["Email"]);
    }
}
