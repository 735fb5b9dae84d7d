//! Field schema describing which columns are kept and which are required.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

pub const FIRST_NAME: &str = "First Name";
pub const LAST_NAME: &str = "Last Name";
pub const BIRTHDAY: &str = "Birthday";
pub const HOME_ANNIVERSARY: &str = "Home Anniversary";
pub const ADDRESS_LINE_1: &str = "Address line 1";
/// Usually a unit or suite number, so it is kept but never required.
pub const ADDRESS_LINE_2: &str = "Address line 2";
pub const CITY: &str = "City";
pub const STATE: &str = "State";
pub const ZIP_CODE: &str = "Zip code";
pub const COUNTRY: &str = "Country";

/// Ordered field schema for one conversion.
///
/// - `output_order`: columns written to the edited file, in this order
/// - `mandatory`: fields that must be non-empty for a row to be kept
/// - `at_least_one`: a row is kept only if one of these is non-empty
/// - `display_name`: fields joined with a space to identify a contact in the log
///
/// Missing keys in a config file fall back to the KW Command to AMCards
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSchema {
    pub output_order: Vec<String>,
    pub mandatory: Vec<String>,
    pub at_least_one: Vec<String>,
    pub display_name: Vec<String>,
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self::kw_command_to_amcards()
    }
}

impl FieldSchema {
    /// Schema for converting a KW Command contact export into an AMCards import.
    pub fn kw_command_to_amcards() -> Self {
        Self {
            output_order: owned(&[
                FIRST_NAME,
                LAST_NAME,
                BIRTHDAY,
                HOME_ANNIVERSARY,
                ADDRESS_LINE_1,
                ADDRESS_LINE_2,
                CITY,
                STATE,
                ZIP_CODE,
                COUNTRY,
            ]),
            mandatory: owned(&[
                FIRST_NAME,
                LAST_NAME,
                ADDRESS_LINE_1,
                CITY,
                STATE,
                ZIP_CODE,
                COUNTRY,
            ]),
            at_least_one: owned(&[BIRTHDAY, HOME_ANNIVERSARY]),
            display_name: owned(&[FIRST_NAME, LAST_NAME]),
        }
    }

    /// Checks the schema is usable before any row is evaluated.
    pub fn validate(&self) -> Result<()> {
        if self.output_order.is_empty() {
            return Err(ModelError::EmptyOutputOrder);
        }
        if self.at_least_one.is_empty() {
            return Err(ModelError::EmptyAtLeastOneGroup);
        }
        check_list("output_order", &self.output_order)?;
        check_list("mandatory", &self.mandatory)?;
        check_list("at_least_one", &self.at_least_one)?;
        check_list("display_name", &self.display_name)?;
        Ok(())
    }

    /// Every field the schema refers to, deduplicated, in first-seen order.
    ///
    /// Order: output columns, then mandatory, at-least-one and display-name
    /// fields that are not output columns.
    pub fn referenced_fields(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.output_order
            .iter()
            .chain(&self.mandatory)
            .chain(&self.at_least_one)
            .chain(&self.display_name)
            .map(String::as_str)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    pub fn is_mandatory(&self, field: &str) -> bool {
        self.mandatory.iter().any(|name| name == field)
    }

    pub fn is_at_least_one(&self, field: &str) -> bool {
        self.at_least_one.iter().any(|name| name == field)
    }

    /// Number of output columns.
    pub fn width(&self) -> usize {
        self.output_order.len()
    }
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

fn check_list(list: &'static str, names: &[String]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(ModelError::BlankFieldName { list });
        }
        if !seen.insert(name.as_str()) {
            return Err(ModelError::DuplicateField {
                list,
                field: name.clone(),
            });
        }
    }
    Ok(())
}
