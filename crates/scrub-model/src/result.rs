//! Per-row outcomes and the run accumulator.

use std::fmt;

use serde::Serialize;

use crate::record::ProjectedContact;

/// Why a row was left out of the edited file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectionReason {
    /// One or more mandatory fields were empty or absent, in schema order.
    MissingMandatoryField { fields: Vec<String> },
    /// Mandatory fields were present but every at-least-one field was empty.
    NoQualifyingDate { fields: Vec<String> },
}

impl RejectionReason {
    /// Short machine-friendly tag.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingMandatoryField { .. } => "missing_mandatory_field",
            Self::NoQualifyingDate { .. } => "no_qualifying_date",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMandatoryField { fields } => {
                write!(f, "missing {}", fields.join(", "))
            }
            Self::NoQualifyingDate { fields } => {
                write!(f, "no dates found ({})", fields.join(", "))
            }
        }
    }
}

/// Outcome of evaluating one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Kept; `qualified_by` lists the non-empty at-least-one fields.
    Accepted { qualified_by: Vec<String> },
    Rejected(RejectionReason),
}

impl RowOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// How a contact is named in summaries and the audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactId {
    pub row: usize,
    pub display_name: String,
}

impl ContactId {
    pub fn new(row: usize, display_name: impl Into<String>) -> Self {
        Self {
            row,
            display_name: display_name.into(),
        }
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.display_name.is_empty() {
            f.write_str("(unnamed)")
        } else {
            f.write_str(&self.display_name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcceptedContact {
    pub id: ContactId,
    pub qualified_by: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedContact {
    pub id: ContactId,
    pub reason: RejectionReason,
}

/// Counters, audit lists and output rows for one filter run.
///
/// Created empty at the start of each run and only grown through
/// [`RunResult::push_accepted`] and [`RunResult::push_rejected`], so
/// `accepted_count() + rejected_count() == total_count()` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunResult {
    /// Output column names, in order.
    pub columns: Vec<String>,
    total: usize,
    accepted: Vec<AcceptedContact>,
    rejected: Vec<RejectedContact>,
    records: Vec<ProjectedContact>,
}

impl RunResult {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    pub fn push_accepted(
        &mut self,
        id: ContactId,
        qualified_by: Vec<String>,
        record: ProjectedContact,
    ) {
        self.total += 1;
        self.accepted.push(AcceptedContact { id, qualified_by });
        self.records.push(record);
    }

    pub fn push_rejected(&mut self, id: ContactId, reason: RejectionReason) {
        self.total += 1;
        self.rejected.push(RejectedContact { id, reason });
    }

    pub fn total_count(&self) -> usize {
        self.total
    }

    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    pub fn accepted(&self) -> &[AcceptedContact] {
        &self.accepted
    }

    pub fn rejected(&self) -> &[RejectedContact] {
        &self.rejected
    }

    /// Reprojected rows for the edited file, in input order.
    pub fn records(&self) -> &[ProjectedContact] {
        &self.records
    }

    /// Rejections caused by missing mandatory fields.
    pub fn missing_field_count(&self) -> usize {
        self.rejected
            .iter()
            .filter(|r| matches!(r.reason, RejectionReason::MissingMandatoryField { .. }))
            .count()
    }

    /// Rejections caused by an empty at-least-one group.
    pub fn no_date_count(&self) -> usize {
        self.rejected
            .iter()
            .filter(|r| matches!(r.reason, RejectionReason::NoQualifyingDate { .. }))
            .count()
    }
}
