//! Recoverable issues found while processing a batch.
//!
//! Every issue is emitted on the log stream when it is recorded and kept for
//! the final summary, so a run reports what was skipped and why.

use crate::models::Employee;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    MalformedRow,
    MalformedName,
    ExcludedName,
    IncompleteRecord,
    ClampedDuration,
    UnmatchedDate,
    DuplicateDate,
    NameCollision,
    EmployeeFailed,
}

impl IssueKind {
    pub fn label(&self) -> &'static str {
        match self {
            IssueKind::MalformedRow => "malformed row",
            IssueKind::MalformedName => "malformed name",
            IssueKind::ExcludedName => "excluded name",
            IssueKind::IncompleteRecord => "incomplete day",
            IssueKind::ClampedDuration => "anomalous duration",
            IssueKind::UnmatchedDate => "unmatched date",
            IssueKind::DuplicateDate => "duplicate date",
            IssueKind::NameCollision => "file name collision",
            IssueKind::EmployeeFailed => "employee failed",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub employee: Option<String>,
    pub date: Option<NaiveDate>,
    pub row: Option<u32>,
    pub message: String,
}

impl Issue {
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            employee: None,
            date: None,
            row: None,
            message: message.into(),
        }
    }

    pub fn employee(mut self, employee: &Employee) -> Self {
        self.employee = Some(employee.to_string());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn row(mut self, row: u32) -> Self {
        self.row = Some(row);
        self
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.kind.label())?;
        if let Some(row) = self.row {
            write!(f, " row {row}")?;
        }
        if let Some(employee) = &self.employee {
            write!(f, " {employee}")?;
        }
        if let Some(date) = self.date {
            write!(f, " {}", date.format("%Y-%m-%d"))?;
        }
        write!(f, ": {}", self.message)
    }
}

#[derive(Debug, Default)]
pub struct Diagnostics {
    issues: Vec<Issue>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, issue: Issue) {
        match issue.kind {
            IssueKind::ExcludedName => tracing::debug!("{issue}"),
            IssueKind::EmployeeFailed => tracing::error!("{issue}"),
            _ => tracing::warn!("{issue}"),
        }
        self.issues.push(issue);
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn count(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|i| i.kind == kind).count()
    }

    pub fn of_kind(&self, kind: IssueKind) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}
