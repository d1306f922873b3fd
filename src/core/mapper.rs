//! Template mapping: one employee's daily records → a filled report copy.

use crate::config::TemplateLayout;
use crate::core::diagnostics::{Diagnostics, Issue, IssueKind};
use crate::errors::{AppError, AppResult};
use crate::import::template::Template;
use crate::models::{CellValue, DailyRecord, Employee, Report};
use std::collections::HashSet;

/// Fill a fresh copy of `template` with `records`.
///
/// - dates are matched exactly against the template's date rows
/// - a date missing from the template is reported and skipped
/// - two records for one date: the last one wins, with a warning
pub fn fill_template(
    template: &Template,
    employee: &Employee,
    records: &[DailyRecord],
    diag: &mut Diagnostics,
) -> AppResult<Report> {
    let layout = template.layout();
    if template.rows().is_empty() {
        return Err(AppError::Structural(format!(
            "template sheet '{}' has no dates in column {}",
            template.sheet().name(),
            layout.date_column
        )));
    }

    let mut report = Report::from_template(template.sheet(), employee.clone());

    if let Some(cell) = layout.name_cell {
        report.set(
            cell.row_index(),
            cell.column,
            CellValue::Text(employee.to_string()),
        );
    }

    let mut written: HashSet<u32> = HashSet::new();

    for record in records {
        let Some(row) = template.row_for(record.date) else {
            report.unmatched += 1;
            diag.record(
                Issue::new(
                    IssueKind::UnmatchedDate,
                    "no template row for this date; day not written",
                )
                .employee(employee)
                .date(record.date),
            );
            continue;
        };

        if written.contains(&row.row) {
            diag.record(
                Issue::new(
                    IssueKind::DuplicateDate,
                    format!(
                        "template row {} already filled; keeping the later record",
                        row.row + 1
                    ),
                )
                .employee(employee)
                .date(record.date),
            );
        }

        write_record(&mut report, row.row, record, layout);
        written.insert(row.row);
    }

    report.populated = written.len();
    tracing::debug!(
        "{}: {} day(s) written, {} unmatched",
        employee,
        report.populated,
        report.unmatched
    );

    Ok(report)
}

fn write_record(report: &mut Report, row: u32, record: &DailyRecord, layout: &TemplateLayout) {
    report.set(
        row,
        layout.first_in_column,
        record.first_in.map_or(CellValue::Empty, CellValue::Time),
    );
    report.set(
        row,
        layout.last_out_column,
        record.last_out.map_or(CellValue::Empty, CellValue::Time),
    );
    report.set(
        row,
        layout.net_duration_column,
        CellValue::Duration(record.net_duration),
    );
}
