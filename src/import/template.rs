//! Report template: loaded once, validated, then shared read-only.

use crate::config::TemplateLayout;
use crate::core::diagnostics::{Diagnostics, Issue, IssueKind};
use crate::errors::{AppError, AppResult};
use crate::import::workbook::open_sheet;
use crate::models::Sheet;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::path::Path;

/// A template row holding one calendar date. `row` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateRow {
    pub row: u32,
    pub date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct Template {
    sheet: Sheet,
    layout: TemplateLayout,
    rows: Vec<TemplateRow>,
    by_date: HashMap<NaiveDate, usize>,
}

impl Template {
    pub fn load(path: &Path, layout: &TemplateLayout, diag: &mut Diagnostics) -> AppResult<Self> {
        let sheet = open_sheet(path, layout.sheet.as_deref(), b',')?;
        let template = Self::from_sheet(sheet, layout.clone(), diag)?;
        if let (Some(first), Some(last)) = (template.rows.first(), template.rows.last()) {
            tracing::info!(
                "Template {} loaded: {} dated rows ({} → {})",
                path.display(),
                template.rows.len(),
                first.date,
                last.date
            );
        }
        Ok(template)
    }

    /// Locate the date rows of `sheet` within the layout's row range.
    /// A template without a single date there is structurally unusable.
    pub fn from_sheet(sheet: Sheet, layout: TemplateLayout, diag: &mut Diagnostics) -> AppResult<Self> {
        let mut rows = Vec::new();
        let mut by_date = HashMap::new();

        for row in layout.first_row.saturating_sub(1)..layout.last_row {
            let cell = sheet.get(row, layout.date_column);
            if cell.is_empty() {
                continue;
            }
            let Some(date) = cell.as_date() else {
                tracing::debug!(
                    "Template {}{}: '{}' is not a date, row ignored",
                    layout.date_column,
                    row + 1,
                    cell.as_text().unwrap_or_default()
                );
                continue;
            };

            if let Some(&idx) = by_date.get(&date) {
                let first: &TemplateRow = &rows[idx];
                diag.record(
                    Issue::new(
                        IssueKind::DuplicateDate,
                        format!(
                            "template lists this date again at row {}; row {} is used",
                            row + 1,
                            first.row + 1
                        ),
                    )
                    .date(date)
                    .row(row + 1),
                );
                continue;
            }

            by_date.insert(date, rows.len());
            rows.push(TemplateRow { row, date });
        }

        if rows.is_empty() {
            return Err(AppError::Structural(format!(
                "template sheet '{}' has no dates in column {} (rows {}–{})",
                sheet.name(),
                layout.date_column,
                layout.first_row,
                layout.last_row
            )));
        }

        Ok(Self {
            sheet,
            layout,
            rows,
            by_date,
        })
    }

    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    pub fn layout(&self) -> &TemplateLayout {
        &self.layout
    }

    pub fn rows(&self) -> &[TemplateRow] {
        &self.rows
    }

    /// Exact date match; no ranges, no nearest neighbour.
    pub fn row_for(&self, date: NaiveDate) -> Option<&TemplateRow> {
        self.by_date.get(&date).map(|&i| &self.rows[i])
    }
}
