//! Clock-event export → raw events, following the configured static layout.

use crate::config::{DirectionMode, InputLayout};
use crate::core::diagnostics::{Diagnostics, Issue, IssueKind};
use crate::core::normalizer::Normalizer;
use crate::errors::AppResult;
use crate::import::workbook::open_sheet;
use crate::models::{CellValue, Direction, Employee, RawEvent, Sheet};
use crate::utils::cell_ref::Column;
use chrono::NaiveDateTime;
use std::path::Path;

/// Read every clock event of the input file.
///
/// Unreadable files are fatal; bad rows are recorded in `diag` and skipped.
pub fn load_events(
    path: &Path,
    layout: &InputLayout,
    normalizer: &Normalizer,
    mode: DirectionMode,
    diag: &mut Diagnostics,
) -> AppResult<Vec<RawEvent>> {
    let sheet = open_sheet(path, layout.sheet.as_deref(), layout.csv_delimiter as u8)?;
    let events = SourceReader::new(layout, normalizer, mode).read(&sheet, diag);
    tracing::info!("Read {} clock events from {}", events.len(), path.display());
    Ok(events)
}

pub struct SourceReader<'a> {
    layout: &'a InputLayout,
    normalizer: &'a Normalizer,
    mode: DirectionMode,
}

impl<'a> SourceReader<'a> {
    pub fn new(layout: &'a InputLayout, normalizer: &'a Normalizer, mode: DirectionMode) -> Self {
        Self {
            layout,
            normalizer,
            mode,
        }
    }

    pub fn read(&self, sheet: &Sheet, diag: &mut Diagnostics) -> Vec<RawEvent> {
        let mut events = Vec::new();
        let Some(last_row) = sheet.last_row() else {
            return events;
        };

        for row in self.layout.first_row.saturating_sub(1)..=last_row {
            let source_row = row + 1;

            // Rows without a date are headers, totals or blank lines.
            if sheet.get(row, self.layout.date_column).is_empty() {
                continue;
            }

            let raw_name = sheet
                .get(row, self.layout.name_column)
                .as_text()
                .unwrap_or_default();
            let Some(employee) = self.normalizer.normalize(&raw_name) else {
                diag.record(
                    Issue::new(
                        IssueKind::MalformedName,
                        format!("name '{raw_name}' is empty after normalization; row skipped"),
                    )
                    .row(source_row),
                );
                continue;
            };

            if self.normalizer.is_excluded(&employee) {
                diag.record(
                    Issue::new(IssueKind::ExcludedName, "summary row, not an employee")
                        .employee(&employee)
                        .row(source_row),
                );
                continue;
            }

            match self.row_events(sheet, row, &employee) {
                Ok(row_events) => events.extend(row_events),
                Err(reason) => diag.record(
                    Issue::new(IssueKind::MalformedRow, format!("{reason}; row skipped"))
                        .employee(&employee)
                        .row(source_row),
                ),
            }
        }

        events
    }

    fn row_events(&self, sheet: &Sheet, row: u32, employee: &Employee) -> Result<Vec<RawEvent>, String> {
        let layout = self.layout;
        let date_cell = sheet.get(row, layout.date_column);
        let event = |timestamp: NaiveDateTime, direction: Option<Direction>| {
            RawEvent::new(employee.clone(), timestamp, direction, row + 1)
        };

        // Timestamp in a single cell
        let Some(time_col) = layout.time_column else {
            let timestamp = date_cell
                .as_datetime()
                .ok_or_else(|| format!("unparseable timestamp {}", describe(date_cell)))?;
            return Ok(vec![event(timestamp, self.direction(sheet, row)?)]);
        };

        let date = date_cell
            .as_date()
            .ok_or_else(|| format!("unparseable date {}", describe(date_cell)))?;

        // Paired layout: entry and exit on the same row
        if let Some(exit_col) = layout.exit_time_column {
            let entry = read_time(sheet, row, time_col)?;
            let exit = read_time(sheet, row, exit_col)?;
            if entry.is_none() && exit.is_none() {
                return Err("no entry or exit time".to_string());
            }

            let mut out = Vec::with_capacity(2);
            if let Some(t) = entry {
                out.push(event(date.and_time(t), Some(Direction::Entry)));
            }
            if let Some(t) = exit {
                out.push(event(date.and_time(t), Some(Direction::Exit)));
            }
            return Ok(out);
        }

        let time = read_time(sheet, row, time_col)?.ok_or_else(|| "no clock time".to_string())?;
        Ok(vec![event(date.and_time(time), self.direction(sheet, row)?)])
    }

    /// Direction from the direction column. Unknown markers only matter
    /// when directions are taken from the input.
    fn direction(&self, sheet: &Sheet, row: u32) -> Result<Option<Direction>, String> {
        let Some(col) = self.layout.direction_column else {
            return Ok(None);
        };

        let raw = sheet.get(row, col).as_text().unwrap_or_default();
        let direction =
            Direction::from_marker(&raw, &self.layout.entry_markers, &self.layout.exit_markers);

        match (direction, self.mode) {
            (None, DirectionMode::Recorded) => Err(format!("unrecognized direction '{raw}'")),
            (direction, _) => Ok(direction),
        }
    }
}

/// `Ok(None)` for an empty cell, `Err` for a value that is not a time.
fn read_time(sheet: &Sheet, row: u32, col: Column) -> Result<Option<chrono::NaiveTime>, String> {
    let cell = sheet.get(row, col);
    if cell.is_empty() {
        return Ok(None);
    }
    cell.as_time()
        .map(Some)
        .ok_or_else(|| format!("unparseable time {} in column {col}", describe(cell)))
}

fn describe(cell: &CellValue) -> String {
    format!("'{}'", cell.as_text().unwrap_or_default())
}
