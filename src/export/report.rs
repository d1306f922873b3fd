// src/export/report.rs

use crate::config::OutputConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{CellValue, Report};
use crate::utils::excel_date::{
    date_to_excel_serial, datetime_to_excel_serial, duration_to_excel_serial, time_to_excel_serial,
};
use std::path::Path;
use umya_spreadsheet::{Cell, Spreadsheet};

/// The template workbook as stored on disk: formulas, merged ranges, styles
/// and column widths included. Parsed once per batch; every report starts
/// from a clone of it.
#[derive(Debug, Clone)]
pub struct TemplateWorkbook {
    book: Spreadsheet,
    sheet: String,
}

impl TemplateWorkbook {
    /// Open `path` for writing copies of worksheet `sheet`.
    pub fn open(path: &Path, sheet: &str) -> AppResult<Self> {
        let writable = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("xlsx") || e.eq_ignore_ascii_case("xlsm"));
        if !writable {
            return Err(AppError::Structural(format!(
                "template {} must be an .xlsx or .xlsm workbook",
                path.display()
            )));
        }

        let book = umya_spreadsheet::reader::xlsx::read(path)?;
        if book.get_sheet_by_name(sheet).is_none() {
            return Err(AppError::Structural(format!(
                "worksheet '{sheet}' not found in template {}",
                path.display()
            )));
        }

        Ok(Self {
            book,
            sheet: sheet.to_string(),
        })
    }

    /// Save a copy of the template with the report's filled cells applied.
    /// Every other cell, formula and range of the workbook is left as is.
    pub fn write_report(&self, report: &Report, path: &Path, cfg: &OutputConfig) -> AppResult<()> {
        let mut book = self.book.clone();
        let sheet = book.get_sheet_by_name_mut(&self.sheet).ok_or_else(|| {
            AppError::Structural(format!("worksheet '{}' disappeared", self.sheet))
        })?;

        for (row, col, value) in report.filled() {
            // umya addresses cells as 1-based (column, row)
            let cell = sheet.get_cell_mut((col.index() as u32 + 1, row + 1));
            write_cell(cell, value, cfg);
        }

        umya_spreadsheet::writer::xlsx::write(&book, path)?;
        Ok(())
    }
}

fn write_cell(cell: &mut Cell, value: &CellValue, cfg: &OutputConfig) {
    let (serial, format) = match value {
        CellValue::Empty => {
            cell.set_value_string("");
            return;
        }
        CellValue::Text(s) => {
            cell.set_value_string(s.as_str());
            return;
        }
        CellValue::Number(n) => {
            cell.set_value_number(*n);
            return;
        }
        CellValue::Bool(b) => {
            cell.set_value_bool(*b);
            return;
        }
        CellValue::Date(d) => (date_to_excel_serial(*d), cfg.date_format.clone()),
        CellValue::DateTime(dt) => (
            datetime_to_excel_serial(dt),
            format!("{} {}", cfg.date_format, cfg.time_format),
        ),
        CellValue::Time(t) => (time_to_excel_serial(*t), cfg.time_format.clone()),
        CellValue::Duration(d) => (duration_to_excel_serial(*d), cfg.duration_format.clone()),
    };

    cell.set_value_number(serial);
    cell.get_style_mut()
        .get_number_format_mut()
        .set_format_code(format);
}
