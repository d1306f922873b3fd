//! Spreadsheet loading: xlsx/xlsm/xls/ods through calamine, csv through csv.
//! Files are read whole and converted into typed [`Sheet`]s once.

use crate::errors::{AppError, AppResult};
use crate::models::{CellValue, Sheet};
use crate::utils::cell_ref::Column;
use calamine::{Data, ExcelDateTime, Reader, open_workbook_auto};
use chrono::NaiveTime;
use std::io;
use std::path::Path;

/// Open one worksheet. `sheet` selects it by name (first sheet when `None`);
/// `csv_delimiter` only applies to `.csv` files.
pub fn open_sheet(path: &Path, sheet: Option<&str>, csv_delimiter: u8) -> AppResult<Sheet> {
    if !path.exists() {
        return Err(AppError::from(io::Error::new(
            io::ErrorKind::NotFound,
            format!("file not found: {}", path.display()),
        )));
    }

    if is_csv(path) {
        read_csv(path, csv_delimiter)
    } else {
        read_workbook(path, sheet)
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

fn read_workbook(path: &Path, sheet: Option<&str>) -> AppResult<Sheet> {
    let mut workbook = open_workbook_auto(path)?;
    let names = workbook.sheet_names();

    let name = match sheet {
        Some(wanted) => names
            .iter()
            .find(|n| n.as_str() == wanted)
            .cloned()
            .ok_or_else(|| {
                AppError::Structural(format!(
                    "worksheet '{wanted}' not found in {} (available: {})",
                    path.display(),
                    names.join(", ")
                ))
            })?,
        None => names.first().cloned().ok_or_else(|| {
            AppError::Structural(format!("{} contains no worksheets", path.display()))
        })?,
    };

    let range = workbook.worksheet_range(&name)?;
    let (row0, col0) = range.start().unwrap_or((0, 0));

    let mut out = Sheet::new(name);
    for (r, c, data) in range.used_cells() {
        let row = row0 + r as u32;
        let col = Column::from_index((col0 as usize + c) as u16);
        out.set(row, col, cell_from_data(data));
    }

    tracing::debug!(
        "Loaded sheet '{}' from {} ({} cells)",
        out.name(),
        path.display(),
        out.cell_count()
    );
    Ok(out)
}

fn read_csv(path: &Path, delimiter: u8) -> AppResult<Sheet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "Sheet1".to_string());
    let mut out = Sheet::new(name);

    for (r, record) in reader.records().enumerate() {
        let record = record?;
        for (c, field) in record.iter().enumerate() {
            out.set(r as u32, Column::from_index(c as u16), CellValue::from(field));
        }
    }

    tracing::debug!("Loaded CSV {} ({} cells)", path.display(), out.cell_count());
    Ok(out)
}

/// Typed cell for one calamine value.
pub fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => CellValue::from(s.as_str()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => cell_from_excel_datetime(dt),
        Data::DateTimeIso(s) => iso_cell(s),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

/// Native date cells go through calamine's own conversion, which knows the
/// workbook's date system (1900 or 1904) and the 1900 leap-year quirk.
fn cell_from_excel_datetime(dt: &ExcelDateTime) -> CellValue {
    if dt.is_duration() {
        return dt
            .as_duration()
            .map(CellValue::Duration)
            .unwrap_or(CellValue::Number(dt.as_f64()));
    }

    match dt.as_datetime() {
        // no day part: a clock time
        Some(value) if dt.as_f64() < 1.0 => CellValue::Time(value.time()),
        Some(value) if value.time() == NaiveTime::MIN => CellValue::Date(value.date()),
        Some(value) => CellValue::DateTime(value),
        None => CellValue::Number(dt.as_f64()),
    }
}

fn iso_cell(s: &str) -> CellValue {
    use crate::utils::date::{parse_date, parse_datetime};
    use crate::utils::time::parse_time;

    if let Some(dt) = parse_datetime(s) {
        CellValue::DateTime(dt)
    } else if let Some(d) = parse_date(s) {
        CellValue::Date(d)
    } else if let Some(t) = parse_time(s) {
        CellValue::Time(t)
    } else {
        CellValue::from(s)
    }
}
