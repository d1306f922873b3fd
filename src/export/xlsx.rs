// src/export/xlsx.rs

use crate::config::OutputConfig;
use crate::errors::AppResult;
use crate::models::DailyRecord;
use crate::utils::excel_date::{date_to_excel_serial, duration_to_excel_serial, time_to_excel_serial};
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 8] = [
    "Employee", "Date", "In", "Out", "Net", "Events", "Incomplete", "Anomalous",
];

/// Daily records as a flat table: header row, banded rows, auto-width columns.
pub fn export_records(records: &[DailyRecord], path: &Path, cfg: &OutputConfig) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Daily records")?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = HEADERS.iter().map(|h| UnicodeWidthStr::width(*h)).collect();
    col_widths[0] = records
        .iter()
        .map(|r| UnicodeWidthStr::width(r.employee.as_str()))
        .fold(col_widths[0], usize::max);

    // ---------------------------
    // Rows
    // ---------------------------
    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        let band = if i % 2 == 0 {
            Color::RGB(0xEAF3FB)
        } else {
            Color::RGB(0xFFFFFF)
        };
        write_record(worksheet, row, record, band, cfg)?;
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, (*w).max(10) as f64 + 2.0)?;
    }

    workbook.save(path)?;
    tracing::debug!("{} daily record(s) written to {}", records.len(), path.display());
    Ok(())
}

fn write_record(
    ws: &mut Worksheet,
    row: u32,
    r: &DailyRecord,
    band: Color,
    cfg: &OutputConfig,
) -> AppResult<()> {
    let cell = |num_format: Option<&str>| {
        let f = Format::new()
            .set_background_color(band)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);
        match num_format {
            Some(nf) => f.set_num_format(nf),
            None => f,
        }
    };
    let text = cell(None);

    ws.write_with_format(row, 0, r.employee.as_str(), &text)?;
    ws.write_number_with_format(
        row,
        1,
        date_to_excel_serial(r.date),
        &cell(Some(cfg.date_format.as_str())),
    )?;

    let time_format = cell(Some(cfg.time_format.as_str()));
    for (col, time) in [(2u16, r.first_in), (3, r.last_out)] {
        match time {
            Some(t) => ws.write_number_with_format(row, col, time_to_excel_serial(t), &time_format)?,
            None => ws.write_blank(row, col, &text)?,
        };
    }

    ws.write_number_with_format(
        row,
        4,
        duration_to_excel_serial(r.net_duration),
        &cell(Some(cfg.duration_format.as_str())),
    )?;
    ws.write_number_with_format(row, 5, r.event_count as f64, &text)?;
    ws.write_boolean_with_format(row, 6, r.incomplete, &text)?;
    ws.write_boolean_with_format(row, 7, r.anomalous, &text)?;
    Ok(())
}
