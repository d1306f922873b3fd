mod common;
use calamine::{Data, ExcelDateTime, ExcelDateTimeType};
use chrono::Duration;
use common::{d, hm, read_cell, t, write_events_xlsx};
use rattendance::config::Config;
use rattendance::core::{Batch, BatchPaths, RunContext};
use rattendance::errors::AppError;
use rattendance::export::TemplateWorkbook;
use rattendance::import::cell_from_data;
use rattendance::models::CellValue;
use rattendance::utils::excel_date::date_to_excel_serial;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;
use tempfile::tempdir;

fn native(value: f64, is_1904: bool) -> CellValue {
    cell_from_data(&Data::DateTime(ExcelDateTime::new(
        value,
        ExcelDateTimeType::DateTime,
        is_1904,
    )))
}

#[test]
fn test_native_dates_in_1900_workbook() {
    assert_eq!(native(45301.0, false), CellValue::Date(d(2024, 1, 10)));
    assert_eq!(native(0.5, false), CellValue::Time(t(12, 0)));
    assert_eq!(
        native(45301.25, false),
        CellValue::DateTime(d(2024, 1, 10).and_time(t(6, 0)))
    );
}

#[test]
fn test_native_dates_in_1904_workbook() {
    // Mac workbooks count days from 1904-01-01
    assert_eq!(native(43839.0, true), CellValue::Date(d(2024, 1, 10)));
    assert_eq!(native(0.375, true), CellValue::Time(t(9, 0)));
}

#[test]
fn test_native_durations() {
    let cell = cell_from_data(&Data::DateTime(ExcelDateTime::new(
        1.5,
        ExcelDateTimeType::TimeDelta,
        false,
    )));
    assert_eq!(cell, CellValue::Duration(Duration::hours(36)));
}

/// Template with a title merged over A1:F1, styled dates and a total formula
/// under the net-duration column.
fn write_rich_template(path: &Path) {
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.set_name("Puantaj").unwrap();

    let title = Format::new().set_bold();
    ws.merge_range(0, 0, 0, 5, "Aylık Puantaj", &title).unwrap();
    ws.write_string(3, 4, "Personel:").unwrap();
    ws.set_column_width(4, 14).unwrap();

    let date_fmt = Format::new().set_num_format("dd.mm.yyyy");
    for i in 0..31u32 {
        let date = d(2024, 1, 1) + Duration::days(i as i64);
        ws.write_number_with_format(5 + i, 4, date_to_excel_serial(date), &date_fmt)
            .unwrap();
    }
    ws.write_formula(44, 8, "=SUM(I6:I44)").unwrap();

    workbook.save(path).unwrap();
}

#[test]
fn test_report_keeps_template_formulas_and_merges() {
    let dir = tempdir().unwrap();
    let paths = BatchPaths {
        input: dir.path().join("DATA.xlsx"),
        template: dir.path().join("taslak.xlsx"),
        output_dir: dir.path().join("out"),
    };
    write_rich_template(&paths.template);
    write_events_xlsx(&paths.input, &[["arge*JohnDoe", "10.01.2024", "08:58", "17:32"]]);

    let mut ctx = RunContext::new(Config::default());
    Batch::new(paths.clone()).run(&mut ctx).unwrap();

    let report = paths.output_dir.join("JohnDoe_Attendance.xlsx");
    let book = umya_spreadsheet::reader::xlsx::read(&report).unwrap();
    let sheet = book.get_sheet_by_name("Puantaj").unwrap();

    // I45, (column, row) 1-based
    let total = sheet.get_cell((9u32, 45u32)).unwrap();
    assert!(total.get_formula().contains("SUM(I6:I44)"));

    let merged: Vec<String> = sheet.get_merge_cells().iter().map(|r| r.get_range()).collect();
    assert!(merged.iter().any(|r| r == "A1:F1"), "merged ranges: {merged:?}");

    // filled cells next to untouched template content
    assert_eq!(read_cell(&report, "F15").as_time(), Some(t(8, 58)));
    assert_eq!(read_cell(&report, "G15").as_time(), Some(t(17, 32)));
    assert_eq!(read_cell(&report, "I15").as_duration(), Some(hm(8, 34)));
    assert_eq!(read_cell(&report, "F4"), CellValue::Text("JohnDoe".into()));
    assert_eq!(read_cell(&report, "E15").as_date(), Some(d(2024, 1, 10)));
    assert!(read_cell(&report, "F14").is_empty());
}

#[test]
fn test_template_must_be_xlsx() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("taslak.ods");
    std::fs::write(&path, b"not a workbook").unwrap();

    let result = TemplateWorkbook::open(&path, "Puantaj");
    assert!(matches!(result, Err(AppError::Structural(_))));
}
