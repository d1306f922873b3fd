#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rattendance::config::Config;
use rattendance::import::open_sheet;
use rattendance::models::{CellValue, Employee, RawEvent, Sheet};
use rattendance::utils::CellRef;
use rattendance::utils::excel_date::date_to_excel_serial;
use rust_xlsxwriter::{Format, Workbook};
use std::fs;
use std::path::Path;

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

pub fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

pub fn hm(h: i64, m: i64) -> Duration {
    Duration::hours(h) + Duration::minutes(m)
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid timestamp")
}

pub fn event(name: &str, at: &str, row: u32) -> RawEvent {
    RawEvent::new(Employee::new(name), ts(at), None, row)
}

/// Clock export in the default layout: data from row 5, name in B,
/// date in G, entry time in H, exit time in J. Empty strings leave the
/// cell blank.
pub fn write_events_xlsx(path: &Path, rows: &[[&str; 4]]) {
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();

    ws.write_string(0, 1, "Giriş Çıkış Raporu").unwrap();
    ws.write_string(3, 1, "Personel").unwrap();
    ws.write_string(3, 6, "Tarih").unwrap();
    ws.write_string(3, 7, "Giriş").unwrap();
    ws.write_string(3, 9, "Çıkış").unwrap();

    for (i, [name, date, entry, exit]) in rows.iter().enumerate() {
        let r = 4 + i as u32;
        for (col, value) in [(1u16, name), (6, date), (7, entry), (9, exit)] {
            if !value.is_empty() {
                ws.write_string(r, col, *value).unwrap();
            }
        }
    }

    workbook.save(path).unwrap();
}

/// Template in the default layout: one date per row from row 6 in column E.
pub fn write_template_xlsx(path: &Path, first: NaiveDate, days: u32) {
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.set_name("Puantaj").unwrap();

    ws.write_string(0, 0, "Aylık Puantaj").unwrap();
    ws.write_string(3, 4, "Personel:").unwrap();
    for (col, label) in [(4u16, "Tarih"), (5, "Giriş"), (6, "Çıkış"), (8, "Net")] {
        ws.write_string(4, col, label).unwrap();
    }

    let date_fmt = Format::new().set_num_format("dd.mm.yyyy");
    for i in 0..days {
        let date = first + Duration::days(i as i64);
        ws.write_number_with_format(5 + i, 4, date_to_excel_serial(date), &date_fmt)
            .unwrap();
    }

    workbook.save(path).unwrap();
}

/// In-memory template sheet: dates in E6.., optional header text.
pub fn template_sheet(first: NaiveDate, days: u32) -> Sheet {
    let mut sheet = Sheet::new("Puantaj");
    sheet.set(3, col("E"), CellValue::from("Personel:"));
    sheet.set(4, col("E"), CellValue::from("Tarih"));
    for i in 0..days {
        sheet.set(
            5 + i,
            col("E"),
            CellValue::Date(first + Duration::days(i as i64)),
        );
    }
    sheet
}

pub fn col(letters: &str) -> rattendance::utils::Column {
    rattendance::utils::Column::parse(letters).unwrap()
}

/// One clock event per row (no exit column).
pub fn single_event_config() -> Config {
    let mut cfg = Config::default();
    cfg.input.exit_time_column = None;
    cfg
}

pub fn write_config(path: &Path, cfg: &Config) {
    fs::write(path, cfg.to_yaml().unwrap()).unwrap();
}

pub fn read_cell(path: &Path, a1: &str) -> CellValue {
    let sheet = open_sheet(path, None, b',').expect("readable workbook");
    sheet.get_ref(CellRef::parse(a1).unwrap()).clone()
}
