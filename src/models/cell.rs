//! Typed spreadsheet cell values.
//!
//! Every cell is converted once, when a sheet is loaded; the rest of the
//! crate reads values through the `as_*` accessors instead of guessing at
//! dynamic types.

use crate::utils::date::{parse_date_or_datetime, parse_datetime};
use crate::utils::excel_date::{
    excel_fraction_to_time, excel_serial_to_datetime, excel_serial_to_duration,
};
use crate::utils::time::{parse_duration, parse_time};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
    Duration(Duration),
}

impl CellValue {
    /// Build a cell from an Excel serial, choosing the narrowest temporal type.
    pub fn from_excel_serial(serial: f64) -> Self {
        if (0.0..1.0).contains(&serial) {
            return excel_fraction_to_time(serial)
                .map(CellValue::Time)
                .unwrap_or(CellValue::Number(serial));
        }

        match excel_serial_to_datetime(serial) {
            Some(dt) if dt.time() == NaiveTime::MIN => CellValue::Date(dt.date()),
            Some(dt) => CellValue::DateTime(dt),
            None => CellValue::Number(serial),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(s) => Some(s.trim().to_string()),
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                Some(format!("{}", *n as i64))
            }
            CellValue::Number(n) => Some(n.to_string()),
            CellValue::Bool(b) => Some(b.to_string()),
            CellValue::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
            CellValue::DateTime(dt) => Some(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
            CellValue::Time(t) => Some(t.format("%H:%M:%S").to_string()),
            CellValue::Duration(d) => Some(crate::utils::time::format_duration(*d)),
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(d) => Some(*d),
            CellValue::DateTime(dt) => Some(dt.date()),
            CellValue::Number(n) if *n >= 1.0 => excel_serial_to_datetime(*n).map(|dt| dt.date()),
            CellValue::Text(s) => parse_date_or_datetime(s),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<NaiveTime> {
        match self {
            CellValue::Time(t) => Some(*t),
            CellValue::DateTime(dt) => Some(dt.time()),
            CellValue::Number(n) => excel_fraction_to_time(*n),
            CellValue::Duration(d) if *d >= Duration::zero() && *d < Duration::days(1) => {
                NaiveTime::from_num_seconds_from_midnight_opt(d.num_seconds() as u32, 0)
            }
            CellValue::Text(s) => parse_time(s).or_else(|| parse_datetime(s).map(|dt| dt.time())),
            _ => None,
        }
    }

    /// Full timestamp; a bare date is not a clock event and yields `None`.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            CellValue::DateTime(dt) => Some(*dt),
            CellValue::Number(n) if *n >= 1.0 => excel_serial_to_datetime(*n),
            CellValue::Text(s) => parse_datetime(s),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            CellValue::Duration(d) => Some(*d),
            CellValue::Time(t) => Some(Duration::seconds(t.num_seconds_from_midnight() as i64)),
            CellValue::Number(n) => excel_serial_to_duration(*n),
            CellValue::Text(s) => parse_duration(s),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        if s.trim().is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(s.to_string())
        }
    }
}
