// src/utils/excel_date.rs

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Serial of 9999-12-31, the last date a spreadsheet can represent.
const MAX_SERIAL: f64 = 2_958_466.0;

fn excel_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

pub fn datetime_to_excel_serial(dt: &NaiveDateTime) -> f64 {
    let duration = *dt - excel_epoch();

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86_400) as f64;

    days + secs / SECONDS_PER_DAY
}

pub fn date_to_excel_serial(d: NaiveDate) -> f64 {
    datetime_to_excel_serial(&d.and_time(NaiveTime::MIN))
}

pub fn time_to_excel_serial(t: NaiveTime) -> f64 {
    t.num_seconds_from_midnight() as f64 / SECONDS_PER_DAY
}

pub fn duration_to_excel_serial(d: Duration) -> f64 {
    d.num_seconds() as f64 / SECONDS_PER_DAY
}

/// Serial → timestamp, rounded to the second.
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || !(0.0..MAX_SERIAL).contains(&serial) {
        return None;
    }
    let secs = (serial * SECONDS_PER_DAY).round() as i64;
    excel_epoch().checked_add_signed(Duration::seconds(secs))
}

/// Time of day carried by the fractional part of a serial.
pub fn excel_fraction_to_time(serial: f64) -> Option<NaiveTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let secs = (serial.fract() * SECONDS_PER_DAY).round() as u32 % 86_400;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0)
}

pub fn excel_serial_to_duration(serial: f64) -> Option<Duration> {
    if !serial.is_finite() || serial.abs() >= MAX_SERIAL {
        return None;
    }
    Some(Duration::seconds((serial * SECONDS_PER_DAY).round() as i64))
}
