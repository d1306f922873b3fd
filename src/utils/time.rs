//! Time utilities: parsing clock times, durations, formatting.

use chrono::{Duration, NaiveTime};

const TIME_FORMATS: [&str; 3] = ["%H:%M:%S", "%H:%M", "%H.%M"];

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(t, fmt).ok())
}

/// Parse "H:MM" / "HH:MM:SS" durations; hours may exceed 24.
pub fn parse_duration(s: &str) -> Option<Duration> {
    let parts: Vec<&str> = s.trim().split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return None;
    }

    let hours: i64 = parts[0].parse().ok()?;
    let minutes: i64 = parts[1].parse().ok()?;
    let seconds: i64 = match parts.get(2) {
        Some(s) => s.parse().ok()?,
        None => 0,
    };

    if hours < 0 || !(0..60).contains(&minutes) || !(0..60).contains(&seconds) {
        return None;
    }

    Some(Duration::hours(hours) + Duration::minutes(minutes) + Duration::seconds(seconds))
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

pub fn format_duration(d: Duration) -> String {
    format_minutes(d.num_minutes())
}

pub fn format_time(t: Option<NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}
