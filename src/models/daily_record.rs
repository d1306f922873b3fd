use super::employee::Employee;
use chrono::{Duration, NaiveDate, NaiveTime};

/// Aggregated attendance of one employee on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRecord {
    pub employee: Employee,
    pub date: NaiveDate,
    pub first_in: Option<NaiveTime>,
    pub last_out: Option<NaiveTime>,
    pub net_duration: Duration,
    pub event_count: usize,
    pub incomplete: bool, // missing first-in or last-out, net duration is zero
    pub anomalous: bool,  // negative duration clamped to zero
}

impl DailyRecord {
    pub fn net_minutes(&self) -> i64 {
        self.net_duration.num_minutes()
    }

    pub fn is_complete(&self) -> bool {
        !self.incomplete && !self.anomalous
    }
}
