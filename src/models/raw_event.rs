use super::{direction::Direction, employee::Employee};
use chrono::{NaiveDate, NaiveDateTime};

/// One clock event as read from the input sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEvent {
    pub employee: Employee,
    pub timestamp: NaiveDateTime,
    pub direction: Option<Direction>, // None when the layout carries no direction
    pub row: u32,                     // 1-based source row
}

impl RawEvent {
    pub fn new(
        employee: Employee,
        timestamp: NaiveDateTime,
        direction: Option<Direction>,
        row: u32,
    ) -> Self {
        Self {
            employee,
            timestamp,
            direction,
            row,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}
