//! Spreadsheet coordinates: column letters ("E") and A1 references ("F4").
//!
//! Both types deserialize from their textual form, so a bad layout in the
//! configuration file is rejected while the file is loaded.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest column index supported by the xlsx format (XFD).
const MAX_COLUMNS: u32 = 16_384;

/// Zero-based column index, written as letters in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Column(u16);

impl Column {
    pub fn from_index(index: u16) -> Self {
        Column(index)
    }

    pub fn index(self) -> u16 {
        self.0
    }

    /// Parse column letters ("A", "e", "AB") into a column.
    pub fn parse(s: &str) -> AppResult<Self> {
        let letters = s.trim();
        if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(AppError::InvalidCellRef(format!("'{s}' is not a column name")));
        }

        let mut n: u32 = 0;
        for c in letters.chars() {
            n = n * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
            if n > MAX_COLUMNS {
                return Err(AppError::InvalidCellRef(format!("column '{s}' is out of range")));
            }
        }

        Ok(Column((n - 1) as u16))
    }

    pub fn letters(self) -> String {
        let mut n = self.0 as u32 + 1;
        let mut out = Vec::new();
        while n > 0 {
            let rem = (n - 1) % 26;
            out.push((b'A' + rem as u8) as char);
            n = (n - 1) / 26;
        }
        out.iter().rev().collect()
    }
}

impl TryFrom<String> for Column {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Column::parse(&s)
    }
}

impl From<Column> for String {
    fn from(c: Column) -> Self {
        c.letters()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters())
    }
}

/// A1-style cell reference. `row` is 1-based, as shown by spreadsheet tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CellRef {
    pub row: u32,
    pub column: Column,
}

impl CellRef {
    pub fn parse(s: &str) -> AppResult<Self> {
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| AppError::InvalidCellRef(format!("'{s}' has no row number")))?;
        let (letters, digits) = trimmed.split_at(split);

        let column = Column::parse(letters)?;
        let row = digits
            .parse::<u32>()
            .ok()
            .filter(|r| *r >= 1)
            .ok_or_else(|| AppError::InvalidCellRef(format!("'{s}' has an invalid row number")))?;

        Ok(CellRef { row, column })
    }

    /// Zero-based row index, as used by the spreadsheet readers/writers.
    pub fn row_index(&self) -> u32 {
        self.row - 1
    }
}

impl TryFrom<String> for CellRef {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        CellRef::parse(&s)
    }
}

impl From<CellRef> for String {
    fn from(c: CellRef) -> Self {
        c.to_string()
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}
