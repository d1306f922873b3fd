//! In-memory worksheet: a sparse grid of typed cells.

use crate::models::cell::CellValue;
use crate::utils::cell_ref::{CellRef, Column};
use std::collections::BTreeMap;

static EMPTY: CellValue = CellValue::Empty;

/// Cells are keyed by zero-based (row, column); empty cells are not stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    name: String,
    cells: BTreeMap<(u32, u16), CellValue>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set(&mut self, row: u32, col: Column, value: CellValue) {
        if value.is_empty() {
            self.cells.remove(&(row, col.index()));
        } else {
            self.cells.insert((row, col.index()), value);
        }
    }

    pub fn get(&self, row: u32, col: Column) -> &CellValue {
        self.cells.get(&(row, col.index())).unwrap_or(&EMPTY)
    }

    pub fn get_ref(&self, cell: CellRef) -> &CellValue {
        self.get(cell.row_index(), cell.column)
    }

    /// Zero-based index of the last row holding a value.
    pub fn last_row(&self) -> Option<u32> {
        self.cells.keys().map(|(r, _)| *r).max()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}
