use super::{cell::CellValue, employee::Employee, sheet::Sheet};
use crate::utils::cell_ref::Column;
use std::collections::BTreeMap;

/// A per-employee copy of the template, filled with that employee's days.
/// Built once by the mapper, then only read by the writer.
///
/// `sheet` is the full value view (template values plus filled cells);
/// `filled` holds only the cells the mapper wrote, which is all the writer
/// touches in the template workbook.
#[derive(Debug, Clone)]
pub struct Report {
    pub employee: Employee,
    sheet: Sheet,
    filled: BTreeMap<(u32, u16), CellValue>,
    pub populated: usize,
    pub unmatched: usize,
}

impl Report {
    /// Independent copy of the template cells for `employee`.
    pub fn from_template(template: &Sheet, employee: Employee) -> Self {
        Self {
            employee,
            sheet: template.clone(),
            filled: BTreeMap::new(),
            populated: 0,
            unmatched: 0,
        }
    }

    pub fn set(&mut self, row: u32, col: Column, value: CellValue) {
        self.sheet.set(row, col, value.clone());
        self.filled.insert((row, col.index()), value);
    }

    pub fn get(&self, row: u32, col: Column) -> &CellValue {
        self.sheet.get(row, col)
    }

    /// Cells written by the mapper, zero-based, in row order. Empty values
    /// mean "clear this cell".
    pub fn filled(&self) -> impl Iterator<Item = (u32, Column, &CellValue)> {
        self.filled
            .iter()
            .map(|((r, c), v)| (*r, Column::from_index(*c), v))
    }
}
