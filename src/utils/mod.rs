pub mod cell_ref;
pub mod date;
pub mod excel_date;
pub mod formatting;
pub mod logger;
pub mod path;
pub mod table;
pub mod time;

pub use cell_ref::{CellRef, Column};
pub use formatting::mins2readable;
