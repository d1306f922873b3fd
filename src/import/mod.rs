pub mod source;
pub mod template;
pub mod workbook;

pub use source::{SourceReader, load_events};
pub use template::{Template, TemplateRow};
pub use workbook::{cell_from_data, open_sheet};
