// src/export/mod.rs

pub mod fs_utils;
pub mod report;
pub mod summary;
pub mod xlsx;

pub use fs_utils::report_path;
pub use report::TemplateWorkbook;
pub use summary::{print_summary, write_summary_json};
pub use xlsx::export_records;
