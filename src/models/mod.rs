pub mod cell;
pub mod daily_record;
pub mod direction;
pub mod employee;
pub mod raw_event;
pub mod report;
pub mod run_summary;
pub mod sheet;

pub use cell::CellValue;
pub use daily_record::DailyRecord;
pub use direction::Direction;
pub use employee::Employee;
pub use raw_event::RawEvent;
pub use report::Report;
pub use run_summary::RunSummary;
pub use sheet::Sheet;
