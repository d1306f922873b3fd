//! Unified application error type.
//! All modules (import, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Spreadsheet / file formats
    // ---------------------------
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX writer error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Template workbook error: {0}")]
    Workbook(#[from] umya_spreadsheet::XlsxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid cell reference: {0}")]
    InvalidCellRef(String),

    // ---------------------------
    // Structural errors (fatal)
    // ---------------------------
    #[error("Structural error: {0}")]
    Structural(String),

    // ---------------------------
    // Per-employee errors (isolated by the batch)
    // ---------------------------
    #[error("Report for '{employee}' failed: {reason}")]
    Report { employee: String, reason: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid name pattern: {0}")]
    Regex(#[from] regex::Error),
}

pub type AppResult<T> = Result<T, AppError>;
