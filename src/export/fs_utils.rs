// src/export/fs_utils.rs

use crate::errors::AppResult;
use crate::models::Employee;
use std::fs;
use std::path::{Path, PathBuf};

/// Create the output directory if it does not exist yet.
pub(crate) fn ensure_output_dir(dir: &Path) -> AppResult<()> {
    if !dir.as_os_str().is_empty() && !dir.exists() {
        fs::create_dir_all(dir)?;
        tracing::debug!("Created output directory {}", dir.display());
    }
    Ok(())
}

/// `<dir>/<Employee_Name><suffix>.xlsx`; stable across runs, so a rerun overwrites.
pub fn report_path(dir: &Path, employee: &Employee, suffix: &str) -> PathBuf {
    dir.join(format!("{}{}.xlsx", employee.file_stem(), suffix))
}
