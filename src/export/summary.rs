// src/export/summary.rs

use crate::errors::AppResult;
use crate::models::RunSummary;
use crate::ui::messages::{info, success, warning};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Machine-readable copy of the run summary.
pub fn write_summary_json(summary: &RunSummary, path: &Path) -> AppResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), summary)?;
    Ok(())
}

/// Final summary for the terminal.
pub fn print_summary(summary: &RunSummary) {
    if summary.dry_run {
        info("Dry run: no report files were written.");
    }

    let headline = format!(
        "{} of {} employee(s) processed, {} report(s) written",
        summary.employees_processed,
        summary.employees_total,
        summary.reports.len()
    );
    if summary.employees_failed == 0 {
        success(headline);
    } else {
        warning(format!(
            "{headline}; {} employee(s) failed",
            summary.employees_failed
        ));
    }

    info(format!(
        "{} clock event(s) → {} day record(s): {} unmatched, {} anomalous, {} incomplete",
        summary.events_read,
        summary.records_total,
        summary.records_unmatched,
        summary.records_anomalous,
        summary.records_incomplete
    ));

    if summary.rows_skipped > 0 || summary.names_excluded > 0 {
        warning(format!(
            "{} input row(s) skipped as malformed, {} summary row(s) excluded",
            summary.rows_skipped, summary.names_excluded
        ));
    }
}
