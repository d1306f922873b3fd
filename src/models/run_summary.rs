use serde::Serialize;
use std::path::PathBuf;

/// Final per-run counters, printed at the end of a batch and optionally
/// written as JSON.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub employees_total: usize,
    pub employees_processed: usize,
    pub employees_failed: usize,
    pub reports: Vec<PathBuf>,
    pub events_read: usize,
    pub records_total: usize,
    pub records_unmatched: usize,
    pub records_anomalous: usize,
    pub records_incomplete: usize,
    pub rows_skipped: usize,
    pub names_excluded: usize,
    pub dry_run: bool,
}
