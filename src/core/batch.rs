//! Batch orchestration: input file → one report file per employee.

use crate::config::Config;
use crate::core::aggregator::aggregate;
use crate::core::context::RunContext;
use crate::core::diagnostics::{Diagnostics, Issue, IssueKind};
use crate::core::mapper::fill_template;
use crate::core::normalizer::Normalizer;
use crate::errors::{AppError, AppResult};
use crate::export::TemplateWorkbook;
use crate::export::fs_utils::{ensure_output_dir, report_path};
use crate::import::{Template, load_events};
use crate::models::{DailyRecord, Employee, RunSummary};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

/// Files a batch reads from and writes to.
#[derive(Debug, Clone)]
pub struct BatchPaths {
    pub input: PathBuf,
    pub template: PathBuf,
    pub output_dir: PathBuf,
}

pub struct Batch {
    paths: BatchPaths,
    dry_run: bool,
}

impl Batch {
    pub fn new(paths: BatchPaths) -> Self {
        Self {
            paths,
            dry_run: false,
        }
    }

    /// Run everything but do not write report files.
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Process the whole batch.
    ///
    /// Fails only on structural problems (template without dates, unreadable
    /// files, bad name patterns). Problems with single rows, dates or
    /// employees are recorded in the context and the batch goes on.
    pub fn run(&self, ctx: &mut RunContext) -> AppResult<RunSummary> {
        let RunContext {
            config,
            diagnostics,
        } = ctx;

        let mut summary = RunSummary {
            dry_run: self.dry_run,
            ..RunSummary::default()
        };

        let template = Template::load(&self.paths.template, &config.template, diagnostics)?;
        let workbook = TemplateWorkbook::open(&self.paths.template, template.sheet().name())?;
        let normalizer = Normalizer::new(&config.normalizer)?;
        let events = load_events(
            &self.paths.input,
            &config.input,
            &normalizer,
            config.aggregation.direction,
            diagnostics,
        )?;
        summary.events_read = events.len();

        if events.is_empty() {
            tracing::warn!("No clock events found in {}; nothing to process", self.paths.input.display());
            fill_counters(&mut summary, diagnostics);
            log_summary(&summary);
            return Ok(summary);
        }

        let records = aggregate(&events, &config.aggregation, diagnostics);
        summary.records_total = records.len();

        let by_employee = group_by_employee(&records);
        summary.employees_total = by_employee.len();
        check_file_names(by_employee.keys().copied(), diagnostics);

        if !self.dry_run {
            ensure_output_dir(&self.paths.output_dir)?;
        }

        // -----------------------------
        // One report per employee
        // -----------------------------
        for (employee, days) in by_employee {
            match self.process_employee(&template, &workbook, employee, &days, config, diagnostics) {
                Ok(path) => {
                    summary.employees_processed += 1;
                    if let Some(p) = path {
                        tracing::info!("Report generated: {}", p.display());
                        summary.reports.push(p);
                    }
                }
                Err(e) => {
                    summary.employees_failed += 1;
                    diagnostics.record(
                        Issue::new(IssueKind::EmployeeFailed, e.to_string()).employee(employee),
                    );
                }
            }
        }

        fill_counters(&mut summary, diagnostics);
        log_summary(&summary);
        Ok(summary)
    }

    fn process_employee(
        &self,
        template: &Template,
        workbook: &TemplateWorkbook,
        employee: &Employee,
        days: &[DailyRecord],
        config: &Config,
        diag: &mut Diagnostics,
    ) -> AppResult<Option<PathBuf>> {
        let report = fill_template(template, employee, days, diag)?;
        if self.dry_run {
            return Ok(None);
        }

        let path = report_path(&self.paths.output_dir, employee, &config.output.file_suffix);
        workbook
            .write_report(&report, &path, &config.output)
            .map_err(|e| AppError::Report {
                employee: employee.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Some(path))
    }
}

/// Records per employee, employees in key order, days in date order.
fn group_by_employee(records: &[DailyRecord]) -> BTreeMap<&Employee, Vec<DailyRecord>> {
    let mut out: BTreeMap<&Employee, Vec<DailyRecord>> = BTreeMap::new();
    for record in records {
        out.entry(&record.employee).or_default().push(record.clone());
    }
    out
}

/// Reports of employees whose names differ only in letter case land on the
/// same file on case-insensitive filesystems.
fn check_file_names<'a>(employees: impl Iterator<Item = &'a Employee>, diag: &mut Diagnostics) {
    let mut seen: HashMap<String, &Employee> = HashMap::new();
    for employee in employees {
        let key = employee.file_stem().to_lowercase();
        match seen.get(&key) {
            Some(first) => diag.record(
                Issue::new(
                    IssueKind::NameCollision,
                    format!("report file name only differs in case from '{first}'"),
                )
                .employee(employee),
            ),
            None => {
                seen.insert(key, employee);
            }
        }
    }
}

fn fill_counters(summary: &mut RunSummary, diag: &Diagnostics) {
    summary.records_unmatched = diag.count(IssueKind::UnmatchedDate);
    summary.records_anomalous = diag.count(IssueKind::ClampedDuration);
    summary.records_incomplete = diag.count(IssueKind::IncompleteRecord);
    summary.rows_skipped =
        diag.count(IssueKind::MalformedRow) + diag.count(IssueKind::MalformedName);
    summary.names_excluded = diag.count(IssueKind::ExcludedName);
}

fn log_summary(s: &RunSummary) {
    tracing::info!(
        "Run summary: {}/{} employees processed, {} failed, {} reports written; \
         {} days ({} unmatched, {} anomalous, {} incomplete); {} rows skipped",
        s.employees_processed,
        s.employees_total,
        s.employees_failed,
        s.reports.len(),
        s.records_total,
        s.records_unmatched,
        s.records_anomalous,
        s.records_incomplete,
        s.rows_skipped
    );
}
