//! Daily aggregation: many clock events → one record per employee and day.

use crate::config::{AggregationConfig, DirectionMode, GapPolicy};
use crate::core::diagnostics::{Diagnostics, Issue, IssueKind};
use crate::models::{DailyRecord, Direction, Employee, RawEvent};
use crate::utils::time::format_duration;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

/// Group events by (employee, calendar day) and derive one record per group.
///
/// Output is ordered by employee, then date; events inside a day are ordered
/// by timestamp and source row, so identical input gives identical output.
pub fn aggregate(
    events: &[RawEvent],
    cfg: &AggregationConfig,
    diag: &mut Diagnostics,
) -> Vec<DailyRecord> {
    let mut days: BTreeMap<(&Employee, NaiveDate), Vec<&RawEvent>> = BTreeMap::new();
    for ev in events {
        days.entry((&ev.employee, ev.date())).or_default().push(ev);
    }

    days.into_iter()
        .map(|((employee, date), mut day)| {
            day.sort_by_key(|e| (e.timestamp, e.row));
            build_daily_record(employee, date, &day, cfg, diag)
        })
        .collect()
}

fn build_daily_record(
    employee: &Employee,
    date: NaiveDate,
    day: &[&RawEvent],
    cfg: &AggregationConfig,
    diag: &mut Diagnostics,
) -> DailyRecord {
    let timeline = directed_timeline(day, cfg.direction);

    // -----------------------------
    // First in / last out
    // -----------------------------
    let (first_in, last_out) = match cfg.direction {
        DirectionMode::Chronological => {
            let first = day.first().map(|e| e.timestamp);
            let last = if day.len() >= 2 {
                day.last().map(|e| e.timestamp)
            } else {
                None
            };
            (first, last)
        }
        DirectionMode::Recorded => (
            timeline.iter().find(|(_, d)| d.is_entry()).map(|(t, _)| *t),
            timeline.iter().rev().find(|(_, d)| d.is_exit()).map(|(t, _)| *t),
        ),
    };

    let mut record = DailyRecord {
        employee: employee.clone(),
        date,
        first_in: first_in.map(|t| t.time()),
        last_out: last_out.map(|t| t.time()),
        net_duration: Duration::zero(),
        event_count: day.len(),
        incomplete: false,
        anomalous: false,
    };

    let (Some(start), Some(end)) = (first_in, last_out) else {
        record.incomplete = true;
        let missing = if first_in.is_none() { "entry" } else { "exit" };
        diag.record(
            Issue::new(
                IssueKind::IncompleteRecord,
                format!(
                    "{} clock event(s), no {missing}; net duration set to 0",
                    day.len()
                ),
            )
            .employee(employee)
            .date(date),
        );
        return record;
    };

    // -----------------------------
    // Net duration
    // -----------------------------
    let gaps = match cfg.gap_policy {
        GapPolicy::None => Duration::zero(),
        GapPolicy::ExcludeBreaks => break_time(&timeline, start, end),
    };
    let net = end - start - gaps;

    if net < Duration::zero() {
        record.anomalous = true;
        diag.record(
            Issue::new(
                IssueKind::ClampedDuration,
                format!(
                    "net duration {} is negative (in {}, out {}); clamped to 0",
                    format_duration(net),
                    start.format("%H:%M"),
                    end.format("%H:%M")
                ),
            )
            .employee(employee)
            .date(date),
        );
    } else {
        record.net_duration = net;
    }

    record
}

/// Events of one day with the direction used for pairing.
/// Chronological mode alternates entry/exit; recorded mode drops events
/// without a direction.
fn directed_timeline(day: &[&RawEvent], mode: DirectionMode) -> Vec<(NaiveDateTime, Direction)> {
    match mode {
        DirectionMode::Chronological => day
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let dir = if i % 2 == 0 {
                    Direction::Entry
                } else {
                    Direction::Exit
                };
                (e.timestamp, dir)
            })
            .collect(),
        DirectionMode::Recorded => day
            .iter()
            .filter_map(|e| e.direction.map(|d| (e.timestamp, d)))
            .collect(),
    }
}

/// Sum of exit → entry intervals lying inside [start, end].
fn break_time(timeline: &[(NaiveDateTime, Direction)], start: NaiveDateTime, end: NaiveDateTime) -> Duration {
    timeline
        .windows(2)
        .filter_map(|w| {
            let (out_ts, out_dir) = w[0];
            let (in_ts, in_dir) = w[1];
            let is_break = out_dir.is_exit()
                && in_dir.is_entry()
                && out_ts >= start
                && in_ts <= end
                && in_ts > out_ts;
            is_break.then(|| in_ts - out_ts)
        })
        .fold(Duration::zero(), |acc, gap| acc + gap)
}
