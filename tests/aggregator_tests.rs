mod common;
use chrono::Duration;
use common::{d, event, hm, t, ts};
use rattendance::config::{AggregationConfig, DirectionMode, GapPolicy};
use rattendance::core::{Diagnostics, IssueKind, aggregate};
use rattendance::models::{Direction, Employee, RawEvent};

fn directed(name: &str, at: &str, dir: Direction, row: u32) -> RawEvent {
    RawEvent::new(Employee::new(name), ts(at), Some(dir), row)
}

#[test]
fn test_first_in_last_out_and_net_duration() {
    let events = vec![
        event("JohnDoe", "2024-01-10 12:01", 6),
        event("JohnDoe", "2024-01-10 08:12", 5),
        event("JohnDoe", "2024-01-10 16:46", 8),
        event("JohnDoe", "2024-01-10 12:58", 7),
    ];
    let mut diag = Diagnostics::new();
    let records = aggregate(&events, &AggregationConfig::default(), &mut diag);

    assert_eq!(records.len(), 1);
    let r = &records[0];
    assert_eq!(r.date, d(2024, 1, 10));
    assert_eq!(r.first_in, Some(t(8, 12)));
    assert_eq!(r.last_out, Some(t(16, 46)));
    assert_eq!(r.net_duration, hm(8, 34));
    assert_eq!(r.event_count, 4);
    assert!(r.is_complete());
    assert!(diag.is_empty());
}

#[test]
fn test_single_event_day_is_incomplete() {
    let events = vec![event("Ali", "2024-01-11 08:00", 5)];
    let mut diag = Diagnostics::new();
    let records = aggregate(&events, &AggregationConfig::default(), &mut diag);

    let r = &records[0];
    assert!(r.incomplete);
    assert_eq!(r.first_in, Some(t(8, 0)));
    assert_eq!(r.last_out, None);
    assert_eq!(r.net_duration, Duration::zero());
    assert_eq!(diag.count(IssueKind::IncompleteRecord), 1);
}

#[test]
fn test_groups_by_employee_and_day_in_order() {
    let events = vec![
        event("Zeynep", "2024-01-10 09:00", 5),
        event("Ali", "2024-01-11 08:00", 6),
        event("Zeynep", "2024-01-10 17:00", 7),
        event("Ali", "2024-01-10 08:30", 8),
        event("Ali", "2024-01-10 17:30", 9),
        event("Ali", "2024-01-11 16:00", 10),
    ];
    let mut diag = Diagnostics::new();
    let records = aggregate(&events, &AggregationConfig::default(), &mut diag);

    let keys: Vec<(String, _)> = records
        .iter()
        .map(|r| (r.employee.to_string(), r.date))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("Ali".to_string(), d(2024, 1, 10)),
            ("Ali".to_string(), d(2024, 1, 11)),
            ("Zeynep".to_string(), d(2024, 1, 10)),
        ]
    );
    assert_eq!(records[0].net_duration, hm(9, 0));
    assert_eq!(records[1].net_duration, hm(8, 0));
    assert_eq!(records[2].net_duration, hm(8, 0));
}

#[test]
fn test_events_on_different_days_never_merge() {
    let events = vec![
        event("Ali", "2024-01-10 22:00", 5),
        event("Ali", "2024-01-11 06:00", 6),
    ];
    let mut diag = Diagnostics::new();
    let records = aggregate(&events, &AggregationConfig::default(), &mut diag);

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.incomplete));
}

#[test]
fn test_recorded_negative_duration_is_clamped() {
    let cfg = AggregationConfig {
        direction: DirectionMode::Recorded,
        gap_policy: GapPolicy::None,
    };
    let events = vec![
        directed("Ali", "2024-01-10 08:00", Direction::Exit, 5),
        directed("Ali", "2024-01-10 17:00", Direction::Entry, 6),
    ];
    let mut diag = Diagnostics::new();
    let records = aggregate(&events, &cfg, &mut diag);

    let r = &records[0];
    assert!(r.anomalous);
    assert!(!r.incomplete);
    assert_eq!(r.first_in, Some(t(17, 0)));
    assert_eq!(r.last_out, Some(t(8, 0)));
    assert_eq!(r.net_duration, Duration::zero());
    assert_eq!(diag.count(IssueKind::ClampedDuration), 1);
}

#[test]
fn test_recorded_without_exit_is_incomplete() {
    let cfg = AggregationConfig {
        direction: DirectionMode::Recorded,
        gap_policy: GapPolicy::None,
    };
    let events = vec![
        directed("Ali", "2024-01-10 08:00", Direction::Entry, 5),
        directed("Ali", "2024-01-10 13:00", Direction::Entry, 6),
    ];
    let mut diag = Diagnostics::new();
    let records = aggregate(&events, &cfg, &mut diag);

    assert!(records[0].incomplete);
    assert_eq!(records[0].last_out, None);
    assert_eq!(records[0].net_duration, Duration::zero());
}

#[test]
fn test_recorded_uses_first_entry_and_last_exit() {
    let cfg = AggregationConfig {
        direction: DirectionMode::Recorded,
        gap_policy: GapPolicy::None,
    };
    let events = vec![
        directed("Ali", "2024-01-10 07:50", Direction::Exit, 5),
        directed("Ali", "2024-01-10 08:05", Direction::Entry, 6),
        directed("Ali", "2024-01-10 16:55", Direction::Exit, 7),
        directed("Ali", "2024-01-10 17:10", Direction::Entry, 8),
    ];
    let mut diag = Diagnostics::new();
    let r = &aggregate(&events, &cfg, &mut diag)[0];

    assert_eq!(r.first_in, Some(t(8, 5)));
    assert_eq!(r.last_out, Some(t(16, 55)));
    assert_eq!(r.net_duration, hm(8, 50));
}

#[test]
fn test_gap_policy_excludes_breaks() {
    let events = vec![
        event("Ali", "2024-01-10 08:00", 5),
        event("Ali", "2024-01-10 12:00", 6),
        event("Ali", "2024-01-10 13:00", 7),
        event("Ali", "2024-01-10 17:00", 8),
    ];

    let mut diag = Diagnostics::new();
    let plain = aggregate(&events, &AggregationConfig::default(), &mut diag);
    assert_eq!(plain[0].net_duration, hm(9, 0));

    let cfg = AggregationConfig {
        direction: DirectionMode::Chronological,
        gap_policy: GapPolicy::ExcludeBreaks,
    };
    let without_breaks = aggregate(&events, &cfg, &mut diag);
    assert_eq!(without_breaks[0].net_duration, hm(8, 0));
    assert_eq!(without_breaks[0].first_in, Some(t(8, 0)));
    assert_eq!(without_breaks[0].last_out, Some(t(17, 0)));
}

#[test]
fn test_aggregation_is_deterministic() {
    let mut events = vec![
        event("B", "2024-02-01 09:00", 5),
        event("A", "2024-02-01 09:00", 6),
        event("B", "2024-02-01 18:00", 7),
        event("A", "2024-02-02 09:15", 8),
        event("A", "2024-02-01 17:45", 9),
    ];
    let mut diag = Diagnostics::new();
    let first = aggregate(&events, &AggregationConfig::default(), &mut diag);

    events.reverse();
    let second = aggregate(&events, &AggregationConfig::default(), &mut diag);

    assert_eq!(first, second);
}
