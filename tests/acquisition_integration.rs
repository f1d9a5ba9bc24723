//! Integration tests for the acquisition loop
//!
//! Drives the tick step and the app with a scripted line source, covering
//! the accept/reject scenarios and the history cap.

mod common;

use common::mock_helpers::ScriptedSource;
use distance_graph::backend::tick;
use distance_graph::frontend::ChartSnapshot;
use distance_graph::types::{ConnectionStatus, RejectReason};
use distance_graph::{AppConfig, DistanceGraphApp, History, TickOutcome, MAX_HISTORY_LEN};
use std::io;

fn app_with(source: &ScriptedSource) -> DistanceGraphApp {
    DistanceGraphApp::new(Box::new(source.clone()), "COM6", &AppConfig::default())
}

#[test]
fn test_accepted_line_updates_chart() {
    let source = ScriptedSource::new().with_lines(["Distance: 12.5"]);
    let mut app = app_with(&source);

    assert_eq!(app.run_tick(), Some(TickOutcome::Appended(-12.5)));
    assert_eq!(app.history().iter().collect::<Vec<_>>(), vec![-12.5]);

    let snapshot = app.snapshot().expect("chart should have been redrawn");
    assert_eq!(snapshot.points, vec![[0.0, -12.5]]);
    assert_eq!(snapshot.y_bounds, (-22.5, 0.0));
}

#[test]
fn test_negative_reading_updates_chart() {
    let source = ScriptedSource::new().with_lines(["Distance: -3"]);
    let mut app = app_with(&source);

    assert_eq!(app.run_tick(), Some(TickOutcome::Appended(3.0)));

    let snapshot = app.snapshot().expect("chart should have been redrawn");
    assert_eq!(snapshot.points, vec![[0.0, 3.0]]);
    assert_eq!(snapshot.y_bounds, (-7.0, 0.0));
    assert_eq!(snapshot.plot_y_range(), (-7.0, 0.0));
}

#[test]
fn test_large_negative_reading_orders_plot_range() {
    let source = ScriptedSource::new().with_lines(["Distance: -50"]);
    let mut app = app_with(&source);

    assert_eq!(app.run_tick(), Some(TickOutcome::Appended(50.0)));

    let snapshot = app.snapshot().expect("chart should have been redrawn");
    assert_eq!(snapshot.points, vec![[0.0, 50.0]]);
    assert_eq!(snapshot.y_bounds, (40.0, 0.0));

    let (lo, hi) = snapshot.plot_y_range();
    assert_eq!((lo, hi), (0.0, 40.0));
    assert!(hi > lo);
}

#[test]
fn test_other_label_is_ignored() {
    let source = ScriptedSource::new().with_lines(["Temp: 20"]);
    let mut app = app_with(&source);

    assert_eq!(
        app.run_tick(),
        Some(TickOutcome::Ignored(RejectReason::MissingPrefix))
    );
    assert!(app.history().is_empty());
    assert!(app.snapshot().is_none());
}

#[test]
fn test_non_numeric_value_is_ignored() {
    let source = ScriptedSource::new().with_lines(["Distance: abc"]);
    let mut app = app_with(&source);

    assert_eq!(
        app.run_tick(),
        Some(TickOutcome::Ignored(RejectReason::InvalidNumber))
    );
    assert!(app.history().is_empty());
    assert!(app.snapshot().is_none());
}

#[test]
fn test_history_capped_after_1001_lines() {
    let lines: Vec<String> = (1..=1001).map(|i| format!("Distance: {}", i)).collect();
    let mut source = ScriptedSource::new().with_lines(&lines);
    let mut history = History::new();

    for _ in 0..lines.len() {
        let (outcome, _) = tick(&mut source, &mut history).unwrap();
        assert!(outcome.is_appended());
    }

    assert_eq!(history.len(), MAX_HISTORY_LEN);
    assert_eq!(history.first(), Some(-2.0));
    assert_eq!(history.last(), Some(-1001.0));
}

#[test]
fn test_mixed_stream() {
    let source = ScriptedSource::new().with_lines([
        "booting...",
        "Distance: 10",
        "Distance: 40.25",
        "Distance: oops",
        "",
        "Distance: 5",
    ]);
    source.push_bytes(b"Distance: 7\xff\xfe\r\n".to_vec());
    let mut app = app_with(&source);

    for _ in 0..7 {
        app.run_tick();
    }

    assert_eq!(
        app.history().iter().collect::<Vec<_>>(),
        vec![-10.0, -40.25, -5.0, -7.0]
    );
    let stats = app.stats();
    assert_eq!(stats.ticks, 7);
    assert_eq!(stats.accepted, 4);
    assert_eq!(stats.rejected, 2);
    assert_eq!(stats.last_value, Some(-7.0));

    let snapshot = app.snapshot().unwrap();
    common::assert_float_eq(snapshot.y_bounds.0, -50.25, 1e-9);
    assert_eq!(snapshot.y_bounds.1, 0.0);
}

#[test]
fn test_timeouts_do_not_redraw() {
    let source = ScriptedSource::new().with_lines(["Distance: 3"]);
    let mut app = app_with(&source);

    app.run_tick();
    let before = app.snapshot().cloned();

    // Script exhausted: every further read times out with no data
    for _ in 0..5 {
        assert_eq!(
            app.run_tick(),
            Some(TickOutcome::Ignored(RejectReason::Empty))
        );
    }

    assert_eq!(app.snapshot().cloned(), before);
    assert_eq!(app.stats().rejected, 0);
    assert_eq!(source.reads(), 6);
}

#[test]
fn test_read_failure_freezes_chart() {
    let source = ScriptedSource::new().with_lines(["Distance: 8"]);
    source.push_error(io::ErrorKind::BrokenPipe);
    source.push_bytes(b"Distance: 9\n".to_vec());
    let mut app = app_with(&source);

    app.run_tick();
    assert_eq!(app.status(), ConnectionStatus::Running);

    assert_eq!(app.run_tick(), None);
    assert_eq!(app.status(), ConnectionStatus::Stalled);
    assert!(app.last_error().is_some());

    // Stalled: the remaining line is never read
    assert_eq!(app.run_tick(), None);
    assert_eq!(source.remaining(), 1);
    assert_eq!(
        app.snapshot(),
        ChartSnapshot::capture(app.history()).as_ref()
    );
    assert_eq!(app.history().len(), 1);
}
