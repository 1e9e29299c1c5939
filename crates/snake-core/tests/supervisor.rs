// File: crates/snake-core/tests/supervisor.rs
// Purpose: Fault isolation: errors and panics are contained, reported, and retried after the delay.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use snake_core::chart::{donut_chart, ChartOptions};
use snake_core::{BoundaryState, Datum, ErrorLog, Level, Rendered, Supervisor};

const DELAY: Duration = Duration::from_secs(5);

#[test]
fn error_faults_then_recovers_after_delay() {
    let t0 = Instant::now();
    let mut log = ErrorLog::default();
    let mut sup = Supervisor::new("DonutGraph", DELAY, 3);

    let out: Rendered<u32> = sup.render(t0, &mut log, || Err("bad slice data"));
    assert_eq!(out, Rendered::Fallback { reason: "bad slice data".into(), faults: 1 });
    assert!(matches!(sup.state(), BoundaryState::Faulted { count: 1, .. }));
    assert_eq!(log.count(Level::Error), 1);
    assert_eq!(log.latest().map(|e| e.source.as_str()), Some("DonutGraph"));

    // still inside the delay: op must not run
    let mut ran = false;
    let out = sup.render(t0 + Duration::from_secs(1), &mut log, || {
        ran = true;
        Ok::<_, String>(1)
    });
    assert!(out.is_fallback());
    assert!(!ran);

    let out = sup.render(t0 + DELAY, &mut log, || Ok::<_, String>(7));
    assert_eq!(out.content(), Some(7));
    assert_eq!(sup.state(), BoundaryState::Idle);
    assert_eq!(sup.faults(), 0);
}

#[test]
fn panics_are_contained() {
    let mut log = ErrorLog::default();
    let mut sup = Supervisor::with_defaults("RadialGraph");
    let out: Rendered<()> = sup.render(Instant::now(), &mut log, || -> Result<(), String> { panic!("index out of range") });
    match out {
        Rendered::Fallback { reason, faults } => {
            assert!(reason.contains("index out of range"));
            assert_eq!(faults, 1);
        }
        Rendered::Content(_) => panic!("expected fallback"),
    }
    assert_eq!(sup.last_error().map(|e| e.contains("panicked")), Some(true));
}

#[test]
fn consecutive_faults_exhaust_until_reset() {
    let mut t = Instant::now();
    let mut log = ErrorLog::default();
    let mut sup = Supervisor::new("Hexbin", DELAY, 2);
    for _ in 0..3 {
        let _ = sup.render(t, &mut log, || Err::<(), _>("still broken"));
        t += DELAY;
    }
    assert_eq!(sup.state(), BoundaryState::Exhausted { count: 3 });
    assert!(!sup.poll(t + DELAY * 10));
    assert!(sup.render(t, &mut log, || Ok::<_, String>(())).is_fallback());

    sup.reset();
    assert_eq!(sup.state(), BoundaryState::Idle);
    assert!(!sup.render(t, &mut log, || Ok::<_, String>(())).is_fallback());
    assert_eq!(log.count(Level::Error), 3);
}

#[test]
fn subscribers_observe_faults() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut log = ErrorLog::default();
    let sink = Rc::clone(&seen);
    log.subscribe(move |e| sink.borrow_mut().push((e.source.clone(), e.level)));

    let mut sup = Supervisor::with_defaults("DonutGraph");
    let opts = ChartOptions::default();
    let ok = sup.render(Instant::now(), &mut log, || {
        Ok::<_, String>(donut_chart(&[Datum::new("a", 2.0), Datum::new("b", 1.0)], &opts))
    });
    assert_eq!(ok.content().map(|s| s.regions.len()), Some(2));
    assert!(seen.borrow().is_empty());

    let _ = sup.render(Instant::now(), &mut log, || Err::<(), _>("no data"));
    assert_eq!(*seen.borrow(), vec![("DonutGraph".to_string(), Level::Error)]);
}
