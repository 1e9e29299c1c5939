// File: crates/snake-core/tests/live_stream.rs
// Purpose: Scrolling ridgeline behavior: placeholders, timed pushes, and teardown.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use snake_core::chart::{ridgeline_chart, ChartOptions};
use snake_core::ridgeline::{zero_series, Ridge};
use snake_core::{LiveWindow, Series, StreamState};

const TICK: Duration = Duration::from_millis(1000);

fn counting_window(calls: &Rc<Cell<usize>>) -> LiveWindow<Series> {
    let mut w = LiveWindow::new(4, TICK, zero_series("waiting", 8));
    let calls = Rc::clone(calls);
    w.mount(Instant::now(), move || {
        calls.set(calls.get() + 1);
        Series::from_values(format!("frame {}", calls.get()), &[0.0, 1.0, 3.0, 2.0, 0.5, 0.0, 0.2, 0.0])
    });
    w
}

#[test]
fn ticks_push_one_frame_per_interval() {
    let calls = Rc::new(Cell::new(0));
    let t0 = Instant::now();
    let mut w = LiveWindow::new(4, TICK, zero_series("waiting", 8));
    let sink = Rc::clone(&calls);
    w.mount(t0, move || {
        sink.set(sink.get() + 1);
        Series::from_values("f", &[1.0, 2.0])
    });
    assert_eq!(calls.get(), 1);
    assert_eq!(w.tick(t0 + Duration::from_millis(999)), 0);
    assert_eq!(w.tick(t0 + Duration::from_millis(1000)), 1);
    assert_eq!(w.tick(t0 + Duration::from_millis(3500)), 2);
    assert_eq!(calls.get(), 4);
    assert_eq!(w.len(), 4);
    assert_eq!(w.live_count(), 4);
}

#[test]
fn generator_is_never_called_after_unmount() {
    let calls = Rc::new(Cell::new(0));
    let mut w = counting_window(&calls);
    assert_eq!(calls.get(), 1);
    w.unmount();
    assert_eq!(w.state(), StreamState::Stopped);
    assert_eq!(w.next_deadline(), None);
    // the generator closure held the only other clone
    assert_eq!(Rc::strong_count(&calls), 1);
    let later = Instant::now() + Duration::from_secs(60);
    assert_eq!(w.tick(later), 0);
    assert_eq!(calls.get(), 1);
}

#[test]
fn window_feeds_ridgeline_with_placeholders() {
    let calls = Rc::new(Cell::new(0));
    let w = counting_window(&calls);
    let ridges: Vec<Ridge> = w.slots().map(Ridge::from).collect();
    assert_eq!(ridges.len(), 4);
    assert!(!ridges[0].placeholder);
    assert!(ridges[1..].iter().all(|r| r.placeholder && r.series.is_flat_zero()));

    let scene = ridgeline_chart(&ridges, &ChartOptions::default());
    // live ridge: fill + line; each placeholder: dashed line
    assert_eq!(scene.path_count(), 2 + 3);
}
