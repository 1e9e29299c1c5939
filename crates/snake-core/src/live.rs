// File: crates/snake-core/src/live.rs
// Summary: Timer-driven live window (scrolling ridgeline feed): Idle -> Streaming -> Stopped.
// Notes:
// - The timer is polled: callers pass `now` from their own event loop, so pushes are
//   serialized by construction and nothing fires outside `tick`.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::window::SlidingWindow;

const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamState {
    /// Created, generator not attached yet.
    Idle,
    /// Timer armed.
    Streaming,
    /// Timer cleared; no further pushes.
    Stopped,
}

/// Buffer entry: a placeholder from pre-fill, or data produced by the generator.
#[derive(Clone, Debug, PartialEq)]
pub enum Slot<T> {
    Placeholder(T),
    Live(T),
}

impl<T> Slot<T> {
    pub fn value(&self) -> &T {
        match self {
            Slot::Placeholder(v) | Slot::Live(v) => v,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Slot::Placeholder(_))
    }
}

pub struct LiveWindow<T> {
    window: SlidingWindow<Slot<T>>,
    interval: Duration,
    state: StreamState,
    next_due: Option<Instant>,
    generate: Option<Box<dyn FnMut() -> T>>,
    pushes: u64,
}

impl<T: Clone> LiveWindow<T> {
    /// Window of `capacity` placeholder slots, each a copy of `placeholder`.
    pub fn new(capacity: usize, interval: Duration, placeholder: T) -> Self {
        Self {
            window: SlidingWindow::filled(capacity, || Slot::Placeholder(placeholder.clone())),
            interval: interval.max(MIN_INTERVAL),
            state: StreamState::Idle,
            next_due: None,
            generate: None,
            pushes: 0,
        }
    }
}

impl<T> LiveWindow<T> {
    /// Attach the generator, push its first result immediately, and arm the timer.
    /// Only valid from `Idle`; later calls are ignored.
    pub fn mount<F>(&mut self, now: Instant, generate: F)
    where
        F: FnMut() -> T + 'static,
    {
        if self.state != StreamState::Idle {
            warn!(state = ?self.state, "live window already mounted; ignoring");
            return;
        }
        self.generate = Some(Box::new(generate));
        self.state = StreamState::Streaming;
        self.push_generated();
        self.next_due = Some(now + self.interval);
    }

    /// Fire every interval that elapsed by `now`. Returns the number of pushes.
    ///
    /// After a long stall at most `capacity` pushes happen (older ones would be
    /// evicted anyway) and the schedule is re-anchored on `now`.
    pub fn tick(&mut self, now: Instant) -> usize {
        if self.state != StreamState::Streaming {
            return 0;
        }
        let mut fired = 0;
        while let Some(due) = self.next_due {
            if due > now {
                break;
            }
            if fired == self.window.capacity() {
                debug!(fired, "live window fell behind; re-anchoring timer");
                self.next_due = Some(now + self.interval);
                break;
            }
            self.push_generated();
            fired += 1;
            self.next_due = Some(due + self.interval);
        }
        fired
    }

    /// Clear the timer and drop the generator.
    pub fn unmount(&mut self) {
        if self.state == StreamState::Stopped {
            return;
        }
        self.next_due = None;
        self.generate = None;
        self.state = StreamState::Stopped;
        debug!(pushes = self.pushes, "live window stopped");
    }

    fn push_generated(&mut self) {
        if let Some(generate) = self.generate.as_mut() {
            let item = generate();
            self.window.push(Slot::Live(item));
            self.pushes += 1;
        }
    }

    pub fn state(&self) -> StreamState { self.state }
    pub fn interval(&self) -> Duration { self.interval }
    pub fn next_deadline(&self) -> Option<Instant> { self.next_due }
    pub fn total_pushes(&self) -> u64 { self.pushes }
    pub fn window(&self) -> &SlidingWindow<Slot<T>> { &self.window }
    pub fn len(&self) -> usize { self.window.len() }
    pub fn is_empty(&self) -> bool { self.window.is_empty() }

    /// Newest to oldest.
    pub fn slots(&self) -> impl Iterator<Item = &Slot<T>> {
        self.window.iter()
    }

    pub fn live_count(&self) -> usize {
        self.window.iter().filter(|s| !s.is_placeholder()).count()
    }
}

impl<T> fmt::Debug for LiveWindow<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveWindow")
            .field("state", &self.state)
            .field("len", &self.window.len())
            .field("interval", &self.interval)
            .field("next_due", &self.next_due)
            .field("pushes", &self.pushes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_pushes_once_synchronously() {
        let t0 = Instant::now();
        let mut n = 0;
        let mut w = LiveWindow::new(3, Duration::from_millis(100), 0);
        assert_eq!(w.state(), StreamState::Idle);
        w.mount(t0, move || { n += 1; n });
        assert_eq!(w.state(), StreamState::Streaming);
        assert_eq!(w.len(), 3);
        assert_eq!(w.slots().next(), Some(&Slot::Live(1)));
        assert_eq!(w.live_count(), 1);
    }

    #[test]
    fn stall_is_capped_at_capacity() {
        let t0 = Instant::now();
        let mut w = LiveWindow::new(2, Duration::from_millis(10), 0u32);
        w.mount(t0, || 7);
        assert_eq!(w.tick(t0 + Duration::from_secs(5)), 2);
        assert_eq!(w.next_deadline(), Some(t0 + Duration::from_secs(5) + Duration::from_millis(10)));
    }
}
