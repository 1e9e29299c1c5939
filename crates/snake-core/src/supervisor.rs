// File: crates/snake-core/src/supervisor.rs
// Summary: Fault isolation around a render operation: Idle -> Faulted(count) -> (delay) -> Idle.
// Notes:
// - Errors and panics from the operation are both contained and reported to the ErrorLog.
// - After `max_retries` consecutive faults the supervisor stays Exhausted until `reset`.

use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::report::ErrorLog;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryState {
    Idle,
    Faulted { count: u32, retry_at: Instant },
    Exhausted { count: u32 },
}

/// Outcome of a supervised render.
#[derive(Clone, Debug, PartialEq)]
pub enum Rendered<T> {
    Content(T),
    /// Fallback representation while faulted; `reason` is the last failure.
    Fallback { reason: String, faults: u32 },
}

impl<T> Rendered<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Rendered::Fallback { .. })
    }

    pub fn content(self) -> Option<T> {
        match self {
            Rendered::Content(v) => Some(v),
            Rendered::Fallback { .. } => None,
        }
    }
}

#[derive(Debug)]
pub struct Supervisor {
    name: String,
    state: BoundaryState,
    reset_delay: Duration,
    max_retries: u32,
    faults: u32,
    last_error: Option<String>,
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}

impl Supervisor {
    pub const DEFAULT_RESET_DELAY: Duration = Duration::from_secs(5);
    pub const DEFAULT_MAX_RETRIES: u32 = 3;

    pub fn new(name: impl Into<String>, reset_delay: Duration, max_retries: u32) -> Self {
        Self {
            name: name.into(),
            state: BoundaryState::Idle,
            reset_delay,
            max_retries,
            faults: 0,
            last_error: None,
        }
    }

    pub fn with_defaults(name: impl Into<String>) -> Self {
        Self::new(name, Self::DEFAULT_RESET_DELAY, Self::DEFAULT_MAX_RETRIES)
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn state(&self) -> BoundaryState { self.state }
    pub fn faults(&self) -> u32 { self.faults }
    pub fn last_error(&self) -> Option<&str> { self.last_error.as_deref() }

    /// Leave `Faulted` once the retry delay has passed. Returns true on that transition.
    pub fn poll(&mut self, now: Instant) -> bool {
        if let BoundaryState::Faulted { count, retry_at } = self.state {
            if now >= retry_at {
                debug!(boundary = %self.name, count, "retrying after fault");
                self.state = BoundaryState::Idle;
                return true;
            }
        }
        false
    }

    /// Manual recovery, including from `Exhausted`.
    pub fn reset(&mut self) {
        self.state = BoundaryState::Idle;
        self.faults = 0;
        self.last_error = None;
    }

    /// Run `op` unless faulted. While faulted the op is not invoked and the fallback is returned.
    pub fn render<T, E, F>(&mut self, now: Instant, log: &mut ErrorLog, op: F) -> Rendered<T>
    where
        E: Display,
        F: FnOnce() -> Result<T, E>,
    {
        self.poll(now);
        if self.state != BoundaryState::Idle {
            return self.fallback();
        }
        let failure = match panic::catch_unwind(AssertUnwindSafe(op)) {
            Ok(Ok(value)) => {
                self.faults = 0;
                return Rendered::Content(value);
            }
            Ok(Err(e)) => e.to_string(),
            Err(payload) => format!("panicked: {}", panic_message(payload.as_ref())),
        };
        self.fault(now, log, failure);
        self.fallback()
    }

    fn fault(&mut self, now: Instant, log: &mut ErrorLog, reason: String) {
        self.faults += 1;
        log.error(self.name.clone(), reason.clone());
        self.last_error = Some(reason);
        self.state = if self.faults > self.max_retries {
            warn!(boundary = %self.name, faults = self.faults, "retry budget exhausted");
            BoundaryState::Exhausted { count: self.faults }
        } else {
            BoundaryState::Faulted { count: self.faults, retry_at: now + self.reset_delay }
        };
    }

    fn fallback<T>(&self) -> Rendered<T> {
        Rendered::Fallback {
            reason: self.last_error.clone().unwrap_or_default(),
            faults: self.faults,
        }
    }
}
