// File: crates/snake-core/src/report.rs
// Summary: Bounded error-report sink with explicit subscribers; passed by reference, never global.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::window::SlidingWindow;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    /// Component or chart that reported the entry.
    pub source: String,
    pub message: String,
}

/// Handle returned by `subscribe`; pass it back to `unsubscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&LogEntry)>;

pub struct ErrorLog {
    entries: SlidingWindow<LogEntry>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl ErrorLog {
    pub const DEFAULT_CAPACITY: usize = 100;

    pub fn new(capacity: usize) -> Self {
        Self { entries: SlidingWindow::new(capacity), subscribers: Vec::new(), next_id: 0 }
    }

    /// Store the entry, mirror it to `tracing`, and notify subscribers in registration order.
    pub fn record(&mut self, level: Level, source: impl Into<String>, message: impl Into<String>) {
        let entry = LogEntry { timestamp: Utc::now(), level, source: source.into(), message: message.into() };
        match level {
            Level::Info => tracing::info!(source = %entry.source, "{}", entry.message),
            Level::Warn => tracing::warn!(source = %entry.source, "{}", entry.message),
            Level::Error => tracing::error!(source = %entry.source, "{}", entry.message),
        }
        for (_, notify) in self.subscribers.iter_mut() {
            notify(&entry);
        }
        self.entries.push(entry);
    }

    pub fn error(&mut self, source: impl Into<String>, message: impl Into<String>) {
        self.record(Level::Error, source, message);
    }

    pub fn warn(&mut self, source: impl Into<String>, message: impl Into<String>) {
        self.record(Level::Warn, source, message);
    }

    pub fn info(&mut self, source: impl Into<String>, message: impl Into<String>) {
        self.record(Level::Info, source, message);
    }

    pub fn subscribe<F>(&mut self, f: F) -> SubscriptionId
    where
        F: FnMut(&LogEntry) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Returns whether the subscription existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize { self.subscribers.len() }

    /// Newest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&LogEntry> { self.entries.front() }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn count(&self, level: Level) -> usize {
        self.entries.iter().filter(|e| e.level == level).count()
    }

    pub fn clear(&mut self) { self.entries.clear(); }
}

impl Default for ErrorLog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl fmt::Debug for ErrorLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorLog")
            .field("entries", &self.entries.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
