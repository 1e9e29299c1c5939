// File: crates/snake-core/src/axis.rs
// Summary: Axis model with label, domain, tick generation and caller-supplied formatting.

use std::sync::Arc;

use crate::grid::nice_ticks;
use crate::scale::{LinearScale, ScaleTransform};
use crate::types::Domain;

/// Value-to-label hook. Called per tick at render time; keep it pure and cheap.
pub type Formatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Two decimals at most, trailing zeros trimmed.
pub fn default_format(v: f64) -> String {
    let mut s = format!("{v:.2}");
    if s.contains('.') {
        while s.ends_with('0') { s.pop(); }
        if s.ends_with('.') { s.pop(); }
    }
    if s == "-0" { "0".to_string() } else { s }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Pixel position along the axis.
    pub position: f64,
    pub label: String,
}

#[derive(Clone)]
pub struct Axis {
    pub label: String,
    pub domain: Domain,
    pub tick_count: usize,
    pub formatter: Option<Formatter>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), domain: Domain::new(min, max), tick_count: 5, formatter: None }
    }

    pub fn with_ticks(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    pub fn with_formatter<F>(mut self, f: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(f));
        self
    }

    pub fn format(&self, v: f64) -> String {
        match &self.formatter {
            Some(f) => f(v),
            None => default_format(v),
        }
    }

    /// Rounded ticks inside the domain, positioned with `scale`.
    pub fn ticks(&self, scale: &LinearScale) -> Vec<Tick> {
        if self.tick_count == 0 {
            return Vec::new();
        }
        let values = if self.domain.is_degenerate() {
            vec![self.domain.min]
        } else {
            nice_ticks(self.domain.min, self.domain.max, self.tick_count)
        };
        values
            .into_iter()
            .map(|value| Tick { value, position: scale.map(value), label: self.format(value) })
            .collect()
    }
}

impl std::fmt::Debug for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Axis")
            .field("label", &self.label)
            .field("domain", &self.domain)
            .field("tick_count", &self.tick_count)
            .field("formatter", &self.formatter.as_ref().map(|_| "custom"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_formatter_is_used() {
        let axis = Axis::new("Price", 0.0, 100.0).with_formatter(|v| format!("${v:.0}"));
        let scale = LinearScale::new(axis.domain, 300.0, 0.0);
        let ticks = axis.ticks(&scale);
        assert_eq!(ticks.first().map(|t| t.label.as_str()), Some("$0"));
        assert_eq!(ticks.last().map(|t| t.position), Some(0.0));
    }

    #[test]
    fn default_format_trims() {
        assert_eq!(default_format(2.0), "2");
        assert_eq!(default_format(0.126), "0.13");
        assert_eq!(default_format(-0.001), "0");
    }
}
