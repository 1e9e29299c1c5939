// File: crates/snake-core/src/series.rs
// Summary: Series and labelled-value models plus domain derivation over series sets.
// Notes:
// - Geometry functions only read these; callers own them.
// - Non-finite points are never validated by the path builders, so the
//   sanitizing helpers here are the place where they get filtered out.

use tracing::warn;

use crate::error::{Error, Result};
use crate::types::{Domain, Point};

/// Named, ordered sequence of domain-space points.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Series {
    pub name: String,
    pub points: Vec<Point>,
    pub color: Option<String>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), points: Vec::new(), color: None }
    }

    pub fn with_data(name: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { name: name.into(), points: data.into_iter().map(Point::from).collect(), color: None }
    }

    /// Series whose points are `values` at x = 0, 1, 2, ...
    pub fn from_values(name: impl Into<String>, values: &[f64]) -> Self {
        let points = values.iter().enumerate().map(|(i, &v)| Point::new(i as f64, v)).collect();
        Self { name: name.into(), points, color: None }
    }

    /// Strict constructor: fails on the first non-finite point.
    pub fn try_new(name: impl Into<String>, points: Vec<Point>) -> Result<Self> {
        if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(Error::NonFinite { index, x: p.x, y: p.y });
        }
        Ok(Self { name: name.into(), points, color: None })
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Copy of the series without non-finite points.
    pub fn sanitized(&self) -> Self {
        let points = sanitize_points(&self.points, &self.name);
        Self { name: self.name.clone(), points, color: self.color.clone() }
    }

    /// True when every y value is zero (placeholder ridges are built this way).
    pub fn is_flat_zero(&self) -> bool {
        self.points.iter().all(|p| p.y == 0.0)
    }
}

/// Drop points with `NaN`/infinite coordinates, logging how many were removed.
pub fn sanitize_points(points: &[Point], context: &str) -> Vec<Point> {
    let kept: Vec<Point> = points.iter().copied().filter(Point::is_finite).collect();
    let dropped = points.len() - kept.len();
    if dropped > 0 {
        warn!(series = context, dropped, "skipping non-finite points");
    }
    kept
}

/// A label with a single magnitude (bar, donut and spider inputs).
#[derive(Clone, Debug, PartialEq)]
pub struct Datum {
    pub label: String,
    pub value: f64,
    pub color: Option<String>,
}

impl Datum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value, color: None }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// X domain over all points of all series.
pub fn x_domain(series: &[Series]) -> Option<Domain> {
    Domain::from_values(series.iter().flat_map(|s| s.points.iter().map(|p| p.x)))
}

/// Y domain over all points of all series, widened to include 0.
pub fn y_domain(series: &[Series]) -> Option<Domain> {
    Domain::from_values(series.iter().flat_map(|s| s.points.iter().map(|p| p.y))).map(|d| d.include(0.0))
}
