// File: crates/snake-core/src/path.rs
// Summary: SVG path-data writer and curve builders (linear, smooth, step, filled areas, bands).

use std::fmt::{self, Write};
use std::str::FromStr;

use serde::Deserialize;

use crate::types::Point;

/// Interpolation between consecutive points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Curve {
    #[default]
    Linear,
    /// Per-segment cubic approximation: control points sit at 1/3 and 2/3 of the
    /// horizontal span, each at its own endpoint's height. Not an interpolating spline.
    Smooth,
    /// Horizontal run to the next x, then vertical to the next y.
    Step,
}

impl FromStr for Curve {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(Curve::Linear),
            "smooth" => Ok(Curve::Smooth),
            "step" => Ok(Curve::Step),
            other => Err(format!("unknown curve `{other}` (expected linear, smooth or step)")),
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Curve::Linear => "linear",
            Curve::Smooth => "smooth",
            Curve::Step => "step",
        })
    }
}

/// Format a coordinate with at most three decimals, trailing zeros trimmed.
pub fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let mut s = format!("{v:.3}");
    if s.contains('.') {
        while s.ends_with('0') { s.pop(); }
        if s.ends_with('.') { s.pop(); }
    }
    if s == "-0" { s = "0".to_string(); }
    s
}

/// Incremental writer for SVG path data (`d` attribute).
#[derive(Clone, Debug, Default)]
pub struct PathData {
    buf: String,
    commands: usize,
}

impl PathData {
    pub fn new() -> Self { Self::default() }

    fn cmd(&mut self, c: char, coords: &[f64]) {
        if !self.buf.is_empty() { self.buf.push(' '); }
        self.buf.push(c);
        for (i, v) in coords.iter().enumerate() {
            if i > 0 { self.buf.push(' '); }
            let _ = write!(self.buf, "{}", fmt_num(*v));
        }
        self.commands += 1;
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.cmd('M', &[p.x, p.y]);
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.cmd('L', &[p.x, p.y]);
        self
    }

    pub fn cubic_to(&mut self, c1: Point, c2: Point, p: Point) -> &mut Self {
        self.cmd('C', &[c1.x, c1.y, c2.x, c2.y, p.x, p.y]);
        self
    }

    /// Circular arc of radius `r` ending at `p`.
    pub fn arc_to(&mut self, r: f64, large_arc: bool, sweep: bool, p: Point) -> &mut Self {
        let flag = |b: bool| if b { 1.0 } else { 0.0 };
        self.cmd('A', &[r, r, 0.0, flag(large_arc), flag(sweep), p.x, p.y]);
        self
    }

    pub fn close(&mut self) -> &mut Self {
        if !self.buf.is_empty() { self.buf.push(' '); }
        self.buf.push('Z');
        self.commands += 1;
        self
    }

    pub fn is_empty(&self) -> bool { self.buf.is_empty() }

    /// Number of commands written so far (including `Z`).
    pub fn command_count(&self) -> usize { self.commands }

    pub fn as_str(&self) -> &str { &self.buf }

    pub fn finish(self) -> String { self.buf }
}

/// Append the segments joining `points` (the first point must already be current).
fn append_segments(d: &mut PathData, points: &[Point], curve: Curve) {
    for pair in points.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        match curve {
            Curve::Linear => { d.line_to(p1); }
            Curve::Step => {
                d.line_to(Point::new(p1.x, p0.y));
                d.line_to(p1);
            }
            Curve::Smooth => {
                let dx = (p1.x - p0.x) / 3.0;
                d.cubic_to(Point::new(p0.x + dx, p0.y), Point::new(p1.x - dx, p1.y), p1);
            }
        }
    }
}

/// Path through already-scaled points. Empty input gives `""`, a single point a bare `M`.
pub fn build_path(points: &[Point], curve: Curve) -> String {
    let Some(&first) = points.first() else { return String::new() };
    let mut d = PathData::new();
    d.move_to(first);
    append_segments(&mut d, points, curve);
    d.finish()
}

/// Closed area between the curve and the horizontal line `baseline_y`.
pub fn build_fill_path(points: &[Point], curve: Curve, baseline_y: f64) -> String {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else { return String::new() };
    let mut d = PathData::new();
    d.move_to(first);
    append_segments(&mut d, points, curve);
    d.line_to(Point::new(last.x, baseline_y));
    d.line_to(Point::new(first.x, baseline_y));
    d.close();
    d.finish()
}

/// Closed band between `upper` (left to right) and `lower` (drawn back right to left).
/// Both edges share the same curve; they are expected to have matching x values.
pub fn build_band_path(upper: &[Point], lower: &[Point], curve: Curve) -> String {
    let Some(&first) = upper.first() else { return String::new() };
    let mut d = PathData::new();
    d.move_to(first);
    append_segments(&mut d, upper, curve);
    let back: Vec<Point> = lower.iter().rev().copied().collect();
    if let Some(&start) = back.first() {
        d.line_to(start);
        append_segments(&mut d, &back, curve);
    }
    d.close();
    d.finish()
}

/// Closed polygon through `points` that repeats the first vertex before `Z`.
pub fn build_polygon(points: &[Point]) -> String {
    let Some(&first) = points.first() else { return String::new() };
    let mut d = PathData::new();
    d.move_to(first);
    for &p in &points[1..] {
        d.line_to(p);
    }
    d.line_to(first);
    d.close();
    d.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(v: &[(f64, f64)]) -> Vec<Point> {
        v.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn fmt_num_trims() {
        assert_eq!(fmt_num(10.0), "10");
        assert_eq!(fmt_num(1.0 / 3.0), "0.333");
        assert_eq!(fmt_num(-0.0001), "0");
        assert_eq!(fmt_num(2.5), "2.5");
    }

    #[test]
    fn linear_path() {
        let d = build_path(&pts(&[(0.0, 10.0), (5.0, 20.0), (10.0, 0.0)]), Curve::Linear);
        assert_eq!(d, "M0 10 L5 20 L10 0");
    }

    #[test]
    fn step_path() {
        let d = build_path(&pts(&[(0.0, 10.0), (5.0, 20.0)]), Curve::Step);
        assert_eq!(d, "M0 10 L5 10 L5 20");
    }

    #[test]
    fn smooth_path_control_points() {
        let d = build_path(&pts(&[(0.0, 0.0), (30.0, 60.0)]), Curve::Smooth);
        assert_eq!(d, "M0 0 C10 0 20 60 30 60");
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(build_path(&[], Curve::Step), "");
        assert_eq!(build_path(&pts(&[(1.0, 2.0)]), Curve::Smooth), "M1 2");
        assert_eq!(build_fill_path(&[], Curve::Linear, 5.0), "");
    }

    #[test]
    fn fill_path_closes_on_baseline() {
        let d = build_fill_path(&pts(&[(0.0, 10.0), (10.0, 5.0)]), Curve::Linear, 50.0);
        assert_eq!(d, "M0 10 L10 5 L10 50 L0 50 Z");
    }

    #[test]
    fn band_path_walks_back_along_lower_edge() {
        let upper = pts(&[(0.0, 0.0), (10.0, 2.0)]);
        let lower = pts(&[(0.0, 5.0), (10.0, 6.0)]);
        assert_eq!(build_band_path(&upper, &lower, Curve::Linear), "M0 0 L10 2 L10 6 L0 5 Z");
    }

    #[test]
    fn curve_parses_case_insensitively() {
        assert_eq!("Smooth".parse::<Curve>().unwrap(), Curve::Smooth);
        assert!("bezier".parse::<Curve>().is_err());
    }
}
