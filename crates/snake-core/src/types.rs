// File: crates/snake-core/src/types.rs
// Summary: Shared types and constants (points, domains, viewport rects).

/// Default viewport width in pixels.
pub const WIDTH: f64 = 640.0;
/// Default viewport height in pixels.
pub const HEIGHT: f64 = 400.0;

/// Domain-space coordinate.
/// Contract: both fields are finite (see `Point::is_finite`).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Point at `radius` from `self` along `angle` (radians, screen orientation: y grows down).
    #[inline]
    pub fn polar(&self, angle: f64, radius: f64) -> Point {
        Point::new(self.x + radius * angle.cos(), self.y + radius * angle.sin())
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Numeric interval of input data along one axis.
/// Contract: `max > min` for a usable domain; `min == max` is degenerate and
/// handled by the scale (see `scale::LinearScale`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    /// Widen the domain so that it contains `v`.
    pub fn include(mut self, v: f64) -> Self {
        if v < self.min { self.min = v; }
        if v > self.max { self.max = v; }
        self
    }

    /// Min/max over finite values; `None` when no finite value is present.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if lo.is_finite() && hi.is_finite() { Some(Self::new(lo, hi)) } else { None }
    }
}

/// Plotting viewport: outer size plus margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl PixelRect {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height, margin_top: 0.0, margin_right: 0.0, margin_bottom: 0.0, margin_left: 0.0 }
    }

    pub const fn with_margins(mut self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.margin_top = top;
        self.margin_right = right;
        self.margin_bottom = bottom;
        self.margin_left = left;
        self
    }

    pub fn plot_left(&self) -> f64 { self.margin_left }
    pub fn plot_top(&self) -> f64 { self.margin_top }
    pub fn plot_right(&self) -> f64 { self.width - self.margin_right }
    pub fn plot_bottom(&self) -> f64 { self.height - self.margin_bottom }

    /// Plot area width (never negative).
    pub fn plot_width(&self) -> f64 {
        (self.width - self.margin_left - self.margin_right).max(0.0)
    }

    /// Plot area height (never negative).
    pub fn plot_height(&self) -> f64 {
        (self.height - self.margin_top - self.margin_bottom).max(0.0)
    }

    /// Center of the plot area.
    pub fn plot_center(&self) -> Point {
        Point::new(
            self.margin_left + self.plot_width() * 0.5,
            self.margin_top + self.plot_height() * 0.5,
        )
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.plot_left() && p.x <= self.plot_right() && p.y >= self.plot_top() && p.y <= self.plot_bottom()
    }
}

impl Default for PixelRect {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT).with_margins(20.0, 20.0, 40.0, 48.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_from_values_skips_non_finite() {
        let d = Domain::from_values([3.0, f64::NAN, -1.0, f64::INFINITY, 2.0]).unwrap();
        assert_eq!(d, Domain::new(-1.0, 3.0));
        assert!(Domain::from_values([f64::NAN]).is_none());
    }

    #[test]
    fn plot_area_subtracts_margins() {
        let r = PixelRect::new(200.0, 100.0).with_margins(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.plot_width(), 140.0);
        assert_eq!(r.plot_height(), 60.0);
        assert_eq!(r.plot_center(), Point::new(110.0, 40.0));
    }
}
