// File: crates/snake-core/src/ridgeline.rs
// Summary: Ridgeline layout: stacked, overlapping ridges sharing one amplitude scale.

use crate::live::Slot;
use crate::path::{build_fill_path, build_path, Curve};
use crate::scale::{LinearScale, ScaleTransform};
use crate::series::{x_domain, Series};
use crate::types::{Domain, PixelRect, Point};

/// Input ridge; placeholders render as a dashed baseline without fill.
#[derive(Clone, Debug, PartialEq)]
pub struct Ridge {
    pub series: Series,
    pub placeholder: bool,
}

impl Ridge {
    pub fn live(series: Series) -> Self {
        Self { series, placeholder: false }
    }

    pub fn placeholder(series: Series) -> Self {
        Self { series, placeholder: true }
    }
}

impl From<&Slot<Series>> for Ridge {
    fn from(slot: &Slot<Series>) -> Self {
        Self { series: slot.value().clone(), placeholder: slot.is_placeholder() }
    }
}

/// Placeholder ridge of `len` zero values.
pub fn zero_series(name: impl Into<String>, len: usize) -> Series {
    Series::from_values(name, &vec![0.0; len])
}

#[derive(Clone, Debug, PartialEq)]
pub struct RidgeGeometry {
    pub index: usize,
    pub baseline_y: f64,
    pub line: String,
    pub fill: Option<String>,
    pub placeholder: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RidgelineLayout {
    pub rect: PixelRect,
    /// How far a ridge may rise into the band above, as a fraction of the band height.
    pub overlap: f64,
    pub curve: Curve,
}

impl RidgelineLayout {
    pub fn new(rect: PixelRect) -> Self {
        Self { rect, overlap: 0.5, curve: Curve::Smooth }
    }

    pub fn with_overlap(mut self, overlap: f64) -> Self {
        self.overlap = overlap.max(0.0);
        self
    }

    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    pub fn band_height(&self, n: usize) -> f64 {
        if n == 0 { 0.0 } else { self.rect.plot_height() / n as f64 }
    }

    /// Ridges top to bottom, in input order.
    pub fn layout(&self, ridges: &[Ridge]) -> Vec<RidgeGeometry> {
        let n = ridges.len();
        if n == 0 {
            return Vec::new();
        }
        let r = &self.rect;
        let all: Vec<Series> = ridges.iter().map(|d| d.series.clone()).collect();
        let xd = x_domain(&all).unwrap_or(Domain::new(0.0, 1.0));
        let peak = all
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.y))
            .filter(|v| v.is_finite())
            .fold(0.0f64, f64::max);
        let peak = if peak > 0.0 { peak } else { 1.0 };
        let sx = LinearScale::new(xd, r.plot_left(), r.plot_right());
        let band = self.band_height(n);
        let amplitude = band * (1.0 + self.overlap);

        ridges
            .iter()
            .enumerate()
            .map(|(index, ridge)| {
                let baseline_y = r.plot_top() + band * (index + 1) as f64;
                if ridge.placeholder {
                    let line = build_path(
                        &[Point::new(r.plot_left(), baseline_y), Point::new(r.plot_right(), baseline_y)],
                        Curve::Linear,
                    );
                    return RidgeGeometry { index, baseline_y, line, fill: None, placeholder: true };
                }
                let pts: Vec<Point> = ridge
                    .series
                    .points
                    .iter()
                    .filter(|p| p.is_finite())
                    .map(|p| Point::new(sx.map(p.x), baseline_y - p.y.max(0.0) / peak * amplitude))
                    .collect();
                RidgeGeometry {
                    index,
                    baseline_y,
                    line: build_path(&pts, self.curve),
                    fill: Some(build_fill_path(&pts, self.curve, baseline_y)),
                    placeholder: false,
                }
            })
            .collect()
    }
}
