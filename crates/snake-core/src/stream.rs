// File: crates/snake-core/src/stream.rs
// Summary: Stacked stream layout (zero, silhouette and expand offsets).

use serde::Deserialize;

use crate::path::{build_band_path, Curve};
use crate::scale::{LinearScale, ScaleTransform};
use crate::series::{x_domain, Series};
use crate::types::{Domain, PixelRect, Point};

/// Baseline of the bottom layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamOffset {
    /// Stacked area on y = 0.
    Zero,
    /// Centered around y = 0 (classic streamgraph).
    #[default]
    Silhouette,
    /// Each column normalized to 1.
    Expand,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StreamLayer {
    pub index: usize,
    pub name: String,
    /// Pixel-space edges, left to right.
    pub lower: Vec<Point>,
    pub upper: Vec<Point>,
    pub path: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StreamLayout {
    pub rect: PixelRect,
    pub offset: StreamOffset,
    pub curve: Curve,
}

impl StreamLayout {
    pub fn new(rect: PixelRect) -> Self {
        Self { rect, offset: StreamOffset::Silhouette, curve: Curve::Smooth }
    }

    pub fn with_offset(mut self, offset: StreamOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    /// Stack `layers` column by column (point index `j` of every layer forms column `j`).
    /// Missing, negative and non-finite values contribute zero thickness.
    pub fn layout(&self, layers: &[Series]) -> Vec<StreamLayer> {
        let columns = layers.iter().map(|s| s.points.len()).max().unwrap_or(0);
        if columns == 0 {
            return Vec::new();
        }
        let value = |s: &Series, j: usize| {
            s.points.get(j).map(|p| p.y).filter(|v| v.is_finite() && *v > 0.0).unwrap_or(0.0)
        };
        let xs: Vec<f64> = (0..columns)
            .map(|j| layers.iter().find_map(|s| s.points.get(j).map(|p| p.x)).unwrap_or(j as f64))
            .collect();
        let totals: Vec<f64> = (0..columns).map(|j| layers.iter().map(|s| value(s, j)).sum()).collect();
        let peak = totals.iter().copied().fold(0.0f64, f64::max);

        let (base, y_dom): (Vec<f64>, Domain) = match self.offset {
            StreamOffset::Zero => (vec![0.0; columns], Domain::new(0.0, peak.max(1e-12))),
            StreamOffset::Silhouette => (
                totals.iter().map(|t| -t * 0.5).collect(),
                Domain::new(-peak.max(1e-12) * 0.5, peak.max(1e-12) * 0.5),
            ),
            StreamOffset::Expand => (vec![0.0; columns], Domain::new(0.0, 1.0)),
        };
        let norm = |j: usize, v: f64| match self.offset {
            StreamOffset::Expand if totals[j] > 0.0 => v / totals[j],
            StreamOffset::Expand => 0.0,
            _ => v,
        };

        let r = &self.rect;
        let xd = x_domain(layers).unwrap_or(Domain::new(0.0, 1.0));
        let sx = LinearScale::new(xd, r.plot_left(), r.plot_right());
        let sy = LinearScale::new(y_dom, r.plot_bottom(), r.plot_top());

        let mut running = base;
        layers
            .iter()
            .enumerate()
            .map(|(index, s)| {
                let mut lower = Vec::with_capacity(columns);
                let mut upper = Vec::with_capacity(columns);
                for j in 0..columns {
                    let y0 = running[j];
                    let y1 = y0 + norm(j, value(s, j));
                    running[j] = y1;
                    lower.push(Point::new(sx.map(xs[j]), sy.map(y0)));
                    upper.push(Point::new(sx.map(xs[j]), sy.map(y1)));
                }
                let path = build_band_path(&upper, &lower, self.curve);
                StreamLayer { index, name: s.name.clone(), lower, upper, path }
            })
            .collect()
    }
}
