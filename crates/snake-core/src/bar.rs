// File: crates/snake-core/src/bar.rs
// Summary: Bar layout: auto max with headroom and band placement.

use serde::Deserialize;

use crate::scale::BandScale;
use crate::series::Datum;
use crate::types::PixelRect;

/// Headroom applied to the largest value when no max is given.
pub const AUTO_MAX_HEADROOM: f64 = 1.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Placed bar in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// `value / max_value`, clamped to 0..=1.
    pub fraction: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarLayout {
    pub rect: PixelRect,
    pub orientation: Orientation,
    /// Fraction of each band left empty (0..1).
    pub padding: f64,
    pub max_value: Option<f64>,
}

impl BarLayout {
    pub fn new(rect: PixelRect) -> Self {
        Self { rect, orientation: Orientation::Vertical, padding: 0.2, max_value: None }
    }

    pub fn with_max(mut self, max_value: f64) -> Self {
        self.max_value = Some(max_value);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Explicit max, or the data max times `AUTO_MAX_HEADROOM` (1.0 when nothing is positive).
    pub fn resolve_max(&self, data: &[Datum]) -> f64 {
        if let Some(m) = self.max_value.filter(|m| m.is_finite() && *m > 0.0) {
            return m;
        }
        let peak = data.iter().map(|d| d.value).filter(|v| v.is_finite()).fold(0.0f64, f64::max);
        if peak > 0.0 { peak * AUTO_MAX_HEADROOM } else { 1.0 }
    }

    pub fn layout(&self, data: &[Datum]) -> Vec<BarRect> {
        let max = self.resolve_max(data);
        let r = &self.rect;
        let fraction = |v: f64| if v.is_finite() { (v / max).clamp(0.0, 1.0) } else { 0.0 };
        match self.orientation {
            Orientation::Vertical => {
                let bands = BandScale::new(data.len(), r.plot_left(), r.plot_right(), self.padding);
                data.iter()
                    .enumerate()
                    .filter_map(|(i, d)| {
                        let x = bands.band_start(i)?;
                        let f = fraction(d.value);
                        let height = f * r.plot_height();
                        Some(BarRect { index: i, x, y: r.plot_bottom() - height, width: bands.band_width(), height, fraction: f })
                    })
                    .collect()
            }
            Orientation::Horizontal => {
                let bands = BandScale::new(data.len(), r.plot_top(), r.plot_bottom(), self.padding);
                data.iter()
                    .enumerate()
                    .filter_map(|(i, d)| {
                        let y = bands.band_start(i)?;
                        let f = fraction(d.value);
                        Some(BarRect { index: i, x: r.plot_left(), y, width: f * r.plot_width(), height: bands.band_width(), fraction: f })
                    })
                    .collect()
            }
        }
    }
}
