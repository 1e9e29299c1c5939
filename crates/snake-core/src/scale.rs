// File: crates/snake-core/src/scale.rs
// Summary: Linear (domain -> pixel) and band scales used by every chart.

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Domain;

/// Common operations shared by the continuous and band scales.
pub trait ScaleTransform {
    fn map(&self, v: f64) -> f64;
    fn invert(&self, px: f64) -> f64;
}

/// Linear mapping of a data domain onto a pixel range.
///
/// The range may be inverted (`lo > hi`), which is how y axes are built:
/// data y grows upward while pixel y grows downward.
///
/// A degenerate domain (`min == max`) maps every value to the midpoint of the
/// range instead of producing `NaN`; use [`LinearScale::try_new`] to reject it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: Domain,
    pub lo: f64,
    pub hi: f64,
}

impl LinearScale {
    pub fn new(domain: Domain, lo: f64, hi: f64) -> Self {
        if domain.is_degenerate() {
            debug!(min = domain.min, "degenerate domain, values map to range midpoint");
        }
        Self { domain, lo, hi }
    }

    /// Like `new`, but refuses a degenerate domain.
    pub fn try_new(domain: Domain, lo: f64, hi: f64) -> Result<Self> {
        if domain.is_degenerate() {
            return Err(Error::DegenerateDomain { min: domain.min, max: domain.max });
        }
        Ok(Self { domain, lo, hi })
    }

    /// Fractional position of `v` within the domain (0 at min, 1 at max).
    #[inline]
    pub fn fraction(&self, v: f64) -> f64 {
        if self.domain.is_degenerate() {
            return 0.5;
        }
        // halved so a finite domain wider than f64::MAX still divides cleanly
        (v * 0.5 - self.domain.min * 0.5) / (self.domain.max * 0.5 - self.domain.min * 0.5)
    }

    pub fn range_min(&self) -> f64 { self.lo.min(self.hi) }
    pub fn range_max(&self) -> f64 { self.lo.max(self.hi) }
}

impl ScaleTransform for LinearScale {
    #[inline]
    fn map(&self, v: f64) -> f64 {
        let t = self.fraction(v);
        // lerp form keeps both endpoints exact
        self.lo * (1.0 - t) + self.hi * t
    }

    #[inline]
    fn invert(&self, px: f64) -> f64 {
        let r = self.hi - self.lo;
        if r == 0.0 {
            return self.domain.min;
        }
        let t = (px - self.lo) / r;
        self.domain.min * (1.0 - t) + self.domain.max * t
    }
}

/// Build a scale closure for `domain` onto `(lo, hi)`.
pub fn scale(domain: Domain, range: (f64, f64)) -> impl Fn(f64) -> f64 {
    let s = LinearScale::new(domain, range.0, range.1);
    move |v| s.map(v)
}

/// Discrete bands for categorical axes (bar charts).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandScale {
    count: usize,
    start: f64,
    step: f64,
    band_width: f64,
}

impl BandScale {
    /// `padding` is the fraction of each step left empty between bands (0..1).
    pub fn new(count: usize, range_min: f64, range_max: f64, padding: f64) -> Self {
        if count == 0 {
            return Self { count: 0, start: range_min, step: 0.0, band_width: 0.0 };
        }
        let padding = padding.clamp(0.0, 0.95);
        let step = (range_max - range_min).max(0.0) / count as f64;
        let band_width = step * (1.0 - padding);
        let start = range_min + (step - band_width) * 0.5;
        Self { count, start, step, band_width }
    }

    pub fn count(&self) -> usize { self.count }
    pub fn step(&self) -> f64 { self.step }
    pub fn band_width(&self) -> f64 { self.band_width }

    pub fn band_start(&self, idx: usize) -> Option<f64> {
        (idx < self.count).then(|| self.start + self.step * idx as f64)
    }

    pub fn center(&self, idx: usize) -> Option<f64> {
        self.band_start(idx).map(|x| x + self.band_width * 0.5)
    }

    /// Index of the band covering `px`, if any (gaps between bands return `None`).
    pub fn index_at(&self, px: f64) -> Option<usize> {
        if self.step <= 0.0 || px < self.start {
            return None;
        }
        let idx = ((px - self.start) / self.step).floor() as usize;
        let start = self.band_start(idx)?;
        (px <= start + self.band_width).then_some(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_exactly() {
        let s = LinearScale::new(Domain::new(0.1, 0.7), 13.0, 0.3);
        assert_eq!(s.map(0.1), 13.0);
        assert_eq!(s.map(0.7), 0.3);
    }

    #[test]
    fn degenerate_domain_maps_to_midpoint() {
        let s = LinearScale::new(Domain::new(5.0, 5.0), 0.0, 100.0);
        assert_eq!(s.map(5.0), 50.0);
        assert_eq!(s.map(-3.0), 50.0);
        assert!(LinearScale::try_new(Domain::new(5.0, 5.0), 0.0, 1.0).is_err());
    }

    #[test]
    fn invert_handles_descending_range() {
        let s = LinearScale::new(Domain::new(0.0, 100.0), 200.0, 100.0);
        assert!((s.invert(150.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn band_index_skips_padding() {
        let b = BandScale::new(4, 0.0, 400.0, 0.2);
        assert_eq!(b.band_width(), 80.0);
        assert_eq!(b.band_start(0), Some(10.0));
        assert_eq!(b.index_at(15.0), Some(0));
        assert_eq!(b.index_at(95.0), None);
        assert_eq!(b.index_at(115.0), Some(1));
        assert!(b.band_start(4).is_none());
    }
}
