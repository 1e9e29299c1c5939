// File: crates/snake-core/src/donut.rs
// Summary: Donut/pie layout: contiguous angular spans from 12 o'clock and annular-sector paths.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use tracing::debug;

use crate::path::PathData;
use crate::series::Datum;
use crate::types::Point;

/// Angle at which the first segment starts (12 o'clock).
pub const START_ANGLE: f64 = -FRAC_PI_2;

const FULL_TURN_EPS: f64 = 1e-9;

#[derive(Clone, Debug, PartialEq)]
pub struct DonutSegment {
    /// Position of the slice in the input.
    pub index: usize,
    /// Un-gapped span; consecutive segments share endpoints.
    pub start_angle: f64,
    pub end_angle: f64,
    pub mid_angle: f64,
    /// Annular sector, shrunk by the configured gap. Empty when nothing is left to draw.
    pub path: String,
}

impl DonutSegment {
    pub fn span(&self) -> f64 { self.end_angle - self.start_angle }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DonutLayout {
    pub center: Point,
    pub outer_radius: f64,
    /// Inner cutout as a fraction of the outer radius; 0 draws a pie.
    pub inner_radius_fraction: f64,
    /// Gap in pixels between neighbouring segments, measured at the mid radius.
    pub segment_gap: f64,
}

impl DonutLayout {
    pub fn new(center: Point, outer_radius: f64, inner_radius_fraction: f64) -> Self {
        Self { center, outer_radius, inner_radius_fraction: inner_radius_fraction.clamp(0.0, 1.0), segment_gap: 0.0 }
    }

    pub fn with_gap(mut self, gap: f64) -> Self {
        self.segment_gap = gap.max(0.0);
        self
    }

    pub fn inner_radius(&self) -> f64 {
        self.outer_radius * self.inner_radius_fraction
    }

    pub fn mid_radius(&self) -> f64 {
        (self.outer_radius + self.inner_radius()) * 0.5
    }

    /// Angular width removed from each segment to leave `segment_gap` pixels between neighbours.
    pub fn gap_angle(&self) -> f64 {
        let mid = self.mid_radius();
        if self.segment_gap <= 0.0 || mid <= 0.0 { 0.0 } else { self.segment_gap / mid }
    }

    /// Lay out `slices` in input order. Negative or non-finite values count as zero;
    /// a non-positive total yields no segments.
    pub fn layout(&self, slices: &[Datum]) -> Vec<DonutSegment> {
        let weight = |d: &Datum| if d.value.is_finite() && d.value > 0.0 { d.value } else { 0.0 };
        let total: f64 = slices.iter().map(weight).sum();
        if total <= 0.0 {
            debug!(slices = slices.len(), "donut total is not positive; nothing to draw");
            return Vec::new();
        }
        let gap = self.gap_angle();
        let mut offset = START_ANGLE;
        let mut acc = 0.0;
        slices
            .iter()
            .enumerate()
            .map(|(index, d)| {
                acc += weight(d);
                let start_angle = offset;
                // the slice that completes the total closes the ring exactly
                let end_angle = if acc >= total { START_ANGLE + TAU } else { START_ANGLE + TAU * acc / total };
                offset = end_angle;
                let path = self.sector_path(start_angle + gap * 0.5, end_angle - gap * 0.5);
                DonutSegment { index, start_angle, end_angle, mid_angle: (start_angle + end_angle) * 0.5, path }
            })
            .collect()
    }

    /// Annular sector between two angles at the layout radii.
    pub fn sector_path(&self, start: f64, end: f64) -> String {
        let span = end - start;
        if !(span > 0.0) || self.outer_radius <= 0.0 {
            return String::new();
        }
        let (c, big, small) = (self.center, self.outer_radius, self.inner_radius());
        let mut d = PathData::new();
        if span >= TAU - FULL_TURN_EPS {
            // an arc cannot end where it starts; draw full rings as two halves
            let half = start + PI;
            d.move_to(c.polar(start, big));
            d.arc_to(big, false, true, c.polar(half, big));
            d.arc_to(big, false, true, c.polar(start, big));
            if small > 0.0 {
                d.move_to(c.polar(start, small));
                d.arc_to(small, false, false, c.polar(half, small));
                d.arc_to(small, false, false, c.polar(start, small));
            }
            d.close();
            return d.finish();
        }
        let large = span > PI;
        d.move_to(c.polar(start, big));
        d.arc_to(big, large, true, c.polar(end, big));
        if small > 0.0 {
            d.line_to(c.polar(end, small));
            d.arc_to(small, large, false, c.polar(start, small));
        } else {
            d.line_to(c);
        }
        d.close();
        d.finish()
    }
}

/// One-shot donut layout.
pub fn layout_donut(slices: &[Datum], center: Point, outer_radius: f64, inner_radius_fraction: f64, gap: f64) -> Vec<DonutSegment> {
    DonutLayout::new(center, outer_radius, inner_radius_fraction).with_gap(gap).layout(slices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_total_draws_nothing() {
        let l = DonutLayout::new(Point::new(0.0, 0.0), 10.0, 0.5);
        assert!(l.layout(&[Datum::new("a", 0.0), Datum::new("b", -3.0)]).is_empty());
        assert!(l.layout(&[]).is_empty());
    }

    #[test]
    fn single_slice_is_a_full_ring() {
        let l = DonutLayout::new(Point::new(50.0, 50.0), 40.0, 0.5);
        let segs = l.layout(&[Datum::new("all", 3.0)]);
        assert_eq!(segs.len(), 1);
        assert!((segs[0].span() - TAU).abs() < 1e-12);
        // two outer arcs plus two inner arcs
        assert_eq!(segs[0].path.matches('A').count(), 4);
    }

    #[test]
    fn pie_sector_returns_to_center() {
        let l = DonutLayout::new(Point::new(0.0, 0.0), 10.0, 0.0);
        let segs = l.layout(&[Datum::new("a", 1.0), Datum::new("b", 3.0)]);
        assert!(segs[0].path.contains("L0 0 Z"));
        // three quarters of the turn needs the large-arc flag
        assert!(segs[1].path.contains("A10 10 0 1 1"));
    }

    #[test]
    fn gap_shrinks_drawn_span_only() {
        let l = DonutLayout::new(Point::new(0.0, 0.0), 100.0, 0.5).with_gap(7.5);
        assert!((l.gap_angle() - 0.1).abs() < 1e-12);
        let segs = l.layout(&[Datum::new("a", 1.0), Datum::new("b", 1.0)]);
        assert!((segs[0].end_angle - segs[1].start_angle).abs() < 1e-12);
        assert!(!segs[0].path.is_empty());
    }

    #[test]
    fn last_segment_closes_the_ring_exactly() {
        let l = DonutLayout::new(Point::new(0.0, 0.0), 10.0, 0.5);
        for values in [&[0.1, 0.2, 0.3][..], &[1.0; 7][..], &[3.3, 0.7, 1.9, 2.2, 0.05][..], &[1.0, 2.0, 0.0, 0.0][..]] {
            let slices: Vec<Datum> = values.iter().map(|&v| Datum::new("s", v)).collect();
            let segs = l.layout(&slices);
            assert_eq!(segs.last().map(|s| s.end_angle), Some(START_ANGLE + TAU));
            assert_eq!(segs[0].start_angle, START_ANGLE);
            for w in segs.windows(2) {
                assert_eq!(w[0].end_angle, w[1].start_angle);
            }
        }
        // trailing zero slices stay empty
        let segs = l.layout(&[Datum::new("a", 1.0), Datum::new("b", 2.0), Datum::new("z", 0.0)]);
        assert_eq!(segs[2].span(), 0.0);
    }

    #[test]
    fn gap_wider_than_segment_hides_it() {
        let l = DonutLayout::new(Point::new(0.0, 0.0), 10.0, 0.0).with_gap(50.0);
        let segs = l.layout(&[Datum::new("tiny", 1.0), Datum::new("big", 99.0)]);
        assert!(segs[0].path.is_empty());
    }
}
