// File: crates/snake-core/src/radial.rs
// Summary: Spider (radar) layout: vertices on a regular polygon, grid rings, spokes.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::path::build_polygon;
use crate::series::Datum;
use crate::types::Point;

/// Full scale of a spider axis; values are percentages of it.
pub const FULL_SCALE: f64 = 100.0;

/// One axis of a radial chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialVertex {
    /// Radians; 0 index at -pi/2 (top), increasing clockwise on screen.
    pub angle: f64,
    /// `value / 100`, not clamped.
    pub magnitude_fraction: f64,
    pub x: f64,
    pub y: f64,
}

impl RadialVertex {
    pub fn point(&self) -> Point { Point::new(self.x, self.y) }
}

/// Angle of axis `index` out of `n`.
#[inline]
pub fn axis_angle(index: usize, n: usize) -> f64 {
    TAU * index as f64 / n as f64 - FRAC_PI_2
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpiderGeometry {
    pub vertices: Vec<RadialVertex>,
    /// Data polygon, closed back to vertex 0.
    pub polygon: String,
    /// Concentric grid polygons, innermost first.
    pub rings: Vec<String>,
    /// Spokes from the center to each axis tip.
    pub axes: Vec<(Point, Point)>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiderLayout {
    pub center: Point,
    pub max_radius: f64,
}

impl SpiderLayout {
    pub fn new(center: Point, max_radius: f64) -> Self {
        Self { center, max_radius }
    }

    /// Vertices for `values` (0..=100 each; out-of-range values are not clamped).
    pub fn vertices(&self, values: &[Datum]) -> Vec<RadialVertex> {
        let n = values.len();
        values
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let angle = axis_angle(i, n);
                let magnitude_fraction = d.value / FULL_SCALE;
                let p = self.center.polar(angle, self.max_radius * magnitude_fraction);
                RadialVertex { angle, magnitude_fraction, x: p.x, y: p.y }
            })
            .collect()
    }

    /// `levels` regular `n`-gons at `max_radius * k / levels`, k = 1..=levels.
    pub fn grid_rings(&self, n: usize, levels: usize) -> Vec<String> {
        if n == 0 || levels == 0 {
            return Vec::new();
        }
        (1..=levels)
            .map(|k| {
                let r = self.max_radius * k as f64 / levels as f64;
                let ring: Vec<Point> = (0..n).map(|i| self.center.polar(axis_angle(i, n), r)).collect();
                build_polygon(&ring)
            })
            .collect()
    }

    pub fn axes(&self, n: usize) -> Vec<(Point, Point)> {
        (0..n).map(|i| (self.center, self.center.polar(axis_angle(i, n), self.max_radius))).collect()
    }

    /// Anchor points for axis labels, `offset` pixels beyond the outer ring.
    pub fn label_positions(&self, n: usize, offset: f64) -> Vec<Point> {
        (0..n).map(|i| self.center.polar(axis_angle(i, n), self.max_radius + offset)).collect()
    }

    pub fn layout(&self, values: &[Datum], levels: usize) -> SpiderGeometry {
        let vertices = self.vertices(values);
        let points: Vec<Point> = vertices.iter().map(RadialVertex::point).collect();
        SpiderGeometry {
            polygon: build_polygon(&points),
            rings: self.grid_rings(values.len(), levels),
            axes: self.axes(values.len()),
            vertices,
        }
    }
}

/// One-shot spider geometry around `center`.
pub fn layout_radial(values: &[Datum], levels: usize, center: Point, max_radius: f64) -> SpiderGeometry {
    SpiderLayout::new(center, max_radius).layout(values, levels)
}
