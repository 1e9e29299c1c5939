// File: crates/snake-core/src/hexbin.rs
// Summary: Hexagonal binning of scatter points (pointy-top tiling, axial/cube rounding).
// Notes:
// - Binning happens in plot-pixel space so `hex_radius` is a pixel size.
// - Output is sparse and kept in first-occupied order.

use std::collections::HashMap;
use std::f64::consts::PI;

use tracing::warn;

use crate::path::build_polygon;
use crate::scale::{LinearScale, ScaleTransform};
use crate::types::{Domain, PixelRect, Point};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Occupied hexagonal cell.
#[derive(Clone, Debug, PartialEq)]
pub struct HexBin {
    pub center_x: f64,
    pub center_y: f64,
    /// Axial coordinates of the cell.
    pub q: i64,
    pub r: i64,
    pub count: usize,
    /// Indices into the input slice, ascending.
    pub member_indices: Vec<usize>,
}

impl HexBin {
    pub fn center(&self) -> Point { Point::new(self.center_x, self.center_y) }
}

/// Pointy-top hexagon grid anchored at the plot origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexGrid {
    pub origin: Point,
    pub radius: f64,
}

impl HexGrid {
    pub fn new(origin: Point, radius: f64) -> Self {
        Self { origin, radius }
    }

    /// Axial cell containing the pixel `p`.
    pub fn cell_at(&self, p: Point) -> (i64, i64) {
        let x = p.x - self.origin.x;
        let y = p.y - self.origin.y;
        let q = (SQRT_3 / 3.0 * x - y / 3.0) / self.radius;
        let r = (2.0 / 3.0 * y) / self.radius;
        cube_round(q, r)
    }

    /// Pixel center of the axial cell `(q, r)`.
    pub fn center_of(&self, q: i64, r: i64) -> Point {
        let (q, r) = (q as f64, r as f64);
        Point::new(
            self.origin.x + self.radius * SQRT_3 * (q + r / 2.0),
            self.origin.y + self.radius * 1.5 * r,
        )
    }

    /// Outline of a cell centered at `center`.
    pub fn hexagon_path(&self, center: Point) -> String {
        hexagon_path(center, self.radius)
    }
}

/// Round fractional axial coordinates to the nearest cell via cube coordinates.
fn cube_round(q: f64, r: f64) -> (i64, i64) {
    let s = -q - r;
    let (mut rq, mut rr, rs) = (q.round(), r.round(), s.round());
    let (dq, dr, ds) = ((rq - q).abs(), (rr - r).abs(), (rs - s).abs());
    if dq > dr && dq > ds {
        rq = -rr - rs;
    } else if dr > ds {
        rr = -rq - rs;
    }
    (rq as i64, rr as i64)
}

/// Closed pointy-top hexagon of circumradius `radius` around `center`.
pub fn hexagon_path(center: Point, radius: f64) -> String {
    let corners: Vec<Point> = (0..6)
        .map(|i| center.polar(PI / 180.0 * (60.0 * i as f64 - 30.0), radius))
        .collect();
    build_polygon(&corners)
}

/// Bins over a plot rect; points are given in domain space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexbinLayout {
    pub rect: PixelRect,
    pub hex_radius: f64,
}

impl HexbinLayout {
    pub fn new(rect: PixelRect, hex_radius: f64) -> Self {
        Self { rect, hex_radius }
    }

    pub fn grid(&self) -> HexGrid {
        HexGrid::new(Point::new(self.rect.plot_left(), self.rect.plot_top()), self.hex_radius)
    }

    pub fn scales(&self, x_domain: Domain, y_domain: Domain) -> (LinearScale, LinearScale) {
        (
            LinearScale::new(x_domain, self.rect.plot_left(), self.rect.plot_right()),
            LinearScale::new(y_domain, self.rect.plot_bottom(), self.rect.plot_top()),
        )
    }

    /// Group `points` into occupied cells. Non-finite points are skipped; every
    /// other point lands in exactly one bin.
    pub fn bin(&self, points: &[Point], x_domain: Domain, y_domain: Domain) -> Vec<HexBin> {
        if !(self.hex_radius > 0.0) {
            warn!(hex_radius = self.hex_radius, "hex radius must be positive; no bins");
            return Vec::new();
        }
        let (sx, sy) = self.scales(x_domain, y_domain);
        let grid = self.grid();
        let mut slots: HashMap<(i64, i64), usize> = HashMap::new();
        let mut bins: Vec<HexBin> = Vec::new();
        let mut skipped = 0usize;
        for (i, p) in points.iter().enumerate() {
            if !p.is_finite() {
                skipped += 1;
                continue;
            }
            let cell = grid.cell_at(Point::new(sx.map(p.x), sy.map(p.y)));
            let slot = *slots.entry(cell).or_insert_with(|| {
                let c = grid.center_of(cell.0, cell.1);
                bins.push(HexBin { center_x: c.x, center_y: c.y, q: cell.0, r: cell.1, count: 0, member_indices: Vec::new() });
                bins.len() - 1
            });
            let bin = &mut bins[slot];
            bin.count += 1;
            bin.member_indices.push(i);
        }
        if skipped > 0 {
            warn!(skipped, "hexbin skipped non-finite points");
        }
        bins
    }
}

/// One-shot binning.
pub fn bin_hexagonal(points: &[Point], hex_radius: f64, rect: PixelRect, x_domain: Domain, y_domain: Domain) -> Vec<HexBin> {
    HexbinLayout::new(rect, hex_radius).bin(points, x_domain, y_domain)
}

/// Largest bin count (0 for no bins).
pub fn max_count(bins: &[HexBin]) -> usize {
    bins.iter().map(|b| b.count).max().unwrap_or(0)
}
