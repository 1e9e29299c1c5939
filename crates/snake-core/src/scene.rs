// File: crates/snake-core/src/scene.rs
// Summary: Backend-agnostic scene (paths, circles, lines, text) plus click/hover hit regions.

use std::f64::consts::TAU;

use crate::donut::START_ANGLE;
use crate::theme::Color;
use crate::types::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub dashed: bool,
}

impl Style {
    pub fn fill(color: Color) -> Self {
        Self { fill: Some(color), stroke: None, stroke_width: 0.0, dashed: false }
    }

    pub fn stroke(color: Color, width: f64) -> Self {
        Self { fill: None, stroke: Some(color), stroke_width: width, dashed: false }
    }

    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke = Some(color);
        self.stroke_width = width;
        self
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Path { d: String, style: Style },
    Circle { center: Point, radius: f64, style: Style },
    Line { from: Point, to: Point, style: Style },
    Text { at: Point, content: String, size: f64, color: Color, anchor: Anchor },
}

/// Entity behind an interactive region, by index into the chart input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HitTarget {
    Point { series: usize, index: usize },
    Segment(usize),
    Hex(usize),
    Ridge(usize),
    Bar(usize),
}

/// Pixel-space area that reacts to pointer events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitRegion {
    Circle { center: Point, radius: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64 },
    /// Pointy-top hexagon.
    Hexagon { center: Point, radius: f64 },
    /// Annular sector; angles as produced by the donut layout, within
    /// `[START_ANGLE, START_ANGLE + TAU]`.
    Sector { center: Point, inner: f64, outer: f64, start: f64, end: f64 },
}

impl HitRegion {
    pub fn contains(&self, p: Point) -> bool {
        match *self {
            HitRegion::Circle { center, radius } => center.distance(p) <= radius,
            HitRegion::Rect { x, y, width, height } => p.x >= x && p.x <= x + width && p.y >= y && p.y <= y + height,
            HitRegion::Hexagon { center, radius } => {
                // pointy-top: flat sides left/right at radius * sqrt(3)/2
                let dx = (p.x - center.x).abs();
                let dy = (p.y - center.y).abs();
                let half_w = radius * 3f64.sqrt() * 0.5;
                dx <= half_w && dy <= radius && dy <= radius - dx / 3f64.sqrt()
            }
            HitRegion::Sector { center, inner, outer, start, end } => {
                let d = center.distance(p);
                if d < inner || d > outer {
                    return false;
                }
                // fold into the layout's turn so adjacent sectors tile it without seams
                let mut a = (p.y - center.y).atan2(p.x - center.x);
                if a < START_ANGLE { a += TAU; }
                if a >= START_ANGLE + TAU { a = START_ANGLE; }
                a >= start && a < end
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub background: Color,
    pub shapes: Vec<Shape>,
    pub regions: Vec<(HitRegion, HitTarget)>,
}

impl Scene {
    pub fn new(width: f64, height: f64, background: Color) -> Self {
        Self { width, height, background, shapes: Vec::new(), regions: Vec::new() }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn path(&mut self, d: impl Into<String>, style: Style) {
        let d = d.into();
        if !d.is_empty() {
            self.shapes.push(Shape::Path { d, style });
        }
    }

    pub fn text(&mut self, at: Point, content: impl Into<String>, size: f64, color: Color, anchor: Anchor) {
        self.shapes.push(Shape::Text { at, content: content.into(), size, color, anchor });
    }

    pub fn region(&mut self, region: HitRegion, target: HitTarget) {
        self.regions.push((region, target));
    }

    /// Topmost target under `(x, y)`; later regions sit above earlier ones.
    pub fn target_at(&self, x: f64, y: f64) -> Option<HitTarget> {
        let p = Point::new(x, y);
        self.regions.iter().rev().find(|(r, _)| r.contains(p)).map(|(_, t)| *t)
    }

    pub fn path_count(&self) -> usize {
        self.shapes.iter().filter(|s| matches!(s, Shape::Path { .. })).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_regions_win() {
        let mut s = Scene::new(10.0, 10.0, Color::rgb(0, 0, 0));
        s.region(HitRegion::Rect { x: 0.0, y: 0.0, width: 10.0, height: 10.0 }, HitTarget::Bar(0));
        s.region(HitRegion::Circle { center: Point::new(5.0, 5.0), radius: 1.0 }, HitTarget::Point { series: 0, index: 3 });
        assert_eq!(s.target_at(5.0, 5.5), Some(HitTarget::Point { series: 0, index: 3 }));
        assert_eq!(s.target_at(1.0, 1.0), Some(HitTarget::Bar(0)));
        assert_eq!(s.target_at(11.0, 1.0), None);
    }

    #[test]
    fn hexagon_region_excludes_corners() {
        let h = HitRegion::Hexagon { center: Point::new(0.0, 0.0), radius: 10.0 };
        assert!(h.contains(Point::new(0.0, 9.9)));
        assert!(h.contains(Point::new(8.6, 0.0)));
        assert!(!h.contains(Point::new(8.6, 9.0)));
    }

    #[test]
    fn donut_sectors_tile_the_ring() {
        use crate::donut::layout_donut;
        use crate::series::Datum;

        let c = Point::new(0.0, 0.0);
        let data: Vec<Datum> = [0.1, 0.2, 0.3, 0.25, 0.15].iter().map(|&v| Datum::new("s", v)).collect();
        let regions: Vec<HitRegion> = layout_donut(&data, c, 10.0, 0.5, 0.0)
            .iter()
            .map(|s| HitRegion::Sector { center: c, inner: 5.0, outer: 10.0, start: s.start_angle, end: s.end_angle })
            .collect();
        let hits = |p: Point| regions.iter().filter(|r| r.contains(p)).count();
        for i in 0..360 {
            assert_eq!(hits(c.polar((i as f64).to_radians(), 7.5)), 1, "angle {i}");
        }
        for x in [-1e-13, -f64::MIN_POSITIVE, 0.0, 1e-13] {
            assert_eq!(hits(Point::new(x, -8.0)), 1, "x {x}");
        }
        // just left of 12 o'clock belongs to the last slice
        assert!(regions[4].contains(Point::new(-1e-13, -8.0)));
        assert!(regions[0].contains(Point::new(0.0, -8.0)));
    }

    #[test]
    fn empty_paths_are_not_added() {
        let mut s = Scene::new(10.0, 10.0, Color::rgb(0, 0, 0));
        s.path("", Style::fill(Color::rgb(1, 2, 3)));
        assert_eq!(s.path_count(), 0);
    }
}
