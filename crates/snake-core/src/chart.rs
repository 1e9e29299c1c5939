// File: crates/snake-core/src/chart.rs
// Summary: Chart scene builders: compose layouts, grid, axes and labels into a backend-agnostic Scene.
// Notes:
// - Builders never fail; empty or fully non-finite input yields a scene with only the frame.
// - Hit regions are registered in paint order so the topmost shape wins on click.

use crate::axis::{Axis, Formatter, Tick};
use crate::bar::{BarLayout, Orientation};
use crate::config::ChartConfig;
use crate::donut::DonutLayout;
use crate::hexbin::{hexagon_path, max_count, HexBin, HexbinLayout};
use crate::path::{build_fill_path, build_path, Curve, PathData};
use crate::radial::SpiderLayout;
use crate::ridgeline::{Ridge, RidgelineLayout};
use crate::scale::{LinearScale, ScaleTransform};
use crate::scene::{Anchor, HitRegion, HitTarget, Scene, Shape, Style};
use crate::series::{sanitize_points, x_domain, y_domain, Datum, Series};
use crate::stream::{StreamLayout, StreamOffset};
use crate::theme::Theme;
use crate::types::{Domain, PixelRect, Point};

const LABEL_SIZE: f64 = 11.0;
const TICK_LEN: f64 = 4.0;
const AXIS_WIDTH: f64 = 1.5;
const LINE_WIDTH: f64 = 2.0;
/// Fill alpha for areas drawn under a line.
const AREA_ALPHA: u8 = 0x55;
const UNIT: Domain = Domain::new(0.0, 1.0);

/// Everything a builder needs besides the data. Usually derived from a `ChartConfig`.
#[derive(Clone)]
pub struct ChartOptions {
    pub rect: PixelRect,
    pub theme: Theme,
    pub curve: Curve,
    pub show_points: bool,
    pub fill_area: bool,
    pub grid_levels: usize,
    pub hex_radius: f64,
    pub inner_radius_fraction: f64,
    pub segment_gap: f64,
    pub bar_padding: f64,
    pub orientation: Orientation,
    pub stream_offset: StreamOffset,
    pub ridge_overlap: f64,
    pub point_radius: f64,
    pub format_x: Option<Formatter>,
    pub format_y: Option<Formatter>,
    /// Used for bar value axes and donut/spider value labels.
    pub format_value: Option<Formatter>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self::from(&ChartConfig::default())
    }
}

impl From<&ChartConfig> for ChartOptions {
    fn from(cfg: &ChartConfig) -> Self {
        Self {
            rect: cfg.rect(),
            theme: cfg.theme(),
            curve: cfg.curve,
            show_points: cfg.show_points,
            fill_area: cfg.fill_area,
            grid_levels: cfg.grid_levels,
            hex_radius: cfg.hex_radius,
            inner_radius_fraction: cfg.inner_radius_fraction,
            segment_gap: cfg.segment_gap,
            bar_padding: cfg.bar_padding,
            orientation: cfg.orientation,
            stream_offset: cfg.stream_offset,
            ridge_overlap: cfg.ridge_overlap,
            point_radius: 3.0,
            format_x: None,
            format_y: None,
            format_value: None,
        }
    }
}

impl ChartOptions {
    fn axis(&self, label: &str, domain: Domain, formatter: &Option<Formatter>) -> Axis {
        Axis { formatter: formatter.clone(), ..Axis::new(label, domain.min, domain.max) }
    }

    fn format_value(&self, v: f64) -> String {
        self.axis("", UNIT, &self.format_value).format(v)
    }
}

// ---- helpers ----------------------------------------------------------------

fn frame(opts: &ChartOptions) -> Scene {
    Scene::new(opts.rect.width, opts.rect.height, opts.theme.background)
}

fn rect_path(x: f64, y: f64, w: f64, h: f64) -> String {
    let mut d = PathData::new();
    d.move_to(Point::new(x, y))
        .line_to(Point::new(x + w, y))
        .line_to(Point::new(x + w, y + h))
        .line_to(Point::new(x, y + h))
        .close();
    d.finish()
}

fn draw_grid(scene: &mut Scene, opts: &ChartOptions, x_ticks: &[Tick], y_ticks: &[Tick]) {
    let r = &opts.rect;
    let style = Style::stroke(opts.theme.grid, 1.0);
    for t in x_ticks {
        scene.push(Shape::Line {
            from: Point::new(t.position, r.plot_top()),
            to: Point::new(t.position, r.plot_bottom()),
            style,
        });
    }
    for t in y_ticks {
        scene.push(Shape::Line {
            from: Point::new(r.plot_left(), t.position),
            to: Point::new(r.plot_right(), t.position),
            style,
        });
    }
}

fn draw_axes(scene: &mut Scene, opts: &ChartOptions, x_ticks: &[Tick], y_ticks: &[Tick]) {
    let r = &opts.rect;
    let th = &opts.theme;
    let line = Style::stroke(th.axis_line, AXIS_WIDTH);
    let (l, b) = (r.plot_left(), r.plot_bottom());
    scene.push(Shape::Line { from: Point::new(l, b), to: Point::new(r.plot_right(), b), style: line });
    scene.push(Shape::Line { from: Point::new(l, r.plot_top()), to: Point::new(l, b), style: line });

    for t in x_ticks {
        scene.push(Shape::Line {
            from: Point::new(t.position, b),
            to: Point::new(t.position, b + TICK_LEN),
            style: line,
        });
        scene.text(Point::new(t.position, b + TICK_LEN + LABEL_SIZE + 2.0), &t.label, LABEL_SIZE, th.axis_label, Anchor::Middle);
    }
    for t in y_ticks {
        scene.push(Shape::Line {
            from: Point::new(l - TICK_LEN, t.position),
            to: Point::new(l, t.position),
            style: line,
        });
        scene.text(Point::new(l - TICK_LEN - 2.0, t.position + LABEL_SIZE * 0.35), &t.label, LABEL_SIZE, th.axis_label, Anchor::End);
    }
}

// ---- builders ---------------------------------------------------------------

/// Multi-series line chart with optional area fill and clickable points.
pub fn line_chart(series: &[Series], opts: &ChartOptions) -> Scene {
    let mut scene = frame(opts);
    let r = &opts.rect;
    let xd = x_domain(series).unwrap_or(UNIT);
    let yd = y_domain(series).unwrap_or(UNIT);
    let sx = LinearScale::new(xd, r.plot_left(), r.plot_right());
    let sy = LinearScale::new(yd, r.plot_bottom(), r.plot_top());
    let x_ticks = opts.axis("x", xd, &opts.format_x).ticks(&sx);
    let y_ticks = opts.axis("y", yd, &opts.format_y).ticks(&sy);
    draw_grid(&mut scene, opts, &x_ticks, &y_ticks);
    draw_axes(&mut scene, opts, &x_ticks, &y_ticks);

    let baseline = sy.map(0.0);
    for (si, s) in series.iter().enumerate() {
        let color = opts.theme.resolve(s.color.as_deref(), si);
        let px: Vec<Point> = sanitize_points(&s.points, &s.name)
            .into_iter()
            .map(|p| Point::new(sx.map(p.x), sy.map(p.y)))
            .collect();
        if opts.fill_area {
            scene.path(build_fill_path(&px, opts.curve, baseline), Style::fill(color.with_alpha(AREA_ALPHA)));
        }
        scene.path(build_path(&px, opts.curve), Style::stroke(color, LINE_WIDTH));
        if opts.show_points {
            // indices refer to the caller's points, so walk the unsanitized list
            for (index, p) in s.points.iter().enumerate().filter(|(_, p)| p.is_finite()) {
                let center = Point::new(sx.map(p.x), sy.map(p.y));
                scene.push(Shape::Circle {
                    center,
                    radius: opts.point_radius,
                    style: Style::fill(color).with_stroke(opts.theme.background, 1.0),
                });
                scene.region(HitRegion::Circle { center, radius: opts.point_radius + 2.0 }, HitTarget::Point { series: si, index });
            }
        }
    }
    scene
}

/// Bar chart; the value axis tops out at `max(values) * 1.1`.
pub fn bar_chart(data: &[Datum], opts: &ChartOptions) -> Scene {
    let mut scene = frame(opts);
    let r = &opts.rect;
    let layout = BarLayout::new(*r).with_orientation(opts.orientation).with_padding(opts.bar_padding);
    let max = layout.resolve_max(data);
    let vd = Domain::new(0.0, max);
    let value_axis = opts.axis("value", vd, &opts.format_value);
    let th = &opts.theme;

    match opts.orientation {
        Orientation::Vertical => {
            let ticks = value_axis.ticks(&LinearScale::new(vd, r.plot_bottom(), r.plot_top()));
            draw_grid(&mut scene, opts, &[], &ticks);
            draw_axes(&mut scene, opts, &[], &ticks);
        }
        Orientation::Horizontal => {
            let ticks = value_axis.ticks(&LinearScale::new(vd, r.plot_left(), r.plot_right()));
            draw_grid(&mut scene, opts, &ticks, &[]);
            draw_axes(&mut scene, opts, &ticks, &[]);
        }
    }

    for bar in layout.layout(data) {
        let d = &data[bar.index];
        let color = th.resolve(d.color.as_deref(), bar.index);
        scene.path(rect_path(bar.x, bar.y, bar.width, bar.height), Style::fill(color));
        scene.region(
            HitRegion::Rect { x: bar.x, y: bar.y, width: bar.width, height: bar.height },
            HitTarget::Bar(bar.index),
        );
        let (at, anchor) = match opts.orientation {
            Orientation::Vertical => (Point::new(bar.x + bar.width * 0.5, r.plot_bottom() + TICK_LEN + LABEL_SIZE + 2.0), Anchor::Middle),
            Orientation::Horizontal => (Point::new(r.plot_left() - TICK_LEN - 2.0, bar.y + bar.height * 0.5 + LABEL_SIZE * 0.35), Anchor::End),
        };
        scene.text(at, &d.label, LABEL_SIZE, th.axis_label, anchor);
    }
    scene
}

/// Donut (or pie when the inner fraction is 0) with the total in the middle.
pub fn donut_chart(slices: &[Datum], opts: &ChartOptions) -> Scene {
    let mut scene = frame(opts);
    let r = &opts.rect;
    let th = &opts.theme;
    let center = r.plot_center();
    let outer = (r.plot_width().min(r.plot_height()) * 0.5 - LABEL_SIZE * 2.0).max(0.0);
    let layout = DonutLayout::new(center, outer, opts.inner_radius_fraction).with_gap(opts.segment_gap);

    for seg in layout.layout(slices) {
        let d = &slices[seg.index];
        scene.path(seg.path.clone(), Style::fill(th.resolve(d.color.as_deref(), seg.index)));
        if seg.span() > 0.0 {
            scene.region(
                HitRegion::Sector {
                    center,
                    inner: layout.inner_radius(),
                    outer,
                    start: seg.start_angle,
                    end: seg.end_angle,
                },
                HitTarget::Segment(seg.index),
            );
            let at = center.polar(seg.mid_angle, outer + LABEL_SIZE);
            let anchor = if seg.mid_angle.cos() > 0.1 {
                Anchor::Start
            } else if seg.mid_angle.cos() < -0.1 {
                Anchor::End
            } else {
                Anchor::Middle
            };
            scene.text(at, &d.label, LABEL_SIZE, th.axis_label, anchor);
        }
    }

    if layout.inner_radius() > 0.0 {
        let total: f64 = slices.iter().map(|d| d.value).filter(|v| v.is_finite() && *v > 0.0).sum();
        scene.text(Point::new(center.x, center.y + LABEL_SIZE * 0.35), opts.format_value(total), LABEL_SIZE * 1.5, th.axis_label, Anchor::Middle);
    }
    scene
}

/// Spider chart for percentage values (0..=100 per axis).
pub fn spider_chart(values: &[Datum], opts: &ChartOptions) -> Scene {
    let mut scene = frame(opts);
    let r = &opts.rect;
    let th = &opts.theme;
    let max_radius = (r.plot_width().min(r.plot_height()) * 0.5 - LABEL_SIZE * 2.0).max(0.0);
    let layout = SpiderLayout::new(r.plot_center(), max_radius);
    let geom = layout.layout(values, opts.grid_levels);

    let grid = Style::stroke(th.grid, 1.0);
    for ring in &geom.rings {
        scene.path(ring.clone(), grid);
    }
    for &(from, to) in &geom.axes {
        scene.push(Shape::Line { from, to, style: grid });
    }

    let color = th.series_color(0);
    scene.path(geom.polygon.clone(), Style::fill(color.with_alpha(AREA_ALPHA)).with_stroke(color, LINE_WIDTH));
    for (i, v) in geom.vertices.iter().enumerate() {
        if opts.show_points {
            scene.push(Shape::Circle { center: v.point(), radius: opts.point_radius, style: Style::fill(color) });
        }
        scene.region(HitRegion::Circle { center: v.point(), radius: opts.point_radius + 2.0 }, HitTarget::Point { series: 0, index: i });
    }
    for (d, at) in values.iter().zip(layout.label_positions(values.len(), LABEL_SIZE)) {
        let text = format!("{} ({})", d.label, opts.format_value(d.value));
        let anchor = if at.x > r.plot_center().x + 1.0 {
            Anchor::Start
        } else if at.x < r.plot_center().x - 1.0 {
            Anchor::End
        } else {
            Anchor::Middle
        };
        scene.text(at, text, LABEL_SIZE, th.axis_label, anchor);
    }
    scene
}

/// Hexbin density chart. Domains default to the extent of the points.
///
/// Returns the bins with the scene; `HitTarget::Hex(i)` indexes into them.
pub fn hexbin_chart(
    points: &[Point],
    x_domain: Option<Domain>,
    y_domain: Option<Domain>,
    opts: &ChartOptions,
) -> (Scene, Vec<HexBin>) {
    let mut scene = frame(opts);
    let th = &opts.theme;
    let xd = x_domain.or_else(|| Domain::from_values(points.iter().map(|p| p.x))).unwrap_or(UNIT);
    let yd = y_domain.or_else(|| Domain::from_values(points.iter().map(|p| p.y))).unwrap_or(UNIT);
    let layout = HexbinLayout::new(opts.rect, opts.hex_radius);
    let (sx, sy) = layout.scales(xd, yd);
    let x_ticks = opts.axis("x", xd, &opts.format_x).ticks(&sx);
    let y_ticks = opts.axis("y", yd, &opts.format_y).ticks(&sy);
    draw_grid(&mut scene, opts, &x_ticks, &y_ticks);

    let bins = layout.bin(points, xd, yd);
    let peak = max_count(&bins).max(1) as f64;
    let high = th.series_color(0);
    for (i, bin) in bins.iter().enumerate() {
        let fill = th.density_low.mix(high, bin.count as f64 / peak);
        scene.path(hexagon_path(bin.center(), opts.hex_radius), Style::fill(fill).with_stroke(th.background, 0.5));
        scene.region(HitRegion::Hexagon { center: bin.center(), radius: opts.hex_radius }, HitTarget::Hex(i));
    }
    draw_axes(&mut scene, opts, &x_ticks, &y_ticks);
    (scene, bins)
}

/// Stacked overlapping ridges, first ridge at the top. Placeholders draw a dashed baseline.
pub fn ridgeline_chart(ridges: &[Ridge], opts: &ChartOptions) -> Scene {
    let mut scene = frame(opts);
    let r = &opts.rect;
    let th = &opts.theme;
    let layout = RidgelineLayout::new(*r).with_overlap(opts.ridge_overlap).with_curve(opts.curve);
    let band = layout.band_height(ridges.len());

    for geom in layout.layout(ridges) {
        let ridge = &ridges[geom.index];
        if geom.placeholder {
            scene.path(geom.line, Style::stroke(th.placeholder, 1.0).dashed());
        } else {
            let color = th.resolve(ridge.series.color.as_deref(), geom.index);
            if let Some(fill) = geom.fill {
                scene.path(fill, Style::fill(color.with_alpha(0xb0)));
            }
            scene.path(geom.line, Style::stroke(color, LINE_WIDTH * 0.75));
        }
        scene.region(
            HitRegion::Rect { x: r.plot_left(), y: geom.baseline_y - band, width: r.plot_width(), height: band },
            HitTarget::Ridge(geom.index),
        );
        scene.text(
            Point::new(r.plot_left() - TICK_LEN, geom.baseline_y),
            &ridge.series.name,
            LABEL_SIZE,
            if geom.placeholder { th.placeholder } else { th.axis_label },
            Anchor::End,
        );
    }
    scene
}

/// Stream graph over layers sharing column positions.
pub fn stream_chart(layers: &[Series], opts: &ChartOptions) -> Scene {
    let mut scene = frame(opts);
    let r = &opts.rect;
    let xd = x_domain(layers).unwrap_or(UNIT);
    let x_ticks = opts.axis("x", xd, &opts.format_x).ticks(&LinearScale::new(xd, r.plot_left(), r.plot_right()));
    draw_grid(&mut scene, opts, &x_ticks, &[]);

    let layout = StreamLayout::new(*r).with_offset(opts.stream_offset).with_curve(opts.curve);
    for layer in layout.layout(layers) {
        let color = opts.theme.resolve(layers[layer.index].color.as_deref(), layer.index);
        scene.path(layer.path, Style::fill(color.with_alpha(0xd0)));
    }
    draw_axes(&mut scene, opts, &x_ticks, &[]);
    scene
}

/// Stand-in scene shown while a chart's supervisor is faulted.
pub fn fallback_chart(reason: &str, opts: &ChartOptions) -> Scene {
    let mut scene = frame(opts);
    let r = &opts.rect;
    let c = r.plot_center();
    scene.path(
        rect_path(r.plot_left(), r.plot_top(), r.plot_width(), r.plot_height()),
        Style::stroke(opts.theme.placeholder, 1.0).dashed(),
    );
    scene.text(c, "Something went wrong", LABEL_SIZE * 1.5, opts.theme.axis_label, Anchor::Middle);
    scene.text(Point::new(c.x, c.y + LABEL_SIZE * 2.0), reason, LABEL_SIZE, opts.theme.placeholder, Anchor::Middle);
    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> ChartOptions {
        ChartOptions { rect: PixelRect::new(400.0, 300.0).with_margins(10.0, 10.0, 30.0, 40.0), ..Default::default() }
    }

    #[test]
    fn line_chart_registers_every_finite_point() {
        let s = vec![
            Series::with_data("a", vec![(0.0, 1.0), (1.0, f64::NAN), (2.0, 3.0)]),
            Series::from_values("b", &[2.0, 2.0]),
        ];
        let scene = line_chart(&s, &opts());
        assert_eq!(scene.regions.len(), 4);
        assert!(scene.regions.iter().any(|(_, t)| *t == HitTarget::Point { series: 0, index: 2 }));
        assert!(!scene.regions.iter().any(|(_, t)| *t == HitTarget::Point { series: 0, index: 1 }));
    }

    #[test]
    fn line_chart_without_points_has_no_regions() {
        let o = ChartOptions { show_points: false, fill_area: true, ..opts() };
        let scene = line_chart(&[Series::from_values("a", &[1.0, 2.0, 3.0])], &o);
        assert!(scene.regions.is_empty());
        // fill + line
        assert_eq!(scene.path_count(), 2);
    }

    #[test]
    fn bar_regions_follow_input_order() {
        let data = vec![Datum::new("A", 50.0), Datum::new("B", 100.0)];
        let scene = bar_chart(&data, &opts());
        let targets: Vec<_> = scene.regions.iter().map(|(_, t)| *t).collect();
        assert_eq!(targets, vec![HitTarget::Bar(0), HitTarget::Bar(1)]);
        assert!(scene.shapes.iter().any(|s| matches!(s, Shape::Text { content, .. } if content == "B")));
    }

    #[test]
    fn donut_click_maps_to_segment() {
        let o = ChartOptions { rect: PixelRect::new(200.0, 200.0), ..Default::default() };
        let scene = donut_chart(&[Datum::new("a", 1.0), Datum::new("b", 1.0)], &o);
        let c = o.rect.plot_center();
        // right half is the first segment, left half the second
        assert_eq!(scene.target_at(c.x + 60.0, c.y), Some(HitTarget::Segment(0)));
        assert_eq!(scene.target_at(c.x - 60.0, c.y), Some(HitTarget::Segment(1)));
        assert_eq!(scene.target_at(c.x, c.y), None);
    }

    #[test]
    fn empty_inputs_yield_frame_only() {
        assert!(donut_chart(&[], &opts()).regions.is_empty());
        let (scene, bins) = hexbin_chart(&[], None, None, &opts());
        assert!(scene.regions.is_empty() && bins.is_empty());
        assert_eq!(ridgeline_chart(&[], &opts()).path_count(), 0);
        assert_eq!(stream_chart(&[], &opts()).path_count(), 0);
    }

    #[test]
    fn hex_click_resolves_to_member_points() {
        use crate::events::{dispatch_click, Callbacks};
        use std::cell::Cell;
        use std::rc::Rc;

        let pts = [Point::new(1.0, 1.0), Point::new(9.0, 9.0), Point::new(1.1, 1.05), Point::new(f64::NAN, 0.0)];
        let o = ChartOptions { hex_radius: 20.0, ..opts() };
        let (scene, bins) = hexbin_chart(&pts, Some(Domain::new(0.0, 10.0)), Some(Domain::new(0.0, 10.0)), &o);
        assert_eq!(bins.len(), 2);

        let clicked = Rc::new(Cell::new(None));
        let sink = Rc::clone(&clicked);
        let mut cb = Callbacks { on_hex_click: Some(Box::new(move |i| sink.set(Some(i)))), ..Default::default() };
        let c = bins[0].center();
        assert_eq!(dispatch_click(&scene, c.x, c.y, &mut cb), Some(HitTarget::Hex(0)));
        let hit = clicked.get().map(|i| bins[i].member_indices.clone());
        assert_eq!(hit, Some(vec![0, 2]));
    }

    #[test]
    fn huge_finite_domain_builds_finite_geometry() {
        let s = vec![Series::with_data("wide", vec![(-1.0e308, 1.0), (1.0e308, 2.0)])];
        let scene = line_chart(&s, &ChartOptions::default());
        assert_eq!(scene.regions.len(), 2);
        for shape in &scene.shapes {
            match shape {
                Shape::Path { d, .. } => assert!(!d.contains("NaN") && !d.contains("inf"), "{d}"),
                Shape::Line { from, to, .. } => assert!(from.is_finite() && to.is_finite()),
                Shape::Circle { center, .. } => assert!(center.is_finite()),
                Shape::Text { at, .. } => assert!(at.is_finite()),
            }
        }
    }

    #[test]
    fn placeholder_ridges_are_dashed() {
        let ridges = vec![Ridge::placeholder(crate::ridgeline::zero_series("p", 4)), Ridge::live(Series::from_values("l", &[0.0, 2.0, 1.0]))];
        let scene = ridgeline_chart(&ridges, &opts());
        let dashed = scene
            .shapes
            .iter()
            .filter(|s| matches!(s, Shape::Path { style, .. } if style.dashed))
            .count();
        assert_eq!(dashed, 1);
    }

    #[test]
    fn custom_formatter_reaches_tick_labels() {
        let mut o = opts();
        o.format_y = Some(std::sync::Arc::new(|v: f64| format!("{v}%")));
        let scene = line_chart(&[Series::from_values("a", &[0.0, 100.0])], &o);
        assert!(scene.shapes.iter().any(|s| matches!(s, Shape::Text { content, .. } if content == "100%")));
    }
}
