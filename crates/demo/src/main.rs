// File: crates/demo/src/main.rs
// Summary: Demo loads series from CSV (or synthesizes them) and renders every chart kind to SVG + PNG,
// then simulates the scrolling ridgeline frame by frame.

mod logging;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use snake_core::chart::{
    bar_chart, donut_chart, fallback_chart, hexbin_chart, line_chart, ridgeline_chart, spider_chart, stream_chart,
    ChartOptions,
};
use snake_core::ridgeline::{zero_series, Ridge};
use snake_core::{to_svg, ChartConfig, Datum, ErrorLog, LiveWindow, Point, Rendered, Scene, Series, Supervisor};
use snake_render_skia::SkiaRenderer;
use tracing::{info, warn};

const RIDGE_POINTS: usize = 48;
const LIVE_FRAMES: u32 = 12;

#[derive(Parser, Debug)]
#[command(name = "snake-demo")]
#[command(about = "Render every Snake Eater chart kind to SVG and PNG", long_about = None)]
struct Args {
    /// Long-format CSV with columns series,x,y[,color]; synthetic data when omitted
    #[arg(value_name = "CSV")]
    data: Option<PathBuf>,

    /// Chart config (TOML); a missing file means defaults
    #[arg(short, long, value_name = "PATH", default_value = "snake-chart.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let cfg = ChartConfig::load(&args.config).with_context(|| format!("loading config '{}'", args.config.display()))?;
    let opts = ChartOptions::from(&cfg);
    info!(theme = %cfg.theme, width = cfg.width, height = cfg.height, "chart config ready");

    let series = match &args.data {
        Some(path) => load_series_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => synthetic_series(),
    };
    if series.is_empty() {
        anyhow::bail!("no series loaded; expected columns series,x,y");
    }
    println!("Loaded {} series ({} points)", series.len(), series.iter().map(|s| s.points.len()).sum::<usize>());

    let mut log = ErrorLog::default();
    log.subscribe(|e| eprintln!("[{}] {}: {}", e.level, e.source, e.message));
    let renderer = SkiaRenderer::new();
    let out_dir = PathBuf::from("target/out");

    let totals: Vec<Datum> = series
        .iter()
        .map(|s| {
            let d = Datum::new(s.name.clone(), s.points.iter().map(|p| p.y.max(0.0)).sum());
            match &s.color {
                Some(c) => d.with_color(c.clone()),
                None => d,
            }
        })
        .collect();
    let peak = totals.iter().map(|d| d.value).fold(0.0f64, f64::max);
    let percents: Vec<Datum> = totals
        .iter()
        .map(|d| Datum::new(d.label.clone(), if peak > 0.0 { d.value / peak * 100.0 } else { 0.0 }))
        .collect();
    let scatter: Vec<Point> = series.iter().flat_map(|s| s.points.iter().copied()).collect();
    let (hexbin, bins) = hexbin_chart(&scatter, None, None, &opts);
    info!(points = scatter.len(), bins = bins.len(), peak = snake_core::hexbin::max_count(&bins), "hexbin density");

    let scenes: Vec<(&str, Scene)> = vec![
        ("line", line_chart(&series, &opts)),
        ("bar", bar_chart(&totals, &opts)),
        ("donut", donut_chart(&totals, &opts)),
        ("spider", spider_chart(&percents, &opts)),
        ("hexbin", hexbin),
        ("stream", stream_chart(&series, &opts)),
    ];
    for (kind, scene) in &scenes {
        let mut sup = Supervisor::with_defaults(*kind);
        write_outputs(&renderer, &mut sup, &mut log, &opts, scene, &out_dir.join(format!("snake_{kind}")))?;
    }

    simulate_live(&renderer, &cfg, &opts, &mut log, &out_dir)?;

    if !log.is_empty() {
        warn!(entries = log.len(), "finished with reported errors");
    }
    Ok(())
}

/// Write `<stem>.svg` and `<stem>.png`; a failed raster falls back to the placeholder scene.
fn write_outputs(
    renderer: &SkiaRenderer,
    sup: &mut Supervisor,
    log: &mut ErrorLog,
    opts: &ChartOptions,
    scene: &Scene,
    stem: &Path,
) -> Result<()> {
    if let Some(parent) = stem.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let svg_path = stem.with_extension("svg");
    std::fs::write(&svg_path, to_svg(scene)).with_context(|| format!("writing {}", svg_path.display()))?;

    let png = match sup.render(Instant::now(), log, || renderer.render_png(scene)) {
        Rendered::Content(bytes) => bytes,
        Rendered::Fallback { reason, .. } => renderer.render_png(&fallback_chart(&reason, opts))?,
    };
    let png_path = stem.with_extension("png");
    std::fs::write(&png_path, png).with_context(|| format!("writing {}", png_path.display()))?;
    println!("Wrote {} and {}", svg_path.display(), png_path.display());
    Ok(())
}

/// Drive a `LiveWindow` with simulated time: one new ridge per scroll interval.
fn simulate_live(renderer: &SkiaRenderer, cfg: &ChartConfig, opts: &ChartOptions, log: &mut ErrorLog, out_dir: &Path) -> Result<()> {
    let interval = cfg.scroll_interval();
    let mut window = LiveWindow::new(cfg.max_ridges, interval, zero_series("waiting", RIDGE_POINTS));
    let t0 = Instant::now();
    let mut frame = 0u32;
    window.mount(t0, move || {
        frame += 1;
        ridge_frame(frame)
    });

    let mut sup = Supervisor::new("RidgelineGraph", Duration::from_secs(5), 3);
    for step in 0..=LIVE_FRAMES {
        let now = t0 + interval * step;
        let pushed = window.tick(now);
        let ridges: Vec<Ridge> = window.slots().map(Ridge::from).collect();
        let scene = ridgeline_chart(&ridges, opts);
        if step == 0 || step == LIVE_FRAMES {
            let stem = out_dir.join(format!("snake_ridgeline_{step:02}"));
            write_outputs(renderer, &mut sup, log, opts, &scene, &stem)?;
        }
        tracing::debug!(step, pushed, live = window.live_count(), "ridgeline frame");
    }
    window.unmount();
    info!(pushes = window.total_pushes(), "live ridgeline stopped");
    Ok(())
}

/// Bell-shaped ridge whose peak drifts with `frame`.
fn ridge_frame(frame: u32) -> Series {
    let center = (frame as f64 * 0.37).sin() * 0.3 + 0.5;
    let width = 0.08 + (frame as f64 * 0.21).cos().abs() * 0.06;
    let values: Vec<f64> = (0..RIDGE_POINTS)
        .map(|i| {
            let x = i as f64 / (RIDGE_POINTS - 1) as f64;
            (-((x - center) / width).powi(2)).exp() * (1.0 + frame as f64 % 3.0)
        })
        .collect();
    Series::from_values(format!("t+{frame}"), &values)
}

fn synthetic_series() -> Vec<Series> {
    let names = ["olive", "khaki", "rust", "slate"];
    names
        .iter()
        .enumerate()
        .map(|(k, name)| {
            let data = (0..40)
                .map(|i| {
                    let x = i as f64;
                    (x, ((x * 0.2 + k as f64).sin() + 1.2) * (k + 1) as f64 * 10.0)
                })
                .collect();
            Series::with_data(*name, data)
        })
        .collect()
}

/// Load long-format CSV (`series,x,y[,color]`) into series, preserving first-seen order.
fn load_series_csv(path: &Path) -> Result<Vec<Series>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_name = idx(&["series", "name", "group"]);
    let i_x = idx(&["x", "time", "t", "index"]).context("missing x column")?;
    let i_y = idx(&["y", "value", "v"]).context("missing y column")?;
    let i_color = idx(&["color", "colour"]);

    let mut out: Vec<Series> = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());
        let (Some(x), Some(y)) = (parse(i_x), parse(i_y)) else {
            skipped += 1;
            continue;
        };
        let name = i_name.and_then(|i| rec.get(i)).unwrap_or("series");
        let pos = match out.iter().position(|s| s.name == name) {
            Some(p) => p,
            None => {
                let mut s = Series::new(name);
                s.color = i_color.and_then(|i| rec.get(i)).filter(|c| !c.is_empty()).map(str::to_string);
                out.push(s);
                out.len() - 1
            }
        };
        out[pos].points.push(Point::new(x, y));
    }
    if skipped > 0 {
        warn!(skipped, "rows without numeric x/y were skipped");
    }
    Ok(out)
}
