// File: crates/snake-render-skia/tests/raster.rs
// Purpose: Rasterize scenes and validate PNG/RGBA output shape and a few pixels.

use snake_core::chart::{bar_chart, line_chart, ridgeline_chart, ChartOptions};
use snake_core::ridgeline::{zero_series, Ridge};
use snake_core::scene::{Scene, Style};
use snake_core::theme::Color;
use snake_core::{Datum, PixelRect, Series};
use snake_render_skia::SkiaRenderer;

fn small_opts() -> ChartOptions {
    ChartOptions { rect: PixelRect::new(160.0, 100.0).with_margins(8.0, 8.0, 16.0, 24.0), ..Default::default() }
}

#[test]
fn png_bytes_decode_to_scene_size() {
    let scene = line_chart(&[Series::with_data("a", vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0)])], &small_opts());
    let bytes = SkiaRenderer::without_labels().render_png(&scene).expect("render png");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (160, 100));
    // top-left corner is outside the plot and only shows the background
    let bg = small_opts().theme.background;
    assert_eq!(img.get_pixel(0, 0).0, [bg.r, bg.g, bg.b, 255]);
}

#[test]
fn rgba_buffer_shape() {
    let scene = bar_chart(&[Datum::new("A", 1.0), Datum::new("B", 3.0)], &small_opts());
    let (px, w, h, stride) = SkiaRenderer::without_labels().render_rgba8(&scene).expect("rgba render");
    assert_eq!((w, h), (160, 100));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, w as usize * 4);
    assert_eq!(px[3], 255);
}

#[test]
fn filled_rect_paints_its_color() {
    let mut scene = Scene::new(20.0, 20.0, Color::rgb(0, 0, 0));
    scene.path("M0 0 L20 0 L20 20 L0 20 Z", Style::fill(Color::rgb(200, 40, 10)));
    let (px, _, _, stride) = SkiaRenderer::without_labels().render_rgba8(&scene).expect("rgba render");
    let i = 10 * stride + 10 * 4;
    assert_eq!(&px[i..i + 4], &[200, 40, 10, 255]);
}

#[test]
fn dashed_placeholders_render() {
    let ridges = vec![Ridge::placeholder(zero_series("p", 4)), Ridge::live(Series::from_values("l", &[0.0, 1.0, 0.5]))];
    let scene = ridgeline_chart(&ridges, &small_opts());
    assert!(SkiaRenderer::without_labels().render_png(&scene).is_ok());
}

#[test]
fn empty_scene_is_an_error() {
    let scene = Scene::new(0.0, 10.0, Color::rgb(0, 0, 0));
    assert!(SkiaRenderer::without_labels().render_png(&scene).is_err());
}

#[test]
fn labels_render_to_png_file() {
    let scene = bar_chart(&[Datum::new("A", 1.0)], &small_opts());
    let out = std::path::PathBuf::from("target/test_out/bar_labels.png");
    SkiaRenderer::new().render_png_file(&scene, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}
