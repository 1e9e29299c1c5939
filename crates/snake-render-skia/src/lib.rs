// File: crates/snake-render-skia/src/lib.rs
// Summary: Headless Skia renderer for snake-core scenes (CPU raster surface -> PNG / RGBA8).

pub mod text;

use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::{debug, warn};

use snake_core::scene::{Scene, Shape, Style};
use snake_core::theme::Color;

pub use text::TextShaper;

/// Dash pattern for dashed strokes, matching the SVG output.
const DASH: [f32; 2] = [4.0, 4.0];

fn sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

pub struct SkiaRenderer {
    shaper: Option<TextShaper>,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { shaper: Some(TextShaper::new()) }
    }

    /// Skip text shapes; output then does not depend on installed fonts.
    pub fn without_labels() -> Self {
        Self { shaper: None }
    }

    fn surface(scene: &Scene) -> Result<skia::Surface> {
        let (w, h) = (scene.width.round() as i32, scene.height.round() as i32);
        anyhow::ensure!(w > 0 && h > 0, "scene has no area ({}x{})", scene.width, scene.height);
        skia::surfaces::raster_n32_premul((w, h)).ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))
    }

    /// Paint every shape of `scene` onto `canvas`, in order.
    pub fn draw(&self, canvas: &skia::Canvas, scene: &Scene) {
        canvas.clear(sk_color(scene.background));
        for shape in &scene.shapes {
            match shape {
                Shape::Path { d, style } => match skia::Path::from_svg(d) {
                    Some(path) => draw_styled(style, |paint| {
                        canvas.draw_path(&path, paint);
                    }),
                    None => warn!(d = %d, "unparsable path data; skipped"),
                },
                Shape::Circle { center, radius, style } => draw_styled(style, |paint| {
                    canvas.draw_circle((center.x as f32, center.y as f32), *radius as f32, paint);
                }),
                Shape::Line { from, to, style } => draw_styled(style, |paint| {
                    canvas.draw_line((from.x as f32, from.y as f32), (to.x as f32, to.y as f32), paint);
                }),
                Shape::Text { at, content, size, color, anchor } => {
                    if let Some(shaper) = &self.shaper {
                        shaper.draw(canvas, content, at.x as f32, at.y as f32, *size as f32, sk_color(*color), *anchor);
                    }
                }
            }
        }
    }

    /// Render to encoded PNG bytes.
    pub fn render_png(&self, scene: &Scene) -> Result<Vec<u8>> {
        let mut surface = Self::surface(scene)?;
        self.draw(surface.canvas(), scene);
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        debug!(bytes = data.len(), shapes = scene.shapes.len(), "rendered PNG");
        Ok(data.as_bytes().to_vec())
    }

    /// Render and write a PNG file, creating parent directories.
    pub fn render_png_file(&self, scene: &Scene, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.render_png(scene)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Render to unpremultiplied RGBA8. Returns `(pixels, width, height, row_bytes)`.
    pub fn render_rgba8(&self, scene: &Scene) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = Self::surface(scene)?;
        self.draw(surface.canvas(), scene);
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        anyhow::ensure!(
            surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)),
            "reading surface pixels failed"
        );
        Ok((pixels, w as u32, h as u32, row_bytes))
    }
}

/// Fill first, then stroke, mirroring SVG paint order.
fn draw_styled(style: &Style, mut draw: impl FnMut(&skia::Paint)) {
    if let Some(fill) = style.fill {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(sk_color(fill));
        draw(&paint);
    }
    if let Some(stroke) = style.stroke {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(style.stroke_width as f32);
        paint.set_color(sk_color(stroke));
        if style.dashed {
            paint.set_path_effect(skia::PathEffect::dash(&DASH, 0.0));
        }
        draw(&paint);
    }
}
