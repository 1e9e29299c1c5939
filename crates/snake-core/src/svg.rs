// File: crates/snake-core/src/svg.rs
// Summary: Serialize a `Scene` into a standalone SVG document.

use std::fmt::Write;

use crate::path::fmt_num;
use crate::scene::{Anchor, Scene, Shape, Style};

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn style_attrs(style: &Style) -> String {
    let mut s = String::new();
    match style.fill {
        Some(c) => {
            let _ = write!(s, " fill=\"{}\"", c.to_hex());
            if c.a < 255 {
                let _ = write!(s, " fill-opacity=\"{}\"", fmt_num(c.opacity()));
            }
        }
        None => s.push_str(" fill=\"none\""),
    }
    if let Some(c) = style.stroke {
        let _ = write!(s, " stroke=\"{}\" stroke-width=\"{}\"", c.to_hex(), fmt_num(style.stroke_width));
        if c.a < 255 {
            let _ = write!(s, " stroke-opacity=\"{}\"", fmt_num(c.opacity()));
        }
        if style.dashed {
            s.push_str(" stroke-dasharray=\"4 4\"");
        }
    }
    s
}

/// Render `scene` as an SVG document string.
pub fn to_svg(scene: &Scene) -> String {
    let (w, h) = (fmt_num(scene.width), fmt_num(scene.height));
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
    );
    let _ = writeln!(out, "  <rect width=\"{w}\" height=\"{h}\" fill=\"{}\"/>", scene.background.to_hex());
    for shape in &scene.shapes {
        match shape {
            Shape::Path { d, style } => {
                let _ = writeln!(out, "  <path d=\"{d}\"{}/>", style_attrs(style));
            }
            Shape::Circle { center, radius, style } => {
                let _ = writeln!(
                    out,
                    "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}/>",
                    fmt_num(center.x),
                    fmt_num(center.y),
                    fmt_num(*radius),
                    style_attrs(style)
                );
            }
            Shape::Line { from, to, style } => {
                let _ = writeln!(
                    out,
                    "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>",
                    fmt_num(from.x),
                    fmt_num(from.y),
                    fmt_num(to.x),
                    fmt_num(to.y),
                    style_attrs(style)
                );
            }
            Shape::Text { at, content, size, color, anchor } => {
                let anchor = match anchor {
                    Anchor::Start => "start",
                    Anchor::Middle => "middle",
                    Anchor::End => "end",
                };
                let _ = writeln!(
                    out,
                    "  <text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{anchor}\">{}</text>",
                    fmt_num(at.x),
                    fmt_num(at.y),
                    fmt_num(*size),
                    color.to_hex(),
                    escape(content)
                );
            }
        }
    }
    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Color;
    use crate::types::Point;

    #[test]
    fn writes_elements_and_escapes_text() {
        let mut s = Scene::new(100.0, 50.0, Color::rgb(0, 0, 0));
        s.path("M0 0 L10 10", Style::stroke(Color::rgb(255, 0, 0), 2.0).dashed());
        s.text(Point::new(5.0, 5.0), "a<b & c", 12.0, Color::rgb(255, 255, 255), Anchor::Middle);
        let svg = to_svg(&s);
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100\" height=\"50\""));
        assert!(svg.contains("<path d=\"M0 0 L10 10\" fill=\"none\" stroke=\"#ff0000\" stroke-width=\"2\" stroke-dasharray=\"4 4\"/>"));
        assert!(svg.contains(">a&lt;b &amp; c</text>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn translucent_fill_gets_opacity() {
        let mut s = Scene::new(10.0, 10.0, Color::rgb(0, 0, 0));
        s.path("M0 0 L1 1 Z", Style::fill(Color::rgb(10, 20, 30).with_alpha(51)));
        assert!(to_svg(&s).contains("fill=\"#0a141e\" fill-opacity=\"0.2\""));
    }
}
