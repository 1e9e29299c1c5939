// File: crates/snake-core/src/theme.rs
// Summary: Colors and theme presets for chart scenes.

use std::fmt;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            3 => {
                let nib = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok().map(|v| v * 17);
                Some(Self::rgb(nib(0)?, nib(1)?, nib(2)?))
            }
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
            _ => None,
        }
    }

    /// `#rrggbb` (alpha is emitted separately as an opacity attribute).
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }

    /// Linear blend towards `other` (`t` in 0..=1).
    pub fn mix(self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color { r: lerp(self.r, other.r), g: lerp(self.g, other.g), b: lerp(self.b, other.b), a: lerp(self.a, other.a) }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub placeholder: Color,
    /// Low end of the hexbin density ramp; the high end is `palette[0]`.
    pub density_low: Color,
    pub palette: &'static [Color],
}

const SNAKE_EATER_PALETTE: &[Color] = &[
    Color::rgb(0x9a, 0xb9, 0x73), // olive drab
    Color::rgb(0xd8, 0xc3, 0x8f), // khaki
    Color::rgb(0xc8, 0x6b, 0x3c), // rust
    Color::rgb(0x5f, 0x8a, 0x8b), // slate teal
    Color::rgb(0xe0, 0xd9, 0xc4), // bone
    Color::rgb(0x8c, 0x5a, 0x7a), // plum
];

const DARK_PALETTE: &[Color] = &[
    Color::rgb(64, 160, 255),
    Color::rgb(40, 200, 120),
    Color::rgb(255, 180, 60),
    Color::rgb(220, 80, 80),
    Color::rgb(170, 120, 255),
    Color::rgb(80, 210, 210),
];

const LIGHT_PALETTE: &[Color] = &[
    Color::rgb(32, 120, 200),
    Color::rgb(20, 160, 90),
    Color::rgb(220, 130, 20),
    Color::rgb(200, 60, 60),
    Color::rgb(120, 80, 200),
    Color::rgb(20, 150, 150),
];

const HIGH_CONTRAST_PALETTE: &[Color] = &[
    Color::rgb(0x00, 0xff, 0xff),
    Color::rgb(0xff, 0xff, 0x00),
    Color::rgb(0x00, 0xff, 0x00),
    Color::rgb(0xff, 0x00, 0xff),
];

impl Theme {
    pub fn snake_eater() -> Self {
        Self {
            name: "snake-eater",
            background: Color::rgb(0x1c, 0x1f, 0x17),
            grid: Color::rgb(0x33, 0x38, 0x2b),
            axis_line: Color::rgb(0x8f, 0x96, 0x7c),
            axis_label: Color::rgb(0xd8, 0xd3, 0xbd),
            placeholder: Color::rgb(0x5a, 0x60, 0x4c),
            density_low: Color::rgb(0x2a, 0x30, 0x22),
            palette: SNAKE_EATER_PALETTE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            grid: Color::rgb(40, 40, 45),
            axis_line: Color::rgb(180, 180, 190),
            axis_label: Color::rgb(235, 235, 245),
            placeholder: Color::rgb(90, 90, 100),
            density_low: Color::rgb(30, 40, 60),
            palette: DARK_PALETTE,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(250, 250, 252),
            grid: Color::rgb(230, 230, 235),
            axis_line: Color::rgb(60, 60, 70),
            axis_label: Color::rgb(20, 20, 30),
            placeholder: Color::rgb(180, 180, 190),
            density_low: Color::rgb(220, 232, 245),
            palette: LIGHT_PALETTE,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::rgb(0, 0, 0),
            grid: Color::rgb(0x22, 0x22, 0x22),
            axis_line: Color::rgb(0xff, 0xff, 0xff),
            axis_label: Color::rgb(0xff, 0xff, 0xff),
            placeholder: Color::rgb(0x88, 0x88, 0x88),
            density_low: Color::rgb(0x10, 0x10, 0x40),
            palette: HIGH_CONTRAST_PALETTE,
        }
    }

    /// Series color for position `i`, cycling through the palette.
    pub fn series_color(&self, i: usize) -> Color {
        self.palette[i % self.palette.len()]
    }

    /// Caller-supplied hex color if it parses, palette color otherwise.
    pub fn resolve(&self, custom: Option<&str>, i: usize) -> Color {
        custom.and_then(Color::parse_hex).unwrap_or_else(|| self.series_color(i))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::snake_eater()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::snake_eater(), Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name` (case-insensitive).
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(Color::parse_hex("#fff"), Some(Color::rgb(255, 255, 255)));
        assert_eq!(Color::parse_hex("#102030"), Some(Color::rgb(16, 32, 48)));
        assert_eq!(Color::parse_hex("#10203080").map(|c| c.a), Some(128));
        assert_eq!(Color::parse_hex("red"), None);
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("LIGHT").map(|t| t.name), Some("light"));
        assert!(find("neon").is_none());
    }
}
