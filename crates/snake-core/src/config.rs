// File: crates/snake-core/src/config.rs
// Summary: TOML chart configuration with validation at the load boundary.
// Notes:
// - Strict mode (debug builds) rejects an invalid config; release builds log a
//   warning and reset each offending field to its default.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::bar::Orientation;
use crate::error::{Error, Result};
use crate::path::Curve;
use crate::stream::StreamOffset;
use crate::theme::{self, Theme};
use crate::types::PixelRect;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    pub curve: Curve,
    pub theme: String,
    pub show_points: bool,
    pub fill_area: bool,
    pub grid_levels: usize,
    pub hex_radius: f64,
    pub inner_radius_fraction: f64,
    pub segment_gap: f64,
    pub bar_padding: f64,
    pub orientation: Orientation,
    pub max_ridges: usize,
    pub ridge_overlap: f64,
    pub scroll_interval_ms: u64,
    pub stream_offset: StreamOffset,
}

impl Default for ChartConfig {
    fn default() -> Self {
        let rect = PixelRect::default();
        Self {
            width: rect.width,
            height: rect.height,
            margin_top: rect.margin_top,
            margin_right: rect.margin_right,
            margin_bottom: rect.margin_bottom,
            margin_left: rect.margin_left,
            curve: Curve::Linear,
            theme: Theme::default().name.to_string(),
            show_points: true,
            fill_area: false,
            grid_levels: 5,
            hex_radius: 12.0,
            inner_radius_fraction: 0.6,
            segment_gap: 0.0,
            bar_padding: 0.2,
            orientation: Orientation::Vertical,
            max_ridges: 8,
            ridge_overlap: 0.5,
            scroll_interval_ms: 1000,
            stream_offset: StreamOffset::Silhouette,
        }
    }
}

/// Whether invalid configuration is an error (debug builds) or repaired with a warning.
pub fn strict_validation() -> bool {
    cfg!(debug_assertions)
}

impl ChartConfig {
    /// Parse and validate using the build-mode policy.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: ChartConfig = toml::from_str(s)?;
        cfg.validated(strict_validation())
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        let cfg = Self::from_toml_str(&content)?;
        debug!("Loaded chart config from {:?}", path);
        Ok(cfg)
    }

    /// Every problem found, without modifying the config.
    pub fn validate(&self) -> Vec<Error> {
        self.clone().check(false)
    }

    /// `strict`: fail on the first problem. Otherwise reset bad fields to defaults.
    pub fn validated(mut self, strict: bool) -> Result<Self> {
        let issues = self.check(!strict);
        if strict {
            if let Some(first) = issues.into_iter().next() {
                return Err(first);
            }
        } else {
            for issue in &issues {
                warn!("{issue}; using default");
            }
        }
        Ok(self)
    }

    fn check(&mut self, repair: bool) -> Vec<Error> {
        let d = Self::default();
        let mut issues = Vec::new();
        let cfg = &mut *self;
        macro_rules! rule {
            ($field:ident, $ok:expr, $msg:expr) => {
                if !$ok {
                    issues.push(Error::invalid_config(stringify!($field), format!("{} (got {:?})", $msg, cfg.$field)));
                    if repair {
                        cfg.$field = d.$field.clone();
                    }
                }
            };
        }
        rule!(width, cfg.width.is_finite() && cfg.width > 0.0, "must be a positive number");
        rule!(height, cfg.height.is_finite() && cfg.height > 0.0, "must be a positive number");
        rule!(margin_top, cfg.margin_top >= 0.0, "must not be negative");
        rule!(margin_right, cfg.margin_right >= 0.0, "must not be negative");
        rule!(margin_bottom, cfg.margin_bottom >= 0.0, "must not be negative");
        rule!(margin_left, cfg.margin_left >= 0.0, "must not be negative");
        rule!(theme, theme::find(&cfg.theme).is_some(), "unknown theme");
        rule!(grid_levels, cfg.grid_levels >= 1, "must be at least 1");
        rule!(hex_radius, cfg.hex_radius.is_finite() && cfg.hex_radius > 0.0, "must be a positive number");
        rule!(
            inner_radius_fraction,
            (0.0..1.0).contains(&cfg.inner_radius_fraction),
            "must be in [0, 1)"
        );
        rule!(segment_gap, cfg.segment_gap.is_finite() && cfg.segment_gap >= 0.0, "must not be negative");
        rule!(bar_padding, (0.0..1.0).contains(&cfg.bar_padding), "must be in [0, 1)");
        rule!(max_ridges, cfg.max_ridges >= 1, "must be at least 1");
        rule!(ridge_overlap, cfg.ridge_overlap.is_finite() && cfg.ridge_overlap >= 0.0, "must not be negative");
        rule!(scroll_interval_ms, cfg.scroll_interval_ms >= 1, "must be at least 1 ms");
        if cfg.plot_width() <= 0.0 || cfg.plot_height() <= 0.0 {
            issues.push(Error::invalid_config("margins", "margins leave no plot area"));
            if repair {
                cfg.margin_top = d.margin_top;
                cfg.margin_right = d.margin_right;
                cfg.margin_bottom = d.margin_bottom;
                cfg.margin_left = d.margin_left;
            }
        }
        issues
    }

    fn plot_width(&self) -> f64 { self.width - self.margin_left - self.margin_right }
    fn plot_height(&self) -> f64 { self.height - self.margin_top - self.margin_bottom }

    pub fn rect(&self) -> PixelRect {
        PixelRect::new(self.width, self.height).with_margins(self.margin_top, self.margin_right, self.margin_bottom, self.margin_left)
    }

    pub fn theme(&self) -> Theme {
        theme::find(&self.theme).unwrap_or_default()
    }

    pub fn scroll_interval(&self) -> Duration {
        Duration::from_millis(self.scroll_interval_ms)
    }
}
