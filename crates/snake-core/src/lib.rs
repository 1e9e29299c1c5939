// File: crates/snake-core/src/lib.rs
// Summary: Core library entry point; exports the geometry, scene and supervision API.

pub mod types;
pub mod error;
pub mod grid;
pub mod scale;
pub mod series;
pub mod path;
pub mod radial;
pub mod donut;
pub mod hexbin;
pub mod window;
pub mod live;
pub mod bar;
pub mod ridgeline;
pub mod stream;
pub mod axis;
pub mod theme;
pub mod scene;
pub mod svg;
pub mod chart;
pub mod events;
pub mod report;
pub mod supervisor;
pub mod config;

pub use types::{Domain, PixelRect, Point};
pub use error::{Error, Result};
pub use scale::{scale, BandScale, LinearScale, ScaleTransform};
pub use series::{Datum, Series};
pub use path::{build_band_path, build_fill_path, build_path, build_polygon, Curve, PathData};
pub use radial::{layout_radial, RadialVertex, SpiderGeometry, SpiderLayout};
pub use donut::{layout_donut, DonutLayout, DonutSegment};
pub use hexbin::{bin_hexagonal, HexBin, HexbinLayout};
pub use window::SlidingWindow;
pub use live::{LiveWindow, Slot, StreamState};
pub use bar::{BarLayout, BarRect, Orientation};
pub use ridgeline::{Ridge, RidgelineLayout};
pub use stream::{StreamLayout, StreamOffset};
pub use axis::{Axis, Formatter};
pub use theme::{Color, Theme};
pub use scene::{HitTarget, Scene};
pub use svg::to_svg;
pub use chart::ChartOptions;
pub use events::{dispatch_click, Callbacks, ChartEvents, HoverState};
pub use report::{ErrorLog, Level, LogEntry, SubscriptionId};
pub use supervisor::{BoundaryState, Rendered, Supervisor};
pub use config::ChartConfig;
