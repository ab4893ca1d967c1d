// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the series model, layout and scene/SVG output.

pub mod animation;
pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod scale;
pub mod scene;
pub mod series;
pub mod svg;
pub mod theme;
pub mod types;

pub use animation::{AnimationTiming, Entrance};
pub use chart::{render, Chart, ChartOptions};
pub use config::ChartConfig;
pub use error::{ChartError, ChartResult, SeriesError};
pub use geometry::{Point, RectF};
pub use scene::{ChartScene, Element, ElementKind, Fill, Geometry, GradientDef, GradientStop, Style, ViewBox};
pub use series::{Encoding, Series};
pub use svg::{to_svg, write_svg};
pub use theme::{ColorToken, GradientPair, Rgb};
