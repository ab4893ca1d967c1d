// File: crates/chart-core/src/config.rs
// Summary: TOML chart configuration (size, palette, encoding, animation timing).
//
// Example:
//
//   [chart]
//   width = 400
//   height = 200
//   color = "cyan"
//   encoding = "area"
//   animate = true
//   title = "Threats blocked"
//
//   [animation]
//   stagger_secs = 0.1

use std::path::Path;

use serde::Deserialize;

use crate::animation::AnimationTiming;
use crate::chart::ChartOptions;
use crate::error::{ChartError, ChartResult};
use crate::series::Encoding;
use crate::theme::ColorToken;
use crate::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub chart: ChartSection,

    #[serde(default)]
    pub animation: AnimationTiming,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartSection {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,

    /// Palette token name; unknown names fall back to red.
    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub encoding: Option<String>,

    #[serde(default = "default_animate")]
    pub animate: bool,

    #[serde(default)]
    pub title: Option<String>,
}

fn default_width() -> f64 {
    DEFAULT_WIDTH
}

fn default_height() -> f64 {
    DEFAULT_HEIGHT
}

fn default_color() -> String {
    ColorToken::default().name().to_string()
}

fn default_animate() -> bool {
    true
}

impl Default for ChartSection {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            color: default_color(),
            encoding: None,
            animate: default_animate(),
            title: None,
        }
    }
}

impl ChartConfig {
    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> ChartResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let cfg = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded chart config");
        Ok(cfg)
    }

    pub fn from_toml_str(text: &str) -> ChartResult<Self> {
        let cfg: ChartConfig = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> ChartResult<()> {
        let c = &self.chart;
        for (name, v) in [("width", c.width), ("height", c.height)] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ChartError::InvalidConfig(format!("chart.{name} must be a positive number, got {v}")));
            }
        }
        let t = &self.animation;
        for (name, v) in [
            ("stagger_secs", t.stagger_secs),
            ("bar_duration_secs", t.bar_duration_secs),
            ("line_duration_secs", t.line_duration_secs),
            ("marker_duration_secs", t.marker_duration_secs),
            ("area_duration_secs", t.area_duration_secs),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ChartError::InvalidConfig(format!("animation.{name} must be >= 0, got {v}")));
            }
        }
        if let Some(e) = &self.chart.encoding {
            e.parse::<Encoding>()?;
        }
        Ok(())
    }

    /// Encoding named in the file, if any.
    pub fn encoding(&self) -> ChartResult<Option<Encoding>> {
        self.chart.encoding.as_deref().map(str::parse::<Encoding>).transpose()
    }

    pub fn to_options(&self) -> ChartOptions {
        ChartOptions {
            width: self.chart.width,
            height: self.chart.height,
            color: ColorToken::parse_lossy(&self.chart.color),
            animate: self.chart.animate,
            title: self.chart.title.clone(),
            timing: self.animation,
            ..ChartOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = ChartConfig::from_toml_str("").unwrap();
        let opts = cfg.to_options();
        assert_eq!(opts, ChartOptions::default());
        assert!(cfg.encoding().unwrap().is_none());
    }

    #[test]
    fn full_file_overrides() {
        let cfg = ChartConfig::from_toml_str(
            r#"
            [chart]
            width = 640
            height = 320
            color = "Purple"
            encoding = "area"
            animate = false
            title = "Fraud score"

            [animation]
            stagger_secs = 0.05
            "#,
        )
        .unwrap();
        let opts = cfg.to_options();
        assert_eq!(opts.width, 640.0);
        assert_eq!(opts.height, 320.0);
        assert_eq!(opts.color, ColorToken::Purple);
        assert!(!opts.animate);
        assert_eq!(opts.title.as_deref(), Some("Fraud score"));
        assert_eq!(opts.timing.stagger_secs, 0.05);
        assert_eq!(opts.timing.bar_duration_secs, 0.5);
        assert_eq!(cfg.encoding().unwrap(), Some(Encoding::Area));
    }

    #[test]
    fn unknown_color_is_not_an_error() {
        let cfg = ChartConfig::from_toml_str("[chart]\ncolor = \"magenta\"\n").unwrap();
        assert_eq!(cfg.to_options().color, ColorToken::Red);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            ChartConfig::from_toml_str("[chart]\nwidth = 0\n"),
            Err(ChartError::InvalidConfig(_))
        ));
        assert!(matches!(
            ChartConfig::from_toml_str("[animation]\nstagger_secs = -1.0\n"),
            Err(ChartError::InvalidConfig(_))
        ));
        assert!(matches!(
            ChartConfig::from_toml_str("[chart]\nencoding = \"pie\"\n"),
            Err(ChartError::UnknownEncoding(_))
        ));
        assert!(matches!(ChartConfig::from_toml_str("[chart\n"), Err(ChartError::Config(_))));
    }
}
