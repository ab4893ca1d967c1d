// File: crates/dashboard/src/panel.rs
// Summary: Serializable panel view-model and its chart scene.

//! Panel view-model

use bastion_chart::{render, ChartOptions, ChartScene, ColorToken, Encoding, Series};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum PanelStatus {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

/// One chart card on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelState {
    pub id: String,
    pub title: String,
    pub encoding: Encoding,
    pub color: ColorToken,
    pub series: Series,
    pub refreshed_at: Option<DateTime<Utc>>,
    pub status: PanelStatus,
}

impl PanelState {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        encoding: Encoding,
        color: ColorToken,
        series: impl Into<Series>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            encoding,
            color,
            series: series.into(),
            refreshed_at: None,
            status: PanelStatus::Idle,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == PanelStatus::Loading
    }

    /// Lay out the panel's chart. Size and animation come from `base`;
    /// color and title are the panel's own.
    pub fn scene(&self, base: &ChartOptions) -> ChartScene {
        let opts = ChartOptions { color: self.color, title: Some(self.title.clone()), ..base.clone() };
        render(&self.series, self.encoding, &opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bastion_chart::ElementKind;

    #[test]
    fn scene_uses_panel_color_and_title() {
        let p = PanelState::new("cpu", "CPU load", Encoding::Line, ColorToken::Cyan, vec![1.0, 3.0, 2.0]);
        let scene = p.scene(&ChartOptions::default().with_color("red"));
        assert_eq!(scene.color, ColorToken::Cyan);
        assert_eq!(scene.title.as_deref(), Some("CPU load"));
        assert_eq!(scene.count(ElementKind::Circle), 3);
    }

    #[test]
    fn status_serializes_tagged() {
        let s = serde_json::to_string(&PanelStatus::Failed("boom".into())).unwrap();
        assert_eq!(s, r#"{"state":"failed","message":"boom"}"#);
        assert_eq!(serde_json::to_string(&PanelStatus::Idle).unwrap(), r#"{"state":"idle"}"#);
    }
}
