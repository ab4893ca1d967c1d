// File: crates/chart-core/src/scene.rs
// Summary: Headless, serializable description of one rendered chart.

use serde::{Deserialize, Serialize};

use crate::animation::Entrance;
use crate::geometry::{Point, RectF};
use crate::series::Encoding;
use crate::theme::{ColorToken, Rgb};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Rect,
    Line,
    Circle,
    Polygon,
    Text,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

/// Shape data; which variant is used is fixed by the element kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Geometry {
    Rect(RectF),
    Points { points: Vec<Point> },
    Circle { cx: f64, cy: f64, r: f64 },
    Text { x: f64, y: f64, text: String, anchor: TextAnchor },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type", content = "value")]
pub enum Fill {
    #[default]
    None,
    Color(Rgb),
    /// Reference to a [`GradientDef`] by id.
    Gradient(String),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub fill: Fill,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

impl Style {
    pub fn filled(fill: Fill) -> Self {
        Self { fill, stroke: None, stroke_width: None }
    }
    pub fn stroked(color: Rgb, width: f64) -> Self {
        Self { fill: Fill::None, stroke: Some(color), stroke_width: Some(width) }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    pub geometry: Geometry,
    pub style: Style,
    pub entrance: Entrance,
}

impl Element {
    pub fn rect(rect: RectF, style: Style, entrance: Entrance) -> Self {
        Self { kind: ElementKind::Rect, geometry: Geometry::Rect(rect), style, entrance }
    }

    /// Open polyline.
    pub fn line(points: Vec<Point>, style: Style, entrance: Entrance) -> Self {
        Self { kind: ElementKind::Line, geometry: Geometry::Points { points }, style, entrance }
    }

    pub fn circle(center: Point, r: f64, style: Style, entrance: Entrance) -> Self {
        Self {
            kind: ElementKind::Circle,
            geometry: Geometry::Circle { cx: center.x, cy: center.y, r },
            style,
            entrance,
        }
    }

    /// Closed polygon; the last point connects back to the first.
    pub fn polygon(points: Vec<Point>, style: Style, entrance: Entrance) -> Self {
        Self { kind: ElementKind::Polygon, geometry: Geometry::Points { points }, style, entrance }
    }

    pub fn text(at: Point, text: impl Into<String>, anchor: TextAnchor, style: Style, entrance: Entrance) -> Self {
        Self {
            kind: ElementKind::Text,
            geometry: Geometry::Text { x: at.x, y: at.y, text: text.into(), anchor },
            style,
            entrance,
        }
    }

    /// Every coordinate this element places, in order.
    pub fn coordinates(&self) -> Vec<f64> {
        match &self.geometry {
            Geometry::Rect(r) => vec![r.x, r.y, r.width, r.height],
            Geometry::Points { points } => points.iter().flat_map(|p| [p.x, p.y]).collect(),
            Geometry::Circle { cx, cy, r } => vec![*cx, *cy, *r],
            Geometry::Text { x, y, .. } => vec![*x, *y],
        }
    }

    pub fn points(&self) -> Option<&[Point]> {
        match &self.geometry {
            Geometry::Points { points } => Some(points),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgb,
    pub opacity: f64,
}

/// Vertical (top to bottom) linear gradient.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientDef {
    pub id: String,
    pub stops: Vec<GradientStop>,
}

impl GradientDef {
    /// Color and opacity at `t` in `[0, 1]`, interpolated between neighbouring stops.
    pub fn sample(&self, t: f64) -> Option<(Rgb, f64)> {
        let first = self.stops.first()?;
        let t = t.clamp(0.0, 1.0);
        if t <= first.offset {
            return Some((first.color, first.opacity));
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if t <= b.offset {
                let span = (b.offset - a.offset).max(f64::EPSILON);
                let k = (t - a.offset) / span;
                return Some((a.color.lerp(b.color, k), a.opacity + (b.opacity - a.opacity) * k));
            }
        }
        self.stops.last().map(|s| (s.color, s.opacity))
    }
}

/// Everything a backend needs to draw one chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartScene {
    pub view_box: ViewBox,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub encoding: Encoding,
    pub color: ColorToken,
    pub gradients: Vec<GradientDef>,
    pub elements: Vec<Element>,
}

impl ChartScene {
    /// Scene for an empty series: the container and nothing in it.
    pub fn empty(view_box: ViewBox, encoding: Encoding, color: ColorToken, title: Option<String>) -> Self {
        Self { view_box, title, encoding, color, gradients: Vec::new(), elements: Vec::new() }
    }

    pub fn is_empty(&self) -> bool { self.elements.is_empty() }

    pub fn elements_of(&self, kind: ElementKind) -> impl Iterator<Item = &Element> + '_ {
        self.elements.iter().filter(move |e| e.kind == kind)
    }

    pub fn count(&self, kind: ElementKind) -> usize { self.elements_of(kind).count() }

    pub fn gradient(&self, id: &str) -> Option<&GradientDef> {
        self.gradients.iter().find(|g| g.id == id)
    }

    /// Points of the first polyline, if any.
    pub fn line_points(&self) -> Option<&[Point]> {
        self.elements_of(ElementKind::Line).next().and_then(Element::points)
    }

    /// Points of the first polygon, if any.
    pub fn polygon_points(&self) -> Option<&[Point]> {
        self.elements_of(ElementKind::Polygon).next().and_then(Element::points)
    }

    /// True when every coordinate in the scene is finite.
    pub fn all_finite(&self) -> bool {
        self.elements.iter().all(|e| e.coordinates().iter().all(|v| v.is_finite()))
    }
}
