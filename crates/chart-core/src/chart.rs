// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and the bar/line/area layout pipeline producing a ChartScene.

use crate::animation::{AnimationTiming, Mark, Scheduler};
use crate::geometry::{Point, RectF};
use crate::scale::{PointScale, SlotScale, ValueScale};
use crate::scene::{ChartScene, Element, Fill, GradientDef, GradientStop, Style, TextAnchor, ViewBox};
use crate::series::{Encoding, Series};
use crate::theme::{ColorToken, GradientPair};
use crate::types::{BandMargins, DEFAULT_HEIGHT, DEFAULT_WIDTH, LABEL_OFFSET, LINE_STROKE_WIDTH, MARKER_RADIUS};

#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub width: f64,
    pub height: f64,
    pub color: ColorToken,
    pub animate: bool,
    pub title: Option<String>,
    pub timing: AnimationTiming,
    pub margins: BandMargins,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            color: ColorToken::default(),
            animate: true,
            title: None,
            timing: AnimationTiming::default(),
            margins: BandMargins::default(),
        }
    }
}

impl ChartOptions {
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_color(mut self, color: impl Into<ColorToken>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Canvas size as laid out: non-finite or negative dimensions read as 0.
    pub fn canvas(&self) -> (f64, f64) {
        let dim = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        (dim(self.width), dim(self.height))
    }

    fn view_box(&self) -> ViewBox {
        let (width, height) = self.canvas();
        ViewBox { width, height }
    }
}

/// A series bound to an encoding, ready to be laid out.
#[derive(Clone, Debug, Default)]
pub struct Chart {
    pub series: Series,
    pub encoding: Encoding,
}

impl Chart {
    pub fn new(series: impl Into<Series>, encoding: Encoding) -> Self {
        Self { series: series.into(), encoding }
    }

    pub fn render(&self, opts: &ChartOptions) -> ChartScene {
        render(&self.series, self.encoding, opts)
    }
}

/// Lay out `series` with `encoding`. Pure: the same inputs always give the same scene.
pub fn render(series: &Series, encoding: Encoding, opts: &ChartOptions) -> ChartScene {
    if series.is_empty() {
        tracing::debug!(%encoding, "empty series, rendering placeholder container");
        return ChartScene::empty(opts.view_box(), encoding, opts.color, opts.title.clone());
    }

    let (width, height) = opts.canvas();
    if (width, height) != (opts.width, opts.height) {
        tracing::warn!(width = opts.width, height = opts.height, "unusable canvas size, clamping to 0");
    }
    let values = series.sanitized();
    let scale = ValueScale::new(height, series.max(), opts.margins);
    let sched = Scheduler::new(opts.animate, opts.timing);
    let pair = opts.color.gradient();

    let mut scene = ChartScene::empty(opts.view_box(), encoding, opts.color, opts.title.clone());
    match encoding {
        Encoding::Bar => layout_bars(&mut scene, &values, &scale, &sched, width, opts.color, pair),
        Encoding::Line => layout_line(&mut scene, &values, &scale, &sched, width, pair),
        Encoding::Area => layout_area(&mut scene, &values, &scale, &sched, width, opts.color, pair),
    }
    scene
}

// ---- layouts -----------------------------------------------------------------

fn layout_bars(
    scene: &mut ChartScene,
    values: &[f64],
    scale: &ValueScale,
    sched: &Scheduler,
    width: f64,
    color: ColorToken,
    pair: GradientPair,
) {
    let slots = SlotScale::new(width, values.len());

    for (i, &v) in values.iter().enumerate() {
        let bar_height = scale.extent(v);
        let x = slots.to_px(i);
        let y = scale.to_px(v);

        // One gradient per bar so a single bar can be recolored without touching the rest.
        let id = format!("gradient{}{}", color, i);
        scene.gradients.push(GradientDef {
            id: id.clone(),
            stops: vec![
                GradientStop { offset: 0.0, color: pair.start, opacity: 1.0 },
                GradientStop { offset: 1.0, color: pair.end, opacity: 1.0 },
            ],
        });

        let rect = RectF::from_xywh(x, y, slots.bar_width, bar_height);
        scene.elements.push(Element::rect(rect, Style::filled(Fill::Gradient(id)), sched.entrance(Mark::Bar, i)));
        scene.elements.push(Element::text(
            Point::new(rect.center_x(), y - LABEL_OFFSET),
            format_value(v),
            TextAnchor::Middle,
            Style::filled(Fill::Color(pair.start)),
            sched.entrance(Mark::Label, i),
        ));
    }
}

fn layout_line(
    scene: &mut ChartScene,
    values: &[f64],
    scale: &ValueScale,
    sched: &Scheduler,
    width: f64,
    pair: GradientPair,
) {
    let (path, markers) = trace_points(values, scale, width);
    scene.elements.push(Element::line(
        path,
        Style::stroked(pair.start, LINE_STROKE_WIDTH),
        sched.entrance(Mark::Line, 0),
    ));
    push_markers(scene, &markers, sched, pair);
}

fn layout_area(
    scene: &mut ChartScene,
    values: &[f64],
    scale: &ValueScale,
    sched: &Scheduler,
    width: f64,
    color: ColorToken,
    pair: GradientPair,
) {
    let (path, markers) = trace_points(values, scale, width);

    let id = format!("areaGradient{}", color);
    scene.gradients.push(GradientDef {
        id: id.clone(),
        stops: vec![
            GradientStop { offset: 0.0, color: pair.start, opacity: 0.4 },
            GradientStop { offset: 1.0, color: pair.end, opacity: 0.1 },
        ],
    });

    // Area is the line path closed along the baseline.
    let baseline = scale.baseline_px();
    let mut polygon = path.clone();
    polygon.push(Point::new(width, baseline));
    polygon.push(Point::new(0.0, baseline));

    scene.elements.push(Element::polygon(polygon, Style::filled(Fill::Gradient(id)), sched.entrance(Mark::Area, 0)));
    scene.elements.push(Element::line(
        path,
        Style::stroked(pair.start, LINE_STROKE_WIDTH),
        sched.entrance(Mark::Line, 0),
    ));
    push_markers(scene, &markers, sched, pair);
}

/// Polyline vertices and marker centers for line-like encodings.
/// A single sample becomes a flat segment across the canvas with one centered marker.
fn trace_points(values: &[f64], scale: &ValueScale, width: f64) -> (Vec<Point>, Vec<Point>) {
    if let [only] = values {
        tracing::debug!(width, "single-sample series, drawing a flat segment");
        let y = scale.to_px(*only);
        let path = vec![Point::new(0.0, y), Point::new(width, y)];
        return (path, vec![Point::new(width / 2.0, y)]);
    }
    let xs = PointScale::new(width, values.len());
    let path: Vec<Point> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| Point::new(xs.to_px(i), scale.to_px(v)))
        .collect();
    (path.clone(), path)
}

fn push_markers(scene: &mut ChartScene, markers: &[Point], sched: &Scheduler, pair: GradientPair) {
    for (i, &p) in markers.iter().enumerate() {
        scene.elements.push(Element::circle(
            p,
            MARKER_RADIUS,
            Style::filled(Fill::Color(pair.start)),
            sched.entrance(Mark::Marker, i),
        ));
    }
}

/// Label text: integers without decimals, everything else with at most two.
pub fn format_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{}", v as i64);
    }
    let s = format!("{v:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ElementKind;

    #[test]
    fn format_value_trims() {
        assert_eq!(format_value(52.0), "52");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(3.5), "3.5");
        assert_eq!(format_value(2.126), "2.13");
        assert_eq!(format_value(1.004), "1");
    }

    #[test]
    fn format_value_large_magnitudes_do_not_saturate() {
        assert_eq!(format_value(1e19), "10000000000000000000");
        assert_eq!(format_value(123456789012.0), "123456789012");
    }

    #[test]
    fn unusable_canvas_size_stays_finite() {
        let s = Series::new(vec![4.0, 9.0, 2.0]);
        for (w, h) in [(f64::NAN, 200.0), (400.0, -5.0), (f64::INFINITY, f64::NAN)] {
            let opts = ChartOptions::default().with_size(w, h);
            for enc in Encoding::ALL {
                let scene = render(&s, enc, &opts);
                assert!(scene.all_finite(), "{enc} at {w}x{h}");
                assert!(scene.view_box.width.is_finite() && scene.view_box.height.is_finite());
            }
        }
    }

    #[test]
    fn bar_gradient_ids_are_per_bar() {
        let opts = ChartOptions::default().with_color("cyan");
        let scene = render(&Series::new(vec![1.0, 2.0, 3.0]), Encoding::Bar, &opts);
        let ids: Vec<&str> = scene.gradients.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["gradientcyan0", "gradientcyan1", "gradientcyan2"]);
        assert_eq!(scene.count(ElementKind::Rect), 3);
        assert_eq!(scene.count(ElementKind::Text), 3);
    }

    #[test]
    fn line_has_marker_per_point() {
        let scene = render(&Series::new(vec![1.0, 4.0, 2.0, 8.0]), Encoding::Line, &ChartOptions::default());
        assert_eq!(scene.count(ElementKind::Line), 1);
        assert_eq!(scene.count(ElementKind::Circle), 4);
        assert!(scene.gradients.is_empty());
    }

    #[test]
    fn area_polygon_closes_on_baseline() {
        let scene = render(&Series::new(vec![10.0, 20.0, 5.0]), Encoding::Area, &ChartOptions::default());
        let poly = scene.polygon_points().unwrap();
        assert_eq!(poly.len(), 5);
        assert_eq!(poly[3], Point::new(400.0, 170.0));
        assert_eq!(poly[4], Point::new(0.0, 170.0));
        let g = scene.gradient("areaGradientred").unwrap();
        assert_eq!(g.stops[0].opacity, 0.4);
        assert_eq!(g.stops[1].opacity, 0.1);
    }

    #[test]
    fn chart_struct_delegates_to_render() {
        let chart = Chart::new(vec![3.0, 1.0], Encoding::Line);
        let opts = ChartOptions::default();
        assert_eq!(chart.render(&opts), render(&chart.series, Encoding::Line, &opts));
    }
}
