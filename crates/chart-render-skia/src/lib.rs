// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster backend for ChartScene (PNG bytes / files).

use anyhow::{anyhow, Result};
use bastion_chart::geometry::bounds;
use bastion_chart::scene::TextAnchor;
use bastion_chart::{ChartScene, Element, ElementKind, Fill, Geometry, GradientDef, Point, Rgb, Style};
use skia_safe as skia;

const LABEL_FONT_SIZE: f32 = 11.0;

#[derive(Clone, Copy, Debug)]
pub struct RasterOptions {
    pub background: Rgb,
    pub draw_labels: bool,
    /// Device pixels per scene unit.
    pub scale: f32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            background: Rgb::new(18, 18, 20), // near-black
            draw_labels: true,
            scale: 1.0,
        }
    }
}

pub struct SkiaRenderer {
    opts: RasterOptions,
}

impl SkiaRenderer {
    pub fn new(opts: RasterOptions) -> Self { Self { opts } }

    pub fn options(&self) -> &RasterOptions { &self.opts }

    /// Pixel size of the image produced for `scene`.
    pub fn pixel_size(&self, scene: &ChartScene) -> (i32, i32) {
        let s = self.opts.scale.max(0.01);
        let w = (scene.view_box.width as f32 * s).ceil().max(1.0) as i32;
        let h = (scene.view_box.height as f32 * s).ceil().max(1.0) as i32;
        (w, h)
    }

    /// Rasterize `scene` and encode it as PNG.
    pub fn render_png_bytes(&self, scene: &ChartScene) -> Result<Vec<u8>> {
        let (w, h) = self.pixel_size(scene);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;
        let canvas = surface.canvas();

        canvas.clear(color(self.opts.background, 1.0));
        canvas.scale((self.opts.scale, self.opts.scale));

        for e in &scene.elements {
            self.draw_element(canvas, scene, e);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG file at `path`, creating parent directories.
    pub fn render_png(&self, scene: &ChartScene, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_png_bytes(scene)?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn draw_element(&self, canvas: &skia::Canvas, scene: &ChartScene, e: &Element) {
        match &e.geometry {
            Geometry::Rect(r) => {
                if r.width <= 0.0 || r.height <= 0.0 {
                    return;
                }
                let corners = [
                    Point::new(r.x, r.y),
                    Point::new(r.right(), r.y),
                    Point::new(r.right(), r.bottom()),
                    Point::new(r.x, r.bottom()),
                ];
                let path = path_of(&corners, true);
                fill_path(canvas, scene, &path, &corners, &e.style.fill);
                stroke_path(canvas, &path, &e.style);
            }
            Geometry::Points { points } => {
                let closed = e.kind == ElementKind::Polygon;
                let path = path_of(points, closed);
                if closed {
                    fill_path(canvas, scene, &path, points, &e.style.fill);
                }
                stroke_path(canvas, &path, &e.style);
            }
            Geometry::Circle { cx, cy, r } => {
                let fill = match &e.style.fill {
                    Fill::None => None,
                    Fill::Color(c) => Some(color(*c, 1.0)),
                    Fill::Gradient(id) => scene
                        .gradient(id)
                        .and_then(|g| g.sample(0.0))
                        .map(|(c, a)| color(c, a)),
                };
                if let Some(c) = fill {
                    let mut paint = skia::Paint::default();
                    paint.set_anti_alias(true);
                    paint.set_color(c);
                    canvas.draw_circle((*cx as f32, *cy as f32), *r as f32, &paint);
                }
            }
            Geometry::Text { x, y, text, anchor } => {
                if !self.opts.draw_labels {
                    return;
                }
                let c = match &e.style.fill {
                    Fill::Color(c) => *c,
                    _ => Rgb::new(235, 235, 245),
                };
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_color(color(c, 1.0));
                let mut font = skia::Font::default();
                font.set_size(LABEL_FONT_SIZE);
                let (advance, _) = font.measure_str(text, Some(&paint));
                let left = match anchor {
                    TextAnchor::Start => *x as f32,
                    TextAnchor::Middle => *x as f32 - advance * 0.5,
                    TextAnchor::End => *x as f32 - advance,
                };
                canvas.draw_str(text, (left, *y as f32), &font, &paint);
            }
        }
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new(RasterOptions::default()) }
}

/// Convenience wrapper using default raster options.
pub fn render_png_bytes(scene: &ChartScene) -> Result<Vec<u8>> {
    SkiaRenderer::default().render_png_bytes(scene)
}

// ---- helpers ----------------------------------------------------------------

fn color(c: Rgb, opacity: f64) -> skia::Color {
    let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    skia::Color::from_argb(a, c.r, c.g, c.b)
}

fn path_of(points: &[Point], close: bool) -> skia::Path {
    let mut path = skia::Path::new();
    if let Some((first, rest)) = points.split_first() {
        path.move_to((first.x as f32, first.y as f32));
        for p in rest {
            path.line_to((p.x as f32, p.y as f32));
        }
        if close {
            path.close();
        }
    }
    path
}

fn fill_path(canvas: &skia::Canvas, scene: &ChartScene, path: &skia::Path, points: &[Point], fill: &Fill) {
    match fill {
        Fill::None => {}
        Fill::Color(c) => {
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_style(skia::paint::Style::Fill);
            paint.set_color(color(*c, 1.0));
            canvas.draw_path(path, &paint);
        }
        Fill::Gradient(id) => match (scene.gradient(id), bounds(points)) {
            (Some(g), Some(b)) => fill_vertical_gradient(canvas, path, b.y, b.bottom(), g),
            (None, _) => tracing::warn!(gradient = %id, "fill references an unknown gradient; skipping"),
            _ => {}
        },
    }
}

/// Top-to-bottom linear gradient across the shape's bounds.
fn fill_vertical_gradient(canvas: &skia::Canvas, path: &skia::Path, top: f64, bottom: f64, g: &GradientDef) {
    let colors: Vec<skia::Color> = g.stops.iter().map(|s| color(s.color, s.opacity)).collect();
    let offsets: Vec<f32> = g.stops.iter().map(|s| s.offset.clamp(0.0, 1.0) as f32).collect();
    let span = (skia::Point::new(0.0, top as f32), skia::Point::new(0.0, bottom as f32));

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    match skia::Shader::linear_gradient(
        span,
        skia::gradient_shader::GradientShaderColors::Colors(&colors[..]),
        Some(&offsets[..]),
        skia::TileMode::Clamp,
        None,
        None,
    ) {
        Some(shader) => {
            paint.set_shader(shader);
        }
        None => {
            // degenerate span (zero height): first stop as a flat fill
            let Some(first) = colors.first() else { return };
            paint.set_color(*first);
        }
    }
    canvas.draw_path(path, &paint);
}

fn stroke_path(canvas: &skia::Canvas, path: &skia::Path, style: &Style) {
    let Some(c) = style.stroke else { return };
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(style.stroke_width.unwrap_or(1.0) as f32);
    stroke.set_stroke_cap(skia::paint::Cap::Round);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_color(color(c, 1.0));
    canvas.draw_path(path, &stroke);
}
