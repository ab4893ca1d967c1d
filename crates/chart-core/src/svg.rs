// File: crates/chart-core/src/svg.rs
// Summary: Serialize a ChartScene into a standalone SVG document.

use std::fmt::Write as _;
use std::path::Path;

use crate::animation::Entrance;
use crate::error::ChartResult;
use crate::geometry::Point;
use crate::scene::{ChartScene, Element, ElementKind, Fill, Geometry, Style, TextAnchor};

const LABEL_FONT_SIZE: f64 = 11.0;

/// Fade-in referenced by `class="enter"`; per-element timing lives in the inline style.
const ENTER_STYLE: &str = "@keyframes enter{from{opacity:0}to{opacity:1}}\
.enter{animation-name:enter;animation-fill-mode:both;animation-timing-function:ease-out}";

/// Render the scene as SVG text. Element order is scene order (later draws on top).
pub fn to_svg(scene: &ChartScene) -> String {
    let vb = scene.view_box;
    let mut out = String::with_capacity(256 + scene.elements.len() * 96);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" data-encoding="{enc}">"#,
        w = num(vb.width),
        h = num(vb.height),
        enc = scene.encoding,
    );
    if let Some(title) = &scene.title {
        let _ = write!(out, "<title>{}</title>", escape(title));
    }
    if scene.elements.iter().any(|e| !e.entrance.is_static()) {
        let _ = write!(out, "<style>{ENTER_STYLE}</style>");
    }

    if !scene.gradients.is_empty() {
        out.push_str("<defs>");
        for g in &scene.gradients {
            let _ = write!(out, r#"<linearGradient id="{}" x1="0" y1="0" x2="0" y2="1">"#, escape(&g.id));
            for s in &g.stops {
                let _ = write!(
                    out,
                    r#"<stop offset="{}%" stop-color="{}" stop-opacity="{}"/>"#,
                    num(s.offset * 100.0),
                    s.color,
                    num(s.opacity)
                );
            }
            out.push_str("</linearGradient>");
        }
        out.push_str("</defs>");
    }

    for e in &scene.elements {
        write_element(&mut out, e);
    }
    out.push_str("</svg>");
    out
}

/// Write the SVG for `scene` to `path`, creating parent directories.
pub fn write_svg(scene: &ChartScene, path: impl AsRef<Path>) -> ChartResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_svg(scene))?;
    Ok(())
}

fn write_element(out: &mut String, e: &Element) {
    let paint = paint_attrs(&e.style);
    let anim = anim_attrs(&e.entrance);
    match (&e.geometry, e.kind) {
        (Geometry::Rect(r), _) => {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}"{paint}{anim}/>"#,
                num(r.x),
                num(r.y),
                num(r.width),
                num(r.height)
            );
        }
        (Geometry::Points { points }, ElementKind::Polygon) => {
            let _ = write!(out, r#"<polygon points="{}"{paint}{anim}/>"#, point_list(points));
        }
        (Geometry::Points { points }, _) => {
            let _ = write!(
                out,
                r#"<polyline points="{}"{paint} stroke-linecap="round" stroke-linejoin="round"{anim}/>"#,
                point_list(points)
            );
        }
        (Geometry::Circle { cx, cy, r }, _) => {
            let _ = write!(out, r#"<circle cx="{}" cy="{}" r="{}"{paint}{anim}/>"#, num(*cx), num(*cy), num(*r));
        }
        (Geometry::Text { x, y, text, anchor }, _) => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" text-anchor="{anchor}" font-size="{}"{paint}{anim}>{}</text>"#,
                num(*x),
                num(*y),
                num(LABEL_FONT_SIZE),
                escape(text)
            );
        }
    }
}

fn paint_attrs(style: &Style) -> String {
    let mut s = String::new();
    match &style.fill {
        Fill::None => s.push_str(r#" fill="none""#),
        Fill::Color(c) => {
            let _ = write!(s, r#" fill="{c}""#);
        }
        Fill::Gradient(id) => {
            let _ = write!(s, r#" fill="url(#{})""#, escape(id));
        }
    }
    if let Some(c) = style.stroke {
        let _ = write!(s, r#" stroke="{c}""#);
    }
    if let Some(w) = style.stroke_width {
        let _ = write!(s, r#" stroke-width="{}""#, num(w));
    }
    s
}

fn anim_attrs(e: &Entrance) -> String {
    if e.is_static() {
        return String::new();
    }
    format!(
        r#" class="enter" style="animation-delay:{}s;animation-duration:{}s""#,
        num(e.delay_secs),
        num(e.duration_secs)
    )
}

fn point_list(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", num(p.x), num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compact number formatting: integers without a fraction, others to 3 decimals.
fn num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{}", v as i64);
    }
    let s = format!("{v:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_is_compact() {
        assert_eq!(num(30.0), "30");
        assert_eq!(num(133.33333), "133.333");
        assert_eq!(num(0.5), "0.5");
        assert_eq!(num(-0.0), "0");
    }

    #[test]
    fn escape_markup() {
        assert_eq!(escape(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn static_entrance_has_no_style() {
        assert!(anim_attrs(&Entrance::STATIC).is_empty());
        let a = anim_attrs(&Entrance::new(0.2, 0.5));
        assert!(a.contains("animation-delay:0.2s"));
        assert!(a.contains("animation-duration:0.5s"));
    }
}
