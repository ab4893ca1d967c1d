// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    pub fn is_finite(&self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self { Self::new(x, y) }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectF {
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
    pub fn right(&self) -> f64 { self.x + self.width }
    pub fn bottom(&self) -> f64 { self.y + self.height }
    pub fn center_x(&self) -> f64 { self.x + self.width / 2.0 }
}

/// Axis-aligned bounds of a point set; `None` when empty.
pub fn bounds(points: &[Point]) -> Option<RectF> {
    let first = points.first()?;
    let (mut l, mut t, mut r, mut b) = (first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        l = l.min(p.x);
        t = t.min(p.y);
        r = r.max(p.x);
        b = b.max(p.y);
    }
    Some(RectF::from_xywh(l, t, r - l, b - t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_triangle() {
        let pts = [Point::new(0.0, 10.0), Point::new(5.0, 2.0), Point::new(3.0, 7.0)];
        let r = bounds(&pts).unwrap();
        assert_eq!(r, RectF::from_xywh(0.0, 2.0, 5.0, 8.0));
        assert_eq!(r.right(), 5.0);
        assert_eq!(r.bottom(), 10.0);
        assert!(bounds(&[]).is_none());
    }
}
