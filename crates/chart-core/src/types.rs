// File: crates/chart-core/src/types.rs
// Summary: Shared layout constants (canvas size, reserved margins, mark sizes).

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: f64 = 400.0;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: f64 = 200.0;

/// Strip reserved below the drawable band for the x-axis caption.
pub const LABEL_MARGIN: f64 = 30.0;
/// Total vertical space reserved outside the drawable band (labels above, caption below).
pub const VERTICAL_MARGIN: f64 = 60.0;

/// Share of each bar slot covered by the bar; the rest is split into two gutters.
pub const BAR_FILL_RATIO: f64 = 0.8;
/// Gap between a bar top and its value label.
pub const LABEL_OFFSET: f64 = 5.0;

pub const MARKER_RADIUS: f64 = 4.0;
pub const LINE_STROKE_WIDTH: f64 = 2.0;

/// Vertical margins around the drawable band, in pixels.
/// Contract: `top + bottom == VERTICAL_MARGIN` for the default layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandMargins {
    pub top: f64,
    pub bottom: f64,
}

impl BandMargins {
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
    /// Total vertical margin (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }

    /// Height of the drawable band for a canvas of `height` pixels, never negative.
    pub fn band_height(&self, height: f64) -> f64 {
        (height - self.vsum()).max(0.0)
    }

    /// Y coordinate of the baseline (bottom edge of the band).
    pub fn baseline(&self, height: f64) -> f64 {
        height - self.bottom
    }
}

impl Default for BandMargins {
    fn default() -> Self {
        Self::new(VERTICAL_MARGIN - LABEL_MARGIN, LABEL_MARGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_margins_reserve_sixty_pixels() {
        let m = BandMargins::default();
        assert_eq!(m.vsum(), 60.0);
        assert_eq!(m.band_height(200.0), 140.0);
        assert_eq!(m.baseline(200.0), 170.0);
    }

    #[test]
    fn band_height_never_negative() {
        assert_eq!(BandMargins::default().band_height(10.0), 0.0);
    }
}
