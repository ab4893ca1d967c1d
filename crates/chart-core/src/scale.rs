// File: crates/chart-core/src/scale.rs
// Summary: Value (Y) and index (X) scale transforms for bar and point layouts.

use crate::types::{BandMargins, BAR_FILL_RATIO};

/// Vertical scale mapping `[0, max]` onto the drawable band, baseline at the bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub height: f64,
    pub margins: BandMargins,
    denom: f64,
}

impl ValueScale {
    pub fn new(height: f64, max: f64, margins: BandMargins) -> Self {
        // max == 0 means every sample is 0; any positive denominator draws them flat.
        let denom = if max > 0.0 && max.is_finite() {
            max
        } else {
            tracing::debug!(max, "degenerate value scale, using denominator 1");
            1.0
        };
        Self { height, margins, denom }
    }

    /// Scale denominator actually in use (never 0).
    pub fn denominator(&self) -> f64 { self.denom }

    /// Pixel length of a sample measured up from the baseline.
    #[inline]
    pub fn extent(&self, value: f64) -> f64 {
        (value / self.denom) * self.margins.band_height(self.height)
    }

    #[inline]
    pub fn to_px(&self, value: f64) -> f64 {
        self.height - self.extent(value) - self.margins.bottom
    }

    #[inline]
    pub fn baseline_px(&self) -> f64 {
        self.margins.baseline(self.height)
    }
}

/// Horizontal layout for bars: equal integer-width slots with centered gutters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotScale {
    pub slot_width: f64,
    pub bar_width: f64,
    pub spacing: f64,
}

impl SlotScale {
    /// Contract: `count >= 1`. Slots are whole pixels unless a whole-pixel
    /// slot would leave a zero-width bar (under 2 px per slot); then slots
    /// stay fractional so bars keep their order and a visible width.
    pub fn new(width: f64, count: usize) -> Self {
        let raw = width / count.max(1) as f64;
        if raw < 2.0 {
            let bar_width = raw * BAR_FILL_RATIO;
            return Self { slot_width: raw, bar_width, spacing: (raw - bar_width) / 2.0 };
        }
        let slot_width = raw.floor();
        let bar_width = (slot_width * BAR_FILL_RATIO).floor();
        let spacing = ((slot_width - bar_width) / 2.0).floor();
        Self { slot_width, bar_width, spacing }
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        index as f64 * self.slot_width + self.spacing
    }
}

/// Horizontal layout for line/area: first sample at 0, last at `width`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointScale {
    pub width: f64,
    step: f64,
}

impl PointScale {
    /// Contract: `count >= 2`; singletons are handled by the caller.
    pub fn new(width: f64, count: usize) -> Self {
        let gaps = count.saturating_sub(1).max(1);
        Self { width, step: width / gaps as f64 }
    }

    pub fn step(&self) -> f64 { self.step }

    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        index as f64 * self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_scale_maps_max_to_band_top() {
        let s = ValueScale::new(200.0, 52.0, BandMargins::default());
        assert_eq!(s.extent(52.0), 140.0);
        assert_eq!(s.to_px(52.0), 30.0);
        assert_eq!(s.to_px(0.0), 170.0);
    }

    #[test]
    fn value_scale_zero_max_uses_unit_denominator() {
        let s = ValueScale::new(200.0, 0.0, BandMargins::default());
        assert_eq!(s.denominator(), 1.0);
        assert_eq!(s.to_px(0.0), 170.0);
    }

    #[test]
    fn slot_scale_twelve_bars_in_400px() {
        let s = SlotScale::new(400.0, 12);
        assert_eq!(s.slot_width, 33.0);
        assert_eq!(s.bar_width, 26.0);
        assert_eq!(s.spacing, 3.0);
        assert_eq!(s.to_px(0), 3.0);
        assert_eq!(s.to_px(11), 366.0);
    }

    #[test]
    fn slot_scale_more_bars_than_pixels() {
        let s = SlotScale::new(400.0, 500);
        assert_eq!(s.slot_width, 0.8);
        assert!(s.bar_width > 0.0);
        assert!(s.to_px(0) < s.to_px(1));
        assert!(s.to_px(499) + s.bar_width <= 400.0);

        // 1.5 px slots would floor to a 0 px bar
        let s = SlotScale::new(300.0, 200);
        assert_eq!(s.slot_width, 1.5);
        assert!(s.bar_width > 0.0);

        let s = SlotScale::new(400.0, 200);
        assert_eq!((s.slot_width, s.bar_width, s.spacing), (2.0, 1.0, 0.0));
    }

    #[test]
    fn point_scale_spans_width() {
        let s = PointScale::new(400.0, 2);
        assert_eq!(s.to_px(0), 0.0);
        assert_eq!(s.to_px(1), 400.0);
        let s = PointScale::new(400.0, 5);
        assert_eq!(s.step(), 100.0);
    }
}
