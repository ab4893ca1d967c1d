// File: crates/chart-core/src/animation.rs
// Summary: Entrance animation metadata layered on top of resting geometry.

use serde::{Deserialize, Serialize};

/// When an element starts appearing and how long it takes. Purely presentational.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Entrance {
    pub delay_secs: f64,
    pub duration_secs: f64,
}

impl Entrance {
    pub const STATIC: Entrance = Entrance { delay_secs: 0.0, duration_secs: 0.0 };

    pub const fn new(delay_secs: f64, duration_secs: f64) -> Self {
        Self { delay_secs, duration_secs }
    }

    pub fn is_static(&self) -> bool {
        self.delay_secs == 0.0 && self.duration_secs == 0.0
    }
}

/// Timing knobs for entrance animations, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationTiming {
    pub stagger_secs: f64,
    pub bar_duration_secs: f64,
    pub line_duration_secs: f64,
    pub marker_duration_secs: f64,
    pub area_duration_secs: f64,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            stagger_secs: 0.1,
            bar_duration_secs: 0.5,
            line_duration_secs: 1.5,
            marker_duration_secs: 0.3,
            area_duration_secs: 1.0,
        }
    }
}

/// Kind of mark being scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Bar,
    Label,
    Marker,
    Line,
    Area,
}

/// Resolves entrances for one render pass.
#[derive(Clone, Copy, Debug)]
pub struct Scheduler {
    enabled: bool,
    timing: AnimationTiming,
}

impl Scheduler {
    pub fn new(enabled: bool, timing: AnimationTiming) -> Self {
        Self { enabled, timing }
    }

    /// Entrance for the mark at `index` in series order.
    pub fn entrance(&self, mark: Mark, index: usize) -> Entrance {
        if !self.enabled {
            return Entrance::STATIC;
        }
        let t = &self.timing;
        let staggered = index as f64 * t.stagger_secs;
        match mark {
            Mark::Bar | Mark::Label => Entrance::new(staggered, t.bar_duration_secs),
            Mark::Marker => Entrance::new(staggered, t.marker_duration_secs),
            Mark::Line => Entrance::new(0.0, t.line_duration_secs),
            Mark::Area => Entrance::new(0.0, t.area_duration_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_scheduler_is_static() {
        let s = Scheduler::new(false, AnimationTiming::default());
        for mark in [Mark::Bar, Mark::Label, Mark::Marker, Mark::Line, Mark::Area] {
            assert!(s.entrance(mark, 7).is_static());
        }
    }

    #[test]
    fn bars_are_staggered_by_index() {
        let s = Scheduler::new(true, AnimationTiming::default());
        assert_eq!(s.entrance(Mark::Bar, 0), Entrance::new(0.0, 0.5));
        let e = s.entrance(Mark::Bar, 3);
        assert!((e.delay_secs - 0.3).abs() < 1e-12);
        assert_eq!(s.entrance(Mark::Line, 9).delay_secs, 0.0);
    }
}
