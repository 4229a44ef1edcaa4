// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Frame timing: per-frame delta and the on-demand frame-rate report.

/// Minimum seconds between two frame-rate reports.
pub const REPORT_INTERVAL: f32 = 2.0;

/// Tracks frame deltas and counts frames between frame-rate reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    last: f32,
    frames: u32,
    last_report: f32,
}

impl FrameClock {
    /// A clock whose first delta is measured from `t0`.
    pub fn new(t0: f32) -> Self {
        Self {
            last: t0,
            frames: 0,
            last_report: t0,
        }
    }

    /// Counts a frame at `t` and returns the seconds since the previous one.
    pub fn tick(&mut self, t: f32) -> f32 {
        self.frames += 1;
        let dt = t - self.last;
        self.last = t;
        dt
    }

    /// Time of the most recent tick.
    pub fn now(&self) -> f32 {
        self.last
    }

    /// Frames counted since the last report.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Average frames per second since the last report, or `None` when the
    /// previous report is under [`REPORT_INTERVAL`] old. A report resets the
    /// frame counter.
    #[allow(clippy::cast_precision_loss)]
    pub fn report(&mut self, t: f32) -> Option<f32> {
        let elapsed = t - self.last_report;
        if elapsed <= REPORT_INTERVAL {
            return None;
        }
        let fps = self.frames as f32 / elapsed;
        self.last_report = t;
        self.frames = 0;
        Some(fps)
    }
}
