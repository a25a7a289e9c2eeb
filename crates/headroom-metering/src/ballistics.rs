//! Rate-limited level-meter ballistics.

use crate::range::DbRange;

/// Default fall rate for level meters, in dB per second.
pub const FALL_RATE_DB_PER_SEC: f32 = 30.0;

/// Maximum frame time honored by [`PeakMeter::advance`], in seconds.
///
/// Frame times above this are treated as this value, so a stall
/// (pause/resume, debugger break, frame hitch) produces one bounded fall
/// step instead of a jump to the floor.
pub const MAX_FRAME_DT: f32 = 0.1;

/// Displayed level for one meter channel, with asymmetric ballistics:
/// instant attack, timed fall.
///
/// Each meter instance owns exactly one of these and is advanced by a single
/// tick source; sharing across threads needs an external snapshot cell
/// (see [`AtomicStripLevels`](crate::AtomicStripLevels)).
#[derive(Debug, Clone)]
pub struct PeakMeter {
    level_db: f32,
    fall_rate: f32,
    smoothing: bool,
    range: DbRange,
}

impl PeakMeter {
    /// Meter over the canonical -60..0 dB range with the default fall rate,
    /// starting at the floor.
    pub fn new() -> Self {
        Self::with_range(DbRange::METER)
    }

    /// Meter over a custom display range.
    pub fn with_range(range: DbRange) -> Self {
        Self {
            level_db: range.min_db,
            fall_rate: FALL_RATE_DB_PER_SEC,
            smoothing: true,
            range,
        }
    }

    /// Set the fall rate in dB per second.
    pub fn with_fall_rate(mut self, db_per_sec: f32) -> Self {
        self.fall_rate = db_per_sec.max(0.0);
        self
    }

    /// Disable smoothing: the displayed level tracks the target instantly in
    /// both directions.
    pub fn with_smoothing(mut self, enabled: bool) -> Self {
        self.smoothing = enabled;
        self
    }

    pub fn level_db(&self) -> f32 {
        self.level_db
    }

    pub fn range(&self) -> DbRange {
        self.range
    }

    pub fn fall_rate(&self) -> f32 {
        self.fall_rate
    }

    pub fn set_smoothing(&mut self, enabled: bool) {
        self.smoothing = enabled;
    }

    /// Drop the displayed level back to the range floor.
    pub fn reset(&mut self) {
        self.level_db = self.range.min_db;
    }

    /// Advance the meter by one display frame and return the new level.
    ///
    /// `target_linear` is the instantaneous linear amplitude; `dt_seconds`
    /// the elapsed frame time, clamped to [`MAX_FRAME_DT`]. Rising targets
    /// are taken immediately; falling targets are approached at the fall
    /// rate, never overshooting below the target or the range floor.
    pub fn advance(&mut self, target_linear: f32, dt_seconds: f32) -> f32 {
        let target_db = self.range.linear_to_db(target_linear);

        if !self.smoothing || target_db > self.level_db {
            self.level_db = target_db;
        } else {
            let dt = dt_seconds.clamp(0.0, MAX_FRAME_DT);
            self.level_db = (self.level_db - self.fall_rate * dt).max(target_db);
        }

        self.level_db
    }
}

impl Default for PeakMeter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_floor() {
        let meter = PeakMeter::new();
        assert_eq!(meter.level_db(), -60.0);
    }

    #[test]
    fn test_attack_is_instant_regardless_of_dt() {
        for dt in [0.001, 0.033, 0.1, 10.0] {
            let mut meter = PeakMeter::new();
            assert_eq!(
                meter.advance(1.0, dt),
                0.0,
                "full-scale target should land in one step at dt {}",
                dt
            );
        }
    }

    #[test]
    fn test_fall_is_rate_limited() {
        let mut meter = PeakMeter::new().with_fall_rate(30.0);
        meter.advance(1.0, 0.033);
        // One 100ms frame of silence: 30 dB/s * 0.1s = 3 dB of fall.
        let level = meter.advance(0.0, 0.1);
        assert!((level - (-3.0)).abs() < 0.0001, "expected -3.0, got {}", level);
    }

    #[test]
    fn test_fall_never_overshoots_target() {
        let mut meter = PeakMeter::new().with_fall_rate(60.0);
        meter.advance(1.0, 0.033);
        // Target -1.9 dB is closer than one fall step.
        let target = 0.8;
        let level = meter.advance(target, 0.1);
        let target_db = 20.0 * target.log10();
        assert!(
            (level - target_db).abs() < 0.001,
            "fall should stop at the target, got {}",
            level
        );
    }

    #[test]
    fn test_stalled_frame_time_is_clamped() {
        let mut meter = PeakMeter::new().with_fall_rate(30.0);
        meter.advance(1.0, 0.033);
        // A 5-second stall still only falls one MAX_FRAME_DT worth.
        let level = meter.advance(0.0, 5.0);
        assert!((level - (-3.0)).abs() < 0.0001, "expected -3.0, got {}", level);
    }

    #[test]
    fn test_fall_floors_at_range_min() {
        let mut meter = PeakMeter::new().with_fall_rate(30.0);
        meter.advance(1.0, 0.033);
        let mut level = 0.0;
        for _ in 0..100 {
            level = meter.advance(0.0, 0.1);
        }
        assert_eq!(level, -60.0);
    }

    #[test]
    fn test_smoothing_disabled_tracks_instantly() {
        let mut meter = PeakMeter::new().with_smoothing(false);
        meter.advance(1.0, 0.033);
        // Falls straight to the floor, no ballistics.
        assert_eq!(meter.advance(0.0, 0.001), -60.0);
    }

    #[test]
    fn test_custom_range() {
        let range = DbRange::SPECTRAL_DIFF;
        let mut meter = PeakMeter::with_range(range);
        assert_eq!(meter.level_db(), -24.0);
        // 2.0 linear = +6 dB, inside the wider range.
        let level = meter.advance(2.0, 0.033);
        assert!((level - 6.02).abs() < 0.01, "expected ~6.02, got {}", level);
    }

    #[test]
    fn test_reset_returns_to_floor() {
        let mut meter = PeakMeter::new();
        meter.advance(1.0, 0.033);
        meter.reset();
        assert_eq!(meter.level_db(), -60.0);
    }
}
