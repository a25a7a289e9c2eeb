//! Phase correlation and stereo field statistics.

use crate::error::{Error, Result};

/// Pearson-style correlation coefficient across a stereo buffer.
///
/// Mismatched buffer lengths are truncated to the shorter channel. Silence
/// in either channel (zero energy) and empty buffers return exactly 0.0,
/// never NaN. Range is [-1, 1] for well-formed input: +1 mono-like, -1 out
/// of phase.
pub fn correlation(left: &[f32], right: &[f32]) -> f32 {
    let n = left.len().min(right.len());
    if n == 0 {
        return 0.0;
    }

    let mut sum_lr = 0.0f64;
    let mut sum_l2 = 0.0f64;
    let mut sum_r2 = 0.0f64;

    for i in 0..n {
        let l = left[i] as f64;
        let r = right[i] as f64;
        sum_lr += l * r;
        sum_l2 += l * l;
        sum_r2 += r * r;
    }

    let denom = (sum_l2 * sum_r2).sqrt();
    if denom > 0.0 {
        (sum_lr / denom) as f32
    } else {
        0.0
    }
}

/// Fail-fast variant of [`correlation`] for callers that treat mismatched
/// channel lengths as a precondition violation instead of truncating.
pub fn correlation_strict(left: &[f32], right: &[f32]) -> Result<f32> {
    if left.len() != right.len() {
        return Err(Error::ChannelLengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(correlation(left, right))
}

/// One-buffer stereo field snapshot.
///
/// - `correlation`: phase relationship, +1 mono-like to -1 out of phase
/// - `width`: 1 - correlation (0 mono, 2 fully out of phase)
/// - `balance`: -1 full left to +1 full right, 0 when silent
/// - mid/side and per-channel RMS levels in linear amplitude
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct StereoField {
    pub correlation: f32,
    pub width: f32,
    pub balance: f32,
    pub mid_rms: f32,
    pub side_rms: f32,
    pub left_rms: f32,
    pub right_rms: f32,
}

impl StereoField {
    /// Analyze a stereo buffer in one pass.
    ///
    /// Mismatched lengths truncate to the shorter channel; empty input
    /// yields the all-zero default.
    pub fn analyze(left: &[f32], right: &[f32]) -> Self {
        let n = left.len().min(right.len());
        if n == 0 {
            return Self::default();
        }

        let mut sum_lr = 0.0f64;
        let mut sum_l2 = 0.0f64;
        let mut sum_r2 = 0.0f64;
        let mut sum_mid2 = 0.0f64;
        let mut sum_side2 = 0.0f64;

        for i in 0..n {
            let l = left[i] as f64;
            let r = right[i] as f64;
            sum_lr += l * r;
            sum_l2 += l * l;
            sum_r2 += r * r;
            let mid = (l + r) * 0.5;
            let side = (l - r) * 0.5;
            sum_mid2 += mid * mid;
            sum_side2 += side * side;
        }

        let samples = n as f64;
        let left_rms = (sum_l2 / samples).sqrt() as f32;
        let right_rms = (sum_r2 / samples).sqrt() as f32;

        let denom = (sum_l2 * sum_r2).sqrt();
        let correlation = if denom > 0.0 {
            (sum_lr / denom) as f32
        } else {
            0.0
        };

        let total = left_rms + right_rms;
        let balance = if total > 0.0 {
            (right_rms - left_rms) / total
        } else {
            0.0
        };

        Self {
            correlation,
            width: 1.0 - correlation,
            balance,
            mid_rms: (sum_mid2 / samples).sqrt() as f32,
            side_rms: (sum_side2 / samples).sqrt() as f32,
            left_rms,
            right_rms,
        }
    }

    /// Significantly negative correlation - the mix will lose energy when
    /// summed to mono.
    pub fn has_phase_issues(&self) -> bool {
        self.correlation < -0.3
    }

    /// Essentially mono content.
    pub fn is_mono(&self) -> bool {
        self.correlation > 0.95
    }
}

/// Smoothed correlation readout for the meter bar under the scope.
///
/// Wraps per-buffer [`StereoField`] analysis with asymmetric exponential
/// smoothing (fast attack, slower release) scaled by buffer duration. This
/// smooths a dimensionless coefficient for display steadiness - level
/// ballistics live in `headroom-metering` and follow different laws.
#[derive(Debug, Clone)]
pub struct CorrelationMeter {
    sample_rate: f64,
    attack_time: f32,
    release_time: f32,
    correlation: f32,
    balance: f32,
}

impl CorrelationMeter {
    /// Create a meter with 10 ms attack / 100 ms release defaults.
    pub fn new(sample_rate: f64) -> Self {
        Self {
            sample_rate,
            attack_time: 0.01,
            release_time: 0.1,
            correlation: 0.0,
            balance: 0.0,
        }
    }

    /// Set attack/release times in milliseconds.
    pub fn set_times(&mut self, attack_ms: f32, release_ms: f32) {
        self.attack_time = attack_ms.max(0.0) / 1000.0;
        self.release_time = release_ms.max(0.0) / 1000.0;
    }

    /// Analyze one buffer, fold it into the smoothed state, and return the
    /// instantaneous (non-smoothed) field.
    pub fn process(&mut self, left: &[f32], right: &[f32]) -> StereoField {
        let instant = StereoField::analyze(left, right);

        let buffer_duration = left.len().min(right.len()) as f32 / self.sample_rate as f32;
        self.correlation = self.smooth(self.correlation, instant.correlation, buffer_duration);
        self.balance = self.smooth(self.balance, instant.balance, buffer_duration);

        instant
    }

    pub fn smoothed_correlation(&self) -> f32 {
        self.correlation
    }

    pub fn smoothed_balance(&self) -> f32 {
        self.balance
    }

    pub fn reset(&mut self) {
        self.correlation = 0.0;
        self.balance = 0.0;
    }

    fn smooth(&self, current: f32, target: f32, buffer_duration: f32) -> f32 {
        let time_constant = if target > current {
            self.attack_time
        } else {
            self.release_time
        };

        if time_constant <= 0.0 || buffer_duration <= 0.0 {
            return target;
        }

        let coeff = (-buffer_duration / time_constant).exp();
        current * coeff + target * (1.0 - coeff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(len: usize, step: f32) -> Vec<f32> {
        (0..len).map(|i| (i as f32 * step).sin()).collect()
    }

    #[test]
    fn test_identical_buffers_fully_correlated() {
        let buf = sine(1000, 0.01);
        let c = correlation(&buf, &buf);
        assert!(c > 0.9999, "mono signal should be ~+1.0, got {}", c);
    }

    #[test]
    fn test_inverted_buffers_anti_correlated() {
        let left = sine(1000, 0.01);
        let right: Vec<f32> = left.iter().map(|&s| -s).collect();
        let c = correlation(&left, &right);
        assert!(c < -0.9999, "inverted signal should be ~-1.0, got {}", c);
    }

    #[test]
    fn test_silence_is_exactly_zero() {
        let silence = vec![0.0f32; 512];
        assert_eq!(correlation(&silence, &silence), 0.0);
        // One silent channel is enough to zero the denominator.
        let signal = sine(512, 0.01);
        assert_eq!(correlation(&signal, &silence), 0.0);
    }

    #[test]
    fn test_empty_buffers_are_zero() {
        assert_eq!(correlation(&[], &[]), 0.0);
        assert_eq!(correlation(&[0.5], &[]), 0.0);
    }

    #[test]
    fn test_mismatched_lengths_truncate() {
        let left = sine(1000, 0.01);
        let mut right = left.clone();
        right.extend_from_slice(&[9.0, -9.0, 9.0]);
        // Extra right-channel garbage is ignored.
        let c = correlation(&left, &right);
        assert!(c > 0.9999, "got {}", c);
    }

    #[test]
    fn test_out_of_range_samples_do_not_crash() {
        let left = [10.0f32, -20.0, 15.0];
        let right = [10.0f32, -20.0, 15.0];
        let c = correlation(&left, &right);
        assert!((c - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_strict_rejects_mismatch() {
        let left = [0.5f32; 10];
        let right = [0.5f32; 9];
        match correlation_strict(&left, &right) {
            Err(Error::ChannelLengthMismatch { left: l, right: r }) => {
                assert_eq!((l, r), (10, 9));
            }
            other => panic!("expected length mismatch, got {:?}", other),
        }
        assert!(correlation_strict(&left, &left).is_ok());
    }

    #[test]
    fn test_field_mono_signal() {
        let buf = sine(1000, 0.01);
        let field = StereoField::analyze(&buf, &buf);
        assert!(field.is_mono());
        assert!(!field.has_phase_issues());
        assert!(field.width.abs() < 0.001, "mono width ~0, got {}", field.width);
        assert!(field.balance.abs() < 0.001);
        assert!(field.side_rms < 0.0001, "mono has no side energy");
    }

    #[test]
    fn test_field_out_of_phase() {
        let left = sine(1000, 0.01);
        let right: Vec<f32> = left.iter().map(|&s| -s).collect();
        let field = StereoField::analyze(&left, &right);
        assert!(field.has_phase_issues());
        assert!(field.width > 1.99, "out of phase width ~2, got {}", field.width);
        assert!(field.mid_rms < 0.0001, "out of phase has no mid energy");
    }

    #[test]
    fn test_field_balance() {
        let signal = sine(1000, 0.01);
        let silence = vec![0.0f32; 1000];
        let field = StereoField::analyze(&signal, &silence);
        assert!(field.balance < -0.99, "left-only should be ~-1, got {}", field.balance);
        let field = StereoField::analyze(&silence, &signal);
        assert!(field.balance > 0.99, "right-only should be ~+1, got {}", field.balance);
    }

    #[test]
    fn test_meter_converges_on_steady_signal() {
        let mut meter = CorrelationMeter::new(44100.0);
        let buf = sine(1024, 0.01);
        for _ in 0..20 {
            meter.process(&buf, &buf);
        }
        assert!(
            meter.smoothed_correlation() > 0.95,
            "should converge toward +1, got {}",
            meter.smoothed_correlation()
        );
    }

    #[test]
    fn test_meter_release_slower_than_attack() {
        let mut meter = CorrelationMeter::new(44100.0);
        let buf = sine(1024, 0.01);
        let inverted: Vec<f32> = buf.iter().map(|&s| -s).collect();

        // One ~23ms buffer against a 10ms attack covers most of the rise.
        meter.process(&buf, &buf);
        assert!(
            meter.smoothed_correlation() > 0.85,
            "attack should be fast, got {}",
            meter.smoothed_correlation()
        );

        // Settle, then fall: one buffer against the 100ms release barely
        // dents the reading.
        for _ in 0..10 {
            meter.process(&buf, &buf);
        }
        meter.process(&buf, &inverted);
        assert!(
            meter.smoothed_correlation() > 0.4,
            "release should lag, got {}",
            meter.smoothed_correlation()
        );
    }

    #[test]
    fn test_meter_reset() {
        let mut meter = CorrelationMeter::new(44100.0);
        let buf = sine(1024, 0.01);
        meter.process(&buf, &buf);
        meter.reset();
        assert_eq!(meter.smoothed_correlation(), 0.0);
        assert_eq!(meter.smoothed_balance(), 0.0);
    }
}
