//! One-pole gain-reduction metering.

/// Default per-tick smoothing factor for gain-reduction displays.
pub const GR_SMOOTHING: f32 = 0.3;

/// Displayed gain reduction in dB, smoothed with a one-pole glide.
///
/// This is deliberately a different law from [`PeakMeter`](crate::PeakMeter):
/// gain-reduction needles ease exponentially toward the target each tick
/// rather than falling at a fixed dB/second. The two are kept as separate
/// types so neither display's dynamic feel changes by accident.
#[derive(Debug, Clone)]
pub struct GainReductionMeter {
    reduction_db: f32,
    smoothing: f32,
}

impl GainReductionMeter {
    pub fn new() -> Self {
        Self {
            reduction_db: 0.0,
            smoothing: GR_SMOOTHING,
        }
    }

    /// Set the per-tick smoothing factor (0.0 = frozen, 1.0 = instant).
    pub fn with_smoothing(mut self, factor: f32) -> Self {
        self.smoothing = factor.clamp(0.0, 1.0);
        self
    }

    /// Current displayed reduction in dB (>= 0, larger = more reduction).
    pub fn reduction_db(&self) -> f32 {
        self.reduction_db
    }

    pub fn reset(&mut self) {
        self.reduction_db = 0.0;
    }

    /// Glide one tick toward the target reduction and return the new value.
    ///
    /// Negative targets (a transfer curve can dip a hair below unity inside
    /// the knee) are treated as zero.
    pub fn advance(&mut self, target_reduction_db: f32) -> f32 {
        let target = target_reduction_db.max(0.0);
        self.reduction_db += (target - self.reduction_db) * self.smoothing;
        self.reduction_db
    }
}

impl Default for GainReductionMeter {
    fn default() -> Self {
        Self::new()
    }
}
