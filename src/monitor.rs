//! Per-channel display coordinator.

use headroom_dynamics::{CompressorParams, CurvePoint, TransferCurve};
use headroom_metering::{AtomicStripLevels, GainReductionMeter, PeakMeter};
use headroom_stereo::{project_buffer_into, CorrelationMeter, ScopeMode, ScopePoint, StereoField};

use crate::builder::ChannelMonitorBuilder;

/// Everything one mixer strip renders in a display frame.
#[derive(Debug, Clone, Copy)]
pub struct StripSnapshot {
    pub level_left_db: f32,
    pub level_right_db: f32,
    pub gain_reduction_db: f32,
    /// Smoothed phase correlation for the meter bar under the scope.
    pub correlation: f32,
    /// Live dot on the dynamics transfer curve.
    pub operating_point: CurvePoint,
}

/// Display-side state for one mixer channel.
///
/// Owns the meters, transfer curve, and stereo analysis for a strip and
/// advances all of them with a single [`update`](ChannelMonitor::update)
/// call per display frame - there is no event propagation; parameter
/// changes via [`set_params`](ChannelMonitor::set_params) simply take
/// effect at the next frame.
///
/// Single-threaded by design: one instance per strip, driven by one tick
/// source. To hand levels to a renderer on another thread, publish into an
/// [`AtomicStripLevels`] cell.
///
/// # Example
///
/// ```
/// use headroom::ChannelMonitor;
///
/// let mut monitor = ChannelMonitor::builder().sample_rate(48000.0).build();
///
/// let left = vec![0.5f32; 256];
/// let right = vec![0.5f32; 256];
/// let snapshot = monitor.update(&left, &right, 1.0 / 30.0);
///
/// assert!(snapshot.level_left_db > -7.0);
/// assert!(snapshot.correlation > 0.0);
/// ```
pub struct ChannelMonitor {
    meter_left: PeakMeter,
    meter_right: PeakMeter,
    gain_reduction: GainReductionMeter,
    curve: TransferCurve,
    correlation: CorrelationMeter,
    scope_mode: ScopeMode,
    scope_scale: f32,
}

impl ChannelMonitor {
    /// Create a builder for configuring a monitor.
    pub fn builder() -> ChannelMonitorBuilder {
        ChannelMonitorBuilder::default()
    }

    pub(crate) fn from_parts(
        meter_left: PeakMeter,
        meter_right: PeakMeter,
        gain_reduction: GainReductionMeter,
        curve: TransferCurve,
        correlation: CorrelationMeter,
        scope_mode: ScopeMode,
        scope_scale: f32,
    ) -> Self {
        Self {
            meter_left,
            meter_right,
            gain_reduction,
            curve,
            correlation,
            scope_mode,
            scope_scale,
        }
    }

    /// Advance every meter by one display frame and return the values to
    /// render.
    ///
    /// `left`/`right` are this frame's sample buffers (read-only, not
    /// retained); `dt_seconds` is the elapsed frame time. The sidechain
    /// level driving the gain-reduction display is the louder channel peak.
    pub fn update(&mut self, left: &[f32], right: &[f32], dt_seconds: f32) -> StripSnapshot {
        let peak_left = peak_amplitude(left);
        let peak_right = peak_amplitude(right);

        let level_left_db = self.meter_left.advance(peak_left, dt_seconds);
        let level_right_db = self.meter_right.advance(peak_right, dt_seconds);

        let input_db = self
            .meter_left
            .range()
            .linear_to_db(peak_left.max(peak_right));
        let gain_reduction_db = self.gain_reduction.advance(self.curve.reduction_db(input_db));

        self.correlation.process(left, right);

        StripSnapshot {
            level_left_db,
            level_right_db,
            gain_reduction_db,
            correlation: self.correlation.smoothed_correlation(),
            operating_point: self.curve.operating_point(input_db),
        }
    }

    /// Project this frame's buffers to scope points with the configured
    /// mode and scale, reusing `out`.
    pub fn scope_points_into(&self, left: &[f32], right: &[f32], out: &mut Vec<ScopePoint>) {
        project_buffer_into(left, right, self.scope_mode, self.scope_scale, out);
    }

    /// Allocating convenience wrapper around
    /// [`scope_points_into`](ChannelMonitor::scope_points_into).
    pub fn scope_points(&self, left: &[f32], right: &[f32]) -> Vec<ScopePoint> {
        let mut points = Vec::new();
        self.scope_points_into(left, right, &mut points);
        points
    }

    /// Instantaneous stereo field of a buffer, independent of the smoothed
    /// correlation state.
    pub fn analyze_field(&self, left: &[f32], right: &[f32]) -> StereoField {
        StereoField::analyze(left, right)
    }

    /// Publish the current meter state into a lock-free cell for another
    /// thread to read.
    pub fn publish_to(&self, cell: &AtomicStripLevels) {
        cell.set(
            self.meter_left.level_db(),
            self.meter_right.level_db(),
            self.gain_reduction.reduction_db(),
        );
    }

    pub fn params(&self) -> CompressorParams {
        self.curve.params()
    }

    /// Replace the compressor parameters; takes effect on the next frame.
    pub fn set_params(&mut self, params: CompressorParams) {
        self.curve.set_params(params);
    }

    pub fn curve(&self) -> &TransferCurve {
        &self.curve
    }

    pub fn scope_mode(&self) -> ScopeMode {
        self.scope_mode
    }

    pub fn set_scope_mode(&mut self, mode: ScopeMode) {
        self.scope_mode = mode;
    }

    /// Drop all meters back to their resting state.
    pub fn reset(&mut self) {
        self.meter_left.reset();
        self.meter_right.reset();
        self.gain_reduction.reset();
        self.correlation.reset();
    }
}

/// Peak absolute amplitude of a buffer.
#[inline]
fn peak_amplitude(samples: &[f32]) -> f32 {
    let mut peak: f32 = 0.0;
    for &sample in samples {
        peak = peak.max(sample.abs());
    }
    peak
}
