//! Builder for configuring and constructing a [`ChannelMonitor`].

use headroom_dynamics::{CompressorParams, TransferCurve};
use headroom_metering::{DbRange, GainReductionMeter, PeakMeter};
use headroom_stereo::{CorrelationMeter, ScopeMode};

use crate::monitor::ChannelMonitor;

/// Configures meter ranges, ballistics, compressor parameters, and scope
/// projection for one [`ChannelMonitor`].
///
/// # Example
///
/// ```
/// use headroom::{ChannelMonitor, CompressorParams, ScopeMode};
///
/// let monitor = ChannelMonitor::builder()
///     .sample_rate(48000.0)
///     .fall_rate_db_per_sec(20.0)
///     .params(CompressorParams::builder().threshold_db(-18.0).build())
///     .scope_mode(ScopeMode::StandardXy)
///     .build();
///
/// assert_eq!(monitor.params().threshold_db, -18.0);
/// ```
#[derive(Debug, Clone)]
pub struct ChannelMonitorBuilder {
    sample_rate: f64,
    range: DbRange,
    fall_rate_db_per_sec: f32,
    smoothing: bool,
    params: CompressorParams,
    scope_mode: ScopeMode,
    scope_scale: f32,
}

impl Default for ChannelMonitorBuilder {
    fn default() -> Self {
        Self {
            sample_rate: 44100.0,
            range: DbRange::METER,
            fall_rate_db_per_sec: headroom_metering::FALL_RATE_DB_PER_SEC,
            smoothing: true,
            params: CompressorParams::default(),
            scope_mode: ScopeMode::default(),
            scope_scale: 1.0,
        }
    }
}

impl ChannelMonitorBuilder {
    /// Sample rate of the buffers the monitor will analyze (drives
    /// correlation smoothing).
    pub fn sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Display range for the level meters.
    pub fn range(mut self, range: DbRange) -> Self {
        self.range = range;
        self
    }

    /// Level-meter fall rate in dB per second.
    pub fn fall_rate_db_per_sec(mut self, db_per_sec: f32) -> Self {
        self.fall_rate_db_per_sec = db_per_sec;
        self
    }

    /// Disable meter ballistics: displayed levels track targets instantly.
    pub fn smoothing(mut self, enabled: bool) -> Self {
        self.smoothing = enabled;
        self
    }

    /// Compressor parameters for the dynamics curve and gain-reduction
    /// display.
    pub fn params(mut self, params: CompressorParams) -> Self {
        self.params = params;
        self
    }

    /// Scope projection mode (Lissajous by default).
    pub fn scope_mode(mut self, mode: ScopeMode) -> Self {
        self.scope_mode = mode;
        self
    }

    /// Scope display radius scale.
    pub fn scope_scale(mut self, scale: f32) -> Self {
        self.scope_scale = scale;
        self
    }

    /// Build the configured monitor.
    pub fn build(self) -> ChannelMonitor {
        let meter = PeakMeter::with_range(self.range)
            .with_fall_rate(self.fall_rate_db_per_sec)
            .with_smoothing(self.smoothing);

        ChannelMonitor::from_parts(
            meter.clone(),
            meter,
            GainReductionMeter::new(),
            TransferCurve::new(self.params),
            CorrelationMeter::new(self.sample_rate),
            self.scope_mode,
            self.scope_scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let builder = ChannelMonitorBuilder::default();
        assert_eq!(builder.sample_rate, 44100.0);
        assert_eq!(builder.range, DbRange::METER);
        assert!(builder.smoothing);
    }

    #[test]
    fn test_builder_configures_monitor() {
        let monitor = ChannelMonitor::builder()
            .params(CompressorParams::builder().ratio(8.0).build())
            .scope_mode(ScopeMode::StandardXy)
            .build();
        assert_eq!(monitor.params().ratio, 8.0);
        assert_eq!(monitor.scope_mode(), ScopeMode::StandardXy);
    }
}
