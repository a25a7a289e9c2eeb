//! Static and live transfer-curve evaluation.

use crate::params::CompressorParams;

/// Output ceiling in dB. Results never exceed this after makeup gain.
pub const OUTPUT_CEILING_DB: f32 = 0.0;

/// Default number of points when sampling a curve for drawing.
pub const CURVE_RESOLUTION: usize = 100;

/// One point on the transfer curve, in dB on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct CurvePoint {
    pub input_db: f32,
    pub output_db: f32,
}

/// Compressor transfer function: instantaneous input level in dB to output
/// level in dB.
///
/// Pure and stateless apart from the parameter set. The same evaluation
/// serves two consumers: sampling the static curve for the dynamics graph
/// background, and computing the live operating point for the current input
/// level.
#[derive(Debug, Clone)]
pub struct TransferCurve {
    params: CompressorParams,
}

impl TransferCurve {
    /// Create a curve from a parameter set (normalized via
    /// [`CompressorParams::clamped`]).
    pub fn new(params: CompressorParams) -> Self {
        Self {
            params: params.clamped(),
        }
    }

    pub fn params(&self) -> CompressorParams {
        self.params
    }

    /// Replace the parameter set. The next evaluation uses the new values.
    pub fn set_params(&mut self, params: CompressorParams) {
        self.params = params.clamped();
    }

    /// Lower edge of the soft-knee region in dB.
    pub fn knee_start_db(&self) -> f32 {
        self.params.threshold_db - self.params.knee_db * 0.5
    }

    /// Upper edge of the soft-knee region in dB.
    pub fn knee_end_db(&self) -> f32 {
        self.params.threshold_db + self.params.knee_db * 0.5
    }

    /// Compressed level in dB before makeup gain and ceiling.
    #[inline]
    fn compressed_db(&self, input_db: f32) -> f32 {
        let CompressorParams {
            threshold_db,
            ratio,
            knee_db,
            ..
        } = self.params;

        if knee_db <= 0.0 {
            // Hard knee: unity below threshold, full ratio above.
            if input_db < threshold_db {
                input_db
            } else {
                threshold_db + (input_db - threshold_db) / ratio
            }
        } else {
            let knee_start = threshold_db - knee_db * 0.5;
            let knee_end = threshold_db + knee_db * 0.5;

            if input_db < knee_start {
                input_db
            } else if input_db > knee_end {
                threshold_db + (input_db - threshold_db) / ratio
            } else {
                // Quadratic ease-in across the knee: the effective ratio
                // ramps from 1:1 at knee start to the full ratio at knee end.
                let knee_pos = (input_db - knee_start) / knee_db;
                let amount = knee_pos * knee_pos;
                let effective_ratio = 1.0 + (ratio - 1.0) * amount;
                input_db - (input_db - threshold_db) * (1.0 - 1.0 / effective_ratio) * amount
            }
        }
    }

    /// Output level in dB for an instantaneous input level in dB.
    ///
    /// Applies the knee law, adds makeup gain, and clamps at
    /// [`OUTPUT_CEILING_DB`]. The result is not floor-clamped - callers clamp
    /// to their display range if needed.
    #[inline]
    pub fn output_db(&self, input_db: f32) -> f32 {
        (self.compressed_db(input_db) + self.params.makeup_db).min(OUTPUT_CEILING_DB)
    }

    /// Gain reduction in dB at an input level, before makeup gain.
    ///
    /// Zero below the knee. Marginally negative values can occur in the lower
    /// half of the knee where the ease-in law sits a hair above unity;
    /// gain-reduction meters clamp at zero.
    #[inline]
    pub fn reduction_db(&self, input_db: f32) -> f32 {
        input_db - self.compressed_db(input_db)
    }

    /// Signed gain in dB the curve applies at an input level
    /// (output minus input, makeup included).
    #[inline]
    pub fn gain_db(&self, input_db: f32) -> f32 {
        self.output_db(input_db) - input_db
    }

    /// Live point on the curve for the current input level.
    pub fn operating_point(&self, input_db: f32) -> CurvePoint {
        CurvePoint {
            input_db,
            output_db: self.output_db(input_db),
        }
    }

    /// Sample the static curve at fixed resolution across an input range.
    ///
    /// Points are evenly spaced and include both endpoints. Zero points
    /// yields an empty vector; one point yields the range start.
    pub fn sample(&self, min_db: f32, max_db: f32, points: usize) -> Vec<CurvePoint> {
        match points {
            0 => Vec::new(),
            1 => vec![self.operating_point(min_db)],
            _ => {
                let step = (max_db - min_db) / (points - 1) as f32;
                (0..points)
                    .map(|i| self.operating_point(min_db + step * i as f32))
                    .collect()
            }
        }
    }
}

impl Default for TransferCurve {
    fn default() -> Self {
        Self::new(CompressorParams::default())
    }
}
