//! Compressor parameter set shared by curve evaluation and display.

/// Parameters for one compressor transfer curve.
///
/// Owned by the caller and passed by value; evaluation never mutates them.
/// `ratio` below 1.0 and negative `knee_db` are normalized away by
/// [`CompressorParams::clamped`] before use - a ratio under 1:1 would invert
/// the law.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct CompressorParams {
    /// Level in dB above which compression begins.
    pub threshold_db: f32,
    /// Input:output ratio applied above threshold (>= 1.0).
    pub ratio: f32,
    /// Width in dB of the soft-knee region centered on the threshold
    /// (0.0 = hard knee).
    pub knee_db: f32,
    /// Fixed gain in dB applied after compression.
    pub makeup_db: f32,
}

impl Default for CompressorParams {
    fn default() -> Self {
        Self {
            threshold_db: -20.0,
            ratio: 4.0,
            knee_db: 0.0,
            makeup_db: 0.0,
        }
    }
}

impl CompressorParams {
    /// Create a builder for configuring parameters.
    pub fn builder() -> CompressorParamsBuilder {
        CompressorParamsBuilder::default()
    }

    /// Normalized copy: ratio clamped to >= 1.0, knee clamped to >= 0.0.
    pub fn clamped(self) -> Self {
        Self {
            ratio: self.ratio.max(1.0),
            knee_db: self.knee_db.max(0.0),
            ..self
        }
    }
}

/// Builder for configuring [`CompressorParams`] with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct CompressorParamsBuilder {
    params: CompressorParams,
}

impl CompressorParamsBuilder {
    /// Set the threshold in decibels (-60.0 to 0.0 dB typical).
    pub fn threshold_db(mut self, db: f32) -> Self {
        self.params.threshold_db = db;
        self
    }

    /// Set the compression ratio (clamped to >= 1.0).
    pub fn ratio(mut self, ratio: f32) -> Self {
        self.params.ratio = ratio.max(1.0);
        self
    }

    /// Set soft knee width in decibels (0.0 = hard knee).
    pub fn knee_db(mut self, db: f32) -> Self {
        self.params.knee_db = db.max(0.0);
        self
    }

    /// Set makeup gain in decibels.
    pub fn makeup_db(mut self, db: f32) -> Self {
        self.params.makeup_db = db;
        self
    }

    /// Build the configured parameter set.
    pub fn build(self) -> CompressorParams {
        self.params.clamped()
    }
}
