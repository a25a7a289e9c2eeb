//! Display ranges in dB.

use crate::error::{Error, Result};

/// Floor of the canonical meter range.
pub const MIN_DB: f32 = -60.0;

/// Ceiling of the canonical meter range.
pub const MAX_DB: f32 = 0.0;

/// A bounded dB display range.
///
/// Ranges are per-consumer and deliberately not unified: level meters read
/// [`DbRange::METER`], while spectral-difference displays use the wider
/// symmetric [`DbRange::SPECTRAL_DIFF`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct DbRange {
    pub min_db: f32,
    pub max_db: f32,
}

impl DbRange {
    /// Canonical level-meter range (-60..0 dB).
    pub const METER: DbRange = DbRange {
        min_db: MIN_DB,
        max_db: MAX_DB,
    };

    /// Spectral-difference display range (-24..+24 dB differential).
    pub const SPECTRAL_DIFF: DbRange = DbRange {
        min_db: -24.0,
        max_db: 24.0,
    };

    /// Create a custom range. Fails if `min_db` is not below `max_db`.
    pub fn new(min_db: f32, max_db: f32) -> Result<Self> {
        if min_db >= max_db {
            return Err(Error::InvalidRange { min_db, max_db });
        }
        Ok(Self { min_db, max_db })
    }

    #[inline]
    pub fn clamp(self, db: f32) -> f32 {
        db.clamp(self.min_db, self.max_db)
    }

    #[inline]
    pub fn span(self) -> f32 {
        self.max_db - self.min_db
    }

    /// Position of a dB value inside the range, 0.0 at the floor and 1.0 at
    /// the ceiling. Out-of-range values are clamped first.
    #[inline]
    pub fn normalized(self, db: f32) -> f32 {
        (self.clamp(db) - self.min_db) / self.span()
    }

    /// Convert a linear amplitude to dB within this range.
    ///
    /// Silence and negative readings land on the range floor; everything
    /// else is `20*log10` clamped to the range.
    #[inline]
    pub fn linear_to_db(self, linear: f32) -> f32 {
        if linear <= 0.0 {
            self.min_db
        } else {
            self.clamp(20.0 * linear.log10())
        }
    }
}

impl Default for DbRange {
    fn default() -> Self {
        Self::METER
    }
}
