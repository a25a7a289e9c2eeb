//! Error types for headroom-metering.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("invalid dB range: min {min_db} must be below max {max_db}")]
    InvalidRange { min_db: f32, max_db: f32 },
}

pub type Result<T> = core::result::Result<T, Error>;
