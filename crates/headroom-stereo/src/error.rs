//! Error types for headroom-stereo.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("stereo channel length mismatch: left has {left} samples, right has {right}")]
    ChannelLengthMismatch { left: usize, right: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
