//! Centralized error type for the headroom umbrella crate.
//!
//! Wraps member-crate errors so `?` propagates naturally across crate
//! boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("metering: {0}")]
    Metering(#[from] headroom_metering::Error),

    #[error("stereo: {0}")]
    Stereo(#[from] headroom_stereo::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
