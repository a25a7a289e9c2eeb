//! # Headroom - display-side signal math for DAW mixer UIs
//!
//! The numeric layer between an audio engine and a mixer's widgets: the
//! engine supplies parameter and level values, these crates turn them into
//! the numbers a UI renders every display frame (~30 Hz), and the rendering
//! itself stays out of scope.
//!
//! ## Architecture
//!
//! Headroom is an umbrella crate coordinating three independent components:
//!
//! - **headroom-dynamics** - compressor transfer curves (hard/soft knee,
//!   makeup gain, gain-reduction readouts, curve sampling)
//! - **headroom-metering** - level ballistics (dB conversion, instant
//!   attack / timed fall, one-pole gain-reduction smoothing, lock-free
//!   snapshot cells)
//! - **headroom-stereo** - stereo field analysis (phase correlation,
//!   width/balance, Lissajous and XY scope projection)
//!
//! None of the components depends on another; [`ChannelMonitor`] ties one
//! of each together per mixer strip.
//!
//! ## Quick start
//!
//! ```
//! use headroom::prelude::*;
//!
//! let mut monitor = ChannelMonitor::builder()
//!     .sample_rate(48000.0)
//!     .params(
//!         CompressorParams::builder()
//!             .threshold_db(-20.0)
//!             .ratio(4.0)
//!             .knee_db(6.0)
//!             .build(),
//!     )
//!     .build();
//!
//! // Once per display frame:
//! let left = vec![0.25f32; 512];
//! let right = vec![0.25f32; 512];
//! let snapshot = monitor.update(&left, &right, 1.0 / 30.0);
//! let scope = monitor.scope_points(&left, &right);
//!
//! assert!(snapshot.level_left_db < 0.0);
//! assert_eq!(scope.len(), 512);
//! ```

/// Re-export of headroom-dynamics for direct access.
pub use headroom_dynamics as dynamics;

/// Re-export of headroom-metering for direct access.
pub use headroom_metering as metering;

/// Re-export of headroom-stereo for direct access.
pub use headroom_stereo as stereo;

pub use headroom_dynamics::{
    CompressorParams, CompressorParamsBuilder, CurvePoint, TransferCurve, CURVE_RESOLUTION,
    OUTPUT_CEILING_DB,
};

pub use headroom_metering::{
    db_to_linear, linear_to_db, AtomicDb, AtomicStripLevels, DbRange, GainReductionMeter,
    PeakMeter, StripLevels, FALL_RATE_DB_PER_SEC, MAX_DB, MIN_DB,
};

pub use headroom_stereo::{
    correlation, correlation_strict, project, project_buffer, CorrelationMeter, ScopeMode,
    ScopePoint, StereoField,
};

mod builder;
mod error;
mod monitor;

pub use builder::ChannelMonitorBuilder;
pub use error::{Error, Result};
pub use monitor::{ChannelMonitor, StripSnapshot};

/// Convenience prelude for common imports.
pub mod prelude {
    pub use crate::{
        correlation, linear_to_db, project, ChannelMonitor, ChannelMonitorBuilder,
        CompressorParams, DbRange, GainReductionMeter, PeakMeter, ScopeMode, ScopePoint,
        StereoField, StripSnapshot, TransferCurve,
    };
}
