//! Stereo field analysis for vector scope displays.
//!
//! Given paired left/right sample buffers, computes the phase correlation
//! coefficient, width/balance statistics, and per-sample display coordinates
//! in Lissajous (mid/side, rotated 45 degrees) or standard XY projection.
//! All functions operate on raw `&[f32]` buffers and never retain references
//! to them.
//!
//! ```
//! use headroom_stereo::{correlation, project, ScopeMode};
//!
//! let left = [0.5f32, -0.25, 0.75];
//! let right = left;
//!
//! // Identical channels are fully correlated...
//! assert!((correlation(&left, &right) - 1.0).abs() < 0.0001);
//!
//! // ...and mono content sits on the vertical axis in Lissajous mode.
//! let point = project(0.5, 0.5, ScopeMode::Lissajous, 1.0);
//! assert!(point.x.abs() < 0.0001);
//! ```

mod correlation;
mod error;
mod projection;

pub use correlation::{correlation, correlation_strict, CorrelationMeter, StereoField};
pub use error::{Error, Result};
pub use projection::{project, project_buffer, project_buffer_into, ScopeMode, ScopePoint};
