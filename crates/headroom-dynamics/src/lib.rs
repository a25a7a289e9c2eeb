//! Compressor transfer-function math for dynamics graph displays.
//!
//! Pure dB-in/dB-out curve evaluation: hard and soft knee laws, makeup gain,
//! gain-reduction readouts, and fixed-resolution curve sampling for drawing.
//! No audio processing happens here - a host engine supplies levels, a UI
//! layer renders the results.
//!
//! ```
//! use headroom_dynamics::{CompressorParams, TransferCurve};
//!
//! let curve = TransferCurve::new(
//!     CompressorParams::builder()
//!         .threshold_db(-20.0)
//!         .ratio(4.0)
//!         .build(),
//! );
//!
//! // Unity below threshold, 4:1 above.
//! assert_eq!(curve.output_db(-30.0), -30.0);
//! assert!((curve.output_db(-10.0) - (-17.5)).abs() < 0.001);
//! ```

mod curve;
mod params;

pub use curve::{CurvePoint, TransferCurve, CURVE_RESOLUTION, OUTPUT_CEILING_DB};
pub use params::{CompressorParams, CompressorParamsBuilder};
