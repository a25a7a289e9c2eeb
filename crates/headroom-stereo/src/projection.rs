//! Per-sample display projection for the vector scope.

use core::f32::consts::FRAC_1_SQRT_2;

/// How stereo sample pairs map to scope coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum ScopeMode {
    /// Mid/side axes, rotated 45 degrees: mono content draws a vertical
    /// line, side content a horizontal one.
    #[default]
    Lissajous,
    /// Axis-aligned left/right: right on x, left on y.
    StandardXy,
}

/// One projected display-space point.
///
/// y grows downward (screen convention), so louder mid/left content moves
/// up on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct ScopePoint {
    pub x: f32,
    pub y: f32,
}

/// Project one stereo sample pair to display space.
#[inline]
pub fn project(left: f32, right: f32, mode: ScopeMode, scale: f32) -> ScopePoint {
    match mode {
        ScopeMode::Lissajous => {
            let mid = (left + right) * FRAC_1_SQRT_2;
            let side = (left - right) * FRAC_1_SQRT_2;
            ScopePoint {
                x: side * scale,
                y: -mid * scale,
            }
        }
        ScopeMode::StandardXy => ScopePoint {
            x: right * scale,
            y: -left * scale,
        },
    }
}

/// Project a stereo buffer to display points.
///
/// Mismatched lengths truncate to the shorter channel; empty input yields
/// no points.
pub fn project_buffer(left: &[f32], right: &[f32], mode: ScopeMode, scale: f32) -> Vec<ScopePoint> {
    let mut points = Vec::new();
    project_buffer_into(left, right, mode, scale, &mut points);
    points
}

/// Like [`project_buffer`], but reuses the caller's vector (cleared first)
/// so per-frame projection stays allocation-free once warm.
pub fn project_buffer_into(
    left: &[f32],
    right: &[f32],
    mode: ScopeMode,
    scale: f32,
    out: &mut Vec<ScopePoint>,
) {
    let n = left.len().min(right.len());
    out.clear();
    out.reserve(n);
    for i in 0..n {
        out.push(project(left[i], right[i], mode, scale));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lissajous_mono_is_vertical() {
        for sample in [-1.0f32, -0.3, 0.5, 1.0] {
            let point = project(sample, sample, ScopeMode::Lissajous, 1.0);
            assert!(
                point.x.abs() < 0.0001,
                "mono content should have x ~0, got {}",
                point.x
            );
        }
    }

    #[test]
    fn test_lissajous_mono_points_up_for_positive_samples() {
        let point = project(0.5, 0.5, ScopeMode::Lissajous, 1.0);
        // mid = 1.0/sqrt(2) ~ 0.707, negated for screen space.
        assert!((point.y - (-0.70710677)).abs() < 0.0001, "got {}", point.y);
    }

    #[test]
    fn test_lissajous_side_only_is_horizontal() {
        let point = project(0.5, -0.5, ScopeMode::Lissajous, 1.0);
        assert!(point.y.abs() < 0.0001, "side content should have y ~0");
        assert!((point.x - 0.70710677).abs() < 0.0001, "got {}", point.x);
    }

    #[test]
    fn test_standard_xy_axes() {
        let point = project(0.25, 0.75, ScopeMode::StandardXy, 1.0);
        assert_eq!(point.x, 0.75);
        assert_eq!(point.y, -0.25);
    }

    #[test]
    fn test_scale_applies_to_both_axes() {
        let unit = project(0.5, -0.5, ScopeMode::Lissajous, 1.0);
        let doubled = project(0.5, -0.5, ScopeMode::Lissajous, 2.0);
        assert!((doubled.x - unit.x * 2.0).abs() < 0.0001);
        assert!((doubled.y - unit.y * 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_buffer_projection_truncates() {
        let left = [0.1f32, 0.2, 0.3];
        let right = [0.1f32, 0.2];
        let points = project_buffer(&left, &right, ScopeMode::StandardXy, 1.0);
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].x, 0.2);
    }

    #[test]
    fn test_empty_buffers_yield_no_points() {
        assert!(project_buffer(&[], &[], ScopeMode::Lissajous, 1.0).is_empty());
    }

    #[test]
    fn test_into_variant_clears_previous_points() {
        let mut out = vec![ScopePoint { x: 9.0, y: 9.0 }; 8];
        project_buffer_into(&[0.5], &[0.5], ScopeMode::Lissajous, 1.0, &mut out);
        assert_eq!(out.len(), 1);
        assert!(out[0].x.abs() < 0.0001);
    }
}
