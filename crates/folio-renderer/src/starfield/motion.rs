//! Starfield motion as pure functions of elapsed time.
//!
//! No mutable rotation state exists anywhere; every frame derives its
//! angles from the clock, so pausing or resizing never desyncs the
//! animation.

/// Fixed scene tilt around the Z axis, radians.
pub const SCENE_TILT: f32 = std::f32::consts::FRAC_PI_4;

/// Drift angular velocities, radians per second.
const DRIFT_RATE_X: f32 = 1.0 / 10.0;
const DRIFT_RATE_Y: f32 = 1.0 / 15.0;

/// Drift rotation angles (X, Y) after `elapsed_secs` seconds.
pub fn drift_rotation(elapsed_secs: f32) -> (f32, f32) {
    (-elapsed_secs * DRIFT_RATE_X, -elapsed_secs * DRIFT_RATE_Y)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drift_starts_at_zero() {
        let (rx, ry) = drift_rotation(0.0);
        assert_eq!(rx, 0.0);
        assert_eq!(ry, 0.0);
    }

    #[test]
    fn drift_is_linear_in_time() {
        let (rx1, ry1) = drift_rotation(10.0);
        let (rx2, ry2) = drift_rotation(20.0);
        assert!((rx2 - 2.0 * rx1).abs() < 1e-6);
        assert!((ry2 - 2.0 * ry1).abs() < 1e-6);
    }

    #[test]
    fn drift_rates_match_site_timing() {
        // Ten seconds of drift is one radian around X, two thirds around Y.
        let (rx, ry) = drift_rotation(10.0);
        assert!((rx - (-1.0)).abs() < 1e-6);
        assert!((ry - (-10.0 / 15.0)).abs() < 1e-6);
    }

    #[test]
    fn scene_tilt_is_quarter_turn() {
        assert!((SCENE_TILT - std::f32::consts::PI / 4.0).abs() < 1e-6);
    }
}
