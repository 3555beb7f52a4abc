//! Scalar helpers shared by the drive models.

/// Smallest usable smoothing window in seconds; shorter requests are
/// clamped up to keep the integrator finite.
pub const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Smallest input range `remap` will divide by.
const MIN_REMAP_RANGE: f32 = 1e-6;

/// Linearly remap `value` from `[min1, max1]` to `[min2, max2]`.
///
/// Exact at both endpoints. A degenerate input range returns `min2` instead
/// of a non-finite value.
#[must_use]
pub fn remap(value: f32, min1: f32, max1: f32, min2: f32, max2: f32) -> f32 {
    if (max1 - min1).abs() < MIN_REMAP_RANGE {
        return min2;
    }

    min2 + (value - min1) * ((max2 - min2) / (max1 - min1))
}

/// True when `value` is numerically indistinguishable from zero.
#[must_use]
pub fn approx_zero(value: f32) -> bool {
    value.abs() < 1e-5
}

/// Critically damped approach of a scalar toward a target.
///
/// Carries the integrator's derivative memory across ticks. The output never
/// overshoots: once it reaches the target it stays there until the target
/// moves.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SmoothDamp {
    /// Rate-of-change memory from the previous tick
    pub velocity: f32,
}

impl SmoothDamp {
    /// Step `current` toward `target` over `dt` seconds.
    ///
    /// `smooth_time` is roughly the time to close most of the gap, clamped to
    /// [`MIN_SMOOTH_TIME`]. `dt <= 0` returns `current` unchanged.
    pub fn advance(&mut self, current: f32, target: f32, smooth_time: f32, dt: f32) -> f32 {
        if dt <= 0.0 {
            return current;
        }

        let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
        let omega = 2.0 / smooth_time;
        let x = omega * dt;
        let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

        let change = current - target;
        let temp = (self.velocity + omega * change) * dt;
        self.velocity = (self.velocity - omega * temp) * decay;
        let mut output = target + (change + temp) * decay;

        // clamp to the target side so a large step can't overshoot
        if (target - current > 0.0) == (output > target) {
            output = target;
            self.velocity = 0.0;
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remap_is_exact_at_endpoints() {
        assert_eq!(remap(0.0, 0.0, 1.0, 60.0, 75.0), 60.0);
        assert_eq!(remap(1.0, 0.0, 1.0, 60.0, 75.0), 75.0);
    }

    #[test]
    fn remap_is_linear_between_endpoints() {
        assert!((remap(0.5, 0.0, 1.0, 60.0, 75.0) - 67.5).abs() < 1e-6);
    }

    #[test]
    fn remap_degenerate_range_returns_lower_output() {
        assert_eq!(remap(3.0, 5.0, 5.0, 10.0, 20.0), 10.0);
    }

    #[test]
    fn smooth_damp_converges_without_overshoot() {
        let mut damp = SmoothDamp::default();
        let mut value = 0.0;
        let mut prev = value;

        for _ in 0..5_000 {
            value = damp.advance(value, 50.0, 1.5, 1.0 / 60.0);
            assert!(value >= prev, "approach must be monotone");
            assert!(value <= 50.0, "approach must not overshoot");
            prev = value;
        }

        assert!((value - 50.0).abs() < 0.5);
    }

    #[test]
    fn smooth_damp_is_idempotent_at_target() {
        let mut damp = SmoothDamp::default();
        let value = damp.advance(50.0, 50.0, 1.5, 1.0 / 60.0);
        assert_eq!(value, 50.0);
        assert_eq!(damp.velocity, 0.0);

        let value = damp.advance(value, 50.0, 1.5, 1.0 / 60.0);
        assert_eq!(value, 50.0);
    }

    #[test]
    fn smooth_damp_zero_dt_is_a_no_op() {
        let mut damp = SmoothDamp::default();
        assert_eq!(damp.advance(10.0, 50.0, 1.5, 0.0), 10.0);
    }

    #[test]
    fn smooth_damp_clamps_tiny_smoothing_windows() {
        let mut damp = SmoothDamp::default();
        let value = damp.advance(10.0, 50.0, 0.0, 1.0 / 60.0);
        assert!(value.is_finite());
        assert!(value > 10.0 && value <= 50.0);
    }
}
