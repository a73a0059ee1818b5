//! Easing curves for timed animations.
//!
//! Every curve maps normalized progress `t` in [0, 1] to an eased value
//! in [0, 1]. Inputs outside the range are clamped so callers can feed
//! raw `elapsed / duration` ratios without guarding.

/// Easing curve selection for the value-reveal counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant-rate progression.
    #[default]
    Linear,
    /// Cubic ease-out: fast start, smooth landing.
    CubicOut,
}

impl Easing {
    /// Apply the curve to normalized progress.
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Cubic ease-out over f32, for render-side interpolation (particle
/// travel, carousel slide) where the value never feeds back into state.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        assert_eq!(Easing::Linear.apply(0.0), 0.0);
        assert_eq!(Easing::Linear.apply(1.0), 1.0);
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
    }

    #[test]
    fn test_cubic_out_endpoints() {
        assert_eq!(Easing::CubicOut.apply(0.0), 0.0);
        assert_eq!(Easing::CubicOut.apply(1.0), 1.0);
        // Ease-out is always ahead of linear in the interior
        assert!(Easing::CubicOut.apply(0.5) > 0.5);
    }

    #[test]
    fn test_clamping() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::CubicOut.apply(2.0), 1.0);
        assert_eq!(ease_out_cubic(-0.5), 0.0);
        assert_eq!(ease_out_cubic(1.5), 1.0);
    }

    #[test]
    fn test_cubic_out_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = Easing::CubicOut.apply(i as f64 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }
}
