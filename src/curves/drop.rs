//! Exponential "drop" transition
//!
//! Interpolates exponentially from a fixed baseline towards the target
//! frequency, either continuously or as a staircase of equal-length steps.

/// Frequency the drop curve starts from at `t = 0`.
pub const DROP_BASELINE_HZ: f64 = 10.0;

/// How the drop curve advances over time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropShape {
    /// Smooth exponential slide
    Continuous,
    /// `n_step` plateaus, each `step_len_sec` seconds long
    Stepped { n_step: u32, step_len_sec: u32 },
}

impl DropShape {
    /// Build the shape from raw flags.
    ///
    /// Stepping needs more than one step and a positive step length;
    /// anything else falls back to the continuous slide.
    pub fn from_params(slide: bool, n_step: i64, step_len_sec: i64) -> Self {
        if !slide && n_step > 1 && step_len_sec > 0 {
            Self::Stepped {
                n_step: n_step.min(u32::MAX as i64) as u32,
                step_len_sec: step_len_sec.min(u32::MAX as i64) as u32,
            }
        } else {
            Self::Continuous
        }
    }

    pub fn is_stepped(&self) -> bool {
        matches!(self, Self::Stepped { .. })
    }
}

/// Evaluate the drop curve at `t` minutes for a transition lasting `d` minutes.
///
/// `target` must be positive for the curve to be defined; non-positive
/// targets yield NaN.
pub fn drop_eval(t: f64, d: f64, target: f64, shape: DropShape) -> f64 {
    if d <= 0.0 {
        return target;
    }
    let t = t.clamp(0.0, d);

    let fraction = match shape {
        DropShape::Stepped { n_step, step_len_sec } => {
            let idx = ((t * 60.0) / step_len_sec as f64).floor() as u64;
            let idx = idx.min(n_step as u64 - 1);
            idx as f64 / (n_step - 1) as f64
        }
        DropShape::Continuous => t / d,
    };

    exp_interp(target, fraction)
}

/// `baseline * (target/baseline)^fraction`, pinned at both ends.
fn exp_interp(target: f64, fraction: f64) -> f64 {
    if fraction <= 0.0 {
        return DROP_BASELINE_HZ;
    }
    if fraction >= 1.0 {
        return target;
    }
    DROP_BASELINE_HZ * ((target / DROP_BASELINE_HZ).ln() * fraction).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_continuous_endpoints_exact() {
        for &(d, target) in &[(10.0, 4.0), (3.5, 0.7), (60.0, 25.0)] {
            assert_eq!(drop_eval(0.0, d, target, DropShape::Continuous), DROP_BASELINE_HZ);
            assert_eq!(drop_eval(d, d, target, DropShape::Continuous), target);
        }
    }

    #[test]
    fn test_continuous_is_geometric_midpoint() {
        // Halfway through, the value is the geometric mean of 10 and target
        let v = drop_eval(5.0, 10.0, 2.5, DropShape::Continuous);
        assert_relative_eq!(v, 5.0, max_relative = 1e-12);
    }

    #[test]
    fn test_time_is_clamped() {
        let shape = DropShape::Continuous;
        assert_eq!(drop_eval(-3.0, 10.0, 4.0, shape), DROP_BASELINE_HZ);
        assert_eq!(drop_eval(99.0, 10.0, 4.0, shape), 4.0);
    }

    #[test]
    fn test_degenerate_duration_returns_target() {
        assert_eq!(drop_eval(1.0, 0.0, 4.0, DropShape::Continuous), 4.0);
        assert_eq!(drop_eval(1.0, -2.0, 4.0, DropShape::Continuous), 4.0);
    }

    #[test]
    fn test_invalid_step_params_fall_back() {
        assert_eq!(DropShape::from_params(true, 10, 60), DropShape::Continuous);
        assert_eq!(DropShape::from_params(false, 1, 60), DropShape::Continuous);
        assert_eq!(DropShape::from_params(false, 10, 0), DropShape::Continuous);
        assert!(DropShape::from_params(false, 10, 60).is_stepped());
    }

    #[test]
    fn test_stepped_staircase_descending() {
        let shape = DropShape::from_params(false, 10, 60);
        let d = 10.0;
        let values: Vec<f64> = (0..=2000)
            .map(|i| drop_eval(d * i as f64 / 2000.0, d, 4.0, shape))
            .collect();

        // target < baseline: non-increasing
        assert!(values.windows(2).all(|w| w[1] <= w[0]));

        let mut distinct = values.clone();
        distinct.dedup();
        assert_eq!(distinct.len(), 10);
        assert_eq!(values[0], DROP_BASELINE_HZ);
        assert_eq!(*values.last().unwrap(), 4.0);
    }

    #[test]
    fn test_stepped_staircase_ascending() {
        let shape = DropShape::from_params(false, 4, 30);
        let d = 2.0;
        let values: Vec<f64> = (0..=2000)
            .map(|i| drop_eval(d * i as f64 / 2000.0, d, 20.0, shape))
            .collect();

        assert!(values.windows(2).all(|w| w[1] >= w[0]));

        let mut distinct = values.clone();
        distinct.dedup();
        assert_eq!(distinct.len(), 4);
    }
}
