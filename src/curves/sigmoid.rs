//! Sigmoid (tanh) frequency transition

/// Evaluate the sigmoid transition at `t` minutes.
///
/// Returns `a * tanh(l * (t - d/2 - h)) + b` before the end of the
/// transition and exactly `target` from `t >= d` onwards.
pub fn sigmoid_eval(t: f64, d: f64, target: f64, l: f64, h: f64, a: f64, b: f64) -> f64 {
    if t >= d {
        return target;
    }
    a * (l * (t - d / 2.0 - h)).tanh() + b
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_plateau_after_duration() {
        for &t in &[10.0, 10.5, 42.0, 1e9] {
            assert_eq!(sigmoid_eval(t, 10.0, 4.0, 1.0, 0.0, -3.0, 7.0), 4.0);
        }
    }

    #[test]
    fn test_midpoint_is_offset() {
        // tanh(0) == 0 at t = d/2 + h
        let v = sigmoid_eval(6.0, 10.0, 4.0, 1.0, 1.0, -3.0, 7.0);
        assert_abs_diff_eq!(v, 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_start_approaches_upper_asymptote() {
        // a < 0: tanh(-5) ~ -1, so value ~ b - a
        let v = sigmoid_eval(0.0, 10.0, 4.0, 1.0, 0.0, -3.0, 7.0);
        assert_abs_diff_eq!(v, 10.0, epsilon = 1e-3);
    }

    #[test]
    fn test_negative_time_is_total() {
        let v = sigmoid_eval(-100.0, 10.0, 4.0, 1.0, 0.0, -3.0, 7.0);
        assert!(v.is_finite());
    }
}
