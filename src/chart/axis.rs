//! Axis ranges, tick placement and tick labels

/// Minimum relative padding added on each side of a data range.
const PAD_FRACTION: f64 = 0.08;
/// Absolute padding floor, for ranges with a tiny span.
const PAD_FLOOR: f64 = 0.1;
/// Spans below this are treated as flat and widened by ±1.
const DEGENERATE_SPAN: f64 = 1e-6;
/// Values this close to zero are labeled as exactly `0`.
const ZERO_SNAP: f64 = 5e-4;
/// Upper bound on ticks per axis
const MAX_TICKS: usize = 256;

/// Value range and tick spacing for one chart axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    /// Padding applied on each side of the data range
    pub pad: f64,
    pub tick_step: f64,
}

impl AxisRange {
    /// Build a range covering the sampled extrema and both must-include
    /// values, padded so none of them sits on the panel edge.
    pub fn covering(sampled_min: f64, sampled_max: f64, start: f64, target: f64) -> Self {
        let mut min = sampled_min.min(start).min(target);
        let mut max = sampled_max.max(start).max(target);

        if (max - min).abs() < DEGENERATE_SPAN {
            min -= 1.0;
            max += 1.0;
        }

        let pad = ((max - min) * PAD_FRACTION).max(PAD_FLOOR);
        min -= pad;
        max += pad;

        // Whole-number steps keep labels short
        let tick_step = ((max - min) / 8.0).round_ties_even().max(1.0);

        Self {
            min,
            max,
            pad,
            tick_step,
        }
    }

    /// Tick values: multiples of the step from the first one at or above
    /// `min`, up to a quarter step past `max`.
    pub fn ticks(&self) -> Vec<f64> {
        let first = ((self.min - 1e-9) / self.tick_step).ceil() * self.tick_step;
        let limit = self.max + self.tick_step * 0.25;
        stepped_ticks(first, self.tick_step, limit)
    }
}

/// `first, first + step, ...` while `<= limit`.
///
/// Stops early once the values stop increasing, which happens when `step`
/// is below the spacing of representable numbers at this magnitude.
fn stepped_ticks(first: f64, step: f64, limit: f64) -> Vec<f64> {
    let mut ticks: Vec<f64> = Vec::new();
    if !(first.is_finite() && step.is_finite() && step > 0.0) {
        return ticks;
    }
    for i in 0..MAX_TICKS {
        let value = first + step * i as f64;
        if value > limit || ticks.last().is_some_and(|&last| value <= last) {
            break;
        }
        ticks.push(value);
    }
    ticks
}

/// Ticks for an axis running from 0 to `max` in whole-number steps.
///
/// About ten ticks are produced, and the last tick is always `max` itself.
pub fn integer_ticks(max: f64) -> Vec<f64> {
    if !max.is_finite() || max <= 0.0 {
        return vec![0.0, 1.0];
    }

    let step = (max / 10.0).round_ties_even().max(1.0);
    let mut ticks = stepped_ticks(0.0, step, max + 1e-9);
    if ticks.is_empty() {
        ticks.push(0.0);
    }
    if ticks.last().is_some_and(|last| (last - max).abs() > 1e-9) {
        ticks.push(max);
    }
    ticks
}

/// `count + 1` ticks walking down from `top` by `step`.
pub fn descending_ticks(top: f64, step: f64, count: usize) -> Vec<f64> {
    (0..=count).map(|i| top - step * i as f64).collect()
}

/// Format a tick value with at most two decimals and no trailing zeros.
pub fn format_tick(value: f64) -> String {
    let value = if value.abs() < ZERO_SNAP { 0.0 } else { value };
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(1.00), "1");
        assert_eq!(format_tick(1.50), "1.5");
        assert_eq!(format_tick(-0.0001), "0");
        assert_eq!(format_tick(-0.0), "0");
        assert_eq!(format_tick(0.25), "0.25");
        assert_eq!(format_tick(-2.0), "-2");
        assert_eq!(format_tick(10.0), "10");
        assert_eq!(format_tick(0.001), "0");
        assert_eq!(format_tick(-0.004), "0");
    }

    #[test]
    fn test_range_includes_start_and_target() {
        let axis = AxisRange::covering(4.5, 9.5, 12.0, 2.0);
        assert!(axis.min < 2.0);
        assert!(axis.max > 12.0);
        assert_abs_diff_eq!(axis.pad, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_pad_floor() {
        let axis = AxisRange::covering(5.0, 5.5, 5.0, 5.5);
        assert_abs_diff_eq!(axis.pad, 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(axis.min, 4.9, epsilon = 1e-12);
        assert_abs_diff_eq!(axis.max, 5.6, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_range_expands() {
        let axis = AxisRange::covering(3.0, 3.0, 3.0, 3.0);
        assert!(axis.max - axis.min > 2.0);
        assert!(axis.min < 2.0 && axis.max > 4.0);
    }

    #[test]
    fn test_tick_step_whole_numbers() {
        let axis = AxisRange::covering(4.0, 10.0, 10.0, 4.0);
        assert_eq!(axis.tick_step, 1.0);
        assert_eq!(axis.ticks(), vec![4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);

        let wide = AxisRange::covering(0.0, 100.0, 0.0, 100.0);
        assert_eq!(wide.tick_step, 14.0);
        let ticks = wide.ticks();
        assert_eq!(ticks[0], 0.0);
        assert!(ticks.iter().all(|t| t % 14.0 == 0.0));
    }

    #[test]
    fn test_small_span_uses_unit_step() {
        let axis = AxisRange::covering(0.2, 0.8, 0.2, 0.8);
        assert_eq!(axis.tick_step, 1.0);
        assert_eq!(axis.ticks(), vec![1.0]);
    }

    #[test]
    fn test_integer_ticks_exact_multiple() {
        let ticks = integer_ticks(10.0);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[0], 0.0);
        assert_eq!(*ticks.last().unwrap(), 10.0);
    }

    #[test]
    fn test_integer_ticks_append_domain_end() {
        assert_eq!(
            integer_ticks(7.5),
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 7.5]
        );
        // round half to even: 2.5 -> 2
        let ticks = integer_ticks(25.0);
        assert_eq!(ticks[1], 2.0);
        assert_eq!(ticks[ticks.len() - 2], 24.0);
        assert_eq!(*ticks.last().unwrap(), 25.0);
    }

    #[test]
    fn test_integer_ticks_small_and_empty_domains() {
        assert_eq!(integer_ticks(0.0), vec![0.0, 1.0]);
        assert_eq!(integer_ticks(-3.0), vec![0.0, 1.0]);
        assert_eq!(integer_ticks(0.4), vec![0.0, 0.4]);
    }

    #[test]
    fn test_integer_ticks_non_finite_domain() {
        assert_eq!(integer_ticks(f64::INFINITY), vec![0.0, 1.0]);
        assert_eq!(integer_ticks(f64::NAN), vec![0.0, 1.0]);
    }

    #[test]
    fn test_ticks_terminate_when_step_below_precision() {
        // 1e17 +/- 1 rounds back to 1e17, so the unit step cannot advance
        let axis = AxisRange::covering(1e17, 1e17, 1e17, 1e17);
        assert_eq!(axis.tick_step, 1.0);
        assert_eq!(axis.ticks(), vec![1e17]);

        let ticks = integer_ticks(1e17);
        assert_eq!(ticks.len(), 11);
        assert_eq!(*ticks.last().unwrap(), 1e17);
    }

    #[test]
    fn test_ticks_non_finite_range() {
        let axis = AxisRange::covering(f64::INFINITY, f64::INFINITY, 1.0, 2.0);
        assert!(axis.ticks().len() <= MAX_TICKS);
    }

    #[test]
    fn test_descending_ticks() {
        let ticks = descending_ticks(1.0, 0.2, 10);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[0], 1.0);
        assert_abs_diff_eq!(ticks[10], -1.0, epsilon = 1e-12);
        assert_eq!(format_tick(ticks[5]), "0");
    }
}
