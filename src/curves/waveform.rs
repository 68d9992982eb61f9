//! Carrier waveforms for the isochronic chart

use std::f64::consts::PI;

/// Periodic carrier shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

impl Waveform {
    /// Map a waveform code (`0..=3`) to a shape; unknown codes are sine.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Square,
            2 => Self::Triangle,
            3 => Self::Sawtooth,
            _ => Self::Sine,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sine => "sine",
            Self::Square => "square",
            Self::Triangle => "triangle",
            Self::Sawtooth => "sawtooth",
        }
    }

    /// Sample the waveform at a phase measured in cycles.
    ///
    /// The phase is reduced modulo 1 (negative phases wrap), and the
    /// result lies in `[-1, 1]`.
    pub fn sample(&self, phase01: f64) -> f64 {
        let phase01 = phase01 - phase01.floor();
        let phase = phase01 * 2.0 * PI;
        match self {
            Self::Sine => phase.sin(),
            Self::Square => {
                if phase.sin() >= 0.0 {
                    1.0
                } else {
                    -1.0
                }
            }
            Self::Triangle => {
                if phase < PI {
                    2.0 * phase / PI - 1.0
                } else {
                    3.0 - 2.0 * phase / PI
                }
            }
            Self::Sawtooth => phase / PI - 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const ALL: [Waveform; 4] = [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Triangle,
        Waveform::Sawtooth,
    ];

    #[test]
    fn test_from_code() {
        assert_eq!(Waveform::from_code(0), Waveform::Sine);
        assert_eq!(Waveform::from_code(1), Waveform::Square);
        assert_eq!(Waveform::from_code(2), Waveform::Triangle);
        assert_eq!(Waveform::from_code(3), Waveform::Sawtooth);
        assert_eq!(Waveform::from_code(7), Waveform::Sine);
        assert_eq!(Waveform::from_code(-1), Waveform::Sine);
    }

    #[test]
    fn test_bounded() {
        for wave in ALL {
            for i in 0..=1000 {
                let v = wave.sample(i as f64 / 250.0 - 2.0);
                assert!((-1.0..=1.0).contains(&v), "{:?} out of range: {}", wave, v);
            }
        }
    }

    #[test]
    fn test_periodic() {
        for wave in ALL {
            for i in 0..100 {
                let p = i as f64 / 100.0 + 0.003;
                let base = wave.sample(p);
                assert_abs_diff_eq!(wave.sample(p + 1.0), base, epsilon = 1e-9);
                assert_abs_diff_eq!(wave.sample(p + 3.0), base, epsilon = 1e-9);
                assert_abs_diff_eq!(wave.sample(p - 2.0), base, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_shapes_at_quarter_points() {
        assert_abs_diff_eq!(Waveform::Sine.sample(0.25), 1.0, epsilon = 1e-12);
        assert_eq!(Waveform::Square.sample(0.1), 1.0);
        assert_eq!(Waveform::Square.sample(0.6), -1.0);
        assert_abs_diff_eq!(Waveform::Triangle.sample(0.0), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Waveform::Triangle.sample(0.5), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Waveform::Sawtooth.sample(0.0), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Waveform::Sawtooth.sample(0.75), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_phase_wraps() {
        assert_abs_diff_eq!(
            Waveform::Sawtooth.sample(-0.25),
            Waveform::Sawtooth.sample(0.75),
            epsilon = 1e-12
        );
    }
}
