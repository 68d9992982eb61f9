//! Ramp shapes for envelope attack and release edges

/// Interpolation curve used on envelope ramps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeShape {
    /// Hard switch
    Step,
    Linear,
    /// Cubic `3x^2 - 2x^3`
    #[default]
    Smoothstep,
    /// Quintic `6x^5 - 15x^4 + 10x^3`
    Smootherstep,
}

impl EdgeShape {
    /// Map an edge code to a shape; unknown codes use smoothstep.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Step,
            1 => Self::Linear,
            3 => Self::Smootherstep,
            _ => Self::Smoothstep,
        }
    }

    /// Code written in annotations; inverse of [`EdgeShape::from_code`]
    pub fn code(&self) -> u8 {
        match self {
            Self::Step => 0,
            Self::Linear => 1,
            Self::Smoothstep => 2,
            Self::Smootherstep => 3,
        }
    }

    /// Shape a ramp position, clamping `x` to `[0, 1]`.
    pub fn apply(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Step => 1.0,
            Self::Linear => x,
            Self::Smoothstep => x * x * (3.0 - 2.0 * x),
            Self::Smootherstep => x * x * x * (x * (x * 6.0 - 15.0) + 10.0),
        }
    }
}
