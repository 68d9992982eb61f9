//! Isochronic pulse envelopes
//!
//! An envelope maps the pulse phase (in cycles) to a gain in `[0, 1]`.
//! Two gates exist: an explicit duty-cycle gate with shaped ramps, and the
//! older gate derived from the carrier waveform itself.

use super::{EdgeShape, Waveform};

/// Sample level above which the legacy gate opens.
pub const LEGACY_GATE_THRESHOLD: f64 = 0.3;

/// Gain curve applied to the carrier over one pulse cycle
pub trait Envelope {
    /// Gain at `phase` cycles into the pulse
    fn gain(&self, phase: f64) -> f64;

    /// Short human-readable description for chart annotations
    fn describe(&self) -> String;
}

/// Duty-cycle gate with configurable attack and release ramps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomEnvelope {
    /// Phase at which the gate opens
    pub start: f64,
    /// Fraction of the cycle the gate stays open
    pub duty: f64,
    /// Fraction of the open window spent ramping up
    pub attack: f64,
    /// Fraction of the open window spent ramping down
    pub release: f64,
    pub edge: EdgeShape,
}

impl CustomEnvelope {
    pub fn new(start: f64, duty: f64, attack: f64, release: f64, edge: EdgeShape) -> Self {
        Self {
            start,
            duty,
            attack,
            release,
            edge,
        }
    }

    /// Position inside the open window, or `None` when the gate is closed.
    ///
    /// Windows running past the end of the cycle continue at phase 0.
    fn window_position(&self, phase: f64) -> Option<f64> {
        let end = self.start + self.duty;
        let u = if end <= 1.0 {
            (self.start..end)
                .contains(&phase)
                .then(|| (phase - self.start) / self.duty)
        } else if phase >= self.start {
            Some((phase - self.start) / self.duty)
        } else if phase < end - 1.0 {
            Some((phase + (1.0 - self.start)) / self.duty)
        } else {
            None
        };
        u.filter(|u| *u > 0.0 && *u < 1.0)
    }
}

impl Envelope for CustomEnvelope {
    fn gain(&self, phase: f64) -> f64 {
        let phase = phase - phase.floor();
        if self.duty >= 1.0 {
            return 1.0;
        }

        let Some(u) = self.window_position(phase) else {
            return 0.0;
        };

        if self.attack > 0.0 && u < self.attack {
            return self.edge.apply(u / self.attack);
        }
        if u <= 1.0 - self.release {
            return 1.0;
        }
        if self.release > 0.0 {
            return self.edge.apply((1.0 - u) / self.release);
        }
        0.0
    }

    fn describe(&self) -> String {
        format!(
            "I:s={:.4} d={:.4} a={:.2} r={:.2} e={}",
            self.start,
            self.duty,
            self.attack,
            self.release,
            self.edge.code()
        )
    }
}

/// Gate derived from the carrier waveform: open wherever the waveform
/// rises above [`LEGACY_GATE_THRESHOLD`], smoothed with smoothstep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegacyEnvelope {
    pub waveform: Waveform,
}

impl LegacyEnvelope {
    pub fn new(waveform: Waveform) -> Self {
        Self { waveform }
    }
}

impl Envelope for LegacyEnvelope {
    fn gain(&self, phase: f64) -> f64 {
        let wave = self.waveform.sample(phase);
        if wave <= LEGACY_GATE_THRESHOLD {
            return 0.0;
        }
        let x = (wave - LEGACY_GATE_THRESHOLD) / (1.0 - LEGACY_GATE_THRESHOLD);
        EdgeShape::Smoothstep.apply(x)
    }

    fn describe(&self) -> String {
        "I=default threshold gate".to_string()
    }
}
