//! Render requests
//!
//! One parameter bundle per chart mode. A request fully determines the
//! rendered image.

use crate::curves::{CustomEnvelope, DropShape, EdgeShape, Envelope, LegacyEnvelope, Waveform};
use crate::error::{PlotError, Result};

/// Which beat type a drop curve drives; only affects the annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeatKind {
    Binaural,
    Pulse,
    Monaural,
}

impl BeatKind {
    /// `0` binaural, `1` pulse, `2` monaural; unknown codes are binaural.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Pulse,
            2 => Self::Monaural,
            _ => Self::Binaural,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Binaural => "binaural beat",
            Self::Pulse => "pulse",
            Self::Monaural => "monaural beat",
        }
    }
}

/// Sigmoid beat transition over `drop_min` minutes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SigmoidParams {
    pub drop_min: f64,
    pub beat_start: f64,
    pub beat_target: f64,
    pub l: f64,
    pub h: f64,
    pub a: f64,
    pub b: f64,
}

impl SigmoidParams {
    pub fn validate(&self) -> Result<()> {
        require_positive(self.drop_min, "drop-min")
    }
}

/// Exponential drop transition over `drop_min` minutes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropParams {
    pub drop_min: f64,
    pub beat_start: f64,
    pub beat_target: f64,
    pub slide: bool,
    pub n_step: i64,
    pub step_len_sec: i64,
    pub kind: BeatKind,
}

impl DropParams {
    pub fn validate(&self) -> Result<()> {
        require_positive(self.drop_min, "drop-min")
    }

    pub fn shape(&self) -> DropShape {
        DropShape::from_params(self.slide, self.n_step, self.step_len_sec)
    }
}

/// Explicit isochronic gate settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateParams {
    pub start: f64,
    pub duty: f64,
    pub attack: f64,
    pub release: f64,
    pub edge: EdgeShape,
}

/// One pulse cycle of an isochronic tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoCycleParams {
    pub carrier_hz: f64,
    pub pulse_hz: f64,
    pub amp_pct: f64,
    pub waveform: Waveform,
    /// Custom gate; `None` uses the legacy threshold gate
    pub gate: Option<GateParams>,
}

impl IsoCycleParams {
    pub fn validate(&self) -> Result<()> {
        require_positive(self.pulse_hz, "pulse-hz")
    }

    /// Length of one pulse cycle in seconds
    pub fn period_sec(&self) -> f64 {
        1.0 / self.pulse_hz
    }

    pub fn amplitude(&self) -> f64 {
        (self.amp_pct / 100.0).max(0.0)
    }

    /// The envelope this request renders with
    pub fn envelope(&self) -> Box<dyn Envelope> {
        match self.gate {
            Some(g) => Box::new(CustomEnvelope::new(g.start, g.duty, g.attack, g.release, g.edge)),
            None => Box::new(LegacyEnvelope::new(self.waveform)),
        }
    }
}

/// A chart to render
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveRequest {
    Sigmoid(SigmoidParams),
    Drop(DropParams),
    IsoCycle(IsoCycleParams),
}

impl CurveRequest {
    pub fn mode_name(&self) -> &'static str {
        match self {
            Self::Sigmoid(_) => "sigmoid",
            Self::Drop(_) => "drop",
            Self::IsoCycle(_) => "iso-cycle",
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Sigmoid(p) => p.validate(),
            Self::Drop(p) => p.validate(),
            Self::IsoCycle(p) => p.validate(),
        }
    }
}

fn require_positive(value: f64, flag: &str) -> Result<()> {
    if value.is_nan() || value <= 0.0 {
        return Err(PlotError::invalid(format!("{} must be > 0", flag)));
    }
    if !value.is_finite() {
        return Err(PlotError::invalid(format!("{} must be finite", flag)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iso(pulse_hz: f64, gate: Option<GateParams>) -> IsoCycleParams {
        IsoCycleParams {
            carrier_hz: 200.0,
            pulse_hz,
            amp_pct: 80.0,
            waveform: Waveform::Sine,
            gate,
        }
    }

    #[test]
    fn test_rejects_non_positive_pulse() {
        for hz in [0.0, -1.0, f64::NAN] {
            let err = iso(hz, None).validate().unwrap_err();
            assert!(err.to_string().contains("pulse-hz"));
        }
        assert!(iso(4.0, None).validate().is_ok());
    }

    #[test]
    fn test_rejects_infinite_duration() {
        let params = SigmoidParams {
            drop_min: f64::INFINITY,
            beat_start: 10.0,
            beat_target: 4.0,
            l: 1.0,
            h: 0.0,
            a: -3.0,
            b: 7.0,
        };
        let err = CurveRequest::Sigmoid(params).validate().unwrap_err();
        assert_eq!(err.to_string(), "drop-min must be finite");
        assert!(iso(f64::INFINITY, None).validate().is_err());
    }

    #[test]
    fn test_rejects_non_positive_duration() {
        let params = SigmoidParams {
            drop_min: 0.0,
            beat_start: 10.0,
            beat_target: 4.0,
            l: 1.0,
            h: 0.0,
            a: -3.0,
            b: 7.0,
        };
        let err = CurveRequest::Sigmoid(params).validate().unwrap_err();
        assert_eq!(err.to_string(), "drop-min must be > 0");
    }

    #[test]
    fn test_amplitude_fraction() {
        assert_eq!(iso(4.0, None).amplitude(), 0.8);
        let mut quiet = iso(4.0, None);
        quiet.amp_pct = -20.0;
        assert_eq!(quiet.amplitude(), 0.0);
    }

    #[test]
    fn test_envelope_selection() {
        let gate = GateParams {
            start: 0.0,
            duty: 1.0,
            attack: 0.0,
            release: 0.0,
            edge: EdgeShape::Linear,
        };
        // Full duty gate is on everywhere, the legacy gate is not
        assert_eq!(iso(4.0, Some(gate)).envelope().gain(0.75), 1.0);
        assert_eq!(iso(4.0, None).envelope().gain(0.75), 0.0);
    }

    #[test]
    fn test_beat_kind_codes() {
        assert_eq!(BeatKind::from_code(0), BeatKind::Binaural);
        assert_eq!(BeatKind::from_code(1), BeatKind::Pulse);
        assert_eq!(BeatKind::from_code(2), BeatKind::Monaural);
        assert_eq!(BeatKind::from_code(5).label(), "binaural beat");
    }
}
