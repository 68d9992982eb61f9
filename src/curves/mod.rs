//! Curve evaluators
//!
//! Pure functions mapping a time or phase value plus parameters to a
//! curve value, for the sigmoid, drop and isochronic curve families.

mod drop;
mod edge;
mod envelope;
mod series;
mod sigmoid;
mod waveform;

pub use drop::{drop_eval, DropShape, DROP_BASELINE_HZ};
pub use edge::EdgeShape;
pub use envelope::{CustomEnvelope, Envelope, LegacyEnvelope, LEGACY_GATE_THRESHOLD};
pub use series::SampleSeries;
pub use sigmoid::sigmoid_eval;
pub use waveform::Waveform;
