//! entrain-plot - diagnostic charts for entrainment frequency curves
//!
//! Evaluates the sigmoid, exponential drop and isochronic pulse curves
//! used when generating entrainment audio, and rasterizes labeled PNG
//! charts of them.

pub mod chart;
pub mod curves;
pub mod error;
pub mod render;
pub mod request;

pub use chart::RenderedChart;
pub use error::PlotError;
pub use render::{render, render_to_file};
pub use request::CurveRequest;
