//! Sigmoid transition chart

use tracing::debug;

use super::line_chart::{LineChart, SAMPLE_INTERVALS};
use crate::chart::RenderedChart;
use crate::curves::{sigmoid_eval, SampleSeries};
use crate::error::Result;
use crate::request::SigmoidParams;

pub fn sample(p: &SigmoidParams) -> SampleSeries {
    SampleSeries::sample(p.drop_min, SAMPLE_INTERVALS, |t| {
        sigmoid_eval(t, p.drop_min, p.beat_target, p.l, p.h, p.a, p.b)
    })
}

pub fn annotations(p: &SigmoidParams) -> [String; 2] {
    [
        format!(
            "start={:.3}Hz  target={:.3}Hz  D={:.1}min",
            p.beat_start, p.beat_target, p.drop_min
        ),
        format!("l={:.4}  h={:.4}  a={:.4}  b={:.4}", p.l, p.h, p.a, p.b),
    ]
}

pub fn render(p: &SigmoidParams) -> Result<RenderedChart> {
    p.validate()?;
    let series = sample(p);
    debug!(samples = series.len(), range = ?series.value_range(), "sampled sigmoid");

    LineChart {
        series: &series,
        duration: p.drop_min,
        start: p.beat_start,
        target: p.beat_target,
        annotations: annotations(p),
    }
    .render()
}
